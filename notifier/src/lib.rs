//! Order notification system
//!
//! Processes incoming orders by fanning a confirmation out over the channels
//! the order asks for (email, SMS, push). Channel transports are strategies
//! resolved through a factory, and every send is appended to an in-memory
//! history.

pub mod channels;
pub mod error;
pub mod factory;
pub mod history;
pub mod processor;
pub mod traits;
pub mod types;

// Re-export main types
pub use error::{NotifierError, NotifierResult};
pub use factory::NotificationFactory;
pub use history::HistoryManager;
pub use processor::OrderProcessor;
pub use traits::NotificationStrategy;
pub use types::*;
