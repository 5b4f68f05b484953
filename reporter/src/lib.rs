//! Report generation system
//!
//! Builds a report from a typed parameter bag (template method over a
//! section builder), renders it into a target format, and hands it to a
//! delivery channel. Each axis — report, format, delivery — is a strategy
//! family resolved through its own factory.

pub mod builder;
pub mod delivery;
pub mod error;
pub mod factory;
pub mod formats;
pub mod history;
pub mod reports;
pub mod system;
pub mod traits;
pub mod types;

// Re-export main types
pub use builder::ReportBuilder;
pub use error::{ReporterError, ReporterResult};
pub use factory::{DeliveryFactory, FormatFactory, ReportFactory};
pub use history::ReportHistory;
pub use system::ReportSystem;
pub use traits::{DeliveryStrategy, FormatStrategy, ReportStrategy};
pub use types::*;
