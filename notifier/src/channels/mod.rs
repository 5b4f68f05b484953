//! Concrete notification channel implementations
//!
//! Each channel follows the NotificationStrategy trait. Real transports
//! would live behind the same seam; here they are simulated as log lines.

pub mod email;
pub mod push;
pub mod sms;

pub use email::EmailChannel;
pub use push::PushChannel;
pub use sms::SmsChannel;
