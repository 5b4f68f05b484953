//! Concrete delivery channel implementations
//!
//! Simulated transports behind the DeliveryStrategy seam; a real deployment
//! substitutes these without touching the report system.

pub mod cloud;
pub mod download;
pub mod email;

pub use cloud::CloudDelivery;
pub use download::DownloadDelivery;
pub use email::EmailDelivery;
