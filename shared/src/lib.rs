//! Shared types for the order notification and report generation exercises
//!
//! Contains only truly cross-system pieces: the delivery result currency both
//! systems hand back, the tag registry that backs every factory, and logging
//! setup. Component-internal types live in their respective crates.

pub mod errors;
pub mod logging;
pub mod registry;
pub mod types;

pub use errors::*;
pub use registry::Registry;
pub use types::*;
