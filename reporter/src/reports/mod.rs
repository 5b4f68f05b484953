//! Concrete report content strategies
//!
//! Each variant supplies only `title` and `body`; the skeleton lives on the
//! ReportStrategy trait.

pub mod financial;
pub mod inventory;
pub mod sales;

pub use financial::FinancialReport;
pub use inventory::InventoryReport;
pub use sales::SalesReport;
