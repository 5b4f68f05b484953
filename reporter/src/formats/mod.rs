//! Concrete output format strategies
//!
//! Exercise stubs, not real binary encoders. Each render is a pure
//! transformation of the assembled content.

pub mod excel;
pub mod html;
pub mod pdf;

pub use excel::ExcelFormat;
pub use html::HtmlFormat;
pub use pdf::PdfFormat;
