//! Common types and traits for all procurement documents

pub mod document;
pub mod record;

// Re-exports
pub use document::ErpDocument;
pub use record::{InvoiceTotals, ProcurementRecord};
