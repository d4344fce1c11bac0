pub mod aggregate;

pub use aggregate::{PurchaseOrder, PurchaseOrderItem, PurchaseReceiptRequest, ReceiptLine};
