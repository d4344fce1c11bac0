pub mod aggregate;

pub use aggregate::PurchaseInvoice;
