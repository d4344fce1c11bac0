pub mod a001_material_request;
pub mod a002_purchase_order;
pub mod a003_purchase_invoice;
pub mod common;
