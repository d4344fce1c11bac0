use serde::{Deserialize, Serialize};

/// Вид закупочного документа, для которого строится проекция
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    MaterialRequest,
    PurchaseOrder,
}

impl DocumentKind {
    /// Тип документа на стороне ERP
    pub fn doctype(&self) -> &'static str {
        match self {
            DocumentKind::MaterialRequest => "Material Request",
            DocumentKind::PurchaseOrder => "Purchase Order",
        }
    }
}
