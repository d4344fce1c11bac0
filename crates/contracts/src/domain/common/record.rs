use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ErpDocument;
use crate::domain::a001_material_request::MaterialRequest;
use crate::domain::a002_purchase_order::PurchaseOrder;
use crate::domain::a003_purchase_invoice::PurchaseInvoice;
use crate::enums::DocumentKind;

/// Итоги связанного счёта поставщика
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub grand_total: Decimal,
    pub outstanding_amount: Decimal,
}

impl From<&PurchaseInvoice> for InvoiceTotals {
    fn from(invoice: &PurchaseInvoice) -> Self {
        Self {
            grand_total: invoice.grand_total,
            outstanding_amount: invoice.outstanding_amount,
        }
    }
}

/// Снимок закупочного документа, на основе которого строится проекция.
///
/// Запись только читается: проекция никогда не изменяет её и не обращается
/// к серверу.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcurementRecord {
    /// Идентификатор документа, присвоенный сервером
    pub id: String,
    pub kind: DocumentKind,
    /// Статус документа как его вернул сервер ("Draft", "To Bill", ...)
    pub raw_status: String,
    /// Состояние workflow (только для заявок на материалы)
    pub workflow_state: Option<String>,
    /// Создатель документа (email или имя пользователя)
    pub owner: String,
    /// Район; используется для разграничения доступа, не для проекции
    pub district: Option<String>,
    pub company: Option<String>,
    /// Процент получения, 0..100 (только для заказов)
    pub per_received: Option<f64>,
    /// Процент выставленных счетов, 0..100 (только для заказов)
    pub per_billed: Option<f64>,
    /// Связанные счета; пусто, если ещё не загружены
    #[serde(default)]
    pub linked_invoices: Vec<InvoiceTotals>,
}

impl ProcurementRecord {
    /// Построить запись по заказу поставщику и связанным с ним счетам
    pub fn from_purchase_order(order: &PurchaseOrder, invoices: &[PurchaseInvoice]) -> Self {
        Self {
            id: order.name().to_string(),
            kind: DocumentKind::PurchaseOrder,
            raw_status: order.status.clone(),
            workflow_state: None,
            owner: order.owner.clone(),
            district: None,
            company: Some(order.company.clone()).filter(|c| !c.is_empty()),
            per_received: Some(order.per_received),
            per_billed: Some(order.per_billed),
            linked_invoices: invoices.iter().map(InvoiceTotals::from).collect(),
        }
    }

    pub fn is_material_request(&self) -> bool {
        self.kind == DocumentKind::MaterialRequest
    }

    pub fn is_purchase_order(&self) -> bool {
        self.kind == DocumentKind::PurchaseOrder
    }
}

impl From<&MaterialRequest> for ProcurementRecord {
    fn from(request: &MaterialRequest) -> Self {
        Self {
            id: request.name.clone(),
            kind: DocumentKind::MaterialRequest,
            raw_status: request.status.clone(),
            workflow_state: request.workflow_state.clone(),
            owner: request.owner.clone(),
            district: request.custom_district.clone(),
            company: Some(request.company.clone()).filter(|c| !c.is_empty()),
            per_received: None,
            per_billed: None,
            linked_invoices: Vec::new(),
        }
    }
}
