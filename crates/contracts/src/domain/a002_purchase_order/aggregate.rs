use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::ErpDocument;

/// Строка табличной части заказа поставщику
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseOrderItem {
    pub item_code: String,

    /// Заказанное количество
    pub qty: f64,

    /// Уже полученное количество
    #[serde(default)]
    pub received_qty: f64,
}

/// Заказ поставщику (документ a002)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseOrder {
    /// Номер документа (напр. "PUR-ORD-2024-09004")
    pub name: String,

    /// Статус ("Draft", "To Receive and Bill", "To Bill", "Completed", ...)
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub supplier: String,

    #[serde(default)]
    pub transaction_date: Option<NaiveDate>,

    #[serde(default)]
    pub grand_total: f64,

    #[serde(default)]
    pub company: String,

    #[serde(default)]
    pub owner: String,

    /// Процент получения товаров, 0..100
    #[serde(default)]
    pub per_received: f64,

    /// Процент выставленных счетов, 0..100
    #[serde(default)]
    pub per_billed: f64,

    #[serde(default)]
    pub items: Vec<PurchaseOrderItem>,
}

/// Строка запроса на создание поступления товаров
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceiptLine {
    pub item_code: String,
    pub accepted_qty: f64,
    pub rejected_qty: f64,
    pub rejected_warehouse: String,
}

/// Тело запроса на создание поступления товаров по заказу
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseReceiptRequest {
    pub purchase_order: String,
    pub items: Vec<ReceiptLine>,
}

impl PurchaseOrder {
    /// Строки поступления на весь ещё не полученный остаток
    pub fn pending_receipt_lines(&self) -> Vec<ReceiptLine> {
        self.items
            .iter()
            .map(|item| ReceiptLine {
                item_code: item.item_code.clone(),
                accepted_qty: (item.qty - item.received_qty).max(0.0),
                rejected_qty: 0.0,
                rejected_warehouse: String::new(),
            })
            .collect()
    }

    pub fn receipt_request(&self) -> PurchaseReceiptRequest {
        PurchaseReceiptRequest {
            purchase_order: self.name.clone(),
            items: self.pending_receipt_lines(),
        }
    }
}

impl ErpDocument for PurchaseOrder {
    fn name(&self) -> &str {
        &self.name
    }

    fn owner(&self) -> &str {
        &self.owner
    }

    fn raw_status(&self) -> &str {
        &self.status
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "purchase_order"
    }

    fn doctype() -> &'static str {
        "Purchase Order"
    }

    fn list_name() -> &'static str {
        "Purchase Orders"
    }
}
