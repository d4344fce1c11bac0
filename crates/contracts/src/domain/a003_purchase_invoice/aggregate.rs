use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Счёт поставщика (документ a003), связанный с заказом.
///
/// Загружаются только проведённые счета, поэтому набор полей минимален.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseInvoice {
    pub name: String,

    /// Итоговая сумма счёта
    #[serde(default)]
    pub grand_total: Decimal,

    /// Неоплаченный остаток
    #[serde(default)]
    pub outstanding_amount: Decimal,
}

impl PurchaseInvoice {
    pub fn is_settled(&self) -> bool {
        self.outstanding_amount <= Decimal::ZERO
    }
}
