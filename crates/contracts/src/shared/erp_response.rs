use serde::{Deserialize, Serialize};

/// Конверт ответа ERP: и документ, и список приходят в поле `data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErpResponse<T> {
    pub data: T,
}

impl<T> ErpResponse<T> {
    pub fn into_inner(self) -> T {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_purchase_invoice::PurchaseInvoice;
    use serde_json::json;

    #[test]
    fn test_list_envelope() {
        let response: ErpResponse<Vec<PurchaseInvoice>> = serde_json::from_value(json!({
            "data": [
                { "name": "ACC-PINV-0001", "grand_total": 500, "outstanding_amount": 0 },
                { "name": "ACC-PINV-0002", "grand_total": "250.00", "outstanding_amount": "250.00" }
            ]
        }))
        .unwrap();

        let invoices = response.into_inner();
        assert_eq!(invoices.len(), 2);
        assert!(invoices[0].is_settled());
        assert!(!invoices[1].is_settled());
    }
}
