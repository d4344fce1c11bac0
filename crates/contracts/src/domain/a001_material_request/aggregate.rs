use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::ErpDocument;

/// Строка табличной части «Товары» заявки на материалы
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialRequestItem {
    /// Код номенклатуры
    pub item_code: String,

    /// Количество
    pub qty: f64,

    /// Склад назначения
    #[serde(default)]
    pub warehouse: String,

    #[serde(default)]
    pub description: Option<String>,
}

/// Заявка на материалы (документ a001)
///
/// Поля совпадают с ресурсом `Material Request` на стороне ERP, поэтому
/// ответ сервера десериализуется напрямую.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialRequest {
    /// Номер документа (напр. "MAT-MR-2024-00012")
    pub name: String,

    #[serde(default)]
    pub transaction_date: Option<NaiveDate>,

    /// Тип заявки ("Purchase", "Material Transfer", ...)
    #[serde(default)]
    pub material_request_type: String,

    /// Требуемая дата поставки
    #[serde(default)]
    pub schedule_date: Option<NaiveDate>,

    #[serde(default)]
    pub company: String,

    /// Email или имя создателя
    #[serde(default)]
    pub owner: String,

    /// Статус документа ("Draft", "Submitted", "Stopped", ...)
    #[serde(default)]
    pub status: String,

    /// Состояние workflow согласования ("Pending", "Approved", ...)
    #[serde(default)]
    pub workflow_state: Option<String>,

    /// Район, к которому относится заявка
    #[serde(default)]
    pub custom_district: Option<String>,

    #[serde(default)]
    pub items: Vec<MaterialRequestItem>,
}

impl MaterialRequest {
    /// Краткое описание табличной части для списков
    pub fn items_summary(&self) -> String {
        match self.items.as_slice() {
            [] => "No items".to_string(),
            [single] => format!("{} ({})", single.item_code, single.qty),
            items => format!("{} items", items.len()),
        }
    }
}

impl ErpDocument for MaterialRequest {
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
        "a001"
    }

    fn collection_name() -> &'static str {
        "material_request"
    }

    fn doctype() -> &'static str {
        "Material Request"
    }

    fn list_name() -> &'static str {
        "Material Requests"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(code: &str, qty: f64) -> MaterialRequestItem {
        MaterialRequestItem {
            item_code: code.to_string(),
            qty,
            warehouse: "Stores - RG".to_string(),
            description: None,
        }
    }

    #[test]
    fn test_deserialize_from_erp_payload() {
        let request: MaterialRequest = serde_json::from_value(json!({
            "name": "MAT-MR-2024-00012",
            "transaction_date": "2024-01-22",
            "material_request_type": "Purchase",
            "schedule_date": "2024-02-01",
            "company": "RG Arms Ltd",
            "owner": "dealer@example.com",
            "status": "Pending",
            "custom_district": "North",
            "items": [
                { "item_code": "CEMENT-50", "qty": 12, "warehouse": "Stores - RG" }
            ]
        }))
        .unwrap();

        assert_eq!(request.transaction_date, NaiveDate::from_ymd_opt(2024, 1, 22));
        assert_eq!(request.workflow_state, None);
        assert_eq!(request.raw_status(), "Pending");
        assert_eq!(request.items.len(), 1);
        assert_eq!(request.resource_path(), "Material Request/MAT-MR-2024-00012");
        assert_eq!(MaterialRequest::full_name(), "a001_material_request");
    }

    #[test]
    fn test_items_summary() {
        let mut request: MaterialRequest =
            serde_json::from_value(json!({ "name": "MAT-MR-1" })).unwrap();
        assert_eq!(request.items_summary(), "No items");

        request.items.push(item("CEMENT-50", 12.0));
        assert_eq!(request.items_summary(), "CEMENT-50 (12)");

        request.items.push(item("SAND-1T", 2.5));
        request.items.push(item("BRICK", 400.0));
        assert_eq!(request.items_summary(), "3 items");
    }
}
