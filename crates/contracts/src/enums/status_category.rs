use serde::{Deserialize, Serialize};

/// Категория статуса закупочного документа.
///
/// Строковые статусы сервера сопоставляются категориям через настраиваемую
/// таблицу; все дальнейшие решения (бейдж, права, этапы) принимаются по
/// категории, а не по строке.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    Draft,
    Pending,
    PendingApproval,
    Submitted,
    Approved,
    Rejected,
    Cancelled,
    Stopped,
    Ordered,
    PartiallyOrdered,
    ToReceiveAndBill,
    ToReceive,
    ToBill,
    Completed,
    Closed,
}

impl StatusCategory {
    /// Каноническая метка статуса в ERP
    pub fn label(&self) -> &'static str {
        match self {
            StatusCategory::Draft => "Draft",
            StatusCategory::Pending => "Pending",
            StatusCategory::PendingApproval => "Pending Approval",
            StatusCategory::Submitted => "Submitted",
            StatusCategory::Approved => "Approved",
            StatusCategory::Rejected => "Rejected",
            StatusCategory::Cancelled => "Cancelled",
            StatusCategory::Stopped => "Stopped",
            StatusCategory::Ordered => "Ordered",
            StatusCategory::PartiallyOrdered => "Partially Ordered",
            StatusCategory::ToReceiveAndBill => "To Receive and Bill",
            StatusCategory::ToReceive => "To Receive",
            StatusCategory::ToBill => "To Bill",
            StatusCategory::Completed => "Completed",
            StatusCategory::Closed => "Closed",
        }
    }

    /// Получить все категории
    pub fn all() -> Vec<StatusCategory> {
        vec![
            StatusCategory::Draft,
            StatusCategory::Pending,
            StatusCategory::PendingApproval,
            StatusCategory::Submitted,
            StatusCategory::Approved,
            StatusCategory::Rejected,
            StatusCategory::Cancelled,
            StatusCategory::Stopped,
            StatusCategory::Ordered,
            StatusCategory::PartiallyOrdered,
            StatusCategory::ToReceiveAndBill,
            StatusCategory::ToReceive,
            StatusCategory::ToBill,
            StatusCategory::Completed,
            StatusCategory::Closed,
        ]
    }

    /// Ожидает решения согласующего
    pub fn is_awaiting_approval(&self) -> bool {
        matches!(
            self,
            StatusCategory::Pending | StatusCategory::PendingApproval
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<&str> = StatusCategory::all().iter().map(|c| c.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), StatusCategory::all().len());
    }

    #[test]
    fn test_config_key_is_snake_case() {
        let key = serde_json::to_string(&StatusCategory::ToReceiveAndBill).unwrap();
        assert_eq!(key, "\"to_receive_and_bill\"");
        let parsed: StatusCategory = serde_json::from_str("\"pending_approval\"").unwrap();
        assert_eq!(parsed, StatusCategory::PendingApproval);
    }
}
