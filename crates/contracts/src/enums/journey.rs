use serde::{Deserialize, Serialize};

/// Состояние этапа закупочного пути
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageState {
    #[default]
    Pending,
    Active,
    Completed,
}

impl StageState {
    pub fn css_class(&self) -> &'static str {
        match self {
            StageState::Pending => "pending",
            StageState::Active => "active",
            StageState::Completed => "completed",
        }
    }
}

/// Этапы закупочного пути в порядке прохождения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JourneyStageKind {
    MaterialRequest,
    PurchaseOrder,
    PurchaseReceipt,
    PurchaseInvoice,
    Payment,
}

impl JourneyStageKind {
    /// Заголовок этапа для UI
    pub fn title(&self) -> &'static str {
        match self {
            JourneyStageKind::MaterialRequest => "Material Request",
            JourneyStageKind::PurchaseOrder => "Purchase Order",
            JourneyStageKind::PurchaseReceipt => "Purchase Receipt",
            JourneyStageKind::PurchaseInvoice => "Purchase Invoice",
            JourneyStageKind::Payment => "Payment",
        }
    }

    /// Все этапы по порядку
    pub fn all() -> [JourneyStageKind; 5] {
        [
            JourneyStageKind::MaterialRequest,
            JourneyStageKind::PurchaseOrder,
            JourneyStageKind::PurchaseReceipt,
            JourneyStageKind::PurchaseInvoice,
            JourneyStageKind::Payment,
        ]
    }
}

/// Состояние оплаты по связанным счетам
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Partial,
    Completed,
}
