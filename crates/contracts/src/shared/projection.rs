//! Выходные модели проекции статусов.
//!
//! Модели вычисляются заново при каждом рендере и нигде не сохраняются.

use serde::{Deserialize, Serialize};

use crate::enums::{
    BadgeClass, DocumentKind, JourneyStageKind, PaymentStatus, StageState, StatusCategory,
};

/// Отображаемый статус документа
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusView {
    pub display_status: String,
    /// Категория; `None` для неизвестных сервер-статусов
    pub category: Option<StatusCategory>,
    pub badge: BadgeClass,
}

/// Один этап закупочного пути
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyStage {
    pub kind: JourneyStageKind,
    pub state: StageState,
    pub label: String,
}

impl JourneyStage {
    pub fn new(kind: JourneyStageKind, state: StageState, label: impl Into<String>) -> Self {
        Self {
            kind,
            state,
            label: label.into(),
        }
    }
}

/// Закупочный путь: пять этапов и общий прогресс
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journey {
    pub stages: [JourneyStage; 5],
    /// 0..=100
    pub progress_percent: u8,
    pub payment: PaymentStatus,
}

impl Journey {
    pub fn stage(&self, kind: JourneyStageKind) -> &JourneyStage {
        // Этапы хранятся в порядке объявления JourneyStageKind
        &self.stages[kind as usize]
    }

    pub fn states(&self) -> [StageState; 5] {
        [
            self.stages[0].state,
            self.stages[1].state,
            self.stages[2].state,
            self.stages[3].state,
            self.stages[4].state,
        ]
    }
}

/// Доступные пользователю действия над документом
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Eligibility {
    pub can_submit: bool,
    pub can_edit: bool,
    pub can_approve: bool,
    pub can_reject: bool,
    pub can_create_purchase_order: bool,
}

/// Статус в заголовке карточки документа
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderStatus {
    pub label: String,
    pub badge: BadgeClass,
    pub icon: String,
}

/// Полная модель представления документа
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewProjection {
    pub id: String,
    pub kind: DocumentKind,
    pub status: StatusView,
    pub journey: Journey,
    pub eligibility: Eligibility,
    pub header: HeaderStatus,
}
