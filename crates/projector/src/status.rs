//! Нормализация статусов документов и таблица бейджей.

use std::collections::HashMap;

use contracts::domain::common::ProcurementRecord;
use contracts::enums::{BadgeClass, StatusCategory};
use contracts::shared::projection::StatusView;
use serde::Deserialize;

/// Какие состояния документа учитываются при проверке прав
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityPrecedence {
    /// Одно объединённое состояние: workflow_state, если задано, иначе статус
    #[default]
    WorkflowFirst,
    /// Учитываются оба состояния; условие выполнено, если выполнено для любого из них
    Either,
}

/// Таблица сопоставления статусов сервера категориям и бейджам
#[derive(Debug, Clone, PartialEq)]
pub struct StatusTable {
    /// Ключи хранятся в нижнем регистре без пробелов по краям
    labels: HashMap<String, StatusCategory>,
    badges: HashMap<StatusCategory, BadgeClass>,
    default_badge: BadgeClass,
    precedence: EligibilityPrecedence,
}

impl StatusTable {
    pub fn new(default_badge: BadgeClass, precedence: EligibilityPrecedence) -> Self {
        Self {
            labels: HashMap::new(),
            badges: HashMap::new(),
            default_badge,
            precedence,
        }
    }

    pub fn with_label(mut self, label: &str, category: StatusCategory) -> Self {
        self.labels.insert(label_key(label), category);
        self
    }

    pub fn with_badge(mut self, category: StatusCategory, badge: BadgeClass) -> Self {
        self.badges.insert(category, badge);
        self
    }

    pub fn default_badge(&self) -> BadgeClass {
        self.default_badge
    }

    pub fn precedence(&self) -> EligibilityPrecedence {
        self.precedence
    }

    pub fn has_badge(&self, category: StatusCategory) -> bool {
        self.badges.contains_key(&category)
    }

    /// Категория статуса по метке сервера; `None` для неизвестных меток
    pub fn category_of(&self, label: &str) -> Option<StatusCategory> {
        self.labels.get(&label_key(label)).copied()
    }

    pub fn badge_for(&self, category: Option<StatusCategory>) -> BadgeClass {
        category
            .and_then(|c| self.badges.get(&c).copied())
            .unwrap_or(self.default_badge)
    }

    pub fn badge_for_label(&self, label: &str) -> BadgeClass {
        self.badge_for(self.category_of(label))
    }
}

fn label_key(label: &str) -> String {
    label.trim().to_lowercase()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Статус для отображения.
///
/// Для заявки на материалы состояние workflow перекрывает статус документа.
/// Документ без статуса считается черновиком.
pub fn display_status(record: &ProcurementRecord) -> &str {
    if record.is_material_request() {
        if let Some(state) = non_blank(record.workflow_state.as_deref()) {
            return state;
        }
    }
    non_blank(Some(record.raw_status.as_str())).unwrap_or("Draft")
}

pub fn normalize_status(record: &ProcurementRecord, table: &StatusTable) -> StatusView {
    let label = display_status(record);
    let category = table.category_of(label);
    if category.is_none() {
        tracing::debug!(
            "Unknown status {:?} on {}, using default badge",
            label,
            record.id
        );
    }

    StatusView {
        display_status: label.to_string(),
        category,
        badge: table.badge_for(category),
    }
}

/// Состояния документа, учитываемые при проверке прав.
///
/// Неизвестные метки пропускаются, поэтому результат может быть пустым.
pub fn eligibility_states(record: &ProcurementRecord, table: &StatusTable) -> Vec<StatusCategory> {
    match table.precedence() {
        EligibilityPrecedence::WorkflowFirst => {
            table.category_of(display_status(record)).into_iter().collect()
        }
        EligibilityPrecedence::Either => {
            let mut states = Vec::with_capacity(2);
            if record.is_material_request() {
                if let Some(workflow) = non_blank(record.workflow_state.as_deref()) {
                    states.extend(table.category_of(workflow));
                }
            }
            let raw = non_blank(Some(record.raw_status.as_str())).unwrap_or("Draft");
            if let Some(category) = table.category_of(raw) {
                if !states.contains(&category) {
                    states.push(category);
                }
            }
            states
        }
    }
}
