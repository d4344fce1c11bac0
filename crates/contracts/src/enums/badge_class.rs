use serde::{Deserialize, Serialize};

/// Вариант бейджа статуса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeClass {
    Primary,
    #[default]
    Secondary,
    Success,
    Warning,
    Danger,
    Info,
    Dark,
    Light,
}

impl BadgeClass {
    /// CSS-классы бейджа
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeClass::Primary => "bg-primary",
            BadgeClass::Secondary => "bg-secondary",
            BadgeClass::Success => "bg-success",
            BadgeClass::Warning => "bg-warning text-dark",
            BadgeClass::Danger => "bg-danger",
            BadgeClass::Info => "bg-info",
            BadgeClass::Dark => "bg-dark",
            BadgeClass::Light => "bg-light text-primary",
        }
    }
}
