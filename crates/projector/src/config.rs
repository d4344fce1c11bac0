use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use contracts::enums::{BadgeClass, StatusCategory};
use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::de::IntoDeserializer;
use serde::Deserialize;

use crate::status::{EligibilityPrecedence, StatusTable};

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[status]
default_badge = "secondary"
eligibility_precedence = "workflow_first"

[status.labels]
"Draft" = "draft"
"Pending" = "pending"
"Pending Approval" = "pending_approval"
"Submitted" = "submitted"
"Approved" = "approved"
"Rejected" = "rejected"
"Cancelled" = "cancelled"
"Stopped" = "stopped"
"Ordered" = "ordered"
"Partially Ordered" = "partially_ordered"
"To Receive and Bill" = "to_receive_and_bill"
"To Receive" = "to_receive"
"To Bill" = "to_bill"
"Completed" = "completed"
"Closed" = "closed"

[status.badges]
draft = "secondary"
pending = "warning"
pending_approval = "warning"
submitted = "primary"
approved = "success"
rejected = "danger"
cancelled = "danger"
stopped = "dark"
ordered = "info"
partially_ordered = "warning"
to_receive_and_bill = "warning"
to_receive = "info"
to_bill = "warning"
completed = "success"
closed = "success"

[roles]
collector = ["Collector Office"]
dealer = ["Dealer", "Purchase User"]

[list]
default_page_size = 10
page_size_options = [10, 20, 50, 100]
"#;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown status category `{0}` in [status.badges]")]
    UnknownCategory(String),

    #[error("[list] {0}")]
    InvalidList(&'static str),

    #[error("section [{0}] is missing")]
    MissingSection(&'static str),
}

#[derive(Debug, Deserialize, Clone)]
struct RawConfig {
    status: RawStatusConfig,
    /// Если секции нет, берётся из DEFAULT_CONFIG
    roles: Option<RolesConfig>,
    list: Option<ListConfig>,
}

#[derive(Debug, Deserialize, Clone)]
struct RawStatusConfig {
    #[serde(default)]
    default_badge: BadgeClass,
    #[serde(default)]
    eligibility_precedence: EligibilityPrecedence,
    /// Метка статуса сервера -> категория
    #[serde(default)]
    labels: BTreeMap<String, StatusCategory>,
    /// Категория -> бейдж
    #[serde(default)]
    badges: BTreeMap<String, BadgeClass>,
}

/// Роли, дающие права согласующего и дилера
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RolesConfig {
    pub collector: Vec<String>,
    pub dealer: Vec<String>,
}

/// Настройки списков
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
}

/// Проверенная конфигурация проекции
#[derive(Debug, Clone)]
pub struct ProjectorConfig {
    pub status: StatusTable,
    pub roles: RolesConfig,
    pub list: ListConfig,
}

impl ProjectorConfig {
    /// Разобрать и проверить конфигурацию в формате TOML
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(contents)?;

        let mut status = StatusTable::new(
            raw.status.default_badge,
            raw.status.eligibility_precedence,
        );
        for (label, category) in &raw.status.labels {
            status = status.with_label(label, *category);
        }
        for (key, badge) in &raw.status.badges {
            status = status.with_badge(parse_category(key)?, *badge);
        }

        let (roles, list) = match (raw.roles, raw.list) {
            (Some(roles), Some(list)) => (roles, list),
            (roles, list) => {
                let fallback: RawConfig = toml::from_str(DEFAULT_CONFIG)?;
                (
                    roles.or(fallback.roles).ok_or(ConfigError::MissingSection("roles"))?,
                    list.or(fallback.list).ok_or(ConfigError::MissingSection("list"))?,
                )
            }
        };

        if list.default_page_size == 0 {
            return Err(ConfigError::InvalidList("default_page_size must be greater than zero"));
        }
        if list.page_size_options.is_empty() {
            return Err(ConfigError::InvalidList("page_size_options must not be empty"));
        }
        if list.page_size_options.contains(&0) {
            return Err(ConfigError::InvalidList("page_size_options must not contain zero"));
        }

        Ok(Self {
            status,
            roles,
            list,
        })
    }

    /// Конфигурация, встроенная в бинарник
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }
}

fn parse_category(key: &str) -> Result<StatusCategory, ConfigError> {
    let de: StrDeserializer<'_, ValueError> = key.into_deserializer();
    StatusCategory::deserialize(de).map_err(|_| ConfigError::UnknownCategory(key.to_string()))
}

/// Load configuration from a TOML file
///
/// Search order:
/// 1. Explicit path (must exist)
/// 2. config.toml next to the executable
/// 3. Falls back to embedded default config
pub fn load_config(path: Option<&Path>) -> anyhow::Result<ProjectorConfig> {
    if let Some(path) = path {
        tracing::info!("Loading config from: {}", path.display());
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = ProjectorConfig::from_toml_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        return Ok(config);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config = ProjectorConfig::from_toml_str(&contents)
                    .with_context(|| format!("failed to parse {}", config_path.display()))?;
                return Ok(config);
            } else {
                tracing::debug!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    Ok(ProjectorConfig::embedded()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = ProjectorConfig::embedded().unwrap();
        assert_eq!(config.list.default_page_size, 10);
        assert_eq!(config.list.page_size_options, vec![10, 20, 50, 100]);
        assert_eq!(config.roles.collector, vec!["Collector Office"]);
        assert_eq!(config.roles.dealer, vec!["Dealer", "Purchase User"]);
        assert_eq!(config.status.default_badge(), BadgeClass::Secondary);
        assert_eq!(
            config.status.precedence(),
            EligibilityPrecedence::WorkflowFirst
        );
    }

    #[test]
    fn test_every_category_has_label_and_badge() {
        let config = ProjectorConfig::embedded().unwrap();
        for category in StatusCategory::all() {
            assert_eq!(config.status.category_of(category.label()), Some(category));
            assert!(config.status.has_badge(category), "{:?}", category);
        }
    }

    #[test]
    fn test_custom_labels_and_sections_optional() {
        let config = ProjectorConfig::from_toml_str(
            r#"
            [status]
            default_badge = "light"
            eligibility_precedence = "either"

            [status.labels]
            "Awaiting Collector" = "pending_approval"

            [status.badges]
            pending_approval = "info"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.status.category_of("awaiting collector"),
            Some(StatusCategory::PendingApproval)
        );
        assert_eq!(
            config.status.badge_for_label("Awaiting Collector"),
            BadgeClass::Info
        );
        assert_eq!(config.status.badge_for_label("Draft"), BadgeClass::Light);
        assert_eq!(config.status.precedence(), EligibilityPrecedence::Either);
        let embedded = ProjectorConfig::embedded().unwrap();
        assert_eq!(config.list, embedded.list);
        assert_eq!(config.roles, embedded.roles);
    }

    #[test]
    fn test_partial_sections_keep_the_rest() {
        let config = ProjectorConfig::from_toml_str(
            r#"
            [status]
            [roles]
            collector = ["District Officer"]
            dealer = []
            "#,
        )
        .unwrap();
        assert_eq!(config.roles.collector, vec!["District Officer"]);
        assert!(config.roles.dealer.is_empty());
        assert_eq!(config.list, ProjectorConfig::embedded().unwrap().list);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = ProjectorConfig::from_toml_str(
            r#"
            [status.badges]
            on_hold = "dark"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownCategory(ref key) if key == "on_hold"));
    }

    #[test]
    fn test_invalid_list_settings_rejected() {
        let err = ProjectorConfig::from_toml_str(
            r#"
            [status]
            [list]
            default_page_size = 10
            page_size_options = [10, 0]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidList(_)));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_config(Some(Path::new("/nonexistent/projector.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projector.toml");
        std::fs::write(
            &path,
            r#"
            [status]
            default_badge = "dark"

            [status.labels]
            "On Hold" = "stopped"

            [list]
            default_page_size = 25
            page_size_options = [25, 50]
            "#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.list.default_page_size, 25);
        assert_eq!(config.status.category_of("on hold"), Some(StatusCategory::Stopped));
        assert_eq!(config.status.default_badge(), BadgeClass::Dark);
        assert_eq!(config.roles, ProjectorConfig::embedded().unwrap().roles);
    }

    #[test]
    fn test_invalid_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projector.toml");
        std::fs::write(&path, "[list]\ndefault_page_size = 0\npage_size_options = [10]\n[status]\n")
            .unwrap();
        assert!(load_config(Some(&path)).is_err());
    }
}
