pub mod access;
pub mod config;
pub mod eligibility;
pub mod header;
pub mod journey;
pub mod list_query;
pub mod projector;
pub mod status;

pub use config::{load_config, ConfigError, ProjectorConfig};
pub use list_query::{ListQueryError, ListState};
pub use projector::Projector;
pub use status::{EligibilityPrecedence, StatusTable};
