pub mod badge_class;
pub mod document_kind;
pub mod journey;
pub mod status_category;

pub use badge_class::BadgeClass;
pub use document_kind::DocumentKind;
pub use journey::{JourneyStageKind, PaymentStatus, StageState};
pub use status_category::StatusCategory;
