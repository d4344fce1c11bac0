use contracts::enums::{BadgeClass, DocumentKind, PaymentStatus, StatusCategory};
use contracts::shared::projection::{HeaderStatus, StatusView};

fn header(label: &str, badge: BadgeClass, icon: &str) -> HeaderStatus {
    HeaderStatus {
        label: label.to_string(),
        badge,
        icon: icon.to_string(),
    }
}

/// Статус в заголовке карточки.
///
/// Для заказа оплата важнее статуса документа: оплаченный заказ показывается
/// как "Paid" независимо от того, закрыт ли он.
pub fn header_status(kind: DocumentKind, status: &StatusView, payment: PaymentStatus) -> HeaderStatus {
    if kind == DocumentKind::MaterialRequest {
        return header(&status.display_status, status.badge, "icon-file");
    }

    match payment {
        PaymentStatus::Completed => return header("Paid", BadgeClass::Success, "icon-check-circle"),
        PaymentStatus::Partial => {
            return header("Partially Paid", BadgeClass::Info, "icon-pie-chart")
        }
        PaymentStatus::Pending => {}
    }

    let label = status.display_status.as_str();
    match status.category {
        Some(StatusCategory::Completed | StatusCategory::Closed) => {
            header(label, BadgeClass::Success, "icon-check-square")
        }
        Some(StatusCategory::ToBill) => header(label, BadgeClass::Warning, "icon-file-text"),
        Some(StatusCategory::ToReceiveAndBill) => {
            header("To Receive & Bill", BadgeClass::Warning, "icon-package")
        }
        Some(StatusCategory::ToReceive) => header(label, BadgeClass::Info, "icon-truck"),
        Some(StatusCategory::Draft) => header(label, BadgeClass::Secondary, "icon-edit"),
        Some(StatusCategory::Cancelled) => header(label, BadgeClass::Danger, "icon-x-circle"),
        _ => header(label, BadgeClass::Light, "icon-info"),
    }
}
