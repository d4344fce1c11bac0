use contracts::domain::common::ProcurementRecord;
use contracts::enums::DocumentKind;
use contracts::shared::list_query::{FilterCondition, ListQuery, SortDirection};
use contracts::shared::projection::ViewProjection;
use contracts::system::SessionUser;

use crate::access;
use crate::config::{ProjectorConfig, RolesConfig};
use crate::eligibility::evaluate_eligibility;
use crate::header::header_status;
use crate::journey::{project_journey, request_journey, OrderProgress};
use crate::list_query::{build_list_query, ListQueryError, ListState};
use crate::status::{normalize_status, StatusTable};

/// Точка входа проекции.
///
/// Не хранит состояния между вызовами: одинаковые входные данные всегда
/// дают одинаковый результат, поэтому экземпляр можно разделять между потоками.
#[derive(Debug, Clone)]
pub struct Projector {
    config: ProjectorConfig,
}

impl Projector {
    pub fn new(config: ProjectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectorConfig {
        &self.config
    }

    pub fn status_table(&self) -> &StatusTable {
        &self.config.status
    }

    pub fn roles(&self) -> &RolesConfig {
        &self.config.roles
    }

    pub fn is_collector(&self, user: &SessionUser) -> bool {
        access::is_collector(user, &self.config.roles)
    }

    /// Полная модель представления документа для пользователя
    pub fn project(&self, record: &ProcurementRecord, user: Option<&SessionUser>) -> ViewProjection {
        let table = self.status_table();
        let status = normalize_status(record, table);

        let journey = match record.kind {
            DocumentKind::MaterialRequest => request_journey(&status),
            DocumentKind::PurchaseOrder => {
                let order = OrderProgress::from_record(record, table);
                project_journey(&order, &record.linked_invoices)
            }
        };

        let is_collector = user.is_some_and(|u| self.is_collector(u));
        let eligibility = evaluate_eligibility(Some(record), user, is_collector, table);
        let header = header_status(record.kind, &status, journey.payment);

        tracing::trace!(
            "Projected {} {}: status={:?} progress={}",
            record.kind.doctype(),
            record.id,
            status.display_status,
            journey.progress_percent
        );

        ViewProjection {
            id: record.id.clone(),
            kind: record.kind,
            status,
            journey,
            eligibility,
            header,
        }
    }

    /// Запрос страницы списка с настроенным размером страницы по умолчанию
    pub fn list_query(
        &self,
        filters: &[FilterCondition],
        page: usize,
        sort_column: &str,
        sort_direction: SortDirection,
    ) -> Result<ListQuery, ListQueryError> {
        build_list_query(
            filters,
            page,
            self.config.list.default_page_size,
            sort_column,
            sort_direction,
        )
    }

    pub fn new_list_state(&self, sort_field: &str) -> ListState {
        ListState::new(sort_field, self.config.list.default_page_size)
    }
}
