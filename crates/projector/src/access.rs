//! Разграничение доступа к спискам заявок.
//!
//! Согласующий видит заявки своего района, дилер видит только свои заявки.

use contracts::domain::a001_material_request::MaterialRequest;
use contracts::domain::common::ErpDocument;
use contracts::shared::list_query::FilterCondition;
use contracts::system::SessionUser;

use crate::config::RolesConfig;

pub fn is_collector(user: &SessionUser, roles: &RolesConfig) -> bool {
    user.has_any_role(&roles.collector)
}

pub fn is_dealer(user: &SessionUser, roles: &RolesConfig) -> bool {
    user.has_any_role(&roles.dealer)
}

/// Доступ к странице заявок района
pub fn can_view_district_requests(user: Option<&SessionUser>, roles: &RolesConfig) -> bool {
    user.is_some_and(|u| is_collector(u, roles))
}

/// Доступ к странице "Мои заявки"
pub fn can_view_my_requests(user: Option<&SessionUser>, roles: &RolesConfig) -> bool {
    user.is_some_and(|u| is_dealer(u, roles))
}

/// Заявки района; без района возвращаются все заявки
pub fn filter_by_district<'a>(
    requests: &'a [MaterialRequest],
    district: Option<&str>,
) -> Vec<&'a MaterialRequest> {
    let district = district.map(str::trim).filter(|d| !d.is_empty());
    match district {
        None => requests.iter().collect(),
        Some(district) => requests
            .iter()
            .filter(|r| r.custom_district.as_deref().map(str::trim) == Some(district))
            .collect(),
    }
}

/// Документы, созданные пользователем (по email или имени)
pub fn filter_owned_by<'a, T: ErpDocument>(records: &'a [T], user: &SessionUser) -> Vec<&'a T> {
    records
        .iter()
        .filter(|r| user.is_owner_of(r.owner()))
        .collect()
}

/// Серверный фильтр по району пользователя
pub fn district_filter(user: &SessionUser) -> Option<FilterCondition> {
    user.district
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(|d| FilterCondition::equals("custom_district", d))
}
