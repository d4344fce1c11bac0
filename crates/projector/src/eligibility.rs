//! Права пользователя на действия с документом.
//!
//! Каждое условие является чистой функцией от состояния, владения и роли,
//! поэтому проверяется без реального документа.

use contracts::domain::common::ProcurementRecord;
use contracts::enums::StatusCategory;
use contracts::shared::projection::Eligibility;
use contracts::system::SessionUser;

use crate::status::{eligibility_states, StatusTable};

/// Отправить на согласование или редактировать можно только свой черновик.
///
/// Одно условие на оба действия: кнопки «Отправить» и «Изменить» всегда
/// доступны одновременно.
pub fn can_submit_or_edit(state: Option<StatusCategory>, is_owner: bool) -> bool {
    is_owner && state == Some(StatusCategory::Draft)
}

pub fn can_approve_or_reject(state: Option<StatusCategory>, is_collector: bool) -> bool {
    is_collector && state.is_some_and(|s| s.is_awaiting_approval())
}

pub fn can_create_purchase_order(state: Option<StatusCategory>, is_owner: bool) -> bool {
    is_owner && state == Some(StatusCategory::Approved)
}

/// Условие выполнено хотя бы для одного из учитываемых состояний
fn holds(states: &[StatusCategory], predicate: impl Fn(Option<StatusCategory>) -> bool) -> bool {
    states.iter().any(|s| predicate(Some(*s)))
}

/// Рассчитать доступные действия.
///
/// Без документа или без пользователя все действия запрещены.
pub fn evaluate_eligibility(
    record: Option<&ProcurementRecord>,
    user: Option<&SessionUser>,
    is_collector: bool,
    table: &StatusTable,
) -> Eligibility {
    let (Some(record), Some(user)) = (record, user) else {
        return Eligibility::default();
    };

    let states = eligibility_states(record, table);

    let is_owner = user.is_owner_of(&record.owner);
    let is_request = record.is_material_request();

    let submit_or_edit = is_request && holds(&states, |s| can_submit_or_edit(s, is_owner));
    let approve_or_reject = holds(&states, |s| can_approve_or_reject(s, is_collector));
    let create_order = is_request && holds(&states, |s| can_create_purchase_order(s, is_owner));

    Eligibility {
        can_submit: submit_or_edit,
        can_edit: submit_or_edit,
        can_approve: approve_or_reject,
        can_reject: approve_or_reject,
        can_create_purchase_order: create_order,
    }
}
