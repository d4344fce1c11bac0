//! Закупочный путь: заявка -> заказ -> поступление -> счёт -> оплата.
//!
//! Каждый этап вычисляется независимо от остальных, поэтому при
//! несогласованных процентах активными могут оказаться этапы не по порядку.

use contracts::domain::a002_purchase_order::PurchaseOrder;
use contracts::domain::a003_purchase_invoice::PurchaseInvoice;
use contracts::domain::common::{InvoiceTotals, ProcurementRecord};
use contracts::enums::{JourneyStageKind, PaymentStatus, StageState, StatusCategory};
use contracts::shared::projection::{Journey, JourneyStage, StatusView};
use rust_decimal::Decimal;

use crate::status::{display_status, StatusTable};

/// Вес одного этапа в общем прогрессе
const STAGE_WEIGHT: f64 = 20.0;

/// Состояние заказа, от которого строится путь
#[derive(Debug, Clone, PartialEq)]
pub struct OrderProgress {
    pub status: String,
    pub category: Option<StatusCategory>,
    /// 0..=100 после нормализации
    pub per_received: f64,
    /// 0..=100 после нормализации
    pub per_billed: f64,
}

impl OrderProgress {
    /// Пустой статус заказа считается черновиком
    pub fn new(status: &str, per_received: f64, per_billed: f64, table: &StatusTable) -> Self {
        let status = match status.trim() {
            "" => StatusCategory::Draft.label(),
            s => s,
        };
        Self {
            status: status.to_string(),
            category: table.category_of(status),
            per_received: clamp_percent(per_received, "per_received"),
            per_billed: clamp_percent(per_billed, "per_billed"),
        }
    }

    pub fn from_record(record: &ProcurementRecord, table: &StatusTable) -> Self {
        Self::new(
            display_status(record),
            record.per_received.unwrap_or_default(),
            record.per_billed.unwrap_or_default(),
            table,
        )
    }

    pub fn from_order(order: &PurchaseOrder, table: &StatusTable) -> Self {
        Self::new(&order.status, order.per_received, order.per_billed, table)
    }

    pub fn is_draft(&self) -> bool {
        self.category == Some(StatusCategory::Draft)
    }

    pub fn is_fully_received(&self) -> bool {
        self.per_received >= 100.0
    }

    pub fn is_fully_billed(&self) -> bool {
        self.per_billed >= 100.0
    }
}

/// Привести процент к диапазону 0..=100; NaN считается нулём
pub fn clamp_percent(value: f64, field: &str) -> f64 {
    if value.is_nan() {
        tracing::warn!("{} is NaN, treating as 0", field);
        return 0.0;
    }
    if !(0.0..=100.0).contains(&value) {
        tracing::warn!("{} = {} is out of range, clamping to 0..=100", field, value);
        return value.clamp(0.0, 100.0);
    }
    value
}

/// Состояние оплаты по сумме всех связанных счетов.
///
/// Оплаченным считается только нулевой остаток; переплата (отрицательный
/// остаток) остаётся в ожидании до сверки.
pub fn payment_status(invoices: &[InvoiceTotals]) -> PaymentStatus {
    if invoices.is_empty() {
        return PaymentStatus::Pending;
    }

    let grand: Decimal = invoices.iter().map(|i| i.grand_total).sum();
    let outstanding: Decimal = invoices.iter().map(|i| i.outstanding_amount).sum();

    if grand > Decimal::ZERO && outstanding == Decimal::ZERO {
        PaymentStatus::Completed
    } else if outstanding > Decimal::ZERO && outstanding < grand {
        PaymentStatus::Partial
    } else {
        PaymentStatus::Pending
    }
}

/// Счёт для кнопки оплаты: первый неоплаченный, иначе первый из списка
pub fn select_invoice_for_payment(invoices: &[PurchaseInvoice]) -> Option<&PurchaseInvoice> {
    invoices
        .iter()
        .find(|invoice| !invoice.is_settled())
        .or_else(|| invoices.first())
}

fn percent_label(value: f64, suffix: &str) -> String {
    format!("{:.0}% {}", value.round(), suffix)
}

fn order_stage(order: &OrderProgress) -> JourneyStage {
    let kind = JourneyStageKind::PurchaseOrder;
    match order.category {
        Some(StatusCategory::Draft) => JourneyStage::new(kind, StageState::Pending, "Draft"),
        Some(StatusCategory::Cancelled) => JourneyStage::new(kind, StageState::Active, "Cancelled"),
        _ => JourneyStage::new(kind, StageState::Completed, order.status.as_str()),
    }
}

fn receipt_stage(order: &OrderProgress) -> JourneyStage {
    let kind = JourneyStageKind::PurchaseReceipt;
    if order.is_fully_received() {
        JourneyStage::new(kind, StageState::Completed, "Received")
    } else if order.per_received > 0.0 {
        JourneyStage::new(kind, StageState::Active, percent_label(order.per_received, "Received"))
    } else if !order.is_draft() {
        JourneyStage::new(kind, StageState::Active, "Pending Receipt")
    } else {
        JourneyStage::new(kind, StageState::Pending, "Pending")
    }
}

fn invoice_stage(order: &OrderProgress) -> JourneyStage {
    let kind = JourneyStageKind::PurchaseInvoice;
    if order.is_fully_billed() {
        JourneyStage::new(kind, StageState::Completed, "Invoiced")
    } else if order.per_billed > 0.0 {
        JourneyStage::new(kind, StageState::Active, percent_label(order.per_billed, "Billed"))
    } else if order.is_fully_received() {
        JourneyStage::new(kind, StageState::Active, "Pending Invoice")
    } else {
        JourneyStage::new(kind, StageState::Pending, "Pending")
    }
}

fn payment_stage(order: &OrderProgress, payment: PaymentStatus) -> JourneyStage {
    let kind = JourneyStageKind::Payment;
    match payment {
        PaymentStatus::Completed => JourneyStage::new(kind, StageState::Completed, "Paid"),
        PaymentStatus::Partial => JourneyStage::new(kind, StageState::Active, "Partially Paid"),
        PaymentStatus::Pending if order.is_fully_billed() => {
            JourneyStage::new(kind, StageState::Active, "To Pay")
        }
        PaymentStatus::Pending => JourneyStage::new(kind, StageState::Pending, "Pending"),
    }
}

fn progress(order: &OrderProgress, payment: PaymentStatus) -> u8 {
    let ordered = if order.is_draft() { 0.0 } else { STAGE_WEIGHT };
    let received = order.per_received / 100.0 * STAGE_WEIGHT;
    let billed = order.per_billed / 100.0 * STAGE_WEIGHT;
    let paid = match payment {
        PaymentStatus::Completed => STAGE_WEIGHT,
        PaymentStatus::Partial => STAGE_WEIGHT / 2.0,
        PaymentStatus::Pending => 0.0,
    };

    let total = STAGE_WEIGHT + ordered + received + billed + paid;
    total.round().clamp(0.0, 100.0) as u8
}

/// Путь заказа поставщику.
///
/// Заявка на материалы всегда считается завершённой: заказ без неё не создаётся.
pub fn project_journey(order: &OrderProgress, invoices: &[InvoiceTotals]) -> Journey {
    let payment = payment_status(invoices);

    Journey {
        stages: [
            JourneyStage::new(
                JourneyStageKind::MaterialRequest,
                StageState::Completed,
                "Approved",
            ),
            order_stage(order),
            receipt_stage(order),
            invoice_stage(order),
            payment_stage(order, payment),
        ],
        progress_percent: progress(order, payment),
        payment,
    }
}

/// Путь заявки на материалы: пока заказа нет, известен только первый этап
pub fn request_journey(status: &StatusView) -> Journey {
    let approved = matches!(
        status.category,
        Some(
            StatusCategory::Approved | StatusCategory::Ordered | StatusCategory::PartiallyOrdered
        )
    );
    let (state, progress_percent) = if approved {
        (StageState::Completed, STAGE_WEIGHT as u8)
    } else {
        (StageState::Active, 0)
    };

    let [_, rest @ ..] = JourneyStageKind::all();
    let [order, receipt, invoice, payment] =
        rest.map(|kind| JourneyStage::new(kind, StageState::Pending, "Pending"));

    Journey {
        stages: [
            JourneyStage::new(
                JourneyStageKind::MaterialRequest,
                state,
                status.display_status.as_str(),
            ),
            order,
            receipt,
            invoice,
            payment,
        ],
        progress_percent,
        payment: PaymentStatus::Pending,
    }
}
