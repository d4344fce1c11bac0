//! Контракты данных для закупочного контура: документы ERP, входные записи
//! проекции статусов и выходные модели представления.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
