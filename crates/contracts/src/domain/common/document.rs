/// Трейт для документа ERP
///
/// Определяет обязательные методы и метаданные для всех документов закупочного контура
pub trait ErpDocument {
    // ============================================================================
    // Методы экземпляра (данные конкретного документа)
    // ============================================================================

    /// Получить имя документа, присвоенное сервером (например, "MAT-MR-2024-00012")
    fn name(&self) -> &str;

    /// Получить идентификатор пользователя, создавшего документ
    fn owner(&self) -> &str;

    /// Получить статус документа в том виде, в каком его вернул сервер
    fn raw_status(&self) -> &str;

    // ============================================================================
    // Метаданные типа документа (статические данные)
    // ============================================================================

    /// Индекс документа в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции (например, "material_request")
    fn collection_name() -> &'static str;

    /// Тип документа на стороне ERP (например, "Material Request")
    fn doctype() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Полное имя документа для системы (например, "a001_material_request")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Путь ресурса ERP для документа (например, "Material Request/MAT-MR-0001")
    fn resource_path(&self) -> String {
        format!("{}/{}", Self::doctype(), self.name())
    }
}
