/// Трейт для корня агрегата
///
/// Статические метаданные агрегата, из которых строятся имена таблиц
/// и подписи разделов и форм на дашборде.
pub trait AggregateRoot {
    // ============================================================================
    // Метаданные класса агрегата (статические данные)
    // ============================================================================

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции для БД (например, "product")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "Product")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "Products")
    fn list_name() -> &'static str;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Полное имя агрегата для системы (например, "a001_product")
    ///
    /// Совпадает с именем таблицы в БД.
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
