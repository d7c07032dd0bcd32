/// Метаданные UseCase для идентификации в логах и UI
pub trait UseCaseMetadata {
    /// Индекс UseCase (например, "u501")
    fn usecase_index() -> &'static str;

    /// Техническое имя (например, "checkout")
    fn usecase_name() -> &'static str;

    /// Отображаемое имя для UI (например, "Finalizar Pedido")
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Полное имя вида "u501_checkout"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
