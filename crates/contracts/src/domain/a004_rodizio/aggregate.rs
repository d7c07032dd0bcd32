use serde::{Deserialize, Serialize};

/// Переключить режим rodízio
///
/// Чистая инволюция: корзина не затрагивается.
pub fn toggle_rodizio_mode(current: bool) -> bool {
    !current
}

/// Параметры rodízio из конфигурации ресторана
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RodizioSettings {
    /// Цена за человека (только для отображения, в сумму корзины не входит)
    pub price_per_person: f64,
    pub duration_minutes: u32,
    /// Статичная строка обратного отсчёта, не таймер
    pub countdown_placeholder: String,
}

impl Default for RodizioSettings {
    fn default() -> Self {
        Self {
            price_per_person: 59.90,
            duration_minutes: 120,
            countdown_placeholder: "1:45:30".to_string(),
        }
    }
}

impl RodizioSettings {
    /// Длительность для UI: "2 horas", "1 hora", "1h30", "45 minutos"
    pub fn duration_label(&self) -> String {
        let hours = self.duration_minutes / 60;
        let minutes = self.duration_minutes % 60;
        match (hours, minutes) {
            (0, m) => format!("{} minutos", m),
            (1, 0) => "1 hora".to_string(),
            (h, 0) => format!("{} horas", h),
            (h, m) => format!("{}h{:02}", h, m),
        }
    }
}

/// Состояние режима rodízio в текущей сессии
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RodizioMode {
    pub active: bool,
}

impl RodizioMode {
    pub fn toggle(&mut self) {
        self.active = toggle_rodizio_mode(self.active);
    }

    /// Строка обратного отсчёта; показывается только в активном режиме
    pub fn countdown_label<'a>(&self, settings: &'a RodizioSettings) -> Option<&'a str> {
        self.active.then_some(settings.countdown_placeholder.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        assert!(toggle_rodizio_mode(false));
        assert!(!toggle_rodizio_mode(true));
        assert!(!toggle_rodizio_mode(toggle_rodizio_mode(false)));
    }

    #[test]
    fn test_countdown_only_when_active() {
        let settings = RodizioSettings::default();
        let mut mode = RodizioMode::default();
        assert_eq!(mode.countdown_label(&settings), None);

        mode.toggle();
        assert_eq!(mode.countdown_label(&settings), Some("1:45:30"));

        mode.toggle();
        assert_eq!(mode.countdown_label(&settings), None);
    }

    #[test]
    fn test_duration_label() {
        let mut settings = RodizioSettings::default();
        assert_eq!(settings.duration_label(), "2 horas");
        settings.duration_minutes = 60;
        assert_eq!(settings.duration_label(), "1 hora");
        settings.duration_minutes = 90;
        assert_eq!(settings.duration_label(), "1h30");
        settings.duration_minutes = 45;
        assert_eq!(settings.duration_label(), "45 minutos");
    }
}
