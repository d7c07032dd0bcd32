//! Форматирование цен для витрины и корзины (бразильский формат: 1.234,56)

/// Форматирует число с разделителем тысяч (точка) и десятичной запятой
///
/// # Примеры
///
/// ```
/// use frontend::shared::format::format_decimal;
/// assert_eq!(format_decimal(1234.567, 2), "1.234,57");
/// ```
pub fn format_decimal(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.*}", decimals as usize, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    // Точка каждые 3 цифры с конца целой части
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{},{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Цена с символом валюты: "R$ 28,90"
///
/// Округление до 2 знаков происходит только здесь, при отображении.
pub fn format_money(value: f64, currency: &str) -> String {
    format!("{} {}", currency, format_decimal(value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(28.90, "R$"), "R$ 28,90");
        assert_eq!(format_money(57.8, "R$"), "R$ 57,80");
        assert_eq!(format_money(0.0, "R$"), "R$ 0,00");
        assert_eq!(format_money(1234567.891, "R$"), "R$ 1.234.567,89");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(1234.567, 0), "1.235");
        assert_eq!(format_decimal(1234.567, 1), "1.234,6");
        assert_eq!(format_decimal(999.0, 2), "999,00");
        assert_eq!(format_decimal(-1234.5, 2), "-1.234,50");
    }

    #[test]
    fn test_sum_is_rounded_only_for_display() {
        let total = 28.90 * 2.0 + 15.90;
        assert_eq!(format_money(total, "R$"), "R$ 73,70");
    }
}
