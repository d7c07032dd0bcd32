/// Утилиты для поиска по каталогу (поле ввода, подсветка совпадений)
use leptos::prelude::*;

/// Разбивает текст на фрагменты (совпадение, фрагмент) без учёта регистра
///
/// Если приведение к нижнему регистру меняет длину строки в байтах,
/// подсветка не выполняется и возвращается весь текст одним фрагментом.
pub fn match_segments<'a>(text: &'a str, filter: &str) -> Vec<(bool, &'a str)> {
    if filter.is_empty() {
        return vec![(false, text)];
    }

    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();
    if text_lower.len() != text.len() {
        return vec![(false, text)];
    }

    let mut parts = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;
        let match_end = actual_pos + filter_lower.len();
        if !text.is_char_boundary(actual_pos) || !text.is_char_boundary(match_end) {
            break;
        }

        if actual_pos > last_pos {
            parts.push((false, &text[last_pos..actual_pos]));
        }
        parts.push((true, &text[actual_pos..match_end]));
        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push((false, &text[last_pos..]));
    }
    parts
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let parts: Vec<AnyView> = match_segments(text, filter)
        .into_iter()
        .map(|(is_match, fragment)| {
            let fragment = fragment.to_string();
            if is_match {
                view! { <mark class="search-highlight">{fragment}</mark> }.into_any()
            } else {
                view! { <span>{fragment}</span> }.into_any()
            }
        })
        .collect();

    view! { <>{parts}</> }.into_any()
}

/// Поле поиска с кнопкой очистки
///
/// Каждое нажатие клавиши сразу передаётся в `on_change`.
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar pratos...".to_string()
    } else {
        placeholder
    };

    let clear_filter = move |_| on_change.run(String::new());

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Limpar">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_segments_case_insensitive() {
        let parts = match_segments("Combo Salmão Premium", "SALMÃO");
        assert_eq!(
            parts,
            vec![(false, "Combo "), (true, "Salmão"), (false, " Premium")]
        );
    }

    #[test]
    fn test_match_segments_multiple_matches() {
        let parts = match_segments("sake sake", "sake");
        assert_eq!(parts, vec![(true, "sake"), (false, " "), (true, "sake")]);
    }

    #[test]
    fn test_match_segments_without_match_or_filter() {
        assert_eq!(match_segments("Yakisoba", ""), vec![(false, "Yakisoba")]);
        assert_eq!(match_segments("Yakisoba", "sushi"), vec![(false, "Yakisoba")]);
    }
}
