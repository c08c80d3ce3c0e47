//! Dropdown option lists.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::config::PLACEHOLDER_OPTION_VALUE;
use crate::models::SelectOption;

static SELECT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("select", "SELECT_SELECTOR"));
static OPTION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("option", "OPTION_SELECTOR"));

/// Lists the selectable entries of `<select name="{field}">`.
///
/// Placeholders are dropped: options without a value, with an empty value,
/// or with the site's `"0"` sentinel. Labels are the trimmed option text.
/// Returns an empty list if the page has no such dropdown.
pub fn extract_options(html: &str, field: &str) -> Vec<SelectOption> {
    let document = Html::parse_document(html);
    let Some(select) = document
        .select(&SELECT_SELECTOR)
        .find(|el| el.value().attr("name") == Some(field))
    else {
        log::debug!("No <select name=\"{}\"> on page", field);
        return Vec::new();
    };

    select
        .select(&OPTION_SELECTOR)
        .filter_map(|option| {
            let value = option.value().attr("value")?;
            if value.is_empty() || value == PLACEHOLDER_OPTION_VALUE {
                return None;
            }
            Some(SelectOption {
                value: value.to_string(),
                label: option.text().collect::<String>().trim().to_string(),
            })
        })
        .collect()
}
