//! Hidden input collection.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::models::SessionState;

const HIDDEN_INPUT_SELECTOR_STR: &str = "input[type=hidden]";

static HIDDEN_INPUT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(HIDDEN_INPUT_SELECTOR_STR, "HIDDEN_INPUT_SELECTOR")
});

/// Collects every named hidden input of the page.
///
/// A missing `value` attribute reads as `""`. Inputs without a name are
/// skipped. A page without hidden inputs yields an empty state.
pub fn extract_hidden(html: &str) -> SessionState {
    let document = Html::parse_document(html);
    let mut state = SessionState::new();
    for element in document.select(&HIDDEN_INPUT_SELECTOR) {
        let input = element.value();
        let Some(name) = input.attr("name").filter(|n| !n.is_empty()) else {
            continue;
        };
        state.set(name, input.attr("value").unwrap_or_default());
    }
    log::trace!("Extracted {} hidden fields", state.len());
    state
}
