//! Grade report detection and field extraction.

use scraper::Html;

use crate::config::{CREDIT_TOTAL_ELEMENT_ID, RESULT_MARKER, SCORE_ELEMENT_ID};
use crate::models::{FetchOutcome, ResultRecord};

/// Whether the page is a rendered grade report.
pub fn has_result_marker(html: &str) -> bool {
    html.contains(RESULT_MARKER)
}

/// Reads the search response for `roll`.
///
/// The marker text alone decides Found vs NotFound. On a Found page the
/// score and credit labels are read by element id; either may be absent,
/// which leaves that field `None` without changing the outcome.
pub fn extract_result(html: &str, roll: &str) -> FetchOutcome {
    if !has_result_marker(html) {
        return FetchOutcome::NotFound;
    }

    let document = Html::parse_document(html);
    FetchOutcome::Found(ResultRecord {
        roll: roll.to_string(),
        score: text_by_id(&document, SCORE_ELEMENT_ID),
        credit_total: text_by_id(&document, CREDIT_TOTAL_ELEMENT_ID),
        raw_page: html.to_string(),
    })
}

fn text_by_id(document: &Html, id: &str) -> Option<String> {
    let selector =
        crate::utils::parse_selector_with_fallback(&format!("#{}", id), "result field lookup");
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}
