//! Data passed between the form session, the fetch unit and the orchestrator.

use std::time::Duration;

use serde::Serialize;

use crate::config::{DEGREE_FIELD, EXAM_FIELD, INSTITUTE_FIELD, SEMESTER_FIELD};

/// Hidden form fields carried from one response into the next postback.
///
/// Keeps document order so the encoded body is stable. Setting an existing
/// key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    fields: Vec<(String, String)>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field pairs in submission order, ready for `RequestBuilder::form`.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.fields
    }
}

/// One entry of a dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// A dropdown choice: the control name and the option value picked in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionStep {
    pub field: String,
    pub value: String,
}

impl SelectionStep {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Dropdown choices in the order the form cascades through them.
///
/// Each step's option list on the server is computed from all the steps
/// before it, so the order here is the order of the postbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionPath {
    steps: Vec<SelectionStep>,
}

impl SelectionPath {
    pub fn new(steps: Vec<SelectionStep>) -> Self {
        Self { steps }
    }

    /// institute → degree → semester → exam, with the site's control names.
    pub fn standard(
        institute: impl Into<String>,
        degree: impl Into<String>,
        semester: impl Into<String>,
        exam: impl Into<String>,
    ) -> Self {
        Self::new(vec![
            SelectionStep::new(INSTITUTE_FIELD, institute),
            SelectionStep::new(DEGREE_FIELD, degree),
            SelectionStep::new(SEMESTER_FIELD, semester),
            SelectionStep::new(EXAM_FIELD, exam),
        ])
    }

    pub fn push(&mut self, step: SelectionStep) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[SelectionStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// A rendered grade report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub roll: String,
    pub score: Option<String>,
    pub credit_total: Option<String>,
    /// Full response body, handed to the archive.
    pub raw_page: String,
}

impl ResultRecord {
    /// Score as a finite number, if the label holds one.
    ///
    /// `NaN` and infinities parse as `f64` but are not scores.
    pub fn numeric_score(&self) -> Option<f64> {
        self.score
            .as_deref()
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|score| score.is_finite())
    }

    pub fn summary_row(&self) -> SummaryRow {
        SummaryRow {
            roll: self.roll.clone(),
            score: self.score.clone(),
            credit_total: self.credit_total.clone(),
        }
    }
}

/// Terminal outcome of one enrollment query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Found(ResultRecord),
    NotFound,
}

impl FetchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, FetchOutcome::Found(_))
    }

    pub fn record(&self) -> Option<&ResultRecord> {
        match self {
            FetchOutcome::Found(record) => Some(record),
            FetchOutcome::NotFound => None,
        }
    }
}

/// A fetch outcome with the wall time the walk took.
#[derive(Debug, Clone)]
pub struct FetchAttempt {
    pub roll: String,
    pub outcome: FetchOutcome,
    pub elapsed: Duration,
}

/// One line of the bulk summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    #[serde(rename = "Roll No")]
    pub roll: String,
    #[serde(rename = "SGPA")]
    pub score: Option<String>,
    #[serde(rename = "Credits")]
    pub credit_total: Option<String>,
}

/// The best score seen so far in a bulk run.
#[derive(Debug, Clone, PartialEq)]
pub struct TopRecord {
    pub roll: String,
    pub score: f64,
}
