//! Form session: one cookie-carrying client walking the result form.
//!
//! The form is a WebForms page whose dropdowns cascade through postbacks.
//! A walk goes Init → Step₁ … Stepₙ → Searching → {Found, NotFound}:
//!
//! 1. `GET` the page and seed the session state from its hidden inputs.
//! 2. For each selection step, in order: current hidden state, plus
//!    `__EVENTTARGET` naming the step's control, plus the values of this
//!    step **and every step before it**; `POST`; replace the hidden state
//!    wholesale from the response.
//! 3. Search: current hidden state, every selection value, the enrollment
//!    number and the search button; `POST`.
//! 4. Read the grade report (if any) from the search response.
//!
//! A path of n steps costs exactly n + 2 requests.

use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::config::{
    Config, ENROLLMENT_FIELD, EVENT_TARGET_FIELD, SEARCH_BUTTON_FIELD, SEARCH_BUTTON_VALUE,
};
use crate::error_handling::FetchError;
use crate::models::{FetchOutcome, SelectOption, SelectionPath, SelectionStep, SessionState};
use crate::page::{extract_hidden, extract_options, extract_result};

/// A single, exclusively owned walk through the result form.
///
/// Owns its HTTP client (and therefore its cookie jar) and its hidden
/// state. Never share one between concurrent fetches: the server keeps one
/// view-state per session and interleaved postbacks would corrupt it.
pub struct FormSession {
    client: reqwest::Client,
    base_url: String,
    state: SessionState,
    applied: Vec<SelectionStep>,
    last_page: Option<String>,
    requests_sent: usize,
}

impl FormSession {
    /// Creates a session with a fresh client built from `config`.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = crate::initialization::init_client(config)?;
        Ok(Self::with_client(client, config.base_url.clone()))
    }

    /// Creates a session around an existing client.
    ///
    /// The client's cookie jar becomes part of this session's state.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            state: SessionState::new(),
            applied: Vec::new(),
            last_page: None,
            requests_sent: 0,
        }
    }

    /// Hidden fields that the next postback will echo.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Selection steps applied so far, in order.
    pub fn applied_steps(&self) -> &[SelectionStep] {
        &self.applied
    }

    /// Number of HTTP requests issued by this session.
    pub fn requests_sent(&self) -> usize {
        self.requests_sent
    }

    /// Options currently offered by dropdown `field` on the last page received.
    pub fn options(&self, field: &str) -> Vec<SelectOption> {
        self.last_page
            .as_deref()
            .map(|page| extract_options(page, field))
            .unwrap_or_default()
    }

    /// Init: loads the form and seeds the hidden state.
    ///
    /// Loading again starts the cascade over.
    pub async fn load(&mut self) -> Result<(), FetchError> {
        debug!("GET {}", self.base_url);
        self.requests_sent += 1;
        let page = self
            .client
            .get(&self.base_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        self.applied.clear();
        self.absorb(page);
        Ok(())
    }

    /// Posts back one dropdown change.
    ///
    /// The body re-sends every previously applied selection alongside the
    /// new one; the server computes each option list from the full prefix.
    pub async fn apply_step(&mut self, step: SelectionStep) -> Result<(), FetchError> {
        self.ensure_loaded()?;

        let mut form = self.state.clone();
        form.set(EVENT_TARGET_FIELD, step.field.as_str());
        for prior in &self.applied {
            form.set(prior.field.as_str(), prior.value.as_str());
        }
        form.set(step.field.as_str(), step.value.as_str());

        debug!(
            "Postback {}={} (step {}, {} fields)",
            step.field,
            step.value,
            self.applied.len() + 1,
            form.len()
        );
        let page = self.post(&form).await?;
        self.applied.push(step);
        self.absorb(page);
        Ok(())
    }

    /// Submits the enrollment search and reads the outcome.
    ///
    /// This is a plain submit: no `__EVENTTARGET` override, the button
    /// name/value pair identifies the action instead.
    pub async fn search(&mut self, enrollment: &str) -> Result<FetchOutcome, FetchError> {
        self.ensure_loaded()?;

        let mut form = self.state.clone();
        for step in &self.applied {
            form.set(step.field.as_str(), step.value.as_str());
        }
        form.set(ENROLLMENT_FIELD, enrollment);
        form.set(SEARCH_BUTTON_FIELD, SEARCH_BUTTON_VALUE);

        debug!("Search {} ({} fields)", enrollment, form.len());
        let page = self.post(&form).await?;
        let outcome = extract_result(&page, enrollment);
        self.absorb(page);
        Ok(outcome)
    }

    /// Runs the whole walk, propagating the first failure.
    pub async fn try_walk(
        &mut self,
        path: &SelectionPath,
        enrollment: &str,
    ) -> Result<FetchOutcome, FetchError> {
        self.load().await?;
        for step in path.steps() {
            self.apply_step(step.clone()).await?;
        }
        self.search(enrollment).await
    }

    /// Runs the whole walk and never fails.
    ///
    /// Transport and protocol failures are logged and reported as
    /// `NotFound`, together with the time spent up to the failure.
    pub async fn walk(&mut self, path: &SelectionPath, enrollment: &str) -> (FetchOutcome, Duration) {
        let start = Instant::now();
        let outcome = match self.try_walk(path, enrollment).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Walk for {} failed: {}", enrollment, e);
                FetchOutcome::NotFound
            }
        };
        (outcome, start.elapsed())
    }

    async fn post(&mut self, form: &SessionState) -> Result<String, FetchError> {
        self.requests_sent += 1;
        let page = self
            .client
            .post(&self.base_url)
            .form(form.pairs())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(page)
    }

    fn absorb(&mut self, page: String) {
        self.state = extract_hidden(&page);
        if self.state.is_empty() {
            debug!("Response carried no hidden fields");
        }
        self.last_page = Some(page);
    }

    fn ensure_loaded(&self) -> Result<(), FetchError> {
        if self.last_page.is_none() {
            return Err(FetchError::Protocol(
                "form must be loaded before posting back".to_string(),
            ));
        }
        Ok(())
    }
}
