//! Query form controller: address field state plus the search state machine.
//!
//! Each submission gets a request id from a monotonically increasing counter.
//! Only the outcome carrying the latest id is applied, so a slow response to
//! an older submission can never overwrite a newer one.

use fibercheck_core::{AddressQuery, CoreError, CoverageResult, Field, Locale};

use crate::client::{CoverageClient, LookupOutcome};
use crate::error::LookupError;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Loaded {
        query: AddressQuery,
        results: Vec<CoverageResult>,
    },
}

/// A submission that has been started but not yet completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLookup {
    pub request_id: u64,
    /// Snapshot of the form at submit time.
    pub query: AddressQuery,
}

#[derive(Debug, Clone, Default)]
pub struct SearchController {
    query: AddressQuery,
    state: SearchState,
    locale: Locale,
    latest_request: u64,
    last_loaded: Option<(AddressQuery, Vec<CoverageResult>)>,
}

impl SearchController {
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn query(&self) -> &AddressQuery {
        &self.query
    }

    #[must_use]
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Whether a lookup is outstanding. Front-ends disable their submit
    /// trigger while this is true.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, SearchState::Loading)
    }

    /// Most recent successful result, kept across later errors.
    #[must_use]
    pub fn last_loaded(&self) -> Option<(&AddressQuery, &[CoverageResult])> {
        self.last_loaded
            .as_ref()
            .map(|(query, results)| (query, results.as_slice()))
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.query.set(field, value);
    }

    /// # Errors
    ///
    /// Returns [`CoreError::UnknownField`] if `name` is not a form field.
    pub fn set_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), CoreError> {
        let field = name.parse::<Field>()?;
        self.set_field(field, value);
        Ok(())
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.query.is_submittable()
    }

    /// Starts a submission: moves to `Loading` and returns the request to
    /// issue. Returns `None` (and changes nothing) when the form is
    /// incomplete.
    pub fn begin_submit(&mut self) -> Option<PendingLookup> {
        if !self.can_submit() {
            tracing::debug!("submit ignored: address incomplete");
            return None;
        }

        self.latest_request += 1;
        self.state = SearchState::Loading;
        Some(PendingLookup {
            request_id: self.latest_request,
            query: self.query.clone(),
        })
    }

    /// Applies the outcome of `pending`. Returns `false` and leaves state
    /// untouched when a newer submission has been started since.
    pub fn complete(
        &mut self,
        pending: PendingLookup,
        outcome: Result<LookupOutcome, LookupError>,
    ) -> bool {
        if pending.request_id != self.latest_request {
            tracing::debug!(
                request_id = pending.request_id,
                latest = self.latest_request,
                "discarding stale lookup response"
            );
            return false;
        }

        self.state = match outcome {
            Ok(LookupOutcome::NoContent) => self.loaded(pending.query, Vec::new()),
            Ok(LookupOutcome::Payload(payload)) => self.loaded(
                payload.query.unwrap_or(pending.query),
                payload.results.unwrap_or_default(),
            ),
            Err(err) => {
                tracing::warn!(error = %err, request_id = pending.request_id, "coverage lookup failed");
                SearchState::Error(err.user_message(self.locale))
            }
        };
        true
    }

    /// Validates, issues the lookup through `client` and applies the
    /// outcome. Returns `false` when the form was not submittable.
    pub async fn submit(&mut self, client: &CoverageClient) -> bool {
        let Some(pending) = self.begin_submit() else {
            return false;
        };
        let outcome = client.lookup(&pending.query).await;
        self.complete(pending, outcome);
        true
    }

    fn loaded(&mut self, query: AddressQuery, results: Vec<CoverageResult>) -> SearchState {
        self.last_loaded = Some((query.clone(), results.clone()));
        SearchState::Loaded { query, results }
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
