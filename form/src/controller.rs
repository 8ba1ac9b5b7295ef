use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use client::MetadataBackend;
use config::{ResponseOrdering, WizardSettings};
use errors::{ClientError, FormError};
use parking_lot::RwLock;
use serde_json::Value;
use tracing::{debug, error, info, warn};
use wizard_core::{Configuration, Field, FieldValue, Operation};

use crate::outcome::SubmitOutcome;

#[derive(Default)]
struct FormState {
    configuration: Arc<Configuration>,
    endpoint_base: Option<String>,
    last_response: Option<SubmitOutcome>,
    /// Request id of the response currently on display.
    applied_request: u64
}

struct Inner {
    backend: Arc<dyn MetadataBackend>,
    ordering: ResponseOrdering,
    next_request: AtomicU64,
    state: RwLock<FormState>
}

/// State holder behind the configuration form.
///
/// Cloning is cheap and every clone shares the same state, so a submit can
/// be spawned onto its own task while edits keep flowing. Locks are never
/// held across the network call.
#[derive(Clone)]
pub struct FormController {
    inner: Arc<Inner>
}

impl FormController {
    pub fn new(backend: Arc<dyn MetadataBackend>) -> Self {
        Self::with_ordering(backend, ResponseOrdering::default())
    }

    pub fn with_ordering(backend: Arc<dyn MetadataBackend>, ordering: ResponseOrdering) -> Self {
        Self {
            inner: Arc::new(Inner {
                backend,
                ordering,
                next_request: AtomicU64::new(0),
                state: RwLock::new(FormState::default())
            })
        }
    }

    /// Controller with the endpoint base and response ordering taken from
    /// `settings`.
    pub fn from_settings(backend: Arc<dyn MetadataBackend>, settings: &WizardSettings) -> Self {
        let form = Self::with_ordering(backend, settings.response_ordering);
        if let Some(endpoint) = &settings.endpoint_base {
            form.set_endpoint_base(endpoint.clone());
        }
        form
    }

    // ========================================================================
    // Edits
    // ========================================================================

    /// Write `value` into `field` and publish the new configuration.
    ///
    /// The previous snapshot is left intact for anyone still holding it.
    pub fn apply_edit(
        &self,
        field: Field,
        value: FieldValue
    ) -> Result<Arc<Configuration>, FormError> {
        let mut state = self.inner.state.write();
        let next = Arc::new(state.configuration.with_edit(field, value)?);
        state.configuration = Arc::clone(&next);
        debug!("Applied edit to {}", field);
        Ok(next)
    }

    /// [`apply_edit`](Self::apply_edit) addressed by wire names, as the form
    /// controls report them.
    pub fn apply_raw_edit(
        &self,
        group: &str,
        field: &str,
        value: FieldValue
    ) -> Result<Arc<Configuration>, FormError> {
        let field = Field::parse(group, field)?;
        self.apply_edit(field, value)
    }

    /// Replace the endpoint base. Not validated until a submit uses it.
    pub fn set_endpoint_base(&self, value: impl Into<String>) {
        let value = value.into();
        debug!("Endpoint base set to {}", value);
        self.inner.state.write().endpoint_base = Some(value);
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn configuration(&self) -> Arc<Configuration> {
        Arc::clone(&self.inner.state.read().configuration)
    }

    pub fn endpoint_base(&self) -> Option<String> {
        self.inner.state.read().endpoint_base.clone()
    }

    pub fn last_outcome(&self) -> Option<SubmitOutcome> {
        self.inner.state.read().last_response.clone()
    }

    /// JSON currently on display, if any submit has resolved.
    pub fn last_response(&self) -> Option<Value> {
        self.last_outcome().map(|outcome| outcome.display_value())
    }

    pub fn ordering(&self) -> ResponseOrdering {
        self.inner.ordering
    }

    /// Pretty-printed body the next submit would send.
    pub fn request_body(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self.configuration().as_ref())
    }

    // ========================================================================
    // Submit
    // ========================================================================

    /// Send the current configuration to `operation` and display the result.
    ///
    /// Never fails: transport errors, error statuses, malformed bodies and a
    /// missing endpoint all become [`SubmitOutcome::Failure`]. Concurrent
    /// submits are not serialized; which one ends up on display depends on
    /// the configured [`ResponseOrdering`].
    pub async fn submit(&self, operation: Operation) -> SubmitOutcome {
        let request_id = self.inner.next_request.fetch_add(1, AtomicOrdering::SeqCst) + 1;
        let (snapshot, endpoint) = {
            let state = self.inner.state.read();
            (Arc::clone(&state.configuration), state.endpoint_base.clone())
        };

        let outcome = match self
            .dispatch(operation, endpoint.as_deref(), &snapshot)
            .await
        {
            Ok(value) => {
                info!(request_id, %operation, "Backend request succeeded");
                SubmitOutcome::Success(value)
            }
            Err(e) => {
                error!(request_id, %operation, error = %e, "Backend request failed");
                SubmitOutcome::failure()
            }
        };

        self.record(request_id, operation, outcome.clone());
        outcome
    }

    async fn dispatch(
        &self,
        operation: Operation,
        endpoint: Option<&str>,
        snapshot: &Configuration
    ) -> Result<Value, ClientError> {
        let base = endpoint
            .filter(|base| !base.trim().is_empty())
            .ok_or(ClientError::EndpointNotSet)?;
        let url = operation.url(base);
        info!(%url, "Dispatching backend request");
        self.inner.backend.post_json(&url, snapshot).await
    }

    fn record(&self, request_id: u64, operation: Operation, outcome: SubmitOutcome) {
        let mut state = self.inner.state.write();
        if self.inner.ordering == ResponseOrdering::LatestRequestWins
            && request_id < state.applied_request
        {
            warn!(
                request_id,
                applied = state.applied_request,
                %operation,
                "Dropping response from a superseded request"
            );
            return;
        }
        state.applied_request = request_id;
        state.last_response = Some(outcome);
    }
}
