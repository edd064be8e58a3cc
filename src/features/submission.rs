//! The submit cycle every auth screen shares: clear old field errors, validate,
//! post to the API, then report the result. Screens differ only in their
//! schema, request body, endpoint, and what happens on success, which they
//! describe through [`Screen`].
//!
//! Flow Overview: `Idle -> Submitting -> Resolved(outcome)`. Validation
//! failures become field messages and never reach the network. Network,
//! server, and missing-token failures become one generic error notification
//! and never touch field messages.

use crate::{
    app_lib::{AppError, ApiTransport},
    features::{
        navigation::{NavigationContext, Navigator},
        notifications::{Notification, Notifier},
    },
    forms::{FieldErrors, FormPayload, Schema, ValidationErrors, field_errors},
};
use serde::Serialize;
use std::{fmt, marker::PhantomData};
use tracing::{debug, instrument, warn};

/// The form a handler reports back to.
pub trait FormHandle {
    fn set_field_errors(&self, errors: FieldErrors);
    fn reset_field_errors(&self);
    /// Toggles the submit button's loading state. Screens without one ignore it.
    fn set_loading(&self, _loading: bool) {}
}

/// What a screen does once the API accepted the request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuccessEffect {
    pub notification: Option<Notification>,
    pub redirect: Option<&'static str>,
}

/// Describes one auth screen.
pub trait Screen {
    type Request: Serialize;

    /// Label used in log fields.
    const NAME: &'static str;
    /// API path the request body is posted to.
    const ENDPOINT: &'static str;
    /// Whether the screen shows a loading state while submitting.
    const TRACKS_LOADING: bool = false;

    fn schema() -> Schema;

    /// Shapes the validated payload into the request body. Runs only after
    /// validation passed.
    fn build_request(
        payload: &FormPayload,
        navigation: &NavigationContext,
    ) -> Result<Self::Request, AppError>;

    fn on_success() -> SuccessEffect;

    fn failure_notification() -> Notification;
}

/// Why a cycle did not succeed, decided where the failure happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    Validation(ValidationErrors),
    Operation(AppError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Validation(errors) => write!(formatter, "{errors}"),
            SubmitError::Operation(err) => write!(formatter, "{err}"),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<ValidationErrors> for SubmitError {
    fn from(errors: ValidationErrors) -> Self {
        SubmitError::Validation(errors)
    }
}

impl From<AppError> for SubmitError {
    fn from(err: AppError) -> Self {
        SubmitError::Operation(err)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Validation failed; carries the messages pushed to the form.
    Invalid(FieldErrors),
    /// The request could not be completed.
    Failed(AppError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Resolved(Outcome),
}

/// Drives [`Screen`] submissions against injected collaborators.
pub struct SubmissionHandler<S, A, N, F, R> {
    api: A,
    notifier: N,
    form: F,
    navigator: R,
    state: SubmissionState,
    screen: PhantomData<S>,
}

impl<S, A, N, F, R> SubmissionHandler<S, A, N, F, R>
where
    S: Screen,
    A: ApiTransport,
    N: Notifier,
    F: FormHandle,
    R: Navigator,
{
    pub fn new(api: A, notifier: N, form: F, navigator: R) -> Self {
        Self {
            api,
            notifier,
            form,
            navigator,
            state: SubmissionState::Idle,
            screen: PhantomData,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Runs one full cycle for `payload`. The exclusive borrow keeps two
    /// cycles from overlapping on the same handler.
    ///
    /// `navigation` is read once, after validation, for values such as the
    /// reset token. A cycle dropped before it finishes leaves the handler
    /// `Idle` and the loading state cleared.
    #[instrument(skip_all, fields(screen = S::NAME))]
    pub async fn submit(
        &mut self,
        payload: &FormPayload,
        navigation: &NavigationContext,
    ) -> Outcome {
        let Self {
            api,
            notifier,
            form,
            navigator,
            state,
            ..
        } = self;

        let cycle = CycleGuard::enter(state, form, S::TRACKS_LOADING);
        form.reset_field_errors();

        let outcome = match run::<S, A>(api, payload, navigation).await {
            Ok(()) => {
                let effect = S::on_success();
                if let Some(notification) = effect.notification {
                    notifier.notify(notification);
                }
                if let Some(path) = effect.redirect {
                    navigator.navigate(path);
                }
                debug!("submission succeeded");
                Outcome::Success
            }
            Err(SubmitError::Validation(errors)) => {
                let messages = field_errors(&errors);
                debug!(fields = ?messages.keys().collect::<Vec<_>>(), "validation failed");
                form.set_field_errors(messages.clone());
                Outcome::Invalid(messages)
            }
            Err(SubmitError::Operation(err)) => {
                warn!(kind = err.kind(), "submission failed: {err}");
                notifier.notify(S::failure_notification());
                Outcome::Failed(err)
            }
        };

        cycle.resolve(outcome.clone());
        outcome
    }
}

async fn run<S: Screen, A: ApiTransport>(
    api: &A,
    payload: &FormPayload,
    navigation: &NavigationContext,
) -> Result<(), SubmitError> {
    S::schema().validate(payload)?;
    let request = S::build_request(payload, navigation)?;
    post_request(api, S::ENDPOINT, &request).await?;
    Ok(())
}

/// Serializes `request` and posts it through the transport.
pub async fn post_request<A: ApiTransport, B: Serialize>(
    api: &A,
    path: &str,
    request: &B,
) -> Result<(), AppError> {
    let body = serde_json::to_value(request)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    debug!(path, "posting request");
    api.post_json(path, &body).await
}

/// Holds the handler in `Submitting` and the form loading for one cycle.
/// Dropping it without [`CycleGuard::resolve`] returns the handler to `Idle`.
struct CycleGuard<'a, F: FormHandle> {
    state: &'a mut SubmissionState,
    form: &'a F,
    loading: bool,
}

impl<'a, F: FormHandle> CycleGuard<'a, F> {
    fn enter(state: &'a mut SubmissionState, form: &'a F, loading: bool) -> Self {
        *state = SubmissionState::Submitting;
        if loading {
            form.set_loading(true);
        }
        Self {
            state,
            form,
            loading,
        }
    }

    fn resolve(self, outcome: Outcome) {
        *self.state = SubmissionState::Resolved(outcome);
    }
}

impl<F: FormHandle> Drop for CycleGuard<'_, F> {
    fn drop(&mut self) {
        if *self.state == SubmissionState::Submitting {
            *self.state = SubmissionState::Idle;
        }
        if self.loading {
            self.form.set_loading(false);
        }
    }
}
