//! Contact form submission flow.
//!
//! One submit event drives exactly one request through [`FormTransport`].
//! The resulting [`FormSubmissionOutcome`] decides the feedback copy; the
//! submit control is always re-enabled and the feedback always shown once
//! the request settles.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures never escape [`submit`]. They become user-facing
//! feedback text and are otherwise dropped: no retry, no logging.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::config::ContactCopy;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("submission rejected with status {status}")]
    Rejected { status: u16 },
    #[error("network error: {0}")]
    Network(String),
}

impl SubmitError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Rejected { .. } => "E_SUBMIT_REJECTED",
            Self::Network(_) => "E_SUBMIT_NETWORK",
        }
    }
}

/// Map an HTTP status to success (2xx) or rejection.
///
/// # Errors
///
/// Returns [`SubmitError::Rejected`] for any status outside `200..300`.
pub fn check_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(SubmitError::Rejected { status }) }
}

/// Result of one submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormSubmissionOutcome {
    Success,
    ServerRejected { status: u16 },
    NetworkFailure,
}

impl From<&Result<(), SubmitError>> for FormSubmissionOutcome {
    fn from(result: &Result<(), SubmitError>) -> Self {
        match result {
            Ok(()) => Self::Success,
            Err(SubmitError::Rejected { status }) => Self::ServerRejected { status: *status },
            Err(SubmitError::Network(_)) => Self::NetworkFailure,
        }
    }
}

impl FormSubmissionOutcome {
    /// Feedback text and colour for this outcome.
    pub fn feedback<'a>(self, copy: &'a ContactCopy) -> (&'a str, &'a str) {
        match self {
            Self::Success => (&copy.success_text, &copy.success_color),
            Self::ServerRejected { .. } => (&copy.error_text, &copy.error_color),
            Self::NetworkFailure => (&copy.network_text, &copy.error_color),
        }
    }
}

/// Where and how the form posts. The body is the form's own field set,
/// which the transport encodes as multipart form data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormRequest {
    pub action: String,
    pub method: String,
    pub accept: String,
}

/// Sends one form submission and reports the response status.
#[allow(async_fn_in_trait)]
pub trait FormTransport {
    /// # Errors
    ///
    /// Returns [`SubmitError::Network`] when no response was received.
    async fn send(&self, request: &FormRequest) -> Result<u16, SubmitError>;
}

/// Page elements the submission flow updates.
pub trait FormView {
    fn render(&mut self, state: &ContactFormState);
    fn clear_fields(&mut self);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitButtonView {
    pub disabled: bool,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedbackView {
    pub text: String,
    pub color: Option<String>,
    pub visible: bool,
}

/// Visible state of the submit control and feedback element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactFormState {
    pub button: SubmitButtonView,
    pub feedback: FeedbackView,
    original_label: String,
}

impl ContactFormState {
    /// Capture the submit control's resting label. Blank labels fall back to
    /// `copy.default_label`.
    pub fn new(original_label: Option<&str>, copy: &ContactCopy) -> Self {
        let original_label = original_label
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .unwrap_or(copy.default_label.as_str())
            .to_owned();
        Self {
            button: SubmitButtonView { disabled: false, label: original_label.clone() },
            feedback: FeedbackView::default(),
            original_label,
        }
    }

    #[cfg(test)]
    pub(crate) fn original_label(&self) -> &str {
        &self.original_label
    }

    /// Request in flight: lock the control and hide stale feedback.
    pub fn begin(&mut self, copy: &ContactCopy) {
        self.button.disabled = true;
        self.button.label.clone_from(&copy.sending_label);
        self.feedback.visible = false;
    }

    /// Request settled: show the outcome and release the control.
    pub fn finish(&mut self, outcome: FormSubmissionOutcome, copy: &ContactCopy) {
        let (text, color) = outcome.feedback(copy);
        self.feedback.text = text.to_owned();
        self.feedback.color = Some(color.to_owned());
        self.feedback.visible = true;
        self.button.disabled = false;
        self.button.label.clone_from(&self.original_label);
    }
}

/// Run one submission: lock the form, send, report, release.
pub async fn submit<T, V>(
    transport: &T,
    view: &mut V,
    state: &mut ContactFormState,
    request: &FormRequest,
    copy: &ContactCopy,
) -> FormSubmissionOutcome
where
    T: FormTransport,
    V: FormView,
{
    state.begin(copy);
    view.render(state);

    let result = transport.send(request).await.and_then(check_status);
    let outcome = FormSubmissionOutcome::from(&result);
    if outcome == FormSubmissionOutcome::Success {
        view.clear_fields();
    }

    state.finish(outcome, copy);
    view.render(state);
    outcome
}
