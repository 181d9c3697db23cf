use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::toast::Toasts;

pub const SUCCESS_MESSAGE: &str = "Event created successfully!";
pub const DEFAULT_EVENT_IMAGE: &str =
    "https://images.unsplash.com/photo-1511795409834-ef04bbd61622?w=800&h=600&fit=crop";

/// In-progress hosting form input. Tags are the comma-delimited text the
/// form collects, splitting happens server-side.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub tags: String,
    pub description: String,
    pub image: String,
}

impl Default for EventDraft {
    fn default() -> Self {
        EventDraft {
            title: String::new(),
            date: String::new(),
            time: String::new(),
            location: String::new(),
            tags: String::new(),
            description: String::new(),
            image: DEFAULT_EVENT_IMAGE.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Date,
    Time,
    Location,
    Tags,
    Description,
    Image,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Closed,
    Idle,
    Submitting,
    Error(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct SubmitError(pub String);

/// The event-creation collaborator the form hands a finished draft to.
/// Futures stay on the session's thread, matching the single-owner model.
#[async_trait(?Send)]
pub trait SubmitEvents {
    async fn submit(&self, draft: &EventDraft) -> Result<(), SubmitError>;
}

/// External sign-in check. An unauthenticated open is forwarded to the
/// identity collaborator instead of opening the form.
pub trait SignInGate {
    fn is_signed_in(&self) -> bool;
    fn request_sign_in(&self);
}

/// Presence check over the draft, in the order the form lays the fields
/// out. The first blank field decides the message.
pub fn validate(draft: &EventDraft) -> Result<(), String> {
    let checks = [
        (draft.title.as_str(), "Event title is required"),
        (draft.date.as_str(), "Event date is required"),
        (draft.time.as_str(), "Event time is required"),
        (draft.location.as_str(), "Event location is required"),
        (draft.tags.as_str(), "Event tags are required"),
        (draft.description.as_str(), "Event description is required"),
    ];
    for (value, message) in checks {
        if value.trim().is_empty() {
            return Err(message.to_string());
        }
    }

    Ok(())
}

/// The hosting modal's controller. Owns the draft and a form-global error;
/// the submission lifecycle cannot overlap itself.
#[derive(Default)]
pub struct HostForm {
    state: FormState,
    draft: EventDraft,
}

impl HostForm {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, FormState::Closed)
    }

    /// Opens the form with a fresh draft, or bounces to the sign-in flow.
    pub fn open(&mut self, gate: &dyn SignInGate) -> bool {
        if !gate.is_signed_in() {
            gate.request_sign_in();
            return false;
        }
        if self.is_open() {
            return true;
        }
        self.draft = EventDraft::default();
        self.state = FormState::Idle;

        true
    }

    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        match self.state {
            FormState::Idle | FormState::Error(_) => {}
            _ => return,
        }
        let value = value.into();
        match field {
            DraftField::Title => self.draft.title = value,
            DraftField::Date => self.draft.date = value,
            DraftField::Time => self.draft.time = value,
            DraftField::Location => self.draft.location = value,
            DraftField::Tags => self.draft.tags = value,
            DraftField::Description => self.draft.description = value,
            DraftField::Image => self.draft.image = value,
        }
        if matches!(self.state, FormState::Error(_)) {
            self.state = FormState::Idle;
        }
    }

    /// Validates and, if the draft holds up, enters Submitting. Returns
    /// whether the submission may proceed.
    pub fn begin_submit(&mut self) -> bool {
        match self.state {
            FormState::Idle | FormState::Error(_) => {}
            _ => return false,
        }
        if let Err(message) = validate(&self.draft) {
            self.state = FormState::Error(message);
            return false;
        }
        self.state = FormState::Submitting;

        true
    }

    /// Runs the whole submission lifecycle against the event-creation
    /// collaborator. On success the draft resets, the form closes and the
    /// success toast is armed; on failure the form stays open for a retry.
    pub async fn submit(&mut self, submitter: &dyn SubmitEvents, toasts: &mut Toasts) -> bool {
        if !self.begin_submit() {
            return false;
        }
        tracing::debug!(draft = ?self.draft, "submitting event draft");

        match submitter.submit(&self.draft).await {
            Ok(()) => {
                self.draft = EventDraft::default();
                self.state = FormState::Closed;
                toasts.show(SUCCESS_MESSAGE);
                true
            }
            Err(err) => {
                self.state = FormState::Error(err.0);
                false
            }
        }
    }

    /// Discards the draft and closes. Disabled mid-submission; the modal's
    /// outside-interaction dismissal routes here as well.
    pub fn cancel(&mut self) {
        match self.state {
            FormState::Closed | FormState::Submitting => {}
            _ => {
                self.draft = EventDraft::default();
                self.state = FormState::Closed;
            }
        }
    }
}
