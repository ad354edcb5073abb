//! Load and submit flow of the student editor page
//!
//! The controller is independent of Leptos: it talks to the backend through
//! [`StudentApi`] and to the page through [`EditorEffects`]. Remote failures
//! never escape; they become notifications, a redirect, or an auth reset.

use leptos::logging::{log, warn};

use crate::core::api::{ApiError, StudentApi};
use crate::core::notification::Notification;
use crate::core::student::{StudentForm, StudentId};
use crate::core::validation::{FieldError, validate_student};

/// Route the editor falls back to when a record cannot be loaded
pub const HOME_ROUTE: &str = "/";

/// Route of the create form
pub const NEW_STUDENT_ROUTE: &str = "/aluno";

/// Fallback message when the backend gives no reason
pub const UNKNOWN_ERROR: &str = "Unknown error";

pub fn edit_route(id: &StudentId) -> String {
    format!("/aluno/{}/edit", id)
}

/// Photo management page, served elsewhere
pub fn photos_route(id: &StudentId) -> String {
    format!("/fotos/{}", id)
}

/// Create or edit, depending on whether the route carries a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(StudentId),
}

impl EditorMode {
    /// Blank or missing route parameter means create mode
    pub fn from_route_param(param: Option<String>) -> Self {
        match param {
            Some(id) if !id.trim().is_empty() => EditorMode::Edit(StudentId::new(id)),
            _ => EditorMode::Create,
        }
    }

    pub fn id(&self) -> Option<&StudentId> {
        match self {
            EditorMode::Create => None,
            EditorMode::Edit(id) => Some(id),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, EditorMode::Edit(_))
    }

    pub fn title(&self) -> &'static str {
        match self {
            EditorMode::Create => "New student",
            EditorMode::Edit(_) => "Edit student",
        }
    }
}

/// Side effects the editor asks of its page
pub trait EditorEffects {
    fn notify(&self, notification: Notification);

    fn navigate(&self, path: &str);

    /// Reset global auth state after a 401
    fn login_failure(&self);

    fn set_loading(&self, loading: bool);

    /// Whether a load or submit is still in flight
    fn is_loading(&self) -> bool;
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Ignored because another request is in flight
    Busy,
    /// Blocked locally; nothing was sent
    Invalid(Vec<FieldError>),
    Created(StudentId),
    Updated,
    Failed(ApiError),
}

/// Fetch a record for edit mode.
///
/// Returns the populated form, or `None` after redirecting home.
pub async fn load_student<A, E>(api: &A, effects: &E, id: &StudentId) -> Option<StudentForm>
where
    A: StudentApi,
    E: EditorEffects,
{
    effects.set_loading(true);
    let result = api.get(id).await;
    effects.set_loading(false);

    match result {
        Ok(record) => {
            log!("Loaded student {}", id);
            Some(StudentForm::from(record))
        }
        Err(err) => {
            warn!("Failed to load student {}: {}", id, err);
            if err.is_bad_request() {
                for message in err.server_errors() {
                    effects.notify(Notification::error("Could not load student", message));
                }
            }
            effects.navigate(HOME_ROUTE);
            None
        }
    }
}

/// Validate the form and, if every rule passes, create or update the record
pub async fn submit_student<A, E>(
    api: &A,
    effects: &E,
    mode: &EditorMode,
    form: &StudentForm,
) -> SubmitOutcome
where
    A: StudentApi,
    E: EditorEffects,
{
    if effects.is_loading() {
        log!("Submit ignored while a request is in flight");
        return SubmitOutcome::Busy;
    }

    let validation = validate_student(form);
    if !validation.is_valid() {
        for message in validation.messages() {
            effects.notify(Notification::error("Invalid field", message));
        }
        return SubmitOutcome::Invalid(validation.errors);
    }

    let payload = form.payload();
    effects.set_loading(true);

    let outcome = match mode {
        EditorMode::Create => match api.create(&payload).await {
            Ok(created) => SubmitOutcome::Created(created.id),
            Err(err) => SubmitOutcome::Failed(err),
        },
        EditorMode::Edit(id) => match api.update(id, &payload).await {
            Ok(_) => SubmitOutcome::Updated,
            Err(err) => SubmitOutcome::Failed(err),
        },
    };

    effects.set_loading(false);

    match &outcome {
        SubmitOutcome::Created(id) => {
            log!("Created student {}", id);
            effects.notify(Notification::success(
                "Student created",
                "Student created successfully!",
            ));
            effects.navigate(&edit_route(id));
        }
        SubmitOutcome::Updated => {
            effects.notify(Notification::success(
                "Student updated",
                "Student updated successfully!",
            ));
        }
        SubmitOutcome::Failed(err) => report_submit_error(effects, err),
        SubmitOutcome::Busy | SubmitOutcome::Invalid(_) => {}
    }

    outcome
}

fn report_submit_error<E: EditorEffects>(effects: &E, err: &ApiError) {
    warn!("Failed to save student: {}", err);

    let messages = err.server_errors();
    if messages.is_empty() {
        effects.notify(Notification::error("Request failed", UNKNOWN_ERROR));
    } else {
        for message in messages {
            effects.notify(Notification::error("Request failed", message));
        }
    }

    if err.is_unauthorized() {
        effects.login_failure();
    }
}
