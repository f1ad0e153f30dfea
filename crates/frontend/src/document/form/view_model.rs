use crate::shared::api::DocumentApi;
use crate::shared::toast::ToastService;
use contracts::document::{Document, DocumentDraft, TemplateType};
use contracts::validation::{validate, DraftErrors};
use leptos::prelude::*;

/// State of the document generation form: the draft being edited, its field
/// errors, and the in-flight flag.
///
/// All transitions are plain methods so the widget stays a thin shell around
/// this struct. Two invariants are enforced here rather than in the view:
///
/// - at most one create request is in flight; a submit while one is running
///   is a no-op, so repeated clicks cannot fire duplicate network calls;
/// - a draft with field errors never reaches the transport layer.
#[derive(Clone, Debug, Default)]
pub struct FormState {
    pub draft: DocumentDraft,
    pub errors: DraftErrors,
    pub submitting: bool,
}

impl FormState {
    // Editing a field clears its previous error

    pub fn set_name(&mut self, value: String) {
        self.draft.name = value;
        self.errors.name = None;
    }

    pub fn set_date(&mut self, value: String) {
        self.draft.date = value;
        self.errors.date = None;
    }

    pub fn set_amount(&mut self, value: f64) {
        self.draft.amount = value;
        self.errors.amount = None;
    }

    pub fn set_template(&mut self, value: TemplateType) {
        self.draft.template_type = value;
    }

    /// Begin a submit. Returns the draft to send, or `None` when nothing
    /// should be sent: either a request is already in flight (re-entrant
    /// submit is a no-op) or validation failed (field errors are stored and
    /// block submission without any network call).
    pub fn begin_submit(&mut self) -> Option<DocumentDraft> {
        if self.submitting {
            return None;
        }
        let errors = validate(&self.draft);
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }
        self.errors = DraftErrors::default();
        self.submitting = true;
        Some(self.draft.clone())
    }

    /// Finish a submit. On success the draft resets to empty defaults; on
    /// failure it is preserved so the user can correct and retry.
    pub fn finish_submit(&mut self, succeeded: bool) {
        if succeeded {
            self.draft = DocumentDraft::default();
        }
        self.submitting = false;
    }
}

/// ViewModel for the document generation form: [`FormState`] behind a signal,
/// plus the async submit flow (validate, normalize, create, reset).
#[derive(Clone, Copy)]
pub struct DocumentFormViewModel {
    pub state: RwSignal<FormState>,
}

impl DocumentFormViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(FormState::default()),
        }
    }

    pub fn set_name(&self, value: String) {
        self.state.update(|s| s.set_name(value));
    }

    pub fn set_date(&self, value: String) {
        self.state.update(|s| s.set_date(value));
    }

    pub fn set_amount(&self, value: f64) {
        self.state.update(|s| s.set_amount(value));
    }

    pub fn set_template(&self, value: TemplateType) {
        self.state.update(|s| s.set_template(value));
    }

    pub fn submit(&self, api: DocumentApi, toast: ToastService, on_created: Callback<Document>) {
        let Some(draft) = self.state.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };

        let state = self.state;
        leptos::task::spawn_local(async move {
            match api.generate(&draft).await {
                Ok(document) => {
                    toast.success("Document generated successfully");
                    state.update(|s| s.finish_submit(true));
                    on_created.run(document);
                }
                Err(e) => {
                    toast.error(e.message);
                    state.update(|s| s.finish_submit(false));
                }
            }
        });
    }
}

impl Default for DocumentFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_state() -> FormState {
        FormState {
            draft: DocumentDraft {
                name: "Acme".to_string(),
                date: "2024-03-05".to_string(),
                amount: 100.0,
                template_type: TemplateType::Receipt,
            },
            ..FormState::default()
        }
    }

    #[test]
    fn test_begin_submit_returns_valid_draft() {
        let mut state = valid_state();
        let draft = state.begin_submit().expect("valid draft must be sent");
        assert_eq!(draft.name, "Acme");
        assert!(state.submitting);
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_reentrant_submit_is_a_no_op() {
        let mut state = valid_state();
        assert!(state.begin_submit().is_some());
        assert!(
            state.begin_submit().is_none(),
            "second submit while in flight must not send"
        );
        assert!(state.submitting);
    }

    #[test]
    fn test_invalid_draft_blocks_submission_without_sending() {
        let mut state = FormState::default();
        assert!(state.begin_submit().is_none());
        assert!(!state.submitting, "validation failure never goes in flight");
        assert!(state.errors.name.is_some());
        assert!(state.errors.date.is_some());
        assert!(state.errors.amount.is_some());
    }

    #[test]
    fn test_success_resets_draft_to_defaults() {
        let mut state = valid_state();
        state.draft.template_type = TemplateType::Invoice;
        assert!(state.begin_submit().is_some());

        state.finish_submit(true);
        assert_eq!(state.draft, DocumentDraft::default());
        assert!(!state.submitting);
    }

    #[test]
    fn test_failure_preserves_draft_for_retry() {
        let mut state = valid_state();
        assert!(state.begin_submit().is_some());

        state.finish_submit(false);
        assert_eq!(state.draft.name, "Acme");
        assert_eq!(state.draft.date, "2024-03-05");
        assert!(!state.submitting);
        assert!(state.begin_submit().is_some(), "retry must be allowed");
    }

    #[test]
    fn test_editing_a_field_clears_its_error() {
        let mut state = FormState::default();
        assert!(state.begin_submit().is_none());
        assert!(state.errors.name.is_some());

        state.set_name("Acme".to_string());
        assert!(state.errors.name.is_none());
        assert!(state.errors.date.is_some(), "other errors stay");
    }
}
