use crate::dates::is_iso_date_shape;
use crate::document::DocumentDraft;

/// Field-keyed validation errors for a document draft.
///
/// `None` for a field means the field is valid. An empty set means the draft
/// may be submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftErrors {
    pub name: Option<String>,
    pub date: Option<String>,
    pub amount: Option<String>,
}

impl DraftErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.date.is_none() && self.amount.is_none()
    }
}

/// Validate a document draft before submission.
///
/// Rules are evaluated independently, so a draft with several problems
/// reports all of them at once. Validation errors never leave the form:
/// the caller blocks submission while the result is non-empty.
pub fn validate(draft: &DocumentDraft) -> DraftErrors {
    let mut errors = DraftErrors::default();

    if draft.name.trim().is_empty() {
        errors.name = Some("Name is required".to_string());
    }

    if draft.date.is_empty() {
        errors.date = Some("Date is required".to_string());
    } else if !is_iso_date_shape(&draft.date) {
        errors.date = Some("Invalid date format. Use YYYY-MM-DD".to_string());
    }

    if draft.amount <= 0.0 {
        errors.amount = Some("Amount must be greater than 0".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TemplateType;

    fn valid_draft() -> DocumentDraft {
        DocumentDraft {
            name: "Acme".to_string(),
            date: "2024-03-05".to_string(),
            amount: 100.0,
            template_type: TemplateType::Receipt,
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(validate(&valid_draft()).is_empty());
    }

    #[test]
    fn test_name_required() {
        let mut draft = valid_draft();
        draft.name = String::new();
        assert_eq!(validate(&draft).name.as_deref(), Some("Name is required"));

        draft.name = "   ".to_string();
        assert_eq!(validate(&draft).name.as_deref(), Some("Name is required"));

        draft.name = "  a  ".to_string();
        assert!(validate(&draft).name.is_none());
    }

    #[test]
    fn test_date_required_and_shape_checked() {
        let mut draft = valid_draft();
        draft.date = String::new();
        assert_eq!(validate(&draft).date.as_deref(), Some("Date is required"));

        for bad in ["2024-1-05", "05-03-2024x", "not a date", "2024/03/05"] {
            draft.date = bad.to_string();
            assert_eq!(
                validate(&draft).date.as_deref(),
                Some("Invalid date format. Use YYYY-MM-DD"),
                "expected shape error for {bad:?}"
            );
        }

        draft.date = "2024-03-05".to_string();
        assert!(validate(&draft).date.is_none());
    }

    #[test]
    fn test_amount_must_be_positive() {
        let mut draft = valid_draft();
        for bad in [0.0, -1.0, -0.01] {
            draft.amount = bad;
            assert_eq!(
                validate(&draft).amount.as_deref(),
                Some("Amount must be greater than 0")
            );
        }
        draft.amount = 0.01;
        assert!(validate(&draft).amount.is_none());
    }

    #[test]
    fn test_rules_evaluated_independently() {
        let draft = DocumentDraft::default();
        let errors = validate(&draft);
        assert!(errors.name.is_some());
        assert!(errors.date.is_some());
        assert!(errors.amount.is_some());
        assert!(!errors.is_empty());
    }
}
