use contracts::domain::registration::DocumentRef;

use super::{Step, StepForm};
use crate::registration::draft::RegistrationDraft;
use crate::shared::validation::{FieldErrors, ValidationRules};

const MAX_NOTES_LENGTH: usize = 2000;

/// Medical notes, comments and the two required documents.
///
/// Documents are optional at this step; submission refuses to start
/// without both.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdditionalInfoForm {
    pub medical_notes: String,
    pub comments: String,
    pub photo: Option<DocumentRef>,
    pub id_card: Option<DocumentRef>,
}

impl AdditionalInfoForm {
    pub fn has_documents(&self) -> bool {
        let present = |doc: &Option<DocumentRef>| doc.as_ref().is_some_and(|d| !d.is_empty());
        present(&self.photo) && present(&self.id_card)
    }
}

impl StepForm for AdditionalInfoForm {
    const STEP: Step = Step::AdditionalInfo;

    fn from_draft(draft: &RegistrationDraft) -> Self {
        draft.additional().clone()
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let notes = ValidationRules::none().with_max_length(MAX_NOTES_LENGTH);
        let mut errors = FieldErrors::new();
        errors.check("medical_notes", "Medical notes", &self.medical_notes, notes);
        errors.check("comments", "Comments", &self.comments, notes);
        errors.into_result()
    }

    fn write_to(self, draft: &mut RegistrationDraft) {
        draft.set_additional(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str) -> DocumentRef {
        DocumentRef {
            file_name: name.to_string(),
            content_type: "image/png".to_string(),
            data_base64: "iVBORw0KGgo=".to_string(),
        }
    }

    #[test]
    fn test_documents_optional_at_this_step() {
        assert!(AdditionalInfoForm::default().validate().is_ok());
        assert!(!AdditionalInfoForm::default().has_documents());
    }

    #[test]
    fn test_empty_document_does_not_count() {
        let form = AdditionalInfoForm {
            photo: Some(doc("me.png")),
            id_card: Some(DocumentRef::default()),
            ..Default::default()
        };
        assert!(!form.has_documents());

        let form = AdditionalInfoForm {
            id_card: Some(doc("id.png")),
            ..form
        };
        assert!(form.has_documents());
    }

    #[test]
    fn test_notes_length_limit() {
        let form = AdditionalInfoForm {
            medical_notes: "a".repeat(MAX_NOTES_LENGTH + 1),
            ..Default::default()
        };
        assert!(form.validate().unwrap_err().get("medical_notes").is_some());
    }
}
