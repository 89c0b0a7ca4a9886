//! In-memory form store.

use std::collections::HashMap;
use std::sync::Arc;

use super::ids::{IdGenerator, UuidGenerator};
use crate::errors::AppError;
use crate::models::{Form, FormSubmission, QuestionSpec};

/// Owns every form and its append-only response history.
pub struct FormStore {
    forms: Vec<Form>,
    index: HashMap<String, usize>,
    ids: Arc<dyn IdGenerator>,
    revision: u64,
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FormStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormStore")
            .field("forms", &self.forms.len())
            .field("revision", &self.revision)
            .finish()
    }
}

impl FormStore {
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(UuidGenerator))
    }

    pub fn with_id_generator(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            forms: Vec::new(),
            index: HashMap::new(),
            ids,
            revision: 0,
        }
    }

    /// Create a form, assigning an identifier to the form and to each question.
    ///
    /// Question order and every other field are kept as given.
    pub fn create_form(&mut self, title: &str, questions: Vec<QuestionSpec>) -> Form {
        let id = self.ids.next_id();
        let questions = questions
            .into_iter()
            .map(|spec| spec.into_question(self.ids.next_id()))
            .collect();

        let form = Form {
            id,
            title: title.to_string(),
            questions,
            responses: Vec::new(),
        };

        self.index.insert(form.id.clone(), self.forms.len());
        self.forms.push(form.clone());
        self.revision += 1;

        tracing::debug!(
            form_id = %form.id,
            questions = form.questions.len(),
            "Created form"
        );

        form
    }

    /// Append one submission to the form's response history.
    ///
    /// Answers are stored as given; see [`crate::validation::check_submission`]
    /// for opt-in checks against the question schema.
    pub fn submit_form_response(
        &mut self,
        submission: FormSubmission,
    ) -> Result<&Form, AppError> {
        let Some(&position) = self.index.get(&submission.form_id) else {
            tracing::warn!(form_id = %submission.form_id, "Submission rejected: unknown form");
            return Err(AppError::NotFound(format!(
                "Form {} not found",
                submission.form_id
            )));
        };

        let form = &mut self.forms[position];
        form.responses.push(submission.responses);
        self.revision += 1;

        tracing::debug!(
            form_id = %form.id,
            submissions = form.responses.len(),
            "Recorded submission"
        );

        Ok(&self.forms[position])
    }

    pub fn get_form(&self, id: &str) -> Option<&Form> {
        self.index.get(id).map(|&position| &self.forms[position])
    }

    /// All forms in insertion order.
    pub fn get_all_forms(&self) -> &[Form] {
        &self.forms
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Number of successful mutations so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
