//! Opt-in checks of a submission against its form's question schema.
//!
//! The form store accepts any submission for an existing form. Callers that
//! want required answers and type matching enforced run these checks first.

use std::collections::HashMap;

use crate::errors::AppError;
use crate::models::{Form, FormQuestion, FormSubmission, QuestionType, ResponseValue};

/// Check `submission` against `form`, reporting the first problem found.
pub fn check_submission(form: &Form, submission: &FormSubmission) -> Result<(), AppError> {
    if submission.form_id != form.id {
        return Err(AppError::Validation(format!(
            "Submission targets form {} but was checked against form {}",
            submission.form_id, form.id
        )));
    }

    let mut answers: HashMap<&str, &ResponseValue> = HashMap::new();
    for response in &submission.responses {
        let question = form.question(&response.question_id).ok_or_else(|| {
            AppError::Validation(format!(
                "Question {} does not belong to form {}",
                response.question_id, form.id
            ))
        })?;
        check_value(question, &response.value)?;
        answers.insert(question.id.as_str(), &response.value);
    }

    for question in form.questions.iter().filter(|q| q.required) {
        let answered = match answers.get(question.id.as_str()) {
            Some(ResponseValue::Text(text)) => !text.trim().is_empty(),
            Some(ResponseValue::Number(_)) => true,
            None => false,
        };
        if !answered {
            return Err(AppError::Validation(format!(
                "{} is required",
                question.text
            )));
        }
    }

    Ok(())
}

fn check_value(question: &FormQuestion, value: &ResponseValue) -> Result<(), AppError> {
    match (question.kind, value) {
        (QuestionType::Number, ResponseValue::Text(text)) => {
            if text.trim().is_empty() || text.trim().parse::<f64>().is_ok() {
                Ok(())
            } else {
                Err(AppError::Validation(format!(
                    "{} expects a number",
                    question.text
                )))
            }
        }
        (QuestionType::Radio, ResponseValue::Text(choice)) => {
            let known = question
                .options
                .as_ref()
                .is_some_and(|options| options.iter().any(|o| o == choice));
            if known || choice.is_empty() {
                Ok(())
            } else {
                Err(AppError::Validation(format!(
                    "{} is not an option of {}",
                    choice, question.text
                )))
            }
        }
        (QuestionType::Radio, ResponseValue::Number(_)) => Err(AppError::Validation(format!(
            "{} expects one of its options",
            question.text
        ))),
        _ => Ok(()),
    }
}
