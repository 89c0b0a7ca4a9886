//! Form model matching the frontend Form interface.

use serde::{Deserialize, Serialize};

/// Kind of answer a question expects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// Single-line text
    Short,
    /// Multi-line text
    Long,
    Number,
    /// Single choice among `options`
    Radio,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Short => "short",
            QuestionType::Long => "long",
            QuestionType::Number => "number",
            QuestionType::Radio => "radio",
        }
    }
}

/// A prompt inside a form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormQuestion {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub text: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// Question definition supplied by the caller; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSpec {
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub text: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub options: Option<Vec<String>>,
}

impl QuestionSpec {
    pub fn new(kind: QuestionType, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            required: false,
            placeholder: None,
            options: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    /// Attach an identifier, producing the stored question.
    pub fn into_question(self, id: String) -> FormQuestion {
        FormQuestion {
            id,
            kind: self.kind,
            text: self.text,
            required: self.required,
            placeholder: self.placeholder,
            options: self.options,
        }
    }
}

/// Answer value; text or numeric depending on the question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ResponseValue {
    Number(f64),
    Text(String),
}

impl From<&str> for ResponseValue {
    fn from(value: &str) -> Self {
        ResponseValue::Text(value.to_string())
    }
}

impl From<String> for ResponseValue {
    fn from(value: String) -> Self {
        ResponseValue::Text(value)
    }
}

impl From<f64> for ResponseValue {
    fn from(value: f64) -> Self {
        ResponseValue::Number(value)
    }
}

impl From<i64> for ResponseValue {
    fn from(value: i64) -> Self {
        ResponseValue::Number(value as f64)
    }
}

/// One answer within a submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormResponse {
    /// References a `FormQuestion::id` of the same form
    pub question_id: String,
    pub value: ResponseValue,
}

impl FormResponse {
    pub fn new(question_id: impl Into<String>, value: impl Into<ResponseValue>) -> Self {
        Self {
            question_id: question_id.into(),
            value: value.into(),
        }
    }
}

/// A complete set of answers for one form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    pub form_id: String,
    pub responses: Vec<FormResponse>,
}

/// A named, ordered set of questions with its submission history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub id: String,
    pub title: String,
    pub questions: Vec<FormQuestion>,
    /// Append-only, one entry per submission
    #[serde(default)]
    pub responses: Vec<Vec<FormResponse>>,
}

impl Form {
    pub fn question(&self, question_id: &str) -> Option<&FormQuestion> {
        self.questions.iter().find(|q| q.id == question_id)
    }
}
