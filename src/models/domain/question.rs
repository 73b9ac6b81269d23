use serde::{Deserialize, Serialize};

/// One multiple-choice question. Always four choices; `answer_index` is 0..=3.
/// Immutable once parsed.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub text: String,
    pub choices: Vec<String>,
    pub answer_index: usize,
}

impl Question {
    pub fn correct_choice(&self) -> &str {
        &self.choices[self.answer_index]
    }

    pub fn choice(&self, index: usize) -> Option<&str> {
        self.choices.get(index).map(String::as_str)
    }
}
