use crate::models::domain::{MissedQuestion, Quiz};

/// Result of grading one set of answers against a quiz. Pure data; whether
/// the attempt may be scored at all is decided by the submission workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub answered_count: usize,
    pub correct_count: usize,
    pub wrong: Vec<MissedQuestion>,
}

/// Grades `answers` positionally against the quiz. A question is correct iff
/// the selected index equals its answer index; every other question lands in
/// `wrong` with its 1-based index, the correct choice text, and the chosen
/// choice text (absent when unanswered). A selection outside the choice range
/// is treated as unanswered, so it cannot satisfy the completeness gate.
pub fn evaluate(quiz: &Quiz, answers: &[Option<usize>]) -> Evaluation {
    let mut answered_count = 0;
    let mut correct_count = 0;
    let mut wrong = Vec::new();

    for (idx, question) in quiz.questions.iter().enumerate() {
        let chosen = answers
            .get(idx)
            .copied()
            .flatten()
            .filter(|&c| c < question.choices.len());
        if chosen.is_some() {
            answered_count += 1;
        }

        if chosen == Some(question.answer_index) {
            correct_count += 1;
        } else {
            wrong.push(MissedQuestion {
                index: idx + 1,
                question: question.text.clone(),
                correct: question.correct_choice().to_string(),
                chosen: chosen.and_then(|c| question.choice(c)).map(str::to_string),
            });
        }
    }

    Evaluation {
        answered_count,
        correct_count,
        wrong,
    }
}
