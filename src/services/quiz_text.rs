use crate::{
    errors::{AppError, AppResult},
    models::domain::Question,
};

/// Parses the admin authoring format into an ordered question list.
///
/// The text is split into blocks on one-or-more blank lines. Every block must
/// carry five marker lines, matched by prefix in any order:
///
/// ```text
/// Q: <question text>
/// A) <choice>
/// B) <choice>
/// C) <choice>
/// D) <choice>
/// Correct: <A|B|C|D>
/// ```
///
/// Any malformed block fails the whole submission; there is no partial
/// success.
pub fn parse_quiz_text(text: &str) -> AppResult<Vec<Question>> {
    let mut questions = Vec::new();

    for block in split_blocks(text) {
        let lines: Vec<&str> = block
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect();

        let q_line = lines.iter().find(|l| l.starts_with("Q:"));
        let correct_line = lines
            .iter()
            .find(|l| l.to_lowercase().starts_with("correct:"));
        let a = lines.iter().find(|l| l.starts_with("A)"));
        let b = lines.iter().find(|l| l.starts_with("B)"));
        let c = lines.iter().find(|l| l.starts_with("C)"));
        let d = lines.iter().find(|l| l.starts_with("D)"));

        let (q_line, correct_line, a, b, c, d) = match (q_line, correct_line, a, b, c, d) {
            (Some(q), Some(corr), Some(a), Some(b), Some(c), Some(d)) => (q, corr, a, b, c, d),
            _ => {
                return Err(AppError::Format(
                    "Invalid format in a question block".to_string(),
                ))
            }
        };

        let text = q_line[2..].trim().to_string();
        let choices: Vec<String> = [a, b, c, d]
            .iter()
            .map(|l| l[2..].trim().to_string())
            .collect();

        let letter = correct_line
            .split_once(':')
            .map(|(_, rest)| rest.trim().to_uppercase())
            .unwrap_or_default();

        let answer_index = match letter.as_str() {
            "A" => 0,
            "B" => 1,
            "C" => 2,
            "D" => 3,
            _ => {
                return Err(AppError::Format(
                    "Correct answer must be A/B/C/D".to_string(),
                ))
            }
        };

        questions.push(Question {
            text,
            choices,
            answer_index,
        });
    }

    if questions.is_empty() {
        return Err(AppError::Format("No questions found".to_string()));
    }

    Ok(questions)
}

/// Groups non-blank lines into blocks separated by whitespace-only lines.
fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::sample_quiz_text;

    #[test]
    fn test_parse_two_blocks_in_source_order() {
        let questions = parse_quiz_text(&sample_quiz_text()).expect("text should parse");

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].text, "What is 2+2?");
        assert_eq!(questions[0].choices, vec!["3", "4", "5", "6"]);
        assert_eq!(questions[0].answer_index, 1);
        assert_eq!(questions[1].text, "Capital of France?");
        assert_eq!(questions[1].answer_index, 0);
    }

    #[test]
    fn test_parse_is_line_order_independent_within_block() {
        let text = "Correct: C\nD) four\nQ: pick three\nB) two\nA) one\nC) three";
        let questions = parse_quiz_text(text).expect("shuffled block should parse");

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].answer_index, 2);
        assert_eq!(questions[0].choices, vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn test_parse_accepts_lowercase_correct_marker_and_letter() {
        let text = "Q: pick a\nA) one\nB) two\nC) three\nD) four\ncorrect: a";
        let questions = parse_quiz_text(text).expect("lowercase marker should parse");
        assert_eq!(questions[0].answer_index, 0);
    }

    #[test]
    fn test_parse_blocks_split_on_whitespace_only_lines() {
        let text = "Q: one?\nA) a\nB) b\nC) c\nD) d\nCorrect: A\n   \t \nQ: two?\nA) a\nB) b\nC) c\nD) d\nCorrect: D";
        let questions = parse_quiz_text(text).expect("should split on whitespace line");
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].answer_index, 3);
    }

    #[test]
    fn test_parse_missing_option_line_fails() {
        let text = "Q: incomplete?\nA) a\nB) b\nC) c\nCorrect: A";
        let result = parse_quiz_text(text);
        assert!(matches!(result, Err(AppError::Format(_))));
    }

    #[test]
    fn test_parse_missing_question_line_fails() {
        let text = "A) a\nB) b\nC) c\nD) d\nCorrect: A";
        let result = parse_quiz_text(text);
        assert!(matches!(result, Err(AppError::Format(_))));
    }

    #[test]
    fn test_parse_invalid_correct_letter_fails() {
        let text = "Q: pick one\nA) a\nB) b\nC) c\nD) d\nCorrect: E";
        let result = parse_quiz_text(text);
        let err = result.expect_err("letter E must be rejected");
        assert!(err.to_string().contains("A/B/C/D"));
    }

    #[test]
    fn test_parse_empty_text_fails_with_no_questions() {
        let result = parse_quiz_text("   \n\n  \n");
        let err = result.expect_err("blank text must be rejected");
        assert!(err.to_string().contains("No questions found"));
    }

    #[test]
    fn test_parse_bad_block_produces_no_partial_output() {
        let text = format!("{}\n\nQ: broken block\nA) only one option\nCorrect: A", sample_quiz_text());
        let result = parse_quiz_text(&text);
        // One good block plus one bad block: the whole submission fails.
        assert!(matches!(result, Err(AppError::Format(_))));
    }

    #[test]
    fn test_parse_trims_prefixes_and_whitespace() {
        let text = "Q:    padded question?   \nA)  alpha \nB) beta\nC) gamma\nD) delta\nCorrect:   b  ";
        let questions = parse_quiz_text(text).expect("padded block should parse");
        assert_eq!(questions[0].text, "padded question?");
        assert_eq!(questions[0].choices[0], "alpha");
        assert_eq!(questions[0].answer_index, 1);
    }
}
