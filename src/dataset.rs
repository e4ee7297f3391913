use crate::models::Question;
use std::collections::HashSet;
use std::io;

/// The question set shipped with the binary. Parsed once at startup,
/// never fetched from anywhere.
const BUNDLED: &str = include_str!("../data/questions.json");

pub fn load_bundled() -> io::Result<Vec<Question>> {
    parse(BUNDLED)
}

/// Parses a JSON array of questions and checks the invariants the rest
/// of the program relies on: choice ids unique within a question and
/// `correct_choice_id` pointing at an existing choice. An empty array
/// is valid; the UI shows a placeholder for it.
pub fn parse(raw: &str) -> io::Result<Vec<Question>> {
    let questions: Vec<Question> = serde_json::from_str(raw)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    for q in &questions {
        let mut seen = HashSet::new();
        for c in &q.choices {
            if !seen.insert(c.id.as_str()) {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("question {}: duplicate choice id {:?}", q.id, c.id),
                ));
            }
        }
        if !seen.contains(q.correct_choice_id.as_str()) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "question {}: correct_choice_id {:?} matches no choice",
                    q.id, q.correct_choice_id
                ),
            ));
        }
    }

    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_dataset_is_valid() {
        let questions = load_bundled().unwrap();
        assert!(!questions.is_empty());
    }

    #[test]
    fn test_parse_empty_array() {
        let questions = parse("[]").unwrap();
        assert!(questions.is_empty());
    }

    #[test]
    fn test_parse_rejects_dangling_correct_choice() {
        let raw = r#"[{
            "id": 1,
            "prompt": "Q?",
            "choices": [{"id": "A", "text": "a"}, {"id": "B", "text": "b"}],
            "correct_choice_id": "Z"
        }]"#;
        let err = parse(raw).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("matches no choice"));
    }

    #[test]
    fn test_parse_rejects_duplicate_choice_ids() {
        let raw = r#"[{
            "id": 2,
            "prompt": "Q?",
            "choices": [{"id": "A", "text": "a"}, {"id": "A", "text": "b"}],
            "correct_choice_id": "A"
        }]"#;
        let err = parse(raw).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("duplicate choice id"));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = parse("not json").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
