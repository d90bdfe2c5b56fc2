use std::path::Path;

use serde_json::Value;

use crate::{Movie, ReelbaseError, Result};

/// Folds `text` for case-insensitive comparison (ordinal lowercase).
pub fn fold_case(text: &str) -> String { text.to_lowercase() }

/// Compares two strings after case folding.
pub fn eq_folded(a: &str, b: &str) -> bool { a == b || fold_case(a) == fold_case(b) }

/// Checks that a collection path is absolute.
///
/// # Returns
///
/// Returns `Ok(())` for absolute paths, or `ReelbaseError::InvalidPath` otherwise.
pub fn validate_collection_path(path: &Path) -> Result<()> {
    if path.is_absolute() {
        Ok(())
    }
    else {
        Err(ReelbaseError::InvalidPath {
            path: path.to_path_buf(),
        })
    }
}

/// Parses the content of a collection file into movie records.
///
/// The content must be a JSON array whose every element has the movie shape:
/// a string `title`, a string `director`, an integer `year` and an array of
/// strings `genres`. Unknown keys are ignored.
///
/// # Returns
///
/// - `ReelbaseError::Json` if the content is not valid JSON
/// - `ReelbaseError::MalformedCollection` if the top-level value is not an array
/// - `ReelbaseError::InvalidRecord` for the first element that is not a movie
pub fn parse_records(content: &str) -> Result<Vec<Movie>> {
    let value: Value = serde_json::from_str(content)?;
    let elements = match value {
        Value::Array(elements) => elements,
        other @ (Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Object(_)) => {
            return Err(ReelbaseError::MalformedCollection {
                reason: format!("expected a JSON array, found {}", value_kind(&other)),
            });
        },
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            serde_json::from_value::<Movie>(element).map_err(|e| {
                ReelbaseError::InvalidRecord {
                    index,
                    reason: e.to_string(),
                }
            })
        })
        .collect()
}

/// Human-readable name of a JSON value's type.
const fn value_kind(value: &Value) -> &'static str {
    match *value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_fold_case() {
        assert_eq!(fold_case("The MATRIX"), "the matrix");
        assert!(eq_folded("The Matrix", "the MATRIX"));
        assert!(!eq_folded("The Matrix", "Matrix"));
    }

    #[test]
    fn test_validate_collection_path() {
        let absolute = std::env::temp_dir().join("movies.json");
        assert!(validate_collection_path(&absolute).is_ok());

        let relative = PathBuf::from("movies.json");
        match validate_collection_path(&relative) {
            Err(ReelbaseError::InvalidPath {
                path,
            }) => assert_eq!(path, relative),
            other => panic!("Expected InvalidPath error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_records() {
        let content = r#"[
            {"title": "Alien", "director": "Ridley Scott", "year": 1979, "genres": ["Horror", "Sci-Fi"]},
            {"title": "Heat", "director": "Michael Mann", "year": 1995, "genres": []}
        ]"#;
        let movies = parse_records(content).unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "Alien");
        assert_eq!(movies[1].genres, Vec::<String>::new());
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_records("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let result = parse_records(r#"{"title": "Alien"}"#);
        match result {
            Err(ReelbaseError::MalformedCollection {
                reason,
            }) => assert!(reason.contains("an object"), "unexpected reason: {}", reason),
            other => panic!("Expected MalformedCollection error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(matches!(
            parse_records("[{"),
            Err(ReelbaseError::Json { .. })
        ));
    }

    #[test]
    fn test_parse_reports_index_of_bad_record() {
        let content = r#"[
            {"title": "Alien", "director": "Ridley Scott", "year": 1979, "genres": []},
            {"title": "Heat", "year": 1995, "genres": []}
        ]"#;
        match parse_records(content) {
            Err(ReelbaseError::InvalidRecord {
                index,
                reason,
            }) => {
                assert_eq!(index, 1);
                assert!(reason.contains("director"), "unexpected reason: {}", reason);
            },
            other => panic!("Expected InvalidRecord error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_wrongly_typed_year() {
        let content = r#"[{"title": "Alien", "director": "Ridley Scott", "year": "1979", "genres": []}]"#;
        assert!(matches!(
            parse_records(content),
            Err(ReelbaseError::InvalidRecord { index: 0, .. })
        ));
    }
}
