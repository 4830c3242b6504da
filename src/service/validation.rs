//! Request validation: untyped JSON bodies into typed catalogue inputs.

use crate::error::AppError;
use crate::model::{AuthorInput, BookInput};
use serde_json::{Map, Value};

pub struct RequestValidator;

impl RequestValidator {
    /// `{ name: string, bio?: string }`. Unknown keys are ignored.
    pub fn author(body: Value) -> Result<AuthorInput, AppError> {
        let body = body_to_map(body)?;
        Ok(AuthorInput {
            name: required_string(&body, "name")?,
            bio: optional_string(&body, "bio")?,
        })
    }

    /// `{ title: string, authorId: integer, description?: string, publishedYear?: integer }`.
    pub fn book(body: Value) -> Result<BookInput, AppError> {
        let body = body_to_map(body)?;
        Ok(BookInput {
            title: required_string(&body, "title")?,
            author_id: required_int(&body, "authorId")?,
            description: optional_string(&body, "description")?,
            published_year: optional_int(&body, "publishedYear")?,
        })
    }
}

fn body_to_map(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::Validation("body must be a JSON object".into())),
    }
}

/// Missing and explicit `null` are both treated as absent.
fn present<'a>(body: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    body.get(key).filter(|v| !v.is_null())
}

fn required_string(body: &Map<String, Value>, key: &str) -> Result<String, AppError> {
    let s = optional_string(body, key)?.ok_or_else(|| AppError::Validation(format!("{} is required", key)))?;
    if s.trim().is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", key)));
    }
    Ok(s)
}

fn optional_string(body: &Map<String, Value>, key: &str) -> Result<Option<String>, AppError> {
    match present(body, key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(AppError::Validation(format!("{} must be a string", key))),
    }
}

fn required_int(body: &Map<String, Value>, key: &str) -> Result<i32, AppError> {
    optional_int(body, key)?.ok_or_else(|| AppError::Validation(format!("{} is required", key)))
}

fn optional_int(body: &Map<String, Value>, key: &str) -> Result<Option<i32>, AppError> {
    let Some(v) = present(body, key) else {
        return Ok(None);
    };
    let n = match v {
        Value::Number(n) => n,
        _ => return Err(AppError::Validation(format!("{} must be an integer", key))),
    };
    // 1949.0 is accepted as 1949; fractional values are not.
    let whole = n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
            .map(|f| f as i64)
    });
    whole
        .and_then(|i| i32::try_from(i).ok())
        .map(Some)
        .ok_or_else(|| AppError::Validation(format!("{} must be a 32-bit integer", key)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(err: AppError) -> String {
        match err {
            AppError::Validation(m) => m,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn author_with_optional_bio() {
        let input = RequestValidator::author(json!({ "name": "Jane Austen" })).unwrap();
        assert_eq!(input, AuthorInput { name: "Jane Austen".into(), bio: None });

        let input = RequestValidator::author(json!({ "name": "Jane Austen", "bio": "Novelist", "extra": 1 })).unwrap();
        assert_eq!(input.bio.as_deref(), Some("Novelist"));
    }

    #[test]
    fn author_requires_non_empty_name() {
        assert_eq!(message(RequestValidator::author(json!({ "bio": "x" })).unwrap_err()), "name is required");
        assert_eq!(message(RequestValidator::author(json!({ "name": "  " })).unwrap_err()), "name must not be empty");
        assert_eq!(message(RequestValidator::author(json!({ "name": 12 })).unwrap_err()), "name must be a string");
    }

    #[test]
    fn null_optional_field_is_absent() {
        let input = RequestValidator::author(json!({ "name": "Orwell", "bio": null })).unwrap();
        assert_eq!(input.bio, None);
    }

    #[test]
    fn rejects_non_object_body() {
        let err = RequestValidator::book(json!(["1984"])).unwrap_err();
        assert_eq!(message(err), "body must be a JSON object");
    }

    #[test]
    fn book_fields_are_typed() {
        let input = RequestValidator::book(json!({
            "title": "1984",
            "authorId": 1,
            "publishedYear": 1949.0
        }))
        .unwrap();
        assert_eq!(
            input,
            BookInput {
                title: "1984".into(),
                author_id: 1,
                description: None,
                published_year: Some(1949),
            }
        );
    }

    #[test]
    fn book_rejects_bad_author_id() {
        let missing = RequestValidator::book(json!({ "title": "1984" })).unwrap_err();
        assert_eq!(message(missing), "authorId is required");

        let text = RequestValidator::book(json!({ "title": "1984", "authorId": "1" })).unwrap_err();
        assert_eq!(message(text), "authorId must be an integer");

        let fraction = RequestValidator::book(json!({ "title": "1984", "authorId": 1.5 })).unwrap_err();
        assert_eq!(message(fraction), "authorId must be a 32-bit integer");

        let huge = RequestValidator::book(json!({ "title": "1984", "authorId": 1u64 << 40 })).unwrap_err();
        assert_eq!(message(huge), "authorId must be a 32-bit integer");
    }
}
