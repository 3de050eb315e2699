use garde::Validate;
use serde::{Deserialize, Deserializer, Serialize};

pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;
pub const CODE_MAX_CHARS: usize = 10_000;

/// Splits comma separated tags, trims them and drops empty ones.
///
/// Order is preserved and duplicates are kept.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tags as submitted by a client - either the raw comma separated text from a form
/// or an already split list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(untagged)]
pub enum TagsInput {
    Raw(String),
    List(Vec<String>),
}

impl TagsInput {
    /// Canonical tag list, list items go through the same parsing as raw text.
    pub fn to_tags(&self) -> Vec<String> {
        match self {
            TagsInput::Raw(text) => parse_tags(text),
            TagsInput::List(items) => items.iter().flat_map(|item| parse_tags(item)).collect(),
        }
    }
}

impl From<&str> for TagsInput {
    fn from(value: &str) -> Self {
        TagsInput::Raw(value.to_string())
    }
}

impl From<Vec<String>> for TagsInput {
    fn from(value: Vec<String>) -> Self {
        TagsInput::List(value)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn check_text(label: &str, value: &str, max_chars: Option<usize>) -> garde::Result {
    let len = value.chars().count();
    if len == 0 {
        return Err(garde::Error::new(format!("{label} is required")));
    }
    match max_chars {
        Some(max) if len > max => Err(garde::Error::new(format!(
            "{label} must be under {max} characters"
        ))),
        _ => Ok(()),
    }
}

fn valid_title(value: &str, _ctx: &()) -> garde::Result {
    check_text("Title", value, Some(TITLE_MAX_CHARS))
}

fn valid_description(value: &str, _ctx: &()) -> garde::Result {
    check_text("Description", value, Some(DESCRIPTION_MAX_CHARS))
}

fn valid_code(value: &str, _ctx: &()) -> garde::Result {
    check_text("Code", value, None)?;
    if value.chars().count() > CODE_MAX_CHARS {
        return Err(garde::Error::new("Code is too large"));
    }
    Ok(())
}

fn valid_language(value: &str, _ctx: &()) -> garde::Result {
    check_text("Language", value, None)
}

/// Snippet fields accepted on create and update.
///
/// Missing or `null` text fields are read as empty strings, so they are reported
/// by validation as required rather than rejected as malformed JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SnippetPayload {
    #[garde(custom(valid_title))]
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[garde(custom(valid_description))]
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[garde(custom(valid_code))]
    #[serde(default, deserialize_with = "null_as_empty")]
    pub code: String,
    #[garde(custom(valid_language))]
    #[serde(default, deserialize_with = "null_as_empty")]
    pub language: String,
    #[garde(skip)]
    #[serde(default)]
    pub tags: Option<TagsInput>,
}

impl SnippetPayload {
    pub fn tags(&self) -> Vec<String> {
        self.tags
            .as_ref()
            .map(TagsInput::to_tags)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    fn hook() -> SnippetPayload {
        SnippetPayload {
            title: "Hook".to_string(),
            description: "desc".to_string(),
            code: "console.log(1)".to_string(),
            language: "javascript".to_string(),
            tags: Some("react, hooks".into()),
        }
    }

    fn messages(report: &garde::Report) -> Vec<(String, String)> {
        report
            .iter()
            .map(|(path, error)| (path.to_string(), error.message().to_string()))
            .collect()
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags("a, b ,,c"), vec!["a", "b", "c"]);
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(",").is_empty());
        assert!(parse_tags(" , ,  ").is_empty());
        assert_eq!(parse_tags("rust,rust"), vec!["rust", "rust"]);
    }

    #[quickcheck]
    fn test_parsed_tags_are_clean(input: String) -> bool {
        parse_tags(&input)
            .iter()
            .all(|t| !t.is_empty() && t.trim() == t && !t.contains(','))
    }

    #[quickcheck]
    fn test_parse_tags_idempotent(input: String) -> bool {
        let once = parse_tags(&input);
        parse_tags(&once.join(",")) == once
    }

    #[test]
    fn test_tags_input_forms() {
        let raw: SnippetPayload =
            serde_json::from_str(r#"{"title":"t","tags":"react, hooks"}"#).unwrap();
        assert_eq!(raw.tags(), vec!["react", "hooks"]);

        let list: SnippetPayload =
            serde_json::from_str(r#"{"title":"t","tags":[" react ","","hooks,db"]}"#).unwrap();
        assert_eq!(list.tags(), vec!["react", "hooks", "db"]);

        let none: SnippetPayload = serde_json::from_str(r#"{"title":"t","tags":null}"#).unwrap();
        assert!(none.tags().is_empty());

        let empty: SnippetPayload = serde_json::from_str(r#"{"title":"t","tags":""}"#).unwrap();
        assert!(empty.tags().is_empty());
    }

    #[test]
    fn test_missing_fields_read_as_empty() {
        let payload: SnippetPayload =
            serde_json::from_str(r#"{"title":null,"code":"x"}"#).unwrap();
        assert_eq!(payload.title, "");
        assert_eq!(payload.description, "");
        assert_eq!(payload.code, "x");
    }

    #[test]
    fn test_valid_payload() {
        assert!(hook().validate().is_ok());

        let no_tags = SnippetPayload {
            tags: None,
            ..hook()
        };
        assert!(no_tags.validate().is_ok());
    }

    #[test]
    fn test_required_fields() {
        let report = SnippetPayload::default().validate().unwrap_err();
        let messages = messages(&report);
        assert_eq!(messages.len(), 4);
        assert!(messages.contains(&("title".to_string(), "Title is required".to_string())));
        assert!(messages.contains(&("code".to_string(), "Code is required".to_string())));
        assert!(messages.contains(&(
            "description".to_string(),
            "Description is required".to_string()
        )));
        assert!(messages.contains(&("language".to_string(), "Language is required".to_string())));
    }

    #[test]
    fn test_length_bounds() {
        let at_limit = SnippetPayload {
            title: "é".repeat(TITLE_MAX_CHARS),
            description: "d".repeat(DESCRIPTION_MAX_CHARS),
            code: "c".repeat(CODE_MAX_CHARS),
            ..hook()
        };
        assert!(at_limit.validate().is_ok());

        let over = SnippetPayload {
            title: "t".repeat(TITLE_MAX_CHARS + 1),
            code: "c".repeat(CODE_MAX_CHARS + 1),
            ..hook()
        };
        let messages = messages(&over.validate().unwrap_err());
        assert_eq!(messages.len(), 2);
        assert!(messages.contains(&(
            "title".to_string(),
            "Title must be under 100 characters".to_string()
        )));
        assert!(messages.contains(&(
            "code".to_string(),
            "Code is too large".to_string()
        )));
    }
}
