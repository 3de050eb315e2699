pub mod config;
pub mod form;
pub mod language;
pub mod snippet;

pub use snippet::{parse_tags, SnippetPayload, TagsInput};
