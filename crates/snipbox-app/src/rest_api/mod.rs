pub mod language;
pub mod snippet;
