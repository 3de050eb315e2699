/// Languages offered by clients when picking a snippet language.
///
/// The list is a suggestion only, any non-empty language is accepted by the server.
pub const LANGUAGES: &[&str] = &[
    "javascript",
    "typescript",
    "python",
    "java",
    "csharp",
    "cpp",
    "go",
    "rust",
    "php",
    "ruby",
    "sql",
    "html",
    "css",
    "bash",
];

pub const DEFAULT_LANGUAGE: &str = "javascript";

pub fn is_known(language: &str) -> bool {
    LANGUAGES.contains(&language)
}

/// Label for UI, first letter capitalized
pub fn display_name(language: &str) -> String {
    let mut chars = language.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
