//! Localized display strings.
//!
//! - `language`: the two supported languages and their stored codes
//! - `strings`: the per-language string tables
//!
//! Lookups never fail: a key missing from the table resolves to the key
//! itself so the UI never shows a blank label.

mod language;
mod strings;

pub use language::Language;
pub use strings::LocaleTable;

/// Resolve `key` for `language`, falling back to the key.
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    LocaleTable::get().lookup(language, key).unwrap_or(key)
}
