//! Search-term resolution.
//!
//! Turns a raw user query into the ordered list of candidate strings the
//! catalog client tries, one after another.

use crate::translation::{contains_japanese, TranslationDictionary};

/// Resolve `query` into ordered, distinct search candidates.
///
/// The trimmed query always comes first. When the query contains Japanese
/// script and the dictionary knows a different English name, that name is
/// appended as the second candidate.
///
/// # Examples
///
/// ```
/// use cubekit_core::terms::resolve;
/// use cubekit_core::translation::TranslationDictionary;
///
/// let dict = TranslationDictionary::builtin();
/// assert_eq!(resolve("稲妻", &dict), vec!["稲妻", "Lightning Bolt"]);
/// assert_eq!(resolve(" Lightning Bolt ", &dict), vec!["Lightning Bolt"]);
/// ```
pub fn resolve(query: &str, dictionary: &TranslationDictionary) -> Vec<String> {
    let trimmed = query.trim();
    let mut candidates = vec![trimmed.to_string()];

    if contains_japanese(trimmed) {
        if let Some(translated) = dictionary.translate(trimmed) {
            let translated = translated.trim();
            if !translated.is_empty() && !candidates.iter().any(|c| c == translated) {
                candidates.push(translated.to_string());
            }
        }
    }

    candidates
}
