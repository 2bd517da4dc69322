use crate::core::traits::Sanitizer;
use convert_case::{Case, Converter};

///
/// Title
///
/// Title-cases a string: every whitespace-separated word gets an uppercase
/// first letter, the rest lowercased. Words are maximal runs of
/// non-whitespace characters and the whitespace between them is preserved
/// as-is, so the conversion changes letter casing and nothing else. Each
/// word goes through the case crate's capital pattern with no interior
/// boundaries, so camelCase humps and digits never split a word. The rule
/// is invariant — it does not consult the host locale, which keeps
/// construction reproducible across environments.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct Title;

impl Sanitizer<String> for Title {
    fn sanitize(&self, value: &mut String) {
        let converter = Converter::new().set_boundaries(&[]).to_case(Case::Title);

        let mut out = String::with_capacity(value.len());
        let mut word = String::new();

        for ch in value.chars() {
            if ch.is_whitespace() {
                if !word.is_empty() {
                    out.push_str(&converter.convert(word.as_str()));
                    word.clear();
                }
                out.push(ch);
            } else {
                word.push(ch);
            }
        }
        if !word.is_empty() {
            out.push_str(&converter.convert(word.as_str()));
        }

        *value = out;
    }
}

///
/// TESTS
///
