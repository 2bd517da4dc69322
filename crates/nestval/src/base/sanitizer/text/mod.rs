pub mod case;

use crate::core::traits::Sanitizer;

///
/// Trim
///

#[derive(Clone, Copy, Debug, Default)]
pub struct Trim;

impl Sanitizer<String> for Trim {
    fn sanitize(&self, value: &mut String) {
        let trimmed = value.trim();

        if trimmed.len() != value.len() {
            *value = trimmed.to_owned();
        }
    }
}

///
/// TESTS
///
