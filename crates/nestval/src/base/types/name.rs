use crate::{
    base::sanitizer::text::{Trim, case::Title},
    core::{
        InvalidValue,
        traits::{Inner, Sanitizer},
    },
};
use derive_more::Deref;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display},
    str::FromStr,
};

///
/// Name
///
/// Validated, normalized personal or business name. Construction is the only
/// path to a value: the raw input is rejected when empty or whitespace-only,
/// then trimmed and title-cased, then rejected when the normalized form
/// exceeds `MAX_LENGTH` characters. There is no mutable access to the inner
/// string, so an invalid instance cannot exist.
///
/// Serde goes through the same constructor (`try_from = "String"`), so a
/// framework materializing stored data cannot bypass validation either.
///

#[derive(Clone, Debug, Deref, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Maximum length of the normalized value, in Unicode scalar values.
    pub const MAX_LENGTH: usize = 100;

    /// Build a name with the default title-casing rule.
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidValue> {
        Self::with_casing(value, &Title)
    }

    /// Build a name with an explicit casing rule.
    ///
    /// The rule is a parameter rather than ambient process state, so
    /// behavior is reproducible in tests regardless of the host locale.
    pub fn with_casing(
        value: impl Into<String>,
        casing: &dyn Sanitizer<String>,
    ) -> Result<Self, InvalidValue> {
        let mut value = value.into();

        if value.trim().is_empty() {
            return Err(InvalidValue::Empty);
        }

        Trim.sanitize(&mut value);
        casing.sanitize(&mut value);

        // An injected casing rule may rewrite freely; the non-empty
        // invariant has to hold for its output as well.
        if value.trim().is_empty() {
            return Err(InvalidValue::Empty);
        }

        let len = value.chars().count();
        if len > Self::MAX_LENGTH {
            return Err(InvalidValue::TooLong {
                max: Self::MAX_LENGTH,
                len,
            });
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl FromStr for Name {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Inner<String> for Name {
    fn inner(&self) -> &String {
        &self.0
    }

    fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Name {
    type Error = InvalidValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

///
/// TESTS
///
