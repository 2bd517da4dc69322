use thiserror::Error as ThisError;

///
/// InvalidValue
///
/// The single error kind raised by value-object constructors. The two causes
/// are variants so callers can match on them, but both surface through the
/// same type and are distinguished in the rendered message.
///
/// The raw input is never carried in the error; a caller that wants to retry
/// with corrected input must retain it.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum InvalidValue {
    #[error("value can't be empty")]
    Empty,

    #[error("value exceeds the maximum length of {max} characters: {len}")]
    TooLong { max: usize, len: usize },
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_names_the_cause() {
        assert_eq!(InvalidValue::Empty.to_string(), "value can't be empty");
    }

    #[test]
    fn too_long_message_carries_both_lengths() {
        let err = InvalidValue::TooLong { max: 100, len: 101 };
        assert_eq!(
            err.to_string(),
            "value exceeds the maximum length of 100 characters: 101"
        );
    }
}
