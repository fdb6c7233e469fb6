//! Unique identifiers (UIDs).
//!
//! A UID is a string of at most 64 characters
//! made of digits separated by periods.
//! For compatibility with non-conformant producers,
//! the characters `*` and `-` are also tolerated.

use snafu::{ensure, Snafu};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::sync::atomic::{AtomicU32, Ordering};

/// The maximum number of characters in a UID.
pub const MAX_UID_LENGTH: usize = 64;

/// Error type for a string which is not a valid UID.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[non_exhaustive]
pub enum InvalidUidError {
    /// The UID is longer than 64 characters.
    #[snafu(display("UID is {} characters long, the maximum is {}", len, MAX_UID_LENGTH))]
    TooLong { len: usize },
    /// The UID contains a character outside of the permitted set.
    #[snafu(display("invalid character {:?} at position {} of UID", character, position))]
    InvalidCharacter { character: char, position: usize },
}

/// A validated unique identifier.
///
/// Trailing whitespace and null characters,
/// which are used to pad UIDs to an even length,
/// are never part of the identifier.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Uid(String);

fn is_uid_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '*' || c == '-'
}

impl Uid {
    /// Validate and create a UID from the given text.
    ///
    /// Trailing null characters and whitespace are stripped first.
    pub fn new(text: &str) -> Result<Self, InvalidUidError> {
        let text = text.trim_end_matches(|c: char| c == '\0' || c.is_whitespace());
        ensure!(
            text.len() <= MAX_UID_LENGTH,
            TooLongSnafu { len: text.len() }
        );
        if let Some((position, character)) = text.char_indices().find(|(_, c)| !is_uid_char(*c)) {
            return InvalidCharacterSnafu {
                character,
                position,
            }
            .fail();
        }
        Ok(Uid(text.to_string()))
    }

    /// Generate a new UID under the given root prefix.
    ///
    /// The suffix is made of the current time
    /// and a process-wide counter,
    /// so that consecutive calls yield distinct identifiers.
    /// Fails if the resulting UID would not fit in 64 characters.
    pub fn generate(prefix: &str) -> Result<Self, InvalidUidError> {
        static COUNTER: AtomicU32 = AtomicU32::new(0);

        let now = chrono::Utc::now();
        let count = COUNTER.fetch_add(1, Ordering::Relaxed);
        let prefix = prefix.trim_end_matches('.');
        Uid::new(&format!(
            "{}.{}.{}.{}",
            prefix,
            now.timestamp(),
            now.timestamp_subsec_nanos(),
            count
        ))
    }

    /// View the UID as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Retrieve the inner string.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for Uid {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Uid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Uid {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Uid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Uid({:?})", self.0)
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Uid {
    type Err = InvalidUidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uid::new(s)
    }
}

impl PartialEq<str> for Uid {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Uid {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
