//! This module contains the concept of a DICOM data dictionary.
//!
//! Data dictionaries translate attribute tags to a dictionary entry
//! and vice versa. The decoder relies on one to resolve
//! value representations under an implicit VR transfer syntax.

use crate::header::{Tag, VR};
use snafu::{OptionExt, Snafu};
use std::borrow::Cow;
use std::fmt::Debug;

/// Error raised when a tag is not known to a data dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(display("Unknown tag {}", tag))]
pub struct UnknownTagError {
    /// The tag which was looked up.
    pub tag: Tag,
}

/// The dictionary entry data type, representing a DICOM attribute.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DictionaryEntry {
    /// The attribute tag
    pub tag: Tag,
    /// The alias of the attribute, with no spaces, usually InCapitalizedCamelCase
    pub alias: Cow<'static, str>,
    /// The _typical_ value representation of the attribute
    pub vr: VR,
}

impl DictionaryEntry {
    /// Create an entry with a static alias.
    /// Usable in constant contexts, such as built-in tables.
    pub const fn new(tag: Tag, alias: &'static str, vr: VR) -> Self {
        DictionaryEntry {
            tag,
            alias: Cow::Borrowed(alias),
            vr,
        }
    }

    /// Create an entry with an owned alias.
    pub fn owned(tag: Tag, alias: impl Into<String>, vr: VR) -> Self {
        DictionaryEntry {
            tag,
            alias: Cow::Owned(alias.into()),
            vr,
        }
    }
}

/** Type trait for a dictionary of DICOM attributes. Attribute dictionaries provide the
 * means to convert a tag to an alias and vice versa, as well as a form of retrieving
 * additional information about the attribute.
 *
 * The methods herein have no generic parameters, so as to enable being
 * used as a trait object.
 */
pub trait DataDictionary: Debug {
    /// Fetch an entry by its usual alias (e.g. "PatientName" or "SOPInstanceUID").
    /// Aliases are case sensitive and not separated by spaces.
    fn by_name(&self, name: &str) -> Option<&DictionaryEntry>;

    /// Fetch an entry by its tag.
    fn by_tag(&self, tag: Tag) -> Option<&DictionaryEntry>;

    /// Resolve the typical value representation of the attribute
    /// with the given tag.
    fn lookup_vr(&self, tag: Tag) -> Result<VR, UnknownTagError> {
        self.by_tag(tag).map(|e| e.vr).context(UnknownTagSnafu { tag })
    }
}

impl<T: ?Sized> DataDictionary for &T
where
    T: DataDictionary,
{
    fn by_name(&self, name: &str) -> Option<&DictionaryEntry> {
        (**self).by_name(name)
    }

    fn by_tag(&self, tag: Tag) -> Option<&DictionaryEntry> {
        (**self).by_tag(tag)
    }

    fn lookup_vr(&self, tag: Tag) -> Result<VR, UnknownTagError> {
        (**self).lookup_vr(tag)
    }
}
