use crate::tags::ENTRIES;
use dcmcodec_core::dictionary::{DataDictionary, DictionaryEntry};
use dcmcodec_core::header::{Tag, VR};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};

static DICT: Lazy<StandardDataDictionaryRegistry> = Lazy::new(init_dictionary);

/// Retrieve a singleton instance of the standard dictionary registry.
///
/// Note that one does not generally have to call this
/// unless when retrieving the underlying registry is important.
/// The unit type [`StandardDataDictionary`]
/// already provides a lazy loaded singleton implementing the necessary traits.
#[inline]
pub fn registry() -> &'static StandardDataDictionaryRegistry {
    &DICT
}

/// The data struct actually containing the standard dictionary.
///
/// This structure is made opaque via the unit type [`StandardDataDictionary`],
/// which provides a lazy loaded singleton.
#[derive(Debug)]
pub struct StandardDataDictionaryRegistry {
    /// mapping: name → entry
    by_name: HashMap<&'static str, &'static DictionaryEntry>,
    /// mapping: tag → entry
    by_tag: HashMap<Tag, &'static DictionaryEntry>,
}

impl StandardDataDictionaryRegistry {
    fn new() -> StandardDataDictionaryRegistry {
        StandardDataDictionaryRegistry {
            by_name: HashMap::with_capacity(ENTRIES.len() + 1),
            by_tag: HashMap::with_capacity(ENTRIES.len()),
        }
    }

    /// record the given dictionary entry reference
    fn index(&mut self, entry: &'static DictionaryEntry) -> &mut Self {
        if let std::borrow::Cow::Borrowed(alias) = entry.alias {
            self.by_name.insert(alias, entry);
        }
        self.by_tag.insert(entry.tag, entry);
        self
    }

    /// The number of indexed attributes.
    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    /// Whether no attributes are indexed.
    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }
}

/// Generic Group Length dictionary entry.
static GROUP_LENGTH_ENTRY: DictionaryEntry =
    DictionaryEntry::new(Tag(0x0000, 0x0000), "GenericGroupLength", VR::UL);

/// Generic Private Creator dictionary entry.
static PRIVATE_CREATOR_ENTRY: DictionaryEntry =
    DictionaryEntry::new(Tag(0x0009, 0x0010), "PrivateCreator", VR::LO);

/// A data element dictionary which consults
/// the library's global DICOM attribute registry.
///
/// This is the type which would generally be used
/// whenever a data element dictionary is needed,
/// such as when decoding data sets in implicit VR.
///
/// The dictionary index is automatically initialized upon the first use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardDataDictionary;

impl StandardDataDictionary {
    fn indexed_tag(tag: Tag) -> Option<&'static DictionaryEntry> {
        registry().by_tag.get(&tag).copied().or_else(|| {
            // check for private creator
            if tag.is_private() && (0x0010..=0x00FF).contains(&tag.element()) {
                return Some(&PRIVATE_CREATOR_ENTRY);
            }
            // check for group length
            if tag.is_group_length() {
                return Some(&GROUP_LENGTH_ENTRY);
            }

            None
        })
    }
}

impl DataDictionary for StandardDataDictionary {
    fn by_name(&self, name: &str) -> Option<&DictionaryEntry> {
        registry().by_name.get(name).copied()
    }

    fn by_tag(&self, tag: Tag) -> Option<&DictionaryEntry> {
        StandardDataDictionary::indexed_tag(tag)
    }
}

impl Display for StandardDataDictionary {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.write_str("Standard DICOM Data Dictionary")
    }
}

fn init_dictionary() -> StandardDataDictionaryRegistry {
    let mut d = StandardDataDictionaryRegistry::new();
    for entry in ENTRIES {
        d.index(entry);
    }
    // generic group length is not a listed entry,
    // inserting it manually
    d.by_name.insert("GenericGroupLength", &GROUP_LENGTH_ENTRY);
    d
}

/// A data element dictionary extended with entries registered at run time,
/// typically for private attributes.
///
/// Registered entries take precedence over the standard dictionary.
#[derive(Debug, Default, Clone)]
pub struct ExtendedDataDictionary {
    by_tag: HashMap<Tag, DictionaryEntry>,
    by_name: HashMap<String, Tag>,
}

impl ExtendedDataDictionary {
    /// Create a dictionary with no additional entries.
    pub fn new() -> Self {
        ExtendedDataDictionary::default()
    }

    /// Register an entry,
    /// returning the previously registered entry with the same tag.
    pub fn insert(&mut self, entry: DictionaryEntry) -> Option<DictionaryEntry> {
        let previous = self.by_tag.insert(entry.tag, entry.clone());
        if let Some(previous) = &previous {
            self.by_name.remove(previous.alias.as_ref());
        }
        self.by_name.insert(entry.alias.into_owned(), entry.tag);
        previous
    }

    /// Register an entry, builder style.
    pub fn with_entry(mut self, entry: DictionaryEntry) -> Self {
        self.insert(entry);
        self
    }

    /// The number of registered entries.
    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    /// Whether no entries were registered.
    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }
}

impl DataDictionary for ExtendedDataDictionary {
    fn by_name(&self, name: &str) -> Option<&DictionaryEntry> {
        self.by_name
            .get(name)
            .and_then(|tag| self.by_tag.get(tag))
            .or_else(|| registry().by_name.get(name).copied())
    }

    fn by_tag(&self, tag: Tag) -> Option<&DictionaryEntry> {
        self.by_tag
            .get(&tag)
            .or_else(|| StandardDataDictionary::indexed_tag(tag))
    }
}
