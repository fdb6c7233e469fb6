//! Handle pixel data encapsulation into fragments
use crate::value::Value;

/// The fragments of a single frame of encapsulated pixel data.
///
/// Each fragment becomes one OB value of the Pixel Data element.
/// The encoder writes an OB element holding more than one value
/// in encapsulated form, with an empty basic offset table,
/// so a frame should be split into at least two fragments
/// for it to be encapsulated.
///
/// # Example
/// ```
/// use dcmcodec_core::{DataSet, Tag};
/// use dcmcodec_core::value::fragments::Fragments;
///
/// // a single 512x512 frame in fragments of 64 KiB
/// let frame = vec![0; 262144];
/// let fragments = Fragments::new(frame, 65536);
/// assert_eq!(fragments.len(), 4);
///
/// let mut dataset = DataSet::new();
/// dataset.extend(fragments.into_values().map(|v| (Tag::PIXEL_DATA, v)));
/// assert_eq!(dataset.count(Tag::PIXEL_DATA), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Fragments {
    fragments: Vec<Vec<u8>>,
}

impl Fragments {
    /// Split `data` into fragments of `fragment_size` bytes.
    ///
    /// A fragment size of zero keeps all data in a single fragment.
    /// Odd fragment sizes are rounded up to the next even number,
    /// and the last fragment is padded with zeros
    /// so that all fragments have the same size.
    pub fn new(data: Vec<u8>, fragment_size: u32) -> Self {
        if data.is_empty() {
            return Fragments {
                fragments: Vec::new(),
            };
        }

        let fragment_size = if fragment_size == 0 {
            data.len()
        } else {
            fragment_size as usize
        };
        let fragment_size = fragment_size + fragment_size % 2;

        let number_of_fragments = (data.len() + fragment_size - 1) / fragment_size;

        // pad the data so all the chunks have the same fragment size
        let mut data = data;
        data.resize(fragment_size * number_of_fragments, 0);

        let fragments = data
            .chunks_exact(fragment_size)
            .map(|fragment| fragment.to_vec())
            .collect();

        Fragments { fragments }
    }

    /// Whether there are no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// The number of fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// The number of bytes taken by the fragment items when encoded,
    /// counting 8 bytes of item header per fragment.
    pub fn encoded_len(&self) -> u32 {
        self.fragments
            .iter()
            .fold(0u32, |acc, fragment| acc + fragment.len() as u32 + 8u32)
    }

    /// Turn the fragments into OB values, in order.
    pub fn into_values(self) -> impl Iterator<Item = Value> {
        self.fragments.into_iter().map(Value::ob)
    }
}
