//! The tag byte heading a tag-length-value encoding.

use tartan_bitfield::bitfield;

bitfield! {
    struct TagByte(u8) {
        [0..3] length_value_type: u8,
        [3] is_context_specific,
        [4..8] tag_number: u8,
    }
}

/// The fields packed into a tag byte.
///
/// Any byte decodes to a tag. Whether the combination of fields is meaningful
/// (for example, an extended tag number or an opening tag) is left to the
/// caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tag {
    /// Tag number, bits 7-4 (0-15).
    pub tag_number: u8,
    /// Class flag, bit 3. Set for context-specific tags, clear for
    /// application tags.
    pub is_context_specific: bool,
    /// Length, value or type, bits 2-0 (0-7).
    pub length_value_type: u8,
}

/// The class of a tag, as selected by its class flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagClass {
    Application,
    Context,
}

impl Tag {
    /// The class of this tag.
    pub fn class(&self) -> TagClass {
        if self.is_context_specific {
            TagClass::Context
        } else {
            TagClass::Application
        }
    }
}

impl From<u8> for Tag {
    fn from(r: u8) -> Self {
        let byte = TagByte(r);

        Self {
            tag_number: byte.tag_number(),
            is_context_specific: byte.is_context_specific(),
            length_value_type: byte.length_value_type(),
        }
    }
}
