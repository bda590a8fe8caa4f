/// The six HTML heading tags, ordered from most to least significant.
///
/// The discriminant doubles as the zero-based rank used throughout the
/// outline builder: `H1` is rank 0, `H6` is rank 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeadingTag {
    H1 = 0,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingTag {
    /// Parse a tag name like "h2" or "H2"
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "h1" => Some(HeadingTag::H1),
            "h2" => Some(HeadingTag::H2),
            "h3" => Some(HeadingTag::H3),
            "h4" => Some(HeadingTag::H4),
            "h5" => Some(HeadingTag::H5),
            "h6" => Some(HeadingTag::H6),
            _ => None,
        }
    }

    /// Build from the 1-based level number in the tag name (h1 = 1)
    pub fn from_level(level: usize) -> Option<Self> {
        match level {
            1 => Some(HeadingTag::H1),
            2 => Some(HeadingTag::H2),
            3 => Some(HeadingTag::H3),
            4 => Some(HeadingTag::H4),
            5 => Some(HeadingTag::H5),
            6 => Some(HeadingTag::H6),
            _ => None,
        }
    }

    /// Zero-based rank, 0 = most significant
    pub fn rank(self) -> usize {
        self as usize
    }

    /// The 1-based level number in the tag name
    pub fn level(self) -> usize {
        self.rank() + 1
    }

    /// Tag name as it appears in markup
    pub fn name(self) -> &'static str {
        match self {
            HeadingTag::H1 => "h1",
            HeadingTag::H2 => "h2",
            HeadingTag::H3 => "h3",
            HeadingTag::H4 => "h4",
            HeadingTag::H5 => "h5",
            HeadingTag::H6 => "h6",
        }
    }
}
