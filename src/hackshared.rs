//! Utility functions shared by the codec and the code generator

// ==============================================
// Type conversion utilities
// ==============================================

/// Convert from u32 to usize.
#[inline]
pub fn u32_to_usize(x: u32) -> usize {
    x as usize
}

// ==============================================
// Row layout arithmetic
// ==============================================

/// Rounds `width` up to the next multiple of `word_width`.
///
/// Widths that are already aligned are returned unchanged, so a 16-pixel row
/// stays 16 pixels and a 20-pixel row becomes 32.
#[inline]
pub fn padded_width(width: usize, word_width: usize) -> usize {
    width + (word_width - width % word_width) % word_width
}

/// Number of words needed to hold `width` pixels.
#[inline]
pub fn words_per_row(width: usize, word_width: usize) -> usize {
    padded_width(width, word_width) / word_width
}

/// Geometry of an image once its rows are padded to whole words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowLayout {
    /// Input width in pixels
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Bits per word
    pub word_width: usize,
    /// Row width in pixels after padding
    pub padded_width: usize,
    /// Words per padded row
    pub words_per_row: usize,
}

impl RowLayout {
    /// Layout of a `width` x `height` image in words of `word_width` bits.
    pub fn new(width: usize, height: usize, word_width: usize) -> Self {
        Self {
            width,
            height,
            word_width,
            padded_width: padded_width(width, word_width),
            words_per_row: words_per_row(width, word_width),
        }
    }

    /// Pixels appended to each row.
    pub fn fill_per_row(&self) -> usize {
        self.padded_width - self.width
    }

    /// Total number of words in the image.
    pub fn total_words(&self) -> usize {
        self.words_per_row * self.height
    }
}

// ==============================================
// Jack identifiers
// ==============================================

/// Reserved words of the Jack language.
pub const JACK_KEYWORDS: [&str; 21] = [
    "class",
    "constructor",
    "function",
    "method",
    "field",
    "static",
    "var",
    "int",
    "char",
    "boolean",
    "void",
    "true",
    "false",
    "null",
    "this",
    "let",
    "do",
    "if",
    "else",
    "while",
    "return",
];

/// Jack identifiers are letters, digits and underscores, not starting with a
/// digit and not a keyword.
pub fn is_jack_identifier(name: &str) -> bool {
    if JACK_KEYWORDS.contains(&name) {
        return false;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
