//! Two-state pixel classification.

use crate::hackstructs::CodecConfig;
use crate::HackError;

/// One validated pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sample {
    /// Ink, bit 1
    Black,
    /// Paper, bit 0
    White,
}

impl Sample {
    /// Maps a raw value onto a sentinel, or `None` if it is neither.
    #[inline]
    pub fn from_value(value: u8, config: &CodecConfig) -> Option<Self> {
        if value == config.black {
            Some(Sample::Black)
        } else if value == config.white {
            Some(Sample::White)
        } else {
            None
        }
    }

    /// Bit stored in a Hack screen word: 1 for black, 0 for white.
    #[inline]
    pub fn bit(self) -> bool {
        matches!(self, Sample::Black)
    }

    /// Character used by the preview renderer.
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            Sample::Black => '@',
            Sample::White => '.',
        }
    }
}

/// Classifies the sample at (`row`, `column`), rejecting anything that is not a sentinel.
#[inline]
pub fn classify(
    value: u8,
    row: usize,
    column: usize,
    config: &CodecConfig,
) -> Result<Sample, HackError> {
    Sample::from_value(value, config).ok_or(HackError::InvalidSample { value, row, column })
}
