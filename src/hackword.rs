//! Packing of classified pixels into Hack screen words and their Jack literals.
//!
//! The Hack screen maps the least-significant bit of a word to the leftmost
//! pixel of its 16-pixel span, so pixel `i` of a group becomes bit `i` of the
//! word. The unsigned pattern is then read as a two's-complement value.

use bitvec::prelude::*;
use std::fmt;

use crate::hackpixel::classify;
use crate::hackstructs::{CodecConfig, HACK_WORD_BITS};
use crate::HackError;

#[cfg(feature = "trace_codec")]
use tracing::trace;

#[cfg(not(feature = "trace_codec"))]
#[macro_use]
mod trace_stubs {
    macro_rules! trace {
        ($($arg:tt)*) => { std::convert::identity(format_args!($($arg)*)) };
    }
}

/// Bits of one word, pixel `i` at bit `i`.
pub type WordBits = BitArray<[u16; 1], Lsb0>;

/// Jack has no literal for -32768; this expression evaluates to it.
pub const MIN_WORD_LITERAL: &str = "(-32767 - 1)";

/// A signed Hack word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Word(pub i16);

impl Word {
    /// Signed value of the word.
    #[inline]
    pub fn value(self) -> i16 {
        self.0
    }

    /// Jack source text for this word.
    pub fn literal(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == i16::MIN {
            f.write_str(MIN_WORD_LITERAL)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Widths outside 1-16 are clamped into that range.
#[inline]
fn clamp_width(width: usize) -> usize {
    width.clamp(1, HACK_WORD_BITS)
}

/// Reads the low `width` bits of `raw` as a two's-complement number.
#[inline]
fn twos_complement(raw: u16, width: usize) -> i16 {
    let width = clamp_width(width);
    let value = raw as i32;
    let signed = if value & (1 << (width - 1)) != 0 {
        value - (1 << width)
    } else {
        value
    };
    signed as i16
}

/// Packs up to `width` bits given in left-to-right pixel order.
///
/// `width` is clamped to 1-16.
pub fn encode_bits<B>(bits: B, width: usize) -> Word
where
    B: IntoIterator<Item = bool>,
{
    let width = clamp_width(width);
    let mut packed = WordBits::new([0]);
    for (i, bit) in bits.into_iter().take(width).enumerate() {
        packed.set(i, bit);
    }
    Word(twos_complement(packed.into_inner()[0], width))
}

/// Unpacks a word into `width` bits in left-to-right pixel order.
pub fn decode_word(word: Word, width: usize) -> Vec<bool> {
    let packed = WordBits::new([word.0 as u16]);
    packed.iter().by_vals().take(width).collect()
}

/// Classifies and packs one group of raw samples starting at (`row`, `first_column`).
///
/// Samples are validated in order; the first value that is not a sentinel
/// aborts the group.
pub fn encode_group(
    group: &[u8],
    row: usize,
    first_column: usize,
    config: &CodecConfig,
) -> Result<Word, HackError> {
    let width = clamp_width(config.word_width);
    let mut packed = WordBits::new([0]);
    for (i, &value) in group.iter().take(width).enumerate() {
        let sample = classify(value, row, first_column + i, config)?;
        packed.set(i, sample.bit());
    }
    let raw = packed.into_inner()[0];
    let word = Word(twos_complement(raw, width));
    trace!("row {} col {}: {:#06x} -> {}", row, first_column, raw, word);
    Ok(word)
}

/// The words of one padded image row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordRow {
    /// Row index in the image
    pub index: usize,
    /// Words in left-to-right order
    pub words: Vec<Word>,
}

impl WordRow {
    /// Literals joined with `", "`.
    pub fn joined_literals(&self) -> String {
        self.words
            .iter()
            .map(|w| w.literal())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Encodes a row whose length is already a multiple of the word width.
pub fn encode_row(index: usize, samples: &[u8], config: &CodecConfig) -> Result<WordRow, HackError> {
    let width = clamp_width(config.word_width);
    let words = samples
        .chunks(width)
        .enumerate()
        .map(|(i, group)| encode_group(group, index, i * width, config))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(WordRow { index, words })
}
