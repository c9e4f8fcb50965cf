//! Row-major sample sources and their lazy split into padded rows.

use log::debug;
use ndarray::{Array2, Ix2};
use std::iter::Copied;

use crate::hackpad::{GroupResult, GroupStream};
use crate::hackshared::RowLayout;
use crate::hackstructs::CodecConfig;
use crate::HackError;

/// A decoded image: its dimensions and a row-major stream of raw samples.
///
/// The samples are read once, in order, as the rows are requested.
pub struct Image<I> {
    width: usize,
    height: usize,
    samples: I,
}

impl<I: Iterator<Item = u8>> Image<I> {
    /// Wraps `samples`, which must yield at least `width * height` values.
    pub fn new(width: usize, height: usize, samples: I) -> Self {
        Self {
            width,
            height,
            samples,
        }
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row geometry for the given word width.
    pub fn layout(&self, word_width: usize) -> RowLayout {
        RowLayout::new(self.width, self.height, word_width)
    }

    /// Turns the image into a stream of padded rows.
    pub fn rows(self, config: &CodecConfig) -> RowStream<'_, I> {
        RowStream {
            layout: self.layout(config.word_width),
            samples: self.samples,
            config,
            next_row: 0,
            failed: false,
        }
    }
}

impl<'a> Image<Copied<std::slice::Iter<'a, u8>>> {
    /// Wraps a row-major buffer of samples.
    pub fn from_slice(width: usize, height: usize, data: &'a [u8]) -> Self {
        Self::new(width, height, data.iter().copied())
    }
}

impl<'a> Image<Copied<ndarray::iter::Iter<'a, u8, Ix2>>> {
    /// Wraps a `(height, width)` array.
    pub fn from_array(array: &'a Array2<u8>) -> Self {
        let (height, width) = array.dim();
        Self::new(width, height, array.iter().copied())
    }
}

/// One image row after padding, still as raw samples.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaddedRow {
    /// Zero-based row index
    pub index: usize,
    /// `padded_width` samples; the tail past the image width is fill
    pub samples: Vec<u8>,
}

/// Iterator over the padded rows of an [`Image`].
///
/// Every row takes exactly `width` samples from the source and is padded on
/// its own. If the source runs out first, the row is reported as
/// [`HackError::TruncatedStream`] and iteration stops.
pub struct RowStream<'c, I> {
    samples: I,
    layout: RowLayout,
    config: &'c CodecConfig,
    next_row: usize,
    failed: bool,
}

impl<'c, I: Iterator<Item = u8>> RowStream<'c, I> {
    /// Geometry of the rows being produced.
    pub fn layout(&self) -> RowLayout {
        self.layout
    }

    /// True if the source still holds samples once every row has been read.
    pub fn has_trailing_samples(&mut self) -> bool {
        self.next_row >= self.layout.height && self.samples.next().is_some()
    }
}

impl<'c, I: Iterator<Item = u8>> Iterator for RowStream<'c, I> {
    type Item = Result<PaddedRow, HackError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.next_row >= self.layout.height {
            return None;
        }
        let index = self.next_row;
        self.next_row += 1;

        let width = self.layout.width;
        let mut groups = GroupStream::new(
            self.samples.by_ref().take(width),
            self.config.word_width,
            self.config.fill,
        )
        .expecting(self.layout.words_per_row);

        let mut samples = Vec::with_capacity(self.layout.padded_width);
        loop {
            match groups.next_group() {
                GroupResult::Full(group) => samples.extend_from_slice(&group),
                GroupResult::Padded { group, .. } => {
                    samples.extend_from_slice(&group);
                    break;
                }
                GroupResult::End | GroupResult::Truncated { .. } => break,
            }
        }

        let received = groups.samples_read();
        if received < width {
            self.failed = true;
            return Some(Err(HackError::TruncatedStream {
                row: index,
                expected: width,
                received,
            }));
        }

        debug!(
            "Row {}: {} samples, {} fill",
            index,
            received,
            samples.len() - received
        );
        Some(Ok(PaddedRow { index, samples }))
    }
}
