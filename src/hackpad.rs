//! Word-aligned grouping of a sample stream.
//!
//! [`GroupStream`] pulls samples from any iterator and hands them out in
//! groups of exactly one word. Only the last group of the stream can be short;
//! it is completed with the fill sample and the stream then ends.

/// Outcome of one [`GroupStream::next_group`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GroupResult {
    /// A whole group read from the source.
    Full(Vec<u8>),
    /// The source ran dry part-way through; `filled` trailing samples are fill.
    /// No further groups follow.
    Padded {
        /// The completed group
        group: Vec<u8>,
        /// Fill samples at its end
        filled: usize,
    },
    /// The source ended on a group boundary (or the expected count was reached).
    End,
    /// The source ended with no samples for a group that was still expected.
    Truncated {
        /// Groups handed out before the source ended
        delivered: usize,
    },
}

/// Pull-based grouping of samples into word-sized chunks.
pub struct GroupStream<I> {
    source: I,
    group_len: usize,
    fill: u8,
    /// Groups the caller expects, if known
    expected: Option<usize>,
    delivered: usize,
    samples_read: usize,
    finished: bool,
}

impl<I: Iterator<Item = u8>> GroupStream<I> {
    /// Creates a stream without an expected group count; it ends cleanly on
    /// any group boundary.
    pub fn new(source: I, group_len: usize, fill: u8) -> Self {
        debug_assert!(group_len > 0, "group length must be positive");
        Self {
            source,
            group_len,
            fill,
            expected: None,
            delivered: 0,
            samples_read: 0,
            finished: false,
        }
    }

    /// Declares how many groups the source must provide. Running out before
    /// that count with an empty group yields [`GroupResult::Truncated`].
    pub fn expecting(mut self, groups: usize) -> Self {
        self.expected = Some(groups);
        self
    }

    /// Number of groups handed out so far.
    pub fn groups_delivered(&self) -> usize {
        self.delivered
    }

    /// Number of samples taken from the source so far (fill not included).
    pub fn samples_read(&self) -> usize {
        self.samples_read
    }

    /// Returns the next group. Once `End`, `Padded` or `Truncated` has been
    /// seen, every later call returns `End`.
    pub fn next_group(&mut self) -> GroupResult {
        if self.finished {
            return GroupResult::End;
        }
        if self.expected == Some(self.delivered) {
            self.finished = true;
            return GroupResult::End;
        }

        let mut group = Vec::with_capacity(self.group_len);
        group.extend(self.source.by_ref().take(self.group_len));
        self.samples_read += group.len();

        match group.len() {
            0 => {
                self.finished = true;
                match self.expected {
                    Some(n) if self.delivered < n => GroupResult::Truncated {
                        delivered: self.delivered,
                    },
                    _ => GroupResult::End,
                }
            }
            n if n == self.group_len => {
                self.delivered += 1;
                GroupResult::Full(group)
            }
            n => {
                let filled = self.group_len - n;
                group.resize(self.group_len, self.fill);
                self.delivered += 1;
                self.finished = true;
                GroupResult::Padded { group, filled }
            }
        }
    }
}
