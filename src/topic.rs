//! Topic labels.

use std::fmt;

/// One of the `K` latent topics.
///
/// Topics are numbered `1..=K` for display; internally they index dense
/// per-topic arrays through [`Topic::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Topic(usize);

impl Topic {
    /// Topic at 0-based position `index`.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Topic with 1-based id `id`, or `None` for `0`.
    pub const fn from_id(id: usize) -> Option<Self> {
        if id == 0 {
            None
        } else {
            Some(Self(id - 1))
        }
    }

    /// 0-based position, for indexing per-topic arrays.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }

    /// 1-based id, as shown to users.
    #[inline]
    pub const fn id(self) -> usize {
        self.0 + 1
    }

    /// All topics `1..=num_topics`, in order.
    pub fn all(num_topics: usize) -> impl DoubleEndedIterator<Item = Topic> + ExactSizeIterator {
        (0..num_topics).map(Topic)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
