use core::fmt;

/// The kind of a row, and of the cells that can display it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowKind {
    Header,
    Item,
    Footer,
}

impl RowKind {
    pub const ALL: [RowKind; 3] = [RowKind::Header, RowKind::Item, RowKind::Footer];

    /// A dense index in `0..3`, handy for per-kind tables.
    pub fn as_index(self) -> usize {
        match self {
            Self::Header => 0,
            Self::Item => 1,
            Self::Footer => 2,
        }
    }
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Header => "header",
            Self::Item => "item",
            Self::Footer => "footer",
        })
    }
}

/// A classified row. `Item` carries the index into the item collection (`row - 1`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Row {
    Header,
    Item(usize),
    Footer,
}

impl Row {
    pub fn kind(self) -> RowKind {
        match self {
            Self::Header => RowKind::Header,
            Self::Item(_) => RowKind::Item,
            Self::Footer => RowKind::Footer,
        }
    }

    pub fn item_index(self) -> Option<usize> {
        match self {
            Self::Item(index) => Some(index),
            Self::Header | Self::Footer => None,
        }
    }
}

/// Maps a row to its kind for a list of `item_count` items.
///
/// Row `0` is the header and row `item_count + 1` the footer; every other row is an item.
/// This does not check that `row` is in range, see [`crate::ListAdapter::row`] for that.
pub fn classify(row: usize, item_count: usize) -> Row {
    if row == 0 {
        Row::Header
    } else if row == item_count.saturating_add(1) {
        Row::Footer
    } else {
        Row::Item(row - 1)
    }
}

/// A half-open range of rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowRange {
    pub start: usize,
    pub end: usize, // exclusive
}

impl RowRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn contains(&self, row: usize) -> bool {
        self.start <= row && row < self.end
    }

    pub fn iter(&self) -> core::ops::Range<usize> {
        self.start..self.end
    }
}

/// An opaque handle to an image in a drawable pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawableId(pub u32);

/// How a loaded image is scaled into its slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitMode {
    /// Scale uniformly so the whole image fits, centered.
    #[default]
    FitCenter,
    /// Scale uniformly to cover the slot, cropping the overflow.
    CenterCrop,
}
