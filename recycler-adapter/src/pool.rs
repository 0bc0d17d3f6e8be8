use alloc::vec::Vec;

use recycler::{Cell, RowKind};

/// Default number of scrapped cells kept per kind.
pub const DEFAULT_CAPACITY_PER_KIND: usize = 5;

/// Scrap heaps of detached cells, one per [`RowKind`].
///
/// A cell only ever goes back to the heap of its own kind, so [`CellPool::obtain`] never hands
/// a header cell to an item row.
#[derive(Debug)]
pub struct CellPool {
    scrap: [Vec<Cell>; 3],
    capacity: usize,
}

impl Default for CellPool {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY_PER_KIND)
    }
}

impl CellPool {
    pub fn new(capacity_per_kind: usize) -> Self {
        Self {
            scrap: [Vec::new(), Vec::new(), Vec::new()],
            capacity: capacity_per_kind,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Changes the per-kind capacity, dropping surplus cells.
    pub fn set_capacity(&mut self, capacity_per_kind: usize) {
        self.capacity = capacity_per_kind;
        for heap in &mut self.scrap {
            heap.truncate(capacity_per_kind);
        }
    }

    /// Takes a scrapped cell of `kind`, most recently recycled first.
    pub fn obtain(&mut self, kind: RowKind) -> Option<Cell> {
        let cell = self.scrap[kind.as_index()].pop();
        debug_assert!(cell.as_ref().is_none_or(|c| c.kind() == kind));
        cell
    }

    /// Puts a detached cell back. Returns `false` if the heap for its kind was full and the
    /// cell was dropped.
    pub fn recycle(&mut self, cell: Cell) -> bool {
        let kind = cell.kind();
        let heap = &mut self.scrap[kind.as_index()];
        if heap.len() >= self.capacity {
            htrace!(?kind, id = cell.id().0, "CellPool: heap full, dropping cell");
            return false;
        }
        heap.push(cell);
        true
    }

    pub fn len(&self, kind: RowKind) -> usize {
        self.scrap[kind.as_index()].len()
    }

    pub fn is_empty(&self) -> bool {
        self.scrap.iter().all(Vec::is_empty)
    }

    pub fn clear(&mut self) {
        for heap in &mut self.scrap {
            heap.clear();
        }
    }
}
