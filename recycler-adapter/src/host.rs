use alloc::vec::Vec;

use recycler::{BindEnv, Cell, CellFactory, Error, ListAdapter, Navigator, Notifier, RowRange};

use crate::CellPool;

/// What a single [`ListHost::layout`] pass did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutPass {
    /// Rows attached after the pass.
    pub attached: usize,
    /// Cells bound during the pass (newly visible rows).
    pub bound: usize,
    /// Cells built by the factory because the pool had none of the right kind.
    pub created: usize,
    /// Cells taken from the pool.
    pub reused: usize,
    /// Cells detached from rows that scrolled out of view.
    pub recycled: usize,
}

/// A linear list host: it owns the adapter, keeps one cell per visible row, and recycles the
/// cells of rows that leave the viewport.
///
/// Rows have a uniform extent, so the viewport is measured in rows. The host only ever
/// visits the visible rows; the adapter is asked for the row count and nothing else about
/// rows outside the window.
pub struct ListHost<F: CellFactory, T = alloc::string::String> {
    adapter: ListAdapter<T>,
    factory: F,
    container: F::Container,
    pool: CellPool,
    attached: Vec<(usize, Cell)>, // sorted by row
    viewport_rows: usize,
    first_row: usize,
}

impl<F: CellFactory, T: AsRef<str>> ListHost<F, T> {
    pub fn new(adapter: ListAdapter<T>, factory: F, container: F::Container) -> Self {
        Self {
            adapter,
            factory,
            container,
            pool: CellPool::default(),
            attached: Vec::new(),
            viewport_rows: 0,
            first_row: 0,
        }
    }

    pub fn with_pool(mut self, pool: CellPool) -> Self {
        self.pool = pool;
        self
    }

    pub fn adapter(&self) -> &ListAdapter<T> {
        &self.adapter
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn pool(&self) -> &CellPool {
        &self.pool
    }

    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    pub fn first_row(&self) -> usize {
        self.first_row
    }

    /// Resizes the viewport. Takes effect on the next [`ListHost::layout`].
    pub fn set_viewport_rows(&mut self, rows: usize) {
        self.viewport_rows = rows;
        self.first_row = self.clamp_first_row(self.first_row);
    }

    /// Scrolls so that `row` is the first visible row, clamped so the viewport stays filled
    /// where possible. Returns the applied first row.
    pub fn scroll_to_row(&mut self, row: usize) -> usize {
        self.first_row = self.clamp_first_row(row);
        self.first_row
    }

    /// Scrolls by a signed number of rows. Returns the applied first row.
    pub fn scroll_by(&mut self, delta: isize) -> usize {
        let target = self.first_row.saturating_add_signed(delta);
        self.scroll_to_row(target)
    }

    fn clamp_first_row(&self, row: usize) -> usize {
        let max_first = self.adapter.row_count().saturating_sub(self.viewport_rows);
        row.min(max_first)
    }

    pub fn visible_range(&self) -> RowRange {
        let count = self.adapter.row_count();
        let start = self.first_row.min(count);
        let end = start.saturating_add(self.viewport_rows).min(count);
        RowRange::new(start, end)
    }

    /// Brings the attached cells in line with the visible range.
    ///
    /// Cells of rows that left the range go to the pool. Each newly visible row gets a cell
    /// of its kind, from the pool if one is available and from the factory otherwise, and is
    /// bound. Rows that stay visible keep their cell and are not rebound.
    pub fn layout(&mut self, env: &mut BindEnv<'_>) -> Result<LayoutPass, Error> {
        let range = self.visible_range();
        let mut pass = LayoutPass::default();

        let previous = core::mem::take(&mut self.attached);
        let mut kept = Vec::with_capacity(range.len());
        for (row, cell) in previous {
            if range.contains(row) {
                kept.push((row, cell));
            } else {
                pass.recycled += 1;
                self.pool.recycle(cell);
            }
        }

        let mut next = Vec::with_capacity(range.len());
        let mut kept = kept.into_iter().peekable();
        for row in range.iter() {
            if let Some((_, cell)) = kept.next_if(|(r, _)| *r == row) {
                next.push((row, cell));
                continue;
            }

            let kind = self.adapter.kind_of(row);
            let mut cell = match self.pool.obtain(kind) {
                Some(cell) => {
                    pass.reused += 1;
                    cell
                }
                None => {
                    pass.created += 1;
                    self.adapter
                        .create_cell(kind, &mut self.factory, &self.container)
                }
            };
            if let Err(err) = self.adapter.bind(&mut cell, row, env) {
                hwarn!(row, %err, "ListHost::layout: bind failed");
                self.pool.recycle(cell);
                next.extend(kept);
                self.attached = next;
                return Err(err);
            }
            pass.bound += 1;
            next.push((row, cell));
        }

        self.attached = next;
        pass.attached = self.attached.len();
        hdebug!(
            start = range.start,
            end = range.end,
            bound = pass.bound,
            created = pass.created,
            reused = pass.reused,
            recycled = pass.recycled,
            "ListHost::layout"
        );
        Ok(pass)
    }

    /// Detaches every cell into the pool.
    pub fn detach_all(&mut self) {
        for (_, cell) in self.attached.drain(..) {
            self.pool.recycle(cell);
        }
    }

    pub fn cell_at(&self, row: usize) -> Option<&Cell> {
        self.attached
            .binary_search_by_key(&row, |(r, _)| *r)
            .ok()
            .map(|i| &self.attached[i].1)
    }

    pub fn attached_len(&self) -> usize {
        self.attached.len()
    }

    /// Calls `f` for each attached row, in row order.
    pub fn for_each_attached(&self, mut f: impl FnMut(usize, &Cell)) {
        for (row, cell) in &self.attached {
            f(*row, cell);
        }
    }

    /// Clicks the cell at `row`. Returns `false` if the row is not attached or its cell has
    /// no handler.
    pub fn click<S: Notifier + Navigator + ?Sized>(&self, row: usize, sink: &mut S) -> bool {
        let Some(interaction) = self.cell_at(row).and_then(Cell::on_click) else {
            return false;
        };
        interaction.dispatch_to(sink);
        true
    }
}

impl<F: CellFactory, T: AsRef<str>> core::fmt::Debug for ListHost<F, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let rows: Vec<usize> = self.attached.iter().map(|(row, _)| *row).collect();
        f.debug_struct("ListHost")
            .field("row_count", &self.adapter.row_count())
            .field("viewport_rows", &self.viewport_rows)
            .field("first_row", &self.first_row)
            .field("attached", &rows)
            .field("pool", &self.pool)
            .finish_non_exhaustive()
    }
}

