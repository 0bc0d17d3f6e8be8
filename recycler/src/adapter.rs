use alloc::vec::Vec;

use crate::{
    AdapterOptions, BindEnv, Cell, CellFactory, Error, ImageRequest, Interaction, Row, RowKind,
    classify,
};

/// A list adapter over a fixed collection of labels, framed by a header and a footer row.
///
/// Rows are laid out as `[header, items[0], .., items[n - 1], footer]`, so there are always
/// `n + 2` rows, even for an empty collection. Whether to show an empty list at all is up to
/// the host.
///
/// The adapter holds no cells. The host creates cells with [`ListAdapter::create_cell`],
/// keeps them around, and calls [`ListAdapter::bind`] whenever a cell is (re)used for a row.
#[derive(Clone, Debug)]
pub struct ListAdapter<T = alloc::string::String> {
    items: Vec<T>,
    options: AdapterOptions,
}

impl<T: AsRef<str>> ListAdapter<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self::with_options(items, AdapterOptions::default())
    }

    pub fn with_options(items: Vec<T>, options: AdapterOptions) -> Self {
        rdebug!(items = items.len(), "ListAdapter::new");
        Self { items, options }
    }

    pub fn options(&self) -> &AdapterOptions {
        &self.options
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Number of rows: the items plus the header and footer rows.
    pub fn row_count(&self) -> usize {
        self.items.len() + 2
    }

    /// The kind of `row`. Rows past the footer are reported as items; use
    /// [`ListAdapter::row`] when the row may be out of range.
    pub fn kind_of(&self, row: usize) -> RowKind {
        classify(row, self.items.len()).kind()
    }

    /// Classifies `row`, checking that it exists.
    pub fn row(&self, row: usize) -> Result<Row, Error> {
        let row_count = self.row_count();
        if row >= row_count {
            return Err(Error::RowOutOfRange { row, row_count });
        }
        Ok(classify(row, self.items.len()))
    }

    /// Creates an unbound cell of `kind` through `factory`.
    pub fn create_cell<F: CellFactory + ?Sized>(
        &self,
        kind: RowKind,
        factory: &mut F,
        container: &F::Container,
    ) -> Cell {
        rtrace!(?kind, "ListAdapter::create_cell");
        match kind {
            RowKind::Header => Cell::Header(factory.create_header_cell(container)),
            RowKind::Item => Cell::Item(factory.create_item_cell(container)),
            RowKind::Footer => Cell::Footer(factory.create_footer_cell(container)),
        }
    }

    /// Binds `cell` to `row`.
    ///
    /// Header and footer cells get their label and a click handler that shows a message.
    /// Item cells get the item's label, a click handler that opens its detail view, and a
    /// fresh image load for a random drawable; the load is tied to this bind, so a load left
    /// over from an earlier bind of the same cell can no longer land in it.
    pub fn bind(&self, cell: &mut Cell, row: usize, env: &mut BindEnv<'_>) -> Result<(), Error> {
        let classified = self.row(row)?;
        match (cell, classified) {
            (Cell::Header(c), Row::Header) => {
                c.bind(
                    &self.options.header_label,
                    Interaction::Notify(self.options.header_message.clone()),
                );
            }
            (Cell::Footer(c), Row::Footer) => {
                c.bind(
                    &self.options.footer_label,
                    Interaction::Notify(self.options.footer_message.clone()),
                );
            }
            (Cell::Item(c), Row::Item(index)) => {
                let label = self.items[index].as_ref();
                let target = c.bind(label);
                let source = env.drawables.pick_random();
                rtrace!(
                    row,
                    cell = c.id().0,
                    generation = target.generation(),
                    "ListAdapter::bind item"
                );
                env.images.load_into(ImageRequest {
                    target,
                    source,
                    fit: self.options.fit,
                });
            }
            (cell, classified) => {
                rwarn!(
                    row,
                    cell = ?cell.kind(),
                    expected = ?classified.kind(),
                    "ListAdapter::bind: cell kind does not match row"
                );
                return Err(Error::KindMismatch {
                    row,
                    cell: cell.kind(),
                    expected: classified.kind(),
                });
            }
        }
        Ok(())
    }

    /// The item shown at `row`. Header and footer rows carry no item.
    pub fn value_at(&self, row: usize) -> Result<&T, Error> {
        match self.row(row)? {
            Row::Item(index) => Ok(&self.items[index]),
            other => Err(Error::NotAnItem {
                row,
                kind: other.kind(),
            }),
        }
    }
}
