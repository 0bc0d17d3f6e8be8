use alloc::string::String;

use crate::{ImageSlot, ImageTarget, Navigator, Notifier, RowKind};

/// Identity of a cell, assigned by the cell factory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellId(pub u64);

/// What happens when a bound cell is clicked.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Interaction {
    /// Show a transient message.
    Notify(String),
    /// Open the detail view for the named item.
    OpenDetail(String),
}

impl Interaction {
    pub fn dispatch(&self, notifier: &mut dyn Notifier, navigator: &mut dyn Navigator) {
        match self {
            Self::Notify(message) => notifier.notify(message),
            Self::OpenDetail(name) => navigator.open_detail(name),
        }
    }

    /// Same as [`Interaction::dispatch`], for a host that is both notifier and navigator.
    pub fn dispatch_to<S: Notifier + Navigator + ?Sized>(&self, sink: &mut S) {
        match self {
            Self::Notify(message) => sink.notify(message),
            Self::OpenDetail(name) => sink.open_detail(name),
        }
    }
}

/// A header or footer cell: a single line of text.
#[derive(Debug, Default)]
pub struct DecorCell {
    id: CellId,
    text: String,
    on_click: Option<Interaction>,
}

impl DecorCell {
    pub fn new(id: CellId) -> Self {
        Self {
            id,
            text: String::new(),
            on_click: None,
        }
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn on_click(&self) -> Option<&Interaction> {
        self.on_click.as_ref()
    }

    pub(crate) fn bind(&mut self, text: &str, on_click: Interaction) {
        self.text.clear();
        self.text.push_str(text);
        self.on_click = Some(on_click);
    }
}

/// An item cell: the bound label, its text and an image slot.
#[derive(Debug, Default)]
pub struct ItemCell {
    id: CellId,
    bound: Option<String>,
    text: String,
    image: ImageSlot,
    on_click: Option<Interaction>,
}

impl ItemCell {
    pub fn new(id: CellId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    /// The label of the item this cell was last bound to.
    pub fn bound_label(&self) -> Option<&str> {
        self.bound.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn image(&self) -> &ImageSlot {
        &self.image
    }

    pub fn on_click(&self) -> Option<&Interaction> {
        self.on_click.as_ref()
    }

    /// Binds `label` and returns the target for this bind's image load.
    pub(crate) fn bind(&mut self, label: &str) -> ImageTarget {
        let bound = self.bound.get_or_insert_with(String::new);
        bound.clear();
        bound.push_str(label);
        self.text.clear();
        self.text.push_str(label);
        self.on_click = Some(Interaction::OpenDetail(String::from(label)));
        self.image.begin_bind()
    }
}

/// A recyclable cell. The variant is fixed when the cell is created.
#[derive(Debug)]
pub enum Cell {
    Header(DecorCell),
    Item(ItemCell),
    Footer(DecorCell),
}

impl Cell {
    pub fn kind(&self) -> RowKind {
        match self {
            Self::Header(_) => RowKind::Header,
            Self::Item(_) => RowKind::Item,
            Self::Footer(_) => RowKind::Footer,
        }
    }

    pub fn id(&self) -> CellId {
        match self {
            Self::Header(c) | Self::Footer(c) => c.id(),
            Self::Item(c) => c.id(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Header(c) | Self::Footer(c) => c.text(),
            Self::Item(c) => c.text(),
        }
    }

    pub fn on_click(&self) -> Option<&Interaction> {
        match self {
            Self::Header(c) | Self::Footer(c) => c.on_click(),
            Self::Item(c) => c.on_click(),
        }
    }

    pub fn as_item(&self) -> Option<&ItemCell> {
        match self {
            Self::Item(c) => Some(c),
            Self::Header(_) | Self::Footer(_) => None,
        }
    }

    /// The bound label of an item cell.
    pub fn bound_label(&self) -> Option<&str> {
        self.as_item().and_then(ItemCell::bound_label)
    }

    /// Runs the cell's click handler. Returns `false` for a cell that was never bound.
    pub fn click(&self, notifier: &mut dyn Notifier, navigator: &mut dyn Navigator) -> bool {
        let Some(interaction) = self.on_click() else {
            return false;
        };
        interaction.dispatch(notifier, navigator);
        true
    }
}
