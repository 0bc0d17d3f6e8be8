use crate::{DecorCell, DrawableId, ImageRequest, ItemCell};

/// Builds unbound cells. The adapter decides which method to call; the factory decides how a
/// cell is laid out inside `container`.
pub trait CellFactory {
    type Container;

    fn create_header_cell(&mut self, container: &Self::Container) -> DecorCell;
    fn create_item_cell(&mut self, container: &Self::Container) -> ItemCell;
    fn create_footer_cell(&mut self, container: &Self::Container) -> DecorCell;
}

/// Shows a short transient message to the user.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Opens the detail view for an item.
pub trait Navigator {
    fn open_detail(&mut self, name: &str);
}

/// Loads images into cell slots, asynchronously and best-effort.
///
/// The provider owns the request until it completes it with [`ImageRequest::deliver`] or
/// [`ImageRequest::fail`]; dropping a request leaves the slot blank.
pub trait ImageProvider {
    fn load_into(&mut self, request: ImageRequest);
}

/// A fixed pool of images to pick from.
pub trait DrawablePool {
    fn pick_random(&mut self) -> DrawableId;
}

/// The capabilities an adapter needs while binding.
pub struct BindEnv<'a> {
    pub images: &'a mut dyn ImageProvider,
    pub drawables: &'a mut dyn DrawablePool,
}

impl<'a> BindEnv<'a> {
    pub fn new(images: &'a mut dyn ImageProvider, drawables: &'a mut dyn DrawablePool) -> Self {
        Self { images, drawables }
    }
}

impl core::fmt::Debug for BindEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BindEnv").finish_non_exhaustive()
    }
}

/// A cell factory that needs no container and numbers cells in creation order.
#[derive(Clone, Debug, Default)]
pub struct DefaultCellFactory {
    next_id: u64,
}

impl DefaultCellFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many cells this factory has created.
    pub fn created(&self) -> u64 {
        self.next_id
    }

    fn next_id(&mut self) -> crate::CellId {
        let id = crate::CellId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl CellFactory for DefaultCellFactory {
    type Container = ();

    fn create_header_cell(&mut self, _container: &()) -> DecorCell {
        DecorCell::new(self.next_id())
    }

    fn create_item_cell(&mut self, _container: &()) -> ItemCell {
        ItemCell::new(self.next_id())
    }

    fn create_footer_cell(&mut self, _container: &()) -> DecorCell {
        DecorCell::new(self.next_id())
    }
}
