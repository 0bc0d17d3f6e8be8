use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;

use rand::Rng;
use recycler::{AdapterOptions, CellFactory, DefaultCellFactory, Error, ListAdapter, sample};

use crate::catalog::CHEESES;
use crate::{CellPool, DEFAULT_CAPACITY_PER_KIND, ListHost};

/// Configuration for [`ListScreen`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScreenOptions {
    /// Show the placeholder instead of the list.
    pub empty: bool,
    /// How many labels to sample from the source.
    pub sample_size: usize,
    /// Text shown when the list is hidden.
    pub placeholder: String,
    pub viewport_rows: usize,
    /// Scrapped cells kept per row kind.
    pub pool_capacity: usize,
    pub adapter: AdapterOptions,
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self {
            empty: false,
            sample_size: 30,
            placeholder: String::from("No items to show"),
            viewport_rows: 10,
            pool_capacity: DEFAULT_CAPACITY_PER_KIND,
            adapter: AdapterOptions::default(),
        }
    }
}

impl ScreenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_empty(mut self, empty: bool) -> Self {
        self.empty = empty;
        self
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_viewport_rows(mut self, viewport_rows: usize) -> Self {
        self.viewport_rows = viewport_rows;
        self
    }

    pub fn with_pool_capacity(mut self, pool_capacity: usize) -> Self {
        self.pool_capacity = pool_capacity;
        self
    }

    pub fn with_adapter_options(mut self, adapter: AdapterOptions) -> Self {
        self.adapter = adapter;
        self
    }
}

/// What a [`ListScreen`] shows.
#[derive(Debug)]
pub enum ScreenContent<F: CellFactory> {
    /// The list surface is hidden; only a message is shown.
    Placeholder { message: String },
    List(ListHost<F>),
}

/// A screen showing a randomly sampled list, or a placeholder when configured as empty.
///
/// The empty case is decided here and never reaches the adapter: an empty screen builds no
/// adapter at all, while a list screen always has header and footer rows.
#[derive(Debug)]
pub struct ListScreen<F: CellFactory> {
    options: ScreenOptions,
    content: ScreenContent<F>,
}

impl<F: CellFactory> ListScreen<F> {
    /// Builds the screen, sampling `options.sample_size` labels from `source` unless
    /// `options.empty` is set.
    pub fn new<S, R>(
        options: ScreenOptions,
        source: &[S],
        factory: F,
        container: F::Container,
        rng: &mut R,
    ) -> Result<Self, Error>
    where
        S: AsRef<str> + Clone,
        R: Rng + ?Sized,
    {
        if options.empty {
            return Ok(Self::new_empty(options));
        }

        let labels: Vec<String> = sample(source, options.sample_size, rng)?
            .iter()
            .map(|s| s.as_ref().to_owned())
            .collect();
        hdebug!(items = labels.len(), "ListScreen::new");

        let adapter = ListAdapter::with_options(labels, options.adapter.clone());
        let mut host = ListHost::new(adapter, factory, container)
            .with_pool(CellPool::new(options.pool_capacity));
        host.set_viewport_rows(options.viewport_rows);
        Ok(Self {
            options,
            content: ScreenContent::List(host),
        })
    }

    /// Builds a screen that shows only its placeholder.
    pub fn new_empty(mut options: ScreenOptions) -> Self {
        options.empty = true;
        hdebug!("ListScreen::new_empty");
        let message = options.placeholder.clone();
        Self {
            options,
            content: ScreenContent::Placeholder { message },
        }
    }

    pub fn options(&self) -> &ScreenOptions {
        &self.options
    }

    pub fn content(&self) -> &ScreenContent<F> {
        &self.content
    }

    pub fn is_list_visible(&self) -> bool {
        matches!(self.content, ScreenContent::List(_))
    }

    pub fn placeholder(&self) -> Option<&str> {
        match &self.content {
            ScreenContent::Placeholder { message } => Some(message),
            ScreenContent::List(_) => None,
        }
    }

    pub fn host(&self) -> Option<&ListHost<F>> {
        match &self.content {
            ScreenContent::List(host) => Some(host),
            ScreenContent::Placeholder { .. } => None,
        }
    }

    pub fn host_mut(&mut self) -> Option<&mut ListHost<F>> {
        match &mut self.content {
            ScreenContent::List(host) => Some(host),
            ScreenContent::Placeholder { .. } => None,
        }
    }
}

impl ListScreen<DefaultCellFactory> {
    /// A screen over the bundled cheese catalog with a [`DefaultCellFactory`].
    pub fn cheeses<R: Rng + ?Sized>(options: ScreenOptions, rng: &mut R) -> Result<Self, Error> {
        Self::new(options, CHEESES, DefaultCellFactory::new(), (), rng)
    }
}
