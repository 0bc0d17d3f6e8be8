use alloc::sync::Arc;
use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

use crate::{DrawableId, FitMode};

// Slot state packs the bind generation (high 32 bits) and the shown image (low 32 bits) into a
// single word, so a completion can check the generation and store its image in one CAS.
// Image code 0 means blank; otherwise it is `DrawableId.0 + 1`.
const IMAGE_MASK: u64 = 0xFFFF_FFFF;

fn pack(generation: u32, image: Option<DrawableId>) -> u64 {
    let code = match image {
        Some(id) => {
            debug_assert!(id.0 != u32::MAX, "DrawableId(u32::MAX) is reserved");
            id.0.wrapping_add(1)
        }
        None => 0,
    };
    ((generation as u64) << 32) | code as u64
}

fn unpack(state: u64) -> (u32, Option<DrawableId>) {
    let generation = (state >> 32) as u32;
    let code = (state & IMAGE_MASK) as u32;
    let image = if code == 0 {
        None
    } else {
        Some(DrawableId(code - 1))
    };
    (generation, image)
}

/// The image slot of an item cell.
///
/// Every bind starts a new generation and blanks the slot. Loads issued for an older
/// generation are dropped when they complete, so a recycled cell never shows an image that
/// belongs to a row it no longer displays.
#[derive(Default)]
pub struct ImageSlot {
    state: Arc<AtomicU64>,
}

impl ImageSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// The image currently shown, or `None` when blank.
    pub fn image(&self) -> Option<DrawableId> {
        unpack(self.state.load(Ordering::Acquire)).1
    }

    pub fn generation(&self) -> u32 {
        unpack(self.state.load(Ordering::Acquire)).0
    }

    /// Starts a new bind generation, blanks the slot and returns a target for the next load.
    pub(crate) fn begin_bind(&self) -> ImageTarget {
        let mut next = 0;
        let _ = self
            .state
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |state| {
                next = unpack(state).0.wrapping_add(1);
                Some(pack(next, None))
            });
        ImageTarget {
            state: Arc::clone(&self.state),
            generation: next,
        }
    }
}

impl fmt::Debug for ImageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (generation, image) = unpack(self.state.load(Ordering::Acquire));
        f.debug_struct("ImageSlot")
            .field("generation", &generation)
            .field("image", &image)
            .finish()
    }
}

/// Where a pending image load should land: a cell's slot, pinned to the bind generation that
/// issued the load.
///
/// `ImageTarget` is `Send`, so a provider may complete it from another thread.
pub struct ImageTarget {
    state: Arc<AtomicU64>,
    generation: u32,
}

impl ImageTarget {
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Whether the slot still shows the bind that issued this load.
    pub fn is_current(&self) -> bool {
        unpack(self.state.load(Ordering::Acquire)).0 == self.generation
    }

    /// Shows `image` in the slot. Returns `false` (and changes nothing) if the cell has been
    /// rebound since the load was issued.
    pub fn deliver(self, image: DrawableId) -> bool {
        self.settle(Some(image))
    }

    /// Reports a failed load: the slot stays blank. Returns `false` if the load was stale.
    pub fn fail(self) -> bool {
        self.settle(None)
    }

    fn settle(self, image: Option<DrawableId>) -> bool {
        let generation = self.generation;
        let result = self
            .state
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |state| {
                if unpack(state).0 == generation {
                    Some(pack(generation, image))
                } else {
                    None
                }
            });
        if result.is_err() {
            rtrace!(generation, "ImageTarget: dropping stale image load");
        }
        result.is_ok()
    }
}

impl fmt::Debug for ImageTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageTarget")
            .field("generation", &self.generation)
            .field("current", &self.is_current())
            .finish()
    }
}

/// A request handed to an [`crate::ImageProvider`]: load `source` into `target`.
#[derive(Debug)]
pub struct ImageRequest {
    pub target: ImageTarget,
    pub source: DrawableId,
    pub fit: FitMode,
}

impl ImageRequest {
    /// Completes the request with its own source image.
    pub fn deliver(self) -> bool {
        let source = self.source;
        self.target.deliver(source)
    }

    pub fn fail(self) -> bool {
        self.target.fail()
    }
}
