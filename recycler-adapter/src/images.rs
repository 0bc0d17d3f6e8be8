use alloc::collections::VecDeque;

use recycler::{ImageProvider, ImageRequest};

/// An image provider that holds requests until told to complete them.
///
/// Useful to drive the asynchronous side of binding by hand: complete loads in order, newest
/// first, or not at all.
#[derive(Debug, Default)]
pub struct DeferredImages {
    pending: VecDeque<ImageRequest>,
}

impl DeferredImages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Completes the oldest request. Returns whether its image was applied, or `None` if
    /// nothing was pending.
    pub fn complete_oldest(&mut self) -> Option<bool> {
        self.pending.pop_front().map(ImageRequest::deliver)
    }

    /// Completes the newest request.
    pub fn complete_newest(&mut self) -> Option<bool> {
        self.pending.pop_back().map(ImageRequest::deliver)
    }

    /// Completes every pending request in issue order. Returns how many images were applied.
    pub fn complete_all(&mut self) -> usize {
        self.pending
            .drain(..)
            .map(ImageRequest::deliver)
            .filter(|applied| *applied)
            .count()
    }

    /// Fails every pending request, leaving the slots blank.
    pub fn fail_all(&mut self) {
        for request in self.pending.drain(..) {
            request.fail();
        }
    }
}

impl ImageProvider for DeferredImages {
    fn load_into(&mut self, request: ImageRequest) {
        self.pending.push_back(request);
    }
}

/// An image provider that completes every request as soon as it is issued.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateImages;

impl ImageProvider for ImmediateImages {
    fn load_into(&mut self, request: ImageRequest) {
        request.deliver();
    }
}
