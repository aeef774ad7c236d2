use crate::animation::{AnimationId, AnimationRequest};
use crate::geometry::SurfaceOrigins;
use crate::gesture::GestureSample;

/// Inputs accepted by the panel controller, delivered one at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawerEvent {
    /// The trigger control was activated.
    TriggerTapped,
    /// Drag sample from the gesture source attached to the content surface.
    ContentDrag(GestureSample),
    /// Drag sample from the gesture source attached to the panel surface.
    PanelDrag(GestureSample),
    /// The animation driver finished the request with this id.
    SettleCompleted(AnimationId),
    /// The host viewport changed width.
    Resized { viewport_width: f32 },
    /// Programmatic open, independent of the current state.
    Open,
    /// Programmatic close, independent of the current state.
    Close,
}

/// Work the host must carry out on behalf of the controller.
#[derive(Debug, PartialEq)]
pub enum DrawerEffect<H> {
    /// Move both surfaces to these origins immediately (drag following).
    Follow(SurfaceOrigins),
    /// Start a settle animation; report `SettleCompleted` when done.
    Animate(AnimationRequest),
    /// The panel content is released. Remove and drop it.
    Teardown(H),
}

impl<H> DrawerEffect<H> {
    pub fn as_animation(&self) -> Option<&AnimationRequest> {
        match self {
            Self::Animate(request) => Some(request),
            _ => None,
        }
    }
}
