//! Interaction core for a swipe-dismissable side menu drawer.
//!
//! The crate is free of any UI toolkit. A host wires it up by:
//! 1. Feeding pointer input for the content and panel surfaces through a
//!    [`GestureTracker`] each, producing [`GestureSample`]s.
//! 2. Passing those samples, trigger taps and animation completions to
//!    [`PanelController::reduce`] as [`DrawerEvent`]s.
//! 3. Carrying out the returned [`DrawerEffect`]s: moving surfaces,
//!    running settle animations (a [`Tween`] does the interpolation) and
//!    dropping released panel content.
//!
//! Every input must arrive on the same thread, one at a time.

mod animation;
mod config;
mod controller;
mod error;
mod geometry;
mod gesture;

pub use animation::{
    AnimationId, AnimationRequest, Easing, SETTLE_DURATION, SettleDirection,
    Tween,
};
pub use config::{DrawerConfig, EXPANDED_OFFSET};
pub use controller::{
    DrawerEffect, DrawerEvent, MenuState, PanelController, PanelFactory,
};
pub use error::{DrawerError, Result};
pub use geometry::{PanelGeometry, SurfaceOrigins};
pub use gesture::{
    DRAG_THRESHOLD, DragDirection, GestureIntent, GesturePhase, GestureSample,
    GestureTracker, Vector, classify,
};
