//! Drawer interaction state machine.
//!
//! [`PanelController`] consumes trigger taps, drag samples from the content
//! and panel surfaces, settle completions and viewport resizes, and answers
//! each one with a list of [`DrawerEffect`]s for the host to carry out.
//!
//! Opening is optimistic: the state flips to [`MenuState::Expanded`] as soon
//! as the expand animation is requested. Closing is deferred: the state stays
//! expanded and the panel content stays alive until the collapse animation
//! reports completion.

mod event;
mod state;

pub use event::{DrawerEffect, DrawerEvent};
pub use state::MenuState;
use state::{InFlight, PanelSlot};

use crate::animation::{AnimationId, AnimationRequest, SettleDirection};
use crate::config::DrawerConfig;
use crate::geometry::PanelGeometry;
use crate::gesture::{DragDirection, GesturePhase, GestureSample, classify};

/// Source of panel content instances.
pub trait PanelFactory {
    type Handle;

    /// Build fresh panel content, or `None` if it cannot be produced.
    fn create_panel_content(&mut self) -> Option<Self::Handle>;
}

impl<H, F> PanelFactory for F
where
    F: FnMut() -> Option<H>,
{
    type Handle = H;

    fn create_panel_content(&mut self) -> Option<H> {
        self()
    }
}

/// Owner of the drawer state and of the panel content handle.
#[derive(Debug)]
pub struct PanelController<H> {
    state: MenuState,
    panel: Option<PanelSlot<H>>,
    generation: u64,
    geometry: PanelGeometry,
    config: DrawerConfig,
    next_animation: AnimationId,
    in_flight: Option<InFlight>,
}

impl<H> PanelController<H> {
    /// Collapsed controller with default tunables.
    pub fn new(viewport_width: f32) -> Self {
        Self::with_config(viewport_width, DrawerConfig::default())
    }

    pub fn with_config(viewport_width: f32, config: DrawerConfig) -> Self {
        Self {
            state: MenuState::Collapsed,
            panel: None,
            generation: 0,
            geometry: PanelGeometry::new(
                viewport_width,
                config.expanded_offset,
            ),
            config,
            next_animation: AnimationId::first(),
            in_flight: None,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn geometry(&self) -> &PanelGeometry {
        &self.geometry
    }

    pub fn panel(&self) -> Option<&H> {
        self.panel.as_ref().map(|slot| &slot.handle)
    }

    pub fn has_panel(&self) -> bool {
        self.panel.is_some()
    }

    /// Id and direction of the settle animation awaiting completion.
    pub fn in_flight(&self) -> Option<(AnimationId, SettleDirection)> {
        self.in_flight
            .map(|in_flight| (in_flight.id, in_flight.direction))
    }

    pub fn is_settling(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Apply one event and return the effects it produced, in order.
    pub fn reduce<F>(
        &mut self,
        event: DrawerEvent,
        factory: &mut F,
    ) -> Vec<DrawerEffect<H>>
    where
        F: PanelFactory<Handle = H> + ?Sized,
    {
        let mut effects = Vec::new();

        match event {
            DrawerEvent::TriggerTapped => {
                let should_expand = !self.state.is_expanded();
                if should_expand {
                    self.ensure_panel(factory);
                }
                self.settle(should_expand, &mut effects);
            },
            DrawerEvent::Open => {
                self.ensure_panel(factory);
                self.settle(true, &mut effects);
            },
            DrawerEvent::Close => self.settle(false, &mut effects),
            DrawerEvent::ContentDrag(sample) => {
                self.content_drag(sample, factory, &mut effects)
            },
            DrawerEvent::PanelDrag(sample) => {
                self.panel_drag(sample, &mut effects)
            },
            DrawerEvent::SettleCompleted(id) => {
                self.settle_completed(id, &mut effects)
            },
            DrawerEvent::Resized { viewport_width } => {
                self.resized(viewport_width, &mut effects)
            },
        }

        effects
    }

    fn content_drag<F>(
        &mut self,
        sample: GestureSample,
        factory: &mut F,
        effects: &mut Vec<DrawerEffect<H>>,
    ) where
        F: PanelFactory<Handle = H> + ?Sized,
    {
        let intent = classify(&sample);

        match intent.phase {
            GesturePhase::Began => {
                if self.state == MenuState::Collapsed
                    && intent.direction == Some(DragDirection::LeftToRight)
                {
                    self.ensure_panel(factory);
                }
            },
            GesturePhase::Changed => {
                let admitted = match (self.state, intent.direction) {
                    (MenuState::Expanded, _) => true,
                    (MenuState::Collapsed, Some(DragDirection::LeftToRight)) => {
                        true
                    },
                    // No directional signal: follow only a drag that has
                    // already staged panel content.
                    (MenuState::Collapsed, None) => self.panel.is_some(),
                    (MenuState::Collapsed, Some(DragDirection::RightToLeft)) => {
                        false
                    },
                };
                if !admitted {
                    log::trace!(
                        "drawer: content drag ignored in {:?} state",
                        self.state
                    );
                    return;
                }

                self.shift_content(sample.translation_delta.x, effects);
            },
            // A cancelled drag settles like a release.
            GesturePhase::Ended | GesturePhase::Other => {
                if self.panel.is_none() {
                    log::trace!("drawer: content drag released without panel");
                    return;
                }
                let should_expand = self.geometry.content_past_midpoint();
                self.settle(should_expand, effects);
            },
        }
    }

    fn panel_drag(
        &mut self,
        sample: GestureSample,
        effects: &mut Vec<DrawerEffect<H>>,
    ) {
        if self.panel.is_none() {
            log::trace!("drawer: panel drag without panel content");
            return;
        }

        let intent = classify(&sample);

        match intent.phase {
            GesturePhase::Changed => {
                if intent.direction != Some(DragDirection::RightToLeft) {
                    return;
                }
                let dx = sample.translation_delta.x;
                if dx == 0.0 || !dx.is_finite() {
                    return;
                }
                self.geometry.shift_both(dx);
                self.follow(effects);
            },
            GesturePhase::Ended => {
                let should_expand = match intent.direction {
                    Some(DragDirection::LeftToRight) => true,
                    _ => self.geometry.panel_past_midpoint(),
                };
                self.settle(should_expand, effects);
            },
            GesturePhase::Other => {
                let should_expand = self.geometry.panel_past_midpoint();
                self.settle(should_expand, effects);
            },
            GesturePhase::Began => {},
        }
    }

    fn settle_completed(
        &mut self,
        id: AnimationId,
        effects: &mut Vec<DrawerEffect<H>>,
    ) {
        let Some(in_flight) = self.in_flight else {
            log::trace!(
                "drawer: completion {} with nothing in flight",
                id.get()
            );
            return;
        };
        if in_flight.id != id {
            log::debug!(
                "drawer: completion {} superseded by {}",
                id.get(),
                in_flight.id.get()
            );
            return;
        }
        self.in_flight = None;

        match in_flight.direction {
            SettleDirection::Expand => {
                self.state = MenuState::Expanded;
                log::debug!("drawer: expanded");
            },
            SettleDirection::Collapse => {
                self.state = MenuState::Collapsed;
                let released = self.panel.take_if(|slot| {
                    Some(slot.generation) == in_flight.generation
                });
                if let Some(slot) = released {
                    log::debug!(
                        "drawer: collapsed, releasing panel #{}",
                        slot.generation
                    );
                    effects.push(DrawerEffect::Teardown(slot.handle));
                } else {
                    log::debug!("drawer: collapsed");
                }
            },
        }
    }

    fn resized(
        &mut self,
        viewport_width: f32,
        effects: &mut Vec<DrawerEffect<H>>,
    ) {
        if !viewport_width.is_finite() {
            return;
        }
        self.geometry.resize(viewport_width);

        if let Some(in_flight) = self.in_flight {
            let should_expand = in_flight.direction == SettleDirection::Expand;
            self.settle(should_expand, effects);
            return;
        }

        let targets = if self.state.is_expanded() {
            self.geometry.open_targets()
        } else {
            self.geometry.closed_targets()
        };
        self.geometry.set_origins(targets);
        self.follow(effects);
    }

    fn shift_content(&mut self, dx: f32, effects: &mut Vec<DrawerEffect<H>>) {
        if dx == 0.0 || !dx.is_finite() {
            return;
        }
        self.geometry.shift_content(dx);
        self.follow(effects);
    }

    fn ensure_panel<F>(&mut self, factory: &mut F)
    where
        F: PanelFactory<Handle = H> + ?Sized,
    {
        if self.panel.is_some() {
            return;
        }

        match factory.create_panel_content() {
            Some(handle) => {
                self.generation += 1;
                log::debug!("drawer: created panel #{}", self.generation);
                self.panel = Some(PanelSlot {
                    generation: self.generation,
                    handle,
                });
            },
            None => log::debug!("drawer: panel factory produced nothing"),
        }
    }

    /// Request a settle animation toward open or closed.
    ///
    /// The expand path commits the state immediately; the collapse path
    /// leaves it to [`DrawerEvent::SettleCompleted`].
    fn settle(
        &mut self,
        should_expand: bool,
        effects: &mut Vec<DrawerEffect<H>>,
    ) {
        let (direction, targets) = if should_expand {
            self.state = MenuState::Expanded;
            (SettleDirection::Expand, self.geometry.open_targets())
        } else {
            (SettleDirection::Collapse, self.geometry.closed_targets())
        };

        let id = self.next_animation;
        self.next_animation = id.next();
        self.in_flight = Some(InFlight {
            id,
            direction,
            generation: self.panel.as_ref().map(|slot| slot.generation),
        });
        self.geometry.set_origins(targets);

        log::debug!(
            "drawer: settle {} {:?} to content x {}",
            id.get(),
            direction,
            targets.content_origin_x
        );

        effects.push(DrawerEffect::Animate(AnimationRequest {
            id,
            direction,
            targets,
            duration: self.config.settle_duration(),
            easing: self.config.easing,
        }));
    }

    /// Emit the current origins for direct drag following. A live drag
    /// overrides whatever settle was in flight.
    fn follow(&mut self, effects: &mut Vec<DrawerEffect<H>>) {
        if let Some(in_flight) = self.in_flight.take() {
            log::trace!(
                "drawer: drag supersedes settle {}",
                in_flight.id.get()
            );
        }
        effects.push(DrawerEffect::Follow(self.geometry.origins()));
    }
}
