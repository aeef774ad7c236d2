mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::DrawerIntent;
use iced::Task;
pub(crate) use model::{DrawerViewModel, MenuPanel};
pub(crate) use reducer::DrawerCtx;
use state::DrawerState;
use swipe_drawer::{AnimationId, DrawerConfig};

use crate::services;

/// Drawer widget owning the interaction controller and its render state.
pub(crate) struct DrawerWidget {
    state: DrawerState,
}

impl DrawerWidget {
    /// Construct a collapsed drawer for the given viewport width.
    pub(crate) fn new(viewport_width: f32, config: DrawerConfig) -> Self {
        Self {
            state: DrawerState::new(viewport_width, config),
        }
    }

    /// Construct a drawer using the on-disk configuration.
    pub(crate) fn load(viewport_width: f32) -> Self {
        Self::new(viewport_width, services::load_initial_drawer_config())
    }

    /// Reduce an intent event into state updates and follow-up intents.
    pub(crate) fn reduce(
        &mut self,
        intent: DrawerIntent,
        ctx: &DrawerCtx,
    ) -> Task<DrawerIntent> {
        reducer::reduce(&mut self.state, intent, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> DrawerViewModel<'_> {
        DrawerViewModel {
            menu_state: self.state.controller.state(),
            origins: self.state.origins,
            expanded_offset: self.state.controller.geometry().expanded_offset(),
            panel: self.state.controller.panel(),
            selected_title: self.selected_title(),
        }
    }

    /// Return whether a settle animation is being rendered.
    pub(crate) fn is_animating(&self) -> bool {
        self.state.tween.is_some()
    }

    /// Return the settle animation awaiting its completion event.
    #[cfg(test)]
    pub(crate) fn pending_settle(&self) -> Option<AnimationId> {
        self.state.controller.in_flight().map(|(id, _)| id)
    }

    /// Return the title of the last chosen menu entry.
    pub(crate) fn selected_title(&self) -> Option<&str> {
        self.state.selected_title.as_deref()
    }
}
