use iced::Point;
use swipe_drawer::{
    DrawerConfig, GestureTracker, PanelController, SurfaceOrigins, Tween,
    Vector,
};

use super::model::{MenuPanel, MenuPanelFactory, Surface};

/// Internal runtime state for the drawer widget.
#[derive(Debug)]
pub(super) struct DrawerState {
    pub(super) controller: PanelController<MenuPanel>,
    pub(super) factory: MenuPanelFactory,
    pub(super) content_tracker: GestureTracker,
    pub(super) panel_tracker: GestureTracker,
    /// Surface origins as currently rendered.
    pub(super) origins: SurfaceOrigins,
    pub(super) tween: Option<Tween>,
    pub(super) cursor: Point,
    pub(super) pressed_on: Option<Surface>,
    pub(super) selected_title: Option<String>,
}

impl DrawerState {
    pub(super) fn new(viewport_width: f32, config: DrawerConfig) -> Self {
        let controller = PanelController::with_config(viewport_width, config);
        let origins = controller.geometry().origins();

        Self {
            controller,
            factory: MenuPanelFactory::default(),
            content_tracker: GestureTracker::new(config.drag_threshold),
            panel_tracker: GestureTracker::new(config.drag_threshold),
            origins,
            tween: None,
            cursor: Point::ORIGIN,
            pressed_on: None,
            selected_title: None,
        }
    }

    pub(super) fn cursor_vector(&self) -> Vector {
        Vector::new(self.cursor.x, self.cursor.y)
    }

    /// Presses left of the content edge land on the revealed panel.
    pub(super) fn hit_test(&self, position: Point) -> Surface {
        if self.controller.has_panel()
            && position.x < self.origins.content_origin_x
        {
            Surface::Panel
        } else {
            Surface::Content
        }
    }

    pub(super) fn tracker_mut(
        &mut self,
        surface: Surface,
    ) -> &mut GestureTracker {
        match surface {
            Surface::Content => &mut self.content_tracker,
            Surface::Panel => &mut self.panel_tracker,
        }
    }
}
