use iced::{Element, Theme};

use super::{App, AppEvent};
use crate::widgets::drawer;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    drawer::view::view(drawer::view::DrawerViewProps {
        vm: app.widgets.drawer.vm(),
        window_size: app.window_size,
    })
    .map(AppEvent::Drawer)
}
