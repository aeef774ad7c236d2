pub(crate) mod content_surface;
pub(crate) mod menu_panel;

use iced::widget::{Space, Stack, row};
use iced::{Element, Length, Size, Theme};

use super::event::DrawerIntent;
use super::model::DrawerViewModel;

/// Props for the drawer view aggregator.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DrawerViewProps<'a> {
    pub(crate) vm: DrawerViewModel<'a>,
    pub(crate) window_size: Size,
}

/// Render the panel layer underneath the shifted content surface.
pub(crate) fn view(
    props: DrawerViewProps<'_>,
) -> Element<'_, DrawerIntent, Theme, iced::Renderer> {
    let viewport_width = props.window_size.width.max(0.0);
    let origins = props.vm.origins;
    let mut layers: Vec<Element<'_, DrawerIntent, Theme, iced::Renderer>> =
        Vec::new();

    if let Some(panel) = props.vm.panel {
        // The panel is pinned at `-expanded_offset`; render its visible
        // part starting from the viewport edge.
        let lead = (origins.panel_origin_x + props.vm.expanded_offset).max(0.0);
        let width = (viewport_width - props.vm.expanded_offset).max(0.0);
        let panel_view = menu_panel::view(menu_panel::MenuPanelProps {
            panel,
            width,
            selected_title: props.vm.selected_title,
        });
        layers.push(
            row![Space::new().width(Length::Fixed(lead)), panel_view]
                .width(Length::Fill)
                .height(Length::Fill)
                .clip(true)
                .into(),
        );
    }

    let lead = origins.content_origin_x.max(0.0);
    let content_view =
        content_surface::view(content_surface::ContentSurfaceProps {
            width: viewport_width,
            menu_state: props.vm.menu_state,
            selected_title: props.vm.selected_title,
        });
    layers.push(
        row![Space::new().width(Length::Fixed(lead)), content_view]
            .width(Length::Fill)
            .height(Length::Fill)
            .clip(true)
            .into(),
    );

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
