use iced::widget::{button, column, container, text};
use iced::{Color, Element, Length, Theme};

use crate::widgets::drawer::{DrawerIntent, MenuPanel};

const PANEL_PADDING: u16 = 12;
const ITEM_SPACING: f32 = 4.0;
const PANEL_BACKGROUND: Color = Color::from_rgb(0.07, 0.08, 0.10);

/// Props for the menu panel content.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MenuPanelProps<'a> {
    pub(crate) panel: &'a MenuPanel,
    pub(crate) width: f32,
    pub(crate) selected_title: Option<&'a str>,
}

/// Render the list of menu entries.
pub(crate) fn view(
    props: MenuPanelProps<'_>,
) -> Element<'_, DrawerIntent, Theme, iced::Renderer> {
    let entries = props.panel.items().iter().enumerate().map(|(index, item)| {
        let is_selected = props.selected_title == Some(item.title.as_str());
        let entry = button(text(item.title.as_str()))
            .width(Length::Fill)
            .on_press(DrawerIntent::ItemSelected(index));
        let entry = if is_selected {
            entry.style(button::primary)
        } else {
            entry.style(button::text)
        };
        Element::from(entry)
    });

    container(column(entries).spacing(ITEM_SPACING))
        .padding(PANEL_PADDING)
        .width(Length::Fixed(props.width))
        .height(Length::Fill)
        .style(|_| container::Style {
            background: Some(PANEL_BACKGROUND.into()),
            ..Default::default()
        })
        .into()
}
