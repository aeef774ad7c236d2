use iced::widget::{button, column, container, row, text};
use iced::{Color, Element, Length, Theme, alignment};
use swipe_drawer::MenuState;

use crate::widgets::drawer::DrawerIntent;

const HEADER_HEIGHT: f32 = 44.0;
const HEADER_PADDING: u16 = 8;
const BODY_PADDING: u16 = 16;
const CONTENT_BACKGROUND: Color = Color::from_rgb(0.12, 0.13, 0.15);
const HEADER_BACKGROUND: Color = Color::from_rgb(0.17, 0.18, 0.21);

/// Props for the main content surface.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ContentSurfaceProps<'a> {
    pub(crate) width: f32,
    pub(crate) menu_state: MenuState,
    pub(crate) selected_title: Option<&'a str>,
}

/// Render the content surface with its navigation header and trigger.
pub(crate) fn view(
    props: ContentSurfaceProps<'_>,
) -> Element<'_, DrawerIntent, Theme, iced::Renderer> {
    let title = props.selected_title.unwrap_or("Home");

    let trigger = button(text("Menu")).on_press(DrawerIntent::TriggerTapped);

    let header = container(
        row![trigger, text(title).size(18)]
            .spacing(12)
            .align_y(alignment::Vertical::Center),
    )
    .padding(HEADER_PADDING)
    .width(Length::Fill)
    .height(Length::Fixed(HEADER_HEIGHT))
    .style(|_| container::Style {
        background: Some(HEADER_BACKGROUND.into()),
        ..Default::default()
    });

    let hint = match props.menu_state {
        MenuState::Collapsed => "Drag right or press Menu to open.",
        MenuState::Expanded => "Drag the menu left or press Menu to close.",
    };

    let body = container(column![text(title).size(28), text(hint)].spacing(8))
        .padding(BODY_PADDING)
        .width(Length::Fill)
        .height(Length::Fill);

    container(column![header, body])
        .width(Length::Fixed(props.width))
        .height(Length::Fill)
        .style(|_| container::Style {
            background: Some(CONTENT_BACKGROUND.into()),
            ..Default::default()
        })
        .into()
}
