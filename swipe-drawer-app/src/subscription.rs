use iced::{Subscription, event, mouse, window};

use crate::app::{App, AppEvent};
use crate::widgets::drawer::DrawerIntent;

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));
    let pointer_subs = event::listen_with(pointer_intent).map(AppEvent::Drawer);

    let mut subs = vec![win_subs, pointer_subs];

    // Frame ticks drive the settle animation only while one is running.
    if app.widgets.drawer.is_animating() {
        subs.push(
            window::frames().map(|_| AppEvent::Drawer(DrawerIntent::Frame)),
        );
    }

    Subscription::batch(subs)
}

/// Translate raw mouse input into drawer pointer intents.
///
/// Presses already captured by a widget (the trigger, menu entries) never
/// start a drag.
fn pointer_intent(
    raw: iced::Event,
    status: event::Status,
    _window: window::Id,
) -> Option<DrawerIntent> {
    match raw {
        iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(DrawerIntent::PointerMoved(position))
        },
        iced::Event::Mouse(mouse::Event::ButtonPressed(
            mouse::Button::Left,
        )) if status == event::Status::Ignored => {
            Some(DrawerIntent::PointerPressed)
        },
        iced::Event::Mouse(mouse::Event::ButtonReleased(
            mouse::Button::Left,
        )) => Some(DrawerIntent::PointerReleased),
        iced::Event::Mouse(mouse::Event::CursorLeft) => {
            Some(DrawerIntent::PointerLeft)
        },
        _ => None,
    }
}
