use std::time::Instant;

use iced::{Size, Task, window};

use super::{App, AppEvent};
use crate::widgets::drawer::{DrawerCtx, DrawerIntent};

/// Thin dispatch: route each event to its owning widget or handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::Drawer(intent) => route_drawer(app, intent),
        AppEvent::Window(window::Event::Opened { size, .. })
        | AppEvent::Window(window::Event::Resized(size)) => {
            handle_resize(app, size)
        },
        AppEvent::Window(_) => Task::none(),
    }
}

fn route_drawer(app: &mut App, intent: DrawerIntent) -> Task<AppEvent> {
    let ctx = DrawerCtx { now: Instant::now() };
    app.widgets
        .drawer
        .reduce(intent, &ctx)
        .map(AppEvent::Drawer)
}

fn handle_resize(app: &mut App, size: Size) -> Task<AppEvent> {
    if app.window_size == size {
        return Task::none();
    }
    app.window_size = size;
    route_drawer(app, DrawerIntent::Resized(size))
}
