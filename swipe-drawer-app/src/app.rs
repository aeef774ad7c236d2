#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Size, Subscription, Task, Theme};

use crate::widgets::Widgets;
use crate::widgets::drawer::{DrawerIntent, DrawerWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 320.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;
pub(crate) const INITIAL_WINDOW_SIZE: Size = Size {
    width: 420.0,
    height: 720.0,
};

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    Drawer(DrawerIntent),
    Window(iced::window::Event),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) window_size: Size,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let window_size = INITIAL_WINDOW_SIZE;
        let widgets = Widgets {
            drawer: DrawerWidget::load(window_size.width),
        };

        (
            App {
                window_size,
                widgets,
            },
            Task::none(),
        )
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        match self.widgets.drawer.selected_title() {
            Some(title) => format!("Swipe Drawer - {title}"),
            None => String::from("Swipe Drawer"),
        }
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
