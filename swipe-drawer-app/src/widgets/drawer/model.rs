use swipe_drawer::{MenuState, PanelFactory, SurfaceOrigins};

/// Entries shown in every freshly built menu panel.
pub(crate) const MENU_ITEMS: [&str; 5] =
    ["Home", "Inbox", "Starred", "Archive", "Settings"];

/// Which surface a press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Surface {
    Content,
    Panel,
}

/// One selectable row of the menu panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MenuItem {
    pub(crate) title: String,
}

/// Instantiated menu panel content. Dropping it removes the panel.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct MenuPanel {
    instance: u64,
    items: Vec<MenuItem>,
}

impl MenuPanel {
    pub(crate) fn instance(&self) -> u64 {
        self.instance
    }

    pub(crate) fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub(crate) fn item_title(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(|item| item.title.as_str())
    }
}

/// Builds numbered [`MenuPanel`] instances on demand.
#[derive(Debug, Default)]
pub(crate) struct MenuPanelFactory {
    built: u64,
}

impl PanelFactory for MenuPanelFactory {
    type Handle = MenuPanel;

    fn create_panel_content(&mut self) -> Option<MenuPanel> {
        self.built += 1;
        Some(MenuPanel {
            instance: self.built,
            items: MENU_ITEMS
                .iter()
                .map(|title| MenuItem {
                    title: (*title).to_string(),
                })
                .collect(),
        })
    }
}

/// Read-only snapshot handed to the drawer views.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DrawerViewModel<'a> {
    pub(crate) menu_state: MenuState,
    pub(crate) origins: SurfaceOrigins,
    pub(crate) expanded_offset: f32,
    pub(crate) panel: Option<&'a MenuPanel>,
    pub(crate) selected_title: Option<&'a str>,
}
