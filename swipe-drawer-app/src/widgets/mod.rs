pub(crate) mod drawer;

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) drawer: drawer::DrawerWidget,
}
