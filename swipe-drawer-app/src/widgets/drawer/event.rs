use iced::{Point, Size};
use swipe_drawer::AnimationId;

/// Intent events handled by the drawer widget.
#[derive(Debug, Clone)]
pub(crate) enum DrawerIntent {
    /// The "Menu" trigger button was pressed.
    TriggerTapped,
    /// A menu entry was chosen in the panel.
    ItemSelected(usize),
    PointerMoved(Point),
    PointerPressed,
    PointerReleased,
    PointerLeft,
    /// Animation frame tick.
    Frame,
    /// The running settle animation reached its targets.
    SettleCompleted(AnimationId),
    Resized(Size),
}
