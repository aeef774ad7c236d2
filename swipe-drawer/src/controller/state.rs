use crate::animation::{AnimationId, SettleDirection};

/// Logical drawer state. Gates how drag samples are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Collapsed,
    Expanded,
}

impl MenuState {
    pub fn is_expanded(self) -> bool {
        self == Self::Expanded
    }
}

/// Live panel content plus the open cycle it was created in.
#[derive(Debug)]
pub(super) struct PanelSlot<H> {
    pub(super) generation: u64,
    pub(super) handle: H,
}

/// Settle animation whose completion has not been delivered yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct InFlight {
    pub(super) id: AnimationId,
    pub(super) direction: SettleDirection,
    /// Panel generation to tear down when a collapse completes.
    pub(super) generation: Option<u64>,
}
