use serde::{Deserialize, Serialize};
use strum::{Display, FromRepr, IntoStaticStr};

/// Abilities that resurrect a target, by action id
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    IntoStaticStr,
    Display,
)]
#[repr(u16)]
pub enum RaiseAction {
    /// ACN, SMN, SCH
    Resurrection = 173,
    /// CNJ, WHM
    Raise = 125,
    Ascend = 3603,
    #[strum(serialize = "Angel Whisper")]
    AngelWhisper = 18317,
    /// WHM limit break 3
    #[strum(serialize = "Pulse of Life")]
    PulseOfLife = 208,
    /// SCH limit break 3
    #[strum(serialize = "Angel Feathers")]
    AngelFeathers = 4247,
    /// AST limit break 3
    #[strum(serialize = "Astral Stasis")]
    AstralStasis = 4248,
    Verraise = 7523,
    /// Bozja
    #[strum(serialize = "Lost Sacrifice")]
    LostSacrifice = 22345,
    /// Bozja
    #[strum(serialize = "Lost Arise")]
    LostArise = 20730,
    /// Eureka
    #[strum(serialize = "Raise L")]
    RaiseL = 12996,
}

impl RaiseAction {
    pub fn from_action_id(id: u16) -> Option<Self> {
        Self::from_repr(id)
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// Status ids marking a corpse whose revival is already under way
pub const PENDING_RAISE_STATUSES: [u16; 2] = [148, 1140];

pub fn is_pending_raise_status(id: u16) -> bool {
    PENDING_RAISE_STATUSES.contains(&id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raise_action_lookup() {
        assert_eq!(RaiseAction::from_action_id(3603), Some(RaiseAction::Ascend));
        assert_eq!(RaiseAction::from_action_id(7523), Some(RaiseAction::Verraise));
        assert_eq!(RaiseAction::from_action_id(12996), Some(RaiseAction::RaiseL));
        assert_eq!(RaiseAction::from_action_id(0), None);
        // Cure
        assert_eq!(RaiseAction::from_action_id(120), None);
    }

    #[test]
    fn test_raise_action_name() {
        assert_eq!(RaiseAction::PulseOfLife.name(), "Pulse of Life");
        assert_eq!(RaiseAction::Raise.name(), "Raise");
    }

    #[test]
    fn test_pending_raise_status() {
        assert!(is_pending_raise_status(148));
        assert!(is_pending_raise_status(1140));
        assert!(!is_pending_raise_status(0));
        assert!(!is_pending_raise_status(149));
    }
}
