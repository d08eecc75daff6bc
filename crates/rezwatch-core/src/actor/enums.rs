use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, FromRepr, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    FromRepr,
    IntoStaticStr,
    Display,
)]
#[repr(u8)]
pub enum ObjectKind {
    #[default]
    None = 0,
    Player = 1,
    BattleNpc = 2,
    EventNpc = 3,
    Treasure = 4,
    Aetheryte = 5,
    GatheringPoint = 6,
    EventObj = 7,
    MountType = 8,
    Companion = 9,
    Retainer = 10,
    Area = 11,
    Housing = 12,
    Cutscene = 13,
    CardStand = 14,
}

impl ObjectKind {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }
}

/// Class or job of a player actor, by client id
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    FromRepr,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[strum(serialize_all = "UPPERCASE")]
#[repr(u8)]
pub enum Job {
    #[default]
    Adv = 0,
    Gla = 1,
    Pgl = 2,
    Mrd = 3,
    Lnc = 4,
    Arc = 5,
    Cnj = 6,
    Thm = 7,
    Crp = 8,
    Bsm = 9,
    Arm = 10,
    Gsm = 11,
    Ltw = 12,
    Wvr = 13,
    Alc = 14,
    Cul = 15,
    Min = 16,
    Btn = 17,
    Fsh = 18,
    Pld = 19,
    Mnk = 20,
    War = 21,
    Drg = 22,
    Brd = 23,
    Whm = 24,
    Blm = 25,
    Acn = 26,
    Smn = 27,
    Sch = 28,
    Rog = 29,
    Nin = 30,
    Mch = 31,
    Drk = 32,
    Ast = 33,
    Sam = 34,
    Rdm = 35,
    Blu = 36,
    Gnb = 37,
    Dnc = 38,
}

impl Job {
    /// Unknown ids decode as [`Job::Adv`]
    pub fn from_u8(value: u8) -> Self {
        Self::from_repr(value).unwrap_or_default()
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Whether the job has a resurrection spell of its own
    pub fn can_raise(&self) -> bool {
        matches!(
            self,
            Self::Cnj
                | Self::Whm
                | Self::Acn
                | Self::Smn
                | Self::Sch
                | Self::Ast
                | Self::Rdm
                | Self::Blu
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_kind_from_u8() {
        assert_eq!(ObjectKind::from_u8(1), Some(ObjectKind::Player));
        assert_eq!(ObjectKind::from_u8(2), Some(ObjectKind::BattleNpc));
        assert_eq!(ObjectKind::from_u8(200), None);
    }

    #[test]
    fn test_job_from_u8() {
        assert_eq!(Job::from_u8(24), Job::Whm);
        assert_eq!(Job::from_u8(33), Job::Ast);
        assert_eq!(Job::from_u8(0), Job::Adv);
        assert_eq!(Job::from_u8(250), Job::Adv);
    }

    #[test]
    fn test_job_short_name() {
        assert_eq!(Job::Ast.short_name(), "AST");
        assert_eq!(Job::Rdm.to_string(), "RDM");
        assert_eq!("SCH".parse::<Job>().unwrap(), Job::Sch);
    }

    #[test]
    fn test_job_can_raise() {
        assert!(Job::Whm.can_raise());
        assert!(Job::Rdm.can_raise());
        assert!(!Job::War.can_raise());
        assert!(!Job::Adv.can_raise());
    }
}
