use std::collections::HashMap;

use super::{Class, PrimaryStat, Role, WowEnum};

macro_rules! specs {
    ($($variant:ident => ($id:expr, $name:expr, $class:ident, $role:ident, $stat:ident)),* $(,)?) => {
        /// 전문화 (직업 + 역할 + 주 능력치)
        ///
        /// 약어는 변형 이름 그대로 사용합니다 (예: `DkBlood`).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Spec {
            $($variant),*
        }

        impl Spec {
            /// Wowhead 전문화 ID
            pub fn id(&self) -> u16 {
                match self {
                    $(Spec::$variant => $id),*
                }
            }

            pub fn class(&self) -> Class {
                match self {
                    $(Spec::$variant => Class::$class),*
                }
            }

            pub fn role(&self) -> Role {
                match self {
                    $(Spec::$variant => Role::$role),*
                }
            }

            pub fn mainstat(&self) -> PrimaryStat {
                match self {
                    $(Spec::$variant => PrimaryStat::$stat),*
                }
            }
        }

        impl WowEnum for Spec {
            const ALL: &'static [Self] = &[$(Spec::$variant),*];

            fn abbr(&self) -> &'static str {
                match self {
                    $(Spec::$variant => stringify!($variant)),*
                }
            }

            fn ingame_name(&self) -> &'static str {
                match self {
                    $(Spec::$variant => $name),*
                }
            }
        }
    };
}

specs! {
    DkBlood => (250, "Blood", Dk, Tank, Str),
    DkFrost => (251, "Frost", Dk, Dps, Str),
    DkUnholy => (252, "Unholy", Dk, Dps, Str),

    DhHavoc => (577, "Havoc", Dh, Dps, Agi),
    DhVeng => (581, "Vengeance", Dh, Tank, Agi),

    DruidBoomie => (102, "Balance", Druid, Dps, Int),
    DruidCat => (103, "Feral", Druid, Dps, Agi),
    DruidBear => (104, "Guardian", Druid, Tank, Agi),
    DruidResto => (105, "Restoration", Druid, Heal, Int),

    EvokerDev => (1467, "Devastation", Evoker, Dps, Int),
    EvokerPres => (1468, "Preservation", Evoker, Heal, Int),
    EvokerAug => (1473, "Augmentation", Evoker, Dps, Int),

    HunterBm => (253, "Beast Mastery", Hunter, Dps, Agi),
    HunterMm => (254, "Marksmanship", Hunter, Dps, Agi),
    HunterSv => (255, "Survival", Hunter, Dps, Agi),

    MageArcane => (62, "Arcane", Mage, Dps, Int),
    MageFire => (63, "Fire", Mage, Dps, Int),
    MageFrost => (64, "Frost", Mage, Dps, Int),

    MonkBrew => (268, "Brewmaster", Monk, Tank, Agi),
    MonkMw => (270, "Mistweaver", Monk, Heal, Int),
    MonkWw => (269, "Windwalker", Monk, Dps, Agi),

    PaladinHoly => (65, "Holy", Paladin, Heal, Int),
    PaladinProt => (66, "Protection", Paladin, Tank, Str),
    PaladinRet => (70, "Retribution", Paladin, Dps, Str),

    PriestDisc => (256, "Discipline", Priest, Heal, Int),
    PriestHoly => (257, "Holy", Priest, Heal, Int),
    PriestShadow => (258, "Shadow", Priest, Dps, Int),

    RogueSin => (259, "Assassination", Rogue, Dps, Agi),
    RogueOutlaw => (260, "Outlaw", Rogue, Dps, Agi),
    RogueSub => (261, "Subtlety", Rogue, Dps, Agi),

    ShamanEle => (262, "Elemental", Shaman, Dps, Int),
    ShamanEnh => (263, "Enhancement", Shaman, Dps, Agi),
    ShamanResto => (264, "Restoration", Shaman, Heal, Int),

    WarlockAff => (265, "Affliction", Warlock, Dps, Int),
    WarlockDemo => (266, "Demonology", Warlock, Dps, Int),
    WarlockDest => (267, "Destruction", Warlock, Dps, Int),

    WarriorArms => (71, "Arms", Warrior, Dps, Str),
    WarriorFury => (72, "Fury", Warrior, Dps, Str),
    WarriorProt => (73, "Protection", Warrior, Tank, Str),
}

lazy_static::lazy_static! {
    /// Wowhead 전문화 ID -> Spec
    pub static ref SPECS_BY_ID: HashMap<u16, Spec> = Spec::ALL
        .iter()
        .map(|spec| (spec.id(), *spec))
        .collect();
}

impl Spec {
    pub fn from_id(spec_id: u16) -> Option<Spec> {
        SPECS_BY_ID.get(&spec_id).copied()
    }
}
