use super::{Spec, WowEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Class {
    Dk,
    Dh,
    Druid,
    Evoker,
    Hunter,
    Mage,
    Monk,
    Paladin,
    Priest,
    Rogue,
    Shaman,
    Warlock,
    Warrior,
}

impl Class {
    /// 직업의 전문화 목록 (표준 순서)
    pub fn specs(&self) -> Vec<Spec> {
        Spec::ALL
            .iter()
            .copied()
            .filter(|spec| spec.class() == *self)
            .collect()
    }
}

impl WowEnum for Class {
    const ALL: &'static [Self] = &[
        Class::Dk,
        Class::Dh,
        Class::Druid,
        Class::Evoker,
        Class::Hunter,
        Class::Mage,
        Class::Monk,
        Class::Paladin,
        Class::Priest,
        Class::Rogue,
        Class::Shaman,
        Class::Warlock,
        Class::Warrior,
    ];

    fn abbr(&self) -> &'static str {
        match self {
            Class::Dk => "Dk",
            Class::Dh => "Dh",
            Class::Druid => "Druid",
            Class::Evoker => "Evoker",
            Class::Hunter => "Hunter",
            Class::Mage => "Mage",
            Class::Monk => "Monk",
            Class::Paladin => "Paladin",
            Class::Priest => "Priest",
            Class::Rogue => "Rogue",
            Class::Shaman => "Shaman",
            Class::Warlock => "Warlock",
            Class::Warrior => "Warrior",
        }
    }

    fn ingame_name(&self) -> &'static str {
        match self {
            Class::Dk => "Death Knight",
            Class::Dh => "Demon Hunter",
            Class::Druid => "Druid",
            Class::Evoker => "Evoker",
            Class::Hunter => "Hunter",
            Class::Mage => "Mage",
            Class::Monk => "Monk",
            Class::Paladin => "Paladin",
            Class::Priest => "Priest",
            Class::Rogue => "Rogue",
            Class::Shaman => "Shaman",
            Class::Warlock => "Warlock",
            Class::Warrior => "Warrior",
        }
    }
}
