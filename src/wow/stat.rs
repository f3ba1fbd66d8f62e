use super::WowEnum;

/// 주 능력치 (Wowhead 표기와 일치해야 하므로 이름 변경 금지)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimaryStat {
    Agi,
    Str,
    Int,
}

impl WowEnum for PrimaryStat {
    const ALL: &'static [Self] = &[PrimaryStat::Agi, PrimaryStat::Str, PrimaryStat::Int];

    fn abbr(&self) -> &'static str {
        match self {
            PrimaryStat::Agi => "Agi",
            PrimaryStat::Str => "Str",
            PrimaryStat::Int => "Int",
        }
    }

    fn ingame_name(&self) -> &'static str {
        match self {
            PrimaryStat::Agi => "Agility",
            PrimaryStat::Str => "Strength",
            PrimaryStat::Int => "Intellect",
        }
    }
}

/// 2차 능력치 (Wowhead 표기와 일치해야 하므로 이름 변경 금지)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SecondaryStat {
    Crit,
    Haste,
    Mastery,
    Vers,
}

impl SecondaryStat {
    /// 분배 코드(`H>M`)에 쓰이는 한 글자 이름
    pub fn letter(&self) -> char {
        match self {
            SecondaryStat::Crit => 'C',
            SecondaryStat::Haste => 'H',
            SecondaryStat::Mastery => 'M',
            SecondaryStat::Vers => 'V',
        }
    }
}

impl WowEnum for SecondaryStat {
    const ALL: &'static [Self] = &[
        SecondaryStat::Crit,
        SecondaryStat::Haste,
        SecondaryStat::Mastery,
        SecondaryStat::Vers,
    ];

    fn abbr(&self) -> &'static str {
        match self {
            SecondaryStat::Crit => "Crit",
            SecondaryStat::Haste => "Haste",
            SecondaryStat::Mastery => "Mastery",
            SecondaryStat::Vers => "Vers",
        }
    }

    fn ingame_name(&self) -> &'static str {
        match self {
            SecondaryStat::Crit => "Critical Strike",
            SecondaryStat::Haste => "Haste",
            SecondaryStat::Mastery => "Mastery",
            SecondaryStat::Vers => "Versatility",
        }
    }
}
