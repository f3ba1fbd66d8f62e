use super::WowEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Tank,
    Heal,
    Dps,
}

impl WowEnum for Role {
    const ALL: &'static [Self] = &[Role::Tank, Role::Heal, Role::Dps];

    fn abbr(&self) -> &'static str {
        match self {
            Role::Tank => "Tank",
            Role::Heal => "Heal",
            Role::Dps => "Dps",
        }
    }

    fn ingame_name(&self) -> &'static str {
        match self {
            Role::Tank => "Tank",
            Role::Heal => "Healer",
            Role::Dps => "Dps",
        }
    }
}
