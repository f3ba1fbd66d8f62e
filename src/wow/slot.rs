use super::WowEnum;

/// 장비 슬롯
///
/// NOTE: `ingame_name`은 Wowhead 표기 그대로입니다. 바꾸면 입력 레코드와 매칭되지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EquipSlot {
    Head,
    Shoulders,
    Chest,
    Wrists,
    Hands,
    Waist,
    Legs,
    Feet,
    Neck,
    Back,
    Ring,
    Onehand,
    Twohand,
    Ranged,
    Offhand,
    Mainhand,
    Shield,
    Trinket,
}

impl EquipSlot {
    /// 2차 능력치 분배 대신 주 능력치 코드를 보여주는 슬롯
    pub fn shows_mainstat(&self) -> bool {
        matches!(
            self,
            EquipSlot::Onehand
                | EquipSlot::Twohand
                | EquipSlot::Ranged
                | EquipSlot::Offhand
                | EquipSlot::Shield
                | EquipSlot::Trinket
        )
    }
}

impl WowEnum for EquipSlot {
    const ALL: &'static [Self] = &[
        EquipSlot::Head,
        EquipSlot::Shoulders,
        EquipSlot::Chest,
        EquipSlot::Wrists,
        EquipSlot::Hands,
        EquipSlot::Waist,
        EquipSlot::Legs,
        EquipSlot::Feet,
        EquipSlot::Neck,
        EquipSlot::Back,
        EquipSlot::Ring,
        EquipSlot::Onehand,
        EquipSlot::Twohand,
        EquipSlot::Ranged,
        EquipSlot::Offhand,
        EquipSlot::Mainhand,
        EquipSlot::Shield,
        EquipSlot::Trinket,
    ];

    fn abbr(&self) -> &'static str {
        match self {
            EquipSlot::Head => "Head",
            EquipSlot::Shoulders => "Shoulders",
            EquipSlot::Chest => "Chest",
            EquipSlot::Wrists => "Wrists",
            EquipSlot::Hands => "Hands",
            EquipSlot::Waist => "Waist",
            EquipSlot::Legs => "Legs",
            EquipSlot::Feet => "Feet",
            EquipSlot::Neck => "Neck",
            EquipSlot::Back => "Back",
            EquipSlot::Ring => "Ring",
            EquipSlot::Onehand => "Onehand",
            EquipSlot::Twohand => "Twohand",
            EquipSlot::Ranged => "Ranged",
            EquipSlot::Offhand => "Offhand",
            EquipSlot::Mainhand => "Mainhand",
            EquipSlot::Shield => "Shield",
            EquipSlot::Trinket => "Trinket",
        }
    }

    fn ingame_name(&self) -> &'static str {
        match self {
            EquipSlot::Head => "Head",
            EquipSlot::Shoulders => "Shoulder",
            EquipSlot::Chest => "Chest",
            EquipSlot::Wrists => "Wrist",
            EquipSlot::Hands => "Hands",
            EquipSlot::Waist => "Waist",
            EquipSlot::Legs => "Legs",
            EquipSlot::Feet => "Feet",
            EquipSlot::Neck => "Neck",
            EquipSlot::Back => "Back",
            EquipSlot::Ring => "Finger",
            EquipSlot::Onehand => "One-Hand",
            EquipSlot::Twohand => "Two-Hand",
            EquipSlot::Ranged => "Ranged",
            EquipSlot::Offhand => "Held In Off-hand",
            EquipSlot::Mainhand => "Main Hand",
            EquipSlot::Shield => "Off Hand",
            EquipSlot::Trinket => "Trinket",
        }
    }
}
