use super::{EquipSlot, PrimaryStat, Role, WowEnum};

/// 전리품 분류 (슬롯 + 필요 주 능력치 + 필요 역할)
///
/// 한 슬롯을 여러 전리품 풀이 공유할 때 구분하기 위한 값입니다.
/// 선언 순서가 CSV 정렬의 1순위 키입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LootCategory {
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
    Agi1hWeapon,
    Str1hWeapon,
    Int1hWeapon,
    Agi2hWeapon,
    Str2hWeapon,
    Int2hWeapon,
    Ranged,
    Offhand,
    Mainhand,
    Shield,
    DpsTrinket,
    HealTrinket,
    TankTrinket,
    AnyTrinket,
}

impl LootCategory {
    /// 분류를 결정할 수 없을 때 쓰는 값
    pub const UNKNOWN: &'static str = "unknown";

    pub fn equip_slot(&self) -> EquipSlot {
        use LootCategory::*;
        match self {
            Head => EquipSlot::Head,
            Shoulders => EquipSlot::Shoulders,
            Chest => EquipSlot::Chest,
            Wrists => EquipSlot::Wrists,
            Hands => EquipSlot::Hands,
            Waist => EquipSlot::Waist,
            Legs => EquipSlot::Legs,
            Feet => EquipSlot::Feet,
            Neck => EquipSlot::Neck,
            Back => EquipSlot::Back,
            Ring => EquipSlot::Ring,
            Agi1hWeapon | Str1hWeapon | Int1hWeapon => EquipSlot::Onehand,
            Agi2hWeapon | Str2hWeapon | Int2hWeapon => EquipSlot::Twohand,
            Ranged => EquipSlot::Ranged,
            Offhand => EquipSlot::Offhand,
            Mainhand => EquipSlot::Mainhand,
            Shield => EquipSlot::Shield,
            DpsTrinket | HealTrinket | TankTrinket | AnyTrinket => EquipSlot::Trinket,
        }
    }

    pub fn mainstat(&self) -> Option<PrimaryStat> {
        use LootCategory::*;
        match self {
            Agi1hWeapon | Agi2hWeapon => Some(PrimaryStat::Agi),
            Str1hWeapon | Str2hWeapon => Some(PrimaryStat::Str),
            Int1hWeapon | Int2hWeapon => Some(PrimaryStat::Int),
            _ => None,
        }
    }

    /// 역할 제한 (장신구 전용)
    pub fn role(&self) -> Option<Role> {
        match self {
            LootCategory::DpsTrinket => Some(Role::Dps),
            LootCategory::HealTrinket => Some(Role::Heal),
            LootCategory::TankTrinket => Some(Role::Tank),
            _ => None,
        }
    }

    /// 원본 슬롯 문자열 + 능력치 코드 + 역할 힌트로 분류 결정
    ///
    /// 1. 슬롯 문자열이 이미 분류 약어면 그대로 사용
    /// 2. 한손/양손 무기는 능력치 코드에 포함된 주 능력치로 (민첩 > 힘 > 지능)
    /// 3. 장신구는 역할 코드로 (딜러 > 힐러 > 탱커 > 역할 무관)
    /// 4. 그 외는 슬롯이 같은 유일한 분류
    ///
    /// 실패하면 경고만 남기고 `None`을 반환합니다.
    ///
    /// 주 능력치가 셋 다 있는 무기는 능력치 코드가 `All3`이라 2번에서 걸리지 않으므로
    /// `unknown`으로 남습니다. 월드 투어는 `primary_stats`로 분류를 맞추므로 해당 무기도
    /// 각 주 능력치 분류에 포함됩니다.
    pub fn from_gear_slot_and_stats(gear_slot: &str, stats: &str, role_hint: &str) -> Option<Self> {
        if let Some(category) = Self::from_abbr(gear_slot) {
            return Some(category);
        }

        let slot = match EquipSlot::from_ingame_name(gear_slot) {
            Some(slot) => slot,
            None => {
                tracing::warn!("Could not resolve loot category for gear slot '{}' ({})", gear_slot, stats);
                return None;
            }
        };

        let found = match slot {
            EquipSlot::Onehand | EquipSlot::Twohand => PrimaryStat::ALL
                .iter()
                .find(|stat| stats.contains(stat.abbr()))
                .and_then(|stat| {
                    Self::ALL
                        .iter()
                        .copied()
                        .find(|c| c.equip_slot() == slot && c.mainstat() == Some(*stat))
                }),
            EquipSlot::Trinket => {
                let role = [Role::Dps, Role::Heal, Role::Tank]
                    .into_iter()
                    .find(|role| stats.contains(role.abbr()) || role_hint.contains(role.abbr()));
                Self::ALL
                    .iter()
                    .copied()
                    .find(|c| c.equip_slot() == slot && c.role() == role)
            }
            _ => Self::ALL.iter().copied().find(|c| c.equip_slot() == slot),
        };

        if found.is_none() {
            tracing::warn!("Could not resolve loot category for gear slot '{}' ({})", gear_slot, stats);
        }
        found
    }

    /// CSV 라벨에서 분류 복원
    ///
    /// 통계 행의 라벨은 `"Head (Dk)"` 형태이므로 첫 단어만 봅니다.
    pub fn from_label(label: &str) -> Option<Self> {
        label.split_whitespace().next().and_then(Self::from_abbr)
    }
}

impl WowEnum for LootCategory {
    const ALL: &'static [Self] = &[
        LootCategory::Head,
        LootCategory::Shoulders,
        LootCategory::Chest,
        LootCategory::Wrists,
        LootCategory::Hands,
        LootCategory::Waist,
        LootCategory::Legs,
        LootCategory::Feet,
        LootCategory::Neck,
        LootCategory::Back,
        LootCategory::Ring,
        LootCategory::Agi1hWeapon,
        LootCategory::Str1hWeapon,
        LootCategory::Int1hWeapon,
        LootCategory::Agi2hWeapon,
        LootCategory::Str2hWeapon,
        LootCategory::Int2hWeapon,
        LootCategory::Ranged,
        LootCategory::Offhand,
        LootCategory::Mainhand,
        LootCategory::Shield,
        LootCategory::DpsTrinket,
        LootCategory::HealTrinket,
        LootCategory::TankTrinket,
        LootCategory::AnyTrinket,
    ];

    fn abbr(&self) -> &'static str {
        use LootCategory::*;
        match self {
            Head => "Head",
            Shoulders => "Shoulders",
            Chest => "Chest",
            Wrists => "Wrists",
            Hands => "Hands",
            Waist => "Waist",
            Legs => "Legs",
            Feet => "Feet",
            Neck => "Neck",
            Back => "Back",
            Ring => "Ring",
            Agi1hWeapon => "Agi1hWeapon",
            Str1hWeapon => "Str1hWeapon",
            Int1hWeapon => "Int1hWeapon",
            Agi2hWeapon => "Agi2hWeapon",
            Str2hWeapon => "Str2hWeapon",
            Int2hWeapon => "Int2hWeapon",
            Ranged => "Ranged",
            Offhand => "Offhand",
            Mainhand => "Mainhand",
            Shield => "Shield",
            DpsTrinket => "DpsTrinket",
            HealTrinket => "HealTrinket",
            TankTrinket => "TankTrinket",
            AnyTrinket => "AnyTrinket",
        }
    }

    fn ingame_name(&self) -> &'static str {
        self.equip_slot().ingame_name()
    }
}
