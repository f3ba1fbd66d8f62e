use super::{EquipSlot, Role, WowEnum};

/// 무기 종류는 모두 이 값으로 합쳐집니다
pub const WEAPON_GEAR_TYPE: &str = "Weapon";
/// 방어구/무기/장신구 어디에도 해당하지 않는 종류
pub const OTHER_GEAR_TYPE: &str = "Other";
/// 형상변환 전용 아이템 (탈것/퀘스트 아이템과 같이 취급)
pub const COSMETIC_GEAR_TYPE: &str = "Cosmetic";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArmorType {
    Cloth,
    Leather,
    Mail,
    Plate,
}

impl WowEnum for ArmorType {
    const ALL: &'static [Self] = &[
        ArmorType::Cloth,
        ArmorType::Leather,
        ArmorType::Mail,
        ArmorType::Plate,
    ];

    fn abbr(&self) -> &'static str {
        self.ingame_name()
    }

    fn ingame_name(&self) -> &'static str {
        match self {
            ArmorType::Cloth => "Cloth",
            ArmorType::Leather => "Leather",
            ArmorType::Mail => "Mail",
            ArmorType::Plate => "Plate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeaponType {
    Sword,
    Mace,
    Axe,
    Dagger,
    FistWeapon,
    Warglaive,
    Polearm,
    Staff,
    Bow,
    Crossbow,
    Gun,
}

impl WowEnum for WeaponType {
    const ALL: &'static [Self] = &[
        WeaponType::Sword,
        WeaponType::Mace,
        WeaponType::Axe,
        WeaponType::Dagger,
        WeaponType::FistWeapon,
        WeaponType::Warglaive,
        WeaponType::Polearm,
        WeaponType::Staff,
        WeaponType::Bow,
        WeaponType::Crossbow,
        WeaponType::Gun,
    ];

    fn abbr(&self) -> &'static str {
        match self {
            WeaponType::FistWeapon => "FistWeapon",
            _ => self.ingame_name(),
        }
    }

    fn ingame_name(&self) -> &'static str {
        match self {
            WeaponType::Sword => "Sword",
            WeaponType::Mace => "Mace",
            WeaponType::Axe => "Axe",
            WeaponType::Dagger => "Dagger",
            WeaponType::FistWeapon => "Fist Weapon",
            WeaponType::Warglaive => "Warglaive",
            WeaponType::Polearm => "Polearm",
            WeaponType::Staff => "Staff",
            WeaponType::Bow => "Bow",
            WeaponType::Crossbow => "Crossbow",
            WeaponType::Gun => "Gun",
        }
    }
}

/// 장신구의 장비 종류 라벨
///
/// 역할 전용 장신구는 `"Tank Trinket"`처럼 역할 코드가 붙고, 그 외는 `"Trinket"`입니다.
pub fn trinket_gear_type(role: Option<Role>) -> String {
    match role {
        Some(role) => format!("{} Trinket", role.abbr()),
        None => EquipSlot::Trinket.ingame_name().to_string(),
    }
}

/// 소스의 장비 종류를 CSV 정렬용 값으로 정규화
///
/// 정렬이 항상 값을 가지도록 빈 값은 `Other`가 됩니다. `Cosmetic`은 탈것/퀘스트 판정에
/// 필요하므로 그대로 둡니다.
pub fn normalize_gear_type(raw: &str, slot: Option<EquipSlot>) -> String {
    if slot == Some(EquipSlot::Trinket) {
        // 수집 단계에서 이미 역할 라벨이 붙은 장신구 (탱커 전용 등)
        let role_label = Role::ALL
            .iter()
            .map(|role| trinket_gear_type(Some(*role)))
            .find(|label| label == raw);
        return role_label.unwrap_or_else(|| trinket_gear_type(None));
    }
    if ArmorType::from_ingame_name(raw).is_some() {
        return raw.to_string();
    }
    if WeaponType::from_ingame_name(raw).is_some() {
        return WEAPON_GEAR_TYPE.to_string();
    }
    if raw == COSMETIC_GEAR_TYPE {
        return COSMETIC_GEAR_TYPE.to_string();
    }
    OTHER_GEAR_TYPE.to_string()
}
