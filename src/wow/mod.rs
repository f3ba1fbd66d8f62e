//! WoW 고정 카탈로그
//!
//! - `class`, `spec`: 직업 / 전문화 (역할, 주 능력치 포함)
//! - `slot`: 장비 슬롯 (Wowhead 표기와 동일해야 함)
//! - `loot_category`: 슬롯 + 주 능력치 + 역할로 구분한 전리품 풀
//! - `stat`, `role`, `gear_type`: 능력치 / 역할 / 장비 종류
//!
//! 모든 타입은 상태가 없는 닫힌 열거형이며, 선언 순서가 곧 정렬 순서입니다.

mod class;
mod gear_type;
mod loot_category;
mod role;
mod slot;
mod spec;
mod stat;

pub use class::Class;
pub use gear_type::{normalize_gear_type, trinket_gear_type, COSMETIC_GEAR_TYPE};
pub use loot_category::LootCategory;
pub use role::Role;
pub use slot::EquipSlot;
pub use spec::Spec;
pub use stat::{PrimaryStat, SecondaryStat};

/// 카탈로그 열거형 공통 동작
///
/// `abbr`은 CSV 컬럼/JSON 키로 쓰이는 약어, `ingame_name`은 외부 소스 표기입니다.
pub trait WowEnum: Copy + PartialEq + 'static {
    /// 선언 순서대로 나열된 전체 값
    const ALL: &'static [Self];

    fn abbr(&self) -> &'static str;

    fn ingame_name(&self) -> &'static str;

    fn from_abbr(abbr: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|e| e.abbr() == abbr)
    }

    fn from_ingame_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|e| e.ingame_name() == name)
    }

    /// 선언 순서상 위치 (정렬 키)
    fn position(&self) -> usize {
        Self::ALL
            .iter()
            .position(|e| e == self)
            .unwrap_or(Self::ALL.len())
    }
}
