//! 수동 데이터 보정
//!
//! Wowhead 페이지가 잘못된 것으로 확인된 아이템/존에 한해 드랍 보스, 역할 제한,
//! 보스 목록, 아이템 목록을 덮어씁니다. 값이 없으면 원본 레코드를 그대로 씁니다.

mod tables;

pub use tables::FixTables;

use crate::npc::Npc;
use crate::wow::Role;

pub const RELEASE_HC: &str = "Hc";
pub const RELEASE_M0: &str = "m0";
pub const RELEASE_BOTH: &str = "both";
pub const RELEASE_MISSING: &str = "";

/// 보정 테이블 조회
pub trait Overrides {
    /// 아이템의 드랍 보스 표시 이름
    fn override_dropped_by(&self, item_id: u32) -> Option<String>;

    /// 특정 역할 전용 장신구. 있으면 해당 역할의 모든 전문화가 대상이 됩니다.
    fn override_spec_roles(&self, item_id: u32) -> Option<Vec<Role>>;

    fn override_boss_list(&self, zone_id: u32) -> Option<Vec<Npc>>;

    fn override_item_list(&self, zone_id: u32) -> Option<Vec<u32>>;

    /// 출시 주차 태그 (`"Hc"`, `"m0"`, `"both"`), 모르면 빈 문자열
    fn release_week(&self, zone_id: u32) -> String;

    /// 직접 세어 확인한 존 전리품 수
    fn expected_loot_table_size(&self, zone_id: u32) -> Option<usize>;
}

/// 확인된 전리품 수와 다르면 경고만 남깁니다
pub fn check_loot_table_size(overrides: &dyn Overrides, zone_id: u32, item_ids: &[u32]) -> bool {
    let expected = match overrides.expected_loot_table_size(zone_id) {
        Some(expected) => expected,
        None => return true,
    };

    let actual = item_ids.len();
    if actual == expected {
        return true;
    }

    let many_or_few = if actual > expected { "many" } else { "few" };
    tracing::warn!(
        "Too {} items found! Expected: {}, actual: {}",
        many_or_few,
        expected,
        actual
    );
    false
}

/// 아이템 보정 결과를 원본 `dropped_by`와 합칩니다
///
/// 원본이 비어 있으면 보정값을, 원본이 있으면 원본을 씁니다. 원본이 있는데 보정값도
/// 있으면 테이블 정리가 필요하다는 뜻이므로 경고합니다.
pub fn resolve_dropped_by(overrides: &dyn Overrides, item_id: u32, dropped_by: &str) -> String {
    let fixed = overrides.override_dropped_by(item_id);

    if dropped_by.is_empty() {
        if fixed.is_none() {
            tracing::warn!(
                "{} has unknown dropped_by, yet did not match any boss.",
                item_id
            );
        }
        return fixed.unwrap_or_default();
    }

    if fixed.is_some() {
        tracing::warn!(
            "{} has a hardcoded dropped_by despite not needing it.",
            item_id
        );
    }
    dropped_by.to_string()
}
