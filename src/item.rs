//! 아이템 모델
//!
//! `RawItem`은 수집기가 남긴 레코드 그대로이고, `Item`은 보정/정규화를 거친 값입니다.
//! 드랍 확률은 그룹의 아이템이 모두 모인 뒤 `drop_chance` 모듈이 채웁니다.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::drop_chance::DropChances;
use crate::fixes::{self, Overrides};
use crate::npc::Npc;
use crate::wow::{
    normalize_gear_type, trinket_gear_type, Class, EquipSlot, LootCategory, PrimaryStat, Role,
    SecondaryStat, Spec, WowEnum, COSMETIC_GEAR_TYPE,
};

/// 통계용 합성 아이템과 빈 자리 채우기용 아이템의 ID
pub const EMPTY_ITEM_ID: u32 = 0;

pub const COLUMN_ITEM_ID: &str = "item_id";
pub const COLUMN_WEEK: &str = "week";
pub const COLUMN_FROM: &str = "from";
pub const COLUMN_BOSS: &str = "boss";
pub const COLUMN_LOOT_CATEGORY: &str = "loot_category";
pub const COLUMN_GEAR_SLOT: &str = "gear_slot";
pub const COLUMN_GEAR_TYPE: &str = "gear_type";
pub const COLUMN_STATS: &str = "stats";
pub const COLUMN_SPEC_IDS: &str = "spec_ids";
pub const COLUMN_SPEC_NAMES: &str = "spec_names";

/// 수집기가 남긴 아이템 레코드
///
/// 능력치 맵의 키는 게임 내 표기(`"Agility"`, `"Critical Strike"`)입니다.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawItem {
    pub name: String,
    pub item_level: u32,
    pub bind: String,
    pub gear_slot: String,
    pub gear_type: String,
    pub unique: bool,
    pub primary_stats: BTreeMap<String, u32>,
    pub secondary_stats: BTreeMap<String, u32>,
    pub required_level: u32,
    pub sell_price: String,
    pub dropped_by: String,
    /// 비어 있으면 모든 전문화
    pub spec_ids: Vec<u16>,
}

#[derive(Debug, Clone, Default)]
pub struct Item {
    pub item_id: u32,
    pub name: String,
    pub item_level: u32,
    pub bind: String,
    /// 게임 내 슬롯 표기, 탈것/퀘스트 아이템은 빈 문자열
    pub gear_slot: String,
    pub gear_type: String,
    pub unique: bool,
    pub primary_stats: Vec<(PrimaryStat, u32)>,
    pub secondary_stats: Vec<(SecondaryStat, u32)>,
    pub required_level: u32,
    pub sell_price: String,
    pub dropped_by: String,
    pub specs: Vec<Spec>,
    pub mainstat: String,
    pub distribution: String,
    pub stats: String,
    /// 분류 약어, 통계 아이템은 `"Head (Dk)"` 형태
    pub loot_category: String,
    pub dropped_in: String,
    pub from: String,
    pub week: String,
    pub boss: String,
    pub drop_chances: DropChances,
}

impl Item {
    pub fn new(item_id: u32, raw: RawItem, overrides: &dyn Overrides) -> Self {
        let slot = EquipSlot::from_ingame_name(&raw.gear_slot);
        let primary_stats = parse_stats::<PrimaryStat>(item_id, &raw.primary_stats);
        let secondary_stats = parse_stats::<SecondaryStat>(item_id, &raw.secondary_stats);
        let mainstat = mainstat_code(&primary_stats);
        let distribution = distribution(&secondary_stats);
        let stats = match slot {
            Some(slot) if slot.shows_mainstat() => mainstat.clone(),
            _ => distribution_code(&secondary_stats),
        };

        let mut item = Self {
            item_id,
            dropped_by: fixes::resolve_dropped_by(overrides, item_id, &raw.dropped_by),
            gear_type: normalize_gear_type(&raw.gear_type, slot),
            specs: parse_spec_ids(item_id, &raw.spec_ids),
            name: raw.name,
            item_level: raw.item_level,
            bind: raw.bind,
            gear_slot: raw.gear_slot,
            unique: raw.unique,
            primary_stats,
            secondary_stats,
            required_level: raw.required_level,
            sell_price: raw.sell_price,
            mainstat,
            distribution,
            stats,
            ..Default::default()
        };

        if let Some(roles) = overrides.override_spec_roles(item_id) {
            item.apply_role_override(&roles);
        }
        item.loot_category = item.resolve_loot_category();
        item
    }

    /// 빈 합성 아이템
    ///
    /// 대상 전문화는 비어 있습니다 (모든 전문화로 채우지 않음).
    pub fn empty() -> Self {
        Self {
            item_id: EMPTY_ITEM_ID,
            ..Default::default()
        }
    }

    /// 역할 전용 장신구 처리
    ///
    /// 대상 전문화를 해당 역할의 전문화 전체로 바꾸고, 장비 종류와 능력치 코드에 역할을
    /// 표시합니다. 역할이 여러 개면 역할 무관 장신구 라벨을 씁니다.
    fn apply_role_override(&mut self, roles: &[Role]) {
        if self.gear_slot != EquipSlot::Trinket.ingame_name() {
            tracing::warn!(
                "{} has a role override but is not a Trinket ({})",
                self.item_id,
                self.gear_slot
            );
        }

        self.specs = Spec::ALL
            .iter()
            .copied()
            .filter(|spec| roles.contains(&spec.role()))
            .collect();

        match roles {
            [role] => {
                self.gear_type = trinket_gear_type(Some(*role));
                self.stats = format!("{} {}", role.abbr(), self.stats).trim_end().to_string();
            }
            _ => self.gear_type = trinket_gear_type(None),
        }
    }

    fn resolve_loot_category(&self) -> String {
        if self.is_mount_or_quest_item() {
            return LootCategory::UNKNOWN.to_string();
        }
        LootCategory::from_gear_slot_and_stats(&self.gear_slot, &self.stats, &self.gear_type)
            .map(|category| category.abbr().to_string())
            .unwrap_or_else(|| LootCategory::UNKNOWN.to_string())
    }

    /// 존 정보 기록 (존 이름, 줄인 이름, 출시 주차, 보스 순서)
    pub fn add_zone_data(&mut self, zone_name: &str, short_zone_name: &str, week: &str, bosses: &[Npc]) {
        self.dropped_in = zone_name.to_string();
        self.from = short_zone_name.to_string();
        self.week = week.to_string();
        self.boss = Npc::boss_position(&self.dropped_by, bosses);
    }

    /// 슬롯이 없거나 형상변환 전용이면 드랍 확률/시뮬레이션/내보내기에서 빠집니다
    pub fn is_mount_or_quest_item(&self) -> bool {
        self.gear_slot.is_empty() || self.gear_type == COSMETIC_GEAR_TYPE
    }

    pub fn is_eligible_for(&self, spec: Spec) -> bool {
        !self.is_mount_or_quest_item() && self.specs.contains(&spec)
    }

    pub fn has_mainstat(&self, stat: PrimaryStat) -> bool {
        self.primary_stats.iter().any(|(s, _)| *s == stat)
    }

    /// 장신구 역할 라벨 일치 여부 (`None`은 역할 무관 장신구)
    pub fn has_role(&self, role: Option<Role>) -> bool {
        self.gear_type == trinket_gear_type(role)
    }

    pub fn loot_category(&self) -> Option<LootCategory> {
        LootCategory::from_label(&self.loot_category)
    }

    pub fn equip_slot(&self) -> Option<EquipSlot> {
        EquipSlot::from_ingame_name(&self.gear_slot)
    }

    /// CSV 한 줄에 들어갈 모든 값
    ///
    /// 직업별로 직업 확률 컬럼 다음에 전문화 컬럼이 옵니다.
    pub fn csv_row_data(&self) -> CsvRow {
        let mut row = CsvRow::default();
        row.push(COLUMN_ITEM_ID, self.item_id.to_string());
        row.push("name", self.name.clone());
        row.push("item_level", self.item_level.to_string());
        row.push("bind", self.bind.clone());
        row.push(COLUMN_GEAR_SLOT, self.gear_slot.clone());
        row.push(COLUMN_GEAR_TYPE, self.gear_type.clone());
        row.push("unique", if self.unique { "True" } else { "False" }.to_string());
        row.push("primary_stats", join_names(&self.primary_stats));
        row.push("secondary_stats", join_names(&self.secondary_stats));
        row.push("required_level", self.required_level.to_string());
        row.push("sell_price", self.sell_price.clone());
        row.push("dropped_by", self.dropped_by.clone());
        row.push("mainstat", self.mainstat.clone());
        row.push("distribution", self.distribution.clone());
        row.push(COLUMN_STATS, self.stats.clone());
        row.push(COLUMN_LOOT_CATEGORY, self.loot_category.clone());
        row.push("dropped_in", self.dropped_in.clone());
        row.push(COLUMN_WEEK, self.week.clone());
        row.push(COLUMN_FROM, self.from.clone());
        row.push(COLUMN_BOSS, self.boss.clone());
        for class in Class::ALL {
            row.push(class.abbr(), self.drop_chances.render_class(*class));
            for spec in class.specs() {
                row.push(spec.abbr(), self.drop_chances.render_spec(spec));
            }
        }
        row.push(
            COLUMN_SPEC_IDS,
            self.specs
                .iter()
                .map(|spec| spec.id().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        );
        row.push(
            COLUMN_SPEC_NAMES,
            self.specs
                .iter()
                .map(|spec| spec.abbr())
                .collect::<Vec<_>>()
                .join(", "),
        );
        row
    }
}

pub fn is_statistics_label(label: &str) -> bool {
    label.contains('(') && label.contains(')')
}

/// 컬럼 순서를 유지하는 CSV 한 줄
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvRow(Vec<(String, String)>);

impl CsvRow {
    pub fn push(&mut self, key: &str, value: String) {
        self.0.push((key.to_string(), value));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }
}

fn parse_stats<S: WowEnum>(item_id: u32, raw: &BTreeMap<String, u32>) -> Vec<(S, u32)> {
    for name in raw.keys() {
        if S::from_ingame_name(name).is_none() {
            tracing::warn!("{}: unknown stat '{}' ignored", item_id, name);
        }
    }
    // 선언 순서 유지
    S::ALL
        .iter()
        .filter_map(|stat| raw.get(stat.ingame_name()).map(|value| (*stat, *value)))
        .collect()
}

fn parse_spec_ids(item_id: u32, spec_ids: &[u16]) -> Vec<Spec> {
    if spec_ids.is_empty() {
        return Spec::ALL.to_vec();
    }
    spec_ids
        .iter()
        .filter_map(|spec_id| {
            let spec = Spec::from_id(*spec_id);
            if spec.is_none() {
                tracing::warn!("{}: unknown spec id {}", item_id, spec_id);
            }
            spec
        })
        .collect()
}

fn join_names<S: WowEnum>(stats: &[(S, u32)]) -> String {
    stats
        .iter()
        .map(|(stat, _)| stat.ingame_name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// 주 능력치 코드: 셋 다 있으면 `All3`, 아니면 `Agi,Int` 처럼 나열
pub fn mainstat_code(primary_stats: &[(PrimaryStat, u32)]) -> String {
    if primary_stats.len() == PrimaryStat::ALL.len() {
        return "All3".to_string();
    }
    primary_stats
        .iter()
        .map(|(stat, _)| stat.abbr())
        .collect::<Vec<_>>()
        .join(",")
}

/// 2차 능력치 비율 내림차순 (같은 비율이면 이름 역순)
fn sorted_distribution(secondary_stats: &[(SecondaryStat, u32)]) -> Vec<(u32, SecondaryStat)> {
    let total: u32 = secondary_stats.iter().map(|(_, value)| value).sum();
    if total == 0 {
        return Vec::new();
    }
    let mut shares: Vec<(u32, SecondaryStat)> = secondary_stats
        .iter()
        .filter(|(_, value)| *value > 0)
        .map(|(stat, value)| (100 * value / total, *stat))
        .collect();
    shares.sort_by(|a, b| {
        b.0.cmp(&a.0)
            .then_with(|| b.1.ingame_name().cmp(a.1.ingame_name()))
    });
    shares
}

/// `"55% Haste + 45% Mastery"`
pub fn distribution(secondary_stats: &[(SecondaryStat, u32)]) -> String {
    sorted_distribution(secondary_stats)
        .iter()
        .map(|(percent, stat)| format!("{}% {}", percent, stat.ingame_name()))
        .collect::<Vec<_>>()
        .join(" + ")
}

/// `"H>M"`
pub fn distribution_code(secondary_stats: &[(SecondaryStat, u32)]) -> String {
    sorted_distribution(secondary_stats)
        .iter()
        .map(|(_, stat)| stat.letter().to_string())
        .collect::<Vec<_>>()
        .join(">")
}
