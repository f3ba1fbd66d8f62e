//! 월드 투어 시뮬레이션
//!
//! 컨텐츠 그룹의 모든 보스를 한 번씩 잡았을 때, 전문화별로 각 전리품 분류의 아이템을
//! 하나 이상 얻을 확률을 계산합니다.
//!
//! 보스 한 번 처치에서 전리품을 받을 확률을 `L`이라 하면, 드랍 확률이 `p`인 아이템을
//! 못 얻을 확률은 `1 - L·p`이고, 분류 전체로는 `1 - ∏(1 - L·p)`가 됩니다.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::drop_chance::{format_percent, DropChances};
use crate::item::Item;
use crate::persistence::write_textfile;
use crate::wow::{Class, EquipSlot, LootCategory, Spec, WowEnum};

pub const WORLD_TOUR_FOLDER: &str = "sim";
pub const AVAILABLE_KEY: &str = "Available";
pub const SOURCES: &str = "sources";

/// 보스 처치 한 번에 한 플레이어가 전리품을 받을 확률
pub const DEFAULT_LOOT_CHANCE: f64 = 0.2;

// 주차 라벨이 알파벳 정렬에서 Hc는 맨 앞, M0는 맨 뒤에 오도록 바꿔 씁니다
const HC: &str = "Hc";
const HC_CSV_VALUE: &str = "1st/2nd week";
const M0: &str = "M0";
const M0_CSV_VALUE: &str = "m0 week";

/// (직업, 분류) 하나의 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDropRates {
    /// 직업 전문화 순서대로, 반올림된 퍼센트
    pub specs: Vec<(Spec, u32)>,
    /// 전문화들 중 가장 많이 고려된 아이템 수
    pub sources: usize,
    /// 전문화들 중 최고 확률
    pub best: u32,
}

impl CategoryDropRates {
    pub fn spec(&self, spec: Spec) -> Option<u32> {
        self.specs
            .iter()
            .find(|(s, _)| *s == spec)
            .map(|(_, chance)| *chance)
    }

    pub fn sources_label(&self) -> String {
        format!("{} {}", self.sources, SOURCES)
    }

    fn is_empty(&self) -> bool {
        self.sources == 0 && self.best == 0 && self.specs.iter().all(|(_, chance)| *chance == 0)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorldTour {
    classes: BTreeMap<Class, BTreeMap<LootCategory, CategoryDropRates>>,
}

impl WorldTour {
    pub fn simulate(items: &[Item], loot_chance: f64) -> Self {
        let mut classes = BTreeMap::new();

        for class in Class::ALL {
            let mut categories = BTreeMap::new();
            for category in LootCategory::ALL {
                let rates = simulate_category(items, *class, *category, loot_chance);
                if !rates.is_empty() {
                    categories.insert(*category, rates);
                }
            }
            classes.insert(*class, categories);
        }

        Self { classes }
    }

    pub fn class(&self, class: Class) -> Option<&BTreeMap<LootCategory, CategoryDropRates>> {
        self.classes.get(&class)
    }

    /// 직업 하나의 결과 문서
    ///
    /// `{ 분류: { 전문화...: "x%", "Available": "n sources", 직업: "x%" } }`
    pub fn class_document(&self, class: Class) -> Value {
        let mut document = Map::new();
        for (category, rates) in self.class(class).into_iter().flatten() {
            let mut entry = Map::new();
            for (spec, chance) in &rates.specs {
                entry.insert(spec.abbr().to_string(), Value::String(format_percent(*chance)));
            }
            entry.insert(AVAILABLE_KEY.to_string(), Value::String(rates.sources_label()));
            entry.insert(class.abbr().to_string(), Value::String(format_percent(rates.best)));
            document.insert(category.abbr().to_string(), Value::Object(entry));
        }
        Value::Object(document)
    }

    /// `<sim_dir>/<직업>.json` 으로 저장
    pub fn persist(&self, sim_dir: &Path) -> anyhow::Result<()> {
        for class in Class::ALL {
            let json = to_pretty_json(&self.class_document(*class))?;
            write_textfile(sim_dir.join(format!("{}.json", class.abbr())), &json)?;
        }
        Ok(())
    }

    /// 결과를 CSV에 넣을 합성 통계 아이템으로 변환
    pub fn statistics_items(&self, group_abbr: &str) -> Vec<Item> {
        let formatted_abbr = format_group_abbr(group_abbr);
        let mut statistics = Vec::new();

        for (class, categories) in &self.classes {
            for (category, rates) in categories {
                let label = format!("{} ({})", category.abbr(), class.abbr());
                let mut item = Item::empty();
                item.name = format!("{} items for ({})", category.abbr(), class.abbr());
                item.week = group_abbr.to_string();
                item.from = label.clone();
                item.loot_category = label;
                item.dropped_in = formatted_abbr.to_string();
                item.gear_slot = category.ingame_name().to_string();
                item.gear_type = formatted_abbr.to_string();
                item.boss = rates.sources_label();
                item.specs = rates.specs.iter().map(|(spec, _)| *spec).collect();
                item.drop_chances = DropChances::from_specs(rates.specs.iter().copied().collect());
                statistics.push(item);
            }
        }

        statistics
    }
}

fn simulate_category(
    items: &[Item],
    class: Class,
    category: LootCategory,
    loot_chance: f64,
) -> CategoryDropRates {
    let slot = category.equip_slot();
    let mut specs = Vec::new();
    let mut best = 0.0_f64;
    let mut sources = 0;

    for spec in class.specs() {
        let mut chance_of_no_drops = 1.0_f64;
        let mut items_considered = 0;

        for item in items.iter().filter(|item| item.is_eligible_for(spec)) {
            if !matches_category(item, slot, category) {
                continue;
            }
            let drop_chance = f64::from(item.drop_chances.spec(spec)) / 100.0;
            if drop_chance > 0.0 {
                chance_of_no_drops *= 1.0 - loot_chance * drop_chance;
                items_considered += 1;
            }
        }

        let chance_of_at_least_one = (1.0 - chance_of_no_drops) * 100.0;
        best = best.max(chance_of_at_least_one);
        sources = sources.max(items_considered);
        specs.push((spec, round_percent(chance_of_at_least_one)));
    }

    CategoryDropRates {
        specs,
        sources,
        best: round_percent(best),
    }
}

fn matches_category(item: &Item, slot: EquipSlot, category: LootCategory) -> bool {
    let matching_slot = item.gear_slot == slot.ingame_name();
    let matching_mainstat = category.mainstat().map_or(true, |stat| item.has_mainstat(stat));
    let matching_role = slot != EquipSlot::Trinket || item.has_role(category.role());
    matching_slot && matching_mainstat && matching_role
}

fn round_percent(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

/// 주차 태그를 CSV 정렬용 라벨로 (`Hc`, `M0` 외에는 빈 문자열)
pub fn format_group_abbr(group_abbr: &str) -> &'static str {
    match group_abbr {
        HC => HC_CSV_VALUE,
        M0 => M0_CSV_VALUE,
        _ => "",
    }
}

fn to_pretty_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}
