//! 컨텐츠 그룹 (주차 던전 풀, 시즌 쐐기 풀 등)
//!
//! 존 -> 아이템 -> 드랍 확률 -> 월드 투어 -> CSV 순서로 진행합니다. 각 단계는 이전
//! 단계의 결과가 모두 모인 뒤에만 실행할 수 있습니다.

use std::collections::HashSet;
use std::path::Path;

use crate::config::GroupConfig;
use crate::drop_chance::DropChanceCalculator;
use crate::export;
use crate::fixes::Overrides;
use crate::item::{Item, EMPTY_ITEM_ID};
use crate::source::ContentSource;
use crate::world_tour::WorldTour;
use crate::zone::Zone;

pub struct ContentGroup {
    pub name: String,
    pub abbr: String,
    pub zone_ids: Vec<u32>,
    pub zones: Vec<Zone>,
    /// 월드 투어 결과로 만든 통계 아이템
    pub statistics: Vec<Item>,
}

impl ContentGroup {
    /// 존 ID가 비어 있으면 존 목록 레코드에서 읽고, 제외 목록을 뺍니다
    pub fn new(config: &GroupConfig, source: &dyn ContentSource) -> Self {
        let mut zone_ids = config.zone_ids.clone();
        if zone_ids.is_empty() {
            match &config.zone_list {
                Some(list) => zone_ids = source.zone_list(list),
                None => tracing::warn!("Content group {} has no zones", config.name),
            }
        }
        zone_ids.retain(|zone_id| !config.exclude_zone_ids.contains(zone_id));

        Self {
            name: config.name.clone(),
            abbr: config.abbr.clone(),
            zone_ids,
            zones: Vec::new(),
            statistics: Vec::new(),
        }
    }

    /// 출력 폴더 이름: 소문자로 바꾸고 `[a-z0-9]` 외 연속 구간을 `_` 하나로
    pub fn output_folder(&self) -> String {
        folder_name(&self.name)
    }

    pub fn load_zones(&mut self, source: &dyn ContentSource, overrides: &dyn Overrides) {
        self.zones = self
            .zone_ids
            .iter()
            .map(|zone_id| Zone::load(*zone_id, source, overrides))
            .collect();
    }

    /// 모든 존의 아이템 (ID 중복은 먼저 나온 것만)
    pub fn items(&self) -> Vec<Item> {
        dedup_items(self.zones.iter().flat_map(|zone| zone.items.iter()))
    }

    pub fn calculate_drop_chances(&mut self) -> anyhow::Result<()> {
        let calculator = DropChanceCalculator::new(&self.items());
        for item in self.zones.iter_mut().flat_map(|zone| zone.items.iter_mut()) {
            item.drop_chances = calculator.drop_chances(item)?;
        }
        Ok(())
    }

    /// 월드 투어를 돌려 `<sim_dir>`에 저장하고 통계 아이템을 만듭니다
    pub fn sim_world_tour(&mut self, loot_chance: f64, sim_dir: &Path) -> anyhow::Result<()> {
        let world_tour = WorldTour::simulate(&self.items(), loot_chance);
        world_tour.persist(sim_dir)?;
        self.statistics = world_tour.statistics_items(&self.abbr);
        Ok(())
    }

    /// 아이템 + 통계 아이템
    pub fn export_items(&self) -> Vec<Item> {
        let mut items = self.items();
        items.extend(self.statistics.iter().cloned());
        items
    }

    pub fn export(&self, csv_dir: &Path, grid_rows: usize) -> anyhow::Result<()> {
        export::export_items_to_csv_for_all_specs_and_classes(&self.export_items(), csv_dir, grid_rows)
    }
}

pub fn folder_name(group_name: &str) -> String {
    let mut folder = String::with_capacity(group_name.len());
    let mut in_run = false;
    for c in group_name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            folder.push(c);
            in_run = false;
        } else if !in_run {
            folder.push('_');
            in_run = true;
        }
    }
    folder
}

/// ID 기준 중복 제거 (ID 0인 합성 아이템끼리는 중복이 아님)
pub fn dedup_items<'a, I: IntoIterator<Item = &'a Item>>(items: I) -> Vec<Item> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| item.item_id == EMPTY_ITEM_ID || seen.insert(item.item_id))
        .cloned()
        .collect()
}
