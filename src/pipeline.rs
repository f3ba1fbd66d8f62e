//! 전체 실행 순서
//!
//! 설정의 그룹마다 존 로드 -> 드랍 확률 -> 월드 투어 -> CSV -> 검증을 차례로 돌리고,
//! 마지막에 그룹 합본 표를 씁니다.

use std::path::Path;

use crate::config::Config;
use crate::content_group::{dedup_items, folder_name, ContentGroup};
use crate::export::{self, ITEMS_FOLDER};
use crate::fixes::Overrides;
use crate::item::Item;
use crate::source::ContentSource;
use crate::validation;
use crate::world_tour::WORLD_TOUR_FOLDER;

pub fn run(config: &Config, source: &dyn ContentSource, overrides: &dyn Overrides) -> anyhow::Result<()> {
    let output_dir = config.output.dir.as_path();
    let mut combined_items: Vec<Item> = Vec::new();
    let mut combined_statistics: Vec<Item> = Vec::new();

    for group_config in &config.groups {
        tracing::info!("Starting content group {}...", group_config.name);
        let mut group = ContentGroup::new(group_config, source);
        group.load_zones(source, overrides);

        let group_dir = output_dir.join(group.output_folder());
        run_group(&mut group, config, &group_dir)?;

        if let Some(expected_dir) = &config.validation.expected_dir {
            validation::validate(output_dir, expected_dir, &group.output_folder())?;
        }
        tracing::info!("Finished {}!", group.name);

        combined_items.extend(group.items());
        combined_statistics.extend(group.statistics);
    }

    if let Some(combined) = &config.combined {
        tracing::info!("Generating combined csv files for {}...", combined.name);
        let mut items = dedup_items(&combined_items);
        items.extend(combined_statistics);
        let csv_dir = output_dir.join(folder_name(&combined.name)).join(ITEMS_FOLDER);
        export::export_items_to_csv_for_all_specs_and_classes(&items, &csv_dir, config.export.grid_rows)?;
    }

    Ok(())
}

fn run_group(group: &mut ContentGroup, config: &Config, group_dir: &Path) -> anyhow::Result<()> {
    tracing::info!("Calculating drop chances for each item");
    group.calculate_drop_chances()?;

    tracing::info!("Simming world tour...");
    group.sim_world_tour(config.sim.loot_chance, &group_dir.join(WORLD_TOUR_FOLDER))?;

    tracing::info!("Generating csv files...");
    group.export(&group_dir.join(ITEMS_FOLDER), config.export.grid_rows)
}
