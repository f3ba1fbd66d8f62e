//! CSV 내보내기
//!
//! 한 그룹의 아이템(통계 아이템 포함)으로 다음 표들을 만듭니다.
//! - `<직업>.csv`: 직업 전문화 중 하나라도 받을 수 있는 아이템
//! - `all_items.csv`: 모든 직업 합본 (빈 줄 없음)
//! - `all_columns.csv`: 아이템의 모든 값 (검증용)
//! - `all_class_slots.csv`: (직업, 슬롯) 마다 고정 행 수

mod grid;
mod sort;
mod view;

pub use grid::{render_grid, DEFAULT_GRID_ROWS};
pub use view::{render, ViewOptions};

use std::path::Path;

use crate::item::{
    Item, COLUMN_BOSS, COLUMN_FROM, COLUMN_GEAR_TYPE, COLUMN_ITEM_ID, COLUMN_LOOT_CATEGORY,
    COLUMN_SPEC_IDS, COLUMN_SPEC_NAMES, COLUMN_STATS, COLUMN_WEEK,
};
use crate::persistence::write_textfile;
use crate::wow::{Class, Spec, WowEnum};

pub const ITEMS_FOLDER: &str = "items";
pub const ALL_ITEMS_CSV: &str = "all_items.csv";
pub const ALL_COLUMNS_CSV: &str = "all_columns.csv";
pub const ALL_CLASS_SLOTS_CSV: &str = "all_class_slots.csv";

const LEADING_COLUMNS: [&str; 7] = [
    COLUMN_ITEM_ID,
    COLUMN_WEEK,
    COLUMN_FROM,
    COLUMN_BOSS,
    COLUMN_LOOT_CATEGORY,
    COLUMN_GEAR_TYPE,
    COLUMN_STATS,
];

/// 고정 컬럼 + 직업별 (직업, 전문화...) + 전문화 ID/이름
pub fn columns_for_classes(classes: &[Class]) -> Vec<String> {
    let mut columns: Vec<String> = LEADING_COLUMNS.iter().map(|c| c.to_string()).collect();
    for class in classes {
        columns.push(class.abbr().to_string());
        columns.extend(class.specs().iter().map(|spec| spec.abbr().to_string()));
    }
    columns.push(COLUMN_SPEC_IDS.to_string());
    columns.push(COLUMN_SPEC_NAMES.to_string());
    columns
}

/// 주어진 전문화 중 하나라도 받을 수 있는 아이템 (탈것/퀘스트 아이템 제외)
pub fn items_for_specs(items: &[Item], specs: &[Spec]) -> Vec<Item> {
    items
        .iter()
        .filter(|item| specs.iter().any(|spec| item.is_eligible_for(*spec)))
        .cloned()
        .collect()
}

/// 그룹 하나의 모든 표를 `csv_dir` 아래에 씁니다
pub fn export_items_to_csv_for_all_specs_and_classes(
    items: &[Item],
    csv_dir: &Path,
    grid_rows: usize,
) -> anyhow::Result<()> {
    for class in Class::ALL {
        let path = csv_dir.join(format!("{}.csv", class.abbr()));
        let class_items = items_for_specs(items, &class.specs());
        write_view(&path, class_items, &columns_for_classes(&[*class]), ViewOptions::CLASS)?;
    }

    let all_items = items_for_specs(items, Spec::ALL);
    let all_columns = columns_for_classes(Class::ALL);
    write_view(
        &csv_dir.join(ALL_ITEMS_CSV),
        all_items.clone(),
        &all_columns,
        ViewOptions::COMBINED,
    )?;
    write_view(
        &csv_dir.join(ALL_COLUMNS_CSV),
        all_items.clone(),
        &all_columns,
        ViewOptions::DEBUG,
    )?;

    let grid = render_grid(&all_items, &all_columns, grid_rows)?;
    write_textfile(csv_dir.join(ALL_CLASS_SLOTS_CSV), &grid)?;

    Ok(())
}

fn write_view(path: &Path, items: Vec<Item>, columns: &[String], options: ViewOptions) -> anyhow::Result<()> {
    if items.is_empty() {
        tracing::warn!("No items found for csv {}. Creating CSV anyway...", path.display());
    }
    let csv = render(items, columns, options)?;
    write_textfile(path, &csv)
}
