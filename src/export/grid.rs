//! 고정 크기 표
//!
//! (직업, 슬롯) 마다 항상 같은 행 수를 씁니다. 넘치면 경고 후 자르고, 모자라면 빈
//! 아이템으로 채워서 표 모양이 바뀌지 않게 합니다.

use super::sort::sort_items;
use super::view::{finish, new_writer, row_values};
use crate::item::Item;
use crate::wow::{Class, EquipSlot, WowEnum};

pub const GRID_CATEGORY_COLUMN: &str = "category";

/// 한 (직업, 슬롯) 의 기본 행 수
pub const DEFAULT_GRID_ROWS: usize = 24;

pub fn render_grid(items: &[Item], columns: &[String], rows_per_slot: usize) -> anyhow::Result<String> {
    let mut header = vec![GRID_CATEGORY_COLUMN.to_string()];
    header.extend(columns.iter().cloned());

    let mut writer = new_writer();
    writer.write_record(&header)?;

    for class in Class::ALL {
        let specs = class.specs();
        for slot in EquipSlot::ALL {
            let mut slot_items: Vec<Item> = items
                .iter()
                .filter(|item| item.equip_slot() == Some(*slot))
                .filter(|item| specs.iter().any(|spec| item.is_eligible_for(*spec)))
                .cloned()
                .collect();
            sort_items(&mut slot_items);

            if slot_items.len() > rows_per_slot {
                tracing::warn!(
                    "{} {} has {} items, only the first {} are written",
                    class.abbr(),
                    slot.ingame_name(),
                    slot_items.len(),
                    rows_per_slot
                );
                slot_items.truncate(rows_per_slot);
            }
            slot_items.resize_with(rows_per_slot, Item::empty);

            for (index, item) in slot_items.iter_mut().enumerate() {
                item.drop_chances.remove_redundant_spec_rates();
                let mut record = vec![format!("{} {} #{}", class.abbr(), slot.ingame_name(), index + 1)];
                record.extend(row_values(&item.csv_row_data(), columns, false));
                writer.write_record(&record)?;
            }
        }
    }

    finish(writer)
}
