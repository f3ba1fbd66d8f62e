use crate::item::Item;
use crate::wow::{LootCategory, WowEnum};

/// 모든 표 공통 정렬
///
/// 분류 선언 순서(알 수 없으면 맨 뒤) > 슬롯 > 장비 종류 > 주차 > 출처 > 보스 > 이름 > ID
pub fn sort_items(items: &mut [Item]) {
    items.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
}

fn sort_key(item: &Item) -> (usize, &str, &str, &str, &str, &str, &str, u32) {
    let category = item
        .loot_category()
        .map(|category| category.position())
        .unwrap_or(LootCategory::ALL.len() + 1);
    (
        category,
        item.gear_slot.as_str(),
        item.gear_type.as_str(),
        item.week.as_str(),
        item.from.as_str(),
        item.boss.as_str(),
        item.name.as_str(),
        item.item_id,
    )
}
