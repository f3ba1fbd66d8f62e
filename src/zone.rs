//! 존(던전/레이드) 모델
//!
//! 존을 불러올 때 보스 목록/아이템 목록 보정, 출시 주차 태그, 아이템 생성까지 한 번에
//! 처리합니다.

use serde::Deserialize;

use crate::fixes::{self, Overrides};
use crate::item::Item;
use crate::npc::Npc;
use crate::source::ContentSource;

/// 줄인 존 이름의 최대 길이
pub const SHORT_NAME_LIMIT: usize = 16;

/// 수집기가 남긴 존 레코드
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawZone {
    pub name: String,
    /// 처치 순서
    pub bosses: Vec<Npc>,
    pub item_ids: Vec<u32>,
}

#[derive(Debug, Clone)]
pub struct Zone {
    pub zone_id: u32,
    pub name: String,
    pub short_name: String,
    pub bosses: Vec<Npc>,
    pub week: String,
    pub item_ids: Vec<u32>,
    pub items: Vec<Item>,
}

impl Zone {
    /// 존 레코드와 소속 아이템 레코드를 읽어 `Zone`을 만듭니다
    ///
    /// 레코드가 없으면 경고 후 빈 존이 됩니다.
    pub fn load(zone_id: u32, source: &dyn ContentSource, overrides: &dyn Overrides) -> Self {
        let raw = source.zone(zone_id).unwrap_or_default();
        let bosses = overrides.override_boss_list(zone_id).unwrap_or(raw.bosses);
        let item_ids = overrides.override_item_list(zone_id).unwrap_or(raw.item_ids);
        fixes::check_loot_table_size(overrides, zone_id, &item_ids);

        let short_name = shorten_zone_name(&raw.name);
        let week = overrides.release_week(zone_id);

        let items = item_ids
            .iter()
            .map(|item_id| {
                let raw_item = source.item(*item_id).unwrap_or_default();
                let mut item = Item::new(*item_id, raw_item, overrides);
                item.add_zone_data(&raw.name, &short_name, &week, &bosses);
                item
            })
            .collect();

        let zone = Self {
            zone_id,
            name: raw.name,
            short_name,
            bosses,
            week,
            item_ids,
            items,
        };
        tracing::info!(
            "Zone_id {} was parsed as {} with {} bosses and {} items",
            zone.zone_id,
            zone.name,
            zone.bosses.len(),
            zone.item_ids.len()
        );
        zone
    }
}

/// "짧은 출처" 컬럼용 존 이름
///
/// 앞의 `"The "`를 떼고, 16자를 넘으면서 쉼표가 있으면 첫 쉼표 앞까지 자릅니다.
/// 그래도 길면 16자 이하가 될 때까지 뒤 단어를 버리고, 마지막 단어가 대문자로 시작하는
/// 단어가 아니면 더 버립니다 (`of the` 같은 꼬리 방지).
pub fn shorten_zone_name(zone_name: &str) -> String {
    let mut name = zone_name.strip_prefix("The ").unwrap_or(zone_name);

    if char_len(name) > SHORT_NAME_LIMIT && name.contains(',') {
        name = name.split(',').next().unwrap_or(name);
    }
    if char_len(name) <= SHORT_NAME_LIMIT {
        return name.to_string();
    }

    let mut words: Vec<&str> = name.split_whitespace().collect();
    while words.len() > 1 && char_len(&words.join(" ")) > SHORT_NAME_LIMIT {
        words.pop();
    }
    while words.len() > 1 && !words.last().map_or(false, |word| is_title(word)) {
        words.pop();
    }
    words.join(" ")
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// 각 단어가 대문자로 시작하고 나머지는 소문자인지 (`"Necrotic"`, `"E.D.N.A."`)
fn is_title(word: &str) -> bool {
    let mut has_cased = false;
    let mut previous_cased = false;
    for c in word.chars() {
        if c.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            has_cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            has_cased = true;
        } else {
            previous_cased = false;
        }
    }
    has_cased
}
