//! 전문화별 드랍 확률 계산
//!
//! 보스 하나의 전리품 테이블은 균등 확률이라고 가정합니다. 어떤 전문화에게 해당 보스에서
//! 나올 수 있는 아이템이 `k`개라면, 그 중 하나가 나올 확률은 `floor(100 / k)`%입니다.
//!
//! 내부에서는 정수로 들고 있다가 CSV/JSON으로 내보낼 때만 `"50%"` 문자열로 바꿉니다.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use anyhow::bail;

use crate::item::{Item, EMPTY_ITEM_ID};
use crate::npc::Npc;
use crate::wow::{Class, Spec, WowEnum};

/// 아이템 하나의 전문화/직업별 드랍 확률 (퍼센트)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropChances {
    specs: BTreeMap<Spec, u32>,
    classes: BTreeMap<Class, u32>,
    /// 직업 확률과 같아서 빈 칸으로 보여줄 전문화
    collapsed: BTreeSet<Spec>,
}

impl DropChances {
    /// 직업 확률은 해당 직업 전문화들의 최댓값입니다.
    /// 맵에 전문화가 하나도 없는 직업은 값이 없습니다.
    pub fn from_specs(specs: BTreeMap<Spec, u32>) -> Self {
        let mut classes: BTreeMap<Class, u32> = BTreeMap::new();
        for (spec, chance) in &specs {
            let best = classes.entry(spec.class()).or_insert(0);
            *best = (*best).max(*chance);
        }

        Self {
            specs,
            classes,
            collapsed: BTreeSet::new(),
        }
    }

    /// 계산되지 않은 전문화는 0
    pub fn spec(&self, spec: Spec) -> u32 {
        self.specs.get(&spec).copied().unwrap_or(0)
    }

    pub fn class(&self, class: Class) -> Option<u32> {
        self.classes.get(&class).copied()
    }

    /// 직업 확률과 같은 전문화 확률을 빈 칸으로 표시 (여러 번 호출해도 결과 동일)
    pub fn remove_redundant_spec_rates(&mut self) {
        for (spec, chance) in &self.specs {
            if self.classes.get(&spec.class()) == Some(chance) {
                self.collapsed.insert(*spec);
            }
        }
    }

    pub fn render_spec(&self, spec: Spec) -> String {
        if self.collapsed.contains(&spec) {
            return String::new();
        }
        self.specs
            .get(&spec)
            .map(|chance| format_percent(*chance))
            .unwrap_or_default()
    }

    pub fn render_class(&self, class: Class) -> String {
        self.class(class).map(format_percent).unwrap_or_default()
    }
}

pub fn format_percent(value: u32) -> String {
    format!("{}%", value)
}

/// 한 컨텐츠 그룹의 전문화별 보스 경쟁 아이템 수
///
/// 그룹의 아이템이 모두 모인 뒤에 한 번 만들고, 각 아이템의 확률은 이 표에서 읽습니다.
pub struct DropChanceCalculator {
    /// 전문화 -> 보스 슬러그 -> 해당 전문화가 받을 수 있는 아이템 수
    boss_counts: HashMap<Spec, HashMap<String, usize>>,
}

impl DropChanceCalculator {
    pub fn new(all_items: &[Item]) -> Self {
        let mut boss_counts: HashMap<Spec, HashMap<String, usize>> = HashMap::new();

        for spec in Spec::ALL {
            let mut seen: HashSet<u32> = HashSet::new();
            let counts = boss_counts.entry(*spec).or_default();
            for item in all_items.iter().filter(|item| item.is_eligible_for(*spec)) {
                // 같은 ID가 두 번 들어와도 한 번만 센다 (합성 아이템 ID 제외)
                if item.item_id != EMPTY_ITEM_ID && !seen.insert(item.item_id) {
                    continue;
                }
                *counts.entry(Npc::slug(&item.dropped_by)).or_insert(0) += 1;
            }
        }

        Self { boss_counts }
    }

    /// 아이템 하나의 전문화별 드랍 확률
    ///
    /// 받을 수 없는 전문화(탈것/퀘스트 아이템 포함)는 0%입니다. 받을 수 있다고 판정된
    /// 아이템이 집계에 없으면 필터가 어긋난 것이므로 에러를 반환합니다.
    pub fn drop_chances(&self, item: &Item) -> anyhow::Result<DropChances> {
        let boss = Npc::slug(&item.dropped_by);
        let mut specs = BTreeMap::new();

        for spec in Spec::ALL {
            if !item.is_eligible_for(*spec) {
                specs.insert(*spec, 0);
                continue;
            }

            let contending = self
                .boss_counts
                .get(spec)
                .and_then(|counts| counts.get(&boss))
                .copied()
                .unwrap_or(0);
            if contending == 0 {
                bail!(
                    "item {} ({}) is eligible for {} but boss '{}' has no counted items",
                    item.item_id,
                    item.name,
                    spec.abbr(),
                    boss
                );
            }

            specs.insert(*spec, 100 / contending as u32);
        }

        Ok(DropChances::from_specs(specs))
    }
}
