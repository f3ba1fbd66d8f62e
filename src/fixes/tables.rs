//! 하드코딩된 보정 테이블
//!
//! NOTE: 아이템 ID / 존 ID / NPC ID는 모두 Wowhead 기준입니다.

use std::collections::{HashMap, HashSet};

use maplit::hashmap;

use super::{Overrides, RELEASE_BOTH, RELEASE_HC, RELEASE_M0, RELEASE_MISSING};
use crate::npc::Npc;
use crate::wow::Role;

lazy_static::lazy_static! {
    /// 아이템 페이지에 드랍 보스가 없는 아이템들 (보스 표시 이름 -> 아이템 ID)
    static ref BOSS_LOOT_TABLES: HashMap<&'static str, Vec<u32>> = hashmap! {
        // Mists of Tirna Scithe
        "Mistcaller" => vec![
            178691, 178695, 178697, 178706, 178707,
            178710, 178715, 182305, 178705,
        ],
        // The Necrotic Wake
        "Amarth, The Harvester" => vec![
            178737, 178740, 178738, 178742, 178741,
            178739,
        ],
        "Surgeon Stitchflesh" => vec![
            178750, 178744, 178748, 178772, 178751,
            178743, 178745, 178749,
        ],
        "Nalthor the Rimebinder" => vec![
            178777, 178778, 178782, 178780, 178781,
            178783, 178779,
        ],
        // Siege of Boralus
        "Chopper Redhook" => vec![
            162541, 159973, 159968, 159427, 159972,
            159969, 159965, 159251,
        ],
        "Hadal Darkfathom" => vec![
            159322, 159622, 159650, 159461, 159428,
            159386,
        ],
        "Viq'Goth" => vec![
            231826, 231827, 231818, 231825, 231830,
            231822, 231824,
        ],
        // Grim Batol
        "Drahga Shadowburner" => vec![
            133292, 133295, 133294, 133354, 133293,
            133363, 133296,
        ],
    };

    /// 아이템 ID -> 드랍 보스
    static ref DROPPED_BY: HashMap<u32, &'static str> = BOSS_LOOT_TABLES
        .iter()
        .flat_map(|(boss, items)| items.iter().map(move |item_id| (*item_id, *boss)))
        .collect();

    /// 역할 전용 장신구 (tww hc + tww s1)
    ///
    /// 설명에 탱커 전용 문구가 있는 장신구는 원본 레코드에 이미 반영되어 있으므로 제외
    static ref ITEM_ROLES: HashMap<u32, Vec<Role>> = hashmap! {
        219298 => vec![Role::Dps],
        219306 => vec![Role::Heal],
        219304 => vec![Role::Dps],
        219310 => vec![Role::Heal],
        219294 => vec![Role::Dps],
        219316 => vec![Role::Tank],
        219320 => vec![Role::Heal],
        219319 => vec![Role::Dps],
        219302 => vec![Role::Heal],
        219301 => vec![Role::Dps],
        159622 => vec![Role::Dps],
        178783 => vec![Role::Heal],
        178772 => vec![Role::Dps],
        133304 => vec![Role::Heal],
        133291 => vec![Role::Tank],
    };

    static ref BOSS_LISTS: HashMap<u32, Vec<Npc>> = hashmap! {
        // Siege of Boralus: 얼라이언스/호드 버전 보스가 모두 나옴
        9354 => vec![
            Npc::new(144160, "Chopper Redhook", "chopper-redhook"),
            Npc::new(129208, "Dread Captain Lockwood", "dread-captain-lockwood"),
            Npc::new(130836, "Hadal Darkfathom", "hadal-darkfathom"),
            Npc::new(128652, "Viq'Goth", "viqgoth"),
        ],
        // The Stonevaults: 아이템에는 e-d-n-a, 링크에는 e-d-n-a-
        14883 => vec![
            Npc::new(210108, "E.D.N.A.", "e-d-n-a"),
            Npc::new(210156, "Skarmorak", "skarmorak"),
            Npc::new(213216, "Master Machinists", "speaker-dorlita"),
            Npc::new(213119, "Void Speaker Eirich", "void-speaker-eirich"),
        ],
    };

    static ref ITEM_LISTS: HashMap<u32, Vec<u32>> = hashmap! {
        // Grim Batol: 구 던전 전리품 테이블 + 누락된 Drahga Shadowburner
        4950 => vec![
            133282, 133283, 133284, 133285, 133286,
            133287, 133288, 133289, 133290, 133291,
            133297, 133298, 133299, 133300, 133301,
            133302, 133303, 133304, 133305, 133306,
            133308, 133309, 133353, 133374, 133292,
            133295, 133294, 133354, 133293, 133363,
            133296,
        ],
        // Siege of Boralus: 얼라이언스/호드 버전 전리품이 모두 나옴
        9354 => vec![
            159237, 159250, 159309, 159320, 159322,
            159372, 159379, 159386, 159428, 159429,
            159434, 159461, 159622, 159623, 159649,
            159650, 159251, 159427, 159965, 159968,
            159969, 159972, 159973, 162541, 231826,
            231827, 231818, 231825, 231830, 231822,
            231824, 159256, 159651,
        ],
        // The Dawnbreaker: 마지막 보스 전리품 누락
        14971 => vec![
            219311, 219312, 221132, 221133, 221134,
            221135, 221136, 221137, 221138, 221139,
            221140, 221141, 221142, 221202, 225574,
            212453, 212437, 225586, 212391, 212448,
            212440, 212398, 225583,
        ],
        // The Stonevaults: E.D.N.A. 전리품 누락
        14883 => vec![
            219300, 219301, 219302, 219303, 221079,
            221080, 221081, 221082, 221083, 221084,
            221085, 221086, 221087, 221088, 221089,
            221090, 221091, 221092, 221094, 221095,
            226683, 221077, 221076, 221074, 221078,
            219315, 221073, 221075,
        ],
    };

    /// 직접 세어 확인한 존 전리품 수
    static ref LOOT_TABLE_SIZES: HashMap<u32, usize> = hashmap! {
        15093 => 19,
        14883 => 14,
        14979 => 28,
        14938 => 23,
        15103 => 26,
        14882 => 25,
        14954 => 21,
        13334 => 32,
        12916 => 33,
    };

    static ref RELEASE_WEEKS: HashMap<u32, &'static str> = hashmap! {
        14938 => RELEASE_HC,
        15103 => RELEASE_HC,
        14882 => RELEASE_HC,
        14954 => RELEASE_HC,
        15093 => RELEASE_BOTH,
        14971 => RELEASE_BOTH,
        14883 => RELEASE_BOTH,
        14979 => RELEASE_BOTH,
        13334 => RELEASE_M0,
        12916 => RELEASE_M0,
        9354 => RELEASE_M0,
        4950 => RELEASE_M0,
    };
}

/// 하드코딩 테이블 기반 보정
#[derive(Debug, Default, Clone, Copy)]
pub struct FixTables;

impl FixTables {
    /// 하드코딩된 아이템 목록 안의 중복 ID 검사
    pub fn validate_no_duplicates() -> bool {
        let mut valid = true;
        for (zone_id, item_list) in ITEM_LISTS.iter() {
            let unique: HashSet<&u32> = item_list.iter().collect();
            if unique.len() != item_list.len() {
                tracing::warn!(
                    "Duplicate item_id in {}: lengths {} != {}",
                    zone_id,
                    unique.len(),
                    item_list.len()
                );
                valid = false;
            }
        }
        valid
    }
}

impl Overrides for FixTables {
    fn override_dropped_by(&self, item_id: u32) -> Option<String> {
        DROPPED_BY.get(&item_id).map(|boss| boss.to_string())
    }

    fn override_spec_roles(&self, item_id: u32) -> Option<Vec<Role>> {
        ITEM_ROLES.get(&item_id).filter(|roles| !roles.is_empty()).cloned()
    }

    fn override_boss_list(&self, zone_id: u32) -> Option<Vec<Npc>> {
        BOSS_LISTS.get(&zone_id).cloned()
    }

    fn override_item_list(&self, zone_id: u32) -> Option<Vec<u32>> {
        Self::validate_no_duplicates();
        ITEM_LISTS.get(&zone_id).cloned()
    }

    fn release_week(&self, zone_id: u32) -> String {
        RELEASE_WEEKS
            .get(&zone_id)
            .copied()
            .unwrap_or(RELEASE_MISSING)
            .to_string()
    }

    fn expected_loot_table_size(&self, zone_id: u32) -> Option<usize> {
        LOOT_TABLE_SIZES.get(&zone_id).copied()
    }
}
