use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::config::Config;
use crate::content_group::{dedup_items, ContentGroup};
use crate::drop_chance::{DropChanceCalculator, DropChances};
use crate::export::{self, columns_for_classes, render, render_grid, ViewOptions};
use crate::fixes::{FixTables, Overrides};
use crate::item::{is_statistics_label, Item, RawItem};
use crate::npc::Npc;
use crate::source::{ContentSource, JsonDirSource};
use crate::world_tour::{CategoryDropRates, WorldTour, DEFAULT_LOOT_CHANCE};
use crate::wow::{Class, LootCategory, Role, Spec, WowEnum};
use crate::zone::{shorten_zone_name, RawZone, Zone};
use crate::{pipeline, validation};

#[derive(Default)]
struct TestOverrides {
    dropped_by: HashMap<u32, String>,
    roles: HashMap<u32, Vec<Role>>,
}

impl Overrides for TestOverrides {
    fn override_dropped_by(&self, item_id: u32) -> Option<String> {
        self.dropped_by.get(&item_id).cloned()
    }

    fn override_spec_roles(&self, item_id: u32) -> Option<Vec<Role>> {
        self.roles.get(&item_id).cloned()
    }

    fn override_boss_list(&self, _zone_id: u32) -> Option<Vec<Npc>> {
        None
    }

    fn override_item_list(&self, _zone_id: u32) -> Option<Vec<u32>> {
        None
    }

    fn release_week(&self, _zone_id: u32) -> String {
        String::new()
    }

    fn expected_loot_table_size(&self, _zone_id: u32) -> Option<usize> {
        None
    }
}

#[derive(Default)]
struct MemorySource {
    items: HashMap<u32, RawItem>,
    zones: HashMap<u32, RawZone>,
}

impl ContentSource for MemorySource {
    fn item(&self, item_id: u32) -> Option<RawItem> {
        self.items.get(&item_id).cloned()
    }

    fn zone(&self, zone_id: u32) -> Option<RawZone> {
        self.zones.get(&zone_id).cloned()
    }

    fn zone_list(&self, _name: &str) -> Vec<u32> {
        Vec::new()
    }
}

fn raw_item(name: &str, gear_slot: &str, gear_type: &str, boss: &str, specs: &[Spec]) -> RawItem {
    RawItem {
        name: name.to_string(),
        item_level: 619,
        bind: "Soulbound".to_string(),
        gear_slot: gear_slot.to_string(),
        gear_type: gear_type.to_string(),
        primary_stats: BTreeMap::from([("Agility".to_string(), 100)]),
        secondary_stats: BTreeMap::from([("Haste".to_string(), 60), ("Mastery".to_string(), 40)]),
        dropped_by: boss.to_string(),
        spec_ids: specs.iter().map(|spec| spec.id()).collect(),
        ..Default::default()
    }
}

fn head(item_id: u32, name: &str, boss: &str, specs: &[Spec]) -> Item {
    Item::new(
        item_id,
        raw_item(name, "Head", "Leather", boss, specs),
        &TestOverrides::default(),
    )
}

/// 보스 A: X (MonkWw), Y (MonkWw, RogueSin) / 보스 B: Z (MonkWw)
fn example_items() -> Vec<Item> {
    vec![
        head(10, "Xal", "Alpha", &[Spec::MonkWw]),
        head(11, "Yew", "Alpha", &[Spec::MonkWw, Spec::RogueSin]),
        head(12, "Zed", "Beta", &[Spec::MonkWw]),
    ]
}

fn assign_drop_chances(items: &mut [Item]) -> anyhow::Result<()> {
    let calculator = DropChanceCalculator::new(items);
    for item in items.iter_mut() {
        item.drop_chances = calculator.drop_chances(item)?;
    }
    Ok(())
}

fn rates(world_tour: &WorldTour, class: Class, category: LootCategory) -> Option<&CategoryDropRates> {
    world_tour.class(class).and_then(|categories| categories.get(&category))
}

fn example_items_with_chances() -> Vec<Item> {
    let mut items = example_items();
    assign_drop_chances(&mut items).unwrap();
    items
}

#[test]
fn drop_chance_splits_boss_loot_table() {
    let items = example_items_with_chances();

    assert_eq!(items[0].drop_chances.spec(Spec::MonkWw), 50);
    assert_eq!(items[1].drop_chances.spec(Spec::MonkWw), 50);
    assert_eq!(items[2].drop_chances.spec(Spec::MonkWw), 100);
    assert_eq!(items[1].drop_chances.spec(Spec::RogueSin), 100);

    assert_eq!(items[0].drop_chances.render_spec(Spec::MonkWw), "50%");
    assert_eq!(items[0].drop_chances.render_spec(Spec::MonkBrew), "0%");
    assert_eq!(items[0].drop_chances.render_spec(Spec::RogueSin), "0%");

    let single = DropChanceCalculator::new(&items).drop_chances(&items[2]).unwrap();
    assert_eq!(single, items[2].drop_chances);
}

#[test]
fn ineligible_and_mount_items_get_zero() {
    let overrides = TestOverrides::default();
    let mount = Item::new(
        20,
        raw_item("Reins", "", "Junk", "Alpha", &[]),
        &overrides,
    );
    let cosmetic = Item::new(
        21,
        raw_item("Cloak", "Back", "Cosmetic", "Alpha", &[]),
        &overrides,
    );
    assert!(mount.is_mount_or_quest_item());
    assert!(cosmetic.is_mount_or_quest_item());
    // 전문화 목록이 비어 있으면 전체 전문화
    assert_eq!(mount.specs.len(), Spec::ALL.len());

    let mut items = example_items();
    items.push(mount);
    items.push(cosmetic);
    assign_drop_chances(&mut items).unwrap();

    for item in &items {
        for spec in Spec::ALL {
            if item.is_mount_or_quest_item() || !item.specs.contains(spec) {
                assert_eq!(item.drop_chances.spec(*spec), 0, "{} {:?}", item.item_id, spec);
            }
        }
    }
    // 탈것은 보스 A의 경쟁 아이템 수에 들어가지 않음
    assert_eq!(items[0].drop_chances.spec(Spec::MonkWw), 50);
}

#[test]
fn contending_items_share_the_same_chance() {
    let mut items: Vec<Item> = (0..3)
        .map(|i| head(30 + i, "Helm", "Gamma", &[Spec::DkBlood]))
        .collect();
    assign_drop_chances(&mut items).unwrap();
    for item in &items {
        assert_eq!(item.drop_chances.spec(Spec::DkBlood), 33);
    }
}

#[test]
fn eligible_item_missing_from_counts_is_an_error() {
    let item = head(40, "Helm", "Gamma", &[Spec::DkBlood]);
    assert!(DropChanceCalculator::new(&[]).drop_chances(&item).is_err());
}

#[test]
fn class_rate_is_max_of_specs_and_hides_duplicates() {
    let items = example_items_with_chances();
    let mut chances = items[1].drop_chances.clone();

    for class in Class::ALL {
        let best = class
            .specs()
            .iter()
            .map(|spec| chances.spec(*spec))
            .max()
            .unwrap_or(0);
        assert_eq!(chances.class(*class), Some(best));
    }

    chances.remove_redundant_spec_rates();
    assert_eq!(chances.render_class(Class::Monk), "50%");
    assert_eq!(chances.render_spec(Spec::MonkWw), "");
    assert_eq!(chances.render_spec(Spec::MonkBrew), "0%");
    assert_eq!(chances.render_class(Class::Rogue), "100%");
    assert_eq!(chances.render_spec(Spec::RogueSin), "");
}

#[test]
fn world_tour_end_to_end_example() {
    let items = example_items_with_chances();
    let world_tour = WorldTour::simulate(&items, DEFAULT_LOOT_CHANCE);

    // 1 - 0.9 * 0.9 * 0.8 = 35.2%
    let monk = rates(&world_tour, Class::Monk, LootCategory::Head).unwrap();
    assert_eq!(monk.spec(Spec::MonkWw), Some(35));
    assert_eq!(monk.spec(Spec::MonkBrew), Some(0));
    assert_eq!(monk.sources, 3);
    assert_eq!(monk.best, 35);

    let rogue = rates(&world_tour, Class::Rogue, LootCategory::Head).unwrap();
    assert_eq!(rogue.spec(Spec::RogueSin), Some(20));
    assert_eq!(rogue.sources, 1);

    let document = world_tour.class_document(Class::Monk);
    assert_eq!(document["Head"]["MonkWw"], "35%");
    assert_eq!(document["Head"]["Available"], "3 sources");
    assert_eq!(document["Head"]["Monk"], "35%");
}

#[test]
fn world_tour_prunes_categories_without_items() {
    let world_tour = WorldTour::simulate(&[], DEFAULT_LOOT_CHANCE);
    for class in Class::ALL {
        assert!(world_tour.class(*class).map_or(true, |c| c.is_empty()));
    }

    let world_tour = WorldTour::simulate(&example_items_with_chances(), DEFAULT_LOOT_CHANCE);
    assert!(world_tour.class(Class::Dk).map_or(false, |c| c.is_empty()));
    assert!(rates(&world_tour, Class::Monk, LootCategory::Shoulders).is_none());
    assert!(rates(&world_tour, Class::Monk, LootCategory::Agi1hWeapon).is_none());
}

#[test]
fn world_tour_is_monotonic_in_considered_items() {
    let mut items: Vec<Item> = Vec::new();
    let mut previous = 0;
    for i in 0..8u32 {
        let mut item = head(50 + i, "Helm", "Boss", &[Spec::WarriorArms]);
        let chance = [100, 50, 33, 25, 10, 5, 1, 20][i as usize];
        item.drop_chances = DropChances::from_specs(BTreeMap::from([(Spec::WarriorArms, chance)]));
        items.push(item);

        let world_tour = WorldTour::simulate(&items, DEFAULT_LOOT_CHANCE);
        let warrior = rates(&world_tour, Class::Warrior, LootCategory::Head).unwrap();
        let current = warrior.spec(Spec::WarriorArms).unwrap();
        assert!(current >= previous, "{} < {}", current, previous);
        assert_eq!(warrior.sources, items.len());
        previous = current;
    }
}

#[test]
fn world_tour_statistics_items() {
    let world_tour = WorldTour::simulate(&example_items_with_chances(), DEFAULT_LOOT_CHANCE);
    let statistics = world_tour.statistics_items("Hc");
    assert_eq!(statistics.len(), 2);

    let monk = statistics
        .iter()
        .find(|item| item.loot_category == "Head (Monk)")
        .unwrap();
    assert_eq!(monk.item_id, 0);
    assert_eq!(monk.name, "Head items for (Monk)");
    assert_eq!(monk.from, "Head (Monk)");
    assert_eq!(monk.week, "Hc");
    assert_eq!(monk.dropped_in, "1st/2nd week");
    assert_eq!(monk.gear_type, "1st/2nd week");
    assert_eq!(monk.gear_slot, "Head");
    assert_eq!(monk.boss, "3 sources");
    assert_eq!(monk.specs, Class::Monk.specs());
    assert_eq!(monk.drop_chances.spec(Spec::MonkWw), 35);
    assert_eq!(monk.drop_chances.class(Class::Monk), Some(35));
    assert_eq!(monk.loot_category(), Some(LootCategory::Head));
    assert!(is_statistics_label(&monk.loot_category));
}

#[test]
fn role_override_trinkets() {
    let overrides = TestOverrides {
        roles: HashMap::from([(500, vec![Role::Heal]), (501, vec![Role::Tank, Role::Dps])]),
        ..Default::default()
    };
    let mut raw = raw_item("Vial", "Trinket", "", "Alpha", &[]);
    raw.primary_stats = BTreeMap::from([("Intellect".to_string(), 100)]);
    let healer = Item::new(500, raw.clone(), &overrides);
    let mixed = Item::new(501, raw.clone(), &overrides);
    let plain = Item::new(502, raw, &overrides);

    assert_eq!(healer.gear_type, "Heal Trinket");
    assert_eq!(healer.stats, "Heal Int");
    assert_eq!(healer.loot_category, "HealTrinket");
    assert!(healer.specs.iter().all(|spec| spec.role() == Role::Heal));
    assert_eq!(healer.specs.len(), 7);

    assert_eq!(mixed.gear_type, "Trinket");
    assert_eq!(mixed.stats, "Int");
    assert!(mixed.specs.iter().all(|spec| spec.role() != Role::Heal));

    assert_eq!(plain.gear_type, "Trinket");
    assert_eq!(plain.loot_category, "AnyTrinket");
    assert_eq!(plain.specs.len(), Spec::ALL.len());

    let mut items = vec![healer];
    assign_drop_chances(&mut items).unwrap();
    let world_tour = WorldTour::simulate(&items, DEFAULT_LOOT_CHANCE);
    let monk = rates(&world_tour, Class::Monk, LootCategory::HealTrinket).unwrap();
    assert_eq!(monk.spec(Spec::MonkMw), Some(20));
    assert_eq!(monk.spec(Spec::MonkWw), Some(0));
    assert!(rates(&world_tour, Class::Monk, LootCategory::AnyTrinket).is_none());
    assert!(rates(&world_tour, Class::Monk, LootCategory::DpsTrinket).is_none());
}

#[test]
fn dropped_by_override_only_fills_missing_values() {
    let overrides = TestOverrides {
        dropped_by: HashMap::from([(600, "Mistcaller".to_string()), (601, "Mistcaller".to_string())]),
        ..Default::default()
    };
    let missing = Item::new(600, raw_item("Mask", "Head", "Cloth", "", &[]), &overrides);
    let present = Item::new(601, raw_item("Mask", "Head", "Cloth", "Tred'ova", &[]), &overrides);
    let unknown = Item::new(602, raw_item("Mask", "Head", "Cloth", "", &[]), &overrides);

    assert_eq!(missing.dropped_by, "Mistcaller");
    assert_eq!(present.dropped_by, "Tred'ova");
    assert_eq!(unknown.dropped_by, "");
}

#[test]
fn zone_name_shortening() {
    assert_eq!(shorten_zone_name("The Necrotic Wake"), "Necrotic Wake");
    assert_eq!(shorten_zone_name("Ara-Kara, City of Echoes"), "Ara-Kara");
    assert_eq!(shorten_zone_name("Priory of the Sacred Flame"), "Priory");
    assert_eq!(shorten_zone_name("The Rookery"), "Rookery");
    assert_eq!(shorten_zone_name("Cinderbrew Meadery"), "Cinderbrew");
    assert_eq!(shorten_zone_name("Operation: Floodgate"), "Operation:");
    assert_eq!(shorten_zone_name("Exceptionallylongsingleword"), "Exceptionallylongsingleword");
    assert_eq!(shorten_zone_name("the siege of boralus harbor"), "the");
}

#[test]
fn zone_load_applies_fix_tables() {
    let mut source = MemorySource::default();
    source.zones.insert(
        9354,
        RawZone {
            name: "Siege of Boralus".to_string(),
            bosses: Vec::new(),
            item_ids: vec![1, 2, 3],
        },
    );
    source.items.insert(
        159322,
        raw_item("Cannon", "Trinket", "", "Hadal Darkfathom", &[]),
    );

    let zone = Zone::load(9354, &source, &FixTables);
    assert_eq!(zone.zone_id, 9354);
    assert_eq!(zone.name, "Siege of Boralus");
    assert_eq!(zone.item_ids.len(), 33);
    assert_eq!(zone.short_name, "Siege of Boralus");
    assert_eq!(zone.week, "m0");
    assert_eq!(zone.bosses.len(), 4);
    assert_eq!(zone.items.len(), 33);
    assert_eq!(Npc::boss_position("Viq'Goth", &zone.bosses), "4 of 4");

    // 레코드가 없는 아이템은 보정 테이블에서 보스를 받음
    let viqgoth = zone.items.iter().find(|item| item.item_id == 231826).unwrap();
    assert_eq!(viqgoth.dropped_by, "Viq'Goth");
    assert_eq!(viqgoth.boss, "4 of 4");
    assert_eq!(viqgoth.from, "Siege of Boralus");

    let cannon = zone.items.iter().find(|item| item.item_id == 159322).unwrap();
    assert_eq!(cannon.boss, "3 of 4");
    assert_eq!(cannon.gear_type, "Trinket");
}

#[test]
fn content_group_deduplicates_items_by_id() {
    let mut source = MemorySource::default();
    for zone_id in [1, 2] {
        source.zones.insert(
            zone_id,
            RawZone {
                name: format!("Zone {}", zone_id),
                bosses: vec![Npc::new(1, "Alpha", "alpha")],
                item_ids: vec![10, 11],
            },
        );
    }
    source.items.insert(10, raw_item("Xal", "Head", "Leather", "Alpha", &[Spec::MonkWw]));
    source.items.insert(11, raw_item("Yew", "Head", "Leather", "Alpha", &[Spec::MonkWw]));

    let config = crate::config::GroupConfig {
        name: "Dup Test".to_string(),
        abbr: "S1".to_string(),
        zone_ids: vec![1, 2, 3],
        zone_list: None,
        exclude_zone_ids: vec![3],
    };
    let mut group = ContentGroup::new(&config, &source);
    assert_eq!(group.zone_ids, vec![1, 2]);
    assert_eq!(group.output_folder(), "dup_test");

    group.load_zones(&source, &TestOverrides::default());
    let items = group.items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].from, "Zone 1");

    group.calculate_drop_chances().unwrap();
    assert!(group
        .zones
        .iter()
        .flat_map(|zone| zone.items.iter())
        .all(|item| item.drop_chances.spec(Spec::MonkWw) == 50));

    let mut empty = Item::empty();
    empty.name = "synthetic".to_string();
    let with_synthetic = dedup_items(&[empty.clone(), empty]);
    assert_eq!(with_synthetic.len(), 2);
}

fn shuffled_items() -> Vec<Item> {
    let bosses = vec![
        Npc::new(1, "Alpha", "alpha"),
        Npc::new(2, "Beta", "beta"),
        Npc::new(3, "Gamma", "gamma"),
    ];
    let overrides = TestOverrides::default();
    let records = [
        (70, "Helm", "Head", "Leather", "Alpha", "Hc"),
        (71, "Cowl", "Head", "Cloth", "Beta", "m0"),
        (72, "Band", "Finger", "", "Gamma", "both"),
        (73, "Edge", "One-Hand", "Dagger", "Alpha", "Hc"),
        (74, "Idol", "Trinket", "", "Beta", "m0"),
        (75, "Boots", "Feet", "Plate", "Gamma", ""),
        (76, "Helm", "Head", "Leather", "Alpha", "Hc"),
        (77, "Reins", "", "", "Alpha", "Hc"),
    ];
    let mut items: Vec<Item> = records
        .iter()
        .map(|(id, name, slot, gear_type, boss, week)| {
            let mut item = Item::new(*id, raw_item(name, slot, gear_type, boss, &[]), &overrides);
            item.add_zone_data("The Dawnbreaker", "Dawnbreaker", week, &bosses);
            item
        })
        .collect();
    assign_drop_chances(&mut items).unwrap();
    let world_tour = WorldTour::simulate(&items, DEFAULT_LOOT_CHANCE);
    items.extend(world_tour.statistics_items("Hc"));
    items
}

fn read_tree(dir: &Path) -> BTreeMap<String, String> {
    let mut files = BTreeMap::new();
    for entry in std::fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        files.insert(name, std::fs::read_to_string(&path).unwrap());
    }
    files
}

#[test]
fn export_is_independent_of_input_order() {
    let items = shuffled_items();
    let mut reversed = items.clone();
    reversed.reverse();
    let mut rotated = items.clone();
    rotated.rotate_left(5);

    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let third = tempfile::tempdir().unwrap();
    export::export_items_to_csv_for_all_specs_and_classes(&items, first.path(), 24).unwrap();
    export::export_items_to_csv_for_all_specs_and_classes(&reversed, second.path(), 24).unwrap();
    export::export_items_to_csv_for_all_specs_and_classes(&rotated, third.path(), 24).unwrap();

    let expected = read_tree(first.path());
    assert_eq!(expected.len(), Class::ALL.len() + 3);
    assert_eq!(read_tree(second.path()), expected);
    assert_eq!(read_tree(third.path()), expected);

    // 탈것은 어떤 표에도 나오지 않음
    assert!(!expected["all_columns.csv"].contains("Reins"));
}

#[test]
fn class_view_week_breaks_and_header_repeat() {
    let columns = columns_for_classes(&[Class::Monk]);
    let header = columns.join(",");

    let statistic = |category: LootCategory| {
        let mut item = Item::empty();
        item.loot_category = format!("{} (Monk)", category.abbr());
        item.gear_slot = category.ingame_name().to_string();
        item.week = "Hc".to_string();
        item.specs = Class::Monk.specs();
        item
    };
    let items = vec![
        statistic(LootCategory::Chest),
        statistic(LootCategory::Head),
        statistic(LootCategory::Shoulders),
    ];
    let csv = render(items, &columns, ViewOptions::CLASS).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    let blank = ",".repeat(columns.len() - 1);

    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], header);
    assert!(lines[1].contains("Head (Monk)"));
    assert!(lines[2].contains("Shoulders (Monk)"));
    assert_eq!(lines[3], blank);
    assert_eq!(lines[4], header);
    assert!(lines[5].contains("Chest (Monk)"));
    // ID 0은 빈 칸
    assert!(lines[1].starts_with(",Hc,"));

    // 빈 줄/헤더 반복이 없는 합본 표
    let items = vec![statistic(LootCategory::Chest), statistic(LootCategory::Head), statistic(LootCategory::Shoulders)];
    let csv = render(items, &columns, ViewOptions::COMBINED).unwrap();
    assert_eq!(csv.lines().count(), 4);
}

#[test]
fn class_view_blank_row_on_week_change_and_hidden_category() {
    let columns = columns_for_classes(&[Class::Monk]);
    let mut first = head(80, "Helm", "Alpha", &[Spec::MonkWw]);
    first.week = "both".to_string();
    let mut second = head(81, "Helm", "Alpha", &[Spec::MonkWw]);
    second.week = "m0".to_string();

    let csv = render(vec![second.clone(), first.clone()], &columns, ViewOptions::CLASS).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("80,both,"));
    assert_eq!(lines[2], ",".repeat(columns.len() - 1));
    assert!(lines[3].starts_with("81,m0,"));
    // 일반 아이템의 분류 컬럼은 빈 칸
    assert_eq!(lines[1].split(',').nth(4), Some(""));

    // 디버그 표는 분류를 그대로 두고 아이템의 모든 키를 헤더로 씀
    let csv = render(vec![second, first], &columns, ViewOptions::DEBUG).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("item_id,name,item_level,bind,gear_slot"));
    assert!(lines[0].ends_with("spec_ids,spec_names"));
    assert!(lines[1].contains(",Head,"));
}

fn grid_for(count: u32) -> String {
    let mut items: Vec<Item> = (0..count)
        .map(|i| head(1000 + i, &format!("Helm {:02}", i), "Alpha", &[Spec::MonkWw]))
        .collect();
    assign_drop_chances(&mut items).unwrap();
    render_grid(&items, &columns_for_classes(Class::ALL), 24).unwrap()
}

#[test]
fn grid_has_fixed_rows_per_class_and_slot() {
    let slots = crate::wow::EquipSlot::ALL.len();
    for count in [0, 24, 40] {
        let grid = grid_for(count);
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines.len(), 1 + Class::ALL.len() * slots * 24, "{} items", count);
        assert!(lines[0].starts_with("category,item_id,week,"));

        let monk_head: Vec<&str> = lines
            .iter()
            .copied()
            .filter(|line| line.starts_with("Monk Head #"))
            .collect();
        assert_eq!(monk_head.len(), 24);
        assert!(monk_head[0].starts_with("Monk Head #1,"));
        assert!(monk_head[23].starts_with("Monk Head #24,"));
        // 두 번째 칸(item_id)이 채워진 행
        let filled_rows = monk_head
            .iter()
            .filter(|line| line.split(',').nth(1).map_or(false, |id| !id.is_empty()))
            .count();
        assert_eq!(filled_rows, (count as usize).min(24));
        assert!(lines.iter().filter(|line| line.starts_with("Dk Head #")).all(|line| line.ends_with(",,")));
    }
}

#[test]
fn json_source_pipeline_writes_every_output() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let write = |relative: &str, text: &str| {
        let path = input.path().join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, text).unwrap();
    };
    write("zone_lists/dungeons.json", "[1, 2, 99]");
    write(
        "zones/1.json",
        r#"{ "name": "The Necrotic Wake", "bosses": [{ "npc_id": 1, "display_name": "Alpha", "slug": "alpha" }], "item_ids": [10, 11] }"#,
    );
    write(
        "zones/2.json",
        r#"{ "name": "Priory of the Sacred Flame", "bosses": [{ "npc_id": 2, "display_name": "Beta", "slug": "beta" }], "item_ids": [12] }"#,
    );
    let item_json = |name: &str, boss: &str, spec_ids: &str| {
        format!(
            r#"{{ "name": "{}", "gear_slot": "Head", "gear_type": "Leather", "primary_stats": {{ "Agility": 100 }},
                 "secondary_stats": {{ "Haste": 60, "Mastery": 40 }}, "dropped_by": "{}", "spec_ids": [{}] }}"#,
            name, boss, spec_ids
        )
    };
    write("items/10.json", &item_json("Xal", "Alpha", "269"));
    write("items/11.json", &item_json("Yew", "Alpha", "269, 259"));
    write("items/12.json", &item_json("Zed", "Beta", "269"));

    let toml = format!(
        r#"
[input]
dir = '{}'

[output]
dir = '{}'

[validation]
expected_dir = '{}'

[combined]
name = "All Groups"

[[groups]]
name = "Test Group"
abbr = "Hc"
zone_list = "dungeons"
exclude_zone_ids = [99]
"#,
        input.path().display(),
        output.path().display(),
        output.path().display(),
    );
    let config: Config = toml::from_str(&toml).unwrap();
    assert_eq!(config.sim.loot_chance, 0.2);
    assert_eq!(config.export.grid_rows, 24);

    let source = JsonDirSource::new(&config.input.dir);
    pipeline::run(&config, &source, &FixTables).unwrap();

    let group_dir = output.path().join("test_group");
    let monk_csv = std::fs::read_to_string(group_dir.join("items/Monk.csv")).unwrap();
    let expected = [
        "item_id,week,from,boss,loot_category,gear_type,stats,Monk,MonkBrew,MonkMw,MonkWw,spec_ids,spec_names",
        r#",Hc,Head (Monk),3 sources,Head (Monk),1st/2nd week,,35%,0%,0%,,"268, 270, 269","MonkBrew, MonkMw, MonkWw""#,
        ",,,,,,,,,,,,",
        "10,,Necrotic Wake,1 of 1,,Leather,H>M,50%,0%,0%,,269,MonkWw",
        r#"11,,Necrotic Wake,1 of 1,,Leather,H>M,50%,0%,0%,,"269, 259","MonkWw, RogueSin""#,
        "12,,Priory,1 of 1,,Leather,H>M,100%,0%,0%,,269,MonkWw",
    ];
    assert_eq!(monk_csv, expected.join("\n") + "\n");

    let monk_json = std::fs::read_to_string(group_dir.join("sim/Monk.json")).unwrap();
    let expected_json = r#"{
    "Head": {
        "MonkBrew": "0%",
        "MonkMw": "0%",
        "MonkWw": "35%",
        "Available": "3 sources",
        "Monk": "35%"
    }
}"#;
    assert_eq!(monk_json, expected_json);
    assert_eq!(std::fs::read_to_string(group_dir.join("sim/Dk.json")).unwrap(), "{}");

    for name in ["all_items.csv", "all_columns.csv", "all_class_slots.csv", "Dk.csv"] {
        assert!(group_dir.join("items").join(name).is_file(), "{}", name);
    }
    assert!(output.path().join("all_groups/items/all_items.csv").is_file());

    assert!(validation::validate(output.path(), output.path(), "test_group").unwrap());
    let other = tempfile::tempdir().unwrap();
    let copy = other.path().join("test_group/items/all_columns.csv");
    std::fs::create_dir_all(copy.parent().unwrap()).unwrap();
    std::fs::write(&copy, "item_id\n").unwrap();
    assert!(!validation::validate(output.path(), other.path(), "test_group").unwrap());
}

fn csv_records(text: &str) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers = reader.headers().unwrap().iter().map(str::to_string).collect();
    let rows = reader
        .records()
        .map(|record| record.unwrap().iter().map(str::to_string).collect())
        .collect();
    (headers, rows)
}

#[test]
fn combined_export_keeps_first_group_item_and_all_statistics() {
    let mut source = MemorySource::default();
    source.zones.insert(
        1,
        RawZone {
            name: "First Zone".to_string(),
            bosses: vec![Npc::new(1, "Alpha", "alpha")],
            item_ids: vec![10, 11],
        },
    );
    source.zones.insert(
        2,
        RawZone {
            name: "Second Zone".to_string(),
            bosses: vec![Npc::new(1, "Alpha", "alpha"), Npc::new(2, "Beta", "beta")],
            item_ids: vec![11, 12],
        },
    );
    source.items.insert(10, raw_item("Xal", "Head", "Leather", "Alpha", &[Spec::MonkWw]));
    source.items.insert(11, raw_item("Yew", "Head", "Leather", "Alpha", &[Spec::MonkWw]));
    source.items.insert(12, raw_item("Zed", "Head", "Leather", "Beta", &[Spec::MonkWw]));

    let output = tempfile::tempdir().unwrap();
    let toml = format!(
        r#"
[input]
dir = "./unused"

[output]
dir = '{}'

[combined]
name = "All Groups"

[[groups]]
name = "First Group"
abbr = "Hc"
zone_ids = [1]

[[groups]]
name = "Second Group"
abbr = "M0"
zone_ids = [2]
"#,
        output.path().display(),
    );
    let config: Config = toml::from_str(&toml).unwrap();
    pipeline::run(&config, &source, &TestOverrides::default()).unwrap();

    let text = std::fs::read_to_string(output.path().join("all_groups/items/all_columns.csv")).unwrap();
    let (headers, rows) = csv_records(&text);
    let column = |name: &str| headers.iter().position(|header| header == name).unwrap();
    let (item_id, monk, week, category) = (column("item_id"), column("Monk"), column("week"), column("loot_category"));

    // 두 번째 그룹에서는 보스 A에 혼자라 100%지만, 먼저 나온 그룹의 값이 남음
    let shared: Vec<&Vec<String>> = rows.iter().filter(|row| row[item_id] == "11").collect();
    assert_eq!(shared.len(), 1);
    assert_eq!(shared[0][monk], "50%");
    assert_eq!(rows.iter().filter(|row| row[item_id] == "12").count(), 1);

    let mut statistics_weeks: Vec<&str> = rows
        .iter()
        .filter(|row| row[category] == "Head (Monk)")
        .map(|row| row[week].as_str())
        .collect();
    statistics_weeks.sort_unstable();
    assert_eq!(statistics_weeks, vec!["Hc", "M0"]);

    let second = std::fs::read_to_string(output.path().join("second_group/items/all_columns.csv")).unwrap();
    let (headers, rows) = csv_records(&second);
    let item_id = headers.iter().position(|header| header == "item_id").unwrap();
    let monk = headers.iter().position(|header| header == "Monk").unwrap();
    let shared = rows.iter().find(|row| row[item_id] == "11").unwrap();
    assert_eq!(shared[monk], "100%");
}
