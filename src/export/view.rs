//! 정렬된 아이템 목록을 CSV 텍스트로 변환
//!
//! 스프레드시트에서 바로 보기 위한 규칙이 섞여 있습니다.
//! - 주차가 바뀌면 빈 줄 (`empty_rows`)
//! - 통계 행이 두 개 나올 때마다 다음 행 앞에 빈 줄 + 헤더를 다시 씀 (`empty_rows`)
//! - 일반 아이템의 분류 컬럼은 비움 (`all_columns`가 아닐 때)
//! - ID 0은 빈 칸

use anyhow::Context;

use super::sort::sort_items;
use crate::item::{is_statistics_label, CsvRow, Item, COLUMN_ITEM_ID, COLUMN_LOOT_CATEGORY, COLUMN_WEEK};

#[derive(Debug, Clone, Copy, Default)]
pub struct ViewOptions {
    /// 모든 컬럼을 쓰는 디버그 표
    pub all_columns: bool,
    pub empty_rows: bool,
}

impl ViewOptions {
    pub const CLASS: ViewOptions = ViewOptions {
        all_columns: false,
        empty_rows: true,
    };
    pub const COMBINED: ViewOptions = ViewOptions {
        all_columns: false,
        empty_rows: false,
    };
    pub const DEBUG: ViewOptions = ViewOptions {
        all_columns: true,
        empty_rows: false,
    };
}

pub fn new_writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

pub fn finish(writer: csv::Writer<Vec<u8>>) -> anyhow::Result<String> {
    let bytes = writer.into_inner().context("could not flush csv writer")?;
    Ok(String::from_utf8(bytes)?)
}

/// 아이템을 정렬하고, 직업 확률과 같은 전문화 확률을 지운 뒤 표로 씁니다
///
/// 디버그 표는 첫 아이템이 가진 모든 키를 헤더로 씁니다.
pub fn render(mut items: Vec<Item>, columns: &[String], options: ViewOptions) -> anyhow::Result<String> {
    sort_items(&mut items);
    for item in &mut items {
        item.drop_chances.remove_redundant_spec_rates();
    }

    let columns: Vec<String> = match items.first() {
        Some(first) if options.all_columns => first.csv_row_data().keys().map(str::to_string).collect(),
        _ => columns.to_vec(),
    };
    let blank_row = vec![""; columns.len()];

    let mut writer = new_writer();
    writer.write_record(&columns)?;

    let mut write_header_next = false;
    let mut previous_week: Option<String> = None;
    let mut statistics_rows = 0;

    for item in &items {
        let values = row_values(&item.csv_row_data(), &columns, options.all_columns);
        let current_week = columns
            .iter()
            .position(|column| column == COLUMN_WEEK)
            .map(|index| values[index].clone())
            .unwrap_or_default();

        if options.empty_rows && previous_week.as_ref().map_or(false, |week| *week != current_week) {
            writer.write_record(&blank_row)?;
        }

        if write_header_next {
            write_header_next = false;
            writer.write_record(&blank_row)?;
            writer.write_record(&columns)?;
        }

        writer.write_record(&values)?;
        previous_week = Some(current_week);

        let category = columns
            .iter()
            .position(|column| column == COLUMN_LOOT_CATEGORY)
            .map(|index| values[index].as_str())
            .unwrap_or("");
        if is_statistics_label(category) {
            statistics_rows += 1;
            if statistics_rows >= 2 && options.empty_rows {
                write_header_next = true;
                statistics_rows = 0;
            }
        }
    }

    finish(writer)
}

/// 컬럼 순서대로 값 추출 (없는 키는 빈 칸)
pub fn row_values(row: &CsvRow, columns: &[String], all_columns: bool) -> Vec<String> {
    columns
        .iter()
        .map(|column| {
            let value = row.get(column).unwrap_or("");
            if column == COLUMN_ITEM_ID && value == "0" {
                return String::new();
            }
            if !all_columns && column == COLUMN_LOOT_CATEGORY && !is_statistics_label(value) {
                return String::new();
            }
            value.to_string()
        })
        .collect()
}
