//! 출력 검증
//!
//! 그룹의 `items/all_columns.csv`를 기대 출력 디렉터리의 같은 경로 파일과 비교합니다.
//! 불일치는 경고만 남깁니다.

use std::path::Path;

use crate::export::{ALL_COLUMNS_CSV, ITEMS_FOLDER};
use crate::persistence::read_textfile;

pub fn validate(output_dir: &Path, expected_dir: &Path, group_folder: &str) -> anyhow::Result<bool> {
    let relative = Path::new(group_folder).join(ITEMS_FOLDER).join(ALL_COLUMNS_CSV);
    let actual = read_textfile(output_dir.join(&relative))?;
    let expected = match read_textfile(expected_dir.join(&relative)) {
        Ok(expected) => expected,
        Err(e) => {
            tracing::warn!("No expected output to validate against: {:#}", e);
            return Ok(false);
        }
    };

    if actual == expected {
        tracing::info!("Validation was passed.");
        return Ok(true);
    }

    tracing::warn!("output does not match expected output! ({})", relative.display());
    report_differences(&actual, &expected);
    Ok(false)
}

/// 첫 번째로 다른 줄과 줄 수 차이를 경고로 남깁니다
pub fn report_differences(actual: &str, expected: &str) {
    let actual_lines: Vec<&str> = actual.lines().collect();
    let expected_lines: Vec<&str> = expected.lines().collect();

    let first_difference = expected_lines
        .iter()
        .zip(actual_lines.iter())
        .position(|(expected, actual)| expected != actual);
    if let Some(index) = first_difference {
        tracing::warn!("Line {} differs:", index + 1);
        tracing::warn!("Expected: {}", expected_lines[index]);
        tracing::warn!("Actual:   {}", actual_lines[index]);
    }

    if expected_lines.len() != actual_lines.len() {
        tracing::warn!(
            "File lengths differ. Expected: {} lines, actual: {} lines.",
            expected_lines.len(),
            actual_lines.len()
        );
    }
}
