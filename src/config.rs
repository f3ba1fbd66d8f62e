use std::path::PathBuf;

use serde::Deserialize;

use crate::export::DEFAULT_GRID_ROWS;
use crate::world_tour::DEFAULT_LOOT_CHANCE;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub sim: SimConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    /// 있으면 모든 그룹을 합친 표도 씁니다
    pub combined: Option<CombinedConfig>,
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
}

#[derive(Debug, Deserialize)]
pub struct InputConfig {
    /// 수집된 JSON 레코드 루트
    pub dir: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./output")
}

#[derive(Debug, Deserialize)]
pub struct SimConfig {
    /// 보스 처치 한 번에 전리품을 받을 확률
    #[serde(default = "default_loot_chance")]
    pub loot_chance: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            loot_chance: default_loot_chance(),
        }
    }
}

fn default_loot_chance() -> f64 {
    DEFAULT_LOOT_CHANCE
}

#[derive(Debug, Deserialize)]
pub struct ExportConfig {
    /// 고정 크기 표의 (직업, 슬롯) 당 행 수
    #[serde(default = "default_grid_rows")]
    pub grid_rows: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            grid_rows: default_grid_rows(),
        }
    }
}

fn default_grid_rows() -> usize {
    DEFAULT_GRID_ROWS
}

#[derive(Debug, Default, Deserialize)]
pub struct ValidationConfig {
    /// 기대 출력 디렉터리 (그룹 폴더 구조 동일)
    pub expected_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct CombinedConfig {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroupConfig {
    pub name: String,
    /// 주차 태그 (`Hc`, `M0` 등)
    pub abbr: String,
    #[serde(default)]
    pub zone_ids: Vec<u32>,
    /// `zone_ids`가 비어 있을 때 존 ID를 읽을 존 목록 이름
    pub zone_list: Option<String>,
    #[serde(default)]
    pub exclude_zone_ids: Vec<u32>,
}
