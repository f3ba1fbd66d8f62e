//! 수집된 레코드 읽기
//!
//! HTML 수집/정규식 추출은 별도 도구가 담당하고, 이 크레이트는 그 결과 JSON만 읽습니다.
//!
//! ```text
//! <dir>/items/<item_id>.json
//! <dir>/zones/<zone_id>.json
//! <dir>/zone_lists/<name>.json
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::item::RawItem;
use crate::zone::RawZone;

pub trait ContentSource {
    fn item(&self, item_id: u32) -> Option<RawItem>;

    fn zone(&self, zone_id: u32) -> Option<RawZone>;

    /// 존 목록 페이지(예: `war-within/dungeons`)에 있는 존 ID
    fn zone_list(&self, name: &str) -> Vec<u32>;
}

/// 존 목록 레코드: ID 배열 또는 `{ "zones": { "<id>": "<name>" } }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ZoneListRecord {
    Ids(Vec<u32>),
    // untagged 버퍼링을 거치면 맵 키가 문자열로만 넘어옵니다
    Named { zones: BTreeMap<String, String> },
}

#[derive(Debug, Clone)]
pub struct JsonDirSource {
    dir: PathBuf,
}

impl JsonDirSource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// 레코드가 없거나 비어 있거나 깨져 있으면 경고 후 `None`
    fn read_record<T: DeserializeOwned>(&self, path: PathBuf) -> Option<T> {
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Could not read {}: {}", path.display(), e);
                return None;
            }
        };
        if text.trim().is_empty() {
            tracing::warn!("Record is empty: {}", path.display());
            return None;
        }

        match serde_json::from_str(&text).with_context(|| format!("could not parse {}", path.display())) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("{:#}", e);
                None
            }
        }
    }
}

impl ContentSource for JsonDirSource {
    fn item(&self, item_id: u32) -> Option<RawItem> {
        self.read_record(self.dir.join("items").join(format!("{}.json", item_id)))
    }

    fn zone(&self, zone_id: u32) -> Option<RawZone> {
        self.read_record(self.dir.join("zones").join(format!("{}.json", zone_id)))
    }

    fn zone_list(&self, name: &str) -> Vec<u32> {
        let path = self.dir.join("zone_lists").join(format!("{}.json", name));
        match self.read_record::<ZoneListRecord>(path) {
            Some(ZoneListRecord::Ids(ids)) => ids,
            Some(ZoneListRecord::Named { zones }) => {
                let mut ids: Vec<u32> = zones
                    .keys()
                    .filter_map(|key| match key.trim().parse::<u32>() {
                        Ok(zone_id) => Some(zone_id),
                        Err(_) => {
                            tracing::warn!("Zone list {} has a non-numeric zone id '{}'", name, key);
                            None
                        }
                    })
                    .collect();
                ids.sort_unstable();
                ids
            }
            None => Vec::new(),
        }
    }
}
