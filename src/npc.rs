//! 보스(NPC) 정보
//!
//! 존의 보스 목록 순서가 처치 순서이며, 아이템의 `"k of n"` 위치 표기에 쓰입니다.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Npc {
    pub npc_id: i64,
    pub display_name: String,
    /// URL에 쓰이는 이름 (예: `viqgoth`)
    pub slug: String,
}

impl Npc {
    pub fn new(npc_id: i64, display_name: &str, slug: &str) -> Self {
        Self {
            npc_id,
            display_name: display_name.to_string(),
            slug: slug.to_string(),
        }
    }

    /// 표시 이름을 URL 이름으로 변환
    ///
    /// 아포스트로피는 지우고, 소문자로 바꾼 뒤 `[a-z0-9]`가 아닌 연속 구간을 `-` 하나로 바꿉니다.
    pub fn slug(display_name: &str) -> String {
        let lowered = display_name.replace('\'', "").to_lowercase();
        let mut slug = String::with_capacity(lowered.len());
        let mut in_run = false;
        for c in lowered.chars() {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                slug.push(c);
                in_run = false;
            } else if !in_run {
                slug.push('-');
                in_run = true;
            }
        }
        slug
    }

    pub fn has_matching_name(&self, boss_name: &str) -> bool {
        let matching_slug = self.slug.to_lowercase() == Npc::slug(boss_name);
        matching_slug || self.display_name == boss_name
    }

    /// 보스 목록에서 `boss_name`의 위치 (`"2 of 4"`), 없으면 `"? of ?"`
    pub fn boss_position(boss_name: &str, bosses: &[Npc]) -> String {
        bosses
            .iter()
            .position(|boss| boss.has_matching_name(boss_name))
            .map(|index| format!("{} of {}", index + 1, bosses.len()))
            .unwrap_or_else(|| "? of ?".to_string())
    }
}
