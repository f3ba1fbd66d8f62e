use std::path::Path;

use anyhow::Context;

/// 상위 디렉터리를 만들고 파일을 통째로 씁니다
pub fn write_textfile<P: AsRef<Path>>(path: P, text: &str) -> anyhow::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("could not create directory {}", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("could not write {}", path.display()))?;
    Ok(())
}

pub fn read_textfile<P: AsRef<Path>>(path: P) -> anyhow::Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).with_context(|| format!("could not read {}", path.display()))
}
