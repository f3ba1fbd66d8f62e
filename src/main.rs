use crate::config::Config;
use crate::fixes::FixTables;
use crate::source::JsonDirSource;
use anyhow::Context;
use std::borrow::Cow;
use std::path::Path;
use tracing_subscriber::fmt::writer::MakeWriterExt;

mod config;
mod content_group;
mod drop_chance;
mod export;
mod fixes;
mod item;
mod npc;
mod persistence;
mod pipeline;
mod source;
mod validation;
mod world_tour;
mod wow;
mod zone;

#[cfg(test)]
mod test;

fn main() {
    // 로깅 초기화: 콘솔 + 일별 로테이션 파일
    let file_appender = tracing_appender::rolling::Builder::new()
        .rotation(tracing_appender::rolling::Rotation::DAILY)
        .filename_prefix("loot-tables")
        .filename_suffix("log")
        .build("logs")
        .expect("initializing rolling file appender failed");

    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into())
        )
        .with_writer(std::io::stderr.and(non_blocking))
        .with_ansi(true)
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let config_path = if args.is_empty() {
        Cow::from("./config.toml")
    } else {
        Cow::from(args.remove(0))
    };

    let config = match get_config(&*config_path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load config: {}", e);
            return;
        }
    };

    tracing::info!("Starting code execution...");
    let source = JsonDirSource::new(&config.input.dir);
    if let Err(e) = pipeline::run(&config, &source, &FixTables) {
        tracing::error!("Pipeline error: {}", e);
        tracing::error!("  {:?}", e);
    }
}

fn get_config<P: AsRef<Path>>(path: P) -> anyhow::Result<Config> {
    let toml = std::fs::read_to_string(path).context("could not read config file")?;
    let config = toml::from_str(&toml).context("could not parse config file")?;

    Ok(config)
}
