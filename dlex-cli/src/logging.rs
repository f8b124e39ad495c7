//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分区域日志控制。日志写到 stderr，
//! stdout 只留给 token 输出。

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use dlex_config::{LogFormat, LogTarget};
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry,
};

use crate::config::LogConfig;

/// Build filter targets from the log configuration
pub fn build_targets(log_config: &LogConfig) -> Targets {
    LogTarget::ALL
        .iter()
        .fold(Targets::new().with_default(log_config.global), |targets, &target| {
            targets.with_target(target.target(), log_config.level_for(target))
        })
}

/// 使用指定格式和日志配置初始化日志系统
///
/// With `file`, events are also appended to that file without ANSI colors.
pub fn init_with_file(log_config: &LogConfig, format: LogFormat, file: Option<&Path>) -> io::Result<()> {
    let targets = build_targets(log_config);

    let file_layer = match file {
        Some(path) => {
            let handle = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(handle))
                    .with_filter(targets.clone()),
            )
        }
        None => None,
    };

    let console_layer = create_format_layer(format, io::stderr).with_filter(targets);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(io::Error::other)
}

/// Create formatter layer based on format
fn create_format_layer<W, F>(format: LogFormat, make_writer: F) -> Box<dyn Layer<Registry> + Send + Sync>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}
