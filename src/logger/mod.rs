use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// 初始化日志，输出到 stderr，避免和结果混在一起。
///
/// 默认只显示 warn 及以上，`verbose` 时打开 debug，设置了 `RUST_LOG` 则以它为准。
pub fn init_logger(verbose: bool) {
    let default_level = default_level(verbose);
    let _ = Builder::from_env(Env::default().default_filter_or(default_level.as_str()))
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init();
}

fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}
