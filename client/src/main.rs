#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::sync::atomic::{AtomicUsize, Ordering};

use igrest_client::{Error, VersionFetcher};

fn init_logger() {
    pretty_env_logger::formatted_builder()
        .parse_default_env()
        .format(|buf, record| {
            static MAX_TARGET_PREFIX_LEN: AtomicUsize = AtomicUsize::new(0);

            use std::io::Write as _;

            use pretty_env_logger::env_logger::fmt::Color;

            let target = record.target();

            let mut style = buf.style();
            let level = record.level();
            let level_style = style.set_color(match level {
                log::Level::Error => Color::Red,
                log::Level::Warn => Color::Yellow,
                log::Level::Info => Color::Green,
                log::Level::Debug => Color::Blue,
                log::Level::Trace => Color::Magenta,
            });

            let ts = buf.timestamp_millis();
            let target_prefix_len = "[]".len() + target.len();

            let max_target_prefix_len = MAX_TARGET_PREFIX_LEN
                .fetch_max(target_prefix_len, Ordering::SeqCst)
                .max(target_prefix_len);
            let target_padding = max_target_prefix_len - target_prefix_len;

            write!(
                buf,
                "[{level}] [{ts}] [{target}] {empty:<target_padding$}",
                empty = "",
                level = level_style.value(level),
            )?;

            writeln!(buf, "{args}", args = record.args())
        })
        .init();
}

fn main() -> Result<(), Error> {
    init_logger();

    let runtime = igrest_async::runtime::Builder::new().build()?;

    runtime.block_on(async {
        let fetcher = VersionFetcher::new()?;
        igrest_client::run(&fetcher, &mut std::io::stdout()).await
    })
}
