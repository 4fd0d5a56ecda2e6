pub use tokio::runtime::Runtime;

use crate::{Error, runtime::Builder};

pub(crate) fn build_runtime(builder: &Builder) -> Result<Runtime, Error> {
    builder
        .max_blocking_threads
        .map_or_else(current_thread, multi_thread)
}

fn current_thread() -> Result<Runtime, Error> {
    log::debug!("build_runtime: current_thread");
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

#[cfg(feature = "rt-multi-thread")]
fn multi_thread(threads: u16) -> Result<Runtime, Error> {
    log::debug!("build_runtime: multi_thread max_blocking_threads={threads}");
    Ok(tokio::runtime::Builder::new_multi_thread()
        .max_blocking_threads(usize::from(threads))
        .enable_all()
        .build()?)
}

#[cfg(not(feature = "rt-multi-thread"))]
fn multi_thread(threads: u16) -> Result<Runtime, Error> {
    log::warn!("build_runtime: ignoring max_blocking_threads={threads} without rt-multi-thread");
    current_thread()
}
