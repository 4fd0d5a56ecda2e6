#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

#[cfg(feature = "tokio")]
pub mod tokio;

pub mod runtime;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
}

#[cfg(feature = "tokio")]
pub use crate::tokio::runtime::Runtime;

#[cfg(feature = "tokio")]
impl runtime::Builder {
    /// # Errors
    ///
    /// * If the underlying `Runtime` fails to build
    pub fn build(&self) -> Result<Runtime, Error> {
        crate::tokio::runtime::build_runtime(self)
    }
}
