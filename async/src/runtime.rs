/// Options for the runtime that drives the client's futures.
///
/// Without a blocking thread limit the runtime runs every task on the
/// thread that calls `block_on`.
#[derive(Debug, Clone, Default)]
pub struct Builder {
    pub max_blocking_threads: Option<u16>,
}

impl Builder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_blocking_threads: None,
        }
    }

    pub fn max_blocking_threads<T: Into<Option<u16>>>(
        &mut self,
        max_blocking_threads: T,
    ) -> &mut Self {
        self.max_blocking_threads = max_blocking_threads.into();
        self
    }
}
