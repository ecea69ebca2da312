use anyhow::Context;
use hhub::domain::config::ApiConfig;
use hhub::kernel::config::load_config;
use hhub_server::{Server, init_logging};
use std::path::PathBuf;

#[cfg(feature = "profiling")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

#[hhub_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    #[cfg(feature = "profiling")]
    let _profiler = dhat::Profiler::new_heap();

    // An optional config path as the only argument; otherwise `hhub.*` plus `HHUB__` overrides.
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let cfg: ApiConfig = load_config(path).context("Critical: Configuration is malformed")?;

    let _log = init_logging(&cfg.log)?;

    Server::builder().config(cfg).build().await?.run().await
}
