use clap::Parser;
use tokio::time::Instant;

use crate::args::RunArgs;
use crate::config::RunConfig;
use crate::error::AppResult;
use crate::{http, logger, metrics};

pub(crate) fn run() -> AppResult<()> {
    let args = RunArgs::parse();

    logger::init_logging(args.verbose);

    let config = RunConfig::try_from(args)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(config))
}

async fn run_async(config: RunConfig) -> AppResult<()> {
    let client = http::build_client(&config)?;

    let start = Instant::now();
    let outcomes = http::run_pool(&config, client).await?;
    let total_time = start.elapsed();

    let report = metrics::aggregate(total_time, &outcomes);
    metrics::print_report(&report);

    Ok(())
}
