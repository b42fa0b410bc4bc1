//! Batch entry point: reformat the amount column of every uploaded CSV.
//!
//! Invoked with no arguments. Lists `uploads/*.csv`, transforms each file and
//! writes it under `processed/`, then exits. The first failure stops the run.

use tracing::{error, info};

use valor_etl::pipeline;
use valor_etl::storage::S3Store;
use valor_etl::utils::logger;
use valor_etl::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    logger::init_logging(&config.log);

    let store = S3Store::new(&config.storage)?;

    info!(bucket = %config.storage.bucket, "starting pipeline run");
    match pipeline::run(&store).await {
        Ok(report) => {
            info!(files = report.processed.len(), "pipeline finished");
            Ok(())
        }
        Err(e) => {
            error!(error = %format!("{e:#}"), "pipeline failed");
            Err(e)
        }
    }
}
