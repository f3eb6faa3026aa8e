// GPS data server, serves ranges of a fixed set of geolocation records.

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use anyhow::{Context, Result};
use clap::Parser;
use prometheus_client::metrics::info::Info;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use crate::cli::Args;
use crate::context::AppContext;
use crate::http_server::Server as HttpServer;

mod cli;
mod context;
mod http_server;
mod metrics;
mod query;
mod storage;
mod types;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn setup_tracing(args: &Args) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::builder().parse_lossy(
        std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV).unwrap_or("info".to_string()),
    );
    let fmt = tracing_subscriber::fmt::layer()
        .compact()
        .with_span_events(if args.log_span_durations {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        })
        .with_filter(env_filter);
    tracing_subscriber::registry()
        .with(fmt)
        .with(sentry::integrations::tracing::layer())
        .try_init()?;
    Ok(())
}

fn setup_sentry(args: &Args) -> Option<sentry::ClientInitGuard> {
    args.sentry_dsn.as_ref().map(|dsn| {
        sentry::init((
            dsn.as_str(),
            sentry::ClientOptions {
                release: sentry::release_name!(),
                traces_sample_rate: args.sentry_traces_sample_rate,
                ..Default::default()
            },
        ))
    })
}

fn create_cancellation_token() -> Result<CancellationToken> {
    use tokio::signal::unix::{signal, SignalKind};

    let token = CancellationToken::new();
    let copy = token.clone();
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;
    tokio::spawn(async move {
        tokio::select!(
            _ = sigint.recv() => {
                tracing::info!("Received SIGINT");
            },
            _ = sigterm.recv() => {
                tracing::info!("Received SIGTERM");
            },
        );
        copy.cancel();
    });
    Ok(token)
}

async fn run(args: Args) -> Result<()> {
    setup_tracing(&args)?;
    let _sentry_guard = setup_sentry(&args);

    let dataset = storage::load_dataset(&args.data_file)
        .with_context(|| format!("Couldn't load dataset from {}", args.data_file))?;
    if dataset.is_empty() {
        tracing::warn!("Data file {} contains no records", args.data_file);
    } else {
        tracing::info!("Loaded {} records from {}", dataset.len(), args.data_file);
    }
    metrics::DATASET_RECORDS.set(dataset.len() as i64);
    let context = AppContext::new(dataset, args.data_file.clone());

    let info = Info::new(vec![(
        "version".to_owned(),
        env!("CARGO_PKG_VERSION").to_owned(),
    )]);
    let mut metrics_registry = prometheus_client::registry::Registry::default();
    metrics::register_metrics(&mut metrics_registry, info);

    let cancellation_token = create_cancellation_token()?;
    HttpServer::new(context, metrics_registry)
        .run(args.port, args.shutdown_timeout, cancellation_token)
        .await?;

    tracing::info!("Shutting down");
    Ok(())
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(args))
}
