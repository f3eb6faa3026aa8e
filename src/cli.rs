use std::time::Duration;

use anyhow::Result;
use camino::Utf8PathBuf as PathBuf;
use clap::Parser;

#[derive(Parser, Clone, Debug)]
#[command(version)]
pub struct Args {
    /// JSON file with the records to serve
    #[clap(long, env, value_name = "FILE", default_value = "data.json")]
    pub data_file: PathBuf,

    /// Port to listen on
    #[clap(short, long, env, default_value_t = 9000)]
    pub port: u16,

    /// How long to wait for pending requests on shutdown, in seconds
    #[clap(
        long = "shutdown-timeout-sec",
        env = "SHUTDOWN_TIMEOUT_SEC",
        value_name = "SECONDS",
        value_parser = parse_seconds,
        default_value = "10"
    )]
    pub shutdown_timeout: Duration,

    /// Log the duration of each span
    #[clap(long, env)]
    pub log_span_durations: bool,

    #[clap(long, env, hide(true))]
    pub sentry_dsn: Option<String>,

    #[clap(long, env, hide(true), default_value_t = 0.001)]
    pub sentry_traces_sample_rate: f32,
}

fn parse_seconds(s: &str) -> Result<Duration> {
    Ok(Duration::from_secs(s.parse()?))
}
