use clap::Parser;
use std::process::ExitCode;
use fl_insurance::{config::Args, run, Config};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) resolve config ───────────────────────────────────────────
    let cfg = Config::from(Args::parse());
    info!(
        archive = %cfg.archive.display(),
        entry = %cfg.entry,
        out_dir = %cfg.out_dir.display(),
        top = cfg.top_n,
        "startup"
    );

    // ─── 3) run the pipeline ─────────────────────────────────────────
    match run(&cfg) {
        Ok(summary) => {
            info!(
                counties = summary.counties,
                tiv_2012 = summary.tiv_2012,
                "all done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("run aborted: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
