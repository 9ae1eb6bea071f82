use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Env};
use log::{debug, error};

use costar::metrics;

mod cli;
mod util;
mod cmd_cast;
mod cmd_credits;
mod cmd_doctor;
mod cmd_path;
mod cmd_status;

fn init_logger() {
    // Уровень берём из RUST_LOG, иначе дефолт — info.
    // Пример: RUST_LOG=debug costar path "Kevin Bacon" "Tom Hanks"
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    let res = run();
    log_metrics();
    if let Err(e) = res {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn log_metrics() {
    let m = metrics::snapshot();
    debug!(
        "metrics: searches={} avg_films_per_search={:.1} actor_hit_ratio={:.2} decoded={} faults={}",
        m.searches_total,
        m.avg_films_per_search(),
        m.actor_hit_ratio(),
        m.records_decoded,
        m.decode_faults
    );
}

fn run() -> Result<()> {
    let cli = cli::Cli::parse();
    match cli.cmd {
        cli::Cmd::Path { start, end, data, max_hops, json } =>
            cmd_path::exec(data, start, end, max_hops, json),

        cli::Cmd::Credits { actor, data, json } =>
            cmd_credits::exec(data, actor, json),

        cli::Cmd::Cast { title, year, data, json } =>
            cmd_cast::exec(data, title, year, json),

        cli::Cmd::Status { data, json } =>
            cmd_status::exec(data, json),

        cli::Cmd::Doctor { data, json } =>
            cmd_doctor::exec(data, json),
    }
}
