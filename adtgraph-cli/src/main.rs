mod app;
mod commands;
mod output;

use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        eprintln!("\nCancelled.");
        std::process::exit(130);
    })
    .expect("failed to set Ctrl+C handler");

    let cli = Cli::parse();

    // adtgraph debug output only with --verbose; RUST_LOG overrides
    if !cli.global.json {
        let level = if cli.global.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("adtgraph", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    match &cli.command {
        Command::Info { path, degrees } => commands::info::run(path, *degrees, &cli.global),
        Command::Dfs { path, from } => commands::traverse::run_dfs(path, *from, &cli.global),
        Command::Bfs { path, from } => commands::traverse::run_bfs(path, *from, &cli.global),
        Command::Topo { path } => commands::topo::run(path, &cli.global),
        Command::Cycles { path, strategy } => commands::cycles::run(path, *strategy, &cli.global),
        Command::Dot { path, name } => commands::dot::run(path, name.as_deref()),
    }
}
