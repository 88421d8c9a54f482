//! solbuild CLI
//!
//! Usage: solbuild [OPTIONS]
//!
//! Without options, compiles `contracts/Campaign.sol` and writes one JSON
//! artifact per contract into `build/`.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;

use solbuild::config::Config;
use solbuild::presentation::{
    create_build_use_case, create_renderer, BuildRenderer, Cli, OutputFormat,
};
use solbuild::BuildReport;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .init();

    let format = OutputFormat::from_json_flag(cli.json);
    // config errors happen before `output.unicode` is known
    let early = create_renderer(format, false, cli.verbose);

    let (cwd, config) = match load_config(&cli, early.as_ref()) {
        Ok(loaded) => loaded,
        Err(err) => return fail(early.as_ref(), &err, &mut io::stderr()),
    };

    let unicode = config.output.unicode && io::stdout().is_terminal();
    let renderer = create_renderer(format, unicode, cli.verbose);

    match run(&config, &cwd) {
        Ok(report) => {
            let mut stdout = io::stdout().lock();
            if let Err(err) = renderer
                .render_report(&report, &mut stdout)
                .and_then(|()| stdout.flush())
            {
                tracing::warn!(error = %err, "failed to print build report");
            }
            ExitCode::SUCCESS
        }
        Err(err) => fail(renderer.as_ref(), &err, &mut io::stderr()),
    }
}

/// Resolve config: CLI flags over the project file over defaults
fn load_config(cli: &Cli, renderer: &dyn BuildRenderer) -> Result<(PathBuf, Config)> {
    let cwd = std::env::current_dir().context("could not determine working directory")?;
    let loaded = Config::load_project(&cwd, cli.config.as_deref())?;

    match &loaded.file {
        Some(file) => tracing::info!(file = %file.display(), "loaded config"),
        None => tracing::debug!("no config file, using defaults"),
    }
    renderer.render_warnings(&loaded.warnings, &mut io::stderr())?;

    Ok((cwd, loaded.config.with_overrides(&cli.overrides())))
}

fn run(config: &Config, cwd: &Path) -> Result<BuildReport> {
    let options = config.build_options(cwd);
    let use_case = create_build_use_case(config);
    Ok(use_case.execute(&options)?)
}

fn fail(renderer: &dyn BuildRenderer, err: &anyhow::Error, out: &mut dyn Write) -> ExitCode {
    tracing::debug!(error = ?err, "build failed");
    if let Err(write_err) = renderer.render_error(err, out).and_then(|()| out.flush()) {
        tracing::warn!(error = %write_err, "failed to print build error");
    }
    ExitCode::FAILURE
}
