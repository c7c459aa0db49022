// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! vmux - editor sessions inside tmux

mod exit_error;

use anyhow::Result;
use clap::Parser;
use exit_error::ExitError;
use std::ffi::OsString;
use vmux_adapters::{exec, ProcessTransport, TmuxAdapter, TracedMultiplexer, TracedTransport};
use vmux_engine::{absolutize, detect, Config, Dispatcher, EditorRegistry, Outcome, SessionBroker};

const OUTSIDE_TMUX_WARNING: &str =
    "Running vmux outside TMUX, no enhanced functionality available";

#[derive(Parser, Debug)]
#[command(
    name = "vmux",
    about = "Open files in the editor session of the current tmux session",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Arguments passed to the editor unchanged
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<OsString>,
}

/// Parse the command line into editor arguments.
///
/// clap swallows a leading `--`; vim gives it meaning, so it is put back.
fn editor_args<I, T>(argv: I) -> Result<Vec<OsString>, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let cli = Cli::try_parse_from(&argv)?;
    let mut args = cli.args;
    if argv.get(1).is_some_and(|first| first == "--") {
        args.insert(0, OsString::from("--"));
    }
    Ok(args)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    match run().await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            match e.downcast_ref::<ExitError>() {
                Some(exit) => {
                    if !exit.message.is_empty() {
                        eprintln!("{}", exit.message);
                    }
                    std::process::exit(exit.code);
                }
                None => {
                    eprintln!("Error: {}", format_error(&e));
                    std::process::exit(1);
                }
            }
        }
    }
}

/// Format an anyhow error, skipping causes already in the top-level message.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();
    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));
    if chain_redundant {
        return top;
    }
    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn setup_logging(debug: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("off")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false),
        )
        .init();
}

async fn run() -> Result<i32> {
    let args = match editor_args(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };
    let config = Config::from_env();
    setup_logging(config.debug);

    let transport = TracedTransport::new(ProcessTransport::new());
    let editors = EditorRegistry::standard(&config, transport);
    let default = editors
        .select(config.default_editor.as_deref())
        .map_err(|e| ExitError::new(e.exit_code(), e.to_string()))?;
    tracing::debug!(
        editor = default.name(),
        binary = %default.binary().path.display(),
        "selected editor"
    );

    let cwd = std::env::current_dir()?;
    let args = absolutize(&args, &cwd);

    let mux = TracedMultiplexer::new(TmuxAdapter::new());
    let broker = match detect(&config, &mux).await {
        Ok(ctx) => Some(SessionBroker::new(ctx, mux)),
        Err(e) => {
            tracing::debug!(error = %e, "no tmux context");
            eprintln!("{OUTSIDE_TMUX_WARNING}");
            None
        }
    };

    let outcome = Dispatcher::new(broker.as_ref(), &editors, default)
        .dispatch(&args)
        .await
        .map_err(|e| ExitError::new(e.exit_code(), format!("Error: {e}")))?;

    match outcome {
        Outcome::Exit(code) => Ok(code),
        Outcome::Launch(launch) => {
            tracing::debug!("executing command: {}", launch.command_line());
            let err = exec(&launch);
            let code = if err.kind() == std::io::ErrorKind::NotFound { 3 } else { 1 };
            Err(ExitError::new(
                code,
                format!("Error: cannot run {}: {err}", launch.program.display()),
            )
            .into())
        }
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
