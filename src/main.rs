use clap::{CommandFactory, Parser};
use midils::{ipc::WriterIpcSender, locations, logger, ports::HostedPorts, report};
use std::io::Write;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log verbosity level
    #[arg(long, default_value_t = false)]
    verbose: bool,

    /// Write logs to a file, `~/.midils/log/midils.log` when no path is given
    #[arg(long, num_args(0..=1))]
    log: Option<Option<std::path::PathBuf>>,

    /// shell to generate the completion script for
    #[arg(long, value_enum)]
    completions: Option<clap_complete::Shell>,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if let Some(shell) = args.completions {
        let mut stdout = std::io::stdout();
        stdout.flush()?;
        clap_complete::generate(shell, &mut Cli::command(), "midils", &mut stdout);
        return Ok(());
    }

    if let Some(log) = args.log {
        start_logger(log, args.verbose)?;
    }

    if let Err(e) = run() {
        if logger::is_active() {
            log::error!("{e}");
        } else {
            use colored::*;
            eprintln!("{} {}", "Error:".red().bold(), format!("{e}").bold());
        }
    }

    Ok(())
}

fn start_logger(file: Option<std::path::PathBuf>, verbose: bool) -> anyhow::Result<()> {
    let file = match file {
        Some(path) => path,
        None => locations::log_file()
            .ok_or_else(|| anyhow::anyhow!("could not resolve the default log file location"))?,
    };

    if let Some(dir) = file.parent() {
        std::fs::create_dir_all(dir)?;
    }

    logger::start("midils", file, verbose)
}

fn run() -> anyhow::Result<()> {
    let inputs = HostedPorts::inputs()?;
    let outputs = HostedPorts::outputs()?;

    report::list_ports(&inputs, &outputs, &mut WriterIpcSender::stdout())
}
