//! main.rs
//! Entry point for fx

use fileexplorer::FileExplorer;
use fileexplorer::component::EventHost;
use fileexplorer::config::Config;
use fileexplorer::host::LineHost;
use fileexplorer::utils::cli::{CliAction, handle_args};
use fileexplorer::utils::{is_directory, readable_path, resolve_start_dir};

use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();

    let (path, serve) = match handle_args() {
        CliAction::Exit => return ExitCode::SUCCESS,
        CliAction::Init => {
            let path = Config::default_path();
            return match Config::generate_default(&path) {
                Ok(()) => {
                    println!("Default config generated at {}", readable_path(&path));
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("[fx] Error: {}", e);
                    ExitCode::FAILURE
                }
            };
        }
        CliAction::Run { path, serve } => (path, serve),
    };

    match run(path.as_deref(), serve) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[fx] Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(path_arg: Option<&str>, serve: bool) -> Result<(), Box<dyn Error>> {
    let config = Config::load();
    let navigator = config.navigator();

    let start = resolve_start_dir(path_arg, config.general().start_dir())?;
    if !is_directory(&start) {
        return Err(format!("Path '{}' cannot be opened.", readable_path(&start)).into());
    }
    let value = navigator.state_at(start)?;

    let mut host = LineHost::new();
    let explorer = FileExplorer::new(
        Some(value),
        config.widget().clone(),
        navigator,
        if serve {
            Some(&mut host as &mut dyn EventHost)
        } else {
            None
        },
    )?;

    let stdout = io::stdout();
    if serve {
        host.run(&explorer, io::stdin().lock(), stdout.lock())?;
    } else if let Some(line) = explorer.postprocess(Some(explorer.value()))? {
        writeln!(stdout.lock(), "{}", line)?;
    }
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("FX_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
