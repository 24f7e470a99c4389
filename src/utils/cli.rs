//! Command-line argument parsing and help for fx.
//!
//! When invoked with no args, fx prints the encoded state of the working
//! directory and exits. `--serve` keeps reading navigation events from stdin.

use crate::config::Config;

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    Run { path: Option<String>, serve: bool },
    Init,
    Exit,
}

pub fn handle_args() -> CliAction {
    let args: Vec<String> = std::env::args().skip(1).collect();
    parse_args(&args)
}

/// Parses the arguments after the program name.
pub fn parse_args(args: &[String]) -> CliAction {
    let mut path = None;
    let mut serve = false;

    for arg in args {
        match arg.as_str() {
            "--version" | "-v" => {
                print_version();
                return CliAction::Exit;
            }
            "-h" | "--help" => {
                print_help();
                return CliAction::Exit;
            }
            "--init" => return CliAction::Init,
            "--serve" | "-s" => serve = true,
            arg if !arg.starts_with('-') && !arg.trim().is_empty() => {
                if path.is_some() {
                    eprintln!("Error: fx accepts only one PATH.");
                    eprintln!("Usage: fx [--serve] [PATH]");
                    return CliAction::Exit;
                }
                path = Some(arg.to_string());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                eprintln!("Try --help for available options");
                return CliAction::Exit;
            }
        }
    }

    CliAction::Run { path, serve }
}

fn print_version() {
    println!("fx {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"fx - directory navigation widget backend

USAGE:
  fx [--serve] [PATH]

PATH:
  Directory to start in (defaults to start_dir from the config, then the current directory)

OPTIONS:
  -s, --serve             Read navigation events from stdin, one JSON object per line
      --init              Generate the default configuration at {}
  -h, --help              Print help information
  -v, --version           Display the current installed version of fx

EVENTS:
  {{"current_path": "/home", "selected_directory": "user"}}   descend into a child
  {{"current_path": "/home", "selected_directory": -1}}       go to the parent

ENVIRONMENT:
  FX_CONFIG               Override the default config path
  FX_LOG                  Log filter for stderr output (e.g. "debug")
"#,
        Config::default_path().display()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_runs_once() {
        assert_eq!(
            parse_args(&[]),
            CliAction::Run {
                path: None,
                serve: false
            }
        );
    }

    #[test]
    fn serve_with_path_in_any_order() {
        let expected = CliAction::Run {
            path: Some("/tmp".to_string()),
            serve: true,
        };
        assert_eq!(parse_args(&args(&["--serve", "/tmp"])), expected);
        assert_eq!(parse_args(&args(&["/tmp", "-s"])), expected);
    }

    #[test]
    fn two_paths_exit() {
        assert_eq!(parse_args(&args(&["/a", "/b"])), CliAction::Exit);
    }

    #[test]
    fn unknown_flag_exits() {
        assert_eq!(parse_args(&args(&["--bogus"])), CliAction::Exit);
    }

    #[test]
    fn init_flag() {
        assert_eq!(parse_args(&args(&["--init"])), CliAction::Init);
    }
}
