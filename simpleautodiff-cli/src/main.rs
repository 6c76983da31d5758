use clap::{Parser, Subcommand};
use log::debug;
use simpleautodiff_core::GradCheckConfig;
use std::io::{self, Write};
use std::process::ExitCode;

mod error;
mod functions;
mod input;
mod report;

use error::CliError;
use functions::Function;
use report::Mode;

#[derive(Parser)]
#[command(name = "simpleautodiff")]
#[command(about = "Forward- and reverse-mode derivatives of small scalar functions", long_about = None)]
struct Cli {
    /// Raise the log level (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a function's graph and print its derivatives
    Run {
        /// Function to differentiate (see `list`)
        #[arg(short, long, default_value = "sin_mul")]
        function: String,

        /// Comma-separated input values; prompted for on stdin when omitted
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
        inputs: Vec<String>,

        /// Which derivative sweeps to print
        #[arg(short, long, value_enum, default_value_t = Mode::Both)]
        mode: Mode,

        /// Step for the central-difference check
        #[arg(long, default_value_t = GradCheckConfig::default().epsilon)]
        epsilon: f64,

        /// Allowed gap between analytical and numerical derivatives
        #[arg(long, default_value_t = GradCheckConfig::default().tolerance)]
        tolerance: f64,

        /// Skip the finite-difference check
        #[arg(long)]
        no_check: bool,
    },
    /// List the built-in functions
    List,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn execute(command: Commands) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Run {
            function,
            inputs,
            mode,
            epsilon,
            tolerance,
            no_check,
        } => {
            let function: Function = function.parse()?;
            let names: Vec<String> = (1..=function.arity()).map(|i| format!("x{}", i)).collect();
            let stdin = io::stdin();
            let values = input::collect_values(&inputs, &names, &mut stdin.lock(), &mut out)?;
            debug!("{} at {:?}", function, values);

            let config = GradCheckConfig { epsilon, tolerance };
            report::run(&mut out, function, &values, mode, &config, !no_check)?;
        }
        Commands::List => report::list(&mut out)?,
    }
    out.flush()?;
    Ok(())
}

/// Writes `e` once on `err`; the `Debug` form only goes to the `debug` log.
fn report_failure<W: Write>(err: &mut W, e: &CliError) {
    debug!("{:?}", e);
    let _ = writeln!(err, "Error: {}", e);
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match execute(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_failure(&mut io::stderr().lock(), &e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_negative_inputs() {
        let cli = Cli::try_parse_from([
            "simpleautodiff",
            "run",
            "-f",
            "exp_div",
            "-i",
            "-1,2",
            "--mode",
            "forward",
            "--no-check",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 0);
        match cli.command {
            Commands::Run {
                function,
                inputs,
                mode,
                no_check,
                ..
            } => {
                assert_eq!(function, "exp_div");
                assert_eq!(inputs, vec!["-1".to_string(), "2".to_string()]);
                assert_eq!(mode, Mode::Forward);
                assert!(no_check);
            }
            Commands::List => panic!("Expected the run subcommand"),
        }
    }

    #[test]
    fn test_parse_run_defaults() {
        let cli = Cli::try_parse_from(["simpleautodiff", "run"]).unwrap();
        match cli.command {
            Commands::Run {
                function,
                inputs,
                mode,
                epsilon,
                tolerance,
                no_check,
            } => {
                assert_eq!(function, "sin_mul");
                assert!(inputs.is_empty(), "Missing inputs are prompted for");
                assert_eq!(mode, Mode::Both);
                assert_eq!(epsilon, GradCheckConfig::default().epsilon);
                assert_eq!(tolerance, GradCheckConfig::default().tolerance);
                assert!(!no_check);
            }
            Commands::List => panic!("Expected the run subcommand"),
        }
    }

    #[test]
    fn test_parse_verbosity_and_list() {
        let cli = Cli::try_parse_from(["simpleautodiff", "-vv", "list"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::List));

        let cli = Cli::try_parse_from(["simpleautodiff", "run", "-v", "--epsilon", "1e-3"]).unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Run { epsilon, .. } => assert_eq!(epsilon, 1e-3),
            Commands::List => panic!("Expected the run subcommand"),
        }
    }

    #[test]
    fn test_failure_reported_once() {
        let mut err = Vec::new();
        report_failure(&mut err, &CliError::UnknownOperation("tan".to_string()));
        let text = String::from_utf8(err).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("Error: Unknown function 'tan'"));
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["simpleautodiff", "run", "--mode", "sideways"]).is_err());
    }
}
