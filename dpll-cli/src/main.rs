mod parsers;
mod result;

use std::fs::File;
use std::io::stdin;
use std::io::Read;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use dpll_core::branching::MaxOccurrence;
use dpll_core::statistics::configure_statistic_logging;
use dpll_core::ClauseDatabase;
use dpll_core::DpllSolver;
use log::debug;
use log::error;
use log::info;
use log::Level;
use log::LevelFilter;
use parsers::dimacs::parse_cnf;
use result::DpllError;
use result::DpllResult;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The instances to solve, given in the DIMACS CNF format. The instances are solved in the
    /// order in which they are given and one verdict is printed per instance. If no instance is
    /// given, a single instance is read from standard input.
    instance_paths: Vec<PathBuf>,

    /// Enables log message output from the solver
    #[arg(short = 'v', long = "verbose", default_value_t = false)]
    verbose: bool,

    /// Enables logging of statistics from the solver
    #[arg(short = 's', long = "log-statistics", default_value_t = false)]
    log_statistics: bool,

    /// If `--verbose` is enabled removes the timestamp information from the log messages
    #[arg(long = "omit-timestamp", default_value_t = false)]
    omit_timestamp: bool,

    /// If `--verbose` is enabled removes the call site information from the log messages.
    /// Call site is the file and line in it that originated the message.
    #[arg(long = "omit-call-site", default_value_t = false)]
    omit_call_site: bool,
}

fn configure_logging(
    verbose: bool,
    log_statistics: bool,
    omit_timestamp: bool,
    omit_call_site: bool,
) -> std::io::Result<()> {
    if log_statistics {
        configure_statistic_logging("c STAT", None, None);
    }

    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    // Log messages go to stderr, stdout only carries verdicts and statistics.
    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "c ")?;
            if record.level() != Level::Info && !omit_timestamp {
                write!(buf, "{} ", buf.timestamp())?;
            }
            write!(buf, "{} ", record.level())?;
            if record.level() != Level::Info && !omit_call_site {
                write!(
                    buf,
                    "[{}:{}] ",
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0)
                )?;
            }
            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stderr)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> DpllResult<()> {
    let args = Args::parse();

    configure_logging(
        args.verbose,
        args.log_statistics,
        args.omit_timestamp,
        args.omit_call_site,
    )?;

    dpll_core::print_dpll_assert_warning_message!();

    if args.instance_paths.is_empty() {
        debug!("No instance given, reading from stdin");
        return cnf_problem(stdin().lock());
    }

    for instance_path in &args.instance_paths {
        debug!("Solving {}", instance_path.display());

        let instance_file = File::open(instance_path).map_err(|e| {
            DpllError::FileReadingError(e, instance_path.display().to_string())
        })?;

        cnf_problem(instance_file)?;
    }

    Ok(())
}

fn cnf_problem(instance: impl Read) -> DpllResult<()> {
    let database = parse_cnf::<ClauseDatabase>(instance)?;

    let mut solver = DpllSolver::new(MaxOccurrence::default());
    let result = solver.solve(database);

    println!("{result}");
    solver.log_statistics();

    Ok(())
}
