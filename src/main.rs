use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use ferrous_reverse::bench::{main_bench, main_interactive, main_suggest};
use ferrous_reverse::bench_opt::BenchOpt;
use ferrous_reverse::defaults;

#[derive(Parser)]
#[command(name = "ferrous-reverse")]
#[command(about = "Compare iterative and depth-bounded recursive reversal of a file held in memory", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one timed round and write both reversed files
    Bench {
        /// Input file ('-' for stdin, .gz is decompressed)
        #[arg(value_name = "FILE")]
        source: PathBuf,

        /// Depth ceiling for the recursive helper [default: recommended]
        #[arg(short = 'l', long, value_name = "INT", allow_negative_numbers = true)]
        limit: Option<i64>,

        /// Number of trial runs per engine
        #[arg(short = 'n', long, value_name = "INT", default_value_t = defaults::TRIALS, allow_negative_numbers = true)]
        trials: i64,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Prompt for file, ceiling and trial count, repeating until told to stop
    Interactive {
        /// Input file; asked for when omitted
        #[arg(value_name = "FILE")]
        source: Option<PathBuf>,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Print the recommended depth ceiling
    Suggest {
        /// Input file whose length is used
        #[arg(value_name = "FILE", required_unless_present = "len")]
        source: Option<PathBuf>,

        /// Buffer length in bytes instead of a file
        #[arg(long, value_name = "INT")]
        len: Option<usize>,

        /// Verbose level: 1=error, 2=warning, 3=message, 4+=debugging
        #[arg(short = 'v', long, value_name = "INT", default_value_t = defaults::VERBOSITY)]
        verbosity: i32,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Directory for the reversed output files
    #[arg(short = 'o', long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Do not write the reversed files
    #[arg(long)]
    no_output: bool,

    /// Stack size of the recursive worker thread in MiB
    #[arg(long, value_name = "INT", default_value_t = defaults::STACK_MIB)]
    stack_mib: usize,

    /// Let oversized ceilings overflow the stack instead of refusing them
    #[arg(long)]
    unguarded: bool,

    /// Verbose level: 1=error, 2=warning, 3=message, 4+=debugging
    #[arg(short = 'v', long, value_name = "INT", default_value_t = defaults::VERBOSITY)]
    verbosity: i32,
}

impl RunArgs {
    fn into_opt(self) -> BenchOpt {
        BenchOpt {
            out_dir: self.out_dir,
            write_outputs: !self.no_output,
            stack_mib: self.stack_mib,
            guarded: !self.unguarded,
            verbosity: self.verbosity,
            ..BenchOpt::default()
        }
    }
}

fn init_logger(verbosity: i32) {
    // 1=error, 2=warning, 3=message, 4=debug, 5+=trace
    let log_level = match verbosity {
        v if v <= 1 => log::LevelFilter::Error,
        2 => log::LevelFilter::Warn,
        3 => log::LevelFilter::Info,
        4 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp(None) // Don't show timestamps
        .format_target(false) // Don't show module names
        .init();
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Bench {
            source,
            limit,
            trials,
            run,
        } => {
            let mut opt = run.into_opt();
            opt.ceiling = limit;
            opt.trials = trials;
            init_logger(opt.verbosity);

            if !opt.guarded {
                log::warn!(
                    "Stack guard disabled: an oversized ceiling will abort the process"
                );
            }
            main_bench(&source, &opt)
        }

        Commands::Interactive { source, run } => {
            let opt = run.into_opt();
            init_logger(opt.verbosity);
            main_interactive(source.as_deref(), &opt)
        }

        Commands::Suggest {
            source,
            len,
            verbosity,
        } => {
            init_logger(verbosity);
            main_suggest(source.as_deref(), len).map(|_| ())
        }
    };

    if let Err(e) = result {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
