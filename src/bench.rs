use anyhow::{Context, Result};
// src/bench.rs
//
// Entry points behind the CLI subcommands: load the source, recommend a
// ceiling, run the trials and write the two reversed files.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::advisor::suggest_ceiling;
use crate::bench_opt::{BenchOpt, output_base_name};
use crate::session::Session;
use crate::trial::TrialRunner;
use crate::utils::{load_source, write_output};

fn load(source: &Path) -> Result<Vec<u8>> {
    let buf = load_source(source)
        .with_context(|| format!("Error reading source file {}", source.display()))?;
    log::info!("Loaded {} bytes from {}", buf.len(), source.display());
    Ok(buf)
}

fn runner_for(opt: &BenchOpt) -> Result<TrialRunner> {
    let runner = TrialRunner::new(opt.stack_bytes(), opt.frame_budget())
        .context("Error building recursive worker thread")?;
    match runner.frame_budget() {
        Some(budget) => log::info!(
            "Recursive worker: {} MiB stack, {} frame budget",
            opt.stack_mib,
            budget
        ),
        None => log::info!("Recursive worker: {} MiB stack, unguarded", opt.stack_mib),
    }
    Ok(runner)
}

/// Write `(recursive, iterative)` outputs; returns their paths.
pub fn write_results(
    opt: &BenchOpt,
    source: &Path,
    rc: &[u8],
    it: &[u8],
) -> Result<(PathBuf, PathBuf)> {
    let (rc_path, it_path) = opt.output_paths(source);
    write_output(&rc_path, rc)
        .with_context(|| format!("Error writing {}", rc_path.display()))?;
    write_output(&it_path, it)
        .with_context(|| format!("Error writing {}", it_path.display()))?;
    log::info!(
        "Reversed output written to {} and {}",
        rc_path.display(),
        it_path.display()
    );
    Ok((rc_path, it_path))
}

/// One non-interactive round configured entirely by `opt`.
pub fn main_bench(source: &Path, opt: &BenchOpt) -> Result<()> {
    let src = load(source)?;
    let recommended = suggest_ceiling(src.len());
    log::info!("Recommended depth ceiling: {}", recommended);

    let config = opt.trial_config(recommended)?;
    let runner = runner_for(opt)?;

    let mut it = vec![0u8; src.len()];
    let mut rc = vec![0u8; src.len()];
    let report = runner.run(&src, &mut it, &mut rc, config)?;

    let name = output_base_name(source);
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", report.render(&name)).context("Error writing report")?;
    stdout.flush().context("Error writing report")?;

    if opt.write_outputs {
        write_results(opt, source, &rc, &it)?;
    }
    Ok(())
}

/// The prompt-driven loop; asks for the file when `source` is `None`.
pub fn main_interactive(source: Option<&Path>, opt: &BenchOpt) -> Result<()> {
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout());
    session.banner()?;

    let source = match source {
        Some(path) => path.to_path_buf(),
        None => session.ask_source()?,
    };
    let src = load(&source)?;
    let recommended = suggest_ceiling(src.len());
    let runner = runner_for(opt)?;

    let mut it = vec![0u8; src.len()];
    let mut rc = vec![0u8; src.len()];
    let name = output_base_name(&source);
    let reports = session.run_rounds(&name, &src, &mut it, &mut rc, &runner, recommended)?;

    if reports.is_empty() {
        log::warn!("No round completed; nothing to write");
    } else if opt.write_outputs {
        write_results(opt, &source, &rc, &it)?;
    }
    Ok(())
}

/// Print the recommended ceiling for a file or a raw length.
pub fn main_suggest(source: Option<&Path>, len: Option<usize>) -> Result<usize> {
    let len = match (source, len) {
        (_, Some(len)) => len,
        (Some(path), None) => load(path)?.len(),
        (None, None) => anyhow::bail!("Either a file or --len must be given"),
    };
    let recommended = suggest_ceiling(len);
    println!("{}", recommended);
    Ok(recommended)
}
