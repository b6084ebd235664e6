//! OneMax GA CLI - run a batch of independent GA runs and report averages.

use std::str::FromStr;

use anyhow::{bail, Context};
use u_onemax::ga::{ExperimentRunner, ExperimentSummary, GaConfig, GenerationStats, Observer};

const USAGE: &str = "\
Usage: u-onemax [options]

Evolve bit strings toward all ones and report the mean terminal generation.

Options:
  --population-size <n>   Individuals per generation (default: 50)
  --genome-length <n>     Bits per genome (default: 10)
  --crossover-rate <p>    Crossover probability in [0, 1] (default: 0)
  --mutation-rate <p>     Per-bit mutation probability in [0, 1] (default: 0.001)
  --runs <n>              Number of independent runs (default: 10000)
  --generation-cap <n>    Maximum generations per run (default: 30)
  --seed <n>              Random seed (default: random)
  --quiet                 Only print the summary
  --help                  Show this message";

fn run_line(run: usize) -> String {
    format!("Run: {run}")
}

fn summary_lines(summary: &ExperimentSummary) -> [String; 2] {
    [
        format!("Average Generations: {:.2}", summary.mean_generations()),
        format!("Runtime: {:.5}s", summary.elapsed.as_secs_f64()),
    ]
}

/// Prints run and generation progress to stdout.
struct Progress;

impl Observer for Progress {
    fn on_run_start(&mut self, run: usize) {
        println!("{}", run_line(run));
    }

    fn on_generation(&mut self, stats: &GenerationStats) {
        println!("{stats}");
    }
}

struct Options {
    config: GaConfig,
    quiet: bool,
}

fn parse_value<T>(flag: &str, value: Option<String>) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = value.with_context(|| format!("missing value for {flag}"))?;
    value
        .parse()
        .with_context(|| format!("invalid value for {flag}: {value:?}"))
}

fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Option<Options>> {
    let mut config = GaConfig::default();
    let mut quiet = false;
    let mut args = args.into_iter();

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--population-size" => config.population_size = parse_value(&flag, args.next())?,
            "--genome-length" => config.genome_length = parse_value(&flag, args.next())?,
            "--crossover-rate" => config.crossover_rate = parse_value(&flag, args.next())?,
            "--mutation-rate" => config.mutation_rate = parse_value(&flag, args.next())?,
            "--runs" => config.run_count = parse_value(&flag, args.next())?,
            "--generation-cap" => config.generation_cap = parse_value(&flag, args.next())?,
            "--seed" => config.seed = Some(parse_value(&flag, args.next())?),
            "--quiet" => quiet = true,
            "--help" | "-h" => return Ok(None),
            other => bail!("unknown argument: {other}"),
        }
    }

    config.validate().context("invalid configuration")?;
    Ok(Some(Options { config, quiet }))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let Some(Options { config, quiet }) = parse_args(std::env::args().skip(1))? else {
        println!("{USAGE}");
        return Ok(());
    };
    log::debug!("starting experiment with {config:?}");

    println!("Population size: {}", config.population_size);
    println!("Genome length: {}", config.genome_length);

    let summary = if quiet {
        ExperimentRunner::run(&config, &mut ())?
    } else {
        ExperimentRunner::run(&config, &mut Progress)?
    };

    for line in summary_lines(&summary) {
        println!("{line}");
    }
    Ok(())
}
