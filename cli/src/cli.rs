use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sv_common::{PlaybackConfig, Step, TickSource, Value, RELAXED_INTERVAL_MS};
use sv_playback::PlaybackController;
use sv_trace_gen::{generate_trace, validate_trace, Algorithm};

use crate::input::{parse_target, parse_values};
use crate::narrate::describe;
use crate::render::{legend, render_bars};

#[derive(Debug, Parser)]
#[command(
    name = "stepviz",
    about = "Step through sorting and searching algorithms one snapshot at a time",
    version
)]
pub struct Cli {
    /// Algorithm to trace.
    #[arg(value_enum)]
    pub algorithm: AlgorithmArg,

    /// Comma-separated numbers, e.g. "5,3,8,1". Invalid entries are skipped.
    #[arg(allow_hyphen_values = true)]
    pub values: String,

    /// Value to look for (linear search only).
    #[arg(long, allow_hyphen_values = true)]
    pub target: Option<String>,

    /// Auto-advance period in milliseconds.
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// JSON playback config file (`interval_ms`, `tick_source`).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the whole trace as JSON.
    #[arg(long, conflicts_with_all = ["play", "step"])]
    pub json: bool,

    /// Replay the trace in real time.
    #[arg(long, conflicts_with = "step")]
    pub play: bool,

    /// Print only step K (0-based, clamped to the trace).
    #[arg(long, value_name = "K")]
    pub step: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    Bubble,
    Insertion,
    Linear,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Bubble => Algorithm::BubbleSort,
            AlgorithmArg::Insertion => Algorithm::InsertionSort,
            AlgorithmArg::Linear => Algorithm::LinearSearch,
        }
    }
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    run(cli, &mut stdout.lock())
}

pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let algorithm = Algorithm::from(cli.algorithm);
    let values = parse_values(&cli.values).context("No numbers to work with")?;
    let target = cli
        .target
        .as_deref()
        .map(parse_target)
        .transpose()
        .context("Invalid search target")?;

    if algorithm.is_sort() && target.is_some() {
        tracing::warn!(%algorithm, "Ignoring --target for a sorting algorithm");
    }

    let steps = build_trace(algorithm, &values, target)?;

    if cli.json {
        serde_json::to_writer_pretty(&mut *out, &steps).context("Failed to write trace")?;
        writeln!(out)?;
        return Ok(());
    }

    let config = playback_config(algorithm, cli.config.as_deref(), cli.interval_ms)?;
    let mut controller = PlaybackController::new(config);
    controller.load(steps).context("Failed to load trace")?;

    writeln!(out, "{algorithm}  ({})", legend())?;
    if let Some(k) = cli.step {
        controller.seek(k);
        write_step(out, controller.steps(), controller.current_index())
    } else if cli.play {
        play(&mut controller, out)
    } else {
        for index in 0..controller.total_steps() {
            write_step(out, controller.steps(), index)?;
        }
        Ok(())
    }
}

/// Generate the trace and check its structure before anything renders it.
fn build_trace(
    algorithm: Algorithm,
    values: &[Value],
    target: Option<Value>,
) -> Result<Vec<Step>> {
    let steps = generate_trace(algorithm, values, target)
        .with_context(|| format!("Failed to generate {algorithm} trace"))?;

    match validate_trace(&steps) {
        Ok(()) => tracing::debug!(%algorithm, steps = steps.len(), "Trace validated"),
        Err(err) => tracing::warn!(%algorithm, %err, "Generated trace failed validation"),
    }
    tracing::info!(%algorithm, values = values.len(), steps = steps.len(), "Trace ready");
    Ok(steps)
}

/// Resolve playback settings: config file, then `--interval-ms`.
///
/// Bubble sort defaults to the relaxed pace when neither is given.
fn playback_config(
    algorithm: Algorithm,
    path: Option<&Path>,
    interval_ms: Option<u64>,
) -> Result<PlaybackConfig> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None if algorithm == Algorithm::BubbleSort => {
            PlaybackConfig::default().with_interval_ms(RELAXED_INTERVAL_MS)
        }
        None => PlaybackConfig::default(),
    };
    if let Some(ms) = interval_ms {
        config = config.with_interval_ms(ms);
    }
    Ok(config)
}

fn load_config(path: &Path) -> Result<PlaybackConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: PlaybackConfig = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    tracing::debug!(?config, "Loaded playback config");
    Ok(config)
}

/// Auto-play to the end, printing every step the cursor passes.
fn play(controller: &mut PlaybackController, out: &mut impl Write) -> Result<()> {
    let mut shown = controller.current_index();
    write_step(out, controller.steps(), shown)?;
    controller.play().context("Failed to start playback")?;

    while controller.is_playing() {
        match controller.config().tick_source {
            TickSource::Thread => {
                controller.wait_update(controller.interval() * 2);
            }
            TickSource::External => {
                std::thread::sleep(controller.interval());
                controller.tick();
            }
        }

        let current = controller.current_index();
        for index in shown + 1..=current {
            write_step(out, controller.steps(), index)?;
        }
        shown = current;
        out.flush()?;
    }

    writeln!(
        out,
        "{} at step {} of {}",
        controller.mode().label(),
        controller.current_index() + 1,
        controller.total_steps()
    )?;
    Ok(())
}

fn write_step(out: &mut impl Write, steps: &[Step], index: usize) -> Result<()> {
    writeln!(
        out,
        "Step {} of {}  {}  {}",
        index + 1,
        steps.len(),
        render_bars(&steps[index]),
        describe(steps, index)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("stepviz").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_every_step_by_default() {
        let output = run_args(&["bubble", "2,1"]).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Bubble Sort"));
        assert_eq!(
            lines[2],
            "Step 2 of 4  [ 2? 1? ]  Comparing 2 vs 1: 2 > 1, swap needed"
        );
        assert!(lines[4].ends_with("Array is sorted!"));
    }

    #[test]
    fn negative_values_are_accepted() {
        let output = run_args(&["insertion", "-3,-7", "--step", "99"]).unwrap();
        assert!(output.contains("Array is sorted!"));
        assert!(output.contains("[ -7= -3= ]"));
    }

    #[test]
    fn json_output_parses_back() {
        let output = run_args(&["linear", "5,3,8", "--target", "8", "--json"]).unwrap();
        let steps: Vec<Step> = serde_json::from_str(&output).unwrap();
        assert_eq!(steps.len(), 4);
    }

    #[test]
    fn linear_search_requires_target() {
        let err = run_args(&["linear", "5,3"]).unwrap_err();
        assert!(format!("{err:#}").contains("target"));
    }

    #[test]
    fn all_invalid_values_are_rejected() {
        let err = run_args(&["bubble", "a,b,,"]).unwrap_err();
        assert!(format!("{err:#}").contains("No numbers"));
    }

    #[test]
    fn play_prints_each_step_once() {
        let output = run_args(&["bubble", "3,1,2", "--play", "--interval-ms", "10"]).unwrap();
        let steps = generate_trace(Algorithm::BubbleSort, &[3.0, 1.0, 2.0], None).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), steps.len() + 2);
        assert!(lines[lines.len() - 2].ends_with("Array is sorted!"));
        assert_eq!(
            lines.last().unwrap(),
            &format!("Paused at step {0} of {0}", steps.len())
        );
    }

    #[test]
    fn json_conflicts_with_play() {
        assert!(Cli::try_parse_from(["stepviz", "bubble", "1", "--json", "--play"]).is_err());
    }

    #[test]
    fn config_file_is_applied() {
        let path = std::env::temp_dir().join(format!("stepviz-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "interval_ms": 10, "tick_source": "external" }"#).unwrap();
        let config = path.to_str().unwrap();
        let output = run_args(&["linear", "1,2", "--target", "2", "--play", "--config", config]);
        std::fs::remove_file(&path).unwrap();
        assert!(output.unwrap().contains("Element 2 found at index 1"));
    }

    #[test]
    fn sorting_ignores_target() {
        let output = run_args(&["bubble", "2,1", "--target", "5"]).unwrap();
        assert_eq!(output.lines().count(), 5);
        assert!(Algorithm::BubbleSort.is_sort());
    }

    #[test]
    fn generated_traces_pass_validation() {
        for algorithm in Algorithm::ALL {
            let steps = build_trace(algorithm, &[4.0, -1.0, 4.0, 2.0], Some(2.0)).unwrap();
            assert!(validate_trace(&steps).is_ok());
        }
    }

    #[test]
    fn bubble_sort_defaults_to_relaxed_interval() {
        let config = playback_config(Algorithm::BubbleSort, None, None).unwrap();
        let controller = PlaybackController::new(config);
        assert_eq!(
            controller.interval(),
            std::time::Duration::from_millis(RELAXED_INTERVAL_MS)
        );

        let config = playback_config(Algorithm::InsertionSort, None, None).unwrap();
        assert_eq!(config.interval_ms, sv_common::DEFAULT_INTERVAL_MS);

        let config = playback_config(Algorithm::BubbleSort, None, Some(50)).unwrap();
        assert_eq!(config.interval_ms, 50);
    }
}
