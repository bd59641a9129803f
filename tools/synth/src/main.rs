//! Command-line harness: run one generator and print the height parameters
//! of its output as JSON on stdout. Produces no plots and writes no files.

use std::{fs, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use fracsurf_core::metrics::{FractalParameters, ParameterCalculator, DEFAULT_DIGITS};
use fracsurf_core::profile::{DftParams, MpdParams, ProfileSpec, WmParams};
use fracsurf_core::surface::{RmdParams, SurfaceDftParams, SurfaceSpec};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    Profile,
    Surface,
}

#[derive(Parser, Debug)]
#[command(name = "synth", about = "Generate a fractal profile or surface and report its roughness parameters")]
struct Args {
    /// JSON job file, e.g. {"kind": "profile", "method": "mpd", "n": 1024}.
    /// Overrides every generation flag below.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "profile")]
    kind: Kind,

    /// Profile: wm | dft | mpd.  Surface: rmd | dft.
    #[arg(short, long, default_value = "dft")]
    method: String,

    /// Sample count (profiles) or grid side (surfaces).
    #[arg(short)]
    n: Option<usize>,

    /// Fractal dimension; defaults to 1.2 for profiles and 2.2 for surfaces.
    #[arg(short, long)]
    dimension: Option<f64>,

    /// Target height: Rq (dft), sigma (mpd), Sa (rmd), Sq (surface dft) or G (wm).
    #[arg(short, long, default_value_t = 1.0)]
    target: f64,

    #[arg(short, long, default_value_t = 1.0)]
    interval: f64,

    /// Randomise spectral magnitudes as well as phases.
    #[arg(long)]
    unstable: bool,

    /// W-M frequency base.
    #[arg(long, default_value_t = 1.5)]
    gamma: f64,

    /// W-M: use zero phase for every octave.
    #[arg(long)]
    fixed_phase: bool,

    /// RNG seed; omitted means a fresh entropy seed.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Decimal places for reported parameters.
    #[arg(long, default_value_t = DEFAULT_DIGITS)]
    digits: i32,
}

// ── Jobs ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum Job {
    Profile(ProfileSpec),
    Surface(SurfaceSpec),
}

#[derive(Serialize)]
struct Report {
    job: Job,
    seed: Option<u64>,
    /// Samples per profile, or grid side.
    size: usize,
    interval: f64,
    parameters: FractalParameters,
}

fn job_from_flags(args: &Args) -> Result<Job> {
    let stable = !args.unstable;
    let job = match args.kind {
        Kind::Profile => {
            let d = args.dimension.unwrap_or(1.2);
            let n = args.n.unwrap_or(512);
            let spec = match args.method.as_str() {
                "wm" => ProfileSpec::Wm(WmParams {
                    n,
                    dimension: d,
                    scale: args.target,
                    interval: args.interval,
                    gamma: args.gamma,
                    random_phase: !args.fixed_phase,
                }),
                "dft" => ProfileSpec::Dft(DftParams { n, dimension: d, rq: args.target, interval: args.interval, stable }),
                "mpd" => ProfileSpec::Mpd(MpdParams { n, dimension: d, interval: args.interval, sigma: args.target }),
                other => bail!("unknown profile method {other:?} (expected wm, dft or mpd)"),
            };
            Job::Profile(spec)
        }
        Kind::Surface => {
            let d = args.dimension.unwrap_or(2.2);
            let n = args.n.unwrap_or(128);
            let spec = match args.method.as_str() {
                "rmd" => SurfaceSpec::Rmd(RmdParams { n, dimension: d, sa: args.target, interval: args.interval }),
                "dft" => SurfaceSpec::Dft(SurfaceDftParams { n, dimension: d, sq: args.target, interval: args.interval, stable }),
                other => bail!("unknown surface method {other:?} (expected rmd or dft)"),
            };
            Job::Surface(spec)
        }
    };
    Ok(job)
}

fn run(job: Job, seed: Option<u64>, digits: i32) -> Result<Report> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let (size, interval, parameters) = match &job {
        Job::Profile(spec) => {
            let series = spec
                .generate(&mut rng)
                .with_context(|| format!("{} profile generation failed", spec.name()))?;
            let params = ParameterCalculator::new(&series).report(digits);
            (series.len(), series.interval(), params)
        }
        Job::Surface(spec) => {
            let grid = spec
                .generate(&mut rng)
                .with_context(|| format!("{} surface generation failed", spec.name()))?;
            let params = ParameterCalculator::new(&grid).report(digits);
            (grid.size(), grid.interval(), params)
        }
    };

    Ok(Report { job, seed, size, interval, parameters })
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let job = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Cannot read {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse job file {}", path.display()))?
        }
        None => job_from_flags(&args)?,
    };
    log::info!("running {job:?}");

    let report = run(job, args.seed, args.digits)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
