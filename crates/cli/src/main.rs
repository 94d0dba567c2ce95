//! MRELBP CLI - LBP and MRELBP texture descriptors for grayscale images

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use mrelbp_algorithms::lbp::{lbp, mrelbp, LbpOutput, MrelbpHistograms, MrelbpOutput};
use mrelbp_algorithms::standardize::local_standardize;
use mrelbp_core::io::{read_image, write_image};
use mrelbp_core::{Image, Parameters, StandardizationParams};
use mrelbp_parallel::{num_threads, ProcessingMode};

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "mrelbp")]
#[command(author, version, about = "LBP and MRELBP texture descriptors", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Worker threads (default: all cores)
    #[arg(short, long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show information about an image file
    Info {
        /// Input grayscale TIFF
        input: PathBuf,
    },
    /// Plain rotation-invariant uniform LBP
    Lbp {
        /// Input grayscale TIFF
        input: PathBuf,
        #[command(flatten)]
        opts: DescriptorArgs,
    },
    /// Median-robust extended LBP
    Mrelbp {
        /// Input grayscale TIFF
        input: PathBuf,
        #[command(flatten)]
        opts: DescriptorArgs,
    },
}

#[derive(Args)]
struct DescriptorArgs {
    /// JSON file with `parameters` and `standardization` sections
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Small ring radius
    #[arg(short, long)]
    radius: Option<usize>,
    /// Large ring radius (MRELBP)
    #[arg(long)]
    large_radius: Option<usize>,
    /// Samples per ring
    #[arg(short, long)]
    neighbours: Option<usize>,
    /// Median width for the centre image
    #[arg(long)]
    w_c: Option<usize>,
    /// Median width for the large ring
    #[arg(long)]
    w_r0: Option<usize>,
    /// Median width for the small ring
    #[arg(long)]
    w_r1: Option<usize>,
    /// Threshold tolerance
    #[arg(long)]
    eps1: Option<f64>,
    /// Interpolation axis tolerance
    #[arg(long)]
    eps2: Option<f64>,
    /// Apply local Gaussian standardization first
    #[arg(short, long)]
    standardize: bool,
    /// Write histograms as JSON to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Directory for the mapped descriptor images (TIFF)
    #[arg(long)]
    save_maps: Option<PathBuf>,
}

/// Contents of a `--config` file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    parameters: Parameters,
    standardization: StandardizationParams,
}

#[derive(Serialize)]
struct LbpReport<'a> {
    input: String,
    parameters: &'a Parameters,
    rows: usize,
    cols: usize,
    histogram: &'a [u64],
}

#[derive(Serialize)]
struct MrelbpReport<'a> {
    input: String,
    parameters: &'a Parameters,
    rows: usize,
    cols: usize,
    histograms: MrelbpHistograms,
    features: Vec<u64>,
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to install logger")
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn read_input(path: &Path) -> Result<Image<f64>> {
    let pb = spinner("Reading image...");
    let image = read_image(path).with_context(|| format!("Failed to read {}", path.display()))?;
    pb.finish_and_clear();
    info!("Input: {} x {}", image.rows(), image.cols());
    Ok(image)
}

/// File values first, then any flag given on the command line
fn load_config(
    opts: &DescriptorArgs,
    validate: fn(&Parameters) -> mrelbp_core::Result<()>,
) -> Result<(Parameters, StandardizationParams)> {
    let config = match &opts.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str::<ConfigFile>(&text)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => ConfigFile::default(),
    };

    let mut params = config.parameters;
    if let Some(v) = opts.radius {
        params.radius = v;
    }
    if let Some(v) = opts.large_radius {
        params.large_radius = v;
    }
    if let Some(v) = opts.neighbours {
        params.neighbours = v;
    }
    if let Some(v) = opts.w_c {
        params.w_c = v;
    }
    if let Some(v) = opts.w_r0 {
        params.w_r0 = v;
    }
    if let Some(v) = opts.w_r1 {
        params.w_r1 = v;
    }
    if let Some(v) = opts.eps1 {
        params.eps1 = v;
    }
    if let Some(v) = opts.eps2 {
        params.eps2 = v;
    }
    validate(&params).context("Invalid parameters")?;
    debug!(?params, "descriptor parameters");

    Ok((params, config.standardization))
}

fn prepare(
    image: Image<f64>,
    opts: &DescriptorArgs,
    std_params: &StandardizationParams,
) -> Result<Image<f64>> {
    if !opts.standardize {
        return Ok(image);
    }
    info!("Applying local standardization");
    local_standardize(&image, std_params).context("Local standardization failed")
}

fn emit_json<T: Serialize>(report: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Histograms saved to: {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn save_maps(dir: &Path, maps: &[(&str, &Image<u32>)]) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    let pb = spinner("Writing descriptor maps...");
    for (name, image) in maps {
        let path = dir.join(format!("{}.tif", name));
        write_image(*image, &path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    pb.finish_and_clear();
    println!("Descriptor maps saved to: {}", dir.display());
    Ok(())
}

fn run_lbp(input: &Path, opts: &DescriptorArgs, mode: ProcessingMode) -> Result<()> {
    let (params, std_params) = load_config(opts, Parameters::validate_lbp)?;
    let image = read_input(input)?;

    let start = Instant::now();
    let pb = spinner("Computing LBP...");
    let out: LbpOutput = mode.install(|| -> Result<LbpOutput> {
        debug!(threads = num_threads(), "worker pool");
        let image = prepare(image, opts, &std_params)?;
        Ok(lbp(&image, &params)?)
    })??;
    pb.finish_and_clear();
    info!("Processing time: {:.2?}", start.elapsed());

    let (rows, cols) = out.descriptor.shape();
    let report = LbpReport {
        input: input.display().to_string(),
        parameters: &params,
        rows,
        cols,
        histogram: &out.histogram,
    };
    emit_json(&report, opts.output.as_deref())?;

    if let Some(dir) = &opts.save_maps {
        save_maps(dir, &[("lbp", &out.descriptor.mapped)])?;
    }
    Ok(())
}

fn run_mrelbp(input: &Path, opts: &DescriptorArgs, mode: ProcessingMode) -> Result<()> {
    let (params, std_params) = load_config(opts, Parameters::validate_mre)?;
    let image = read_input(input)?;

    let start = Instant::now();
    let pb = spinner("Computing MRELBP...");
    let out: MrelbpOutput = mode.install(|| -> Result<MrelbpOutput> {
        debug!(threads = num_threads(), "worker pool");
        let image = prepare(image, opts, &std_params)?;
        Ok(mrelbp(&image, &params)?)
    })??;
    pb.finish_and_clear();
    info!("Processing time: {:.2?}", start.elapsed());

    let (rows, cols) = out.small.shape();
    let report = MrelbpReport {
        input: input.display().to_string(),
        parameters: &params,
        rows,
        cols,
        histograms: out.histograms(),
        features: out.feature_vector(),
    };
    emit_json(&report, opts.output.as_deref())?;

    if let Some(dir) = &opts.save_maps {
        save_maps(
            dir,
            &[
                ("small", &out.small.mapped),
                ("large", &out.large.mapped),
                ("radial", &out.radial.mapped),
            ],
        )?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;
    let mode = ProcessingMode::from_threads(cli.threads);

    match cli.command {
        // ── Info ─────────────────────────────────────────────────────
        Commands::Info { input } => {
            let image = read_input(&input)?;
            let (rows, cols) = image.shape();
            let stats = image.statistics();

            println!("File: {}", input.display());
            println!("Dimensions: {} x {} ({} pixels)", rows, cols, image.len());
            println!("\nStatistics:");
            if let Some(min) = stats.min {
                println!("  Min: {:.4}", min);
            }
            if let Some(max) = stats.max {
                println!("  Max: {:.4}", max);
            }
            if let Some(mean) = stats.mean {
                println!("  Mean: {:.4}", mean);
            }
            if let Some(std) = image.std_dev() {
                println!("  Std dev: {:.4}", std);
            }

            let params = Parameters::default();
            println!("\nValid descriptor region (default parameters):");
            for (name, margin) in [("LBP", params.lbp_margin()), ("MRELBP", params.mre_margin())] {
                if rows > 2 * margin && cols > 2 * margin {
                    println!("  {}: {} x {}", name, rows - 2 * margin, cols - 2 * margin);
                } else {
                    println!("  {}: image too small (margin {})", name, margin);
                }
            }
        }

        // ── Descriptors ──────────────────────────────────────────────
        Commands::Lbp { input, opts } => run_lbp(&input, &opts, mode)?,
        Commands::Mrelbp { input, opts } => run_mrelbp(&input, &opts, mode)?,
    }

    Ok(())
}
