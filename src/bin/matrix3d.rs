use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Args, Parser, Subcommand};
use css_matrix3d::{
    Matrix4, PluginConfig, VendorPrefix, interpolate, parse_transform, serialize_transform,
};

#[derive(Parser, Debug)]
#[command(name = "matrix3d", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a CSS transform and print its rows as JSON.
    Parse(ParseArgs),
    /// Interpolate two transforms at one ratio.
    Lerp(LerpArgs),
    /// Print evenly spaced frames between two transforms.
    Sample(SampleArgs),
}

#[derive(Parser, Debug)]
struct ParseArgs {
    /// `matrix(...)`, `matrix3d(...)` or `none`.
    transform: String,
}

#[derive(Args, Debug)]
struct FormatArgs {
    /// Plugin config JSON (vendor prefix, translation unit).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Target engine prefix (`webkit`, `moz`, `ms`, `o`); `moz` implies `--units`.
    #[arg(long, value_parser = VendorPrefix::parse)]
    prefix: Option<VendorPrefix>,

    /// Suffix translation cells with the configured unit.
    #[arg(long, default_value_t = false)]
    units: bool,
}

#[derive(Parser, Debug)]
struct LerpArgs {
    /// Start transform.
    #[arg(long)]
    from: String,

    /// End transform.
    #[arg(long)]
    to: String,

    /// Interpolation ratio; values outside [0, 1] extrapolate.
    #[arg(long, allow_negative_numbers = true)]
    ratio: f64,

    #[command(flatten)]
    format: FormatArgs,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Start transform.
    #[arg(long)]
    from: String,

    /// End transform.
    #[arg(long)]
    to: String,

    /// Number of intervals; prints steps + 1 lines.
    #[arg(long, default_value_t = 10)]
    steps: u32,

    #[command(flatten)]
    format: FormatArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Parse(args) => cmd_parse(args),
        Command::Lerp(args) => cmd_lerp(args),
        Command::Sample(args) => cmd_sample(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_parse(args: ParseArgs) -> anyhow::Result<()> {
    let m = parse_matrix(&args.transform)?;
    println!("{}", serde_json::to_string(&m)?);
    Ok(())
}

fn cmd_lerp(args: LerpArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.format)?;
    let from = parse_matrix(&args.from)?;
    let to = parse_matrix(&args.to)?;
    let m = interpolate(&from, &to, args.ratio);
    println!("{}", serialize_transform(&m, &cfg.format));
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    if args.steps == 0 {
        anyhow::bail!("--steps must be > 0");
    }
    let cfg = load_config(&args.format)?;
    let from = parse_matrix(&args.from)?;
    let to = parse_matrix(&args.to)?;
    for i in 0..=args.steps {
        let ratio = f64::from(i) / f64::from(args.steps);
        let m = interpolate(&from, &to, ratio);
        println!("{}", serialize_transform(&m, &cfg.format));
    }
    Ok(())
}

fn parse_matrix(s: &str) -> anyhow::Result<Matrix4> {
    parse_transform(Some(s)).with_context(|| format!("parse transform '{s}'"))
}

fn load_config(args: &FormatArgs) -> anyhow::Result<PluginConfig> {
    let mut cfg = match &args.config {
        Some(path) => PluginConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => PluginConfig::default(),
    };
    if let Some(prefix) = args.prefix {
        cfg.vendor_prefix = prefix;
        cfg.format.requires_units |= prefix.requires_translation_units();
    }
    if args.units {
        cfg.format.requires_units = true;
    }
    tracing::debug!(?cfg, "resolved config");
    Ok(cfg)
}
