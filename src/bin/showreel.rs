use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "showreel", version)]
struct Cli {
    /// JSON config file (all fields optional).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch recent projects once and print the resulting view.
    Fetch(FetchArgs),
    /// Load projects and print the marquee frame by frame.
    Play(PlayArgs),
    /// Print loop geometry for N equal cards in a viewport, as JSON.
    Plan(PlanArgs),
}

#[derive(Parser, Debug)]
struct FetchArgs {
    /// Projects API base URL.
    #[arg(long, env = "SHOWREEL_API_BASE")]
    api_base: Option<String>,

    /// Print the view as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Projects API base URL.
    #[arg(long, env = "SHOWREEL_API_BASE", conflicts_with = "from")]
    api_base: Option<String>,

    /// Read projects from a JSON file shaped like the API response instead.
    #[arg(long)]
    from: Option<PathBuf>,

    /// Seconds of animation to print.
    #[arg(long, default_value_t = 5.0)]
    seconds: f64,

    /// Frames printed per second.
    #[arg(long, default_value_t = 4)]
    fps: u32,

    /// Text columns used for the viewport.
    #[arg(long, default_value_t = 80)]
    columns: usize,

    /// Simulate the pointer entering the viewport at this time (seconds).
    #[arg(long)]
    hover_at: Option<f64>,

    /// Simulate the pointer leaving the viewport at this time (seconds).
    #[arg(long)]
    leave_at: Option<f64>,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Number of cards.
    #[arg(long)]
    items: usize,

    /// Width of each card including its gap, in px.
    #[arg(long)]
    item_width: f64,

    /// Viewport width in px (defaults to the config value).
    #[arg(long)]
    viewport: Option<f64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = read_config(cli.config.as_deref())?;
    match cli.cmd {
        Command::Fetch(args) => cmd_fetch(config, args).await,
        Command::Play(args) => cmd_play(config, args).await,
        Command::Plan(args) => cmd_plan(&config, args),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<showreel::ShowreelConfig> {
    match path {
        Some(p) => showreel::ShowreelConfig::load_json(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(showreel::ShowreelConfig::default()),
    }
}

fn api_source(
    flag: Option<String>,
    config: &showreel::ShowreelConfig,
) -> anyhow::Result<showreel::HttpProjectSource> {
    let base = flag
        .or_else(|| config.api_base.clone())
        .context("no API base: pass --api-base, set SHOWREEL_API_BASE, or set api_base in config")?;
    Ok(showreel::HttpProjectSource::new(base))
}

async fn cmd_fetch(config: showreel::ShowreelConfig, args: FetchArgs) -> anyhow::Result<()> {
    let source = api_source(args.api_base, &config)?;
    let mut component = showreel::RecentProjects::new(config);
    component.load(&source).await;

    let view = component.view();
    if args.json {
        let out = serde_json::to_string_pretty(&view).context("serialize view")?;
        println!("{out}");
    } else {
        println!("{}", showreel::StripRenderer::default().render_view(&view));
    }
    Ok(())
}

async fn cmd_play(config: showreel::ShowreelConfig, args: PlayArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.fps > 0, "--fps must be > 0");
    anyhow::ensure!(
        args.seconds.is_finite() && args.seconds >= 0.0,
        "--seconds must be finite and >= 0"
    );

    let mut component = showreel::RecentProjects::new(config.clone());
    match args.from {
        Some(path) => {
            let source = showreel::StaticProjectSource::from_json_file(&path)
                .with_context(|| format!("read projects '{}'", path.display()))?;
            component.load(&source).await;
        }
        None => {
            let source = api_source(args.api_base, &config)?;
            component.load(&source).await;
        }
    }

    let renderer = showreel::StripRenderer::new(args.columns);
    let view = component.view();
    if !matches!(view.body, showreel::ViewBody::Carousel { .. }) {
        println!("{}", renderer.render_view(&view));
        return Ok(());
    }
    println!("{}", view.heading);

    let dt = 1.0 / f64::from(args.fps);
    let frames = (args.seconds * f64::from(args.fps)).round() as u64;
    for frame in 0..=frames {
        let t = frame as f64 * dt;
        if args.hover_at.is_some_and(|h| crossed(h, t, dt)) {
            component.pointer_enter();
        }
        if args.leave_at.is_some_and(|l| crossed(l, t, dt)) {
            component.pointer_leave();
        }

        let view = component.view();
        if let showreel::ViewBody::Carousel {
            cards,
            spans,
            viewport_width,
            offset_px,
            paused,
        } = &view.body
        {
            let strip = renderer.render_strip(cards, spans, *viewport_width);
            let mark = if *paused { " paused" } else { "" };
            println!("{t:>7.2}s {offset_px:>8.0}px |{strip}|{mark}");
        }
        component.tick(dt);
    }

    component.dispose();
    Ok(())
}

/// Whether event time `at` falls in the frame `[t, t + dt)`.
fn crossed(at: f64, t: f64, dt: f64) -> bool {
    at >= t && at < t + dt
}

fn cmd_plan(config: &showreel::ShowreelConfig, args: PlanArgs) -> anyhow::Result<()> {
    let viewport = args.viewport.unwrap_or(config.viewport_width);
    anyhow::ensure!(
        args.item_width.is_finite() && args.item_width >= 0.0,
        "--item-width must be finite and >= 0"
    );

    let widths = vec![args.item_width; args.items];
    let geometry = match showreel::measured_width(Some(viewport)) {
        Some(vw) if !widths.is_empty() => {
            showreel::LoopGeometry::for_widths(&widths, vw, &config.carousel)
        }
        _ => anyhow::bail!("nothing to plan: need --items > 0 and a positive viewport"),
    };

    let out = serde_json::to_string_pretty(&geometry).context("serialize geometry")?;
    println!("{out}");
    Ok(())
}
