use std::{
    fs::File,
    io::{BufReader, Read as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "scrollfx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one frame for a page at a given container position.
    Sample(SampleArgs),
    /// Evaluate frames while scrolling a page from top to bottom.
    Sweep(SweepArgs),
    /// List pages and their transition options.
    Pages(PagesArgs),
}

#[derive(Args, Debug)]
struct PageArgs {
    /// Site config JSON (`{"pages": {...}}`), layered over the built-in pages.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Page name or route.
    #[arg(long)]
    page: String,

    /// Viewport height, px.
    #[arg(long, default_value_t = 800.0)]
    viewport: f64,

    /// Container height, px.
    #[arg(long, default_value_t = 800.0)]
    height: f64,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    #[command(flatten)]
    page: PageArgs,

    /// Container top relative to the viewport top, px.
    #[arg(long, allow_hyphen_values = true)]
    top: f64,

    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    #[command(flatten)]
    page: PageArgs,

    /// Number of evenly spaced scroll positions (inclusive of both ends).
    #[arg(long, default_value_t = 11)]
    steps: u32,

    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

#[derive(Parser, Debug)]
struct PagesArgs {
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Css,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Pages(args) => cmd_pages(args),
    }
}

fn read_site_config(path: Option<&Path>) -> anyhow::Result<scrollfx::SiteConfig> {
    let Some(path) = path else {
        return Ok(scrollfx::SiteConfig::builtin());
    };
    let f = File::open(path).with_context(|| format!("open site config '{}'", path.display()))?;
    let mut s = String::new();
    BufReader::new(f)
        .read_to_string(&mut s)
        .with_context(|| format!("read site config '{}'", path.display()))?;
    let site = scrollfx::SiteConfig::from_json(&s).with_context(|| "parse site config JSON")?;
    Ok(site)
}

fn transition_for(args: &PageArgs) -> anyhow::Result<scrollfx::ScrollTransition> {
    let site = read_site_config(args.config.as_deref())?;
    let cfg = site
        .page(&args.page)
        .with_context(|| format!("resolve page '{}'", args.page))?;
    Ok(scrollfx::ScrollTransition::new(cfg.clone()))
}

fn print_frame(frame: &scrollfx::TransitionFrame, format: Format) -> anyhow::Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(frame)?),
        Format::Css => {
            println!("progress: {:.4}", frame.progress);
            println!("  section1 {{ {} }}", frame.pinned.to_css());
            println!("  section2 {{ {} }}", frame.rising.to_css());
        }
    }
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let transition = transition_for(&args.page)?;
    let sample = scrollfx::ScrollSample::new(
        0.0,
        scrollfx::ContainerRect::new(args.top, args.page.height),
        args.page.viewport,
    );
    print_frame(&transition.frame(&sample), args.format)
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    if args.steps < 2 {
        anyhow::bail!("--steps must be at least 2");
    }
    if !(args.page.height.is_finite() && args.page.height > 0.0) {
        anyhow::bail!("--height must be a positive number of px for a sweep");
    }
    let transition = transition_for(&args.page)?;

    // The container starts just below the fold and ends one container height past it.
    let host = scrollfx::SyntheticHost::new(args.page.viewport);
    host.layout(args.page.viewport, args.page.height);
    let sink = scrollfx::RecordingSink::new();
    let provider: std::rc::Rc<dyn scrollfx::GeometryProvider> = std::rc::Rc::new(host.clone());
    let mounted = scrollfx::MountedTransition::mount(provider, transition, sink.clone());

    let travel = args.page.height;
    let last = f64::from(args.steps - 1);
    for i in 1..args.steps {
        host.scroll_to(travel * f64::from(i) / last);
    }
    mounted.unmount();

    for frame in sink.frames() {
        print_frame(&frame, args.format)?;
    }
    Ok(())
}

fn cmd_pages(args: PagesArgs) -> anyhow::Result<()> {
    let site = read_site_config(args.config.as_deref())?;
    println!("{}", serde_json::to_string_pretty(&site)?);
    Ok(())
}
