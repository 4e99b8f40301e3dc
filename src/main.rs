use anyhow::{Context, Result};
use clap::Parser;
use gradline::settings::Settings;
use gradline::types::Mode;
use std::path::PathBuf;
#[derive(Parser, Debug)]
#[command(version, about = "draws sin(x) colored by its slope, or a turning helix")]
struct Args {
    ///draw the helix instead of the function graph
    #[arg(long)]
    spiral: bool,
    ///toml settings file, anything it leaves out keeps its default
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    ///write the sampled vertices into this directory and draw what is read back from it
    #[arg(long, value_name = "DIR")]
    dump_dir: Option<PathBuf>,
    ///a leading -spiral also selects the helix, anything else here is ignored
    #[arg(hide = true, allow_hyphen_values = true, trailing_var_arg = true)]
    rest: Vec<String>,
}
impl Args {
    fn mode(&self) -> Mode {
        if self.spiral || self.rest.first().is_some_and(|a| a == "-spiral") {
            Mode::Spiral
        } else {
            Mode::Graph
        }
    }
}
fn run(args: Args) -> Result<()> {
    let settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(dir) = &args.dump_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    let scene = gradline::build_scene(args.mode(), &settings, args.dump_dir.as_deref())
        .context("failed to sample vertices")?;
    gradline::window::run(settings, scene).context("failed to run the viewer")
}
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    if let Err(e) = run(args) {
        log::error!("{e:#}");
        std::process::exit(-1);
    }
}
