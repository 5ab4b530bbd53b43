use anyhow::Context;
use clap::Parser;
use kundali::interaction::{ChartRenderer, Document, DrawOutcome};
use kundali::VisualConfig;
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a North-Indian birth chart payload to SVG")]
struct Args {
    #[arg(help = "Path to the chart payload JSON")]
    payload: PathBuf,

    #[arg(long, help = "Write output here instead of stdout")]
    out: Option<PathBuf>,

    #[arg(long, help = "Chart settings TOML (defaults to configs/kundali.toml if present)")]
    config: Option<PathBuf>,

    #[arg(long)]
    title: Option<String>,

    #[arg(long, help = "Side of the square chart in pixels")]
    size: Option<f32>,

    #[arg(long, help = "Emit the scene as JSON instead of SVG")]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut settings = kundali_config::load_chart_settings(args.config.as_deref())?;
    if let Some(title) = args.title {
        settings.title = title;
    }
    if let Some(size) = args.size {
        settings.size = size;
    }
    kundali_config::validate_chart_settings(&settings)?;

    let text = fs::read_to_string(&args.payload)
        .with_context(|| format!("Could not read payload {}", args.payload.display()))?;
    let data = kundali::load_chart_data_from_json(&text)
        .with_context(|| format!("Invalid payload {}", args.payload.display()))?;

    let doc = Rc::new(RefCell::new(Document::new()));
    let mut renderer = ChartRenderer::with_config(doc, VisualConfig::from_settings(&settings));

    match renderer.draw(&data) {
        DrawOutcome::Drawn { planets, warnings } => {
            log::info!("Drew {planets} planet(s) into chart {}", renderer.id());
            for warning in warnings {
                log::warn!("{warning}");
            }
        }
        DrawOutcome::Blank(err) => log::warn!("Rendering a blank chart: {err}"),
    }

    let output = if args.json {
        serde_json::to_string_pretty(renderer.scene())?
    } else {
        renderer.to_svg()
    };

    match args.out {
        Some(path) => {
            fs::write(&path, output)
                .with_context(|| format!("Could not write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{output}"),
    }

    renderer.unmount();
    Ok(())
}
