use clap::Parser;
use floodmap_draw::engine::{HeadlessEngine, MapEngine};
use floodmap_draw::geometry::Coord;
use floodmap_draw::{Config, MapOptions, create_draw_map, replay, util};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "floodmap-draw")]
#[command(version, about = "Polygon drawing subsystem for the flood warning map")]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("FLOODMAP_DRAW_GIT_HASH"),
    ")"
))]
struct Cli {
    /// Initial view centre as "x,y" map units
    #[arg(long, value_name = "X,Y")]
    centre: Option<String>,

    /// Initial zoom level
    #[arg(long, value_name = "LEVEL")]
    zoom: Option<f64>,

    /// Input script to replay against the headless engine
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the finished polygon as GeoJSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let centre = match &cli.centre {
        Some(s) => util::parse_centre(s).map_err(|e| anyhow::anyhow!("bad --centre: {e}"))?,
        None => Coord::new(config.map.centre[0], config.map.centre[1]),
    };
    let zoom = cli.zoom.unwrap_or(config.map.zoom);

    let Some(script_path) = &cli.script else {
        println!("floodmap-draw: polygon drawing subsystem for the flood warning map");
        println!();
        println!("Usage:");
        println!("  floodmap-draw --script FILE    Replay an input script headlessly");
        println!("  floodmap-draw --help           Show all options");
        println!();
        println!("Script commands: start, confirm, finish, delete, add-vertex,");
        println!("  delete-vertex, key <name> [shift|ctrl|alt|caps], click X Y,");
        println!("  dblclick X Y, move X Y, tap X Y, drag X Y");
        return Ok(());
    };

    let script = std::fs::read_to_string(script_path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", script_path.display()))?;
    let steps = replay::parse_script(&script)?;
    log::info!(
        "replaying {} steps from {}",
        steps.len(),
        script_path.display()
    );

    let engine = HeadlessEngine::new(centre, zoom);
    let mut map = create_draw_map(engine, MapOptions { centre, zoom }, &config);
    replay::run(&mut map, &steps);

    let state = map.state();
    println!(
        "phase: {:?}, mode: {:?}, centre: {}",
        state.phase(),
        map.mode(),
        util::format_coord(map.engine().view_center())
    );

    if let Some(geojson) = map.polygon_geojson() {
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&geojson)?);
        } else {
            let coords: Vec<String> = state
                .ring
                .coords()
                .iter()
                .map(|c| util::format_coord(*c))
                .collect();
            println!("ring: {}", coords.join(" "));
        }
    } else if cli.json {
        println!("null");
    } else {
        println!("ring: none");
    }

    Ok(())
}
