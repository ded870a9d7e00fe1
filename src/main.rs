//! `marga` command-line tool.
//!
//! Builds navigation graphs from floor plans and queries them.
//!
//! # Usage
//!
//! ```bash
//! marga build-raster floor-plan.png navgraph.json --grid-step 15
//! marga build-vector corridors.geojson navgraph.json --axis-order yx
//! marga locate navgraph.json 412 230 --max-distance 50
//! marga route navgraph.json 15_30 300_45
//! marga stats navgraph.json
//! ```
//!
//! Set `RUST_LOG=debug` for search and loader details.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use serde_json::json;

use marga_nav::config::MargaConfig;
use marga_nav::core::MapPoint;
use marga_nav::io::{load_graph, save_graph};
use marga_nav::pathfinding::AStarPlanner;
use marga_nav::query::{GridBucketLocator, NodeLocator};
use marga_nav::raster::RasterGraphBuilder;
use marga_nav::vector::{AxisOrder, VectorGraphBuilder};
use marga_nav::{Error, Result};

#[derive(Parser, Debug)]
#[command(name = "marga", author, version, about = "Indoor navigation graph builder and router")]
struct Cli {
    /// TOML configuration file (default: configs/marga.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a graph from a floor-plan image
    BuildRaster {
        /// Input image (PNG, JPEG, BMP, PNM)
        image: PathBuf,
        /// Output graph file (default: [output] graph_path)
        output: Option<PathBuf>,
        /// Sampling spacing in pixels
        #[arg(short, long)]
        grid_step: Option<u32>,
        /// Walkable if R, G and B all exceed this
        #[arg(short, long)]
        threshold: Option<u8>,
    },

    /// Build a graph from GeoJSON corridor polylines
    BuildVector {
        /// Input feature collection
        geojson: PathBuf,
        /// Output graph file (default: [output] graph_path)
        output: Option<PathBuf>,
        /// Component order of input positions
        #[arg(short, long, value_enum)]
        axis_order: Option<AxisArg>,
    },

    /// Snap a coordinate to its nearest node
    Locate {
        /// Graph file
        graph: PathBuf,
        #[arg(allow_negative_numbers = true)]
        x: f32,
        #[arg(allow_negative_numbers = true)]
        y: f32,
        /// Tolerance in map units (strict)
        #[arg(short, long)]
        max_distance: Option<f32>,
    },

    /// Find the fewest-hop path between two nodes (JSON output)
    Route {
        /// Graph file
        graph: PathBuf,
        /// Start node identifier
        from: String,
        /// Goal node identifier
        to: String,
    },

    /// Print graph statistics
    Stats {
        /// Graph file
        graph: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AxisArg {
    Xy,
    Yx,
}

impl From<AxisArg> for AxisOrder {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::Xy => AxisOrder::XY,
            AxisArg::Yx => AxisOrder::YX,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => MargaConfig::load(path)?,
        None => MargaConfig::load_default()?,
    };

    match cli.command {
        Command::BuildRaster {
            image,
            output,
            grid_step,
            threshold,
        } => {
            let mut raster = config.raster.clone();
            if let Some(step) = grid_step {
                raster.grid_step = step;
            }
            if let Some(threshold) = threshold {
                raster.walkable_threshold = threshold;
            }
            let graph = RasterGraphBuilder::new(raster)?.build_from_path(&image)?;
            let output = output_path(output, &config);
            save_graph(&graph, &output)?;
            println!("{}", graph.stats());
        }

        Command::BuildVector {
            geojson,
            output,
            axis_order,
        } => {
            let mut vector = config.vector.clone();
            if let Some(order) = axis_order {
                vector.axis_order = order.into();
            }
            let graph = VectorGraphBuilder::new(vector).build_from_path(&geojson)?;
            let output = output_path(output, &config);
            save_graph(&graph, &output)?;
            println!("{}", graph.stats());
        }

        Command::Locate {
            graph,
            x,
            y,
            max_distance,
        } => {
            let graph = load_graph(&graph)?;
            let max_distance = max_distance.unwrap_or(config.snapping.max_distance);
            let locator = GridBucketLocator::with_auto_cell_size(&graph);
            let found = locator
                .locate(MapPoint::new(x, y), max_distance)
                .ok_or(Error::NoNearbyNode { x, y, max_distance })?;
            if let Some(node) = graph.node(found.index) {
                println!("{} ({:.2} units)", node.id(), found.distance);
            }
        }

        Command::Route { graph, from, to } => {
            let graph = load_graph(&graph)?;
            let result = AStarPlanner::new(&graph, config.astar_config()).find_path(&from, &to)?;
            let path: Vec<[f32; 2]> = result.path.iter().map(|p| [p.x, p.y]).collect();
            let report = json!({
                "from": from,
                "to": to,
                "hops": result.hops,
                "length": result.length(),
                "nodes": result.node_ids,
                "path": path,
            });
            println!("{}", report);
        }

        Command::Stats { graph } => {
            let graph = load_graph(&graph)?;
            println!("{}", graph.stats());
        }
    }

    Ok(())
}

fn output_path(output: Option<PathBuf>, config: &MargaConfig) -> PathBuf {
    let path = output.unwrap_or_else(|| PathBuf::from(&config.output.graph_path));
    info!("Writing graph to {}", path.display());
    path
}
