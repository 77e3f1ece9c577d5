use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

/// Geocoding and static map retrieval over the legacy Google Maps HTTP APIs
#[derive(Parser)]
#[command(name = "geomaps")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Google Maps API key
    #[arg(short = 'k', long, env = "GEOMAPS_API_KEY", global = true)]
    api_key: Option<String>,

    /// Map style: normal, satellite, or hybrid
    #[arg(short, long, env = "GEOMAPS_STYLE", default_value = "normal", global = true)]
    style: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Geocode a free-text address to coordinates
    Geocode {
        /// Address to geocode
        address: String,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Fetch a static map image centered on a coordinate
    Map {
        /// Center latitude in decimal degrees
        #[arg(long)]
        lat: f64,

        /// Center longitude in decimal degrees
        #[arg(long)]
        lng: f64,

        /// Zoom level (1-21)
        #[arg(short, long, default_value = "12")]
        zoom: u8,

        /// Image width in pixels
        #[arg(long, default_value = "512")]
        width: u32,

        /// Image height in pixels
        #[arg(long, default_value = "512")]
        height: u32,

        /// Image format: png, png8, png16, png32, gif, or jpg
        #[arg(short, long, default_value = "png")]
        format: String,

        /// Output image file
        #[arg(short, long)]
        output: PathBuf,

        /// Marker as "lat,lng,color,label" (repeatable)
        #[arg(short, long)]
        marker: Vec<String>,

        /// Leave markers out of the rendered map
        #[arg(long)]
        no_markers: bool,
    },

    /// Compute a new map center after a pixel-offset pan
    Pan {
        /// Center latitude in decimal degrees
        #[arg(long)]
        lat: f64,

        /// Center longitude in decimal degrees
        #[arg(long)]
        lng: f64,

        /// Horizontal pan in screen pixels (positive pans east)
        #[arg(long)]
        dx: i32,

        /// Vertical pan in screen pixels (positive pans south)
        #[arg(long)]
        dy: i32,

        /// Zoom level (0-21)
        #[arg(short, long)]
        zoom: u8,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Geocode addresses from a CSV file
    Batch {
        /// Input CSV file
        input: PathBuf,

        /// Output file (input name + _geocoded if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Column name holding the address
        #[arg(long, default_value = "address")]
        address_col: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Geocode { address, json } => commands::geocode::run(cli.api_key, address, json),
        Commands::Map {
            lat,
            lng,
            zoom,
            width,
            height,
            format,
            output,
            marker,
            no_markers,
        } => commands::map::run(
            cli.api_key,
            cli.style,
            lat,
            lng,
            zoom,
            width,
            height,
            format,
            output,
            marker,
            no_markers,
        ),
        Commands::Pan {
            lat,
            lng,
            dx,
            dy,
            zoom,
            json,
        } => commands::pan::run(lat, lng, dx, dy, zoom, json),
        Commands::Batch {
            input,
            output,
            address_col,
        } => commands::batch::run(cli.api_key, input, output, address_col),
    }
}
