#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::path::PathBuf;

use log::info;
use structopt::StructOpt;

use glide_range::footprint;
use glide_range::glide::GlideParameters;
use glide_range::session::{Session, Status};
use glide_range::visibility::Toggles;

/// Glide-range footprints for the landing sites in a SeeYou CUP waypoint file.
#[derive(StructOpt)]
struct Args {
    #[structopt(name = "input", parse(from_os_str))]
    input: PathBuf,
    /// Write the footprint listing here instead of stdout
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    output: Option<PathBuf>,
    /// Distance travelled per unit of height lost
    #[structopt(short = "g", long = "glide-ratio", default_value = "20")]
    glide_ratio: f64,
    /// Altitude in feet
    #[structopt(short = "a", long = "altitude", default_value = "3500")]
    altitude: f64,
    /// Height in feet required above the field on arrival
    #[structopt(short = "r", long = "arrival-height", default_value = "1000")]
    arrival_height: f64,
    #[structopt(long = "hide-airports")]
    hide_airports: bool,
    #[structopt(long = "hide-grass")]
    hide_grass: bool,
    #[structopt(long = "hide-outlanding")]
    hide_outlanding: bool,
    #[structopt(short = "v", long = "verbose")]
    verbose: bool,
}

fn report(status: Status) -> bool {
    eprintln!("{}", status);
    status.is_success()
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::from_args();
    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut session = Session::new(Toggles {
        show_airport: !args.hide_airports,
        show_grass_strip: !args.hide_grass,
        show_outlanding: !args.hide_outlanding,
    });

    let params = GlideParameters {
        glide_ratio: args.glide_ratio,
        altitude_feet: args.altitude,
        arrival_height_feet: args.arrival_height,
    };
    if let Err(e) = session.set_parameters(params) {
        report(e.into());
        std::process::exit(2);
    }

    info!("Loading {}...", args.input.display());
    let loaded = session.load_file(&args.input).unwrap_or_else(Status::from);
    if !report(loaded) {
        std::process::exit(1);
    }

    if let Some(bounds) = session.catalog().and_then(|c| c.bounds()) {
        info!("Suggested view: centre {} zoom {}", bounds.center(), bounds.zoom());
    }

    let mut out: Box<dyn Write> = match args.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };
    footprint::write_listing(&mut out, session.footprints())?;
    Ok(())
}
