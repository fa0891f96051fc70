use itertools::{Either, Itertools};
use log::{debug, info, warn};

use crate::cup_data::DataFile;
use crate::error::{Error, Result};
use crate::geo::ViewBounds;
use crate::waypoint::{parse_waypoint, Waypoint};

#[derive(Debug)]
pub struct Skipped {
    pub line: usize,
    pub error: Error,
}

// Drawing order, landing categories first
#[derive(Debug)]
pub struct Catalog {
    waypoints: Vec<Waypoint>,
    skipped: Vec<Skipped>,
}

impl Catalog {
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn skipped(&self) -> &[Skipped] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn landing_count(&self) -> usize {
        self.landing_sites().count()
    }

    pub fn bounds(&self) -> Option<ViewBounds> {
        ViewBounds::around(self.landing_sites().map(|w| w.position))
    }

    fn landing_sites(&self) -> impl Iterator<Item = &Waypoint> {
        self.waypoints.iter().filter(|w| w.category.is_landing())
    }
}

pub fn load_catalog(text: &str) -> Result<Catalog> {
    load(&DataFile::new(text))
}

pub fn load(file: &DataFile) -> Result<Catalog> {
    let (waypoints, skipped): (Vec<_>, Vec<_>) =
        file.records().partition_map(|record| match parse_waypoint(&record) {
            Ok(waypoint) => {
                debug!("line {}: {:?}", record.line, waypoint);
                Either::Left(waypoint)
            }
            Err(error) => {
                warn!("Skipping line {}: {}", record.line, error);
                Either::Right(Skipped {
                    line: record.line,
                    error,
                })
            }
        });

    // Turnpoints alone give nothing to land on
    let landing = waypoints.iter().filter(|w| w.category.is_landing()).count();
    if landing == 0 {
        let count = waypoints.len() + skipped.len();
        return Err(if count == 0 {
            Error::NoWaypointsFound
        } else {
            Error::AllWaypointsInvalid { count }
        });
    }

    info!(
        "Parsed {} landing sites, {} other waypoints, skipped {}",
        landing,
        waypoints.len() - landing,
        skipped.len()
    );

    // Stable, so file order survives within each category
    let waypoints = waypoints
        .into_iter()
        .sorted_by_key(|w| w.category.priority())
        .collect();

    Ok(Catalog { waypoints, skipped })
}
