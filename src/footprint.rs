use std::fmt;
use std::io::{self, Write};

use crate::glide::{compute_radius_meters, GlideParameters};
use crate::geo::LatLon;
use crate::visibility::{is_visible, Toggles};
use crate::waypoint::{Category, Waypoint};

#[derive(Clone, Debug, PartialEq)]
pub struct Footprint {
    pub category: Category,
    pub center: LatLon,
    pub radius_meters: f64,
    pub label: String,
}

impl Footprint {
    pub fn new(waypoint: &Waypoint, params: &GlideParameters) -> Self {
        Footprint {
            category: waypoint.category,
            center: waypoint.position,
            radius_meters: compute_radius_meters(params, waypoint.elevation_feet),
            label: label(waypoint),
        }
    }
}

impl fmt::Display for Footprint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {:.1} {} \"{}\"",
            self.center,
            self.radius_meters,
            Into::<&str>::into(self.category),
            self.label
        )
    }
}

pub fn label(waypoint: &Waypoint) -> String {
    format!("{} {} ft", waypoint.name, waypoint.elevation_feet.round() as i64)
}

pub fn footprints<'a, I>(waypoints: I, params: &GlideParameters, toggles: &Toggles) -> Vec<Footprint>
where
    I: IntoIterator<Item = &'a Waypoint>,
{
    waypoints
        .into_iter()
        .filter(|w| is_visible(w, toggles))
        .map(|w| Footprint::new(w, params))
        .collect()
}

pub fn write_listing<W: Write>(out: &mut W, footprints: &[Footprint]) -> io::Result<()> {
    for f in footprints {
        writeln!(out, "{}", f)?;
    }
    out.flush()
}
