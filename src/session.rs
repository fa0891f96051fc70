use std::fmt;
use std::path::Path;

use log::info;

use crate::catalog::{self, Catalog};
use crate::error::{Error, Result};
use crate::footprint::{footprints, Footprint};
use crate::glide::GlideParameters;
use crate::input::read_catalog_file;
use crate::visibility::Toggles;

/// Short message for the pilot after a load or parameter change.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Status {
    Success(String),
    Failure(String),
}

impl Status {
    pub fn loaded(count: usize, skipped: usize) -> Self {
        let mut msg = format!("Loaded {} waypoint{}", count, if count == 1 { "" } else { "s" });
        if skipped > 0 {
            msg += &format!(" ({} skipped)", skipped);
        }
        Status::Success(msg)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Status::Success(_))
    }
}

impl From<Error> for Status {
    fn from(e: Error) -> Status {
        Status::Failure(e.to_string())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Status::Success(msg) => write!(f, "{}", msg),
            Status::Failure(msg) => write!(f, "ERROR: {}", msg),
        }
    }
}

/// The loaded catalog plus the footprints last computed from it.
///
/// Every mutation either succeeds completely or leaves the session as it was.
#[derive(Debug, Default)]
pub struct Session {
    catalog: Option<Catalog>,
    params: GlideParameters,
    toggles: Toggles,
    footprints: Vec<Footprint>,
}

impl Session {
    pub fn new(toggles: Toggles) -> Self {
        Session {
            toggles,
            ..Session::default()
        }
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    pub fn params(&self) -> &GlideParameters {
        &self.params
    }

    pub fn footprints(&self) -> &[Footprint] {
        &self.footprints
    }

    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<Status> {
        let file = read_catalog_file(path)?;
        Ok(self.replace_catalog(catalog::load(&file)?))
    }

    pub fn load_text(&mut self, text: &str) -> Result<Status> {
        Ok(self.replace_catalog(catalog::load_catalog(text)?))
    }

    pub fn set_parameters(&mut self, params: GlideParameters) -> Result<()> {
        params.validate()?;
        self.params = params;
        self.recompute();
        Ok(())
    }

    pub fn set_toggles(&mut self, toggles: Toggles) {
        self.toggles = toggles;
        self.recompute();
    }

    fn replace_catalog(&mut self, catalog: Catalog) -> Status {
        let status = Status::loaded(catalog.landing_count(), catalog.skipped().len());
        self.catalog = Some(catalog);
        self.recompute();
        status
    }

    fn recompute(&mut self) {
        self.footprints = match self.catalog {
            Some(ref catalog) => footprints(catalog.waypoints(), &self.params, &self.toggles),
            None => Vec::new(),
        };
        info!(
            "{} footprints at {}:1 from {} ft, arriving {} ft above the field",
            self.footprints.len(),
            self.params.glide_ratio,
            self.params.altitude_feet,
            self.params.arrival_height_feet
        );
    }
}
