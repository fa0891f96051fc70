use derive_builder::{Builder, UninitializedFieldError};

use crate::cup_data::Record;
use crate::elevation::decode_elevation;
use crate::error::{Error, FieldError, Result};
use crate::geo::{decode_latitude, decode_longitude, LatLon};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Category {
    GrassSurface,
    Outlanding,
    GlidingAirfield,
    Airport,
    /// Any other CUP style (waypoint, VOR, mountain pass...); kept but never drawn.
    Other(i32),
}

impl Category {
    pub fn from_style(style: i32) -> Self {
        match style {
            2 => Category::GrassSurface,
            3 => Category::Outlanding,
            4 => Category::GlidingAirfield,
            5 => Category::Airport,
            x => Category::Other(x),
        }
    }

    pub fn style(self) -> i32 {
        match self {
            Category::GrassSurface => 2,
            Category::Outlanding => 3,
            Category::GlidingAirfield => 4,
            Category::Airport => 5,
            Category::Other(x) => x,
        }
    }

    /// Drawing order, lowest first. Later entries end up on top.
    pub fn priority(self) -> u8 {
        match self {
            Category::Outlanding => 0,
            Category::GrassSurface => 1,
            Category::GlidingAirfield | Category::Airport => 2,
            Category::Other(_) => 3,
        }
    }

    pub fn is_landing(self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl From<Category> for &str {
    fn from(x: Category) -> Self {
        match x {
            Category::GrassSurface => "grass",
            Category::Outlanding => "outlanding",
            Category::GlidingAirfield => "gliding",
            Category::Airport => "airport",
            Category::Other(_) => "other",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Builder)]
#[builder(build_fn(validate = "Self::validate", error = "Error"))]
pub struct Waypoint {
    #[builder(setter(into))]
    pub name: String,
    pub category: Category,
    pub elevation_feet: f64,
    pub position: LatLon,
}

impl WaypointBuilder {
    fn validate(&self) -> Result<()> {
        if let Some(ref name) = self.name {
            if name.trim().is_empty() {
                return Err(Error::InvalidWaypoint {
                    field: "name",
                    source: FieldError::Missing,
                });
            }
        }
        if let Some(elev) = self.elevation_feet {
            if !elev.is_finite() {
                return Err(Error::InvalidWaypoint {
                    field: "elev",
                    source: FieldError::InvalidElevation {
                        value: elev.to_string(),
                    },
                });
            }
        }
        if let Some(pos) = self.position {
            if !pos.lat().is_finite() || pos.lat().abs() > 90.0 {
                return Err(Error::InvalidWaypoint {
                    field: "lat",
                    source: FieldError::InvalidLatitude {
                        value: pos.lat().to_string(),
                    },
                });
            }
            if !pos.is_valid() {
                return Err(Error::InvalidWaypoint {
                    field: "lon",
                    source: FieldError::InvalidLongitude {
                        value: pos.lon().to_string(),
                    },
                });
            }
        }
        Ok(())
    }
}

impl From<UninitializedFieldError> for Error {
    fn from(e: UninitializedFieldError) -> Error {
        Error::InvalidWaypoint {
            field: e.field_name(),
            source: FieldError::Missing,
        }
    }
}

fn required<'r>(record: &'r Record, column: &'static str) -> Result<&'r str> {
    record
        .get(column)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(Error::InvalidWaypoint {
            field: column,
            source: FieldError::Missing,
        })
}

/// Builds a waypoint from one CUP row. Fails on the first bad column.
pub fn parse_waypoint(record: &Record) -> Result<Waypoint> {
    let name = required(record, "name")?;
    let style = required(record, "style")?;
    let lat = required(record, "lat")?;
    let lon = required(record, "lon")?;
    let elev = required(record, "elev")?;

    let category = style
        .parse()
        .map(Category::from_style)
        .map_err(|_| FieldError::InvalidStyle {
            value: style.to_string(),
        })
        .map_err(Error::invalid_waypoint("style"))?;
    let lat = decode_latitude(lat).map_err(Error::invalid_waypoint("lat"))?;
    let lon = decode_longitude(lon).map_err(Error::invalid_waypoint("lon"))?;
    let elevation_feet = decode_elevation(elev).map_err(Error::invalid_waypoint("elev"))?;

    WaypointBuilder::default()
        .name(name)
        .category(category)
        .elevation_feet(elevation_feet)
        .position(LatLon::new(lat, lon))
        .build()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::cup_data::DataFile;

    fn record(row: &str) -> Record {
        let text = format!("name,code,country,lat,lon,elev,style,rwdir,rwlen,freq,desc\n{}\n", row);
        DataFile::new(text).records().next().unwrap()
    }

    fn field_of(result: Result<Waypoint>) -> (&'static str, FieldError) {
        match result {
            Err(Error::InvalidWaypoint { field, source }) => (field, source),
            other => panic!("expected InvalidWaypoint, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_sterling() {
        let wp = parse_waypoint(&record("\"Sterling\",,US,4215.000N,07147.580W,150ft,3,,,,")).unwrap();
        assert_eq!(wp.name, "Sterling");
        assert_eq!(wp.category, Category::Outlanding);
        assert_abs_diff_eq!(wp.elevation_feet, 150.0);
        assert_abs_diff_eq!(wp.position.lat(), 42.25, epsilon = 1e-9);
        assert_abs_diff_eq!(wp.position.lon(), -71.793, epsilon = 1e-9);
    }

    #[test]
    fn test_parse_undotted_and_meters() {
        let wp = parse_waypoint(&record("Field,,,4215000N,07147580W,45.72m,2,,,,")).unwrap();
        assert_eq!(wp.category, Category::GrassSurface);
        assert_abs_diff_eq!(wp.elevation_feet, 150.0, epsilon = 1e-9);
        assert_abs_diff_eq!(wp.position.lat(), 42.25, epsilon = 1e-9);
    }

    #[test]
    fn test_other_style_kept() {
        let wp = parse_waypoint(&record("Tower,,,4215.000N,07147.580W,150ft,1,,,,")).unwrap();
        assert_eq!(wp.category, Category::Other(1));
        assert_eq!(wp.category.style(), 1);
    }

    #[test]
    fn test_missing_fields() {
        let (field, source) = field_of(parse_waypoint(&record(",,,4215.000N,07147.580W,150ft,3")));
        assert_eq!(field, "name");
        assert!(matches!(source, FieldError::Missing));

        let (field, _) = field_of(parse_waypoint(&record("A,,,4215.000N,07147.580W,,3")));
        assert_eq!(field, "elev");

        let (field, _) = field_of(parse_waypoint(&record("A,,,4215.000N,07147.580W,150ft")));
        assert_eq!(field, "style");

        let (field, _) = field_of(parse_waypoint(&record("A,,,  ,07147.580W,150ft,3")));
        assert_eq!(field, "lat");
    }

    #[test]
    fn test_bad_fields() {
        let (field, source) = field_of(parse_waypoint(&record("A,,,4215.000X,07147.580W,150ft,3")));
        assert_eq!(field, "lat");
        assert!(matches!(source, FieldError::InvalidLatitude { .. }));

        let (field, source) = field_of(parse_waypoint(&record("A,,,4215.000N,7147.580W,150ft,3")));
        assert_eq!(field, "lon");
        assert!(matches!(source, FieldError::InvalidLongitude { .. }));

        let (field, source) = field_of(parse_waypoint(&record("A,,,4215.000N,07147.580W,150yd,3")));
        assert_eq!(field, "elev");
        assert!(matches!(source, FieldError::InvalidElevation { .. }));

        let (field, source) = field_of(parse_waypoint(&record("A,,,4215.000N,07147.580W,150ft,three")));
        assert_eq!(field, "style");
        assert!(matches!(source, FieldError::InvalidStyle { .. }));
    }

    #[test]
    fn test_error_message() {
        let err = parse_waypoint(&record("A,,,4215.000N,07147.580W,150yd,3")).unwrap_err();
        assert_eq!(err.to_string(), "invalid waypoint: elev is invalid elevation '150yd'");
    }

    #[test]
    fn test_builder_is_atomic() {
        let err = WaypointBuilder::default()
            .name("A")
            .category(Category::Airport)
            .elevation_feet(std::f64::NAN)
            .position(LatLon::new(42.0, -71.0))
            .build()
            .unwrap_err();
        assert_eq!(field_of(Err(err)).0, "elev");

        let err = WaypointBuilder::default()
            .name("A")
            .category(Category::Airport)
            .elevation_feet(100.0)
            .position(LatLon::new(42.0, 181.0))
            .build()
            .unwrap_err();
        assert_eq!(field_of(Err(err)).0, "lon");

        let err = WaypointBuilder::default()
            .name("A")
            .category(Category::Airport)
            .elevation_feet(100.0)
            .build()
            .unwrap_err();
        assert_eq!(field_of(Err(err)).0, "position");
    }

    #[test]
    fn test_priority_order() {
        assert!(Category::Outlanding.priority() < Category::GrassSurface.priority());
        assert!(Category::GrassSurface.priority() < Category::Airport.priority());
        assert_eq!(Category::Airport.priority(), Category::GlidingAirfield.priority());
        assert!(Category::Airport.priority() < Category::Other(0).priority());
    }
}
