use std::fmt;

use itertools::{Itertools, MinMaxResult};
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::FieldError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLon(f64, f64);

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        LatLon(lat, lon)
    }

    pub fn lat(self) -> f64 {
        self.0
    }

    pub fn lon(self) -> f64 {
        self.1
    }

    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.1.is_finite() && self.0.abs() <= 90.0 && self.1.abs() <= 180.0
    }

    pub fn from_cup(lat: &str, lon: &str) -> Result<Self, FieldError> {
        Ok(LatLon(decode_latitude(lat)?, decode_longitude(lon)?))
    }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.6} {:.6}", self.0, self.1)
    }
}

lazy_static! {
    // Ex: 5107.830N, also seen without the dot: 5107830N
    static ref LAT_REGEX: Regex = Regex::new(r"^([0-9]{2})([0-9]{2})\.?([0-9]{3,})([NS])$").unwrap();
    // Ex: 01410.467E
    static ref LON_REGEX: Regex = Regex::new(r"^([0-9]{3})([0-9]{2})\.?([0-9]{3,})([EW])$").unwrap();
}

pub fn decode_latitude(s: &str) -> Result<f64, FieldError> {
    decode(s, &LAT_REGEX, 90.0, "S").ok_or_else(|| FieldError::InvalidLatitude {
        value: s.to_string(),
    })
}

pub fn decode_longitude(s: &str) -> Result<f64, FieldError> {
    decode(s, &LON_REGEX, 180.0, "W").ok_or_else(|| FieldError::InvalidLongitude {
        value: s.to_string(),
    })
}

fn decode(s: &str, regex: &Regex, limit: f64, negative: &str) -> Option<f64> {
    let cap = regex.captures(s.trim())?;
    let (d, m, frac, dir) = (&cap[1], &cap[2], &cap[3], &cap[4]);
    let d: f64 = d.parse().ok()?;
    let m: f64 = format!("{}.{}", m, frac).parse().ok()?;
    if m >= 60.0 {
        return None;
    }

    let dd = d + m / 60.0;
    if !dd.is_finite() || dd > limit {
        return None;
    }
    Some(if dir == negative { -dd } else { dd })
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBounds {
    pub south_west: LatLon,
    pub north_east: LatLon,
}

impl ViewBounds {
    pub fn around<I: IntoIterator<Item = LatLon>>(points: I) -> Option<Self> {
        let points: Vec<_> = points.into_iter().collect();
        let (min_lat, max_lat) = span(points.iter().map(|p| p.lat()))?;
        let (min_lon, max_lon) = span(points.iter().map(|p| p.lon()))?;

        let lat_pad = padding(max_lat - min_lat);
        let lon_pad = padding(max_lon - min_lon);

        Some(ViewBounds {
            south_west: LatLon(min_lat - lat_pad, min_lon - lon_pad),
            north_east: LatLon(max_lat + lat_pad, max_lon + lon_pad),
        })
    }

    pub fn center(&self) -> LatLon {
        LatLon(
            (self.south_west.0 + self.north_east.0) / 2.0,
            (self.south_west.1 + self.north_east.1) / 2.0,
        )
    }

    // Web-map zoom, each level doubles the scale
    pub fn zoom(&self) -> u8 {
        let lat_diff = self.north_east.0 - self.south_west.0;
        let lon_diff = self.north_east.1 - self.south_west.1;
        let max_diff = lat_diff.max(lon_diff);

        match max_diff {
            d if d > 10.0 => 6,
            d if d > 5.0 => 7,
            d if d > 2.0 => 8,
            d if d > 1.0 => 9,
            d if d > 0.5 => 10,
            d if d > 0.2 => 11,
            d if d > 0.1 => 12,
            _ => 13,
        }
    }
}

fn span<I: Iterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    match values.minmax() {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(x) => Some((x, x)),
        MinMaxResult::MinMax(min, max) => Some((min, max)),
    }
}

fn padding(range: f64) -> f64 {
    let pad = range * 0.01;
    if pad == 0.0 {
        0.01
    } else {
        pad
    }
}
