use crate::error::FieldError;

/// One foot is exactly this many meters.
pub const METERS_PER_FOOT: f64 = 0.3048;

pub fn feet_to_meters(feet: f64) -> f64 {
    feet * METERS_PER_FOOT
}

pub fn meters_to_feet(meters: f64) -> f64 {
    meters / METERS_PER_FOOT
}

/// Decodes a CUP elevation (`"150ft"`, `"45.7m"`) into feet.
pub fn decode_elevation(s: &str) -> Result<f64, FieldError> {
    let s = s.trim();
    let feet = if let Some(value) = s.strip_suffix("ft") {
        value.trim().parse::<f64>().ok()
    } else if let Some(value) = s.strip_suffix('m') {
        value.trim().parse::<f64>().ok().map(meters_to_feet)
    } else {
        None
    };

    feet.filter(|ft| ft.is_finite())
        .ok_or_else(|| FieldError::InvalidElevation {
            value: s.to_string(),
        })
}
