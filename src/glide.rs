use crate::elevation::feet_to_meters;
use crate::error::{Error, Result};

// Unreachable sites still get a dot
pub const MIN_RADIUS_FEET: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlideParameters {
    pub glide_ratio: f64,
    pub altitude_feet: f64,
    pub arrival_height_feet: f64,
}

impl Default for GlideParameters {
    fn default() -> Self {
        GlideParameters {
            glide_ratio: 20.0,
            altitude_feet: 3500.0,
            arrival_height_feet: 1000.0,
        }
    }
}

impl GlideParameters {
    pub fn new(glide_ratio: f64, altitude_feet: f64, arrival_height_feet: f64) -> Result<Self> {
        let params = GlideParameters {
            glide_ratio,
            altitude_feet,
            arrival_height_feet,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        fn invalid(reason: &str) -> Result<()> {
            Err(Error::InvalidParameter {
                reason: reason.to_string(),
            })
        }

        // Negated comparisons so NaN is rejected too
        if !(self.glide_ratio > 0.0 && self.glide_ratio <= 100.0) {
            return invalid("Glide ratio must be greater than 0 and at most 100");
        }
        if !(self.altitude_feet >= 0.0 && self.altitude_feet <= 50_000.0) {
            return invalid("Altitude must be between 0 and 50,000 feet");
        }
        if !(self.arrival_height_feet >= 0.0 && self.arrival_height_feet <= 10_000.0) {
            return invalid("Arrival height must be between 0 and 10,000 feet");
        }
        if self.arrival_height_feet >= self.altitude_feet {
            return invalid("Arrival height must be less than altitude");
        }
        Ok(())
    }
}

// Feet, flat earth and still air
pub fn compute_radius(params: &GlideParameters, elevation_feet: f64) -> f64 {
    let height = params.altitude_feet - params.arrival_height_feet - elevation_feet;
    (params.glide_ratio * height).max(MIN_RADIUS_FEET)
}

pub fn compute_radius_meters(params: &GlideParameters, elevation_feet: f64) -> f64 {
    feet_to_meters(compute_radius(params, elevation_feet))
}
