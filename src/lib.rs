#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod cup_data;
pub mod elevation;
pub mod error;
pub mod footprint;
pub mod geo;
pub mod glide;
pub mod input;
pub mod session;
pub mod visibility;
pub mod waypoint;

pub use crate::error::{Error, FieldError, Result};
