use crate::waypoint::{Category, Waypoint};

/// Which landing categories the pilot wants to see.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Toggles {
    pub show_airport: bool,
    pub show_grass_strip: bool,
    pub show_outlanding: bool,
}

impl Default for Toggles {
    fn default() -> Self {
        Toggles {
            show_airport: true,
            show_grass_strip: true,
            show_outlanding: true,
        }
    }
}

pub fn is_visible(waypoint: &Waypoint, toggles: &Toggles) -> bool {
    match waypoint.category {
        Category::Outlanding => toggles.show_outlanding,
        Category::GrassSurface => toggles.show_grass_strip,
        Category::GlidingAirfield | Category::Airport => toggles.show_airport,
        Category::Other(_) => false,
    }
}
