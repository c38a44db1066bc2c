//! # Court Geometry
//!
//! Coordinate normalization, hoop-centered conversion, display rotation, and
//! the versioned geometry profiles every other stage classifies against.

pub mod config;
pub mod normalize;
pub mod rotate;

pub use config::{FamilyPctRanges, GeometryConfig};
pub use normalize::{
    dist_angle, standardize_to_one_basket, to_feet_hoop_centered, COURT_LENGTH_FT, COURT_WIDTH_FT,
    HOOP_FROM_BASELINE_FT, HOOP_X_FT,
};
pub use rotate::rotate_for_display;
