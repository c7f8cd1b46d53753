//! Layout module for tracking UI component regions
//!
//! `LayoutRegions` records where each control was drawn in the last frame, and
//! `region_at()` determines which control is at a given screen position.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
