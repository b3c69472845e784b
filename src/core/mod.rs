//! Core game types and logic (no drawing).
//!
//! - `track`: tile kinds and the tile map
//! - `car`: car state and kinematics
//! - `collision`: wall probe and collision-response hook
//! - `process_events`: keyboard to car controls

pub mod track;
pub mod car;
pub mod collision;
pub mod process_events;
