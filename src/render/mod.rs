//! Drawing.
//!
//! - `framebuffer`: CPU buffer the track is baked into
//! - `textures`: car sprite and tileset, with generated fallbacks
//! - `tiles`: tile kind → tileset cell table, track baking
//! - `hud`: car sprite and debug text

pub mod framebuffer;
pub mod textures;
pub mod tiles;
pub mod hud;
