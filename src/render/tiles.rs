//! Tile-kind to tileset mapping and track baking.
use raylib::prelude::*;
use crate::core::track::{TileKind, TileMap};
use crate::render::framebuffer::Framebuffer;
use crate::render::textures::Pixmap;

/// Fill for tiles with no tileset cell.
pub const OFF_TRACK: Color = Color::DARKGREEN;

/// Tileset cell (column, row) per tile kind, in `TileKind` declaration order.
const SHEET_CELLS: [Option<(u32, u32)>; 11] = [
    None,         // None
    Some((0, 0)), // Wall
    Some((0, 1)), // Road
    Some((4, 1)), // RoadLeftEdge
    Some((4, 0)), // RoadRightEdge
    Some((3, 0)), // RoadTopEdge
    Some((3, 1)), // RoadBottomEdge
    Some((1, 0)), // RoadTopLeftCorner
    Some((2, 0)), // RoadTopRightCorner
    Some((1, 1)), // RoadBottomLeftCorner
    Some((2, 1)), // RoadBottomRightCorner
];

#[inline]
pub fn sheet_cell(kind: TileKind) -> Option<(u32, u32)> {
    SHEET_CELLS[kind as usize]
}

/// Paints every tile of `map` into `fb`, copying its tileset cell.
pub fn bake_track(fb: &mut Framebuffer, map: &TileMap, tileset: &Pixmap) {
    let (bw, bh) = (map.block().0 as u32, map.block().1 as u32);
    for (x, y, kind) in map.iter() {
        let (xo, yo) = (x as u32 * bw, y as u32 * bh);
        match sheet_cell(kind) {
            None => fb.fill_rect(xo, yo, bw, bh, OFF_TRACK),
            Some((cx, cy)) => {
                for ty in 0..bh {
                    for tx in 0..bw {
                        let c = tileset.sample(cx * bw + tx, cy * bh + ty);
                        fb.set_pixel_color(xo + tx, yo + ty, c);
                    }
                }
            }
        }
    }
}
