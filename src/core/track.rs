//! Tile map: tile kinds, classification and the fixed track layout.
use raylib::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    None,
    Wall,
    Road,
    RoadLeftEdge,
    RoadRightEdge,
    RoadTopEdge,
    RoadBottomEdge,
    RoadTopLeftCorner,
    RoadTopRightCorner,
    RoadBottomLeftCorner,
    RoadBottomRightCorner,
}

impl TileKind {
    #[cfg(test)]
    pub const ALL: [TileKind; 11] = [
        TileKind::None,
        TileKind::Wall,
        TileKind::Road,
        TileKind::RoadLeftEdge,
        TileKind::RoadRightEdge,
        TileKind::RoadTopEdge,
        TileKind::RoadBottomEdge,
        TileKind::RoadTopLeftCorner,
        TileKind::RoadTopRightCorner,
        TileKind::RoadBottomLeftCorner,
        TileKind::RoadBottomRightCorner,
    ];

    pub fn is_wall(self) -> bool {
        self == TileKind::Wall
    }
}

#[inline]
fn within(v: i32, lo: i32, hi: i32) -> bool {
    v >= lo && v <= hi
}

/// Classifies cell (x, y) of a `cols` x `rows` grid. First matching rule wins,
/// so the order of the checks below is part of the layout.
pub fn classify_tile(x: i32, y: i32, cols: i32, rows: i32) -> TileKind {
    if x == 0 || y == 0 || x == cols - 1 || y == rows - 1 {
        return TileKind::Wall;
    }

    // Road bands: top, bottom, left, right
    let in_road = (within(x, 10, 70) && within(y, 5, 9))
        || (within(x, 10, 70) && within(y, 30, 34))
        || (within(x, 10, 15) && within(y, 5, 34))
        || (within(x, 65, 70) && within(y, 5, 34));
    if in_road {
        return TileKind::Road;
    }

    if within(x, 10, 70) && (y == 4 || y == 29) {
        TileKind::RoadTopEdge
    } else if within(x, 10, 70) && (y == 10 || y == 35) {
        TileKind::RoadBottomEdge
    } else if (x == 9 || x == 64) && within(y, 5, 34) {
        TileKind::RoadLeftEdge
    } else if (x == 16 || x == 71) && within(y, 5, 34) {
        TileKind::RoadRightEdge
    } else {
        match (x, y) {
            (9, 4) => TileKind::RoadTopLeftCorner,
            (9, 35) => TileKind::RoadBottomLeftCorner,
            (71, 4) => TileKind::RoadTopRightCorner,
            (71, 35) => TileKind::RoadBottomRightCorner,
            _ => TileKind::None,
        }
    }
}

/// Row-major tile grid covering the screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileMap {
    cols: i32,
    rows: i32,
    block: (i32, i32),
    tiles: Vec<TileKind>,
}

impl TileMap {
    pub fn new(screen_width: i32, screen_height: i32, block: (i32, i32)) -> Self {
        let cols = screen_width / block.0;
        let rows = screen_height / block.1;
        let mut tiles = Vec::with_capacity((cols * rows).max(0) as usize);
        for y in 0..rows {
            for x in 0..cols {
                tiles.push(classify_tile(x, y, cols, rows));
            }
        }
        Self { cols, rows, block, tiles }
    }

    pub fn cols(&self) -> i32 { self.cols }
    pub fn rows(&self) -> i32 { self.rows }
    pub fn block(&self) -> (i32, i32) { self.block }

    #[inline]
    pub fn index(&self, x: i32, y: i32) -> usize {
        (y * self.cols + x) as usize
    }

    #[inline]
    pub fn in_range(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.cols && y >= 0 && y < self.rows
    }

    pub fn get(&self, x: i32, y: i32) -> Option<TileKind> {
        if !self.in_range(x, y) {
            return None;
        }
        Some(self.tiles[self.index(x, y)])
    }

    /// World pixel position to tile coordinates (truncating, like the pixel grid).
    pub fn world_to_tile(&self, pos: Vector2) -> (i32, i32) {
        (pos.x as i32 / self.block.0, pos.y as i32 / self.block.1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, TileKind)> + '_ {
        let cols = self.cols;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, &kind)| (i as i32 % cols, i as i32 / cols, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> TileMap {
        TileMap::new(800, 400, (10, 10))
    }

    #[test]
    fn grid_matches_screen() {
        let map = track();
        assert_eq!((map.cols(), map.rows()), (80, 40));
        assert_eq!(map.iter().count(), 80 * 40);
    }

    #[test]
    fn known_cells() {
        let map = track();
        assert_eq!(map.get(0, 0), Some(TileKind::Wall));
        assert_eq!(map.get(79, 39), Some(TileKind::Wall));
        assert_eq!(map.get(40, 7), Some(TileKind::Road));
        assert_eq!(map.get(40, 20), Some(TileKind::None));
        assert_eq!(map.get(12, 20), Some(TileKind::Road));
        assert_eq!(map.get(40, 4), Some(TileKind::RoadTopEdge));
        assert_eq!(map.get(40, 35), Some(TileKind::RoadBottomEdge));
        assert_eq!(map.get(9, 20), Some(TileKind::RoadLeftEdge));
        assert_eq!(map.get(71, 20), Some(TileKind::RoadRightEdge));
        assert_eq!(map.get(9, 4), Some(TileKind::RoadTopLeftCorner));
        assert_eq!(map.get(71, 4), Some(TileKind::RoadTopRightCorner));
        assert_eq!(map.get(9, 35), Some(TileKind::RoadBottomLeftCorner));
        assert_eq!(map.get(71, 35), Some(TileKind::RoadBottomRightCorner));
    }

    #[test]
    fn road_band_wins_over_edges() {
        // x == 64 is a left edge only outside the horizontal bands
        assert_eq!(classify_tile(64, 7, 80, 40), TileKind::Road);
        assert_eq!(classify_tile(64, 20, 80, 40), TileKind::RoadLeftEdge);
    }

    #[test]
    fn classification_is_stable() {
        assert_eq!(track(), track());
        for (x, y, kind) in track().iter() {
            assert_eq!(kind, classify_tile(x, y, 80, 40));
        }
    }

    #[test]
    fn out_of_range_and_world_lookup() {
        let map = track();
        assert_eq!(map.get(-1, 0), None);
        assert_eq!(map.get(80, 0), None);
        assert_eq!(map.world_to_tile(Vector2::new(130.0, 200.0)), (13, 20));
        assert_eq!(map.world_to_tile(Vector2::new(9.9, 0.5)), (0, 0));
        assert_eq!(map.index(3, 2), 163);
    }
}
