//! Wall probe around the car.
//!
//! The probe finds walls in the 3x3 tiles around the car and computes the
//! car's oriented corners. What to do about a corner inside a wall is left
//! to a `CollisionResponse`; the game ships with `Unresolved`, which never
//! corrects anything.
use raylib::prelude::*;
use crate::core::car::{Car, CarPose};
use crate::core::track::{TileKind, TileMap};

/// Tiles around a centre tile, indexed `[dy + 1][dx + 1]`. `None` is off-grid.
pub type Neighbourhood = [[Option<TileKind>; 3]; 3];

pub fn neighbourhood(map: &TileMap, tile: (i32, i32)) -> Neighbourhood {
    let mut out = [[None; 3]; 3];
    for dy in -1..=1 {
        for dx in -1..=1 {
            out[(dy + 1) as usize][(dx + 1) as usize] = map.get(tile.0 + dx, tile.1 + dy);
        }
    }
    out
}

pub fn has_wall(hood: &Neighbourhood) -> bool {
    hood.iter().flatten().any(|t| matches!(t, Some(k) if k.is_wall()))
}

/// Corners of a `size` (w, h) rectangle centred on `pos` and rotated by
/// `heading`: bottom-right, bottom-left, top-right, top-left.
pub fn car_corners(pos: Vector2, heading: f32, size: (f32, f32)) -> [Vector2; 4] {
    let ox = size.0 * 0.5;
    let oy = size.1 * 0.5;
    let (s, c) = heading.sin_cos();
    let corner = |lx: f32, ly: f32| Vector2::new(pos.x + lx * c - ly * s, pos.y + lx * s + ly * c);
    [corner(ox, oy), corner(-ox, oy), corner(ox, -oy), corner(-ox, -oy)]
}

#[derive(Clone, Debug)]
pub struct WallProbe {
    pub tile: (i32, i32),
    pub neighbours: Neighbourhood,
    pub corners: [Vector2; 4],
    /// Per corner: does it sit in a wall tile.
    pub in_wall: [bool; 4],
}

impl WallProbe {
    pub fn touching(&self) -> bool {
        self.in_wall.iter().any(|&b| b)
    }
}

/// `None` when no wall is next to the car.
pub fn probe_walls(map: &TileMap, car: &Car, size: (f32, f32)) -> Option<WallProbe> {
    let tile = map.world_to_tile(car.pos);
    let neighbours = neighbourhood(map, tile);
    if !has_wall(&neighbours) {
        return None;
    }

    let corners = car_corners(car.pos, car.heading, size);
    let mut in_wall = [false; 4];
    for (hit, p) in in_wall.iter_mut().zip(corners.iter()) {
        let (tx, ty) = map.world_to_tile(*p);
        *hit = matches!(map.get(tx, ty), Some(TileKind::Wall));
    }

    Some(WallProbe { tile, neighbours, corners, in_wall })
}

/// Decides a corrected pose for a car near a wall.
pub trait CollisionResponse {
    fn resolve(&self, pose: CarPose, probe: &WallProbe) -> Option<CarPose>;
}

/// No response policy: the car is never corrected.
pub struct Unresolved;

impl CollisionResponse for Unresolved {
    fn resolve(&self, _pose: CarPose, _probe: &WallProbe) -> Option<CarPose> {
        None
    }
}

/// Runs the probe and asks `response` for a correction.
pub fn check_wall_collision<R: CollisionResponse>(
    map: &TileMap,
    car: &Car,
    size: (f32, f32),
    response: &R,
) -> Option<CarPose> {
    let probe = probe_walls(map, car, size)?;
    if probe.touching() {
        tracing::trace!(
            tile = ?probe.tile,
            neighbours = ?probe.neighbours,
            corners = ?probe.corners,
            in_wall = ?probe.in_wall,
            "car corner inside wall"
        );
    }
    response.resolve(car.pose(), &probe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::car::PlayArea;
    use std::f32::consts::FRAC_PI_2;

    const SIZE: (f32, f32) = (10.0, 20.0);

    fn close(a: Vector2, x: f32, y: f32) -> bool {
        (a.x - x).abs() < 1e-4 && (a.y - y).abs() < 1e-4
    }

    fn track() -> TileMap {
        TileMap::new(800, 400, (10, 10))
    }

    #[test]
    fn corners_upright() {
        let c = car_corners(Vector2::new(100.0, 100.0), 0.0, SIZE);
        assert!(close(c[0], 105.0, 110.0));
        assert!(close(c[1], 95.0, 110.0));
        assert!(close(c[2], 105.0, 90.0));
        assert!(close(c[3], 95.0, 90.0));
    }

    #[test]
    fn corners_quarter_turn() {
        let c = car_corners(Vector2::new(100.0, 100.0), FRAC_PI_2, SIZE);
        // long axis now lies along x
        assert!(close(c[0], 90.0, 105.0));
        assert!(close(c[1], 90.0, 95.0));
        assert!(close(c[2], 110.0, 105.0));
        assert!(close(c[3], 110.0, 95.0));
    }

    #[test]
    fn no_probe_away_from_walls() {
        let car = Car::new(130.0, 200.0, 0.0);
        assert!(probe_walls(&track(), &car, SIZE).is_none());
        assert!(check_wall_collision(&track(), &car, SIZE, &Unresolved).is_none());
    }

    #[test]
    fn probe_near_border() {
        let map = track();
        let car = Car::new(12.0, 200.0, 0.0);
        let probe = probe_walls(&map, &car, SIZE).expect("wall next to car");
        assert_eq!(probe.tile, (1, 20));
        assert_eq!(probe.neighbours[1][0], Some(TileKind::Wall));
        // left corners at x = 7 are in the border column
        assert_eq!(probe.in_wall, [false, true, false, true]);
        assert!(probe.touching());
    }

    #[test]
    fn neighbourhood_off_grid_is_none() {
        let hood = neighbourhood(&track(), (0, 0));
        assert_eq!(hood[0][0], None);
        assert_eq!(hood[1][1], Some(TileKind::Wall));
        assert!(has_wall(&hood));
    }

    #[test]
    fn unresolved_never_corrects() {
        let map = track();
        let car = Car::new(12.0, 12.0, 0.5);
        assert!(check_wall_collision(&map, &car, SIZE, &Unresolved).is_none());
    }

    #[test]
    fn custom_response_is_consulted() {
        struct Nudge;
        impl CollisionResponse for Nudge {
            fn resolve(&self, pose: CarPose, probe: &WallProbe) -> Option<CarPose> {
                probe.touching().then(|| CarPose { pos: Vector2::new(pose.pos.x + 5.0, pose.pos.y), ..pose })
            }
        }
        let map = track();
        let mut car = Car::new(12.0, 200.0, 0.0);
        let fixed = check_wall_collision(&map, &car, SIZE, &Nudge).expect("nudged");
        car.set_pose(fixed, &PlayArea::inset(800, 400, (10, 10)));
        assert!(close(car.pos, 17.0, 200.0));
    }

    #[test]
    fn response_cannot_push_car_off_screen() {
        struct Shove;
        impl CollisionResponse for Shove {
            fn resolve(&self, pose: CarPose, _probe: &WallProbe) -> Option<CarPose> {
                Some(CarPose { pos: Vector2::new(pose.pos.x - 50.0, pose.pos.y - 50.0), ..pose })
            }
        }
        let map = track();
        let area = PlayArea::inset(800, 400, (10, 10));
        let mut car = Car::new(12.0, 15.0, 0.0);
        let shoved = check_wall_collision(&map, &car, SIZE, &Shove).expect("shoved");
        car.set_pose(shoved, &area);
        assert!(close(car.pos, 10.0, 10.0));
    }
}
