//! Car state and kinematics.
//!
//! Heading 0 points up the screen and grows clockwise, so the velocity
//! vector is `(sin h, -cos h) * v` in screen coordinates (y down).
use raylib::prelude::*;
use std::f32::consts::TAU;

/// Key state for one frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub accelerate: bool,
    pub brake: bool,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CarTuning {
    pub rot_rate: f32,   // rad/s
    pub accel_rate: f32, // px/s^2
    pub friction: f32,   // px/s^2, always toward zero
}

impl Default for CarTuning {
    fn default() -> Self {
        Self { rot_rate: 2.0, accel_rate: 50.0, friction: 25.0 }
    }
}

/// Rectangle the car centre must stay inside.
#[derive(Copy, Clone, Debug)]
pub struct PlayArea {
    pub min: Vector2,
    pub max: Vector2,
}

impl PlayArea {
    /// Screen minus one block on every side.
    pub fn inset(screen_width: i32, screen_height: i32, block: (i32, i32)) -> Self {
        Self {
            min: Vector2::new(block.0 as f32, block.1 as f32),
            max: Vector2::new((screen_width - block.0) as f32, (screen_height - block.1) as f32),
        }
    }

    pub fn clamp(&self, p: Vector2) -> Vector2 {
        Vector2::new(p.x.clamp(self.min.x, self.max.x), p.y.clamp(self.min.y, self.max.y))
    }
}

/// Position and heading; what a collision response may correct.
#[derive(Copy, Clone, Debug)]
pub struct CarPose {
    pub pos: Vector2,
    pub heading: f32,
}

#[derive(Clone, Debug)]
pub struct Car {
    pub pos: Vector2,
    pub velocity: f32,
    pub heading: f32,
}

/// Wraps any angle into [0, 2π).
#[inline]
pub fn wrap_heading(a: f32) -> f32 {
    let w = a.rem_euclid(TAU);
    // rem_euclid rounds tiny negatives up to TAU itself
    if w >= TAU { 0.0 } else { w }
}

/// Moves `v` toward zero by `amount` without crossing it.
#[inline]
pub fn apply_friction(v: f32, amount: f32) -> f32 {
    if v > 0.0 {
        (v - amount).max(0.0)
    } else if v < 0.0 {
        (v + amount).min(0.0)
    } else {
        v
    }
}

impl Car {
    pub fn new(x: f32, y: f32, heading: f32) -> Self {
        Self { pos: Vector2::new(x, y), velocity: 0.0, heading: wrap_heading(heading) }
    }

    pub fn pose(&self) -> CarPose {
        CarPose { pos: self.pos, heading: self.heading }
    }

    /// Applies a corrected pose, still kept inside `area`.
    pub fn set_pose(&mut self, pose: CarPose, area: &PlayArea) {
        self.pos = area.clamp(pose.pos);
        self.heading = wrap_heading(pose.heading);
    }

    /// Velocity split into screen axes.
    pub fn velocity_components(&self) -> (f32, f32) {
        (self.heading.sin() * self.velocity, -self.heading.cos() * self.velocity)
    }

    pub fn update(&mut self, controls: Controls, dt: f32, tuning: &CarTuning, area: &PlayArea) {
        if controls.left {
            self.heading -= tuning.rot_rate * dt;
        }
        if controls.right {
            self.heading += tuning.rot_rate * dt;
        }
        if controls.accelerate {
            self.velocity += tuning.accel_rate * dt;
        }
        if controls.brake {
            self.velocity -= tuning.accel_rate * dt;
        }

        self.velocity = apply_friction(self.velocity, tuning.friction * dt);

        let (vx, vy) = self.velocity_components();
        self.pos = Vector2::new(self.pos.x + vx * dt, self.pos.y + vy * dt);

        self.heading = wrap_heading(self.heading);
        self.pos = area.clamp(self.pos);
    }
}
