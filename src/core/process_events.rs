use raylib::prelude::*;
use crate::core::car::{Car, CarTuning, Controls, PlayArea};

pub const KEY_LEFT: KeyboardKey = KeyboardKey::KEY_A;
pub const KEY_RIGHT: KeyboardKey = KeyboardKey::KEY_D;
pub const KEY_ACCELERATE: KeyboardKey = KeyboardKey::KEY_W;
pub const KEY_BRAKE: KeyboardKey = KeyboardKey::KEY_S;

pub fn read_controls(window: &RaylibHandle) -> Controls {
    Controls {
        left: window.is_key_down(KEY_LEFT),
        right: window.is_key_down(KEY_RIGHT),
        accelerate: window.is_key_down(KEY_ACCELERATE),
        brake: window.is_key_down(KEY_BRAKE),
    }
}

/// Polls the held keys and advances the car by this frame's time.
pub fn process_events(window: &RaylibHandle, car: &mut Car, tuning: &CarTuning, area: &PlayArea) {
    let dt = window.get_frame_time();
    let controls = read_controls(window);
    car.update(controls, dt, tuning, area);
}
