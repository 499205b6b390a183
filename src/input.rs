//! Keyboard classification and dispatch.
//!
//! Raw key names are first classified into an [`InputEvent`]; held-key
//! controls are `Continuous`, one-shot actions are `Edge` and only fire on the
//! initial press.

use crate::constants::*;
use crate::scene::{Scene, SpeedChange};

pub const CONTROLS_HELP: &str = "Welcome to Piano Hammer
Rotate
  Q: object, 1: view; anti-clockwise on x-axis
  W: object, 2: view; clockwise on x-axis
  E: object, 3: view; anti-clockwise on y-axis
  R: object, 4: view; clockwise on y-axis
  T: object, 5: view; anti-clockwise on z-axis
  Y: object, 6: view; clockwise on z-axis
Play
  A: C key, S: C# key, D: D key, F: D# key, G: E key
Zoom
  Z: out, X: in
Hammer speed
  C: decrease, V: increase
ESC: quit";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Repeat,
    Release,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn unit(self) -> glam::Vec3 {
        match self {
            Axis::X => glam::Vec3::X,
            Axis::Y => glam::Vec3::Y,
            Axis::Z => glam::Vec3::Z,
        }
    }
}

/// Applied on every press and auto-repeat while the key is held.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Control {
    ViewTurn(Axis, f32),
    Zoom(f32),
}

/// Fired once per press.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    /// Change the object's angular velocity about an axis.
    Spin(Axis, f32),
    Strike(usize),
    Speed(SpeedChange),
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Continuous(Control),
    Edge(Action),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Handled,
    /// The action was understood but refused (e.g. speed change while moving).
    Refused,
    Quit,
}

#[inline]
pub fn control_for_key(key: &str) -> Option<Control> {
    match key {
        "z" | "Z" => Some(Control::Zoom(ZOOM_STEP)),
        "x" | "X" => Some(Control::Zoom(-ZOOM_STEP)),
        "1" => Some(Control::ViewTurn(Axis::X, VIEW_TURN_STEP_DEG)),
        "2" => Some(Control::ViewTurn(Axis::X, -VIEW_TURN_STEP_DEG)),
        "3" => Some(Control::ViewTurn(Axis::Y, VIEW_TURN_STEP_DEG)),
        "4" => Some(Control::ViewTurn(Axis::Y, -VIEW_TURN_STEP_DEG)),
        "5" => Some(Control::ViewTurn(Axis::Z, VIEW_TURN_STEP_DEG)),
        "6" => Some(Control::ViewTurn(Axis::Z, -VIEW_TURN_STEP_DEG)),
        _ => None,
    }
}

#[inline]
pub fn action_for_key(key: &str) -> Option<Action> {
    match key {
        "q" | "Q" => Some(Action::Spin(Axis::X, -SPIN_STEP_DEG)),
        "w" | "W" => Some(Action::Spin(Axis::X, SPIN_STEP_DEG)),
        "e" | "E" => Some(Action::Spin(Axis::Y, -SPIN_STEP_DEG)),
        "r" | "R" => Some(Action::Spin(Axis::Y, SPIN_STEP_DEG)),
        "t" | "T" => Some(Action::Spin(Axis::Z, -SPIN_STEP_DEG)),
        "y" | "Y" => Some(Action::Spin(Axis::Z, SPIN_STEP_DEG)),
        "a" | "A" => Some(Action::Strike(0)),
        "s" | "S" => Some(Action::Strike(1)),
        "d" | "D" => Some(Action::Strike(2)),
        "f" | "F" => Some(Action::Strike(3)),
        "g" | "G" => Some(Action::Strike(4)),
        "c" | "C" => Some(Action::Speed(SpeedChange::Slower)),
        "v" | "V" => Some(Action::Speed(SpeedChange::Faster)),
        "Escape" => Some(Action::Quit),
        _ => None,
    }
}

pub fn classify(key: &str, action: KeyAction) -> Option<InputEvent> {
    if action == KeyAction::Release {
        return None;
    }
    if let Some(control) = control_for_key(key) {
        return Some(InputEvent::Continuous(control));
    }
    if action != KeyAction::Press {
        return None;
    }
    action_for_key(key).map(InputEvent::Edge)
}

pub fn dispatch(scene: &mut Scene, event: InputEvent) -> Outcome {
    match event {
        InputEvent::Continuous(Control::Zoom(delta)) => {
            scene.view.zoom += delta;
            Outcome::Handled
        }
        InputEvent::Continuous(Control::ViewTurn(axis, delta)) => {
            scene.view.rotation_deg += axis.unit() * delta;
            Outcome::Handled
        }
        InputEvent::Edge(Action::Spin(axis, delta)) => {
            scene.spin.velocity_deg += axis.unit() * delta;
            Outcome::Handled
        }
        InputEvent::Edge(Action::Strike(index)) => {
            if scene.move_hammer(index) {
                Outcome::Handled
            } else {
                Outcome::Refused
            }
        }
        InputEvent::Edge(Action::Speed(change)) => match scene.adjust_speed(change) {
            Ok(limit) => {
                log::info!("Speed of hammer: {}ms", limit / 2);
                Outcome::Handled
            }
            Err(e) => {
                log::warn!("[keys] {e}");
                Outcome::Refused
            }
        },
        InputEvent::Edge(Action::Quit) => Outcome::Quit,
    }
}
