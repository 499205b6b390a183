//! Layout of the parts of one assembly and their per-frame local transforms.
//!
//! Each part is placed relative to the one before it, starting from the key.
//! The resulting transforms exclude the shared object rotation.

use crate::constants::*;
use crate::motion::{HammerState, Motion};
use crate::piano::{Part, Piano};
use glam::{Mat4, Vec3};

/// Rest positions of one assembly's parts.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub offsets: [Vec3; PARTS_PER_ASSEMBLY],
    /// Fulcrum of the key/lever and the pivot.
    pub pivot_point: Vec3,
    /// Height of the wire axis; the hammer stops just below it.
    pub wire_centre: f32,
}

impl Placement {
    pub fn new(piano: &Piano, row: usize) -> Self {
        let h = |p: Part| piano.part(p).height();
        let w = |p: Part| piano.part(p).width();

        let zpos = FIRST_ROW_Z + ROW_Z_STEP * row as f32;
        let key = Vec3::new(ASSEMBLY_ORIGIN.x, ASSEMBLY_ORIGIN.y, zpos / ROW_Z_DIVISOR);
        let lever = key
            + Vec3::new(
                w(Part::Key) / 2.0 + w(Part::Lever) / 2.0,
                h(Part::Key) / 2.0 - h(Part::Lever) / 2.0,
                0.0,
            );
        let pivot = lever
            + Vec3::new(
                -PIVOT_SETBACK,
                -h(Part::Pivot) / 2.0 - h(Part::Lever) / 2.0,
                0.0,
            );
        let pivot_point = pivot + Vec3::new(0.0, h(Part::Pivot) / 2.0 + h(Part::Lever) / 2.0, 0.0);
        let hammer_arm = pivot
            + Vec3::new(
                PIVOT_SETBACK,
                h(Part::Pivot) / 2.0 + h(Part::Lever) + h(Part::HammerArm) / 2.0,
                0.0,
            );
        let hammer = hammer_arm + Vec3::new(0.0, h(Part::HammerArm) / 2.0 + h(Part::Hammer) / 2.0, 0.0);
        let damper_arm = hammer
            + Vec3::new(
                DAMPER_SETBACK,
                -h(Part::Hammer) / 2.0 - h(Part::HammerArm) + h(Part::DamperArm) / 2.0,
                0.0,
            );
        let damper = damper_arm + Vec3::new(0.0, h(Part::DamperArm) / 2.0 + h(Part::Damper) / 2.0, 0.0);

        Self {
            offsets: [
                key, lever, pivot, hammer_arm, hammer, damper_arm, damper, damper,
            ],
            pivot_point,
            wire_centre: ASSEMBLY_ORIGIN.y + h(Part::Key) + h(Part::DamperArm),
        }
    }

    pub fn offset(&self, part: Part) -> Vec3 {
        self.offsets[part.index()]
    }

    /// Local transform of `part` for the given stroke state.
    pub fn transform(&self, piano: &Piano, part: Part, hammer: &HammerState, limit: u32) -> Mat4 {
        let offset = self.offset(part);
        let travel = hammer.travel(limit);
        match part {
            Part::Key | Part::Lever => {
                about_pivot(self.pivot_point, Mat4::from_rotation_z(lever_tilt_deg(travel).to_radians()))
                    * Mat4::from_translation(offset)
            }
            Part::Pivot => {
                about_pivot(self.pivot_point, Mat4::from_rotation_y(PIVOT_TURN_DEG.to_radians()))
                    * Mat4::from_translation(offset)
            }
            Part::HammerArm | Part::Hammer | Part::DamperArm | Part::Damper => {
                Mat4::from_translation(offset + Vec3::Y * self.lift(piano, part, hammer, limit))
            }
            Part::Wire => {
                let wire = piano.part(Part::Wire);
                let rest = Mat4::from_translation(offset)
                    * Mat4::from_rotation_z(WIRE_TURN_DEG.to_radians())
                    * Mat4::from_translation(Vec3::new(
                        -piano.part(Part::Damper).height() / 2.0 - wire.width() / 2.0,
                        WIRE_LIFT,
                        WIRE_DEPTH_SHIFT,
                    ));
                if hammer.motion == Motion::Falling {
                    let j = wire_jitter(hammer);
                    rest * Mat4::from_translation(Vec3::new(j + WIRE_STRIKE_SHIFT, j, j))
                } else {
                    rest
                }
            }
        }
    }

    /// Vertical lift of the hammer and damper groups; zero at rest.
    pub fn lift(&self, piano: &Piano, part: Part, hammer: &HammerState, limit: u32) -> f32 {
        if !hammer.is_active() {
            return 0.0;
        }
        let travel = hammer.travel(limit);
        let reach = self.wire_centre - piano.part(Part::DamperArm).height() / 2.0;
        let mut lift = travel * reach;
        if matches!(part, Part::DamperArm | Part::Damper) {
            lift += travel * DAMPER_EXTRA_LIFT;
        }
        lift
    }
}

/// Key and lever tilt in degrees for a stroke fraction.
pub fn lever_tilt_deg(travel: f32) -> f32 {
    travel * LEVER_MAX_TILT_DEG
}

/// Positional jitter of the wire after the strike, identical on every axis.
/// Zero unless the hammer is falling.
pub fn wire_jitter(hammer: &HammerState) -> f32 {
    if hammer.motion != Motion::Falling {
        return 0.0;
    }
    (JITTER_FREQUENCY * TRUNCATED_PI * hammer.position as f32 * JITTER_SCALE).sin()
}

fn about_pivot(pivot: Vec3, rotation: Mat4) -> Mat4 {
    Mat4::from_translation(pivot) * rotation * Mat4::from_translation(-pivot)
}
