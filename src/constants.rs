use glam::{Vec3, Vec4};

// Shared geometry/animation tuning constants used by the core and the native frontend.

// Geometry
pub const EDGE_POINTS: usize = 20; // subdivisions of the cylinder cross-section

// Scene composition
pub const ASSEMBLY_COUNT: usize = 5; // one assembly per playable key
pub const PARTS_PER_ASSEMBLY: usize = 8;

// Hammer timing, in update ticks for a full rise
pub const DEFAULT_LIMIT: u32 = 150;
pub const LIMIT_STEP: u32 = 50;
pub const MIN_LIMIT: u32 = 50; // fastest hammer
pub const MAX_LIMIT: u32 = 500; // slowest hammer

// Animation
pub const LEVER_MAX_TILT_DEG: f32 = 18.0; // key/lever tilt at the top of the stroke
pub const PIVOT_TURN_DEG: f32 = 65.0; // presents the pivot edge-on
pub const WIRE_TURN_DEG: f32 = 90.0; // lays the wire along the x-axis
pub const DAMPER_EXTRA_LIFT: f32 = 0.31; // damper travels further than the hammer
pub const WIRE_STRIKE_SHIFT: f32 = 0.05; // x nudge applied while the wire vibrates

// Truncated pi for cylinder edge angles and the wire jitter; both depend on it.
#[allow(clippy::approx_constant)]
pub const TRUNCATED_PI: f32 = 3.141592;

// Wire vibration: sin(JITTER_FREQUENCY * TRUNCATED_PI * position * JITTER_SCALE).
pub const JITTER_FREQUENCY: f32 = 3.5;
pub const JITTER_SCALE: f32 = 100.0;

// Layout
pub const ASSEMBLY_ORIGIN: Vec3 = Vec3::new(-2.0, -1.0, 0.0); // key position of row 0 (z from rows)
pub const FIRST_ROW_Z: f32 = -2.0;
pub const ROW_Z_STEP: f32 = 1.0;
pub const ROW_Z_DIVISOR: f32 = 3.6; // squeezes rows together along z
pub const PIVOT_SETBACK: f32 = 0.8; // pivot sits this far back from the lever centre
pub const DAMPER_SETBACK: f32 = 1.0; // damper arm distance from the hammer arm
pub const WIRE_LIFT: f32 = 1.5;
pub const WIRE_DEPTH_SHIFT: f32 = 0.05;

// View
pub const INITIAL_ZOOM: f32 = 8.0;
pub const DEFAULT_ASPECT: f32 = 1.3333;
pub const FOVY_DEG: f32 = 45.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;
pub const ZOOM_STEP: f32 = 0.2;
pub const VIEW_TURN_STEP_DEG: f32 = 0.5;
pub const SPIN_STEP_DEG: f32 = 0.05; // angular velocity change per key press

// Palette
pub const NATURAL_KEY_COLOR: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0); // white
pub const SHARP_KEY_COLOR: Vec4 = Vec4::new(0.1, 0.1, 0.1, 1.0); // near-black
pub const LEVER_COLOR: Vec4 = Vec4::new(0.8, 0.56, 0.35, 1.0); // tan
pub const PIVOT_COLOR: Vec4 = Vec4::new(0.8, 0.35, 0.36, 1.0); // salmon
pub const HAMMER_COLOR: Vec4 = Vec4::new(0.59, 0.8, 0.35, 1.0); // green
pub const DAMPER_COLOR: Vec4 = Vec4::new(0.8, 0.35, 0.59, 1.0); // pink
pub const WIRE_COLOR: Vec4 = Vec4::new(0.8, 0.78, 0.35, 1.0); // yellow-brown
pub const CLEAR_COLOR: [f64; 4] = [0.19, 0.05, 0.12, 1.0]; // dark purple

// Window
pub const WINDOW_TITLE: &str = "Piano Hammer";
pub const WINDOW_SIZE: [u32; 2] = [1024, 768];
