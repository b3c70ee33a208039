//! Default tuning constants for floating item motion.
//!
//! These are defaults only: every speed and tolerance can be overridden
//! through [`crate::config::ItemSettings`].

/// Speed factor for eased movement (fraction of the remaining distance per second).
pub const EASED_MOVE_SPEED: f32 = 1.5;
/// Per-axis distance at which eased movement counts as arrived.
pub const EASED_MOVE_TOLERANCE: f32 = 15.0;
/// Constant movement speed in world units per second.
pub const CONSTANT_MOVE_SPEED: f32 = 15.0;
/// Per-axis distance at which constant movement counts as arrived.
pub const CONSTANT_MOVE_TOLERANCE: f32 = 2.0;
/// Speed factor for eased rotation.
pub const EASED_ROTATE_SPEED: f32 = 1.5;
/// Quaternion component tolerance for eased rotation arrival.
pub const EASED_ROTATE_TOLERANCE: f32 = 0.3;
/// Constant angular speed in radians per second.
pub const CONSTANT_ROTATE_SPEED: f32 = 1.5;
/// Quaternion component tolerance for constant rotation arrival.
pub const CONSTANT_ROTATE_TOLERANCE: f32 = 0.01;

/// Half size of the cuboid around the base position used for random targets.
pub const TARGET_BOX_HALF_EXTENT: f32 = 50.0;
/// Squared length below which a constant-speed direction counts as arrived.
pub const DIRECTION_EPSILON_SQUARED: f32 = 0.01;
/// Squared distance below which eased movement snaps onto its target.
pub const EASED_SNAP_DISTANCE_SQUARED: f32 = 1.0e-4;
/// Smallest angular distance used when scaling a constant-speed slerp.
pub const MIN_ANGULAR_DISTANCE: f32 = 1.0e-8;

/// Lower bound of the randomised oscillation frequency in hertz.
pub const MIN_OSCILLATION_FREQUENCY: f32 = 0.5;
/// Upper bound of the randomised oscillation frequency in hertz.
pub const MAX_OSCILLATION_FREQUENCY: f32 = 2.0;
/// Lower bound of the randomised oscillation amplitude.
pub const MIN_OSCILLATION_AMPLITUDE: f32 = 18.0;
/// Upper bound of the randomised oscillation amplitude.
pub const MAX_OSCILLATION_AMPLITUDE: f32 = 60.0;

/// Seconds an overlay message stays visible after its last report.
pub const DEBUG_MESSAGE_SECONDS: f32 = 5.0;
/// Length of the forward arrow drawn for each item.
pub const DEBUG_ARROW_LENGTH: f32 = 60.0;
/// Head size of the forward arrow.
pub const DEBUG_ARROW_HEAD_SIZE: f32 = 12.5;
/// Radius of the debug sphere around each item.
pub const DEBUG_SPHERE_RADIUS: f32 = 30.0;
/// Segment count of the debug sphere.
pub const DEBUG_SPHERE_SEGMENTS: u32 = 12;
/// Size of the debug point marking the item origin.
pub const DEBUG_POINT_SIZE: f32 = 15.0;
/// Line thickness used for debug primitives.
pub const DEBUG_LINE_THICKNESS: f32 = 1.2;
