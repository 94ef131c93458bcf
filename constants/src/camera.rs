pub const MIN_CAMERA_DISTANCE: f32 = 800.0;
pub const MAX_CAMERA_DISTANCE: f32 = 1500.0;

/// Eye distance from the origin along +Z after a reset.
pub const RESET_CAMERA_DISTANCE: f32 = 800.0;

/// Vertical field of view (60 degrees).
pub const CAMERA_FOV: f32 = std::f32::consts::FRAC_PI_3;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 10_000.0;

pub const ORBIT_YAW_SENSITIVITY: f32 = 0.0035;
pub const ORBIT_PITCH_SENSITIVITY: f32 = 0.0030;
pub const PITCH_LIMIT: f32 = 1.55;

/// Pan distance per pixel, as a fraction of the eye distance.
pub const PAN_SENSITIVITY: f32 = 0.001;

/// Fraction of the eye distance moved per scroll line.
pub const ZOOM_STEP: f32 = 0.1;
