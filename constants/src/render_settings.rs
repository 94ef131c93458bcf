/// Smallest half-extent of the bounding cube, whatever the viewport height.
pub const MIN_BOX_SIZE: f32 = 100.0;

/// Half-extent is the viewport height divided by this.
pub const BOX_VIEWPORT_DIVISOR: f32 = 4.0;

/// Grid lines per half-extent on the floor face.
pub const GRID_DIVISIONS: u32 = 5;

pub const MARKER_CUBE_SIZE: f32 = 3.0;
pub const FEATURED_SPHERE_RADIUS: f32 = 10.0;

pub const BACKGROUND_GRAY: u8 = 241;
pub const FRAME_LINE_GRAY: u8 = 0;
pub const GRID_LINE_GRAY: u8 = 200;

/// Fixed simulation cadence driving the orbit and the feature selector.
pub const FIXED_TICK_HZ: f64 = 60.0;

/// World rotation added per fixed tick, in radians.
pub const ORBIT_STEP: f32 = 0.01;

/// Seconds-ish between featured record changes, scaled by `FEATURE_TICKS_PER_INTERVAL`.
pub const FEATURE_INTERVAL: f32 = 0.8;
pub const FEATURE_TICKS_PER_INTERVAL: f32 = 100.0;
