use log::Level;

use crate::motion::spring::SpringConfig;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

/// How long a simulated submission stays in `Submitting`.
pub const SUBMIT_DELAY_MS: u32 = 1_500;

pub const PROCESS_STEP_COUNT: usize = 5;
/// Height of the pinned process section in viewport heights.
pub const PROCESS_REGION_VIEWPORTS: f64 = 3.0;

/// Scroll distance over which the hero fades and recedes.
pub const HERO_FADE_DISTANCE: f64 = 500.0;

pub const CURSOR_SPRING: SpringConfig = SpringConfig {
    stiffness: 300.0,
    damping: 25.0,
    mass: 0.5,
};
pub const CURSOR_SIZE_PX: f64 = 16.0;
pub const CURSOR_HOVER_SCALE: f64 = 2.5;
/// Off-screen until the first pointer move.
pub const CURSOR_START: (f64, f64) = (-100.0, -100.0);
pub const CURSOR_FRAME_MS: u32 = 16;

/// How far inside the viewport cards and statements travel before revealing.
pub const REVEAL_INSET_PX: f64 = 100.0;
pub const CASE_REVEAL_INSET_PX: f64 = 50.0;

/// Attribute that opts an element into the cursor's hover state.
pub const HOVER_TRIGGER_ATTR: &str = "data-hover-trigger";
