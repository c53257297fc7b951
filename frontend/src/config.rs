use log::Level;

pub const BOOT_LINE_INTERVAL_MS: u32 = 800;
pub const FLOW_STAGE_INTERVAL_MS: u32 = 2_500;
pub const FRAMEWORK_STEP_INTERVAL_MS: u32 = 2_000;
pub const GROWTH_BAR_INTERVAL_MS: u32 = 100;

/// Delay before the newsletter popup opens on its own.
pub const NEWSLETTER_DELAY_MS: u32 = 15_000;

/// Scroll offset after which the nav bar turns solid.
pub const NAV_SOLID_AFTER_PX: f64 = 50.0;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Per-tick logging while developing locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}
