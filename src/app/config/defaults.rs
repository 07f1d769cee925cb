// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Window**: Initial and minimum window size
//! - **Animation**: Tick rate driving presentation transitions

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 480;

/// Default window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 720;

/// Minimum window width.
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Maximum window dimension accepted from the config file.
pub const MAX_WINDOW_DIMENSION: u32 = 8192;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Interval between ticks while a transition is running (~60 fps).
pub const ANIMATION_TICK_MS: u64 = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_WINDOW_WIDTH > 0);
    assert!(MIN_WINDOW_HEIGHT > 0);
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
    assert!(MAX_WINDOW_DIMENSION >= DEFAULT_WINDOW_WIDTH);
    assert!(MAX_WINDOW_DIMENSION >= DEFAULT_WINDOW_HEIGHT);
    assert!(ANIMATION_TICK_MS > 0);
};
