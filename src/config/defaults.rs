// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Language**: Fallback language code
//! - **Switcher Transition**: Timings and spring parameters of the language sheet
//! - **Frame Scheduling**: Tick interval while a transition is running

// ==========================================================================
// Language Defaults
// ==========================================================================

/// Language used when neither the user nor the device names a supported one.
/// Its catalog defines the canonical key set.
pub const DEFAULT_LANGUAGE: &str = "en";

// ==========================================================================
// Switcher Transition Defaults
// ==========================================================================

/// Duration of the overlay fade when the sheet opens (milliseconds).
pub const OVERLAY_FADE_IN_MS: u64 = 300;

/// Duration of both the fade and the slide when the sheet closes (milliseconds).
pub const SHEET_EXIT_MS: u64 = 250;

/// Off-screen offset of the sheet content before it slides in (logical pixels).
pub const SHEET_HIDDEN_OFFSET: f32 = 300.0;

/// Spring stiffness for the sheet entrance.
pub const SPRING_STIFFNESS: f32 = 100.0;

/// Spring damping for the sheet entrance.
pub const SPRING_DAMPING: f32 = 20.0;

/// Spring mass for the sheet entrance.
pub const SPRING_MASS: f32 = 1.0;

/// The spring is at rest once both displacement and speed fall below this.
pub const SPRING_REST_THRESHOLD: f32 = 0.001;

/// Maximum opacity of the dimmed backdrop behind the sheet.
pub const BACKDROP_MAX_ALPHA: f32 = 0.5;

// ==========================================================================
// Frame Scheduling Defaults
// ==========================================================================

/// Interval between animation ticks while a transition is in flight (milliseconds).
pub const FRAME_INTERVAL_MS: u64 = 16;
