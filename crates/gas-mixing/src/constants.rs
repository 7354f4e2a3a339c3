/// Total volume of the two-chamber container (m³)
pub const TOTAL_VOLUME_M3: f64 = 2.0;

/// Isothermal mixing temperature (K)
pub const MIXING_TEMPERATURE_K: f64 = 298.0;

/// Progress added per animation frame; 50 frames from start to finish
pub const PROGRESS_STEP: f64 = 0.02;

/// Lightness drop (percentage points) per bar of partial pressure
pub const SHADE_PER_BAR: f64 = 27.0;

/// Hue of gas A (red)
pub const HUE_A: f64 = 0.0;

/// Hue of gas B (blue)
pub const HUE_B: f64 = 240.0;
