// Smoothing and interaction tuning shared by every front-end.

// Scale easing: target = (SCALE_TARGET_BASE - dist * DIST_GAIN) * SCALE_TARGET_UNIT
pub const SCALE_TARGET_BASE: f64 = 100.0;
pub const DIST_GAIN: f64 = 8.0;
pub const SCALE_TARGET_UNIT: f64 = 0.01;
pub const SCALE_EASE: f64 = 0.1; // fraction of the gap closed per tick
pub const SCALE_INITIAL: f64 = 1.0;

// Debounce window = ((lineDelay + lineLength) / 2) * DEBOUNCE_MS_PER_UNIT
pub const DEBOUNCE_MS_PER_UNIT: f64 = 100.0;

// Visual sizing
pub const CLICK_SHRINK_PX: f64 = 2.0; // dot radius reduction while pressed
pub const MARKER_SCALE: f64 = 3.0; // marker radius = dotSize * MARKER_SCALE

// Configuration defaults
pub const DEFAULT_DOT_COLOR: &str = "#000";
pub const DEFAULT_DOT_SIZE: f64 = 8.0;
pub const DEFAULT_DOT_REDUCTION_RATIO: f64 = 0.25;
pub const DEFAULT_LINE_COLOR: &str = "#000";
pub const DEFAULT_LINE_DELAY: f64 = 2.0;
pub const DEFAULT_LINE_LENGTH: usize = 12;
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;
pub const DEFAULT_MARKER_COLOR: &str = "#fff";

// Documented configuration ranges
pub const LINE_DELAY_MIN: f64 = 2.0;
pub const LINE_LENGTH_MIN: usize = 2;
pub const LINE_LENGTH_MAX: usize = 20;
pub const LINE_WIDTH_MIN: f64 = 1.0;

// Elements that always count as hover targets
pub const HOVER_CLASS_SELECTOR: &str = ".c-cursor-hover";
pub const INTERACTIVE_SELECTORS: [&str; 6] = ["a", "input", "button", "label", "select", "textarea"];
