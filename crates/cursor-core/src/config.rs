//! Per-mount cursor configuration.
//!
//! The engine assumes every value is already inside its documented range.
//! Callers that accept untrusted options (the wasm wrapper) run
//! [`CursorConfig::validate`] and fall back to [`CursorConfig::clamped`].

use crate::constants::*;
use serde::Deserialize;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CursorConfig {
    pub dot_color: String,
    pub dot_size: f64,
    pub dot_reduction_ratio: f64,
    pub line_color: String,
    pub line_delay: f64,
    pub line_length: usize,
    pub line_width: f64,
    pub marker_color: String,
    pub extra_no_cursor_selectors: Vec<String>,
    pub marker_blend_mode_enabled: bool,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            dot_color: DEFAULT_DOT_COLOR.to_string(),
            dot_size: DEFAULT_DOT_SIZE,
            dot_reduction_ratio: DEFAULT_DOT_REDUCTION_RATIO,
            line_color: DEFAULT_LINE_COLOR.to_string(),
            line_delay: DEFAULT_LINE_DELAY,
            line_length: DEFAULT_LINE_LENGTH,
            line_width: DEFAULT_LINE_WIDTH,
            marker_color: DEFAULT_MARKER_COLOR.to_string(),
            extra_no_cursor_selectors: Vec::new(),
            marker_blend_mode_enabled: true,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("lineDelay must be >= 2, got {0}")]
    LineDelay(f64),
    #[error("lineLength must be within 2..=20, got {0}")]
    LineLength(usize),
    #[error("lineWidth must be >= 1, got {0}")]
    LineWidth(f64),
    #[error("dotSize must be a positive number, got {0}")]
    DotSize(f64),
}

impl CursorConfig {
    /// Reports the first value outside its documented range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // negated comparisons so NaN fails too
        if !(self.line_delay >= LINE_DELAY_MIN) {
            return Err(ConfigError::LineDelay(self.line_delay));
        }
        if !(LINE_LENGTH_MIN..=LINE_LENGTH_MAX).contains(&self.line_length) {
            return Err(ConfigError::LineLength(self.line_length));
        }
        if !(self.line_width >= LINE_WIDTH_MIN) {
            return Err(ConfigError::LineWidth(self.line_width));
        }
        if !(self.dot_size > 0.0) {
            return Err(ConfigError::DotSize(self.dot_size));
        }
        Ok(())
    }

    /// Copy with every ranged field forced into range.
    pub fn clamped(&self) -> Self {
        let or_default = |v: f64, min: f64, default: f64| {
            if v.is_nan() {
                default
            } else {
                v.max(min)
            }
        };
        let dot_size = if self.dot_size > 0.0 {
            self.dot_size
        } else {
            DEFAULT_DOT_SIZE
        };
        Self {
            dot_size,
            line_delay: or_default(self.line_delay, LINE_DELAY_MIN, DEFAULT_LINE_DELAY),
            line_length: self.line_length.clamp(LINE_LENGTH_MIN, LINE_LENGTH_MAX),
            line_width: or_default(self.line_width, LINE_WIDTH_MIN, DEFAULT_LINE_WIDTH),
            ..self.clone()
        }
    }

    /// Milliseconds without re-arming after which the render loop stops.
    #[inline]
    pub fn debounce_ms(&self) -> u32 {
        let ms = (self.line_delay + self.line_length as f64) / 2.0 * DEBOUNCE_MS_PER_UNIT;
        ms.max(0.0) as u32
    }

    /// Fixed hover selectors joined with the caller's extras, ready for a
    /// single document-wide query.
    pub fn hover_selector(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(
            1 + INTERACTIVE_SELECTORS.len() + self.extra_no_cursor_selectors.len(),
        );
        parts.push(HOVER_CLASS_SELECTOR);
        parts.extend(INTERACTIVE_SELECTORS);
        parts.extend(
            self.extra_no_cursor_selectors
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty()),
        );
        parts.join(", ")
    }
}
