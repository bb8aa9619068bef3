//! Rendering options data model.
//!
//! Eine einzelne unveraenderliche Options-Instanz wird explizit durch jeden
//! Rendering-Schritt gereicht; es gibt keinen prozessweiten Zustand.
//!
//! # Beispiel
//!
//! ```
//! use bitblick::{GroupSpec, RenderOptions};
//!
//! let opts = RenderOptions::default()
//!     .with_width(Some(16))
//!     .with_group(GroupSpec::uniform(4))
//!     .with_number_bits(true);
//!
//! assert_eq!(opts.width(), Some(16));
//! assert!(opts.number_bits());
//! assert!(opts.validate().is_ok());
//! ```

use crate::group::GroupSpec;
use crate::{Error, Result};

/// Options controlling how parsed values are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub(crate) width: Option<usize>,
    pub(crate) group: GroupSpec,
    pub(crate) color: bool,
    pub(crate) number_bits: bool,
    pub(crate) number_from: i64,
    pub(crate) reverse_numbering: bool,
    pub(crate) highlight_on: bool,
    pub(crate) highlight_off: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: None,
            group: GroupSpec::Uniform(0),
            color: false,
            number_bits: false,
            number_from: 0,
            reverse_numbering: false,
            highlight_on: false,
            highlight_off: false,
        }
    }
}

impl RenderOptions {
    /// Explicit output width; `None` enables ladder auto-detection.
    pub fn width(&self) -> Option<usize> {
        self.width
    }

    /// The grouping configuration shared by ruler and bit lines.
    pub fn group(&self) -> &GroupSpec {
        &self.group
    }

    /// Color mode: group boundaries conveyed by color instead of spaces.
    pub fn color(&self) -> bool {
        self.color
    }

    /// Whether the positional ruler is emitted above the bit lines.
    pub fn number_bits(&self) -> bool {
        self.number_bits
    }

    /// Bit numbering origin (default 0); must be non-negative.
    pub fn number_from(&self) -> i64 {
        self.number_from
    }

    /// Number from the most-significant column instead of the least.
    pub fn reverse_numbering(&self) -> bool {
        self.reverse_numbering
    }

    /// Emphasize runs of set bits.
    pub fn highlight_on(&self) -> bool {
        self.highlight_on
    }

    /// Emphasize runs of clear bits.
    pub fn highlight_off(&self) -> bool {
        self.highlight_off
    }

    pub fn set_width(&mut self, width: Option<usize>) {
        self.width = width;
    }

    pub fn set_group(&mut self, group: GroupSpec) {
        self.group = group;
    }

    pub fn set_color(&mut self, color: bool) {
        self.color = color;
    }

    pub fn set_number_bits(&mut self, number_bits: bool) {
        self.number_bits = number_bits;
    }

    pub fn set_number_from(&mut self, number_from: i64) {
        self.number_from = number_from;
    }

    pub fn set_reverse_numbering(&mut self, reverse: bool) {
        self.reverse_numbering = reverse;
    }

    pub fn set_highlight_on(&mut self, on: bool) {
        self.highlight_on = on;
    }

    pub fn set_highlight_off(&mut self, off: bool) {
        self.highlight_off = off;
    }

    pub fn with_width(mut self, width: Option<usize>) -> Self {
        self.width = width;
        self
    }

    pub fn with_group(mut self, group: GroupSpec) -> Self {
        self.group = group;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_number_bits(mut self, number_bits: bool) -> Self {
        self.number_bits = number_bits;
        self
    }

    pub fn with_number_from(mut self, number_from: i64) -> Self {
        self.number_from = number_from;
        self
    }

    pub fn with_reverse_numbering(mut self, reverse: bool) -> Self {
        self.reverse_numbering = reverse;
        self
    }

    pub fn with_highlight_on(mut self, on: bool) -> Self {
        self.highlight_on = on;
        self
    }

    pub fn with_highlight_off(mut self, off: bool) -> Self {
        self.highlight_off = off;
        self
    }

    /// Checks cross-field constraints.
    pub fn validate(&self) -> Result<()> {
        if self.number_from < 0 {
            return Err(Error::InvalidNumberFrom(self.number_from));
        }
        Ok(())
    }
}
