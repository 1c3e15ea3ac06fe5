//! Threshold-to-color resolution.
//!
//! A [`ColorScale`] owns two parallel sequences: `N` ascending thresholds and
//! `N + 1` color tokens. The thresholds cut the number line into buckets:
//! one unbounded bucket below the first threshold, one between each adjacent
//! pair, one unbounded above the last, and each bucket maps to the token at
//! the corresponding index.

use crate::error::{Result, TileError};

/// An ordered set of numeric thresholds with one color token per bucket.
///
/// The intended invariants (`thresholds` strictly ascending,
/// `colors.len() == thresholds.len() + 1`) are the configuration editor's
/// responsibility and are not enforced here; [`ColorScale::color_for`]
/// degrades to "no match" instead of panicking when they are violated.
/// Use [`ColorScale::is_well_formed`] to report violations to the user.
///
/// # Examples
///
/// ```rust
/// use sensortile_rs_core::ColorScale;
///
/// let scale = ColorScale::parse("0 10 20", "blue green yellow red").unwrap();
/// assert_eq!(scale.color_for(15.0), Some("yellow"));
/// assert_eq!(scale.color_for(-5.0), Some("blue"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    thresholds: Vec<f64>,
    colors: Vec<String>,
}

impl ColorScale {
    /// Create a scale from already-parsed sequences.
    #[must_use]
    pub fn new(thresholds: Vec<f64>, colors: Vec<String>) -> Self {
        Self { thresholds, colors }
    }

    /// Parse a scale from the space-separated configuration strings.
    ///
    /// Tokens are split on whitespace and trimmed. Thresholds must parse as
    /// numbers; color tokens are taken as-is (unknown names resolve to the
    /// palette fallback later, at lookup time).
    ///
    /// # Errors
    ///
    /// Returns [`TileError::Config`] if any threshold token is not a valid
    /// number.
    pub fn parse(numbers: &str, colors: &str) -> Result<Self> {
        let thresholds = numbers
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|_| {
                    TileError::config_with_value("threshold is not a number", token)
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        let colors = colors
            .split_whitespace()
            .map(str::to_owned)
            .collect::<Vec<String>>();

        Ok(Self { thresholds, colors })
    }

    /// The configured thresholds, in configuration order.
    #[must_use]
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// The configured color tokens, in configuration order.
    #[must_use]
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Check the intended invariants without rejecting anything.
    ///
    /// Returns `true` when the thresholds are strictly ascending and there is
    /// exactly one more color than thresholds. A scale that is not well
    /// formed still resolves, it just falls back for the buckets it cannot
    /// cover.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let ascending = self
            .thresholds
            .windows(2)
            .all(|pair| pair[0] < pair[1]);
        ascending && self.colors.len() == self.thresholds.len() + 1
    }

    /// Resolve a value to the color token of its bucket.
    ///
    /// Linear scan, first match wins. The lower bound of each bucket is
    /// inclusive: `value == thresholds[i]` belongs to the bucket starting at
    /// `i`, not the one ending there.
    ///
    /// Returns `None` ("no match", rendered as the palette fallback) when:
    /// - the threshold list is empty,
    /// - `value` is NaN (every comparison is false),
    /// - the winning bucket's color index is past the end of the color list.
    ///
    /// Pure function of its inputs; repeated calls yield identical results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sensortile_rs_core::ColorScale;
    ///
    /// let scale = ColorScale::parse("0 10 20", "blue green yellow red").unwrap();
    /// assert_eq!(scale.color_for(10.0), Some("yellow"));
    /// assert_eq!(scale.color_for(f64::NAN), None);
    /// ```
    #[must_use]
    pub fn color_for(&self, value: f64) -> Option<&str> {
        let first = *self.thresholds.first()?;
        if value < first {
            return self.colors.first().map(String::as_str);
        }

        let last = self.thresholds.len() - 1;
        for (i, &threshold) in self.thresholds.iter().enumerate() {
            let upper_open = i == last || value < self.thresholds[i + 1];
            if value >= threshold && upper_open {
                return self.colors.get(i + 1).map(String::as_str);
            }
        }

        None
    }

    /// Resolve a value straight to its hex color, fallback included.
    ///
    /// Convenience over [`ColorScale::color_for`] followed by a palette
    /// lookup.
    #[must_use]
    pub fn hex_for(&self, value: f64) -> &'static str {
        crate::palette::resolve(self.color_for(value))
    }
}
