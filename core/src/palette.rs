//! Fixed color palette shared by every tile.
//!
//! The palette is the process-wide table mapping human-readable color names
//! (the tokens users type into the configuration editor) to hex values. It is
//! built once on first use and never mutated; unknown tokens resolve to a
//! fixed fallback rather than an error.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Hex value returned for any token the palette does not know.
pub const FALLBACK_COLOR: &str = "#ffffff";

/// Alpha suffix appended by [`translucent`], roughly 30% opacity.
const BACKGROUND_ALPHA: &str = "4D";

/// The fixed name → hex table.
///
/// Names follow the dashboard convention: lowercase, two-word colors joined
/// with a dash ("deep-orange"). `primary` and `light-blue` intentionally
/// share a value, as do `accent` and `orange`.
const ENTRIES: &[(&str, &str)] = &[
    ("primary", "#03a9f4"),
    ("accent", "#ff9800"),
    ("disabled", "#464646"),
    ("red", "#f44336"),
    ("pink", "#e91e63"),
    ("purple", "#926bc7"),
    ("deep-purple", "#6e41ab"),
    ("indigo", "#3f51b5"),
    ("blue", "#2196f3"),
    ("light-blue", "#03a9f4"),
    ("cyan", "#00BCD6"),
    ("teal", "#009688"),
    ("green", "#4caf50"),
    ("light-green", "#8bc34a"),
    ("lime", "#cddc39"),
    ("yellow", "#ffeb3b"),
    ("amber", "#ffc107"),
    ("orange", "#ff9800"),
    ("deep-orange", "#ff6f22"),
    ("brown", "#795548"),
    ("light-grey", "#bdbdbd"),
    ("grey", "#9e9e9e"),
    ("dark-grey", "#606060"),
    ("blue-grey", "#607d8b"),
    ("black", "#000000"),
    ("white", "#ffffff"),
];

static TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| ENTRIES.iter().copied().collect());

/// Look up a color token, falling back to [`FALLBACK_COLOR`] for unknown names.
///
/// Tokens are expected to be trimmed by the caller; lookup is exact,
/// case-sensitive.
///
/// # Examples
///
/// ```rust
/// use sensortile_rs_core::palette;
///
/// assert_eq!(palette::lookup("blue"), "#2196f3");
/// assert_eq!(palette::lookup("not-a-real-color"), "#ffffff");
/// ```
#[must_use]
pub fn lookup(token: &str) -> &'static str {
    TABLE.get(token).copied().unwrap_or(FALLBACK_COLOR)
}

/// Resolve an optional token, treating `None` (no matching bucket) as the
/// fallback.
#[must_use]
pub fn resolve(token: Option<&str>) -> &'static str {
    match token {
        Some(token) => lookup(token),
        None => FALLBACK_COLOR,
    }
}

/// Derive the translucent background variant of a resolved hex color.
///
/// This is a plain string transform: the fixed alpha suffix is appended to
/// whatever hex value is given, no color-space math involved.
///
/// # Examples
///
/// ```rust
/// use sensortile_rs_core::palette;
///
/// assert_eq!(palette::translucent("#2196f3"), "#2196f34D");
/// ```
#[must_use]
pub fn translucent(hex: &str) -> String {
    format!("{hex}{BACKGROUND_ALPHA}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tokens() {
        assert_eq!(lookup("red"), "#f44336");
        assert_eq!(lookup("deep-orange"), "#ff6f22");
        assert_eq!(lookup("blue-grey"), "#607d8b");
        assert_eq!(lookup("white"), "#ffffff");
    }

    #[test]
    fn test_aliased_values() {
        assert_eq!(lookup("primary"), lookup("light-blue"));
        assert_eq!(lookup("accent"), lookup("orange"));
    }

    #[test]
    fn test_unknown_token_falls_back() {
        assert_eq!(lookup("not-a-real-color"), FALLBACK_COLOR);
        assert_eq!(lookup(""), FALLBACK_COLOR);
        // Lookup is exact: casing and padding are the caller's problem.
        assert_eq!(lookup("Red"), FALLBACK_COLOR);
        assert_eq!(lookup(" red"), FALLBACK_COLOR);
    }

    #[test]
    fn test_lookup_is_pure() {
        assert_eq!(lookup("teal"), lookup("teal"));
        assert_eq!(lookup("nope"), lookup("nope"));
    }

    #[test]
    fn test_resolve_none_is_fallback() {
        assert_eq!(resolve(None), FALLBACK_COLOR);
        assert_eq!(resolve(Some("green")), "#4caf50");
        assert_eq!(resolve(Some("bogus")), FALLBACK_COLOR);
    }

    #[test]
    fn test_translucent_appends_alpha() {
        assert_eq!(translucent("#f44336"), "#f443364D");
        assert_eq!(translucent(FALLBACK_COLOR), "#ffffff4D");
    }

    #[test]
    fn test_table_is_complete() {
        assert_eq!(ENTRIES.len(), 26);
        for (name, hex) in ENTRIES {
            assert_eq!(lookup(name), *hex);
        }
    }
}
