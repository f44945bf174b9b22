//! Palette shared across slides and charts.
//!
//! The deck is dark with a blue and violet data look. Every color the
//! SVG markup or an inline style needs lives here so the slides and
//! the charts agree.

pub const BACKGROUND: &str = "hsl(222, 47%, 7%)";
pub const FOREGROUND: &str = "hsl(210, 40%, 96%)";
pub const BORDER: &str = "hsl(217, 28%, 24%)";
pub const MUTED: &str = "hsl(215, 16%, 47%)";

pub const PRIMARY: &str = "hsl(217, 91%, 60%)";
pub const DATA_SECONDARY: &str = "hsl(262, 83%, 66%)";
pub const ACCENT: &str = "hsl(189, 94%, 50%)";
pub const DATA_SUCCESS: &str = "hsl(142, 71%, 45%)";
pub const DATA_WARNING: &str = "hsl(38, 92%, 50%)";
pub const CHART_5: &str = "hsl(340, 82%, 60%)";

/// Scatter and legend color for a borough. Anything unknown gets the
/// muted tone.
pub fn borough_color(borough: &str) -> &'static str {
    match borough {
        "Manhattan" => PRIMARY,
        "Brooklyn" => DATA_SECONDARY,
        "Queens" => ACCENT,
        "Staten Island" => DATA_SUCCESS,
        "Bronx" => DATA_WARNING,
        _ => MUTED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_borough_has_its_own_color() {
        let boroughs = ["Manhattan", "Brooklyn", "Queens", "Staten Island", "Bronx"];
        for (i, first) in boroughs.iter().enumerate() {
            for second in &boroughs[i + 1..] {
                assert_ne!(borough_color(first), borough_color(second));
            }
        }
    }

    #[test]
    fn test_unknown_borough_falls_back_to_muted() {
        assert_eq!(borough_color("Yonkers"), MUTED);
    }
}
