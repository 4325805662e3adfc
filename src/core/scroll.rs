//! Page scroll offset and the values derived from it

use derive_more::{Display, From};

/// Vertical scroll offset of the page, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, From, Display)]
#[display("{_0}px")]
pub struct ScrollPosition(pub f64);

impl ScrollPosition {
    pub const TOP: ScrollPosition = ScrollPosition(0.0);

    pub fn offset(self) -> f64 {
        self.0
    }
}

/// Scroll range over which the hero background moves
pub const PARALLAX_INPUT: (f64, f64) = (0.0, 500.0);

/// Background offset range (px) matching [`PARALLAX_INPUT`]
pub const PARALLAX_OUTPUT: (f64, f64) = (0.0, 150.0);

/// Map `value` from `input` to `output` linearly, clamping to `output`
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    if in_end == in_start {
        return out_start;
    }
    let t = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * t
}

/// Hero background translation for the given scroll position
pub fn parallax_offset(position: ScrollPosition) -> f64 {
    map_range(position.offset(), PARALLAX_INPUT, PARALLAX_OUTPUT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallax_endpoints() {
        assert_eq!(parallax_offset(ScrollPosition::TOP), 0.0);
        assert_eq!(parallax_offset(ScrollPosition(500.0)), 150.0);
    }

    #[test]
    fn test_parallax_is_linear_inside_domain() {
        assert!((parallax_offset(ScrollPosition(100.0)) - 30.0).abs() < 1e-9);
        assert_eq!(parallax_offset(ScrollPosition(250.0)), 75.0);
    }

    #[test]
    fn test_parallax_clamps_outside_domain() {
        assert_eq!(parallax_offset(ScrollPosition(2_000.0)), 150.0);
        assert_eq!(parallax_offset(ScrollPosition(-40.0)), 0.0);
    }

    #[test]
    fn test_map_range_reversed_output() {
        assert_eq!(map_range(25.0, (0.0, 100.0), (1.0, 0.0)), 0.75);
    }

    #[test]
    fn test_map_range_degenerate_input() {
        assert_eq!(map_range(10.0, (5.0, 5.0), (2.0, 8.0)), 2.0);
    }

    #[test]
    fn test_scroll_position_conversions() {
        let position = ScrollPosition::from(12.5);

        assert_eq!(position.offset(), 12.5);
        assert_eq!(position.to_string(), "12.5px");
        assert!(ScrollPosition(3.0) > ScrollPosition::TOP);
    }
}
