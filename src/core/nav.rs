//! Navigation bar state
//!
//! The bar has two independent pieces of state: whether the page has been
//! scrolled past [`SCROLL_THRESHOLD`], and whether the mobile menu is open.

/// Scroll offset (px) past which the bar switches to its compact style
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Whether the navbar should use its scrolled style at `offset`
///
/// Strictly greater than the threshold; the threshold itself is unscrolled.
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

/// Mobile menu visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// State after the menu button is pressed
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// State after a link inside the menu is activated
    pub fn link_activated(self) -> Self {
        MenuState::Closed
    }

    pub fn aria_label(self) -> &'static str {
        match self {
            MenuState::Closed => "Abrir menú",
            MenuState::Open => "Cerrar menú",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_scrolled_boundary() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(49.9));
        assert!(!is_scrolled(SCROLL_THRESHOLD));
        assert!(is_scrolled(50.000_1));
        assert!(is_scrolled(1_200.0));
    }

    #[test]
    fn test_is_scrolled_is_reversible() {
        let offsets = [0.0, 80.0, 20.0, 51.0, 50.0];
        let flags: Vec<bool> = offsets.iter().map(|o| is_scrolled(*o)).collect();

        assert_eq!(flags, vec![false, true, false, true, false]);
    }

    #[test]
    fn test_menu_starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_toggle_parity() {
        for presses in 0..7 {
            let state = (0..presses).fold(MenuState::Closed, |s, _| s.toggled());
            assert_eq!(state.is_open(), presses % 2 == 1, "after {presses} presses");
        }
    }

    #[test]
    fn test_link_activation_closes() {
        assert_eq!(MenuState::Open.link_activated(), MenuState::Closed);
        assert_eq!(MenuState::Closed.link_activated(), MenuState::Closed);
    }

    #[test]
    fn test_aria_label_follows_state() {
        assert_eq!(MenuState::Closed.aria_label(), "Abrir menú");
        assert_eq!(MenuState::Open.aria_label(), "Cerrar menú");
    }
}
