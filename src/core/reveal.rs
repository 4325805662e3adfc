//! One-shot reveal on viewport entry
//!
//! Every reveal-wrapped region owns a [`RevealState`] that starts hidden and
//! flips to revealed the first time the region intersects the viewport. The
//! transition is one way: leaving and re-entering the viewport changes
//! nothing.

/// Root margin handed to the intersection observer.
///
/// Shrinks the viewport by 10% top and bottom, so a region counts as visible
/// once it is a little way into the screen.
pub const ROOT_MARGIN: &str = "-10% 0px";

/// Reveal transition length in seconds
pub const REVEAL_DURATION: f64 = 0.8;

/// Delay between consecutive children of a staggered container, in seconds
pub const STAGGER_STEP: f64 = 0.2;

/// Delay between consecutive stat cards, in seconds
pub const STAT_STEP: f64 = 0.1;

/// Visibility of an observed region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }

    /// Feed one intersection report.
    ///
    /// Returns `true` only for the report that performs the hidden to
    /// revealed transition.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        match (*self, intersecting) {
            (RevealState::Hidden, true) => {
                *self = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }
}

/// Entrance delay of the child at `index` in a staggered container
pub fn stagger_delay(index: usize) -> f64 {
    index as f64 * STAGGER_STEP
}

/// Entrance delay of the stat card at `index`
pub fn stat_delay(index: usize) -> f64 {
    index as f64 * STAT_STEP
}

/// Inline custom properties timing a reveal that starts after `delay` seconds.
///
/// Read by the `.reveal` and `.stagger-item` stylesheet rules.
pub fn transition_style(delay: f64) -> String {
    format!("--reveal-duration: {REVEAL_DURATION}s; --reveal-delay: {delay}s;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        assert!(!RevealState::default().is_revealed());
    }

    #[test]
    fn test_non_intersecting_reports_keep_hidden() {
        let mut state = RevealState::default();

        assert!(!state.observe(false));
        assert!(!state.observe(false));
        assert_eq!(state, RevealState::Hidden);
    }

    #[test]
    fn test_reveals_exactly_once() {
        let mut state = RevealState::default();
        let reports = [false, true, false, true, true, false];

        let transitions = reports.iter().filter(|r| state.observe(**r)).count();

        assert_eq!(transitions, 1);
        assert_eq!(state, RevealState::Revealed);
    }

    #[test]
    fn test_never_reverts_after_leaving_viewport() {
        let mut state = RevealState::default();
        state.observe(true);
        state.observe(false);

        assert!(state.is_revealed());
    }

    #[test]
    fn test_stagger_delays_follow_child_order() {
        let delays: Vec<f64> = (0..3).map(stagger_delay).collect();
        assert_eq!(delays, vec![0.0, 0.2, 0.4]);
    }

    #[test]
    fn test_stat_delays() {
        assert_eq!(stat_delay(0), 0.0);
        assert!((stat_delay(3) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_transition_style() {
        assert_eq!(
            transition_style(0.2),
            "--reveal-duration: 0.8s; --reveal-delay: 0.2s;"
        );
    }
}
