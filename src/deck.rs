//! Navigation state for the slide deck.
//!
//! Moves are dropped, never queued, while the stage is mid transition.
//! The page schedules a timer that feeds [`DeckAction::Settle`] back in
//! once the CSS transition has played out.

/// How long the stage transition runs, and therefore how long
/// navigation stays locked after a move.
pub const SLIDE_LOCK_MS: u32 = 800;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Transitioning(Direction),
}

/// Everything the deck can be asked to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckAction {
    Next,
    Prev,
    GoTo(usize),
    Settle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deck {
    slide_count: usize,
    current: usize,
    phase: Phase,
}

impl Deck {
    /// A deck of `slide_count` slides, opened on the first one.
    /// `slide_count` must be non-zero.
    pub fn new(slide_count: usize) -> Self {
        debug_assert!(slide_count > 0);
        Self {
            slide_count,
            current: 0,
            phase: Phase::Idle,
        }
    }

    /// A deck opened at `start`, clamped to the last slide.
    pub fn starting_at(slide_count: usize, start: usize) -> Self {
        Self {
            current: start.min(slide_count.saturating_sub(1)),
            ..Self::new(slide_count)
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning(_))
    }

    /// Direction of the transition in flight, if any.
    pub fn direction(&self) -> Option<Direction> {
        match self.phase {
            Phase::Transitioning(direction) => Some(direction),
            Phase::Idle => None,
        }
    }

    /// Applies `action`, returning whether the current slide changed.
    pub fn apply(&mut self, action: DeckAction) -> bool {
        match action {
            DeckAction::Next => self.next(),
            DeckAction::Prev => self.prev(),
            DeckAction::GoTo(index) => self.go_to(index),
            DeckAction::Settle => {
                self.settle();
                false
            }
        }
    }

    /// Advances to the following slide, wrapping past the last one.
    pub fn next(&mut self) -> bool {
        if self.is_transitioning() {
            return false;
        }
        self.current = (self.current + 1) % self.slide_count;
        self.phase = Phase::Transitioning(Direction::Forward);
        true
    }

    /// Steps back to the preceding slide, wrapping before the first one.
    pub fn prev(&mut self) -> bool {
        if self.is_transitioning() {
            return false;
        }
        self.current = (self.current + self.slide_count - 1) % self.slide_count;
        self.phase = Phase::Transitioning(Direction::Backward);
        true
    }

    /// Jumps straight to `index`. The play direction comes from
    /// comparing indices, so a jump from the last slide to the first
    /// plays backwards even though `next` would wrap forwards.
    pub fn go_to(&mut self, index: usize) -> bool {
        if self.is_transitioning() || index >= self.slide_count || index == self.current {
            return false;
        }
        self.phase = Phase::Transitioning(if index > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        });
        self.current = index;
        true
    }

    /// Ends the transition window and unlocks navigation.
    pub fn settle(&mut self) {
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_past_last_slide() {
        let mut deck = Deck::new(3);
        assert!(deck.next());
        deck.settle();
        assert!(deck.next());
        deck.settle();
        assert_eq!(deck.current(), 2);
        assert!(deck.next());
        assert_eq!(deck.current(), 0);
        assert_eq!(deck.direction(), Some(Direction::Forward));
    }

    #[test]
    fn test_prev_wraps_to_last_slide() {
        let mut deck = Deck::new(7);
        assert!(deck.prev());
        assert_eq!(deck.current(), 6);
        assert_eq!(deck.direction(), Some(Direction::Backward));
    }

    #[test]
    fn test_moves_are_dropped_while_transitioning() {
        let mut deck = Deck::new(7);
        assert!(deck.next());
        assert_eq!(deck.current(), 1);
        assert!(!deck.next());
        assert!(!deck.prev());
        assert!(!deck.go_to(5));
        assert_eq!(deck.current(), 1);
        deck.settle();
        assert!(deck.next());
        assert_eq!(deck.current(), 2);
    }

    #[test]
    fn test_go_to_ignores_current_and_out_of_range() {
        let mut deck = Deck::new(7);
        assert!(!deck.go_to(0));
        assert!(!deck.go_to(7));
        assert!(!deck.go_to(42));
        assert!(!deck.is_transitioning());
        assert!(deck.go_to(4));
        assert_eq!(deck.current(), 4);
    }

    #[test]
    fn test_go_to_direction_follows_index_order() {
        let mut deck = Deck::new(7);
        assert!(deck.go_to(6));
        assert_eq!(deck.direction(), Some(Direction::Forward));
        deck.settle();
        assert!(deck.go_to(0));
        assert_eq!(deck.direction(), Some(Direction::Backward));
    }

    #[test]
    fn test_settle_is_harmless_when_idle() {
        let mut deck = Deck::new(7);
        deck.settle();
        assert!(!deck.is_transitioning());
        assert_eq!(deck.current(), 0);
    }

    #[test]
    fn test_settle_action_reopens_navigation() {
        // The action sequence the page's unlock timer produces.
        let mut deck = Deck::new(7);
        assert!(deck.apply(DeckAction::Next));
        assert!(deck.is_transitioning());
        assert!(!deck.apply(DeckAction::Next));
        assert!(!deck.apply(DeckAction::Settle));
        assert!(!deck.is_transitioning());
        assert!(deck.apply(DeckAction::Next));
        assert_eq!(deck.current(), 2);
    }

    #[test]
    fn test_apply_reports_slide_changes_only() {
        let mut deck = Deck::new(7);
        assert!(deck.apply(DeckAction::Next));
        assert!(!deck.apply(DeckAction::Prev));
        assert!(!deck.apply(DeckAction::Settle));
        assert!(!deck.is_transitioning());
        assert!(deck.apply(DeckAction::GoTo(3)));
        assert_eq!(deck.current(), 3);
    }

    #[test]
    fn test_starting_at_clamps_to_deck_length() {
        assert_eq!(Deck::starting_at(7, 3).current(), 3);
        assert_eq!(Deck::starting_at(7, 99).current(), 6);
        assert!(!Deck::starting_at(7, 2).is_transitioning());
    }
}
