use log::debug;

use super::GalleryError;
use crate::cards::card::Card;
use crate::utilities::constants::SWIPE_THRESHOLD;

/// Direction of a horizontal drag, sampled once when the drag ends.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Swipe {
    /// Finger moved left, show the next card.
    Left,
    /// Finger moved right, show the previous card.
    Right,
    /// Within the threshold band.
    Ignored,
}

impl Swipe {
    pub fn from_translation(translation_x: f64) -> Swipe {
        if translation_x < -SWIPE_THRESHOLD {
            Swipe::Left
        } else if translation_x > SWIPE_THRESHOLD {
            Swipe::Right
        } else {
            Swipe::Ignored
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SwipeOutcome {
    Advanced,
    Retreated,
    Unchanged,
}

/// Cursor of the detail view.
///
/// `open` freezes a snapshot of the derived sequence. Later search or sort
/// changes do not touch an open session, so the cursor can never point past
/// the cards it browses.
#[derive(Debug, Clone, Default)]
pub struct DetailNavigator {
    snapshot: Vec<Card>,
    current_index: usize,
    visible: bool,
}

impl DetailNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, derived: Vec<Card>, index: usize) -> Result<(), GalleryError> {
        if index >= derived.len() {
            return Err(GalleryError::IndexOutOfRange {
                index,
                len: derived.len(),
            });
        }
        debug!("Opening detail view at {}/{}", index + 1, derived.len());
        self.snapshot = derived;
        self.current_index = index;
        self.visible = true;
        Ok(())
    }

    /// Moves to the next card. Stops at the last one.
    pub fn advance(&mut self) -> bool {
        if !self.visible || self.current_index + 1 >= self.snapshot.len() {
            return false;
        }
        self.current_index += 1;
        true
    }

    /// Moves to the previous card. Stops at the first one.
    pub fn retreat(&mut self) -> bool {
        if !self.visible || self.current_index == 0 {
            return false;
        }
        self.current_index -= 1;
        true
    }

    pub fn handle_drag_end(&mut self, translation_x: f64) -> SwipeOutcome {
        match Swipe::from_translation(translation_x) {
            Swipe::Left if self.advance() => SwipeOutcome::Advanced,
            Swipe::Right if self.retreat() => SwipeOutcome::Retreated,
            _ => SwipeOutcome::Unchanged,
        }
    }

    /// Hides the detail view. The cursor is kept until the next `open`.
    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn current_card(&self) -> Option<&Card> {
        if !self.visible {
            return None;
        }
        self.snapshot.get(self.current_index)
    }

    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::helpers::ranked_card;

    fn three_cards() -> Vec<Card> {
        vec![
            ranked_card("1", "Bolt", 5),
            ranked_card("2", "Ajani", 2),
            ranked_card("3", "Zap", 9),
        ]
    }

    #[test]
    fn test_advance_and_retreat_are_clamped() {
        let mut navigator = DetailNavigator::new();
        navigator.open(three_cards(), 1).unwrap();
        assert_eq!(navigator.current_index(), 1);
        assert!(navigator.is_visible());

        assert!(navigator.advance());
        assert_eq!(navigator.current_index(), 2);
        assert!(!navigator.advance());
        assert_eq!(navigator.current_index(), 2);

        assert!(navigator.retreat());
        assert!(navigator.retreat());
        assert_eq!(navigator.current_index(), 0);
        assert!(!navigator.retreat());
        assert_eq!(navigator.current_index(), 0);
    }

    #[test]
    fn test_walking_the_whole_sequence() {
        let cards: Vec<Card> = (0..7)
            .map(|i| ranked_card(&i.to_string(), &format!("Card {}", i), i))
            .collect();
        let len = cards.len();
        let mut navigator = DetailNavigator::new();
        navigator.open(cards, 0).unwrap();

        for _ in 0..len - 1 {
            assert!(navigator.advance());
        }
        assert_eq!(navigator.current_index(), len - 1);
        for _ in 0..3 {
            assert!(!navigator.advance());
        }
        assert_eq!(navigator.current_index(), len - 1);
        assert_eq!(navigator.current_card().unwrap().name, "Card 6");
    }

    #[test]
    fn test_open_out_of_range_leaves_navigator_unchanged() {
        let mut navigator = DetailNavigator::new();
        navigator.open(three_cards(), 2).unwrap();
        navigator.close();

        let result = navigator.open(three_cards(), 3);
        assert_eq!(result, Err(GalleryError::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(navigator.current_index(), 2);
        assert!(!navigator.is_visible());

        assert!(navigator.open(vec![], 0).is_err());
    }

    #[test]
    fn test_close_keeps_cursor_and_blocks_navigation() {
        let mut navigator = DetailNavigator::new();
        navigator.open(three_cards(), 1).unwrap();
        navigator.close();

        assert!(!navigator.is_visible());
        assert_eq!(navigator.current_index(), 1);
        assert!(navigator.current_card().is_none());
        assert!(!navigator.advance());
        assert!(!navigator.retreat());
        assert_eq!(navigator.current_index(), 1);

        navigator.open(three_cards(), 0).unwrap();
        assert_eq!(navigator.current_index(), 0);
        assert_eq!(navigator.current_card().unwrap().name, "Bolt");
    }

    #[test]
    fn test_swipe_classification() {
        assert_eq!(Swipe::from_translation(-80.0), Swipe::Left);
        assert_eq!(Swipe::from_translation(80.0), Swipe::Right);
        assert_eq!(Swipe::from_translation(-50.0), Swipe::Ignored);
        assert_eq!(Swipe::from_translation(50.0), Swipe::Ignored);
        assert_eq!(Swipe::from_translation(0.0), Swipe::Ignored);
        assert_eq!(Swipe::from_translation(-50.5), Swipe::Left);
    }

    #[test]
    fn test_drag_end_moves_cursor() {
        let mut navigator = DetailNavigator::new();
        navigator.open(three_cards(), 0).unwrap();

        assert_eq!(navigator.handle_drag_end(-120.0), SwipeOutcome::Advanced);
        assert_eq!(navigator.current_index(), 1);
        assert_eq!(navigator.handle_drag_end(30.0), SwipeOutcome::Unchanged);
        assert_eq!(navigator.handle_drag_end(75.0), SwipeOutcome::Retreated);
        assert_eq!(navigator.current_index(), 0);
        assert_eq!(navigator.handle_drag_end(75.0), SwipeOutcome::Unchanged);
        assert_eq!(navigator.current_index(), 0);
    }
}
