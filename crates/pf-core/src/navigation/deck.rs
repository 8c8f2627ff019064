use super::SlideState;

/// Slide and indicator state behind the navigator
///
/// Slide and indicator counts are fixed at construction. The stored index is
/// kept as-is even when it points past the end, so out-of-range jumps still
/// move the indicator highlight while no slide becomes active.
#[derive(Debug, Clone)]
pub struct SlideDeck {
    slides: Vec<SlideState>,
    indicators: Vec<bool>,
    current: i64,
}

impl SlideDeck {
    /// Create a deck with every slide in the default state
    pub fn new(slide_count: usize, indicator_count: usize) -> Self {
        Self {
            slides: vec![SlideState::Default; slide_count],
            indicators: vec![false; indicator_count],
            current: 0,
        }
    }

    /// Project `index` onto the slides and indicators
    pub fn show(&mut self, index: i64) {
        for (i, slide) in self.slides.iter_mut().enumerate() {
            *slide = if (i as i64) < index {
                SlideState::Prev
            } else {
                SlideState::Default
            };
        }

        if let Some(slide) = usize::try_from(index)
            .ok()
            .and_then(|i| self.slides.get_mut(i))
        {
            *slide = SlideState::Active;
        }

        for (i, active) in self.indicators.iter_mut().enumerate() {
            *active = i as i64 == index;
        }

        self.current = index;
    }

    /// Target index one step forward, wrapping. `None` without slides.
    pub fn next_index(&self) -> Option<i64> {
        let total = self.slides.len() as i64;
        if total == 0 {
            return None;
        }
        Some((self.current.rem_euclid(total) + 1) % total)
    }

    /// Target index one step back, wrapping. `None` without slides.
    pub fn previous_index(&self) -> Option<i64> {
        let total = self.slides.len() as i64;
        if total == 0 {
            return None;
        }
        Some((self.current.rem_euclid(total) - 1).rem_euclid(total))
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    pub fn slide_state(&self, index: usize) -> Option<SlideState> {
        self.slides.get(index).copied()
    }

    pub fn indicator_active(&self, index: usize) -> bool {
        self.indicators.get(index).copied().unwrap_or(false)
    }

    /// Index of the active slide, if the stored index points at one
    pub fn active_slide(&self) -> Option<usize> {
        self.slides.iter().position(|s| *s == SlideState::Active)
    }
}

/// Parse a jump target the way a lenient base-10 integer parse does
///
/// Leading whitespace and a single sign are accepted, parsing stops at the
/// first non-digit. Returns `None` when no digit is found or the value does
/// not fit in an `i64`.
pub fn parse_jump_index(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(deck: &SlideDeck) -> Vec<SlideState> {
        (0..deck.slide_count()).filter_map(|i| deck.slide_state(i)).collect()
    }

    #[test]
    fn test_show_marks_passed_slides() {
        let mut deck = SlideDeck::new(4, 4);
        deck.show(2);

        assert_eq!(
            states(&deck),
            vec![SlideState::Prev, SlideState::Prev, SlideState::Active, SlideState::Default]
        );
        assert!(deck.indicator_active(2));
        assert!(!deck.indicator_active(0));
        assert_eq!(deck.current(), 2);
    }

    #[test]
    fn test_out_of_range_index_activates_nothing() {
        let mut deck = SlideDeck::new(3, 5);
        deck.show(4);

        assert_eq!(deck.active_slide(), None);
        assert_eq!(states(&deck), vec![SlideState::Prev; 3]);
        // indicator 4 exists even though slide 4 does not
        assert!(deck.indicator_active(4));
        assert_eq!(deck.current(), 4);
    }

    #[test]
    fn test_negative_index_clears_everything() {
        let mut deck = SlideDeck::new(3, 3);
        deck.show(1);
        deck.show(-1);

        assert_eq!(states(&deck), vec![SlideState::Default; 3]);
        assert!((0..3).all(|i| !deck.indicator_active(i)));
    }

    #[test]
    fn test_step_targets_wrap() {
        let mut deck = SlideDeck::new(3, 3);
        deck.show(2);
        assert_eq!(deck.next_index(), Some(0));
        deck.show(0);
        assert_eq!(deck.previous_index(), Some(2));
    }

    #[test]
    fn test_step_targets_recover_from_out_of_range() {
        let mut deck = SlideDeck::new(3, 3);
        deck.show(-5);
        assert_eq!(deck.next_index(), Some(2));
        deck.show(10);
        assert_eq!(deck.previous_index(), Some(0));
    }

    #[test]
    fn test_step_targets_at_integer_extremes() {
        let mut deck = SlideDeck::new(8, 8);
        deck.show(i64::MAX);
        assert_eq!(deck.next_index(), Some(0));
        assert_eq!(deck.previous_index(), Some(6));
        deck.show(-i64::MAX);
        assert_eq!(deck.next_index(), Some(2));
    }

    #[test]
    fn test_empty_deck_has_no_targets() {
        let deck = SlideDeck::new(0, 2);
        assert_eq!(deck.next_index(), None);
        assert_eq!(deck.previous_index(), None);
    }

    #[test]
    fn test_parse_jump_index() {
        assert_eq!(parse_jump_index("3"), Some(3));
        assert_eq!(parse_jump_index("  7"), Some(7));
        assert_eq!(parse_jump_index("2abc"), Some(2));
        assert_eq!(parse_jump_index("-1"), Some(-1));
        assert_eq!(parse_jump_index("+4"), Some(4));
        assert_eq!(parse_jump_index("1.9"), Some(1));
        assert_eq!(parse_jump_index("0x10"), Some(0));
        assert_eq!(parse_jump_index("abc"), None);
        assert_eq!(parse_jump_index(""), None);
        assert_eq!(parse_jump_index("-"), None);
        assert_eq!(parse_jump_index("99999999999999999999999"), None);
    }
}
