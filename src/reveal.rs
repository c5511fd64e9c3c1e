use std::collections::HashSet;

/// Threshold for menu photo reveals.
pub const PHOTO_THRESHOLD: f64 = 0.3;
/// Threshold for menu card reveals.
pub const CARD_THRESHOLD: f64 = 0.25;

/// Tracks scroll-reveal state per element: an element becomes visible the
/// first time its intersection ratio meets the threshold and stays visible
/// after that. Each reveal is reported exactly once.
#[derive(Debug)]
pub struct RevealTracker {
    threshold: f64,
    revealed: HashSet<String>,
}

impl RevealTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            revealed: HashSet::new(),
        }
    }

    /// Feeds one intersection observation. Returns true only when the element
    /// crosses the threshold for the first time.
    pub fn observe(&mut self, id: &str, visible_ratio: f64) -> bool {
        if visible_ratio < self.threshold || self.revealed.contains(id) {
            return false;
        }

        self.revealed.insert(id.to_string());

        true
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_threshold_stays_hidden() {
        let mut tracker = RevealTracker::new(CARD_THRESHOLD);

        assert!(!tracker.observe("card-1", 0.1));
        assert!(!tracker.is_revealed("card-1"));
    }

    #[test]
    fn test_reveals_once() {
        let mut tracker = RevealTracker::new(CARD_THRESHOLD);

        assert!(tracker.observe("card-1", 0.5));
        assert!(!tracker.observe("card-1", 0.9));
        assert!(tracker.is_revealed("card-1"));
    }

    #[test]
    fn test_reveal_sticks_after_scroll_away() {
        let mut tracker = RevealTracker::new(PHOTO_THRESHOLD);

        tracker.observe("photo-1", 0.4);
        tracker.observe("photo-1", 0.0);

        assert!(tracker.is_revealed("photo-1"));
    }
}
