use std::time::{
    Duration,
    Instant,
};

/// How long the input has to stay quiet before the term settles.
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Collapses a burst of search edits into one settled term. The raw value is
/// recorded synchronously for display and local filtering; only `poll`
/// releases it, once per burst, after the delay passes with no further edit.
/// Time is always passed in so bursts can be replayed in tests.
pub struct SearchDebouncer {
    raw: String,
    deadline: Option<Instant>,
    delay: Duration,
}

impl SearchDebouncer {
    pub fn new() -> Self {
        Self::with_delay(SETTLE_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { raw: String::new(), deadline: None, delay }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Records a new raw value and restarts the settle timer.
    pub fn set_input(&mut self, text: impl Into<String>, now: Instant) {
        self.raw = text.into();
        self.deadline = Some(now + self.delay);
    }

    /// Starts the settle timer without changing the raw value. Used for the
    /// initial fetch when the quote screen opens, which goes through the
    /// same timer path as an edit.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Cancels a pending settle. An unsent fetch is prevented; one already
    /// sent is not affected.
    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    pub fn time_until_settle(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Yields the settled term once the deadline has passed, then disarms.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                Some(self.raw.clone())
            }
            _ => None,
        }
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(start: Instant, millis: u64) -> Instant {
        start + Duration::from_millis(millis)
    }

    #[test]
    fn burst_settles_once_with_the_final_value() {
        let start = Instant::now();
        let mut debouncer = SearchDebouncer::new();

        debouncer.set_input("h", at(start, 0));
        debouncer.set_input("he", at(start, 100));
        debouncer.set_input("hello", at(start, 200));

        assert_eq!(debouncer.poll(at(start, 400)), None);
        assert_eq!(debouncer.poll(at(start, 699)), None);
        assert_eq!(debouncer.poll(at(start, 700)), Some("hello".to_string()));
        assert_eq!(debouncer.poll(at(start, 900)), None);
    }

    #[test]
    fn raw_value_is_visible_immediately() {
        let start = Instant::now();
        let mut debouncer = SearchDebouncer::new();

        debouncer.set_input("bye", start);
        assert_eq!(debouncer.raw(), "bye");
        assert_eq!(debouncer.poll(start), None);
    }

    #[test]
    fn disarm_cancels_a_pending_settle() {
        let start = Instant::now();
        let mut debouncer = SearchDebouncer::new();

        debouncer.set_input("hello", start);
        debouncer.disarm();
        assert_eq!(debouncer.poll(at(start, 1000)), None);
        assert_eq!(debouncer.raw(), "hello");
    }

    #[test]
    fn arm_fires_with_the_current_raw_value() {
        let start = Instant::now();
        let mut debouncer = SearchDebouncer::new();

        debouncer.arm(start);
        assert_eq!(debouncer.poll(at(start, 500)), Some(String::new()));
    }

    #[test]
    fn new_edit_after_settle_starts_a_fresh_burst() {
        let start = Instant::now();
        let mut debouncer = SearchDebouncer::new();

        debouncer.set_input("first", start);
        assert_eq!(debouncer.poll(at(start, 500)), Some("first".to_string()));

        debouncer.set_input("second", at(start, 600));
        assert_eq!(debouncer.poll(at(start, 1000)), None);
        assert_eq!(debouncer.poll(at(start, 1100)), Some("second".to_string()));
    }

    #[test]
    fn time_until_settle_counts_down() {
        let start = Instant::now();
        let mut debouncer = SearchDebouncer::new();

        assert_eq!(debouncer.time_until_settle(start), None);
        debouncer.set_input("x", start);
        assert_eq!(debouncer.time_until_settle(at(start, 100)), Some(Duration::from_millis(400)));
        assert_eq!(debouncer.time_until_settle(at(start, 900)), Some(Duration::ZERO));
    }
}
