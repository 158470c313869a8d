//! The shared hover rule and mobile day-paging state.

use chrono::NaiveDateTime;

/// Index of the data point nearest to `target` in a time-sorted slice.
///
/// Binary search over the timestamps; when the two candidate distances are
/// exactly equal the later point wins. Every chart publishes and resolves
/// hovers through this one rule so the indicator lands on the same row in
/// all of them.
pub fn nearest_index(times: &[NaiveDateTime], target: NaiveDateTime) -> Option<usize> {
    if times.is_empty() {
        return None;
    }
    let i = times.partition_point(|t| *t < target);
    if i == 0 {
        return Some(0);
    }
    if i == times.len() {
        return Some(times.len() - 1);
    }
    let before = target - times[i - 1];
    let after = times[i] - target;
    if after <= before {
        Some(i)
    } else {
        Some(i - 1)
    }
}

/// The unique-day list and the zero-based pointer used for mobile
/// single-day paging.
///
/// Navigation clamps to the ends of the list; replacing the list with a
/// different one resets the pointer to the first day, while re-setting an
/// identical list leaves it alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayWindow {
    days: Vec<String>,
    index: usize,
}

impl DayWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_days(&mut self, days: Vec<String>) {
        if days != self.days {
            self.days = days;
            self.index = 0;
        }
    }

    pub fn days(&self) -> &[String] {
        &self.days
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_day(&self) -> Option<&str> {
        self.days.get(self.index).map(String::as_str)
    }

    pub fn previous(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn next(&mut self) {
        if self.index + 1 < self.days.len() {
            self.index += 1;
        }
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.days.is_empty() || self.index + 1 == self.days.len()
    }
}
