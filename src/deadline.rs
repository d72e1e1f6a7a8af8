//! Wall-clock time budget.

use std::time::{Duration, Instant};

/// A wall-clock budget started at construction.
///
/// Checking it is a plain clock comparison; nothing blocks or yields.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use depot_tour::Deadline;
///
/// let d = Deadline::after(Duration::from_secs(60));
/// assert!(!d.expired());
/// assert!(Deadline::after(Duration::ZERO).expired());
/// assert!(!Deadline::unbounded().expired());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    started: Instant,
    budget: Option<Duration>,
}

impl Deadline {
    /// Starts a budget of `budget` from now.
    pub fn after(budget: Duration) -> Self {
        Self {
            started: Instant::now(),
            budget: Some(budget),
        }
    }

    /// A deadline that never expires.
    pub fn unbounded() -> Self {
        Self {
            started: Instant::now(),
            budget: None,
        }
    }

    /// Returns `true` once the budget is used up.
    pub fn expired(&self) -> bool {
        match self.budget {
            Some(b) => self.started.elapsed() >= b,
            None => false,
        }
    }

    /// Time since the deadline was started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// The configured budget, if bounded.
    pub fn budget(&self) -> Option<Duration> {
        self.budget
    }
}
