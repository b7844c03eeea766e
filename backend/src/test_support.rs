//! Test utilities for the backend crate.
//!
//! Shared by unit tests in `src/` and integration tests in `tests/`. Only
//! compiled for tests or with the `test-support` feature.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;

use crate::domain::{BlogPost, Branch, GalleryEvent, Offer, User};
use crate::inbound::http::state::{HttpState, HttpStateRepositories};
use crate::outbound::memory::InMemoryResourceRepository;

/// Deterministic clock that moves forward by a fixed step on every read.
///
/// Consecutive records therefore get strictly increasing timestamps, which
/// keeps ordering assertions stable.
///
/// # Examples
/// ```
/// use chrono::TimeDelta;
/// use mockable::Clock;
/// use site_backend::test_support::SteppingClock;
///
/// let clock = SteppingClock::starting_at_epoch(TimeDelta::seconds(1));
/// let first = clock.utc();
/// assert_eq!(clock.utc() - first, TimeDelta::seconds(1));
/// ```
pub struct SteppingClock {
    next: Mutex<DateTime<Utc>>,
    step: TimeDelta,
}

impl SteppingClock {
    pub fn new(start: DateTime<Utc>, step: TimeDelta) -> Self {
        Self {
            next: Mutex::new(start),
            step,
        }
    }

    /// Start at 2025-01-01T00:00:00Z.
    pub fn starting_at_epoch(step: TimeDelta) -> Self {
        let start = DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
            .map(|ts| ts.with_timezone(&Utc))
            .unwrap_or_default();
        Self::new(start, step)
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut next = match self.next.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let now = *next;
        *next = now + self.step;
        now
    }
}

/// HTTP state over empty in-memory stores sharing one stepping clock.
pub fn in_memory_state() -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(SteppingClock::starting_at_epoch(TimeDelta::seconds(1)));
    HttpState::new(HttpStateRepositories {
        gallery: Arc::new(InMemoryResourceRepository::<GalleryEvent>::new(Arc::clone(&clock))),
        blogs: Arc::new(InMemoryResourceRepository::<BlogPost>::new(Arc::clone(&clock))),
        branches: Arc::new(InMemoryResourceRepository::<Branch>::new(Arc::clone(&clock))),
        offers: Arc::new(InMemoryResourceRepository::<Offer>::new(Arc::clone(&clock))),
        users: Arc::new(InMemoryResourceRepository::<User>::new(clock)),
    })
}
