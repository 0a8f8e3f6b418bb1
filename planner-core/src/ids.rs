//! Local id generation
//!
//! Ids are timestamp based and strictly increasing within a session, so two
//! adds in the same millisecond still get distinct ids.

use crate::clock::Clock;
use crate::domain::PlaceId;

#[derive(Debug, Clone, Default)]
pub struct LocalIdGenerator {
    last: i64,
}

impl LocalIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id: the current time, bumped past the previous id if needed
    pub fn next(&mut self, clock: &dyn Clock) -> PlaceId {
        PlaceId::Num(self.next_raw(clock))
    }

    /// Reserve `count` consecutive ids and return the first
    pub fn reserve(&mut self, clock: &dyn Clock, count: usize) -> i64 {
        let base = self.next_raw(clock);
        self.last = base + count.saturating_sub(1) as i64;
        base
    }

    fn next_raw(&mut self, clock: &dyn Clock) -> i64 {
        let id = clock.now_millis().max(self.last + 1);
        self.last = id;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock::on(NaiveDate::from_ymd_opt(2025, 4, 5).unwrap())
    }

    #[test]
    fn test_ids_are_unique_within_same_millisecond() {
        let clock = clock();
        let mut ids = LocalIdGenerator::new();
        let a = ids.next(&clock);
        let b = ids.next(&clock);
        assert_ne!(a, b);
        assert_eq!(a, PlaceId::Num(clock.millis));
        assert_eq!(b, PlaceId::Num(clock.millis + 1));
    }

    #[test]
    fn test_reserve_skips_block() {
        let clock = clock();
        let mut ids = LocalIdGenerator::new();
        let base = ids.reserve(&clock, 3);
        assert_eq!(ids.next(&clock), PlaceId::Num(base + 3));
    }
}
