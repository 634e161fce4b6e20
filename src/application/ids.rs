use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use crate::domain::todo::TodoId;

/// Hands out millisecond-timestamp ids that never repeat: when the clock has
/// not moved past the last id, the next id is the last one plus one.
#[derive(Debug, Default)]
pub struct MonotonicIds {
    last: AtomicU64,
}

impl MonotonicIds {
    pub fn new() -> Self { Self::default() }

    pub fn next_id(&self) -> TodoId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        TodoId(self.next_after(now).to_string())
    }

    fn next_after(&self, now: u64) -> u64 {
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let next = now.max(last + 1);
            match self.last.compare_exchange_weak(last, next, Ordering::AcqRel, Ordering::Relaxed) {
                Ok(_) => return next,
                Err(actual) => last = actual,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn same_millisecond_still_advances() {
        let ids = MonotonicIds::new();
        assert_eq!(ids.next_after(1_000), 1_000);
        assert_eq!(ids.next_after(1_000), 1_001);
        assert_eq!(ids.next_after(999), 1_002);
        assert_eq!(ids.next_after(5_000), 5_000);
    }

    #[test]
    fn concurrent_callers_never_collide() {
        let ids = Arc::new(MonotonicIds::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ids = ids.clone();
                std::thread::spawn(move || (0..500).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();
        let all: Vec<TodoId> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
    }
}
