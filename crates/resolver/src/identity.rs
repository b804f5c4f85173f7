use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use shared::domain::SubstanceId;

/// Mints product ids of the form `<symbol slug>-<millis>`. The stamp never
/// repeats for one minter, even when several products appear in the same
/// millisecond.
#[derive(Debug, Default)]
pub struct IdMinter {
    last_stamp: AtomicI64,
}

impl IdMinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mint(&self, symbol: &str) -> SubstanceId {
        let stamp = self.next_stamp(Utc::now().timestamp_millis());
        SubstanceId(format!("{}-{stamp}", symbol_slug(symbol)))
    }

    fn next_stamp(&self, now_millis: i64) -> i64 {
        let mut previous = self.last_stamp.load(Ordering::Acquire);
        loop {
            let next = now_millis.max(previous + 1);
            match self.last_stamp.compare_exchange_weak(
                previous,
                next,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return next,
                Err(actual) => previous = actual,
            }
        }
    }
}

fn symbol_slug(symbol: &str) -> String {
    let slug: String = symbol
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(char::is_ascii_alphanumeric)
        .collect();
    if slug.is_empty() {
        "unknown".to_owned()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn slug_drops_subscripts_and_punctuation() {
        assert_eq!(symbol_slug("H₂O"), "ho");
        assert_eq!(symbol_slug("Ca(OH)₂"), "caoh");
        assert_eq!(symbol_slug("₂"), "unknown");
    }

    #[test]
    fn stamps_strictly_increase_within_one_millisecond() {
        let minter = IdMinter::new();
        assert_eq!(minter.next_stamp(1_000), 1_000);
        assert_eq!(minter.next_stamp(1_000), 1_001);
        assert_eq!(minter.next_stamp(999), 1_002);
        assert_eq!(minter.next_stamp(5_000), 5_000);
    }

    #[test]
    fn minted_ids_are_unique() {
        let minter = IdMinter::new();
        let ids: HashSet<_> = (0..100).map(|_| minter.mint("NaCl")).collect();
        assert_eq!(ids.len(), 100);
        assert!(ids.iter().all(|id| id.as_str().starts_with("nacl-")));
    }
}
