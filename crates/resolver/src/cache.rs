use std::collections::HashMap;

use shared::domain::ReactionOutcome;
use tokio::sync::RwLock;

/// Outcomes obtained from the generation service, keyed by canonical key.
/// Lives as long as its owner; entries are never evicted.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    entries: RwLock<HashMap<String, ReactionOutcome>>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, key: &str) -> Option<ReactionOutcome> {
        self.entries.read().await.get(key).cloned()
    }

    /// Stores `outcome` unless the key is already present, and returns the
    /// stored value. Two racing misses for one key end up with the same
    /// product identity.
    pub async fn get_or_insert(&self, key: String, outcome: ReactionOutcome) -> ReactionOutcome {
        let mut guard = self.entries.write().await;
        guard.entry(key).or_insert(outcome).clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_insert_wins() {
        let cache = ResolutionCache::new();
        assert!(cache.is_empty().await);

        let first = cache
            .get_or_insert("Au+Hg".into(), ReactionOutcome::failed("first"))
            .await;
        let second = cache
            .get_or_insert("Au+Hg".into(), ReactionOutcome::failed("second"))
            .await;
        assert_eq!(first.message, "first");
        assert_eq!(second.message, "first");
        assert_eq!(cache.len().await, 1);
        assert_eq!(cache.get("Au+Hg").await.map(|o| o.message), Some("first".into()));
        assert!(cache.get("Hg+Au").await.is_none());
    }
}
