use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use catalog::{canonical_key_for, starter_inventory, ReactionTable};
use chrono::Utc;
use resolver::{GenerationRequest, ReactionGenerator, ResolutionCache, Resolver};
use shared::protocol::ResolutionSource;

/// Answers deterministically from the prompt: combinations containing iron
/// react, ones containing silver do not, everything else errors.
struct RuleGenerator {
    calls: AtomicUsize,
}

#[async_trait]
impl ReactionGenerator for RuleGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let symbols: Vec<&str> = request.reactants.iter().map(|r| r.symbol.as_str()).collect();
        if symbols.contains(&"Fe") {
            return Ok(serde_json::json!({
                "success": true,
                "productName": "铁的化合物",
                "productSymbol": format!("Fe{}", symbols.len()),
                "productDescription": "生成的铁化合物。",
                "productColor": "orange",
                "productType": "compound",
                "message": "铁参与了反应。"
            })
            .to_string());
        }
        if symbols.contains(&"Ag") {
            return Ok(r#"{"success": false, "message": "银很稳定。"}"#.to_owned());
        }
        Err(anyhow!("service offline"))
    }
}

#[tokio::test]
async fn every_starter_pair_yields_a_well_formed_outcome() {
    let generator = Arc::new(RuleGenerator {
        calls: AtomicUsize::new(0),
    });
    let table = ReactionTable::builtin();
    let resolver = Resolver::new(table.clone(), generator.clone(), Arc::new(ResolutionCache::new()));
    let inventory = starter_inventory(Utc::now());

    let mut expected_calls = 0;
    for (i, left) in inventory.iter().enumerate() {
        for right in inventory.iter().skip(i + 1) {
            let inputs = [left.clone(), right.clone()];
            let key = canonical_key_for(&inputs);
            let calls_before = generator.calls.load(Ordering::SeqCst);

            let resolution = resolver.resolve_traced(&inputs).await;
            assert!(resolution.outcome.is_well_formed(), "{key}");
            assert_eq!(resolution.key.as_deref(), Some(key.as_str()));

            let called = generator.calls.load(Ordering::SeqCst) - calls_before;
            if table.contains(&key) {
                assert_eq!(resolution.source, ResolutionSource::Table, "{key}");
                assert_eq!(called, 0, "{key}");
            } else {
                assert_eq!(called, 1, "{key}");
                expected_calls += 1;
            }
        }
    }
    assert_eq!(generator.calls.load(Ordering::SeqCst), expected_calls);
}

#[tokio::test]
async fn second_pass_only_calls_for_previous_failures() {
    let generator = Arc::new(RuleGenerator {
        calls: AtomicUsize::new(0),
    });
    let table = ReactionTable::builtin();
    let resolver = Resolver::new(table.clone(), generator.clone(), Arc::new(ResolutionCache::new()));
    let inventory = starter_inventory(Utc::now());

    let mut unavailable = 0;
    let mut first_pass = Vec::new();
    for (i, left) in inventory.iter().enumerate() {
        for right in inventory.iter().skip(i + 1) {
            let inputs = vec![left.clone(), right.clone()];
            let resolution = resolver.resolve_traced(&inputs).await;
            if resolution.source == ResolutionSource::Unavailable {
                unavailable += 1;
            }
            first_pass.push((inputs, resolution));
        }
    }

    let calls_after_first = generator.calls.load(Ordering::SeqCst);
    for (inputs, earlier) in first_pass {
        let again = resolver.resolve_traced(&inputs).await;
        match earlier.source {
            ResolutionSource::Generated => {
                assert_eq!(again.source, ResolutionSource::Cache);
                assert_eq!(again.outcome, earlier.outcome);
            }
            ResolutionSource::Unavailable => {
                assert_eq!(again.source, ResolutionSource::Unavailable);
            }
            ResolutionSource::Table => {
                assert_eq!(again.source, ResolutionSource::Table);
                assert_ne!(
                    again.outcome.product.map(|p| p.id),
                    earlier.outcome.product.map(|p| p.id)
                );
            }
            other => panic!("unexpected source {other:?}"),
        }
    }
    assert_eq!(
        generator.calls.load(Ordering::SeqCst) - calls_after_first,
        unavailable
    );
}
