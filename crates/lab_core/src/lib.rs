use std::{cmp::Reverse, sync::Arc};

use catalog::starter_inventory;
use chrono::Utc;
use resolver::Resolver;
use shared::{
    domain::{ReactionOutcome, Substance, SubstanceId},
    protocol::ResolutionSource,
};
use thiserror::Error;
use tracing::info;

pub const WORKBENCH_CAPACITY: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LabError {
    #[error("workbench already holds {capacity} substances")]
    WorkbenchFull { capacity: usize },
    #[error("substance {0} is not in the inventory")]
    UnknownSubstance(SubstanceId),
    #[error("workbench slot {0} is empty")]
    EmptySlot(usize),
}

#[derive(Debug, Clone)]
pub struct SynthesisReport {
    pub outcome: ReactionOutcome,
    pub source: ResolutionSource,
    /// True when the product was not in the inventory before.
    pub newly_discovered: bool,
}

/// One player's game state: what they have discovered and what is on the
/// workbench.
pub struct Laboratory {
    resolver: Arc<Resolver>,
    inventory: Vec<Substance>,
    workbench: Vec<SubstanceId>,
}

impl Laboratory {
    pub fn new(resolver: Arc<Resolver>, inventory: Vec<Substance>) -> Self {
        Self {
            resolver,
            inventory,
            workbench: Vec::with_capacity(WORKBENCH_CAPACITY),
        }
    }

    pub fn with_starter_inventory(resolver: Arc<Resolver>) -> Self {
        Self::new(resolver, starter_inventory(Utc::now()))
    }

    /// Newest discoveries first; substances without a stamp go last.
    pub fn inventory(&self) -> Vec<&Substance> {
        let mut items: Vec<&Substance> = self.inventory.iter().collect();
        items.sort_by_key(|item| Reverse(item.discovered_at));
        items
    }

    pub fn search(&self, query: &str) -> Vec<&Substance> {
        let query = query.trim();
        let lowered = query.to_lowercase();
        self.inventory()
            .into_iter()
            .filter(|item| {
                item.name.contains(query) || item.symbol.to_lowercase().contains(&lowered)
            })
            .collect()
    }

    pub fn discovered_count(&self) -> usize {
        self.inventory.len()
    }

    pub fn find(&self, id: &SubstanceId) -> Option<&Substance> {
        self.inventory.iter().find(|item| &item.id == id)
    }

    pub fn add_to_workbench(&mut self, id: &SubstanceId) -> Result<(), LabError> {
        if self.workbench.len() >= WORKBENCH_CAPACITY {
            return Err(LabError::WorkbenchFull {
                capacity: WORKBENCH_CAPACITY,
            });
        }
        if self.find(id).is_none() {
            return Err(LabError::UnknownSubstance(id.clone()));
        }
        self.workbench.push(id.clone());
        Ok(())
    }

    pub fn remove_from_workbench(&mut self, slot: usize) -> Result<Substance, LabError> {
        if slot >= self.workbench.len() {
            return Err(LabError::EmptySlot(slot));
        }
        let id = self.workbench.remove(slot);
        self.find(&id).cloned().ok_or(LabError::UnknownSubstance(id))
    }

    pub fn clear_workbench(&mut self) {
        self.workbench.clear();
    }

    pub fn workbench(&self) -> Vec<&Substance> {
        self.workbench.iter().filter_map(|id| self.find(id)).collect()
    }

    pub async fn synthesize(&mut self) -> SynthesisReport {
        let materials: Vec<Substance> = self.workbench().into_iter().cloned().collect();
        let resolution = self.resolver.resolve_traced(&materials).await;
        if resolution.source != ResolutionSource::Rejected {
            self.workbench.clear();
        }

        let newly_discovered = match &resolution.outcome.product {
            Some(product) if resolution.outcome.success => self.record_discovery(product),
            _ => false,
        };

        SynthesisReport {
            outcome: resolution.outcome,
            source: resolution.source,
            newly_discovered,
        }
    }

    fn record_discovery(&mut self, product: &Substance) -> bool {
        if self.inventory.iter().any(|item| item.name == product.name) {
            return false;
        }
        let mut discovered = product.clone();
        discovered.discovered_at = Some(Utc::now());
        info!(
            id = %discovered.id,
            symbol = %discovered.symbol,
            total = self.inventory.len() + 1,
            "lab: new substance discovered"
        );
        self.inventory.push(discovered);
        true
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
