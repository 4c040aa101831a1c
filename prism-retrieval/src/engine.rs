//! RetrievalEngine: the cascading executor.
//!
//! 1. Semantic search, raced against `timeout_ms` (the only hard-fail stage).
//! 2. Seed extraction from the returned concepts.
//! 3. Semantic view built from every returned concept.
//! 4. Entity, temporal and causal expansion joined concurrently.
//! 5. Merge of `[semantic, entity, temporal, causal]` in that fixed order.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use prism_core::config::{ExecutorConfig, ExpansionConfig, PrismConfig};
use prism_core::errors::{ExecutorError, PrismResult, Stage, ValidationError};
use prism_core::models::{
    BranchReport, BranchStatus, EnrichedSemanticMatch, ExecutionResult, GraphView, NodeData,
    PhaseTiming, ScoredNode, ViewSource,
};
use prism_core::traits::{ICausalStore, IEntityStore, ISemanticSearch, ITemporalStore};
use prism_core::Intent;
use prism_expansion::{CausalExpander, EntityExpander, IGraphExpander, TemporalExpander};
use prism_fusion::Merger;
use prism_observability::query_log::hash_query;
use prism_observability::tracing_setup::events;
use prism_observability::{expansion_span, retrieval_span, ObservabilityEngine};
use tokio::time::{timeout, Instant};
use tracing::{debug, info, warn, Instrument};

use crate::seeds::extract_seeds;

/// Orchestrates one retrieval per [`execute`](Self::execute) call.
///
/// Holds no per-query state, so one engine can serve concurrent queries.
pub struct RetrievalEngine<S, E, T, C> {
    searcher: S,
    entity: E,
    temporal: T,
    causal: C,
    config: ExecutorConfig,
    expansion: ExpansionConfig,
    merger: Merger,
    observer: Option<Arc<Mutex<ObservabilityEngine>>>,
}

impl<S, ES, TS, CS> RetrievalEngine<S, EntityExpander<ES>, TemporalExpander<TS>, CausalExpander<CS>>
where
    S: ISemanticSearch,
    ES: IEntityStore,
    TS: ITemporalStore,
    CS: ICausalStore,
{
    /// Wire the stock expanders over the given stores.
    pub fn from_stores(
        searcher: S,
        entity_store: ES,
        temporal_store: TS,
        causal_store: CS,
        config: &PrismConfig,
    ) -> PrismResult<Self> {
        Self::new(
            searcher,
            EntityExpander::new(entity_store),
            TemporalExpander::new(temporal_store)
                .with_window_days(config.expansion.temporal_window_days),
            CausalExpander::new(causal_store),
            config,
        )
    }
}

impl<S, E, T, C> RetrievalEngine<S, E, T, C>
where
    S: ISemanticSearch,
    E: IGraphExpander,
    T: IGraphExpander,
    C: IGraphExpander,
{
    /// Validate `config` and build the engine. Out-of-range values fail here,
    /// before any query runs.
    pub fn new(
        searcher: S,
        entity: E,
        temporal: T,
        causal: C,
        config: &PrismConfig,
    ) -> PrismResult<Self> {
        config.validate().map_err(|e| e.at(Stage::Config))?;
        let merger = Merger::new(config.merger.clone()).map_err(|e| e.at(Stage::Config))?;
        Ok(Self {
            searcher,
            entity,
            temporal,
            causal,
            config: config.executor.clone(),
            expansion: config.expansion.clone(),
            merger,
            observer: None,
        })
    }

    /// Report every finished retrieval into `observer`.
    pub fn with_observer(mut self, observer: Arc<Mutex<ObservabilityEngine>>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// The merger, for callers applying `top_n` or other filters downstream.
    pub fn merger(&self) -> &Merger {
        &self.merger
    }

    /// Run the full cascade for `query`.
    ///
    /// Fails only on invalid input, semantic-search timeout or semantic-search
    /// failure. Expansion store failures degrade to empty or partial views
    /// and are reported in [`ExecutionResult::branches`].
    pub async fn execute(&self, query: &str, intent: &Intent) -> PrismResult<ExecutionResult> {
        if query.trim().is_empty() {
            return Err(ValidationError::EmptyQuery.at(Stage::Execution));
        }
        intent.validate().map_err(|e| e.at(Stage::Execution))?;

        let span = retrieval_span!(hash_query(query), intent.intent_type);
        let result = self.run(query, intent).instrument(span).await?;

        if let Some(observer) = &self.observer {
            match observer.lock() {
                Ok(mut obs) => obs.observe(query, intent.intent_type, &result),
                Err(_) => warn!("observability engine lock poisoned, skipping report"),
            }
        }
        Ok(result)
    }

    async fn run(&self, query: &str, intent: &Intent) -> PrismResult<ExecutionResult> {
        let started = Instant::now();
        if !intent.entities.is_empty() {
            debug!(entity_hints = ?intent.entities, "intent entity hints");
        }

        // Phase 1: semantic search.
        let phase = Instant::now();
        let matches = self.semantic_search(query).await?;
        let semantic_ms = elapsed_ms(phase);
        debug!(matches = matches.len(), semantic_ms, "semantic search complete");

        // Phase 2: seeds.
        let phase = Instant::now();
        let seeds = extract_seeds(&matches, self.config.min_semantic_score)
            .map_err(|e| e.at(Stage::SeedExtraction))?;
        let seed_extraction_ms = elapsed_ms(phase);

        let mut views = vec![semantic_view(&matches)];

        // Phase 3: expansion.
        let phase = Instant::now();
        let branches = if seeds.has_seeds() {
            let ids = seeds.entity_ids();
            let hints = intent.depth_hints;
            let budget = self.expansion.branch_timeout_ms;
            let (entity, temporal, causal) = tokio::join!(
                run_branch(&self.entity, &ids, hints.entity, budget),
                run_branch(&self.temporal, &ids, hints.temporal, budget),
                run_branch(&self.causal, &ids, hints.causal, budget),
            );
            let mut reports = Vec::with_capacity(3);
            for (view, report) in [entity, temporal, causal] {
                if !view.is_empty() {
                    views.push(view);
                }
                reports.push(report);
            }
            reports
        } else {
            debug!("no entity seeds, skipping expansion");
            skipped_branches([
                self.entity.source(),
                self.temporal.source(),
                self.causal.source(),
            ])
        };
        let expansion_ms = elapsed_ms(phase);

        // Phase 4: merge.
        let phase = Instant::now();
        let merged = {
            let _span = prism_observability::merge_span!(views.len()).entered();
            self.merger.merge(&views).map_err(|e| e.at(Stage::Merge))?
        };
        let merge_ms = elapsed_ms(phase);

        let timing = PhaseTiming {
            semantic_ms,
            seed_extraction_ms,
            expansion_ms,
            merge_ms,
            total_ms: elapsed_ms(started),
        };
        events::retrieval_completed(merged.len(), seeds.entity_seeds.len(), &timing);

        Ok(ExecutionResult {
            merged,
            seeds,
            timing,
            branches,
        })
    }

    async fn semantic_search(&self, query: &str) -> PrismResult<Vec<EnrichedSemanticMatch>> {
        let budget = Duration::from_millis(self.config.timeout_ms);
        match timeout(
            budget,
            self.searcher
                .search_with_entities(query, self.config.semantic_top_k),
        )
        .await
        {
            Ok(Ok(matches)) => Ok(matches),
            Ok(Err(e)) => {
                warn!(error = %e, "semantic search failed");
                Err(ExecutorError::SemanticSearchFailed {
                    reason: e.to_string(),
                }
                .into())
            }
            Err(_) => {
                warn!(timeout_ms = self.config.timeout_ms, "semantic search timed out");
                Err(ExecutorError::SemanticSearchTimeout {
                    timeout_ms: self.config.timeout_ms,
                }
                .into())
            }
        }
    }
}

/// Every returned concept, scored by similarity, in search order.
fn semantic_view(matches: &[EnrichedSemanticMatch]) -> GraphView {
    GraphView::new(
        ViewSource::Semantic,
        matches
            .iter()
            .map(|m| {
                ScoredNode::new(
                    m.concept.id.clone(),
                    NodeData::Concept(m.concept.clone()),
                    m.score,
                )
            })
            .collect(),
    )
}

/// Run one expander, optionally under a time budget, and settle its report.
async fn run_branch<X: IGraphExpander>(
    expander: &X,
    ids: &[String],
    depth: u8,
    budget_ms: Option<u64>,
) -> (GraphView, BranchReport) {
    let source = expander.source();
    let started = Instant::now();
    let expansion = expander
        .expand(ids, usize::from(depth))
        .instrument(expansion_span!(source, ids.len(), depth));

    let settled = match budget_ms {
        Some(ms) => timeout(Duration::from_millis(ms), expansion)
            .await
            .map_err(|_| ms),
        None => Ok(expansion.await),
    };

    let (view, status) = match settled {
        Err(timeout_ms) => {
            events::branch_timed_out(source, timeout_ms);
            (GraphView::empty(source), BranchStatus::TimedOut { timeout_ms })
        }
        Ok(outcome) => {
            let status = match &outcome.degradation {
                Some(reason) => {
                    events::branch_degraded(source, reason, outcome.view.len());
                    BranchStatus::Degraded {
                        reason: reason.clone(),
                    }
                }
                None if outcome.view.is_empty() => BranchStatus::Empty,
                None => BranchStatus::Ok,
            };
            (outcome.view, status)
        }
    };

    let report = BranchReport {
        source,
        status,
        node_count: view.len(),
        elapsed_ms: elapsed_ms(started),
    };
    info!(
        source = %source,
        nodes = report.node_count,
        elapsed_ms = report.elapsed_ms,
        "expansion branch settled"
    );
    (view, report)
}

fn skipped_branches(sources: [ViewSource; 3]) -> Vec<BranchReport> {
    sources
        .into_iter()
        .map(|source| BranchReport {
            source,
            status: BranchStatus::Skipped,
            node_count: 0,
            elapsed_ms: 0,
        })
        .collect()
}

fn elapsed_ms(since: Instant) -> u64 {
    u64::try_from(since.elapsed().as_millis()).unwrap_or(u64::MAX)
}
