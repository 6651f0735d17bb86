//! DecisionEngine: resolves the batch mode, then runs coerce → label → rank.

use mercy_core::config::EngineConfig;
use mercy_core::errors::ConfigError;
use mercy_core::models::{NormalizedDecision, SourceMode};
use serde_json::Value;
use tracing::{debug, trace};

use crate::coercion;
use crate::mode;
use crate::ranking;

/// The ranked output of one normalization pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionBatch {
    /// Mode the batch was normalized under.
    pub mode: SourceMode,
    /// Decisions in ranked order.
    pub decisions: Vec<NormalizedDecision>,
}

impl DecisionBatch {
    /// Whether trend and confidence carry information for this batch.
    /// When false the presentation layer should hide them entirely.
    pub fn explain_fields_meaningful(&self) -> bool {
        self.mode.is_explain()
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    /// Number of decisions whose `signal_id` had to be synthesized.
    pub fn synthesized_count(&self) -> usize {
        self.decisions
            .iter()
            .filter(|d| d.has_synthesized_id())
            .count()
    }
}

/// Stateless apart from its config; safe to share and reuse across batches.
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine {
    config: EngineConfig,
}

impl DecisionEngine {
    /// Create an engine. The config is validated first, so every engine
    /// keeps a zero score at `None` and thresholds in order.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// An explicit mode wins. Otherwise the first object row decides,
    /// unless detection is switched off, in which case the batch is base.
    pub fn resolve_mode(&self, rows: &[Value], explicit: Option<SourceMode>) -> SourceMode {
        match explicit {
            Some(mode) => mode,
            None if self.config.mode.detect_explain => mode::detect_batch_mode(rows),
            None => SourceMode::Base,
        }
    }

    /// Coerce and label a single row under `mode`.
    pub fn coerce(&self, raw: &Value, mode: SourceMode) -> NormalizedDecision {
        coercion::coerce_with(raw, mode, &self.config.severity)
    }

    /// Normalize and rank a batch of raw rows.
    pub fn normalize(&self, rows: &[Value], explicit: Option<SourceMode>) -> DecisionBatch {
        let mode = self.resolve_mode(rows, explicit);

        let decisions: Vec<NormalizedDecision> = rows
            .iter()
            .map(|raw| {
                let decision = self.coerce(raw, mode);
                if decision.has_synthesized_id() {
                    trace!(signal_id = %decision.signal_id, "synthesized signal id for row");
                }
                decision
            })
            .collect();

        let batch = DecisionBatch {
            mode,
            decisions: ranking::rank_owned(decisions),
        };

        debug!(
            ?mode,
            rows = rows.len(),
            synthesized = batch.synthesized_count(),
            "normalized decision batch"
        );

        batch
    }
}
