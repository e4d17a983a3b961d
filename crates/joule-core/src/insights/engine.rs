//! Tip engine - runs the rules in priority order

use crate::summary::SummaryView;

use super::types::{Tip, TipKind};
use super::rules;

/// Most tips surfaced at once
pub const MAX_TIPS: usize = 5;

/// A threshold rule that may produce one tip for a summary
pub trait TipRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> TipKind;

    /// Evaluate the rule against a summary; `None` when it does not fire
    fn evaluate(&self, summary: &SummaryView) -> Option<Tip>;
}

/// Evaluates the built-in rules in fixed priority order
pub struct TipEngine {
    rules: Vec<Box<dyn TipRule>>,
}

impl Default for TipEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TipEngine {
    /// Create an engine with the built-in rules, highest priority first
    pub fn new() -> Self {
        let mut engine = Self { rules: vec![] };

        engine.register(Box::new(rules::HighAcUseRule));
        engine.register(Box::new(rules::ApplianceHeavyRule));
        engine.register(Box::new(rules::AboveAverageUseRule));
        engine.register(Box::new(rules::RisingTrendRule));
        engine.register(Box::new(rules::FallingTrendRule));
        engine.register(Box::new(rules::EvergreenRule::new(
            TipKind::NaturalLight,
            "Use natural light during daytime to reduce electricity usage",
        )));
        engine.register(Box::new(rules::EvergreenRule::new(
            TipKind::AcSetpoint,
            "Set your AC to 24-26\u{b0}C for optimal efficiency",
        )));
        engine.register(Box::new(rules::EvergreenRule::new(
            TipKind::PhantomLoads,
            "Unplug devices when not in use to avoid phantom loads",
        )));
        engine.register(Box::new(rules::EvergreenRule::new(
            TipKind::LedBulbs,
            "Consider using LED bulbs if you haven't already",
        )));

        engine
    }

    /// Register a rule after the existing ones
    pub fn register(&mut self, rule: Box<dyn TipRule>) {
        self.rules.push(rule);
    }

    /// Evaluate every rule against the summary, in priority order
    ///
    /// Deterministic for a given summary: each rule fires at most once and
    /// the result is capped at [`MAX_TIPS`].
    pub fn tips_for(&self, summary: &SummaryView) -> Vec<Tip> {
        let mut tips = vec![];

        for rule in &self.rules {
            if tips.len() == MAX_TIPS {
                break;
            }
            if let Some(tip) = rule.evaluate(summary) {
                tracing::debug!(rule = rule.id().as_str(), "Tip rule fired");
                tips.push(tip);
            }
        }

        tips
    }

    /// Registered rule identifiers, in priority order
    pub fn rule_kinds(&self) -> Vec<TipKind> {
        self.rules.iter().map(|r| r.id()).collect()
    }
}
