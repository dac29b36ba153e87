//! Race report rendering: a human-readable table and a JSON document.
//!
//! The JSON document binds every entry to the problem fingerprint so a
//! report can be matched to the exact instance it came from.

use std::fmt::Write as _;

use serde_json::{json, Value};
use strips_kernel::operators::action::CostModel;
use strips_search::outcome::{SearchOutcome, SearchReport};

use crate::race::{RaceEntry, RaceOutcome, RaceReport};

/// Report schema version.
pub const REPORT_SCHEMA_VERSION: &str = "strips.race_report.v1";

fn search_json(report: &SearchReport, cost_model: CostModel) -> Value {
    let plan = report.outcome.plan().map(|plan| {
        json!({
            "length": plan.len(),
            "cost": plan.cost,
            "actions": plan.actions,
        })
    });
    let max_depth = match report.outcome {
        SearchOutcome::DepthLimitReached { max_depth } => Some(max_depth),
        _ => None,
    };
    json!({
        "plan": plan,
        "length_optimal": report.algorithm.is_length_optimal(cost_model),
        "depth_limit": max_depth,
        "peak_elements": report.peak_elements,
        "peak_mb": report.peak_mb(),
        "elapsed_ms": millis(report.elapsed),
        "stats": {
            "expansions": report.stats.expansions,
            "generated": report.stats.generated,
            "duplicates_suppressed": report.stats.duplicates_suppressed,
            "dead_ends": report.stats.dead_ends,
            "stale_skipped": report.stats.stale_skipped,
            "depth_passes": report.stats.depth_passes,
            "polls": report.stats.polls,
            "heuristic_evaluations": report.stats.heuristic_evaluations,
            "heuristic_cache_hits": report.stats.heuristic_cache_hits,
        },
    })
}

fn entry_json(entry: &RaceEntry, cost_model: CostModel) -> Value {
    let mut value = json!({
        "algorithm": entry.algorithm.name(),
        "outcome": entry.outcome.label(),
        "wall_ms": millis(entry.wall),
    });
    let details = match &entry.outcome {
        RaceOutcome::Completed(report) => search_json(report, cost_model),
        RaceOutcome::Failed { detail } => json!({ "detail": detail }),
        RaceOutcome::HardTimeout { limit } => json!({ "limit_ms": millis(*limit) }),
    };
    if let (Some(target), Value::Object(extra)) = (value.as_object_mut(), details) {
        target.extend(extra);
    }
    value
}

/// Render a race as a JSON document.
#[must_use]
pub fn to_json(report: &RaceReport) -> Value {
    let policy = &report.config.policy;
    json!({
        "schema_version": REPORT_SCHEMA_VERSION,
        "problem_fingerprint": report.fingerprint.as_str(),
        "config": {
            "time_budget_ms": millis(policy.time_budget),
            "max_depth": policy.max_depth,
            "cost_model": policy.cost_model.name(),
            "hard_timeout_ms": millis(report.config.hard_timeout()),
        },
        "wall_ms": millis(report.wall),
        "entries": report
            .entries
            .iter()
            .map(|entry| entry_json(entry, policy.cost_model))
            .collect::<Vec<_>>(),
    })
}

/// Render a race as a plain-text table followed by each plan.
#[must_use]
pub fn render_text(report: &RaceReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "problem {}", report.fingerprint);
    let _ = writeln!(
        out,
        "{:<6} {:<13} {:>6} {:>6} {:>10} {:>10} {:>10} {:>10}",
        "algo", "outcome", "length", "cost", "expanded", "generated", "peak MB", "ms"
    );
    for entry in &report.entries {
        let report = entry.outcome.report();
        let plan = report.and_then(|r| r.outcome.plan());
        let _ = writeln!(
            out,
            "{:<6} {:<13} {:>6} {:>6} {:>10} {:>10} {:>10} {:>10}",
            entry.algorithm.name(),
            entry.outcome.label(),
            plan.map_or_else(|| "-".to_string(), |p| p.len().to_string()),
            plan.map_or_else(|| "-".to_string(), |p| p.cost.to_string()),
            report.map_or_else(|| "-".to_string(), |r| r.stats.expansions.to_string()),
            report.map_or_else(|| "-".to_string(), |r| r.stats.generated.to_string()),
            report.map_or_else(|| "-".to_string(), |r| format!("{:.3}", r.peak_mb())),
            millis(entry.wall),
        );
    }
    for entry in &report.entries {
        match &entry.outcome {
            RaceOutcome::Completed(search) => {
                if let Some(plan) = search.outcome.plan() {
                    let _ = writeln!(out, "\n{} plan:", entry.algorithm);
                    for (step, action) in plan.actions.iter().enumerate() {
                        let _ = writeln!(out, "  {:>3}. {action}", step + 1);
                    }
                } else {
                    let _ = writeln!(out, "\n{}: {}", entry.algorithm, search.outcome);
                }
            }
            RaceOutcome::Failed { detail } => {
                let _ = writeln!(out, "\n{} failed: {detail}", entry.algorithm);
            }
            RaceOutcome::HardTimeout { limit } => {
                let _ = writeln!(out, "\n{} abandoned after {limit:?}", entry.algorithm);
            }
        }
    }
    out
}

fn millis(duration: std::time::Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
