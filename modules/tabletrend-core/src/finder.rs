//! Heuristic entity finder used when no model-backed finder is wired in.

use crate::traits::{EntityFinder, NameSpan};

/// Confidence for a single capitalized token.
const BASE_CONFIDENCE: f64 = 0.3;
/// Added per additional token in the run, capped below certainty.
const PER_TOKEN_BONUS: f64 = 0.2;
const MAX_CONFIDENCE: f64 = 0.9;

/// Deterministic stand-in for a pretrained span-finding model: each maximal
/// run of capitalized tokens becomes one candidate span, and confidence
/// grows with run length (multi-word runs read much more like business
/// names than lone capitalized words). Stateless, so concurrent reads are
/// safe and scores are independent across posts. Deployments with a real
/// model substitute it through the `EntityFinder` seam.
pub struct CapitalizedSpanFinder;

impl EntityFinder for CapitalizedSpanFinder {
    fn find_candidate_spans(&self, tokens: &[String]) -> Vec<NameSpan> {
        let mut spans = Vec::new();
        let mut run_start: Option<usize> = None;

        for (idx, token) in tokens.iter().enumerate() {
            let capitalized = token
                .chars()
                .next()
                .is_some_and(|c| c.is_uppercase());
            match (capitalized, run_start) {
                (true, None) => run_start = Some(idx),
                (false, Some(start)) => {
                    spans.push(make_span(start, idx));
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = run_start {
            spans.push(make_span(start, tokens.len()));
        }
        spans
    }
}

fn make_span(start: usize, end: usize) -> NameSpan {
    let extra = (end - start - 1) as f64;
    NameSpan {
        start,
        end,
        confidence: (BASE_CONFIDENCE + PER_TOKEN_BONUS * extra).min(MAX_CONFIDENCE),
    }
}
