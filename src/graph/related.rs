//! Related-phrase ranking
//!
//! Ranks other phrases by overlap-weighted shared-token co-occurrence:
//! for every token both phrases co-occur with, the smaller of the two
//! counts joins the candidate's score. This rewards shared high-frequency
//! tokens without normalizing by either phrase's total size (it is not a
//! cosine similarity).

use crate::graph::index::TokenIndex;
use crate::stats::store::PhraseStats;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// Rank phrases related to `phrase`, best first.
///
/// Ties in score break by phrase name ascending; the result is truncated
/// to `limit` entries.
pub fn related_phrases(
    phrase: &str,
    stat: &PhraseStats,
    index: &TokenIndex,
    limit: usize,
) -> Vec<(String, f64)> {
    let mut scores: FxHashMap<&str, f64> = FxHashMap::default();
    for (token, &count) in &stat.token_counts {
        let Some(postings) = index.get(token) else {
            continue;
        };
        for (other, other_count) in postings {
            if other.as_str() == phrase {
                continue;
            }
            let weight = count.min(*other_count) as f64;
            *scores.entry(other.as_str()).or_insert(0.0) += weight;
        }
    }

    let mut ranked: Vec<(String, f64)> = scores
        .into_iter()
        .map(|(candidate, score)| (candidate.to_string(), score))
        .collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    ranked.truncate(limit);
    ranked
}
