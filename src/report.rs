//! Report assembly
//!
//! Renders the accumulated and derived statistics into the external JSON
//! schema, plus the optional related-phrase edge list. Field names are part
//! of the external contract and must not change. Every ranked list applies
//! an explicit count/score-descending, name-ascending order before emission
//! so hash-map iteration order never reaches the output.

use crate::clustering::ClusterModel;
use crate::graph::index::TokenIndex;
use crate::graph::related::related_phrases;
use crate::stats::features::FeatureSummary;
use crate::stats::pmi::compute_pmi;
use crate::stats::quality::compute_quality;
use crate::stats::store::TrainerState;
use crate::types::MinerConfig;
use chrono::Utc;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt::Write as _;

/// Maximum regions listed per phrase
pub const REGION_LIMIT: usize = 6;
/// Maximum centroid tokens listed per cluster
pub const CENTROID_TOKEN_LIMIT: usize = 8;

/// Top-level report document
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub generated_at: String,
    pub summary: Summary,
    pub phrases: Vec<PhraseReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clusters: Option<Vec<ClusterReport>>,
}

/// Corpus-wide summary block
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_contexts: u64,
    pub phrase_count: usize,
}

/// One reported phrase
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseReport {
    pub phrase: String,
    pub count: u64,
    pub avg_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<usize>,
    pub quality: QualityReport,
    pub regions: Vec<RegionEntry>,
    pub top_context_tokens: Vec<TokenEntry>,
    pub related_phrases: Vec<RelatedEntry>,
}

#[derive(Debug, Serialize)]
pub struct QualityReport {
    pub confidence: f64,
    pub evidence: f64,
}

#[derive(Debug, Serialize)]
pub struct RegionEntry {
    pub region: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct TokenEntry {
    pub token: String,
    pub count: u64,
    pub pmi: f64,
}

#[derive(Debug, Serialize)]
pub struct RelatedEntry {
    pub phrase: String,
    pub score: f64,
}

/// One reported cluster
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterReport {
    pub id: usize,
    pub size: usize,
    pub centroid_tokens: Vec<CentroidToken>,
}

#[derive(Debug, Serialize)]
pub struct CentroidToken {
    pub token: String,
    pub weight: f64,
}

/// Round to the 4-decimal precision the report format fixes.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Count-ranked entries: count descending, name ascending, truncated.
fn top_entries(counts: &FxHashMap<String, u64>, limit: usize) -> Vec<(String, u64)> {
    let mut entries: Vec<(String, u64)> = counts
        .iter()
        .map(|(name, &count)| (name.clone(), count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(limit);
    entries
}

/// Phrase names with at least `min_count` uses, ascending.
fn reported_phrases(state: &TrainerState, min_count: u64) -> Vec<&String> {
    let mut names: Vec<&String> = state
        .phrases
        .iter()
        .filter(|(_, stat)| stat.count >= min_count)
        .map(|(name, _)| name)
        .collect();
    names.sort();
    names
}

/// Assemble the full report document.
pub fn assemble(
    state: &TrainerState,
    features: &FxHashMap<String, FeatureSummary>,
    index: &TokenIndex,
    vocab: &[String],
    clusters: Option<&ClusterModel>,
    config: &MinerConfig,
) -> Report {
    let cluster_lookup: FxHashMap<&str, usize> =
        clusters.map(ClusterModel::lookup).unwrap_or_default();
    let empty_summary = FeatureSummary::default();

    let mut phrase_reports = Vec::new();
    for name in reported_phrases(state, config.min_count) {
        let stat = &state.phrases[name];
        let summary = features.get(name).unwrap_or(&empty_summary);
        let quality = compute_quality(stat.count, summary.mean_positive_pmi);

        let regions = top_entries(&stat.region_counts, REGION_LIMIT)
            .into_iter()
            .map(|(region, count)| RegionEntry { region, count })
            .collect();

        let top_context_tokens = top_entries(&stat.token_counts, config.top_tokens)
            .into_iter()
            .map(|(token, count)| {
                let pmi = summary.token_pmi.get(&token).copied().unwrap_or_else(|| {
                    let token_total =
                        state.totals.token_totals.get(&token).copied().unwrap_or(0);
                    compute_pmi(count, stat.count, token_total, state.totals.total_contexts)
                });
                TokenEntry {
                    token,
                    count,
                    pmi: round4(pmi),
                }
            })
            .collect();

        let related = related_phrases(name, stat, index, config.related_limit)
            .into_iter()
            .map(|(phrase, score)| RelatedEntry {
                phrase,
                score: round4(score),
            })
            .collect();

        phrase_reports.push(PhraseReport {
            phrase: name.clone(),
            count: stat.count,
            avg_score: round4(stat.avg_score()),
            cluster: cluster_lookup.get(name.as_str()).copied(),
            quality: QualityReport {
                confidence: round4(quality.confidence),
                evidence: round4(quality.evidence),
            },
            regions,
            top_context_tokens,
            related_phrases: related,
        });
    }

    Report {
        generated_at: Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        summary: Summary {
            total_contexts: state.totals.total_contexts,
            phrase_count: state.phrases.len(),
        },
        phrases: phrase_reports,
        clusters: clusters.map(|model| cluster_reports(model, vocab)),
    }
}

fn cluster_reports(model: &ClusterModel, vocab: &[String]) -> Vec<ClusterReport> {
    model
        .centroids
        .iter()
        .enumerate()
        .map(|(id, centroid)| {
            let mut weighted: Vec<(String, f64)> = vocab
                .iter()
                .cloned()
                .zip(centroid.iter().copied())
                .collect();
            weighted.sort_by(|a, b| {
                b.1.partial_cmp(&a.1)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.0.cmp(&b.0))
            });
            weighted.truncate(CENTROID_TOKEN_LIMIT);
            ClusterReport {
                id,
                size: model.cluster_size(id),
                centroid_tokens: weighted
                    .into_iter()
                    .map(|(token, weight)| CentroidToken {
                        token,
                        weight: round4(weight),
                    })
                    .collect(),
            }
        })
        .collect()
}

/// Render the related-phrase edge list as TSV (`source`, `target`, `score`),
/// restricted to phrases meeting the minimum usage count.
pub fn render_graph(state: &TrainerState, index: &TokenIndex, config: &MinerConfig) -> String {
    let mut out = String::from("source\ttarget\tscore\n");
    for name in reported_phrases(state, config.min_count) {
        let stat = &state.phrases[name];
        for (target, score) in related_phrases(name, stat, index, config.related_limit) {
            let _ = writeln!(out, "{}\t{}\t{:.4}", name, target, score);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::StopwordFilter;
    use crate::stats::features::summarize_all;

    fn absorbed_state() -> TrainerState {
        let stopwords = StopwordFilter::new();
        let mut state = TrainerState::new();
        let rows: &[(&str, &str, f64, &[&str])] = &[
            ("lit", "us-west", 0.8, &["party", "wild", "night"]),
            ("lit", "us-west", 0.6, &["party", "night"]),
            ("lit", "us-east", 1.0, &["wild", "energy"]),
            ("salty", "us-east", -0.4, &["party", "game"]),
            ("salty", "us-west", -0.2, &["party", "ended"]),
            ("once", "", 0.0, &["party"]),
        ];
        for (phrase, region, score, tokens) in rows {
            let tokens: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
            state.absorb(phrase, region, *score, &tokens, &stopwords);
        }
        state
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(0.69314718), 0.6931);
        assert_eq!(round4(-0.00005), -0.0001);
        assert_eq!(round4(2.0), 2.0);
    }

    #[test]
    fn test_top_entries_order_and_limit() {
        let counts: FxHashMap<String, u64> = [("beta", 2), ("alpha", 2), ("gamma", 5)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        let top = top_entries(&counts, 2);
        assert_eq!(top[0].0, "gamma");
        assert_eq!(top[1].0, "alpha");
        assert_eq!(top.len(), 2);
    }

    #[test]
    fn test_assemble_filters_and_orders_phrases() {
        let state = absorbed_state();
        let features = summarize_all(&state.phrases, &state.totals);
        let index = TokenIndex::build(&state.phrases);
        let config = MinerConfig::default();

        let report = assemble(&state, &features, &index, &[], None, &config);
        // "once" is below min_count; the rest come name ascending.
        let names: Vec<&str> = report.phrases.iter().map(|p| p.phrase.as_str()).collect();
        assert_eq!(names, vec!["lit", "salty"]);
        // The summary still counts every distinct phrase.
        assert_eq!(report.summary.phrase_count, 3);
        assert_eq!(report.summary.total_contexts, 6);
        assert!(report.clusters.is_none());
    }

    #[test]
    fn test_phrase_record_contents() {
        let state = absorbed_state();
        let features = summarize_all(&state.phrases, &state.totals);
        let index = TokenIndex::build(&state.phrases);
        let config = MinerConfig::default();

        let report = assemble(&state, &features, &index, &[], None, &config);
        let lit = &report.phrases[0];
        assert_eq!(lit.count, 3);
        assert_eq!(lit.avg_score, 0.8);
        assert!(lit.cluster.is_none());
        assert!(lit.quality.confidence > 0.0 && lit.quality.confidence < 1.0);

        // Regions: us-west (2) before us-east (1).
        assert_eq!(lit.regions[0].region, "us-west");
        assert_eq!(lit.regions[0].count, 2);

        // Both phrases share "party"; each lists the other as related.
        assert!(lit
            .top_context_tokens
            .iter()
            .any(|t| t.token == "party" && t.count == 2));
        assert!(lit.related_phrases.iter().any(|r| r.phrase == "salty"));
        let salty = &report.phrases[1];
        assert!(salty.related_phrases.iter().any(|r| r.phrase == "lit"));
    }

    #[test]
    fn test_json_field_names() {
        let state = absorbed_state();
        let features = summarize_all(&state.phrases, &state.totals);
        let index = TokenIndex::build(&state.phrases);
        let config = MinerConfig::default();

        let report = assemble(&state, &features, &index, &[], None, &config);
        let value = serde_json::to_value(&report).unwrap();

        assert!(value.get("generatedAt").is_some());
        assert!(value["summary"].get("totalContexts").is_some());
        assert!(value["summary"].get("phraseCount").is_some());
        let phrase = &value["phrases"][0];
        for field in [
            "phrase",
            "count",
            "avgScore",
            "quality",
            "regions",
            "topContextTokens",
            "relatedPhrases",
        ] {
            assert!(phrase.get(field).is_some(), "missing field {field}");
        }
        // No clustering ran, so neither key appears.
        assert!(phrase.get("cluster").is_none());
        assert!(value.get("clusters").is_none());
    }

    #[test]
    fn test_cluster_section() {
        let model = ClusterModel {
            phrases: vec!["lit".to_string(), "salty".to_string()],
            assignments: vec![0, 1],
            centroids: vec![vec![0.5, 0.0], vec![0.0, 0.25]],
        };
        let vocab = vec!["party".to_string(), "game".to_string()];
        let reports = cluster_reports(&model, &vocab);

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].id, 0);
        assert_eq!(reports[0].size, 1);
        assert_eq!(reports[0].centroid_tokens[0].token, "party");
        assert_eq!(reports[0].centroid_tokens[0].weight, 0.5);
        // Zero weights tie; names break the tie ascending.
        assert_eq!(reports[1].centroid_tokens[0].token, "game");
    }

    #[test]
    fn test_render_graph() {
        let state = absorbed_state();
        let index = TokenIndex::build(&state.phrases);
        let config = MinerConfig::default();

        let graph = render_graph(&state, &index, &config);
        let lines: Vec<&str> = graph.lines().collect();
        assert_eq!(lines[0], "source\ttarget\tscore");
        // lit <-> salty share "party" with min(2, 2) = 2.
        assert!(lines.contains(&"lit\tsalty\t2.0000"));
        assert!(lines.contains(&"salty\tlit\t2.0000"));
        // "once" is below the minimum count and never appears as a source.
        assert!(!lines.iter().any(|l| l.starts_with("once\t")));
    }
}
