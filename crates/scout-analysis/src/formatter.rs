//! Response formatter: narrative plus structured data, keyed by response
//! kind.

use std::fmt::Write as _;

use scout_core::errors::HandlerError;
use scout_core::models::{
    EnvelopeError, ErrorKind, RankedCandidate, RequestVariant, ResultData,
};

use crate::router::AnalysisOutput;

pub struct ResponseFormatter {
    max_rows: usize,
}

impl ResponseFormatter {
    pub fn new(max_rows: usize) -> Self {
        Self { max_rows }
    }

    pub fn format(&self, request: &RequestVariant, output: AnalysisOutput) -> ResultData {
        let _span = scout_observability::format_span!(output.kind).entered();
        let narrative = match request {
            RequestVariant::Search(r) => self.search_narrative(&r.name_pattern, &output),
            RequestVariant::Compare(_) => self.comparison_narrative(&output),
            RequestVariant::Prospect(r) => {
                let header = format!(
                    "Top prospects aged {} or under with at least {} minutes",
                    r.age_max, r.min_minutes
                );
                self.ranked_narrative(&header, "No prospects matched those criteria.", &output)
            }
            RequestVariant::Tactical(r) => {
                let mut header = format!("Best fits for {}", r.priority_metrics.join(", "));
                if !r.context_entities.is_empty() {
                    let _ = write!(header, " alongside {}", r.context_entities.join(", "));
                }
                self.ranked_narrative(&header, "No candidates fit that profile.", &output)
            }
            RequestVariant::Unresolved(r) => fallback_narrative(&r.suggestions),
        };
        ResultData {
            kind: output.kind,
            candidates: output.candidates,
            comparison: output.comparison,
            narrative,
            insights: output.insights,
            suggestions: output.suggestions,
        }
    }

    /// Error payload for a failed handler. The message is user-facing.
    pub fn failure(&self, error: &HandlerError) -> EnvelopeError {
        let message = match error {
            HandlerError::EntitiesNotFound { missing, .. } if !missing.is_empty() => format!(
                "Couldn't find enough players to compare. Not found: {}.",
                missing.join(", ")
            ),
            HandlerError::EntitiesNotFound { .. } => {
                "Couldn't find enough players to compare.".to_string()
            }
            HandlerError::Scoring(e) => format!("Scoring failed: {e}"),
        };
        EnvelopeError {
            kind: ErrorKind::HandlerFailure,
            message,
        }
    }

    fn search_narrative(&self, pattern: &str, output: &AnalysisOutput) -> String {
        let pattern = pattern.trim();
        if output.candidates.is_empty() {
            return if pattern.is_empty() {
                "No players matched those filters.".to_string()
            } else {
                format!("No players matched \"{pattern}\".")
            };
        }
        let header = if pattern.is_empty() {
            format!("Found {} players", output.total_matches)
        } else {
            format!("Found {} players matching \"{pattern}\"", output.total_matches)
        };
        self.ranked_narrative(&header, "", output)
    }

    fn comparison_narrative(&self, output: &AnalysisOutput) -> String {
        let Some(comparison) = &output.comparison else {
            return "Nothing to compare.".to_string();
        };
        let names: Vec<&str> = comparison.entities.iter().map(|e| e.name.as_str()).collect();
        let mut text = format!(
            "Comparing {} across {} metrics.",
            names.join(" and "),
            comparison.metrics.len()
        );
        for insight in &output.insights {
            let _ = write!(text, "\n- {insight}");
        }
        text
    }

    fn ranked_narrative(&self, header: &str, empty: &str, output: &AnalysisOutput) -> String {
        if output.candidates.is_empty() {
            return empty.to_string();
        }
        let mut text = format!("{header}:");
        for (i, candidate) in output.candidates.iter().take(self.max_rows).enumerate() {
            let _ = write!(text, "\n{}. {}", i + 1, row(candidate));
        }
        let shown = output.candidates.len().min(self.max_rows);
        let remaining = output.total_matches.max(output.candidates.len()) - shown;
        if remaining > 0 {
            let _ = write!(text, "\n… and {remaining} more");
        }
        text
    }
}

fn row(candidate: &RankedCandidate) -> String {
    let e = &candidate.entity;
    let mut line = format!(
        "{} ({}, {}, {}, age {}) score {:.2}",
        e.name, e.team, e.position, e.league, e.age, candidate.composite_score
    );
    if let Some(bucket) = candidate.bucket {
        let _ = write!(line, " [{bucket}]");
    }
    line
}

fn fallback_narrative(suggestions: &[String]) -> String {
    let mut text = "I couldn't work out what you're looking for.".to_string();
    if !suggestions.is_empty() {
        text.push_str(" Try one of:");
        for s in suggestions {
            let _ = write!(text, "\n- {s}");
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use scout_core::models::{EntityRecord, ResponseKind, SearchRequest, UnresolvedRequest};

    use super::*;

    fn candidate(name: &str) -> RankedCandidate {
        RankedCandidate {
            entity: EntityRecord {
                name: name.into(),
                team: "Arsenal".into(),
                league: "ENG-Premier League".into(),
                position: "Midfielder".into(),
                nationality: None,
                age: 25,
                minutes: 3000,
                metrics: BTreeMap::new(),
            },
            composite_score: 0.5,
            contributions: BTreeMap::new(),
            bucket: None,
        }
    }

    fn output(n: usize) -> AnalysisOutput {
        AnalysisOutput {
            kind: ResponseKind::Search,
            candidates: (0..n).map(|i| candidate(&format!("Player {i}"))).collect(),
            total_matches: n,
            comparison: None,
            insights: vec![],
            suggestions: vec![],
        }
    }

    fn search(pattern: &str) -> RequestVariant {
        RequestVariant::Search(SearchRequest {
            name_pattern: pattern.into(),
            filters: Default::default(),
            limit: None,
        })
    }

    #[test]
    fn long_lists_are_capped() {
        let data = ResponseFormatter::new(5).format(&search(""), output(8));
        assert_eq!(data.candidates.len(), 8);
        assert!(data.narrative.contains("5. Player 4"));
        assert!(!data.narrative.contains("Player 5 "));
        assert!(data.narrative.ends_with("… and 3 more"));
    }

    #[test]
    fn empty_search_says_no_match() {
        let data = ResponseFormatter::new(5).format(&search("zidane"), output(0));
        assert_eq!(data.narrative, "No players matched \"zidane\".");
    }

    #[test]
    fn fallback_lists_suggestions() {
        let request = RequestVariant::Unresolved(UnresolvedRequest {
            suggestions: vec!["Compare Haaland vs Mbappé".into()],
        });
        let mut out = output(0);
        out.kind = ResponseKind::Suggestions;
        let data = ResponseFormatter::new(5).format(&request, out);
        assert!(data.narrative.contains("- Compare Haaland vs Mbappé"));
    }

    #[test]
    fn failure_names_missing_entities() {
        let err = HandlerError::EntitiesNotFound {
            missing: vec!["zidane".into()],
            found: vec!["Erling Haaland".into()],
        };
        let envelope_error = ResponseFormatter::new(5).failure(&err);
        assert_eq!(envelope_error.kind, ErrorKind::HandlerFailure);
        assert!(envelope_error.message.contains("zidane"));
    }
}
