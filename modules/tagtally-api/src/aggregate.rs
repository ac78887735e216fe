use std::collections::HashMap;

use extractor_client::PostExtraction;

/// How the folded occurrence tables are rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AggregationMode {
    /// Count-descending, optionally truncated to the top `limit` entries.
    Ranked { limit: Option<usize> },
    /// Unranked entity→count mapping, hashtags only.
    Counts,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub entity: String,
    pub count: u64,
}

/// Entity → number of distinct posts it appeared in.
///
/// Entries keep first-seen order, so the stable sort in `ranked` breaks
/// count ties deterministically by insertion order.
#[derive(Default)]
struct OccurrenceTable {
    index: HashMap<String, usize>,
    entries: Vec<RankedEntry>,
}

impl OccurrenceTable {
    /// Fold one post's entities in. An entity repeated within a single
    /// post still counts that post once.
    fn fold_post(&mut self, entities: &[String]) {
        let mut seen: Vec<&String> = Vec::new();
        for entity in entities {
            if seen.contains(&entity) {
                continue;
            }
            seen.push(entity);
            match self.index.get(entity.as_str()) {
                Some(&i) => self.entries[i].count += 1,
                None => {
                    self.index.insert(entity.clone(), self.entries.len());
                    self.entries.push(RankedEntry {
                        entity: entity.clone(),
                        count: 1,
                    });
                }
            }
        }
    }

    fn ranked(mut self, limit: Option<usize>) -> Vec<RankedEntry> {
        self.entries.sort_by(|a, b| b.count.cmp(&a.count));
        if let Some(n) = limit {
            self.entries.truncate(n);
        }
        self.entries
    }

    fn counts(self) -> HashMap<String, u64> {
        self.entries.into_iter().map(|e| (e.entity, e.count)).collect()
    }
}

pub enum Aggregation {
    Ranked {
        hashtags: Vec<RankedEntry>,
        creators: Option<Vec<RankedEntry>>,
    },
    Counts {
        hashtags: HashMap<String, u64>,
    },
}

/// Fold per-post extractions into global occurrence tables.
///
/// The fold is commutative over result order: shuffling the input changes
/// at most the tie-break order among equal counts, never the counts.
pub fn aggregate(
    results: &[PostExtraction],
    mode: AggregationMode,
    track_creators: bool,
) -> Aggregation {
    let mut hashtags = OccurrenceTable::default();
    let mut creators = OccurrenceTable::default();

    for post in results {
        hashtags.fold_post(&post.hashtags);
        if track_creators {
            creators.fold_post(&post.creators);
        }
    }

    match mode {
        AggregationMode::Ranked { limit } => Aggregation::Ranked {
            hashtags: hashtags.ranked(limit),
            creators: track_creators.then(|| creators.ranked(limit)),
        },
        AggregationMode::Counts => Aggregation::Counts {
            hashtags: hashtags.counts(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(hashtags: &[&str], creators: &[&str]) -> PostExtraction {
        PostExtraction {
            hashtags: hashtags.iter().map(|s| s.to_string()).collect(),
            creators: creators.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn entry(entity: &str, count: u64) -> RankedEntry {
        RankedEntry {
            entity: entity.to_string(),
            count,
        }
    }

    #[test]
    fn counts_posts_per_entity() {
        let results = vec![post(&["a"], &["c1"]), post(&["a", "b"], &["c2"])];
        let agg = aggregate(&results, AggregationMode::Ranked { limit: Some(5) }, true);
        match agg {
            Aggregation::Ranked { hashtags, creators } => {
                assert_eq!(hashtags, vec![entry("a", 2), entry("b", 1)]);
                assert_eq!(creators.unwrap(), vec![entry("c1", 1), entry("c2", 1)]);
            }
            _ => panic!("expected ranked aggregation"),
        }
    }

    #[test]
    fn fold_is_commutative_over_result_order() {
        let mut results = vec![
            post(&["a", "b"], &[]),
            post(&["b", "c"], &[]),
            post(&["c"], &[]),
        ];
        let forward = aggregate(&results, AggregationMode::Counts, false);
        results.reverse();
        let backward = aggregate(&results, AggregationMode::Counts, false);
        match (forward, backward) {
            (Aggregation::Counts { hashtags: f }, Aggregation::Counts { hashtags: b }) => {
                assert_eq!(f, b);
            }
            _ => panic!("expected counts aggregation"),
        }
    }

    #[test]
    fn disjoint_tags_sum_to_total_pairs() {
        let results = vec![
            post(&["a", "b"], &[]),
            post(&["c"], &[]),
            post(&["d", "e", "f"], &[]),
        ];
        let agg = aggregate(&results, AggregationMode::Ranked { limit: None }, false);
        match agg {
            Aggregation::Ranked { hashtags, .. } => {
                let total: u64 = hashtags.iter().map(|e| e.count).sum();
                assert_eq!(total, 6);
            }
            _ => panic!("expected ranked aggregation"),
        }
    }

    #[test]
    fn ties_rank_by_first_seen_order() {
        let results = vec![post(&["z", "a"], &[]), post(&["m"], &[])];
        let agg = aggregate(&results, AggregationMode::Ranked { limit: None }, false);
        match agg {
            Aggregation::Ranked { hashtags, .. } => {
                assert_eq!(hashtags, vec![entry("z", 1), entry("a", 1), entry("m", 1)]);
            }
            _ => panic!("expected ranked aggregation"),
        }
    }

    #[test]
    fn ranked_truncates_to_limit_after_sorting() {
        let results = vec![
            post(&["a"], &[]),
            post(&["a", "b"], &[]),
            post(&["a", "b", "c"], &[]),
            post(&["d"], &[]),
        ];
        let agg = aggregate(&results, AggregationMode::Ranked { limit: Some(2) }, false);
        match agg {
            Aggregation::Ranked { hashtags, creators } => {
                assert_eq!(hashtags, vec![entry("a", 3), entry("b", 2)]);
                assert!(creators.is_none());
            }
            _ => panic!("expected ranked aggregation"),
        }
    }

    #[test]
    fn repeated_entity_within_one_post_counts_once() {
        let results = vec![post(&["a", "a", "a"], &[])];
        let agg = aggregate(&results, AggregationMode::Counts, false);
        match agg {
            Aggregation::Counts { hashtags } => {
                assert_eq!(hashtags.get("a"), Some(&1));
            }
            _ => panic!("expected counts aggregation"),
        }
    }

    #[test]
    fn empty_results_yield_empty_tables() {
        let agg = aggregate(&[], AggregationMode::Ranked { limit: Some(5) }, true);
        match agg {
            Aggregation::Ranked { hashtags, creators } => {
                assert!(hashtags.is_empty());
                assert!(creators.unwrap().is_empty());
            }
            _ => panic!("expected ranked aggregation"),
        }
    }
}
