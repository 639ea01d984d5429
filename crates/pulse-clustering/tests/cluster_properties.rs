//! Property tests for the clustering engine's partition guarantees.

use std::collections::HashSet;

use chrono::Utc;
use proptest::prelude::*;

use pulse_clustering::ClusteringEngine;
use pulse_core::models::FeedbackItem;

fn item(text: &str) -> FeedbackItem {
    FeedbackItem {
        id: uuid::Uuid::new_v4().to_string(),
        text: text.to_string(),
        category: "General".to_string(),
        selector: None,
        role: "Anonymous".to_string(),
        session: "Default Session".to_string(),
        submitted_at: Utc::now(),
        processed: false,
    }
}

/// Feedback-ish text: a few words drawn from a small topical vocabulary,
/// so batches contain both near-duplicates and outliers.
fn arb_text() -> impl Strategy<Value = String> {
    let word = prop::sample::select(vec![
        "wifi", "network", "slow", "hostel", "food", "canteen", "stale", "broken", "projector",
        "classroom", "noisy", "library", "crowded", "water", "cooler",
    ]);
    prop::collection::vec(word, 2..6).prop_map(|words| words.join(" "))
}

fn arb_items() -> impl Strategy<Value = Vec<FeedbackItem>> {
    prop::collection::vec(arb_text(), 0..12)
        .prop_map(|texts| texts.iter().map(|t| item(t)).collect())
}

proptest! {
    // Union of cluster members equals the input, with no duplicates.
    #[test]
    fn cluster_output_partitions_input(items in arb_items(), k in 0usize..5) {
        let engine = ClusteringEngine::default();
        let clusters = engine.cluster(&items, k);

        let mut seen: HashSet<&str> = HashSet::new();
        let mut total = 0usize;
        for cluster in &clusters {
            for member in &cluster.items {
                prop_assert!(seen.insert(member.id.as_str()), "item in two clusters");
                total += 1;
            }
        }
        prop_assert_eq!(total, items.len());

        let input_ids: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
        prop_assert_eq!(seen, input_ids);
    }

    // No cluster in the output is ever empty.
    #[test]
    fn no_empty_clusters(items in arb_items(), k in 0usize..5) {
        let engine = ClusteringEngine::default();
        for cluster in engine.cluster(&items, k) {
            prop_assert!(!cluster.items.is_empty());
        }
    }

    // Repeated calls over identical input produce identical groupings.
    #[test]
    fn deterministic_assignment(items in arb_items(), k in 1usize..4) {
        let engine = ClusteringEngine::default();
        let a = engine.cluster(&items, k);
        let b = engine.cluster(&items, k);
        prop_assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            let ids_x: Vec<&str> = x.items.iter().map(|i| i.id.as_str()).collect();
            let ids_y: Vec<&str> = y.items.iter().map(|i| i.id.as_str()).collect();
            prop_assert_eq!(ids_x, ids_y);
            prop_assert_eq!(&x.theme, &y.theme);
        }
    }

    // Fewer items than target_k collapses to exactly one cluster.
    #[test]
    fn under_k_collapses_to_one(k in 2usize..6) {
        let engine = ClusteringEngine::default();
        let items: Vec<FeedbackItem> = (0..k - 1).map(|i| item(&format!("topic {i}"))).collect();
        let clusters = engine.cluster(&items, k);
        prop_assert_eq!(clusters.len(), 1);
        prop_assert_eq!(clusters[0].items.len(), items.len());
    }
}
