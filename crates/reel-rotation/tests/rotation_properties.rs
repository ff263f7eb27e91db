//! Scheduler behaviour against the in-memory store.
//!
//! Covers:
//! - Usage counts only grow as usage is recorded
//! - Least-used selection, tie-break stability, subject scope
//! - Fan-out cap and floor
//! - Empty-subject failure
//! - History order, bound, and dropped references
//! - Coverage, including fail-closed on store errors
//! - Best-effort recording

use std::sync::Arc;

use pretty_assertions::assert_eq;
use reel_config::RotationConfig;
use reel_rotation::{MemoryStore, RotationError, TopicRotation};
use rstest::rstest;

struct Fixture {
    rotation: TopicRotation<MemoryStore>,
    class_id: String,
}

impl Fixture {
    async fn new() -> Self {
        Self::with_config(RotationConfig::default()).await
    }

    async fn with_config(config: RotationConfig) -> Self {
        let store = MemoryStore::new();
        let class_id = store.add_class("Class 11").await;
        Self {
            rotation: TopicRotation::new(store, config),
            class_id,
        }
    }

    fn store(&self) -> &MemoryStore {
        self.rotation.store()
    }

    async fn subject(&self, name: &str, topics: &[&str]) -> (String, Vec<String>) {
        let subject_id = self.store().add_subject(&self.class_id, name).await;
        let mut topic_ids = Vec::new();
        for topic in topics {
            topic_ids.push(self.store().add_topic(&subject_id, topic).await);
        }
        (subject_id, topic_ids)
    }

    async fn use_topic(&self, subject_id: &str, topic_id: &str, times: usize) {
        for _ in 0..times {
            self.rotation
                .record_usage(&self.class_id, subject_id, topic_id, None)
                .await;
        }
    }

    async fn picked_topics(&self, subjects_per_run: usize) -> Vec<String> {
        self.rotation
            .select_topics(&self.class_id, subjects_per_run)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.topic_name)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Usage statistics
// ---------------------------------------------------------------------------

#[tokio::test]
async fn usage_counts_never_decrease() {
    let fx = Fixture::new().await;
    let (phy, topics) = fx.subject("Physics", &["Motion", "Gravitation"]).await;

    let mut previous = 0;
    for _ in 0..5 {
        fx.use_topic(&phy, &topics[0], 1).await;
        let stats = fx.rotation.topic_usage_stats(&fx.class_id).await.unwrap();
        let motion = stats.iter().find(|s| s.topic_id == topics[0]).unwrap();
        assert!(motion.usage_count > previous);
        previous = motion.usage_count;
    }
    assert_eq!(previous, 5);
}

#[tokio::test]
async fn stats_carry_denormalized_identity_and_last_use() {
    let fx = Fixture::new().await;
    let (phy, topics) = fx.subject("Physics", &["Motion", "Gravitation"]).await;
    fx.use_topic(&phy, &topics[1], 2).await;

    let stats = fx.rotation.topic_usage_stats(&fx.class_id).await.unwrap();
    assert_eq!(stats.len(), 2);

    let motion = &stats[0];
    assert_eq!(motion.topic_name, "Motion");
    assert_eq!(motion.subject_name, "Physics");
    assert_eq!(motion.class_name, "Class 11");
    assert_eq!(motion.class_id, fx.class_id);
    assert_eq!(motion.usage_count, 0);
    assert!(motion.last_used_at.is_none());

    let gravitation = &stats[1];
    assert_eq!(gravitation.usage_count, 2);
    assert!(gravitation.last_used_at.is_some());
}

#[tokio::test]
async fn stats_empty_for_class_without_subjects() {
    let fx = Fixture::new().await;
    let own = fx.rotation.topic_usage_stats(&fx.class_id).await.unwrap();
    assert!(own.is_empty());
    let unknown = fx.rotation.topic_usage_stats("cls-unknown").await.unwrap();
    assert!(unknown.is_empty());
}

#[tokio::test]
async fn stats_fail_loud_on_store_error() {
    let fx = Fixture::new().await;
    fx.subject("Physics", &["Motion"]).await;
    fx.store().set_fail_reads(true);

    let result = fx.rotation.topic_usage_stats(&fx.class_id).await;
    assert!(matches!(result, Err(RotationError::Retrieval(_))));
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

#[tokio::test]
async fn selects_least_used_topic() {
    let fx = Fixture::new().await;
    let (phy, topics) = fx.subject("Physics", &["T1", "T2", "T3"]).await;
    fx.use_topic(&phy, &topics[0], 5).await;
    fx.use_topic(&phy, &topics[2], 3).await;

    assert_eq!(fx.picked_topics(4).await, vec!["T2"]);
}

#[tokio::test]
async fn tie_break_is_stable_across_calls() {
    let fx = Fixture::new().await;
    let (phy, topics) = fx.subject("Physics", &["Motion", "Gravitation", "Optics"]).await;
    fx.use_topic(&phy, &topics[0], 1).await;

    let first = fx.picked_topics(1).await;
    for _ in 0..10 {
        assert_eq!(fx.picked_topics(1).await, first);
    }
    assert_eq!(first, vec!["Gravitation"]);
}

#[tokio::test]
async fn selection_stays_within_subject() {
    let fx = Fixture::new().await;
    let (phy, phy_topics) = fx.subject("Physics", &["Motion", "Gravitation"]).await;
    let (chem, chem_topics) = fx.subject("Chemistry", &["Atoms", "Bonds"]).await;
    fx.use_topic(&phy, &phy_topics[0], 3).await;
    fx.use_topic(&chem, &chem_topics[1], 1).await;

    let picked = fx.rotation.select_topics(&fx.class_id, 4).await.unwrap();
    assert_eq!(picked.len(), 2);
    assert_eq!(picked[0].subject_id, phy);
    assert!(phy_topics.contains(&picked[0].topic_id));
    assert_eq!(picked[1].subject_id, chem);
    assert!(chem_topics.contains(&picked[1].topic_id));
}

#[rstest]
#[case::cap(6, 4, 4)]
#[case::floor(2, 4, 2)]
#[case::exact(4, 4, 4)]
#[case::none_requested(3, 0, 0)]
#[tokio::test]
async fn fan_out_follows_catalog_order(
    #[case] subject_count: usize,
    #[case] subjects_per_run: usize,
    #[case] expected: usize,
) {
    let fx = Fixture::new().await;
    let mut subject_ids = Vec::new();
    for i in 0..subject_count {
        let (id, _) = fx.subject(&format!("Subject {i}"), &["Intro"]).await;
        subject_ids.push(id);
    }

    let picked = fx
        .rotation
        .select_topics(&fx.class_id, subjects_per_run)
        .await
        .unwrap();
    let picked_subjects: Vec<String> = picked.into_iter().map(|s| s.subject_id).collect();

    assert_eq!(picked_subjects, subject_ids[..expected].to_vec());
}

#[tokio::test]
async fn configured_fan_out_is_used_by_default_run() {
    let fx = Fixture::with_config(RotationConfig {
        subjects_per_run: 2,
        ..RotationConfig::default()
    })
    .await;
    for name in ["Physics", "Chemistry", "Biology"] {
        fx.subject(name, &["Intro"]).await;
    }

    let picked = fx
        .rotation
        .select_topics_for_run(&fx.class_id)
        .await
        .unwrap();
    let subjects: Vec<_> = picked.iter().map(|s| s.subject_name.as_str()).collect();
    assert_eq!(subjects, vec!["Physics", "Chemistry"]);
}

#[tokio::test]
async fn empty_subject_fails_whole_selection() {
    let fx = Fixture::new().await;
    fx.subject("Physics", &["Motion"]).await;
    let (bio, _) = fx.subject("Biology", &[]).await;
    fx.subject("Chemistry", &["Atoms"]).await;

    let err = fx
        .rotation
        .select_topics(&fx.class_id, 4)
        .await
        .unwrap_err();
    match err {
        RotationError::EmptySubject {
            subject_id,
            subject_name,
        } => {
            assert_eq!(subject_id, bio);
            assert_eq!(subject_name, "Biology");
        }
        other => panic!("expected EmptySubject, got {other:?}"),
    }
}

#[tokio::test]
async fn selection_never_records_usage() {
    let fx = Fixture::new().await;
    fx.subject("Physics", &["Motion"]).await;

    for _ in 0..3 {
        fx.rotation.select_topics(&fx.class_id, 4).await.unwrap();
    }
    assert_eq!(fx.store().usage_len().await, 0);
}

#[tokio::test]
async fn selection_fails_loud_on_store_error() {
    let fx = Fixture::new().await;
    fx.subject("Physics", &["Motion"]).await;
    fx.store().set_fail_reads(true);

    let result = fx.rotation.select_topics(&fx.class_id, 4).await;
    assert!(matches!(result, Err(RotationError::Retrieval(_))));
}

/// Class 11: Physics [Motion(0), Gravitation(2)], Chemistry [Atoms(1)].
#[tokio::test]
async fn sweep_progresses_toward_coverage() {
    let fx = Fixture::new().await;
    let (phy, phy_topics) = fx.subject("Physics", &["Motion", "Gravitation"]).await;
    let (chem, chem_topics) = fx.subject("Chemistry", &["Atoms"]).await;
    fx.use_topic(&phy, &phy_topics[1], 2).await;
    fx.use_topic(&chem, &chem_topics[0], 1).await;

    let picked = fx.rotation.select_topics(&fx.class_id, 4).await.unwrap();
    let pairs: Vec<_> = picked
        .iter()
        .map(|s| (s.subject_name.as_str(), s.topic_name.as_str()))
        .collect();
    assert_eq!(pairs, vec![("Physics", "Motion"), ("Chemistry", "Atoms")]);
    assert!(!fx.rotation.is_fully_covered(&fx.class_id).await);

    // Motion 1 <= Gravitation 2: still Motion
    fx.use_topic(&phy, &phy_topics[0], 1).await;
    assert_eq!(fx.picked_topics(1).await, vec!["Motion"]);
    assert!(fx.rotation.is_fully_covered(&fx.class_id).await);

    // Motion 2 == Gravitation 2: tie goes to Motion (catalog order)
    fx.use_topic(&phy, &phy_topics[0], 1).await;
    assert_eq!(fx.picked_topics(1).await, vec!["Motion"]);

    // Motion 3 > Gravitation 2: Gravitation takes over
    fx.use_topic(&phy, &phy_topics[0], 1).await;
    assert_eq!(fx.picked_topics(1).await, vec!["Gravitation"]);
}

// ---------------------------------------------------------------------------
// Recording
// ---------------------------------------------------------------------------

#[tokio::test]
async fn ledger_failure_is_swallowed() {
    let fx = Fixture::new().await;
    let (phy, topics) = fx.subject("Physics", &["Motion"]).await;
    fx.store().set_fail_writes(true);

    // Returns normally even though the append failed.
    fx.rotation
        .record_usage(&fx.class_id, &phy, &topics[0], Some("vid-00000001"))
        .await;

    assert_eq!(fx.store().usage_len().await, 0);
    let stats = fx.rotation.topic_usage_stats(&fx.class_id).await.unwrap();
    assert_eq!(stats[0].usage_count, 0);
}

#[tokio::test]
async fn concurrent_recording_loses_nothing() {
    let fx = Fixture::new().await;
    let (phy, topics) = fx.subject("Physics", &["Motion"]).await;
    let class_id = fx.class_id.clone();
    let rotation = Arc::new(fx.rotation);

    let mut handles = Vec::new();
    for i in 0..16 {
        let rotation = Arc::clone(&rotation);
        let (class_id, phy, topic) = (class_id.clone(), phy.clone(), topics[0].clone());
        handles.push(tokio::spawn(async move {
            let video = format!("vid-{i:08x}");
            rotation
                .record_usage(&class_id, &phy, &topic, Some(&video))
                .await;
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let stats = rotation.topic_usage_stats(&class_id).await.unwrap();
    assert_eq!(stats[0].usage_count, 16);
}

// ---------------------------------------------------------------------------
// History
// ---------------------------------------------------------------------------

#[tokio::test]
async fn history_is_newest_first_and_formatted() {
    let fx = Fixture::new().await;
    let (phy, phy_topics) = fx.subject("Physics", &["Motion", "Gravitation"]).await;
    let (chem, chem_topics) = fx.subject("Chemistry", &["Atoms"]).await;

    fx.use_topic(&phy, &phy_topics[0], 1).await;
    fx.use_topic(&chem, &chem_topics[0], 1).await;
    fx.use_topic(&phy, &phy_topics[1], 1).await;

    let history = fx.rotation.topics_history(&fx.class_id).await.unwrap();
    assert_eq!(
        history,
        vec!["Physics:Gravitation", "Chemistry:Atoms", "Physics:Motion"]
    );
}

#[tokio::test]
async fn history_is_bounded_by_config() {
    let fx = Fixture::with_config(RotationConfig {
        history_limit: 3,
        ..RotationConfig::default()
    })
    .await;
    let (phy, topics) = fx.subject("Physics", &["Motion", "Gravitation"]).await;
    fx.use_topic(&phy, &topics[0], 4).await;
    fx.use_topic(&phy, &topics[1], 1).await;

    let history = fx.rotation.topics_history(&fx.class_id).await.unwrap();
    assert_eq!(
        history,
        vec!["Physics:Gravitation", "Physics:Motion", "Physics:Motion"]
    );
}

#[tokio::test]
async fn history_drops_deleted_topics() {
    let fx = Fixture::new().await;
    let (phy, topics) = fx.subject("Physics", &["Motion", "Gravitation"]).await;
    fx.use_topic(&phy, &topics[0], 1).await;
    fx.use_topic(&phy, &topics[1], 1).await;

    fx.store().remove_topic(&topics[1]).await;

    let history = fx.rotation.topics_history(&fx.class_id).await.unwrap();
    assert_eq!(history, vec!["Physics:Motion"]);
}

#[tokio::test]
async fn history_fails_loud_on_store_error() {
    let fx = Fixture::new().await;
    fx.store().set_fail_reads(true);
    assert!(fx.rotation.topics_history(&fx.class_id).await.is_err());
}

// ---------------------------------------------------------------------------
// Coverage
// ---------------------------------------------------------------------------

#[tokio::test]
async fn coverage_requires_every_topic() {
    let fx = Fixture::new().await;
    let (phy, phy_topics) = fx.subject("Physics", &["Motion", "Gravitation"]).await;
    let (chem, chem_topics) = fx.subject("Chemistry", &["Atoms"]).await;

    assert!(!fx.rotation.is_fully_covered(&fx.class_id).await);

    fx.use_topic(&phy, &phy_topics[0], 3).await;
    fx.use_topic(&chem, &chem_topics[0], 1).await;
    assert!(!fx.rotation.is_fully_covered(&fx.class_id).await);

    fx.use_topic(&phy, &phy_topics[1], 1).await;
    assert!(fx.rotation.is_fully_covered(&fx.class_id).await);
}

#[tokio::test]
async fn coverage_fails_closed() {
    let fx = Fixture::new().await;
    let (phy, topics) = fx.subject("Physics", &["Motion"]).await;
    fx.use_topic(&phy, &topics[0], 1).await;
    assert!(fx.rotation.is_fully_covered(&fx.class_id).await);

    fx.store().set_fail_reads(true);
    assert!(!fx.rotation.is_fully_covered(&fx.class_id).await);
}

#[tokio::test]
async fn class_without_topics_is_not_covered() {
    let fx = Fixture::new().await;
    assert!(!fx.rotation.is_fully_covered(&fx.class_id).await);
}
