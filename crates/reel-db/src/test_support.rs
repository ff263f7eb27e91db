//! Shared test utilities for reel-db unit tests.

use crate::ReelDb;
use crate::service::ReelService;

/// Create an in-memory `ReelService`.
pub async fn test_service() -> ReelService {
    let db = ReelDb::open_local(":memory:").await.unwrap();
    ReelService::from_db(db)
}

/// Create a class with subjects and topics; returns `(class_id, [(subject_id, [topic_id])])`.
pub async fn seed_class(
    svc: &ReelService,
    class: &str,
    subjects: &[(&str, &[&str])],
) -> (String, Vec<(String, Vec<String>)>) {
    let class = svc.create_class(class).await.unwrap();
    let mut out = Vec::new();
    for (subject, topics) in subjects {
        let subject = svc.create_subject(&class.id, subject).await.unwrap();
        let mut topic_ids = Vec::new();
        for topic in *topics {
            topic_ids.push(svc.create_topic(&subject.id, topic).await.unwrap().id);
        }
        out.push((subject.id, topic_ids));
    }
    (class.id, out)
}
