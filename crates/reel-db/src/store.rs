//! Rotation store traits over the libSQL service.

use async_trait::async_trait;
use reel_core::catalog::SubjectUsage;
use reel_core::entities::{NewUsageRecord, UsageRecord};
use reel_rotation::{CurriculumStore, StoreError, UsageLedger};

use crate::service::ReelService;

#[async_trait]
impl CurriculumStore for ReelService {
    async fn subjects_with_topic_usage(
        &self,
        class_id: &str,
    ) -> Result<Vec<SubjectUsage>, StoreError> {
        Ok(self.subject_catalog(class_id).await?)
    }
}

#[async_trait]
impl UsageLedger for ReelService {
    async fn append_usage(&self, record: &NewUsageRecord) -> Result<UsageRecord, StoreError> {
        Ok(self.append_usage_record(record).await?)
    }

    async fn recent_usage(
        &self,
        class_id: &str,
        limit: u32,
    ) -> Result<Vec<UsageRecord>, StoreError> {
        Ok(self.list_usage(class_id, limit).await?)
    }
}
