//! One simulated day of usage metrics

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::MetricId;
use crate::domain::mock_config::{MockConfig, ModelDescriptor};

/// Generated values for a single day plus the static dimension lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySnapshot {
    /// Calendar date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    pub total_active_users: u64,
    pub total_engaged_users: u64,
    pub code_suggestions: u64,
    pub code_acceptances: u64,
    pub code_lines_suggested: u64,
    pub code_lines_accepted: u64,
    pub chats: u64,
    pub chat_insertions: u64,
    pub chat_copies: u64,
    pub pr_summaries: u64,
    pub total_code_reviews: u64,
    pub total_code_review_comments: u64,
    pub models: Vec<ModelDescriptor>,
    pub languages: Vec<String>,
    pub editors: Vec<String>,
    pub repositories: Vec<String>,
}

impl DailySnapshot {
    /// Snapshot for `date` with every metric at zero and dimensions copied from `config`
    pub fn blank(date: NaiveDate, config: &MockConfig) -> Self {
        Self {
            date,
            total_active_users: 0,
            total_engaged_users: 0,
            code_suggestions: 0,
            code_acceptances: 0,
            code_lines_suggested: 0,
            code_lines_accepted: 0,
            chats: 0,
            chat_insertions: 0,
            chat_copies: 0,
            pr_summaries: 0,
            total_code_reviews: 0,
            total_code_review_comments: 0,
            models: config.models.clone(),
            languages: config.languages.clone(),
            editors: config.editors.clone(),
            repositories: config.repositories.clone(),
        }
    }

    pub fn get(&self, id: MetricId) -> u64 {
        match id {
            MetricId::TotalActiveUsers => self.total_active_users,
            MetricId::TotalEngagedUsers => self.total_engaged_users,
            MetricId::CodeSuggestions => self.code_suggestions,
            MetricId::CodeAcceptances => self.code_acceptances,
            MetricId::CodeLinesSuggested => self.code_lines_suggested,
            MetricId::CodeLinesAccepted => self.code_lines_accepted,
            MetricId::Chats => self.chats,
            MetricId::ChatInsertions => self.chat_insertions,
            MetricId::ChatCopies => self.chat_copies,
            MetricId::PrSummaries => self.pr_summaries,
            MetricId::TotalCodeReviews => self.total_code_reviews,
            MetricId::TotalCodeReviewComments => self.total_code_review_comments,
        }
    }

    pub fn set(&mut self, id: MetricId, value: u64) {
        let slot = match id {
            MetricId::TotalActiveUsers => &mut self.total_active_users,
            MetricId::TotalEngagedUsers => &mut self.total_engaged_users,
            MetricId::CodeSuggestions => &mut self.code_suggestions,
            MetricId::CodeAcceptances => &mut self.code_acceptances,
            MetricId::CodeLinesSuggested => &mut self.code_lines_suggested,
            MetricId::CodeLinesAccepted => &mut self.code_lines_accepted,
            MetricId::Chats => &mut self.chats,
            MetricId::ChatInsertions => &mut self.chat_insertions,
            MetricId::ChatCopies => &mut self.chat_copies,
            MetricId::PrSummaries => &mut self.pr_summaries,
            MetricId::TotalCodeReviews => &mut self.total_code_reviews,
            MetricId::TotalCodeReviewComments => &mut self.total_code_review_comments,
        };
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_data;

    #[test]
    fn test_set_and_get_address_the_same_field() {
        let config = test_data::example_mock_config();
        let mut snapshot = DailySnapshot::blank(config.start_date, &config);

        for (index, id) in MetricId::ALL.into_iter().enumerate() {
            snapshot.set(id, index as u64 * 10);
        }
        for (index, id) in MetricId::ALL.into_iter().enumerate() {
            assert_eq!(snapshot.get(id), index as u64 * 10);
        }
        assert_eq!(snapshot.chats, 60);
    }

    #[test]
    fn test_serialized_shape() {
        let config = test_data::example_mock_config();
        let mut snapshot = DailySnapshot::blank(config.start_date, &config);
        snapshot.set(MetricId::TotalActiveUsers, 24);

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["date"], "2024-06-24");
        assert_eq!(value["total_active_users"], 24);
        assert_eq!(value["languages"][0], "python");
        assert_eq!(value["models"][1]["is_custom_model"], true);
        assert_eq!(value["models"][0]["custom_model_training_date"], serde_json::Value::Null);
    }
}
