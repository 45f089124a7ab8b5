//! The closed set of tracked metrics and their per-metric configuration

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{constants::names, MetricConfig, MetricsError};

/// Identifier of one tracked metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricId {
    TotalActiveUsers,
    TotalEngagedUsers,
    CodeSuggestions,
    CodeAcceptances,
    CodeLinesSuggested,
    CodeLinesAccepted,
    Chats,
    ChatInsertions,
    ChatCopies,
    PrSummaries,
    TotalCodeReviews,
    TotalCodeReviewComments,
}

impl MetricId {
    /// Every metric, in snapshot order
    pub const ALL: [MetricId; 12] = [
        Self::TotalActiveUsers,
        Self::TotalEngagedUsers,
        Self::CodeSuggestions,
        Self::CodeAcceptances,
        Self::CodeLinesSuggested,
        Self::CodeLinesAccepted,
        Self::Chats,
        Self::ChatInsertions,
        Self::ChatCopies,
        Self::PrSummaries,
        Self::TotalCodeReviews,
        Self::TotalCodeReviewComments,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TotalActiveUsers => names::TOTAL_ACTIVE_USERS,
            Self::TotalEngagedUsers => names::TOTAL_ENGAGED_USERS,
            Self::CodeSuggestions => names::CODE_SUGGESTIONS,
            Self::CodeAcceptances => names::CODE_ACCEPTANCES,
            Self::CodeLinesSuggested => names::CODE_LINES_SUGGESTED,
            Self::CodeLinesAccepted => names::CODE_LINES_ACCEPTED,
            Self::Chats => names::CHATS,
            Self::ChatInsertions => names::CHAT_INSERTIONS,
            Self::ChatCopies => names::CHAT_COPIES,
            Self::PrSummaries => names::PR_SUMMARIES,
            Self::TotalCodeReviews => names::TOTAL_CODE_REVIEWS,
            Self::TotalCodeReviewComments => names::TOTAL_CODE_REVIEW_COMMENTS,
        }
    }
}

impl fmt::Display for MetricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One [`MetricConfig`] per tracked metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsConfig {
    pub total_active_users: MetricConfig,
    pub total_engaged_users: MetricConfig,
    pub code_suggestions: MetricConfig,
    pub code_acceptances: MetricConfig,
    pub code_lines_suggested: MetricConfig,
    pub code_lines_accepted: MetricConfig,
    pub chats: MetricConfig,
    pub chat_insertions: MetricConfig,
    pub chat_copies: MetricConfig,
    pub pr_summaries: MetricConfig,
    pub total_code_reviews: MetricConfig,
    pub total_code_review_comments: MetricConfig,
}

impl MetricsConfig {
    /// Apply the same configuration to every metric
    pub fn uniform(config: MetricConfig) -> Self {
        Self {
            total_active_users: config.clone(),
            total_engaged_users: config.clone(),
            code_suggestions: config.clone(),
            code_acceptances: config.clone(),
            code_lines_suggested: config.clone(),
            code_lines_accepted: config.clone(),
            chats: config.clone(),
            chat_insertions: config.clone(),
            chat_copies: config.clone(),
            pr_summaries: config.clone(),
            total_code_reviews: config.clone(),
            total_code_review_comments: config,
        }
    }

    pub fn get(&self, id: MetricId) -> &MetricConfig {
        match id {
            MetricId::TotalActiveUsers => &self.total_active_users,
            MetricId::TotalEngagedUsers => &self.total_engaged_users,
            MetricId::CodeSuggestions => &self.code_suggestions,
            MetricId::CodeAcceptances => &self.code_acceptances,
            MetricId::CodeLinesSuggested => &self.code_lines_suggested,
            MetricId::CodeLinesAccepted => &self.code_lines_accepted,
            MetricId::Chats => &self.chats,
            MetricId::ChatInsertions => &self.chat_insertions,
            MetricId::ChatCopies => &self.chat_copies,
            MetricId::PrSummaries => &self.pr_summaries,
            MetricId::TotalCodeReviews => &self.total_code_reviews,
            MetricId::TotalCodeReviewComments => &self.total_code_review_comments,
        }
    }

    pub fn get_mut(&mut self, id: MetricId) -> &mut MetricConfig {
        match id {
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
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (MetricId, &MetricConfig)> + '_ {
        MetricId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }

    /// Validate every metric, reporting the first offender
    pub fn validate(&self) -> Result<(), MetricsError> {
        self.iter().try_for_each(|(id, metric)| metric.validate(id))
    }
}
