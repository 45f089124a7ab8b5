//! Constants for metric series generation

/// Defaults applied when a metric leaves its optional trend parameters unset
pub mod defaults {
    /// Per-tick growth used by `grow` and `decline` when no rate is configured
    pub const GROWTH_RATE: f64 = 0.01;

    /// Noise amplitude used by `stable` when no volatility is configured
    pub const VOLATILITY: f64 = 0.1;
}

/// Bounds on generated counts
pub mod limits {
    /// Largest count `f64` represents exactly (2^53); ranges must stay at or below it
    pub const MAX_COUNT: f64 = 9_007_199_254_740_992.0;
}

/// Wire names of the tracked metrics, in snapshot order
pub mod names {
    pub const TOTAL_ACTIVE_USERS: &str = "total_active_users";
    pub const TOTAL_ENGAGED_USERS: &str = "total_engaged_users";
    pub const CODE_SUGGESTIONS: &str = "code_suggestions";
    pub const CODE_ACCEPTANCES: &str = "code_acceptances";
    pub const CODE_LINES_SUGGESTED: &str = "code_lines_suggested";
    pub const CODE_LINES_ACCEPTED: &str = "code_lines_accepted";
    pub const CHATS: &str = "chats";
    pub const CHAT_INSERTIONS: &str = "chat_insertions";
    pub const CHAT_COPIES: &str = "chat_copies";
    pub const PR_SUMMARIES: &str = "pr_summaries";
    pub const TOTAL_CODE_REVIEWS: &str = "total_code_reviews";
    pub const TOTAL_CODE_REVIEW_COMMENTS: &str = "total_code_review_comments";
}
