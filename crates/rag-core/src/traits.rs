use crate::types::{FlowSnapshot, FocusSnapshot, LabeledText, MentionsSnapshot, SocialCounts};

/// Supplier of the upstream pipelines' artifacts.
///
/// Every method returns `None` for a missing, unreadable, or malformed
/// artifact; readers never surface those conditions as errors. The index
/// build treats `None` as "that pipeline has not produced output yet" and
/// carries on with whatever else is available.
pub trait SourceReader: Send + Sync {
    fn flow(&self) -> Option<FlowSnapshot>;
    fn focus_sentiment(&self) -> Option<FocusSnapshot>;
    fn mentions(&self) -> Option<MentionsSnapshot>;
    fn general_sentiment(&self) -> Option<Vec<LabeledText>>;
    fn news_sentiment(&self) -> Option<Vec<LabeledText>>;
    fn social_cache(&self) -> Option<Vec<SocialCounts>>;
}
