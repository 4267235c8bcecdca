use rag_core::{
    FlowSnapshot, FocusSnapshot, LabeledText, MentionsSnapshot, SocialCounts, SourceReader,
};

/// In-memory `SourceReader` for tests and embedded use.
///
/// Every slot starts absent; `with_*` methods fill them.
#[derive(Debug, Clone, Default)]
pub struct MemSources {
    pub flow: Option<FlowSnapshot>,
    pub focus_sentiment: Option<FocusSnapshot>,
    pub mentions: Option<MentionsSnapshot>,
    pub general_sentiment: Option<Vec<LabeledText>>,
    pub news_sentiment: Option<Vec<LabeledText>>,
    pub social_cache: Option<Vec<SocialCounts>>,
}

impl MemSources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flow(mut self, flow: FlowSnapshot) -> Self {
        self.flow = Some(flow);
        self
    }

    pub fn with_focus_sentiment(mut self, focus: FocusSnapshot) -> Self {
        self.focus_sentiment = Some(focus);
        self
    }

    pub fn with_mentions(mut self, mentions: MentionsSnapshot) -> Self {
        self.mentions = Some(mentions);
        self
    }

    pub fn with_general_sentiment(mut self, rows: Vec<LabeledText>) -> Self {
        self.general_sentiment = Some(rows);
        self
    }

    pub fn with_news_sentiment(mut self, rows: Vec<LabeledText>) -> Self {
        self.news_sentiment = Some(rows);
        self
    }

    pub fn with_social_cache(mut self, rows: Vec<SocialCounts>) -> Self {
        self.social_cache = Some(rows);
        self
    }
}

impl SourceReader for MemSources {
    fn flow(&self) -> Option<FlowSnapshot> {
        self.flow.clone()
    }

    fn focus_sentiment(&self) -> Option<FocusSnapshot> {
        self.focus_sentiment.clone()
    }

    fn mentions(&self) -> Option<MentionsSnapshot> {
        self.mentions.clone()
    }

    fn general_sentiment(&self) -> Option<Vec<LabeledText>> {
        self.general_sentiment.clone()
    }

    fn news_sentiment(&self) -> Option<Vec<LabeledText>> {
        self.news_sentiment.clone()
    }

    fn social_cache(&self) -> Option<Vec<SocialCounts>> {
        self.social_cache.clone()
    }
}
