//! Classification of raw event kind tags.

/// Recognized upstream event kinds.
///
/// Raw events carry an open string vocabulary; this enum is the closed
/// subset the translator understands. [`from_tag`](Self::from_tag) returns
/// `None` for anything else, and callers drop those events rather than
/// failing the run, so upstream vocabularies can grow without breaking the
/// bridge.
///
/// Several members are accepted but deliberately produce no protocol event
/// (model and retriever lifecycle, chain stream chunks). Keeping them in the
/// enum means they classify cleanly instead of being logged as unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawEventKind {
    // Tool events
    ToolStart,
    ToolEnd,

    // Chat model events
    ChatModelStart,
    ChatModelStream,
    ChatModelEnd,

    // Chain execution events
    ChainStart,
    ChainStream,
    ChainEnd,

    // Node execution events
    NodeStart,
    NodeEnd,

    // Custom events
    CustomEvent,

    // LLM events
    LlmStart,
    LlmStream,
    LlmEnd,

    // Retriever events
    RetrieverStart,
    RetrieverEnd,
}

impl RawEventKind {
    /// Classify a raw event tag, or `None` when the tag is unrecognized.
    ///
    /// Classification depends only on the tag string, never on the payload.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let kind = match tag {
            "on_tool_start" => Self::ToolStart,
            "on_tool_end" => Self::ToolEnd,
            "on_chat_model_start" => Self::ChatModelStart,
            "on_chat_model_stream" => Self::ChatModelStream,
            "on_chat_model_end" => Self::ChatModelEnd,
            "on_chain_start" => Self::ChainStart,
            "on_chain_stream" => Self::ChainStream,
            "on_chain_end" => Self::ChainEnd,
            "on_node_start" => Self::NodeStart,
            "on_node_end" => Self::NodeEnd,
            "on_custom_event" => Self::CustomEvent,
            "on_llm_start" => Self::LlmStart,
            "on_llm_stream" => Self::LlmStream,
            "on_llm_end" => Self::LlmEnd,
            "on_retriever_start" => Self::RetrieverStart,
            "on_retriever_end" => Self::RetrieverEnd,
            _ => return None,
        };
        Some(kind)
    }

    /// The wire tag for this kind.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::ToolStart => "on_tool_start",
            Self::ToolEnd => "on_tool_end",
            Self::ChatModelStart => "on_chat_model_start",
            Self::ChatModelStream => "on_chat_model_stream",
            Self::ChatModelEnd => "on_chat_model_end",
            Self::ChainStart => "on_chain_start",
            Self::ChainStream => "on_chain_stream",
            Self::ChainEnd => "on_chain_end",
            Self::NodeStart => "on_node_start",
            Self::NodeEnd => "on_node_end",
            Self::CustomEvent => "on_custom_event",
            Self::LlmStart => "on_llm_start",
            Self::LlmStream => "on_llm_stream",
            Self::LlmEnd => "on_llm_end",
            Self::RetrieverStart => "on_retriever_start",
            Self::RetrieverEnd => "on_retriever_end",
        }
    }
}
