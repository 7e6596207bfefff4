//! Shared types for the relay library.

/// A caller-selectable model tier for summarization.
///
/// The tier is a stable label in the public API; which concrete model
/// identifier it maps to is decided by the server configuration. Parsing is
/// strict: anything other than the two known labels is rejected so that no
/// unknown identifier ever reaches the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTier {
    Fast,
    Accurate,
}

impl ModelTier {
    /// Parses a tier label as it appears in request payloads.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "fast" => Some(Self::Fast),
            "accurate" => Some(Self::Accurate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Accurate => "accurate",
        }
    }
}

/// Generation options carried on a chat-completion request.
#[derive(Debug, Clone, Copy)]
pub struct ChatOptions {
    pub max_tokens: u32,
    pub temperature: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_tier_parses_known_labels() {
        assert_eq!(ModelTier::parse("fast"), Some(ModelTier::Fast));
        assert_eq!(ModelTier::parse("accurate"), Some(ModelTier::Accurate));
    }

    #[test]
    fn test_model_tier_rejects_unknown_labels() {
        assert_eq!(ModelTier::parse("bogus"), None);
        assert_eq!(ModelTier::parse(""), None);
        // Labels are case-sensitive, like the rest of the payload contract.
        assert_eq!(ModelTier::parse("Fast"), None);
    }

    #[test]
    fn test_model_tier_round_trips_through_as_str() {
        for tier in [ModelTier::Fast, ModelTier::Accurate] {
            assert_eq!(ModelTier::parse(tier.as_str()), Some(tier));
        }
    }
}
