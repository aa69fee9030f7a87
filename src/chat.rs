//! Simulated chat assistant.
//!
//! No language model is consulted: the reply is a canned sentence picked by
//! case-insensitive keyword matching over the page's AI-enabled blocks, and
//! the "thinking" pause is a randomized timer.

use crate::blocks::BlockContent;
use crate::model::Component;
use chrono::Local;
use rand::Rng;
use std::ops::Range;
use std::time::Duration;
use tokio::time::sleep;

/// Greeting appended to every new session
pub const GREETING: &str =
    "Hello! I'm here to help you learn about our site. What would you like to know?";

const REPLY_PREFIX: &str = "Thanks for your question! ";

const NO_MATCH_FALLBACK: &str = "I have information about our services, features, and how to \
     get in touch. What specific area interests you?";

const NO_AI_FALLBACK: &str = "I'm here to help! While I don't have specific AI-enabled \
     components set up yet, I can still assist you in exploring the site.";

/// One entry in the append-only message log
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub text: String,
    pub from_user: bool,
    /// Wall-clock arrival time, formatted HH:MM
    pub timestamp: String,
}

/// A chat transcript against the active page's block list
#[derive(Debug)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    thinking_ms: Range<u64>,
}

impl ChatSession {
    /// Start a session with the assistant greeting already in the log
    pub fn new() -> Self {
        Self {
            messages: vec![assistant_message(GREETING.to_string())],
            thinking_ms: 1000..2500,
        }
    }

    /// Disable the simulated thinking pause (used by tests and `--no-delay`)
    pub fn without_thinking_delay(mut self) -> Self {
        self.thinking_ms = 0..1;
        self
    }

    /// Override the thinking pause range, in milliseconds
    pub fn with_thinking_delay(mut self, range: Range<u64>) -> Self {
        self.thinking_ms = range;
        self
    }

    /// The transcript so far, ordered by arrival
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Send user input and wait for the simulated reply. Both messages are
    /// appended to the log; the reply is returned.
    pub async fn send(&mut self, input: &str, blocks: &[Component]) -> ChatMessage {
        self.messages.push(ChatMessage {
            text: input.to_string(),
            from_user: true,
            timestamp: timestamp(),
        });

        let pause = rand::thread_rng().gen_range(self.thinking_ms.clone());
        if pause > 0 {
            sleep(Duration::from_millis(pause)).await;
        }

        let reply = assistant_message(compose_reply(input, blocks));
        ::log::debug!("Chat reply after {}ms pause: {}", pause, reply.text);
        self.messages.push(reply.clone());
        reply
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the canned reply for the given input and block list.
///
/// The first AI-enabled block (in list order) with a keyword that matches the
/// input case-insensitively wins; its block type decides the template.
pub fn compose_reply(input: &str, blocks: &[Component]) -> String {
    let mut reply = String::from(REPLY_PREFIX);

    let enabled: Vec<&Component> = blocks.iter().filter(|c| c.ai_enabled).collect();
    if enabled.is_empty() {
        reply.push_str(NO_AI_FALLBACK);
        return reply;
    }

    let needle = input.to_lowercase();
    let matched = enabled.iter().find(|c| {
        c.ai_trigger_rules
            .keywords
            .iter()
            .any(|keyword| needle.contains(&keyword.to_lowercase()))
    });

    match matched {
        Some(component) => match &component.content {
            BlockContent::Hero(c) => {
                reply.push_str("Let me tell you about our main offering. ");
                reply.push_str(&c.description);
            }
            BlockContent::Features(c) => {
                reply.push_str("Here are our key features: ");
                let titles: Vec<&str> = c.features.iter().map(|f| f.title.as_str()).collect();
                reply.push_str(&titles.join(", "));
            }
            BlockContent::Contact(_) => {
                reply.push_str(
                    "I'd love to help you get in touch! You can reach us through our contact form.",
                );
            }
            _ => reply.push_str("I can show you relevant information about that."),
        },
        None => reply.push_str(NO_MATCH_FALLBACK),
    }

    reply
}

fn assistant_message(text: String) -> ChatMessage {
    ChatMessage {
        text,
        from_user: false,
        timestamp: timestamp(),
    }
}

fn timestamp() -> String {
    Local::now().format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{BlockContent, BlockType};
    use crate::model::{AiTriggerRules, Component};

    fn features_block(keywords: &[&str], ai_enabled: bool) -> Component {
        Component {
            id: 1,
            page_id: 1,
            content: BlockContent::default_for(BlockType::Features),
            position: 1,
            ai_enabled,
            ai_trigger_rules: AiTriggerRules {
                show_when: String::new(),
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
                priority: 5,
            },
        }
    }

    #[test]
    fn keyword_match_yields_feature_titles() {
        let blocks = vec![features_block(&["pricing"], true)];
        let reply = compose_reply("what about pricing?", &blocks);
        assert!(reply.contains("Feature 1, Feature 2, Feature 3"), "{}", reply);
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        let blocks = vec![features_block(&["Pricing"], true)];
        let reply = compose_reply("Tell me about PRICING", &blocks);
        assert!(reply.contains("Here are our key features"), "{}", reply);
    }

    #[test]
    fn no_keyword_match_uses_generic_fallback() {
        let blocks = vec![features_block(&["pricing"], true)];
        let reply = compose_reply("hello", &blocks);
        assert!(reply.contains("What specific area interests you?"), "{}", reply);
    }

    #[test]
    fn no_ai_blocks_uses_other_fallback() {
        let reply = compose_reply("hello", &[]);
        assert!(reply.contains("don't have specific AI-enabled components"), "{}", reply);

        // Blocks present but none AI-enabled behave the same
        let blocks = vec![features_block(&["pricing"], false)];
        let reply = compose_reply("what about pricing?", &blocks);
        assert!(reply.contains("don't have specific AI-enabled components"), "{}", reply);
    }

    #[test]
    fn first_matching_block_in_list_order_wins() {
        let mut contact = features_block(&["help"], true);
        contact.id = 2;
        contact.content = BlockContent::default_for(BlockType::Contact);
        let features = features_block(&["help"], true);

        let reply = compose_reply("help me", &[features.clone(), contact.clone()]);
        assert!(reply.contains("key features"), "{}", reply);

        let reply = compose_reply("help me", &[contact, features]);
        assert!(reply.contains("get in touch"), "{}", reply);
    }

    #[tokio::test]
    async fn transcript_is_append_only_and_ordered() {
        let mut session = ChatSession::new().without_thinking_delay();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].text, GREETING);

        let reply = session.send("hello", &[]).await;
        let log = session.messages();
        assert_eq!(log.len(), 3);
        assert!(log[1].from_user);
        assert!(!log[2].from_user);

        // The returned reply is the message that went into the log
        assert_eq!(log[2], reply);
    }
}
