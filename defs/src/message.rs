use serde::{Deserialize, Serialize};

/// Slack incoming-webhook payload using Block Kit layout blocks.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct SlackMessage {
    /// Plain fallback shown in push notifications.
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_ts: Option<String>,
    pub blocks: Vec<Block>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Header { text: TextObject },
    Section { fields: Vec<TextObject> },
    Context { elements: Vec<TextObject> },
    Actions { elements: Vec<ActionElement> },
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    PlainText {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        emoji: Option<bool>,
    },
    Mrkdwn {
        text: String,
    },
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionElement {
    Button {
        text: TextObject,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<String>,
        url: String,
        action_id: String,
    },
}

impl TextObject {
    pub fn plain_text(text: impl Into<String>) -> Self {
        TextObject::PlainText {
            text: text.into(),
            emoji: Some(true),
        }
    }

    pub fn mrkdwn(text: impl Into<String>) -> Self {
        TextObject::Mrkdwn { text: text.into() }
    }

    pub fn text(&self) -> &str {
        match self {
            TextObject::PlainText { text, .. } => text,
            TextObject::Mrkdwn { text } => text,
        }
    }
}

impl SlackMessage {
    /// Every text fragment in the message, in block order.
    pub fn texts(&self) -> Vec<&str> {
        let mut texts = vec![self.text.as_str()];
        for block in &self.blocks {
            match block {
                Block::Header { text } => texts.push(text.text()),
                Block::Section { fields } => texts.extend(fields.iter().map(TextObject::text)),
                Block::Context { elements } => {
                    texts.extend(elements.iter().map(TextObject::text))
                }
                Block::Actions { elements } => {
                    for element in elements {
                        let ActionElement::Button { text, .. } = element;
                        texts.push(text.text());
                    }
                }
            }
        }
        texts
    }

    pub fn header(&self) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::Header { text } => Some(text.text()),
            _ => None,
        })
    }

    pub fn button_url(&self) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::Actions { elements } => elements.iter().find_map(|element| {
                let ActionElement::Button { url, .. } = element;
                Some(url.as_str())
            }),
            _ => None,
        })
    }
}
