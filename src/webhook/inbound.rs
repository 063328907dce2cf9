//! Inbound webhook delivery format.
//!
//! Only the fields the bot reads are modelled; everything else in a delivery
//! (contacts, metadata, status callbacks) is ignored by serde.

use serde::Deserialize;

use crate::bot::{InboundEvent, InboundKind};

#[derive(Debug, Default, Deserialize)]
pub struct WebhookDelivery {
    #[serde(default)]
    pub entry: Vec<Entry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub changes: Vec<Change>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Change {
    #[serde(default)]
    pub value: ChangeValue,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChangeValue {
    #[serde(default)]
    pub messages: Vec<InboundMessage>,
}

#[derive(Debug, Deserialize)]
pub struct InboundMessage {
    pub from: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub text: Option<TextContent>,
    pub interactive: Option<InteractiveContent>,
}

#[derive(Debug, Deserialize)]
pub struct TextContent {
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Deserialize)]
pub struct InteractiveContent {
    pub button_reply: Option<SelectedOption>,
    pub list_reply: Option<SelectedOption>,
}

#[derive(Debug, Deserialize)]
pub struct SelectedOption {
    #[serde(default)]
    pub id: String,
    pub title: Option<String>,
}

impl WebhookDelivery {
    /// The first message of the first change of the first entry, if any.
    /// A delivery carries at most one message the bot answers.
    pub fn first_event(&self) -> Option<InboundEvent> {
        self.entry
            .first()?
            .changes
            .first()?
            .value
            .messages
            .first()
            .map(InboundMessage::to_event)
    }
}

impl InboundMessage {
    pub fn to_event(&self) -> InboundEvent {
        let kind = match self.kind.as_str() {
            "text" => InboundKind::Text(
                self.text
                    .as_ref()
                    .map(|t| t.body.clone())
                    .unwrap_or_default(),
            ),
            "interactive" => InboundKind::Selection(self.selected_id()),
            other => InboundKind::Unsupported(other.to_string()),
        };

        InboundEvent {
            sender: self.from.clone(),
            kind,
        }
    }

    /// Button reply id, else list reply id; blank ids count as absent
    fn selected_id(&self) -> Option<String> {
        let interactive = self.interactive.as_ref()?;
        [&interactive.button_reply, &interactive.list_reply]
            .into_iter()
            .flatten()
            .map(|option| option.id.as_str())
            .find(|id| !id.is_empty())
            .map(str::to_string)
    }
}
