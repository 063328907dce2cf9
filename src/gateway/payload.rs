//! WhatsApp Cloud API wire format for outbound messages

use serde::Serialize;

use crate::reply::{ListSection, Reply};

const MESSAGING_PRODUCT: &str = "whatsapp";

/// Body of `POST /{phone-number-id}/messages`
#[derive(Debug, Serialize)]
pub struct MessagePayload<'a> {
    messaging_product: &'static str,
    to: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<TextBody<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    interactive: Option<Interactive<'a>>,
}

#[derive(Debug, Serialize)]
struct TextBody<'a> {
    body: &'a str,
}

#[derive(Debug, Serialize)]
struct InteractiveBody<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Interactive<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    body: InteractiveBody<'a>,
    action: Action<'a>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Action<'a> {
    Buttons {
        buttons: Vec<WireButton<'a>>,
    },
    List {
        button: &'a str,
        sections: &'a [ListSection],
    },
}

#[derive(Debug, Serialize)]
struct WireButton<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    reply: ButtonReply<'a>,
}

#[derive(Debug, Serialize)]
struct ButtonReply<'a> {
    id: &'a str,
    title: &'a str,
}

impl<'a> MessagePayload<'a> {
    pub fn new(to: &'a str, reply: &'a Reply) -> Self {
        match reply {
            Reply::Text { body } => Self {
                messaging_product: MESSAGING_PRODUCT,
                to,
                kind: "text",
                text: Some(TextBody { body }),
                interactive: None,
            },
            Reply::Buttons(prompt) => Self::interactive(
                to,
                Interactive {
                    kind: "button",
                    body: InteractiveBody { text: &prompt.body },
                    action: Action::Buttons {
                        buttons: prompt
                            .buttons
                            .iter()
                            .map(|b| WireButton {
                                kind: "reply",
                                reply: ButtonReply {
                                    id: &b.id,
                                    title: &b.title,
                                },
                            })
                            .collect(),
                    },
                },
            ),
            Reply::List(prompt) => Self::interactive(
                to,
                Interactive {
                    kind: "list",
                    body: InteractiveBody { text: &prompt.body },
                    action: Action::List {
                        button: &prompt.button_label,
                        sections: &prompt.sections,
                    },
                },
            ),
        }
    }

    fn interactive(to: &'a str, interactive: Interactive<'a>) -> Self {
        Self {
            messaging_product: MESSAGING_PRODUCT,
            to,
            kind: "interactive",
            text: None,
            interactive: Some(interactive),
        }
    }
}
