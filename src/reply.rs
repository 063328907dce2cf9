//! Outbound message model.
//!
//! A `Reply` is what the bot wants the user to see; the gateway turns it into
//! the platform's wire format. Builders clamp every field to the platform's
//! length limits so a long catalog entry degrades to a truncated title
//! instead of a rejected send.

use serde::Serialize;

pub const MAX_BUTTONS: usize = 3;
pub const MAX_BUTTON_TITLE_CHARS: usize = 20;
pub const MAX_LIST_BUTTON_CHARS: usize = 20;
pub const MAX_ROW_TITLE_CHARS: usize = 24;
pub const MAX_ROW_DESCRIPTION_CHARS: usize = 72;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reply {
    Text { body: String },
    Buttons(ButtonPrompt),
    List(ListPrompt),
}

impl Reply {
    pub fn text(body: impl Into<String>) -> Self {
        Reply::Text { body: body.into() }
    }

    /// Short label used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Reply::Text { .. } => "text",
            Reply::Buttons(_) => "buttons",
            Reply::List(_) => "list",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyButton {
    pub id: String,
    pub title: String,
}

impl ReplyButton {
    pub fn new(id: impl Into<String>, title: impl AsRef<str>) -> Self {
        Self {
            id: id.into(),
            title: truncate_chars(title.as_ref(), MAX_BUTTON_TITLE_CHARS),
        }
    }
}

/// Body text with up to three reply buttons
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonPrompt {
    pub body: String,
    pub buttons: Vec<ReplyButton>,
}

impl ButtonPrompt {
    /// Buttons beyond the third are dropped
    pub fn new(body: impl Into<String>, mut buttons: Vec<ReplyButton>) -> Self {
        buttons.truncate(MAX_BUTTONS);
        Self {
            body: body.into(),
            buttons,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRow {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ListRow {
    pub fn new(id: impl Into<String>, title: impl AsRef<str>) -> Self {
        Self {
            id: id.into(),
            title: truncate_chars(title.as_ref(), MAX_ROW_TITLE_CHARS),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(truncate_chars(
            description.as_ref(),
            MAX_ROW_DESCRIPTION_CHARS,
        ));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListSection {
    pub title: String,
    pub rows: Vec<ListRow>,
}

/// Body text with a button that opens a sectioned, scrollable list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListPrompt {
    pub body: String,
    pub button_label: String,
    pub sections: Vec<ListSection>,
}

impl ListPrompt {
    pub fn new(
        body: impl Into<String>,
        button_label: impl AsRef<str>,
        sections: Vec<ListSection>,
    ) -> Self {
        Self {
            body: body.into(),
            button_label: truncate_chars(button_label.as_ref(), MAX_LIST_BUTTON_CHARS),
            sections,
        }
    }
}

/// Cut `text` to at most `max` characters, marking the cut with an ellipsis.
///
/// The cut is moved back so it never splits a joined emoji sequence or
/// separates a base character from its marks and modifiers.
pub fn truncate_chars(text: &str, max: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max {
        return text.to_string();
    }

    let mut cut = max.saturating_sub(1);
    while cut > 0 && (continues_cluster(chars[cut]) || chars[cut - 1] == ZERO_WIDTH_JOINER) {
        cut -= 1;
    }

    let mut truncated: String = chars[..cut].iter().collect();
    truncated.push('…');
    truncated
}

const ZERO_WIDTH_JOINER: char = '\u{200D}';

/// Characters that attach to the one before them
fn continues_cluster(c: char) -> bool {
    matches!(c,
        '\u{200D}'
        | '\u{FE00}'..='\u{FE0F}'
        | '\u{0300}'..='\u{036F}'
        | '\u{064B}'..='\u{065F}'
        | '\u{0670}'
        | '\u{20D0}'..='\u{20FF}'
        | '\u{1F3FB}'..='\u{1F3FF}'
        | '\u{E0020}'..='\u{E007F}'
    )
}
