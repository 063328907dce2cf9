//! Intent classification and the identifier routing table.
//!
//! No conversation state is kept: the identifier carried by each event is the
//! whole state, so classifying an event is a pure function of the event and
//! the catalog.

use tracing::debug;

use crate::catalog::{
    Catalog, CATEGORY_PREFIX, MENU_AGENT, MENU_FAQ, MENU_PRODUCTS, ORDER_PREFIX, PRODUCT_PREFIX,
};

/// Free-text inputs treated as an explicit greeting
pub const GREETINGS: &[&str] = &["مرحبا", "هلا", "hi", "hello", "start", "ابدأ"];

/// What the user sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundKind {
    /// Free-form text
    Text(String),
    /// Button or list selection; `None` when the selection carried no id
    Selection(Option<String>),
    /// Media, reactions, locations and anything else the bot does not answer
    Unsupported(String),
}

/// One inbound message, alive only for the duration of a dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEvent {
    pub sender: String,
    pub kind: InboundKind,
}

impl InboundEvent {
    pub fn text(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            kind: InboundKind::Text(body.into()),
        }
    }

    pub fn selection(sender: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            kind: InboundKind::Selection(Some(id.into())),
        }
    }
}

/// Action resolved from an inbound event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    MainMenu,
    CategoryChoice,
    ProductList { category: String },
    ProductDetail { product_id: String },
    FaqList,
    FaqAnswer { faq_id: String },
    Order { product_id: String },
    AgentHandoff,
}

/// Resolve an event to an intent; `None` means the event gets no reply
pub fn classify(event: &InboundEvent, catalog: &Catalog) -> Option<Intent> {
    match &event.kind {
        InboundKind::Text(text) => {
            let normalized = normalize(text);
            if is_greeting(&normalized) {
                debug!(sender = %event.sender, "Greeting received");
            } else {
                debug!(sender = %event.sender, "Unrecognized free text, falling back to main menu");
            }
            Some(Intent::MainMenu)
        }
        InboundKind::Selection(Some(id)) => route(id, catalog),
        InboundKind::Selection(None) => {
            debug!(sender = %event.sender, "Selection without an identifier ignored");
            None
        }
        InboundKind::Unsupported(kind) => {
            debug!(sender = %event.sender, kind = %kind, "Unsupported message type ignored");
            None
        }
    }
}

/// Match a selection identifier against the routing table; first match wins
pub fn route(id: &str, catalog: &Catalog) -> Option<Intent> {
    if id == MENU_PRODUCTS {
        return Some(Intent::CategoryChoice);
    }
    if let Some(key) = id.strip_prefix(CATEGORY_PREFIX) {
        if catalog.category(key).is_some() {
            return Some(Intent::ProductList {
                category: key.to_string(),
            });
        }
    }
    if id.starts_with(PRODUCT_PREFIX) {
        return Some(Intent::ProductDetail {
            product_id: id.to_string(),
        });
    }
    if id == MENU_FAQ {
        return Some(Intent::FaqList);
    }
    if catalog.lookup_faq_answer(id).is_some() {
        return Some(Intent::FaqAnswer {
            faq_id: id.to_string(),
        });
    }
    if let Some(product_id) = id.strip_prefix(ORDER_PREFIX) {
        return Some(Intent::Order {
            product_id: product_id.to_string(),
        });
    }
    if id == MENU_AGENT {
        return Some(Intent::AgentHandoff);
    }

    debug!(id, "No route for selection");
    None
}

pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

pub fn is_greeting(normalized: &str) -> bool {
    GREETINGS.contains(&normalized)
}
