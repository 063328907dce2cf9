//! Bot module for the conversational menu
//!
//! This module is split into several submodules:
//! - `intent`: Classifies inbound events and holds the identifier routing table
//! - `ui_builder`: Renders each action into button, list and text replies
//! - `dispatcher`: Plans the replies for an event and sends them

pub mod dispatcher;
pub mod intent;
pub mod ui_builder;

pub use dispatcher::Dispatcher;
pub use intent::{classify, route, InboundEvent, InboundKind, Intent};
