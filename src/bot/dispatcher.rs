//! Turns inbound events into replies and hands them to the gateway

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::gateway::{GatewayError, MessagingGateway};
use crate::localization::LocalizationManager;
use crate::reply::Reply;

use super::intent::{classify, InboundEvent, Intent};
use super::ui_builder;

pub struct Dispatcher {
    catalog: Catalog,
    l10n: LocalizationManager,
}

impl Dispatcher {
    pub fn new(catalog: Catalog, l10n: LocalizationManager) -> Self {
        Self { catalog, l10n }
    }

    /// Replies owed for `event`, in send order. Pure: the same event always
    /// yields the same replies.
    pub fn plan(&self, event: &InboundEvent) -> Vec<Reply> {
        match classify(event, &self.catalog) {
            Some(intent) => self.render(&intent),
            None => Vec::new(),
        }
    }

    pub fn render(&self, intent: &Intent) -> Vec<Reply> {
        let l10n = &self.l10n;
        let catalog = &self.catalog;

        match intent {
            Intent::MainMenu => vec![ui_builder::main_menu(l10n)],
            Intent::CategoryChoice => vec![ui_builder::category_choice(l10n, catalog)],
            Intent::ProductList { category } => {
                vec![ui_builder::product_list(l10n, catalog, category)]
            }
            Intent::ProductDetail { product_id } => {
                vec![ui_builder::product_detail(l10n, catalog, product_id)]
            }
            Intent::FaqList => vec![ui_builder::faq_list(l10n, catalog)],
            Intent::FaqAnswer { faq_id } => match catalog.lookup_faq_answer(faq_id) {
                Some(answer) => ui_builder::faq_answer(l10n, answer),
                None => Vec::new(),
            },
            Intent::Order { product_id } => {
                let product = catalog.lookup_product(product_id);
                if product.is_none() {
                    debug!(product_id = %product_id, "Order for unknown product");
                }
                ui_builder::order_confirmation(l10n, product)
            }
            Intent::AgentHandoff => vec![ui_builder::agent_handoff(l10n)],
        }
    }

    /// Send the planned replies one after another.
    ///
    /// Stops at the first failed send; replies already delivered are not
    /// compensated. Returns how many replies were sent.
    pub async fn dispatch(
        &self,
        gateway: &dyn MessagingGateway,
        event: &InboundEvent,
    ) -> Result<usize, GatewayError> {
        let replies = self.plan(event);
        if replies.is_empty() {
            debug!(sender = %event.sender, "Nothing to send");
            return Ok(0);
        }

        for reply in &replies {
            gateway.send(&event.sender, reply).await?;
        }

        info!(sender = %event.sender, replies = replies.len(), "Replies sent");
        Ok(replies.len())
    }
}
