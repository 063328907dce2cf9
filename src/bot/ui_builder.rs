//! UI Builder module for composing menu replies

use crate::catalog::{Catalog, Product, MENU_AGENT, MENU_FAQ, MENU_PRODUCTS, ORDER_PREFIX};
use crate::localization::LocalizationManager;
use crate::reply::{ButtonPrompt, ListPrompt, ListRow, ListSection, Reply, ReplyButton};

/// Welcome prompt with the three top-level options
pub fn main_menu(l10n: &LocalizationManager) -> Reply {
    let body = format!(
        "{}\n\n{}",
        l10n.t("main-menu-welcome"),
        l10n.t("main-menu-question")
    );

    Reply::Buttons(ButtonPrompt::new(
        body,
        vec![
            ReplyButton::new(MENU_PRODUCTS, l10n.t("menu-products")),
            ReplyButton::new(MENU_FAQ, l10n.t("menu-faq")),
            ReplyButton::new(MENU_AGENT, l10n.t("menu-agent")),
        ],
    ))
}

/// One button per catalog category
pub fn category_choice(l10n: &LocalizationManager, catalog: &Catalog) -> Reply {
    let buttons = catalog
        .list_categories()
        .iter()
        .map(|category| ReplyButton::new(category.button_id(), &category.title))
        .collect();

    Reply::Buttons(ButtonPrompt::new(l10n.t("categories-prompt"), buttons))
}

/// Product list of a category; an unknown or empty category gives zero rows
pub fn product_list(l10n: &LocalizationManager, catalog: &Catalog, category: &str) -> Reply {
    let rows = catalog
        .list_products(category)
        .iter()
        .map(|p| ListRow::new(&p.id, &p.name).with_description(format!("{} | {}", p.price, p.description)))
        .collect();

    Reply::List(ListPrompt::new(
        l10n.t("product-list-prompt"),
        l10n.t("product-list-button"),
        vec![ListSection {
            title: l10n.t("product-list-section"),
            rows,
        }],
    ))
}

/// Detail card with order and back buttons, or a plain not-found notice
pub fn product_detail(l10n: &LocalizationManager, catalog: &Catalog, product_id: &str) -> Reply {
    let Some(product) = catalog.lookup_product(product_id) else {
        return Reply::text(l10n.t("product-not-found"));
    };

    let body = format!(
        "*{}*\n💰 {}: {}\n📝 {}",
        product.name,
        l10n.t("product-price-label"),
        product.price,
        product.description
    );

    Reply::Buttons(ButtonPrompt::new(
        body,
        vec![
            ReplyButton::new(format!("{ORDER_PREFIX}{product_id}"), l10n.t("product-order-now")),
            ReplyButton::new(MENU_PRODUCTS, l10n.t("product-back")),
        ],
    ))
}

/// FAQ topics, one list section per catalog FAQ section
pub fn faq_list(l10n: &LocalizationManager, catalog: &Catalog) -> Reply {
    let sections = catalog
        .faq_sections()
        .iter()
        .map(|section| ListSection {
            title: section.title.clone(),
            rows: section
                .entries
                .iter()
                .map(|entry| ListRow::new(&entry.id, &entry.title))
                .collect(),
        })
        .collect();

    Reply::List(ListPrompt::new(
        l10n.t("faq-list-prompt"),
        l10n.t("faq-list-button"),
        sections,
    ))
}

/// The answer text followed by a "need more help?" prompt
pub fn faq_answer(l10n: &LocalizationManager, answer: &str) -> Vec<Reply> {
    vec![
        Reply::text(answer),
        Reply::Buttons(ButtonPrompt::new(
            l10n.t("faq-followup-prompt"),
            vec![
                ReplyButton::new(MENU_FAQ, l10n.t("faq-another-question")),
                ReplyButton::new(MENU_PRODUCTS, l10n.t("faq-browse-products")),
            ],
        )),
    ]
}

/// Order receipt followed by an "anything else?" prompt.
///
/// An unknown product still gets a receipt, with an empty name.
pub fn order_confirmation(l10n: &LocalizationManager, product: Option<&Product>) -> Vec<Reply> {
    let name = product.map(|p| p.name.as_str()).unwrap_or_default();
    let confirmation = format!(
        "{}\n\n{}",
        l10n.t_args("order-received", &[("product", name)]),
        l10n.t("order-followup-note")
    );

    vec![
        Reply::text(confirmation),
        Reply::Buttons(ButtonPrompt::new(
            l10n.t("order-anything-else"),
            vec![
                ReplyButton::new(MENU_PRODUCTS, l10n.t("order-shop-more")),
                ReplyButton::new(MENU_AGENT, l10n.t("order-talk-to-agent")),
            ],
        )),
    ]
}

pub fn agent_handoff(l10n: &LocalizationManager) -> Reply {
    Reply::text(format!(
        "{}\n\n{}",
        l10n.t("agent-handoff"),
        l10n.t("agent-working-hours")
    ))
}
