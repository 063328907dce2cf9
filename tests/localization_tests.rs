//! # Localization Tests
//!
//! Message retrieval, argument interpolation and language fallback.

use storefront_bot::localization::LocalizationManager;

#[test]
fn test_get_message_existing_key() {
    let manager = LocalizationManager::new("ar").unwrap();
    assert_eq!(manager.t("product-list-button"), "عرض المنتجات");
}

#[test]
fn test_get_message_nonexistent_key() {
    let manager = LocalizationManager::new("ar").unwrap();
    assert_eq!(manager.t("nonexistent-key"), "Missing translation: nonexistent-key");
}

#[test]
fn test_unsupported_language_falls_back_to_arabic() {
    let manager = LocalizationManager::new("de-DE").unwrap();
    assert_eq!(manager.language(), "ar");
    assert_eq!(manager.t("product-back"), "🔙 رجوع");
}

#[test]
fn test_arguments_are_interpolated_without_isolation_marks() {
    let manager = LocalizationManager::new("ar").unwrap();
    let message = manager.t_args("order-received", &[("product", "ساعة ذكية")]);
    assert_eq!(message, "✅ تم استلام طلبك على: *ساعة ذكية*");
    assert!(!message.contains('\u{2068}'));
}

#[test]
fn test_english_bundle() {
    let manager = LocalizationManager::new("en-GB").unwrap();
    assert_eq!(manager.language(), "en");
    assert_eq!(
        manager.t_args("order-received", &[("product", "Smart watch")]),
        "✅ We received your order for: *Smart watch*"
    );
    assert_ne!(
        manager.t("main-menu-welcome"),
        manager.get_message_in_language("main-menu-welcome", "ar", None)
    );
}
