//! Fluent-backed UI strings for the menu bot.
//!
//! Bundles are compiled into the binary from `locales/<lang>/main.ftl`, so the
//! service never depends on its working directory to render a reply.

use anyhow::{Context, Result};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use std::collections::HashMap;
use tracing::warn;
use unic_langid::LanguageIdentifier;

/// Language used when the configured one has no bundle.
pub const DEFAULT_LANGUAGE: &str = "ar";

const RESOURCES: &[(&str, &str)] = &[
    ("ar", include_str!("../locales/ar/main.ftl")),
    ("en", include_str!("../locales/en/main.ftl")),
];

/// Localization manager holding one bundle per supported language
pub struct LocalizationManager {
    bundles: HashMap<String, FluentBundle<FluentResource>>,
    language: String,
}

impl LocalizationManager {
    /// Create a manager rendering in `language`, falling back to Arabic
    pub fn new(language: &str) -> Result<Self> {
        let mut bundles = HashMap::new();

        for (code, source) in RESOURCES {
            let locale: LanguageIdentifier = code
                .parse()
                .with_context(|| format!("invalid locale identifier {code}"))?;
            bundles.insert(code.to_string(), Self::create_bundle(locale, source)?);
        }

        let language = detect_language(Some(language));
        Ok(Self { bundles, language })
    }

    fn create_bundle(
        locale: LanguageIdentifier,
        source: &str,
    ) -> Result<FluentBundle<FluentResource>> {
        let resource = FluentResource::try_new(source.to_string())
            .map_err(|(_, errors)| anyhow::anyhow!("failed to parse {locale} resource: {errors:?}"))?;

        let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);
        // Product names are interpolated into WhatsApp markup; bidi isolation
        // marks would end up inside the bold markers.
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|errors| anyhow::anyhow!("duplicate keys in {locale} resource: {errors:?}"))?;

        Ok(bundle)
    }

    /// Language this manager renders in
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Get a message in a specific language, falling back to the default
    pub fn get_message_in_language(
        &self,
        key: &str,
        language: &str,
        args: Option<&FluentArgs>,
    ) -> String {
        let bundle = match self
            .bundles
            .get(language)
            .or_else(|| self.bundles.get(DEFAULT_LANGUAGE))
        {
            Some(bundle) => bundle,
            None => return format!("Missing translation: {key}"),
        };

        let msg = match bundle.get_message(key) {
            Some(msg) => msg,
            None => return format!("Missing translation: {key}"),
        };

        let pattern = match msg.value() {
            Some(pattern) => pattern,
            None => return format!("Missing value for key: {key}"),
        };

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            warn!(key, language, errors = ?errors, "Fluent formatting reported errors");
        }

        value.into_owned()
    }

    /// Message in the configured language
    pub fn t(&self, key: &str) -> String {
        self.get_message_in_language(key, &self.language, None)
    }

    /// Message in the configured language with string arguments
    pub fn t_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.get_message_in_language(key, &self.language, Some(&fluent_args))
    }
}

/// Map a locale tag such as `en-US` onto a supported bundle code
pub fn detect_language(language_code: Option<&str>) -> String {
    let primary = language_code
        .and_then(|code| code.split(['-', '_']).next())
        .map(|code| code.trim().to_lowercase());

    match primary {
        Some(code) if RESOURCES.iter().any(|(supported, _)| *supported == code) => code,
        _ => DEFAULT_LANGUAGE.to_string(),
    }
}
