// SPDX-License-Identifier: MPL-2.0
use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::{langid, LanguageIdentifier};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: LanguageIdentifier = langid!("en-US");

/// Loaded translations and the active locale.
pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("locales", &self.bundles.keys().collect::<Vec<_>>())
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = FluentResource::try_new(source).unwrap_or_else(|(resource, errors)| {
                log::warn!("{filename}: {} parse error(s), keeping valid entries", errors.len());
                resource
            });
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Plain terminal output; no bidi isolation marks around arguments.
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                log::warn!("{filename}: {} duplicate message(s)", errors.len());
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(DEFAULT_LOCALE);

        log::debug!("Using locale {current_locale}");

        Self {
            bundles,
            current_locale,
        }
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key`, substituting each `(name, value)` pair.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, I18nArg<'_>)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            let value = match value {
                I18nArg::Text(text) => FluentValue::from(*text),
                I18nArg::Number(number) => FluentValue::from(*number),
            };
            fluent_args.set(*name, value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

/// Argument value passed to [`I18n::tr_with_args`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum I18nArg<'a> {
    Text(&'a str),
    Number(f64),
}

impl<'a> From<&'a str> for I18nArg<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl From<usize> for I18nArg<'_> {
    fn from(value: usize) -> Self {
        // Counts shown to the operator stay far below f64's exact range.
        #[allow(clippy::cast_precision_loss)]
        Self::Number(value as f64)
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let pick = |lang_str: &str| {
        lang_str
            .parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| available.contains(lang))
    };

    // 1. Check CLI args
    if let Some(lang) = cli_lang.as_deref().and_then(pick) {
        return Some(lang);
    }

    // 2. Check config file
    if let Some(lang) = config.general.language.as_deref().and_then(pick) {
        return Some(lang);
    }

    // 3. Check OS locale
    sys_locale::get_locale().as_deref().and_then(pick)
}
