//! Localized strings for the dashboard.
//!
//! Each locale owns an immutable table of `key -> text`. A handful of keys hold
//! HTML fragments (manual and policy sections) and are rendered as markup; every
//! other key is plain text. Lookups never fail: a key missing from the active
//! table keeps the base-locale wording, and a key missing everywhere renders as
//! itself.

mod en;
mod es;
mod pt;

use once_cell::sync::Lazy;
use std::collections::HashMap;

type Table = HashMap<&'static str, &'static str>;

static PT: Lazy<Table> = Lazy::new(|| pt::ENTRIES.iter().copied().collect());
static EN: Lazy<Table> = Lazy::new(|| en::ENTRIES.iter().copied().collect());
static ES: Lazy<Table> = Lazy::new(|| es::ENTRIES.iter().copied().collect());

/// Keys whose values are HTML fragments rather than plain text.
pub const RICH_KEYS: &[&str] = &[
    "man_intro_d",
    "man_setup_d",
    "man_gen_d",
    "pol_priv_d",
    "pol_terms_d",
];

/// Source language of the speech capture used for dictation, independent of
/// the UI locale.
pub const DICTATION_LANGUAGE: &str = "pt-BR";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    Pt,
    En,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Pt, Locale::En, Locale::Es];

    pub fn code(self) -> &'static str {
        match self {
            Locale::Pt => "pt",
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Locale::Pt => "Português",
            Locale::En => "English",
            Locale::Es => "Español",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    /// Unknown or missing codes select the base locale.
    pub fn resolve(code: Option<&str>) -> Self {
        code.and_then(Self::from_code).unwrap_or_default()
    }

    fn table(self) -> &'static Table {
        match self {
            Locale::Pt => &PT,
            Locale::En => &EN,
            Locale::Es => &ES,
        }
    }
}

pub fn is_rich(key: &str) -> bool {
    RICH_KEYS.contains(&key)
}

/// Rendered form of a bound element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rendered {
    Text(String),
    Html(String),
}

impl Rendered {
    pub fn as_str(&self) -> &str {
        match self {
            Rendered::Text(text) | Rendered::Html(text) => text,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.locale.table().get(key).copied()
    }

    /// Re-render an element bound to `key`. When the active table lacks the
    /// key the element keeps `previous`.
    pub fn render(&self, key: &str, previous: &str) -> Rendered {
        match self.get(key) {
            Some(value) if is_rich(key) => Rendered::Html(value.to_string()),
            Some(value) => Rendered::Text(value.to_string()),
            None if is_rich(key) => Rendered::Html(previous.to_string()),
            None => Rendered::Text(previous.to_string()),
        }
    }

    pub fn text(&self, key: &'static str) -> &'static str {
        self.get(key)
            .or_else(|| Locale::default().table().get(key).copied())
            .unwrap_or(key)
    }

    /// Text with `{name}` placeholders substituted.
    pub fn format(&self, key: &'static str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.text(key).to_string(), |acc, (name, value)| {
                acc.replace(&format!("{{{name}}}"), value)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn keys(locale: Locale) -> BTreeSet<&'static str> {
        locale.table().keys().copied().collect()
    }

    #[test]
    fn test_tables_share_keys() {
        let base = keys(Locale::Pt);
        for locale in [Locale::En, Locale::Es] {
            let other = keys(locale);
            let missing: Vec<_> = base.difference(&other).collect();
            let extra: Vec<_> = other.difference(&base).collect();
            assert!(missing.is_empty(), "{:?} missing {:?}", locale, missing);
            assert!(extra.is_empty(), "{:?} has extra {:?}", locale, extra);
        }
    }

    #[test]
    fn test_no_duplicate_entries() {
        for (locale, entries) in [
            (Locale::Pt, pt::ENTRIES),
            (Locale::En, en::ENTRIES),
            (Locale::Es, es::ENTRIES),
        ] {
            assert_eq!(entries.len(), locale.table().len(), "{locale:?}");
        }
    }

    #[test]
    fn test_unknown_code_falls_back_to_base() {
        assert_eq!(Locale::resolve(Some("fr")), Locale::Pt);
        assert_eq!(Locale::resolve(None), Locale::Pt);
        assert_eq!(Locale::resolve(Some("es")), Locale::Es);
    }

    #[test]
    fn test_every_key_renders_non_blank() {
        for locale in Locale::ALL {
            let t = Translator::new(locale);
            for key in keys(Locale::Pt) {
                assert!(!t.text(key).trim().is_empty(), "{locale:?}:{key}");
            }
        }
    }

    #[test]
    fn test_rich_keys_render_as_html() {
        let t = Translator::new(Locale::En);
        match t.render("man_intro_d", "") {
            Rendered::Html(html) => assert!(html.contains("<strong>")),
            other => panic!("expected html, got {other:?}"),
        }
        assert_eq!(
            t.render("btn_start", "Iniciar"),
            Rendered::Text("Start".into())
        );
    }

    #[test]
    fn test_missing_key_keeps_previous_content() {
        let t = Translator::new(Locale::En);
        assert_eq!(
            t.render("no_such_key", "Previous"),
            Rendered::Text("Previous".into())
        );
    }

    #[test]
    fn test_format_substitutes_placeholders() {
        let t = Translator::new(Locale::En);
        assert_eq!(
            t.format("confirm_control", &[("action", "START")]),
            "Confirm action: START?"
        );
    }
}
