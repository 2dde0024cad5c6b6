//! Localised display names for performers and groups.

use crate::catalog::{Group, Performer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    English,
    Native,
    Japanese,
}

/// Locales tried, in order, when picking the name shown to users.
pub const DISPLAY_LOCALES: [Locale; 2] = [Locale::English, Locale::Native];

/// Anything that carries a name per locale.
pub trait LocalizedNames {
    fn name_in(&self, locale: Locale) -> &str;
}

impl LocalizedNames for Performer {
    fn name_in(&self, locale: Locale) -> &str {
        match locale {
            Locale::English => &self.english_name,
            Locale::Native => &self.native_name,
            Locale::Japanese => &self.japanese_name,
        }
    }
}

impl LocalizedNames for Group {
    fn name_in(&self, locale: Locale) -> &str {
        match locale {
            Locale::English => &self.english_name,
            Locale::Native => &self.native_name,
            Locale::Japanese => &self.japanese_name,
        }
    }
}

/// Returns the first non-empty name in [`DISPLAY_LOCALES`] order.
///
/// Falls through to an empty string when every locale is blank.
#[must_use]
pub fn display_name<T: LocalizedNames + ?Sized>(item: &T) -> &str {
    DISPLAY_LOCALES
        .iter()
        .map(|&locale| item.name_in(locale))
        .find(|name| !name.is_empty())
        .unwrap_or_default()
}
