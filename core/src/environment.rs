//! Environment module - dependency injection traits
//!
//! All external dependencies are abstracted behind traits and injected via the
//! Environment parameter of a reducer. The todo-list engine has exactly one
//! such dependency: locale-aware string collation, used to order todos.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::Locale;
use thiserror::Error;

/// Collation trait - abstracts locale-aware string comparison for testability
///
/// Ordering must be "base" sensitive: strings differing only in case or
/// accents compare equal.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use tasklist_core::environment::{AsciiCollation, Collation};
///
/// let collation = AsciiCollation;
/// assert_eq!(collation.compare("a This is first", "B second"), Ordering::Less);
/// assert_eq!(collation.compare("abc", "ABC"), Ordering::Equal);
/// ```
pub trait Collation: Send + Sync {
    /// Compare two strings under this collation
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Errors raised while constructing a collation
#[derive(Debug, Error)]
pub enum CollationError {
    /// The locale identifier could not be parsed as a BCP-47 tag
    #[error("invalid locale tag `{tag}`: {message}")]
    InvalidLocale {
        /// The offending locale tag
        tag: String,
        /// Parser diagnostic
        message: String,
    },

    /// No collator could be built for the requested locale
    #[error("collation unavailable for locale `{tag}`: {message}")]
    Unavailable {
        /// The requested locale tag
        tag: String,
        /// Underlying diagnostic
        message: String,
    },
}

/// Locale-aware collation backed by ICU4X
///
/// Uses primary strength, so case and accent differences ("base-equal"
/// strings) compare equal - `"a This is first"` orders before `"B second"`.
pub struct LocaleCollation {
    collator: Collator,
}

impl LocaleCollation {
    /// Creates a collation for the given BCP-47 locale tag (e.g. `"en"`)
    ///
    /// # Errors
    ///
    /// Returns [`CollationError::InvalidLocale`] if the tag does not parse and
    /// [`CollationError::Unavailable`] if no collator exists for the locale.
    pub fn new(tag: &str) -> Result<Self, CollationError> {
        let locale: Locale = tag.parse().map_err(|e| CollationError::InvalidLocale {
            tag: tag.to_owned(),
            message: format!("{e}"),
        })?;

        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Primary);

        let collator =
            Collator::try_new(&locale.into(), options).map_err(|e| CollationError::Unavailable {
                tag: tag.to_owned(),
                message: format!("{e}"),
            })?;

        Ok(Self { collator })
    }
}

impl Collation for LocaleCollation {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }
}

impl std::fmt::Debug for LocaleCollation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleCollation").finish_non_exhaustive()
    }
}

/// ASCII case-insensitive fallback collation
///
/// Behavioral deviation from [`LocaleCollation`]: bytes are compared after
/// ASCII lowercasing, so accented characters are ordered by code point rather
/// than base letter. Intended for environments without collation data and for
/// deterministic tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct AsciiCollation;

impl Collation for AsciiCollation {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        let a = a.bytes().map(|byte| byte.to_ascii_lowercase());
        let b = b.bytes().map(|byte| byte.to_ascii_lowercase());
        a.cmp(b)
    }
}
