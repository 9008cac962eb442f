//! Composition error types.

/// Locale set errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No declared locale matches the default prefix (or none is declared).
    #[error("Default locale '{prefix}' is not among the declared locales")]
    MissingDefaultLocale {
        /// Canonical default prefix.
        prefix: String,
    },
    /// Two locales canonicalize to the same prefix.
    #[error("Locales '{first}' and '{second}' both resolve to prefix '{prefix}'")]
    DuplicateLocalePrefix {
        /// Shared canonical prefix.
        prefix: String,
        /// First prefix as declared.
        first: String,
        /// Second prefix as declared.
        second: String,
    },
}

/// Link validation errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LinkError {
    /// A local link points outside its locale's namespace.
    #[error("Locale '{locale}': link '{text}' -> '{link}' leaves the locale namespace")]
    NamespaceViolation {
        /// Owning locale prefix.
        locale: String,
        /// Entry text.
        text: String,
        /// Entry target.
        link: String,
    },
    /// A local link targets a page the locale never declares.
    #[error("Locale '{locale}': link '{text}' -> '{link}' targets an undeclared page")]
    DanglingLink {
        /// Owning locale prefix.
        locale: String,
        /// Entry text.
        text: String,
        /// Entry target.
        link: String,
    },
    /// An entry has an empty text or link.
    #[error("Locale '{locale}': entry '{text}' -> '{link}' has an empty text or link")]
    MalformedEntry {
        /// Owning locale prefix.
        locale: String,
        /// Entry text.
        text: String,
        /// Entry target.
        link: String,
    },
}

/// Error returned by [`SiteComposer::compose`](crate::SiteComposer::compose).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ComposeError {
    /// Locale set error.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Link validation error.
    #[error(transparent)]
    Link(#[from] LinkError),
}
