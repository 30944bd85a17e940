//! Structured action errors.
//!
//! [`BaseError`] renders a multi-line message once at construction and keeps
//! an optional shared `cause`. When a field is missing locally, it takes
//! `details` and the docs URL from a `BaseError` cause. For any other error
//! type it uses the cause's `Display` text as the details.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::walk;

/// Short message used when the caller supplies an empty one.
pub const DEFAULT_SHORT_MESSAGE: &str = "An error occurred.";

/// Base URL that `docs_path` values are appended to.
pub const DOCS_BASE_URL: &str = "https://evm-actions.dev/core";

/// Version stamp written on the last line of every rendered message.
pub const VERSION: &str = concat!(env!("CARGO_PKG_NAME"), "@", env!("CARGO_PKG_VERSION"));

/// Shared, immutable handle to the error that triggered another.
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;

/// Variant tag carried by every [`BaseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorKind {
    #[default]
    Base,
    ChainNotConfigured,
    ClientNotFound,
    UnitFormat,
    FeeEstimation,
    /// Host-defined variant identified by its name.
    Custom(&'static str),
}

impl ErrorKind {
    /// Stable name of the variant.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Base => "ActionsError",
            ErrorKind::ChainNotConfigured => "ChainNotConfiguredError",
            ErrorKind::ClientNotFound => "ClientNotFoundError",
            ErrorKind::UnitFormat => "UnitFormatError",
            ErrorKind::FeeEstimation => "FeeEstimationError",
            ErrorKind::Custom(name) => *name,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Optional inputs to [`BaseError::new`].
#[derive(Debug, Clone, Default)]
pub struct BaseErrorOptions {
    pub cause: Option<Cause>,
    pub details: Option<String>,
    pub docs_path: Option<String>,
    pub docs_slug: Option<String>,
    pub meta_messages: Vec<String>,
}

impl BaseErrorOptions {
    pub fn with_cause(self, cause: impl Error + Send + Sync + 'static) -> Self {
        self.with_shared_cause(Arc::new(cause))
    }

    /// Uses an already shared cause, e.g. one that is also held elsewhere.
    pub fn with_shared_cause(mut self, cause: Cause) -> Self {
        self.cause = Some(cause);
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_docs_path(mut self, docs_path: impl Into<String>) -> Self {
        self.docs_path = Some(docs_path.into());
        self
    }

    pub fn with_docs_slug(mut self, docs_slug: impl Into<String>) -> Self {
        self.docs_slug = Some(docs_slug.into());
        self
    }

    pub fn with_meta_messages<I, S>(mut self, meta_messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.meta_messages = meta_messages.into_iter().map(Into::into).collect();
        self
    }
}

/// Application error with a rendered message and an optional cause chain.
///
/// Immutable after construction. `Display` prints the rendered message.
/// `Error::source` returns the cause.
#[derive(Debug, Clone)]
pub struct BaseError {
    kind: ErrorKind,
    short_message: String,
    details: Option<String>,
    docs_path: Option<String>,
    docs_slug: Option<String>,
    meta_messages: Vec<String>,
    cause: Option<Cause>,
    resolved_details: Option<String>,
    docs_url: Option<String>,
    message: String,
}

impl BaseError {
    /// Creates an [`ErrorKind::Base`] error. Never fails.
    pub fn new(short_message: impl Into<String>, options: BaseErrorOptions) -> Self {
        Self::with_kind(ErrorKind::Base, short_message, options)
    }

    /// Creates an error tagged with `kind`.
    pub fn with_kind(
        kind: ErrorKind,
        short_message: impl Into<String>,
        options: BaseErrorOptions,
    ) -> Self {
        let BaseErrorOptions {
            cause,
            details,
            docs_path,
            docs_slug,
            meta_messages,
        } = options;

        let mut short_message = short_message.into();
        if short_message.is_empty() {
            short_message = DEFAULT_SHORT_MESSAGE.to_string();
        }

        let resolved_details = resolve_details(details.as_deref(), cause.as_ref());
        let docs_url = resolve_docs_url(docs_path.as_deref(), docs_slug.as_deref(), cause.as_ref());
        let message = render_message(
            &short_message,
            &meta_messages,
            docs_url.as_deref(),
            resolved_details.as_deref(),
        );

        Self {
            kind,
            short_message,
            details,
            docs_path,
            docs_slug,
            meta_messages,
            cause,
            resolved_details,
            docs_url,
            message,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// The summary line; the default message when an empty one was given.
    pub fn short_message(&self) -> &str {
        &self.short_message
    }

    /// Details exactly as supplied, before inheritance from the cause.
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Details as rendered, possibly inherited from the cause.
    pub fn resolved_details(&self) -> Option<&str> {
        self.resolved_details.as_deref()
    }

    pub fn docs_path(&self) -> Option<&str> {
        self.docs_path.as_deref()
    }

    pub fn docs_slug(&self) -> Option<&str> {
        self.docs_slug.as_deref()
    }

    /// Docs URL as rendered, possibly inherited from the cause.
    pub fn docs_url(&self) -> Option<&str> {
        self.docs_url.as_deref()
    }

    pub fn meta_messages(&self) -> &[String] {
        &self.meta_messages
    }

    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    pub fn version(&self) -> &'static str {
        VERSION
    }

    /// The full rendered message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the deepest error in the cause chain, `self` if there is no cause.
    pub fn walk(&self) -> &(dyn Error + 'static) {
        walk::walk(self, None).unwrap_or(self)
    }

    /// Returns the first error in the chain, starting at `self`, that
    /// satisfies `predicate`.
    pub fn walk_with<F>(&self, predicate: F) -> Option<&(dyn Error + 'static)>
    where
        F: Fn(&(dyn Error + 'static)) -> bool,
    {
        walk::walk(self, Some(&predicate))
    }

    /// Returns the first [`BaseError`] in the chain tagged with `kind`.
    pub fn find_kind(&self, kind: ErrorKind) -> Option<&BaseError> {
        self.walk_with(|err| walk::is_kind(err, kind))
            .and_then(|err| err.downcast_ref::<BaseError>())
    }
}

// Variants raised by the action layer.
impl BaseError {
    pub fn chain_not_configured(chain_id: u64) -> Self {
        Self::with_kind(
            ErrorKind::ChainNotConfigured,
            "Chain not configured.",
            BaseErrorOptions::default()
                .with_meta_messages([format!("Chain ID: {chain_id}")])
                .with_docs_path("/api/config")
                .with_docs_slug("chains"),
        )
    }

    pub fn client_not_found() -> Self {
        Self::with_kind(
            ErrorKind::ClientNotFound,
            "No client configured and no chain id given.",
            BaseErrorOptions::default().with_docs_path("/api/config"),
        )
    }

    pub fn unit_format(cause: chain_eth::EthError) -> Self {
        Self::with_kind(
            ErrorKind::UnitFormat,
            "Failed to format fee value.",
            BaseErrorOptions::default().with_cause(cause),
        )
    }

    pub fn fee_estimation(cause: impl Error + Send + Sync + 'static) -> Self {
        Self::with_kind(
            ErrorKind::FeeEstimation,
            "Failed to estimate fees per gas.",
            BaseErrorOptions::default()
                .with_cause(cause)
                .with_docs_path("/api/actions/estimateFeesPerGas"),
        )
    }
}

impl fmt::Display for BaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for BaseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        // Deref through the Arc so callers can downcast to the concrete cause.
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}

/// Joins the resolved fields into the rendered message.
///
/// Layout: short message, blank line, meta lines plus a blank line (if any),
/// `Docs:`, `Details:`, then `Version:` last.
pub fn render_message(
    short_message: &str,
    meta_messages: &[String],
    docs_url: Option<&str>,
    details: Option<&str>,
) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(meta_messages.len() + 5);
    lines.push(short_message.to_string());
    lines.push(String::new());
    if !meta_messages.is_empty() {
        lines.extend(meta_messages.iter().cloned());
        lines.push(String::new());
    }
    if let Some(url) = docs_url {
        lines.push(format!("Docs: {url}"));
    }
    if let Some(details) = details {
        lines.push(format!("Details: {details}"));
    }
    lines.push(format!("Version: {VERSION}"));
    lines.join("\n")
}

/// Composes `<DOCS_BASE_URL>/<docs_path>.html[#<docs_slug>]`.
pub fn docs_url(docs_path: &str, docs_slug: Option<&str>) -> String {
    let separator = if docs_path.starts_with('/') { "" } else { "/" };
    let mut url = format!("{DOCS_BASE_URL}{separator}{docs_path}.html");
    if let Some(slug) = non_empty(docs_slug) {
        url.push('#');
        url.push_str(slug);
    }
    url
}

fn resolve_details(details: Option<&str>, cause: Option<&Cause>) -> Option<String> {
    if let Some(details) = non_empty(details) {
        return Some(details.to_string());
    }
    let cause = cause?;
    match as_base(cause) {
        Some(base) => base.resolved_details.clone(),
        None => {
            let text = cause.to_string();
            (!text.is_empty()).then_some(text)
        }
    }
}

fn resolve_docs_url(
    docs_path: Option<&str>,
    docs_slug: Option<&str>,
    cause: Option<&Cause>,
) -> Option<String> {
    if let Some(path) = non_empty(docs_path) {
        return Some(docs_url(path, docs_slug));
    }
    cause.and_then(as_base).and_then(|base| base.docs_url.clone())
}

fn as_base(cause: &Cause) -> Option<&BaseError> {
    let err: &(dyn Error + 'static) = &**cause;
    err.downcast_ref::<BaseError>()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
