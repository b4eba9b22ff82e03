use std::borrow::Cow;

/// Errors raised by registry lookups and construction.
#[derive(Debug, thiserror::Error)]
pub enum ConstantsError {
    /// The key is not part of the registry. All keys are known at build time, so this is a
    /// programming error on the caller's side.
    #[error("Unknown constant key{}: {key}", format_context(.context))]
    UnknownKey { key: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// An override tried to change the type of an entry.
    #[error(
        "Type mismatch for {key}{}: expected {expected}, found {found}",
        format_context(.context)
    )]
    TypeMismatch {
        key: Cow<'static, str>,
        expected: &'static str,
        found: &'static str,
        context: Option<Cow<'static, str>>,
    },

    /// Loading the configuration file or environment overlay failed.
    #[cfg(not(target_arch = "wasm32"))]
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    /// Serializing the export failed.
    #[error("Serde serialization error{}: {source}", format_context(.context))]
    Serialize { source: serde_json::Error, context: Option<Cow<'static, str>> },
}

pub type Result<T> = std::result::Result<T, ConstantsError>;

impl ConstantsError {
    pub(crate) fn unknown_key(key: impl Into<Cow<'static, str>>) -> Self {
        Self::UnknownKey { key: key.into(), context: None }
    }
}

/// Adds `.context(...)` to results that convert into [`ConstantsError`].
pub trait ConstantsErrorExt<T> {
    /// Attaches a human readable context to the error.
    ///
    /// # Errors
    /// Returns the original error, converted into [`ConstantsError`], with the context set.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T>;
}

impl<T> ConstantsErrorExt<T> for Result<T> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                ConstantsError::UnknownKey { context: c, .. }
                | ConstantsError::TypeMismatch { context: c, .. }
                | ConstantsError::Serialize { context: c, .. } => *c = Some(context.into()),
                #[cfg(not(target_arch = "wasm32"))]
                ConstantsError::Config { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<config::ConfigError> for ConstantsError {
    #[inline]
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl<T> ConstantsErrorExt<T> for std::result::Result<T, config::ConfigError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|source| ConstantsError::Config { source, context: Some(context.into()) })
    }
}

impl From<serde_json::Error> for ConstantsError {
    #[inline]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize { source, context: None }
    }
}

impl<T> ConstantsErrorExt<T> for std::result::Result<T, serde_json::Error> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|source| ConstantsError::Serialize { source, context: Some(context.into()) })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
