use serde::{Deserialize, Serialize};

/// Unified error type for all registrar API operations.
///
/// Each variant includes a `provider` field identifying which provider produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// # Error classes
///
/// - transport failures: [`NetworkError`](Self::NetworkError), [`Timeout`](Self::Timeout)
/// - logical failures reported by the API: [`InvalidCredentials`](Self::InvalidCredentials),
///   [`PermissionDenied`](Self::PermissionDenied), [`DomainNotFound`](Self::DomainNotFound),
///   [`ZoneRejected`](Self::ZoneRejected), [`Unknown`](Self::Unknown)
/// - response shape problems: [`ParseError`](Self::ParseError),
///   [`SerializationError`](Self::SerializationError)
///
/// Nothing is retried; callers decide how to degrade.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The bearer token was rejected.
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The authenticated user lacks permission for the requested operation.
    PermissionDenied {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The requested domain or zone does not exist at the provider.
    DomainNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Domain name or zone identifier that was not found.
        domain: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The API answered with a 2xx status but reported that the zone was not created.
    ZoneRejected {
        /// Provider that produced the error.
        provider: String,
        /// Domain the zone was submitted for.
        domain: String,
        /// Machine-readable error code from the payload, if any.
        raw_code: Option<String>,
        /// Description from the payload, if any.
        raw_message: Option<String>,
    },

    /// Failed to parse the provider's API response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// An unrecognized error from the provider API.
    ///
    /// Carries the provider's own code and description so they can be logged verbatim.
    Unknown {
        /// Provider that produced the error.
        provider: String,
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（凭证、权限、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
                | Self::DomainNotFound { .. }
                | Self::ZoneRejected { .. }
        )
    }

    /// Provider-supplied error code, when the API sent one.
    pub fn raw_code(&self) -> Option<&str> {
        match self {
            Self::ZoneRejected { raw_code, .. } | Self::Unknown { raw_code, .. } => {
                raw_code.as_deref()
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Invalid credentials: {msg}")
                } else {
                    write!(f, "[{provider}] Invalid credentials")
                }
            }
            Self::PermissionDenied {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Permission denied: {msg}")
                } else {
                    write!(f, "[{provider}] Permission denied")
                }
            }
            Self::DomainNotFound {
                provider,
                domain,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Domain '{domain}' not found: {msg}")
                } else {
                    write!(f, "[{provider}] Domain '{domain}' not found")
                }
            }
            Self::ZoneRejected {
                provider,
                domain,
                raw_code,
                raw_message,
            } => {
                write!(f, "[{provider}] Zone for '{domain}' rejected")?;
                if let Some(code) = raw_code {
                    write!(f, " (code {code})")?;
                }
                if let Some(msg) = raw_message {
                    write!(f, ": {msg}")?;
                }
                Ok(())
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::SerializationError { provider, detail } => {
                write!(f, "[{provider}] Serialization error: {detail}")
            }
            Self::Unknown {
                provider,
                raw_code,
                raw_message,
            } => {
                if let Some(code) = raw_code {
                    write!(f, "[{provider}] Error code {code}: {raw_message}")
                } else {
                    write!(f, "[{provider}] {raw_message}")
                }
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
