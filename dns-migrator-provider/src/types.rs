use serde::{Deserialize, Serialize};

// ============ Domain Types ============

/// Registration status of a domain at the source registrar.
///
/// Serialized as the lowercase string the API uses. Statuses this crate does not
/// know about are preserved verbatim in [`Other`](Self::Other).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DomainStatus {
    /// Domain is registered and active.
    Active,
    /// Domain registration has been cancelled.
    Cancelled,
    /// Any other status string reported by the provider.
    Other(String),
}

impl From<String> for DomainStatus {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "active" => Self::Active,
            "cancelled" => Self::Cancelled,
            _ => Self::Other(value),
        }
    }
}

impl From<DomainStatus> for String {
    fn from(value: DomainStatus) -> Self {
        match value {
            DomainStatus::Active => "active".to_string(),
            DomainStatus::Cancelled => "cancelled".to_string(),
            DomainStatus::Other(s) => s,
        }
    }
}

/// A domain to migrate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    /// Fully qualified domain name (e.g., `"example.com"`).
    pub name: String,
    /// Identifier of the domain's DNS zone at the source provider.
    pub source_zone_id: String,
    /// Registration status.
    pub status: DomainStatus,
    /// `true` when the domain is managed outside the source registrar.
    pub external: bool,
}

impl Domain {
    /// Whether the domain can be migrated: not externally managed and not cancelled.
    pub fn is_eligible(&self) -> bool {
        !self.external && self.status != DomainStatus::Cancelled
    }
}

// ============ DNS Record Types ============

/// DNS record type.
///
/// Serialized as uppercase strings (`"A"`, `"AAAA"`, `"CNAME"`, etc.). Matching is
/// case-sensitive: any other string, including a lowercase spelling of a known type,
/// is carried through unchanged in [`DnsRecordType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DnsRecordType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Canonical name (alias) record.
    Cname,
    /// Mail exchange record.
    Mx,
    /// Text record.
    Txt,
    /// Start of authority record.
    Soa,
    /// Name server record.
    Ns,
    /// Service locator record.
    Srv,
    /// Certificate Authority Authorization record.
    Caa,
    /// Any other record type, stored exactly as received.
    Other(String),
}

impl DnsRecordType {
    /// Uppercase wire representation.
    pub fn as_str(&self) -> &str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Soa => "SOA",
            Self::Ns => "NS",
            Self::Srv => "SRV",
            Self::Caa => "CAA",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for DnsRecordType {
    fn from(value: &str) -> Self {
        // 大小写敏感：非标准写法原样保留在 Other 中
        match value {
            "A" => Self::A,
            "AAAA" => Self::Aaaa,
            "CNAME" => Self::Cname,
            "MX" => Self::Mx,
            "TXT" => Self::Txt,
            "SOA" => Self::Soa,
            "NS" => Self::Ns,
            "SRV" => Self::Srv,
            "CAA" => Self::Caa,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for DnsRecordType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<DnsRecordType> for String {
    fn from(value: DnsRecordType) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A DNS record as returned by the source provider.
///
/// `content` is optional because the source API occasionally returns incomplete
/// records; those are discarded before migration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDnsRecord {
    /// Provider-specific record identifier.
    #[serde(
        default,
        deserialize_with = "crate::utils::serde_helpers::deserialize_opt_string"
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Zone identifier this record belongs to.
    #[serde(
        default,
        alias = "domainId",
        alias = "domain_id",
        deserialize_with = "crate::utils::serde_helpers::deserialize_opt_string"
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    /// Hostname, relative or fully qualified.
    #[serde(default)]
    pub name: String,
    /// Record type.
    #[serde(rename = "type")]
    pub record_type: DnsRecordType,
    /// Record value.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Time to live in seconds.
    #[serde(
        default,
        deserialize_with = "crate::utils::serde_helpers::deserialize_opt_u32"
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Priority (MX/SRV).
    #[serde(
        default,
        alias = "prio",
        deserialize_with = "crate::utils::serde_helpers::deserialize_opt_u32"
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
}

/// A DNS record in the destination provider's schema.
///
/// Field order is the serialization order, which keeps persisted zone files stable
/// across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Label relative to the zone apex; empty string means the apex itself.
    pub name: String,
    /// Record type.
    #[serde(rename = "type")]
    pub record_type: DnsRecordType,
    /// Record value.
    pub value: String,
    /// Time to live in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Priority (MX/SRV).
    #[serde(default, alias = "priority", skip_serializing_if = "Option::is_none")]
    pub prio: Option<u32>,
}

// ============ Zone Types ============

/// Domain part of a zone creation request, split the way the destination expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneDomain {
    /// Top-level extension (e.g., `"com"`).
    pub extension: String,
    /// Registrable name without extension (e.g., `"example"`).
    pub name: String,
}

/// Request to create a new DNS zone at the destination provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateZoneRequest {
    /// Fully qualified domain name the zone is created for.
    pub domain_name: String,
    /// The zone's domain, split into name and extension.
    pub domain: ZoneDomain,
    /// Every record the new zone should contain.
    pub records: Vec<DnsRecord>,
}

// ============ Client Options ============

/// Connection settings shared by every provider client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// Override of the provider's API base URL (no trailing slash needed).
    pub base_url: Option<String>,
    /// Per-request timeout.
    pub request_timeout: std::time::Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: None,
            request_timeout: std::time::Duration::from_secs(
                crate::http_client::DEFAULT_REQUEST_TIMEOUT_SECS,
            ),
        }
    }
}
