//! IRI management for ontology entities
//!
//! Provides IRI (Internationalized Resource Identifier) handling with global
//! interning and namespace-prefix support. IRIs identify every entity the
//! engine touches (classes, properties, individuals, datatypes) and the
//! built-ins referenced from rule bodies.
//!
//! ## Features
//!
//! - **String interning**: automatic IRI deduplication via a global cache
//! - **Namespace support**: prefix-based abbreviations (e.g. `sqwrl:select`)
//! - **Memory efficiency**: `Arc`-based sharing and pre-computed hashes

use crate::error::{SwrlError, SwrlResult};
use dashmap::DashMap;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;

/// Upper bound on the global intern cache before new IRIs bypass it
const GLOBAL_IRI_CACHE_LIMIT: usize = 100_000;

/// Global IRI cache for interning IRIs across the entire application
static GLOBAL_IRI_CACHE: Lazy<DashMap<String, Arc<IRI>>> = Lazy::new(DashMap::new);

/// Internationalized Resource Identifier (IRI)
///
/// Represents an IRI as defined in [RFC 3987](https://tools.ietf.org/html/rfc3987).
/// Equality and ordering are by the full IRI string; the optional prefix only
/// affects display.
#[derive(Debug, Clone)]
pub struct IRI {
    /// The full IRI string
    iri: Arc<str>,
    /// Optional namespace prefix for rendering
    prefix: Option<Arc<str>>,
    /// Cache of the hash value for performance
    hash: u64,
}

impl IRI {
    /// Create a new interned IRI from a string
    pub fn new<S: Into<String>>(iri: S) -> SwrlResult<Arc<Self>> {
        let iri_str = iri.into();

        // Minimal validation: reject empty strings and strings without a
        // scheme separator. Prefixed names are expanded before they get here.
        if iri_str.is_empty() {
            return Err(SwrlError::InvalidIri("IRI cannot be empty".to_string()));
        }
        if !iri_str.contains(':') {
            return Err(SwrlError::InvalidIri(format!(
                "IRI must contain ':' separating scheme from path: {iri_str}"
            )));
        }

        if let Some(cached) = GLOBAL_IRI_CACHE.get(&iri_str) {
            return Ok(Arc::clone(cached.value()));
        }

        let hash = {
            let mut hasher = DefaultHasher::new();
            iri_str.hash(&mut hasher);
            hasher.finish()
        };

        let iri = Arc::new(IRI {
            iri: Arc::from(iri_str.as_str()),
            prefix: None,
            hash,
        });

        if GLOBAL_IRI_CACHE.len() < GLOBAL_IRI_CACHE_LIMIT {
            GLOBAL_IRI_CACHE.insert(iri_str, Arc::clone(&iri));
        }

        Ok(iri)
    }

    /// Create a new IRI carrying a namespace prefix for display
    pub fn with_prefix<S: Into<String>, P: Into<String>>(
        iri: S,
        prefix: P,
    ) -> SwrlResult<Arc<Self>> {
        let base = Self::new(iri)?;
        Ok(Arc::new(IRI {
            iri: Arc::clone(&base.iri),
            prefix: Some(Arc::from(prefix.into())),
            hash: base.hash,
        }))
    }

    /// Get the IRI as a string slice
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.iri
    }

    /// Get the pre-computed hash value
    #[inline(always)]
    pub fn hash_value(&self) -> u64 {
        self.hash
    }

    /// Get the namespace prefix if available
    #[inline]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Get the local name part (after the last `#` or `/`)
    #[inline]
    pub fn local_name(&self) -> &str {
        let iri = self.as_str();
        if let Some(hash_pos) = iri.rfind('#') {
            &iri[hash_pos + 1..]
        } else if let Some(slash_pos) = iri.rfind('/') {
            &iri[slash_pos + 1..]
        } else {
            iri
        }
    }

    /// Get the namespace part (up to and including the last `#` or `/`)
    #[inline]
    pub fn namespace(&self) -> &str {
        let iri = self.as_str();
        if let Some(hash_pos) = iri.rfind('#') {
            &iri[..hash_pos + 1]
        } else if let Some(slash_pos) = iri.rfind('/') {
            &iri[..slash_pos + 1]
        } else {
            ""
        }
    }

    /// Check if this IRI is in the XSD namespace
    #[inline(always)]
    pub fn is_xsd(&self) -> bool {
        self.as_str()
            .starts_with("http://www.w3.org/2001/XMLSchema#")
    }

    /// Check if this IRI is in the SWRL built-ins namespace
    #[inline(always)]
    pub fn is_swrl_builtin(&self) -> bool {
        self.as_str()
            .starts_with("http://www.w3.org/2003/11/swrlb#")
    }

    /// Check if this IRI is in the SQWRL namespace
    #[inline(always)]
    pub fn is_sqwrl(&self) -> bool {
        self.as_str()
            .starts_with("http://sqwrl.stanford.edu/ontologies/built-ins/3.4/sqwrl.owl#")
    }

    /// Render as a prefixed name when a prefix is attached, else the full IRI
    pub fn prefixed_name(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}:{}", prefix, self.local_name()),
            None => self.as_str().to_string(),
        }
    }
}

impl PartialEq for IRI {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.iri == other.iri
    }
}

impl Eq for IRI {}

impl PartialOrd for IRI {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IRI {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl Hash for IRI {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl fmt::Display for IRI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = &self.prefix {
            write!(f, "{}:{}", prefix, self.local_name())
        } else {
            write!(f, "{}", self.iri)
        }
    }
}

impl serde::Serialize for IRI {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for IRI {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        IRI::new(s)
            .map(|iri| (*iri).clone())
            .map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}

/// Registry mapping namespace prefixes to namespace IRIs
///
/// Used to expand prefixed names (`sqwrl:select`) into full IRIs and to
/// attach display prefixes to freshly created IRIs. Registration order is
/// preserved so rendering is deterministic.
#[derive(Debug, Clone, Default)]
pub struct PrefixRegistry {
    prefixes: IndexMap<String, String>,
}

impl PrefixRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-loaded with the standard OWL/SWRL namespaces
    pub fn with_standard_prefixes() -> Self {
        let mut registry = Self::new();
        registry.register("owl", crate::constants::namespaces::OWL);
        registry.register("rdf", crate::constants::namespaces::RDF);
        registry.register("rdfs", crate::constants::namespaces::RDFS);
        registry.register("xsd", crate::constants::namespaces::XSD);
        registry.register("swrl", crate::constants::namespaces::SWRL);
        registry.register("swrlb", crate::constants::namespaces::SWRLB);
        registry.register("sqwrl", crate::constants::namespaces::SQWRL);
        registry
    }

    /// Register a namespace prefix
    pub fn register<P: Into<String>, N: Into<String>>(&mut self, prefix: P, namespace: N) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    /// Get the namespace for a prefix
    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(|s| s.as_str())
    }

    /// Create an IRI from a registered prefix and a local name
    pub fn iri_with_prefix(&self, prefix: &str, local_name: &str) -> SwrlResult<Arc<IRI>> {
        let namespace = self
            .namespace(prefix)
            .ok_or_else(|| SwrlError::UnknownPrefix(prefix.to_string()))?;
        IRI::with_prefix(format!("{namespace}{local_name}"), prefix)
    }

    /// Expand a `prefix:localName` form into a full IRI
    ///
    /// Strings without a registered prefix are treated as full IRIs.
    pub fn expand(&self, name: &str) -> SwrlResult<Arc<IRI>> {
        if let Some((prefix, local_name)) = name.split_once(':') {
            if let Some(namespace) = self.namespace(prefix) {
                return IRI::with_prefix(format!("{namespace}{local_name}"), prefix);
            }
        }
        IRI::new(name)
    }

    /// Get all registered prefixes in registration order
    pub fn prefixes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
