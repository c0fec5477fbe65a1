use serde::Serialize;

/// One source where the queried address was reported exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breach {
    /// Source/site name, `"Unknown"` when upstream omitted it.
    pub name: String,
    /// Breach date as upstream reports it, `"Unknown"` when omitted.
    pub date: String,
    /// Exposed data categories. Upstream reports these per query, so every
    /// breach of one lookup carries the same list.
    #[serde(rename = "exposed_data")]
    pub exposed_fields: Vec<String>,
}

/// Normalized result of a successful lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupResult {
    /// The queried address, unchanged.
    pub email: String,
    /// Number of sources reporting exposure.
    pub breach_count: u64,
    /// One entry per upstream source, in upstream order.
    pub breaches: Vec<Breach>,
    /// The unmodified upstream payload.
    pub raw: serde_json::Value,
}

impl LookupResult {
    /// True when nothing should be listed for this address.
    pub fn is_clean(&self) -> bool {
        self.breach_count == 0 || self.breaches.is_empty()
    }
}
