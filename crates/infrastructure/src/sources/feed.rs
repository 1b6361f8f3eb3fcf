use serde_json::Value;
use vetted_dns_domain::RawCandidate;

/// Parses the public-dns.info nameserver feed.
///
/// The feed is a JSON array of objects. Entries that are not objects are
/// skipped; `ip` and `reliability` are kept as text whether the feed encodes
/// them as strings or numbers, and validated later by the candidate builder.
pub fn parse_candidate_records(bytes: &[u8]) -> Result<Vec<RawCandidate>, serde_json::Error> {
    let entries: Vec<Value> = serde_json::from_slice(bytes)?;

    Ok(entries
        .iter()
        .filter_map(Value::as_object)
        .map(|entry| RawCandidate {
            ip: entry.get("ip").and_then(field_text),
            reliability: entry.get("reliability").and_then(field_text),
        })
        .collect())
}

fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
