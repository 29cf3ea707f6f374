// 🔗 Prefill Parser - Service Defaults from Query Parameters
// Supports both ?service=UI%2FUX and repeated ?services=Web%20Dev&services=Branding

use crate::schema::Service;

/// Extract service prefills from parsed query parameters.
///
/// The singular `service` key contributes its first value, then every
/// repeated `services` value follows in original order. Unknown values
/// are dropped silently; duplicates keep their first occurrence.
pub fn parse_service_prefills(pairs: &[(String, String)]) -> Vec<Service> {
    let single = pairs
        .iter()
        .find(|(key, _)| key == "service")
        .map(|(_, value)| value.as_str());

    let multi = pairs
        .iter()
        .filter(|(key, _)| key == "services")
        .map(|(_, value)| value.as_str());

    let mut prefills = Vec::new();
    for raw in single.into_iter().chain(multi) {
        if let Some(service) = Service::parse(raw) {
            if !prefills.contains(&service) {
                prefills.push(service);
            }
        }
    }
    prefills
}

/// Split a raw query string into decoded key/value pairs.
///
/// Accepts an optional leading `?`. A token without `=` becomes a pair
/// with an empty value. `+` decodes to space; tokens with malformed
/// percent escapes are kept as-is.
pub fn parse_query(raw: &str) -> Vec<(String, String)> {
    let raw = raw.strip_prefix('?').unwrap_or(raw);

    raw.split('&')
        .filter(|token| !token.is_empty())
        .map(|token| match token.split_once('=') {
            Some((key, value)) => (decode_component(key), decode_component(value)),
            None => (decode_component(token), String::new()),
        })
        .collect()
}

fn decode_component(component: &str) -> String {
    let plus_decoded = component.replace('+', " ");
    match urlencoding::decode(&plus_decoded) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => plus_decoded,
    }
}

// ============================================================================
// TESTS
// ============================================================================
