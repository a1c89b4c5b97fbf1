const SCHEMES: [&str; 2] = ["https://", "http://"];
const WWW_PREFIX: &str = "www.";

/// Canonical lookup key for a user-supplied domain.
///
/// Lower-cases the input, strips at most one leading `https://` / `http://`
/// scheme, then the leading `www.` label, and cuts everything from the first
/// `/` onward. Never fails; garbage in yields (possibly empty) garbage out.
///
/// Repeated `www.` labels are all removed so that normalizing an already
/// normalized key is a no-op.
pub fn normalize_domain(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let host = strip_www(strip_scheme(&lowered));

    match host.find('/') {
        Some(idx) => host[..idx].to_string(),
        None => host.to_string(),
    }
}

fn strip_scheme(raw: &str) -> &str {
    SCHEMES
        .iter()
        .find_map(|scheme| raw.strip_prefix(scheme))
        .unwrap_or(raw)
}

fn strip_www(mut rest: &str) -> &str {
    while let Some(stripped) = rest.strip_prefix(WWW_PREFIX) {
        rest = stripped;
    }
    rest
}
