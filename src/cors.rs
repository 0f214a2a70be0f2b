use http::Method;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Local development origins for the site and its admin panel.
pub const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:3000,http://127.0.0.1:3000,http://localhost:5173,http://127.0.0.1:5173";

/// True if `origin` is allowed by the configured list.
///
/// Entries match exactly, `"*"` allows everything and `"*.example.com"`
/// allows any subdomain of `example.com` over either scheme.
#[must_use]
pub fn origin_allowed(allowed: &[String], origin: &str) -> bool {
    allowed.iter().any(|entry| {
        if entry == "*" {
            return true;
        }
        if let Some(domain) = entry.strip_prefix("*.") {
            let host = origin
                .strip_prefix("https://")
                .or_else(|| origin.strip_prefix("http://"))
                .unwrap_or(origin);
            return host
                .strip_suffix(domain)
                .is_some_and(|sub| sub.ends_with('.') && sub.len() > 1);
        }
        entry == origin
    })
}

/// Build a CORS layer for gRPC-Web with the given allowed origins.
pub fn build_cors_layer(cors_origins: Vec<String>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            origin
                .to_str()
                .is_ok_and(|o| origin_allowed(&cors_origins, o))
        }))
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .expose_headers(Any)
}
