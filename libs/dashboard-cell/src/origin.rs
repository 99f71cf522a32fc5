use axum::http::{header, HeaderMap, Uri};

pub const CROSS_SITE_NOTICE: &str = "Delete refused: the request did not come from this panel.";

/// False when a browser reports the request as sent from another site.
///
/// Requests without an `Origin` header (non-browser clients) pass. A present
/// `Origin` must name the same authority as `Host`.
pub fn is_same_origin(headers: &HeaderMap) -> bool {
    let fetch_site = headers
        .get("sec-fetch-site")
        .and_then(|value| value.to_str().ok());
    if fetch_site.is_some_and(|site| site.eq_ignore_ascii_case("cross-site")) {
        return false;
    }

    let Some(origin) = headers.get(header::ORIGIN) else {
        return true;
    };

    let origin_authority = origin
        .to_str()
        .ok()
        .and_then(|raw| raw.parse::<Uri>().ok())
        .and_then(|uri| uri.authority().map(|authority| authority.as_str().to_ascii_lowercase()));
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_ascii_lowercase);

    match (origin_authority, host) {
        (Some(origin), Some(host)) => origin == host,
        _ => false,
    }
}
