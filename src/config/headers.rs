//! Outgoing HTTP header set.
//!
//! Every request to the portal carries the same fixed browser-like header
//! set; authenticated requests additionally carry the session cookie. The
//! portal checks none of these individually, but the combination matches what
//! its login form sends from a real browser.

use reqwest::RequestBuilder;

use crate::config::constants::{SESSION_COOKIE, USER_AGENT};

/// Accept header value.
pub const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7";
/// Connection header value.
pub const CONNECTION: &str = "keep-alive";
/// Content-Type header value. Sent on every request, GETs included; the
/// portal's pages are only ever fetched or posted to as form submissions.
pub const CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
/// Referer header value (the portal root).
pub const REFERER: &str = "https://my.tiu.edu.iq/";

/// Applies the fixed portal headers to a `reqwest::RequestBuilder`.
///
/// When `sid` is present, a `Cookie: PHPSESSID=<sid>` header is attached so
/// the request runs inside the authenticated session.
pub(crate) fn apply_session_headers(
    builder: RequestBuilder,
    sid: Option<&str>,
) -> RequestBuilder {
    let builder = builder
        .header(reqwest::header::ACCEPT, ACCEPT)
        .header(reqwest::header::CONNECTION, CONNECTION)
        .header(reqwest::header::CONTENT_TYPE, CONTENT_TYPE)
        .header(reqwest::header::REFERER, REFERER)
        .header(reqwest::header::USER_AGENT, USER_AGENT);

    match sid {
        Some(sid) => builder.header(
            reqwest::header::COOKIE,
            format!("{}={}", SESSION_COOKIE, sid),
        ),
        None => builder,
    }
}
