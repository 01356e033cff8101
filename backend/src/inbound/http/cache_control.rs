//! Shared cache-control policies for HTTP handlers.

use actix_web::http::header::{CACHE_CONTROL, HeaderName};

/// Probe and error responses must never be stored.
pub const NO_STORE: &str = "no-store";

/// Header value letting shared caches keep a response for `max_age` seconds.
pub fn public_max_age(max_age: u32) -> String {
    format!("public, max-age={max_age}")
}

/// Build the cache-control header tuple for cacheable quote responses.
pub fn public_max_age_header(max_age: u32) -> (HeaderName, String) {
    (CACHE_CONTROL, public_max_age(max_age))
}

/// Build the cache-control header tuple for responses that must not be stored.
pub const fn no_store_header() -> (HeaderName, &'static str) {
    (CACHE_CONTROL, NO_STORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(300, "public, max-age=300")]
    #[case(0, "public, max-age=0")]
    fn renders_max_age(#[case] max_age: u32, #[case] expected: &str) {
        let (name, value) = public_max_age_header(max_age);
        assert_eq!(name, CACHE_CONTROL);
        assert_eq!(value, expected);
    }
}
