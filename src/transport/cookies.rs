//! Opaque cookie passthrough.
//!
//! Cookies captured by the client travel with the wrapper verbatim; the
//! policy layer exposes them but never interprets their contents.

use cookie::Cookie;

/// Cookies captured alongside a response.
#[derive(Debug, Clone, Default)]
pub struct CookieJar {
    cookies: Vec<Cookie<'static>>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cookie to the jar.
    pub fn add(&mut self, cookie: Cookie<'static>) {
        self.cookies.push(cookie);
    }

    /// First cookie with the given name, if any.
    pub fn get(&self, name: &str) -> Option<&Cookie<'static>> {
        self.cookies.iter().find(|c| c.name() == name)
    }

    /// Iterate over all cookies in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Cookie<'static>> {
        self.cookies.iter()
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

impl FromIterator<Cookie<'static>> for CookieJar {
    fn from_iter<I: IntoIterator<Item = Cookie<'static>>>(iter: I) -> Self {
        Self {
            cookies: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_finds_first_match() {
        let jar: CookieJar = [
            Cookie::new("session", "abc"),
            Cookie::new("session", "def"),
        ]
        .into_iter()
        .collect();

        assert_eq!(jar.len(), 2);
        assert_eq!(jar.get("session").map(Cookie::value), Some("abc"));
        assert!(jar.get("missing").is_none());
    }
}
