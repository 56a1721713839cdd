/*
 * Copyright (c) 2025 Hydrus Client API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::ApiClient;
use crate::errors::HydrusError;
use crate::macros::single_param;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct CookieManager {
    api_client: Arc<ApiClient>,
}

impl CookieManager {
    pub(crate) fn new(api_client: Arc<ApiClient>) -> Self {
        Self { api_client }
    }

    /// Gets the cookies the client holds for `domain`
    pub async fn cookies(&self, domain: &str) -> Result<CookiesResponse, HydrusError> {
        if domain.trim().is_empty() {
            return Err(HydrusError::InvalidArgument(
                "A cookie domain is required".to_string(),
            ));
        }
        self.api_client
            .get::<CookiesResponse>(
                "manage_cookies/get_cookies",
                Some(&single_param!("domain", domain)),
            )
            .await
    }

    /// Sets cookies. A cookie with no value is removed.
    pub async fn set_cookies(&self, cookies: &[Cookie]) -> Result<(), HydrusError> {
        self.api_client
            .post_empty(
                "manage_cookies/set_cookies",
                &single_param!("cookies", cookies),
            )
            .await
    }

    pub async fn delete_cookie(
        &self,
        name: &str,
        domain: &str,
        path: &str,
    ) -> Result<(), HydrusError> {
        let cookie = Cookie {
            name: name.to_string(),
            value: None,
            domain: domain.to_string(),
            path: path.to_string(),
            expires: None,
        };
        self.set_cookies(&[cookie]).await
    }
}

/// A cookie in the client's session manager.
///
/// On the wire this is the array `[name, value, domain, path, expires]`, with
/// `expires` as a unix timestamp or null for a session cookie.
#[derive(Debug, Clone, PartialEq)]
pub struct Cookie {
    pub name: String,
    pub value: Option<String>,
    pub domain: String,
    pub path: String,
    pub expires: Option<i64>,
}

impl Cookie {
    pub fn new(name: &str, value: &str, domain: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            value: Some(value.to_string()),
            domain: domain.to_string(),
            path: path.to_string(),
            expires: None,
        }
    }
}

impl Serialize for Cookie {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(5)?;
        tup.serialize_element(&self.name)?;
        tup.serialize_element(&self.value)?;
        tup.serialize_element(&self.domain)?;
        tup.serialize_element(&self.path)?;
        tup.serialize_element(&self.expires)?;
        tup.end()
    }
}

struct CookieVisitor;

impl<'de> Visitor<'de> for CookieVisitor {
    type Value = Cookie;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an array of [name, value, domain, path, expires]")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Cookie, A::Error> {
        let name = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let value = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        let domain = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(2, &self))?;
        let path = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(3, &self))?;
        // Session cookies may leave out the expiry entirely
        let expires = seq.next_element::<Option<f64>>()?.flatten().map(|e| e as i64);
        Ok(Cookie {
            name,
            value,
            domain,
            path,
            expires,
        })
    }
}

impl<'de> Deserialize<'de> for Cookie {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(CookieVisitor)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CookiesResponse {
    #[serde(default)]
    pub cookies: Vec<Cookie>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cookie_writes_array() {
        let mut cookie = Cookie::new("PHPSESSID", "07669eb2a1a6e840", ".somesite.com", "/");
        assert_eq!(
            serde_json::to_value(&cookie).unwrap(),
            json!(["PHPSESSID", "07669eb2a1a6e840", ".somesite.com", "/", null])
        );
        cookie.expires = Some(1627327719);
        assert_eq!(
            serde_json::to_value(&cookie).unwrap(),
            json!(["PHPSESSID", "07669eb2a1a6e840", ".somesite.com", "/", 1627327719])
        );
    }

    #[test]
    fn cookie_reads_short_and_full_arrays() {
        let cookie: Cookie =
            serde_json::from_value(json!(["a", "b", ".example.com", "/"])).unwrap();
        assert_eq!(cookie.expires, None);
        assert_eq!(cookie.value.as_deref(), Some("b"));

        let cookie: Cookie =
            serde_json::from_value(json!(["a", "b", ".example.com", "/", 1627327719.0])).unwrap();
        assert_eq!(cookie.expires, Some(1627327719));
    }

    #[test]
    fn cookie_rejects_truncated_array() {
        assert!(serde_json::from_value::<Cookie>(json!(["a", "b"])).is_err());
    }
}
