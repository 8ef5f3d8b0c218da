//! Custom Extractors
//!
//! Axum extractors for request identity.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderName, HeaderValue},
};
use axum_extra::headers::{self, Header, HeaderMapExt};

static USER: HeaderName = HeaderName::from_static("user");

/// The `user` header naming the requesting participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserHeader(pub String);

impl Header for UserHeader {
    fn name() -> &'static HeaderName {
        &USER
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        let value = values.next().ok_or_else(headers::Error::invalid)?;
        let name = std::str::from_utf8(value.as_bytes()).map_err(|_| headers::Error::invalid())?;
        Ok(UserHeader(name.to_string()))
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        if let Ok(value) = HeaderValue::from_str(&self.0) {
            values.extend(std::iter::once(value));
        }
    }
}

/// Identity of the caller taken from the `user` header.
///
/// A missing or undecodable header yields an empty identity, which sees only
/// public messages and owns no participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity(pub String);

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let name = match parts.headers.typed_try_get::<UserHeader>() {
            Ok(header) => header.map(|UserHeader(name)| name).unwrap_or_default(),
            Err(_) => {
                tracing::debug!("Ignoring undecodable user header");
                String::new()
            }
        };

        Ok(Identity(name))
    }
}
