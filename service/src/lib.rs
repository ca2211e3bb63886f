//! Service contains the business logic of the application.

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;

use std::time::Duration;

use derive_more::Debug;
use secrecy::{ExposeSecret as _, SecretString};

pub use self::{command::Command, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// [JWT] encoding key.
    ///
    /// [JWT]: https://datatracker.ietf.org/doc/html/rfc7519
    #[debug(skip)]
    pub jwt_encoding_key: jsonwebtoken::EncodingKey,

    /// [JWT] decoding key.
    ///
    /// [JWT]: https://datatracker.ietf.org/doc/html/rfc7519
    #[debug(skip)]
    pub jwt_decoding_key: jsonwebtoken::DecodingKey,

    /// [`Duration`] a user session stays valid for.
    pub session_ttl: Duration,
}

impl Config {
    /// Creates a new [`Config`] deriving [JWT] keys from the provided
    /// `jwt_secret`.
    ///
    /// [JWT]: https://datatracker.ietf.org/doc/html/rfc7519
    #[must_use]
    pub fn new(jwt_secret: &SecretString, session_ttl: Duration) -> Self {
        Self {
            jwt_encoding_key: jsonwebtoken::EncodingKey::from_secret(
                jwt_secret.expose_secret().as_bytes(),
            ),
            jwt_decoding_key: jsonwebtoken::DecodingKey::from_secret(
                jwt_secret.expose_secret().as_bytes(),
            ),
            session_ttl,
        }
    }
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<S> {
    /// Configuration of this [`Service`].
    config: Config,

    /// Record store of this [`Service`].
    store: S,
}

impl<S> Service<S> {
    /// Creates a new [`Service`] with the provided parameters.
    pub fn new(config: Config, store: S) -> Self {
        Self { config, store }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the record store of this [`Service`].
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
