// Copyright 2025 the Point Spaces Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors returned when constructing a space.

use thiserror::Error;

/// Construction error.
///
/// Inserts and queries are infallible; only configuration is validated.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A constructor parameter is out of range.
    #[error("invalid configuration: `{parameter}` {reason}")]
    InvalidConfiguration {
        /// Name of the rejected parameter.
        parameter: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}

impl Error {
    pub(crate) const fn invalid(parameter: &'static str, reason: &'static str) -> Self {
        Self::InvalidConfiguration { parameter, reason }
    }
}

/// Result alias for fallible constructors.
pub type Result<T> = core::result::Result<T, Error>;
