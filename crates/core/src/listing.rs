//! Response envelope shared by the listing and search paths.
//!
//! Listing returns `{page, limit, total, data}`; search returns `{data}`.
//! Clients tell the two apart by the presence of `total`. [`Listing`] is the
//! single place that discriminant lives: it serializes to exactly those two
//! shapes and, when deserializing, picks `Paginated` whenever `total` is
//! present. A `total` without `page` and `limit` is rejected.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::pagination::page_count;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Listing<T> {
    /// One ordered page of the full collection.
    Paginated {
        page: i64,
        limit: i64,
        /// Size of the whole collection, not of `data`.
        total: i64,
        data: Vec<T>,
    },
    /// Every record matching a search, unpaginated.
    Unpaginated { data: Vec<T> },
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Listing<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Envelope<T> {
            page: Option<i64>,
            limit: Option<i64>,
            total: Option<i64>,
            data: Vec<T>,
        }

        let Envelope {
            page,
            limit,
            total,
            data,
        } = Envelope::deserialize(deserializer)?;

        match total {
            Some(total) => Ok(Self::Paginated {
                page: page.ok_or_else(|| D::Error::missing_field("page"))?,
                limit: limit.ok_or_else(|| D::Error::missing_field("limit"))?,
                total,
                data,
            }),
            None => Ok(Self::Unpaginated { data }),
        }
    }
}

impl<T> Listing<T> {
    pub fn data(&self) -> &[T] {
        match self {
            Self::Paginated { data, .. } | Self::Unpaginated { data } => data,
        }
    }

    pub fn into_data(self) -> Vec<T> {
        match self {
            Self::Paginated { data, .. } | Self::Unpaginated { data } => data,
        }
    }

    pub fn is_paginated(&self) -> bool {
        matches!(self, Self::Paginated { .. })
    }

    /// Number of records the result set represents: `total` for a page,
    /// `data.len()` for a full result set.
    pub fn total_len(&self) -> i64 {
        match self {
            Self::Paginated { total, .. } => *total,
            Self::Unpaginated { data } => data.len() as i64,
        }
    }

    /// Number of pages a client should offer. Always at least 1; a full
    /// result set is a single page.
    pub fn page_count(&self) -> i64 {
        match self {
            Self::Paginated { total, limit, .. } => page_count(*total, *limit),
            Self::Unpaginated { .. } => 1,
        }
    }
}
