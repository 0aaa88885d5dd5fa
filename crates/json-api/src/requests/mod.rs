//! Shared request/response payloads.

pub(crate) mod personalization;
