//! Public library API for querying decoded JSON, XML, and CSV documents.

/// Value model, format decoders, path queries, and template helpers.
pub mod doc;
