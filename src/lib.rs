//! Read-only queries over an in-memory collection of road accident records.
//!
//! [`base::Aggregator`] holds the collection and answers lookups by id,
//! bounding box scans, frequency counts and groupings. The remaining modules
//! load a collection from disk and configure the command line front end.

pub mod base;
