//! Correlation engine: package provenance tracking and vulnerability/bug
//! matching for Debian-based container images.
//!
//! Everything in this layer is pure business logic. External data (package
//! catalog, vulnerability feed, bug feed, dpkg listings) arrives fully
//! materialized through the ports layer before correlation starts.

pub mod domain;
pub mod services;
