//! Analyzers for deployment configuration.

pub mod valueslint;
