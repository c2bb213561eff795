//! Example hosts used by tabtrap demos.

/// Form gym example host.
pub mod formgym;
