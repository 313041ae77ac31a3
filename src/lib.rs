//! Core library for the riasec-tools command line application.
//!
//! The library exposes high-level orchestration helpers that power the
//! command-line interface as well as the integration tests. The modules are
//! structured to keep responsibilities narrow and composable: the data model
//! lives inside [`riasec::tools::model`], the built-in question bank in
//! [`riasec::tools::catalog`], the career lookup table in
//! [`riasec::tools::careers`], the row flattening logic in
//! [`riasec::tools::flatten`], CSV adapters under [`riasec::tools::io`], and
//! the pipeline orchestration under [`riasec::tools::sync`].

pub mod riasec;

pub use riasec::tools::{Result, ToolError, careers, catalog, error, flatten, io, model, sync};
