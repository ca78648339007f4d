//! ckbscan - explore the CKB blockchain through an explorer API.
//!
//! The crate is organised the same way the binary uses it:
//!
//! - [`domain`] - typed entities and the error type
//! - [`client`] - the [`client::ExplorerApi`] fetch contract and its HTTP client
//! - [`cache`] - advisory on-disk snapshots keyed by [`cache::CachedKey`]
//! - [`state`] - the action store, routes and navigation history
//! - [`service`] - search resolution, chart normalization and detail loaders
//! - [`format`] - display helpers shared by the CLI

pub mod cache;
pub mod client;
pub mod config;
pub mod constants;
pub mod domain;
pub mod format;
pub mod paths;
pub mod service;
pub mod state;

#[cfg(test)]
pub(crate) mod test_utils;
