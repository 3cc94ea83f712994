//! This crate contains the `feedsub` CLI.
//!
//! The binary registers a feed source: given a feed name, a feed URL and an
//! optional category, it inserts one row into the `FEED_SOURCE` table of the
//! configured postgres database.

#![deny(missing_docs)]

pub mod cmd;
pub mod config;
pub mod db;
pub mod error;
pub mod mdl;
pub mod svc;
pub mod trace;
