//! Client module - typestate admin client.
//!
//! `CivicClient<Anonymous>` can read the public issue feed and log in;
//! `CivicClient<Authenticated>` additionally owns an [`AdminSession`].
//!
//! [`AdminSession`]: crate::AdminSession

mod anonymous;
mod authenticated;
mod common;

pub use common::CivicClient;
