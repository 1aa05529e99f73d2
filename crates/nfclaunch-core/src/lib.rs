//! NFC Data Exchange Format (NDEF) encoding for app-launch tags in pure Rust.
//!
//! `nfclaunch-core` builds NDEF messages that make a phone launch a given
//! application when it taps the tag: an Android package (Android Application
//! Record), a Windows application (Windows LaunchApp record), or both in one
//! message. Everything is encoded into a caller-owned buffer without
//! allocation, so the crate is usable in `no_std` firmware.
//!
//! # Feature flags
//!
//! - **`std`** (default) — enables `std::error::Error` implementations.
//! - **`serde`** — derives `Serialize`/`Deserialize` on [`ndef::Tnf`] and [`ndef::Framing`].
//! - **`defmt`** — derives `defmt::Format` for embedded logging.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

/// Bounded writer for encoding into a caller-owned buffer.
pub mod encoding;
/// Error types for record construction and launch-app encoding.
pub mod error;
/// Launch-app message encoder and its Android/Windows record helpers.
pub mod launchapp;
/// Generic NDEF record descriptors and the fixed-capacity message builder.
pub mod ndef;

pub use error::{EncodeError, LaunchAppError};
pub use launchapp::{encode_launchapp_message, LaunchAppRequest};
