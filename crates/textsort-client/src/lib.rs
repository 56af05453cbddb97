//! Textsort classifier client
//!
//! A thin client for a remote online-learning text classifier service.
//!
//! This crate provides:
//! - Data types exchanged with the service (configuration, datums, estimates)
//! - Error types and result handling
//! - The [`ClassifierTransport`] trait that hides the wire protocol
//! - [`ClassifierClient`], a scoped facade over one connection

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::ClassifierClient;
pub use error::{Error, Result};
pub use transport::{ClassifierTransport, HttpTransport};
pub use types::{ConfigData, Datum, Estimate, LabeledDatum};
