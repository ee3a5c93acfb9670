//! Mapping core between the resource-access domain model and the GridLink
//! wire schema.
//!
//! Inbound requests pass through the credential resolver and the descriptor
//! mappers in [`api::grpc`] before touching the domain model; outbound domain
//! values pass back through the status and property mappers. Every mapping
//! function is a pure, synchronous projection of its input — the only stateful
//! component is the [`registry::ResourceRegistry`] that correlates resource
//! handles across calls by their identity string.

pub mod api;
pub mod config;
pub mod domain;
pub mod registry;

pub use config::BridgeConfig;
