//! Inbound adapters translating external requests into use-case calls.
//!
//! Only HTTP exists today; it lives under [`http`].

pub mod http;
