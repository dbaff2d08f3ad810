//! HTTP client layer: `CheevosHttp` and query parameter building.

pub mod client;
pub mod params;

pub use client::CheevosHttp;
pub use params::Params;
