//! Speech provider implementations (adapters)

pub mod google;
