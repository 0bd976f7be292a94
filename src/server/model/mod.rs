//! Operation-specific parameter models passed between layers.

pub mod recording;
