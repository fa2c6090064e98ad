//! TE statement synthesis (deterministic text generation).

pub mod emitter;

pub use emitter::translate;
