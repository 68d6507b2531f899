//! Core cipher building blocks: the byte shift transform and the
//! serializable parameter set. These are internal primitives consumed by
//! the high-level `api` module.
pub mod cipher;
pub mod params;
