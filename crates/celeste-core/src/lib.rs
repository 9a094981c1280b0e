#![allow(clippy::must_use_candidate)]

//! Shared vocabulary for Celeste capability packages
//!
//! Provider identities, capability categories, the model catalog and the
//! normalized audio result returned by speech backends.

mod artifact;
mod capability;
mod model;
mod provider;

pub use artifact::{AudioArtifact, DEFAULT_CHANNELS, DEFAULT_FORMAT};
pub use capability::Capability;
pub use model::{MODEL_CATALOG, Model, default_model, get_model, list_models};
pub use provider::Provider;
