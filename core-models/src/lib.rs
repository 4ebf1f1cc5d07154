//! # Model Catalogue Patching
//!
//! Post-install fix-ups for the generated model catalogue shipped by the
//! agent's model package.
//!
//! The catalogue is a generated JavaScript module. [`patch_models_source`]
//! rewrites the routing of known-bad entries in memory and
//! [`patch_models_file`] applies it to a file through an injected
//! [`FileSystemAccess`](bridge_traits::FileSystemAccess). The file variant is
//! best-effort: failures come back as [`PatchOutcome::Failed`] and never abort
//! the caller.

pub mod error;
pub mod locate;
pub mod patch;

pub use error::{ModelsError, Result};
pub use patch::{
    patch_models_file, patch_models_source, ModelRoutePatch, PatchOutcome, PatchReport,
    XAI_ROUTE_PATCHES,
};
