//! xAI model routing patch.
//!
//! The upstream model catalogue ships the Grok models routed through the
//! Vercel AI gateway with the Anthropic messages API, which breaks tool
//! calling. The patch reroutes them to `api.x.ai` with the OpenAI completions
//! API. Entries are rewritten in place; every other byte of the file is kept.

use std::ops::Range;
use std::path::Path;

use bridge_traits::FileSystemAccess;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{ModelsError, Result};
use crate::locate::{find_object_bodies, string_properties};

const UPSTREAM_PROVIDER: &str = "vercel-ai-gateway";
const UPSTREAM_API: &str = "anthropic-messages";

/// Replacement routing for one catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelRoutePatch {
    /// Key of the entry in the catalogue object
    pub key: &'static str,
    pub name: &'static str,
    pub api: &'static str,
    pub provider: &'static str,
    pub base_url: &'static str,
}

impl ModelRoutePatch {
    /// Property names and their replacement values, in rewrite order.
    fn fields(&self) -> [(&'static str, &'static str); 4] {
        [
            ("name", self.name),
            ("api", self.api),
            ("provider", self.provider),
            ("baseUrl", self.base_url),
        ]
    }
}

pub const XAI_ROUTE_PATCHES: &[ModelRoutePatch] = &[
    ModelRoutePatch {
        key: "xai/grok-3",
        name: "Grok 3",
        api: "openai-completions",
        provider: "xai",
        base_url: "https://api.x.ai/v1",
    },
    ModelRoutePatch {
        key: "xai/grok-3-mini",
        name: "Grok 3 Mini",
        api: "openai-completions",
        provider: "xai",
        base_url: "https://api.x.ai/v1",
    },
];

/// Result of patching an in-memory source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub content: String,
    /// Keys of the entries that were rewritten, in table order
    pub applied: Vec<&'static str>,
}

impl PatchReport {
    pub fn is_patched(&self) -> bool {
        !self.applied.is_empty()
    }
}

/// Replacement ranges for one entry body, or `None` if it is not in upstream
/// form. Ranges are absolute offsets into `source`.
fn body_edits(
    source: &str,
    body: Range<usize>,
    patch: &ModelRoutePatch,
) -> Option<Vec<(Range<usize>, &'static str)>> {
    let text = &source[body.clone()];
    let properties = string_properties(text)?;

    let lookup = |field: &str| properties.iter().find(|p| p.name(text) == field);

    let provider = lookup("provider")?.value(text);
    let api = lookup("api")?.value(text);
    if provider != UPSTREAM_PROVIDER || api != UPSTREAM_API {
        debug!(key = patch.key, provider, api, "Entry not in upstream form");
        return None;
    }

    patch
        .fields()
        .into_iter()
        .map(|(field, value)| {
            let property = lookup(field)?;
            Some((
                body.start + property.value.start..body.start + property.value.end,
                value,
            ))
        })
        .collect()
}

/// Rewrite every upstream-form entry stored under the patch key, or `None`
/// if there is none.
fn apply_patch(source: &str, patch: &ModelRoutePatch) -> Option<String> {
    let mut edits: Vec<_> = find_object_bodies(source, patch.key)
        .into_iter()
        .filter_map(|body| body_edits(source, body, patch))
        .flatten()
        .collect();
    if edits.is_empty() {
        return None;
    }
    edits.sort_by_key(|(range, _)| std::cmp::Reverse(range.start));

    let mut patched = source.to_string();
    for (range, value) in edits {
        patched.replace_range(range, value);
    }
    Some(patched)
}

/// Apply [`XAI_ROUTE_PATCHES`] to the text of the models module.
///
/// Entries that are absent, already rerouted or shaped differently are left
/// alone. Applying the patch twice is a no-op the second time.
///
/// # Examples
///
/// ```
/// use core_models::patch_models_source;
///
/// let report = patch_models_source("export const MODELS = {};");
/// assert!(report.applied.is_empty());
/// ```
pub fn patch_models_source(source: &str) -> PatchReport {
    let mut content = source.to_string();
    let mut applied = Vec::new();

    for patch in XAI_ROUTE_PATCHES {
        if let Some(patched) = apply_patch(&content, patch) {
            debug!(key = patch.key, provider = patch.provider, "Rerouted model entry");
            content = patched;
            applied.push(patch.key);
        }
    }

    PatchReport { content, applied }
}

/// Outcome of the best-effort file patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PatchOutcome {
    /// At least one entry was rewritten and the file saved
    Patched { applied: Vec<&'static str> },
    /// Nothing matched; the file was not written
    Skipped,
    /// Reading or writing failed
    Failed { message: String },
}

impl PatchOutcome {
    /// One-line status for the console.
    pub fn message(&self) -> String {
        match self {
            PatchOutcome::Patched { .. } => {
                "Patched xAI model routing (openai-completions → api.x.ai)".to_string()
            }
            PatchOutcome::Skipped => {
                "Models already patched or format changed — skipping".to_string()
            }
            PatchOutcome::Failed { message } => format!("Could not patch models: {}", message),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, PatchOutcome::Failed { .. })
    }
}

fn try_patch_models_file(fs: &dyn FileSystemAccess, path: &Path) -> Result<PatchReport> {
    let path = fs.resolve(path)?;
    if !fs.exists(&path)? {
        return Err(ModelsError::NotFound(path.display().to_string()));
    }
    if fs.metadata(&path)?.is_directory {
        return Err(ModelsError::NotAFile(path.display().to_string()));
    }

    let source = fs.read_to_string(&path)?;
    let report = patch_models_source(&source);
    if report.is_patched() {
        fs.write_string(&path, &report.content)?;
    }
    Ok(report)
}

/// Patch the models module at `path` through `fs`.
///
/// Never fails: I/O problems are reported as [`PatchOutcome::Failed`] so the
/// surrounding install step keeps going.
pub fn patch_models_file(fs: &dyn FileSystemAccess, path: &Path) -> PatchOutcome {
    match try_patch_models_file(fs, path) {
        Ok(report) if report.is_patched() => {
            info!(applied = ?report.applied, "Patched model routing");
            PatchOutcome::Patched {
                applied: report.applied,
            }
        }
        Ok(_) => {
            info!("No model entries to patch");
            PatchOutcome::Skipped
        }
        Err(e) => {
            warn!(error = %e, "Could not patch models");
            PatchOutcome::Failed {
                message: e.to_string(),
            }
        }
    }
}
