//! Patching a real models file on disk

use std::fs;
use std::path::PathBuf;

use bridge_desktop::StdFileSystem;
use core_models::{patch_models_file, PatchOutcome};

const UPSTREAM: &str = r#"export const MODELS = {
    "vercel-ai-gateway": {
        "xai/grok-3": {
            id: "xai/grok-3",
            name: "Grok 3 Beta",
            api: "anthropic-messages",
            provider: "vercel-ai-gateway",
            baseUrl: "https://ai-gateway.vercel.sh",
            reasoning: false,
        },
    },
};
"#;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("core-models-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(dir.join("dist")).unwrap();
    dir
}

#[test]
fn test_patch_then_skip_on_disk() {
    let root = scratch_dir("patch");
    let file = root.join("dist/models.generated.js");
    fs::write(&file, UPSTREAM).unwrap();

    let fs_access = StdFileSystem::with_base_dir(&root);
    let relative = PathBuf::from("dist/models.generated.js");

    let first = patch_models_file(&fs_access, &relative);
    assert_eq!(
        first,
        PatchOutcome::Patched {
            applied: vec!["xai/grok-3"]
        }
    );

    let written = fs::read_to_string(&file).unwrap();
    assert!(written.contains("provider: \"xai\""));
    assert!(written.contains("baseUrl: \"https://api.x.ai/v1\""));
    assert!(written.contains("reasoning: false"));

    let second = patch_models_file(&fs_access, &relative);
    assert_eq!(second, PatchOutcome::Skipped);
    assert_eq!(fs::read_to_string(&file).unwrap(), written);

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_missing_file_reports_failure() {
    let root = scratch_dir("missing");
    let fs_access = StdFileSystem::with_base_dir(&root);

    let outcome = patch_models_file(&fs_access, &root.join("dist/models.generated.js"));
    assert!(outcome.is_failed());
    assert!(outcome.message().starts_with("Could not patch models: "));

    fs::remove_dir_all(&root).unwrap();
}
