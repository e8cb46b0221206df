// Library-level coverage of the individual setup operations, driven through
// the public API against tempdir sandboxes.
use fitout::{blocks, cleanup_authoring_content, manifest, package};
use std::{collections::BTreeMap, fs, path::Path};
use tempfile::TempDir;

fn snapshot(root: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut tree = BTreeMap::new();

    for entry in walkdir::WalkDir::new(root) {
        let entry = entry.unwrap();
        if entry.depth() == 0 {
            continue;
        }

        let rel = entry
            .path()
            .strip_prefix(root)
            .unwrap()
            .to_string_lossy()
            .into_owned();

        let content = if entry.file_type().is_file() {
            fs::read(entry.path()).unwrap()
        } else {
            Vec::new()
        };

        tree.insert(rel, content);
    }

    tree
}

#[test]
fn cleanup_twice_matches_cleanup_once() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    fs::create_dir(root.join("models")).unwrap();
    fs::write(root.join("models/_section.json"), "{}\n").unwrap();
    fs::create_dir_all(root.join("blocks/hero")).unwrap();
    fs::write(root.join("blocks/hero/_hero.json"), "{}\n").unwrap();
    fs::write(
        root.join("blocks/hero/hero.js"),
        "moveInstrumentation(a, b);\nconst kept = true;\n",
    )
    .unwrap();
    fs::write(root.join("paths.json"), "{}\n").unwrap();
    fs::write(root.join("fstab.yaml.xwalk-sample"), "mountpoints: {}\n").unwrap();
    fs::write(
        root.join("package.json"),
        r#"{"scripts":{"build:json":"x","start":"y"}}"#,
    )
    .unwrap();

    cleanup_authoring_content(root).unwrap();
    let once = snapshot(root);

    cleanup_authoring_content(root).unwrap();
    assert_eq!(once, snapshot(root));
}

#[test]
fn cleanup_of_an_empty_root_succeeds() {
    let tmp = TempDir::new().unwrap();

    cleanup_authoring_content(tmp.path()).unwrap();

    assert!(snapshot(tmp.path()).is_empty());
}

#[test]
fn strip_drops_exactly_the_marker_lines_and_keeps_order() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let block = root.join("blocks/quote");
    fs::create_dir_all(&block).unwrap();

    let script = "import { moveInstrumentation } from '../../scripts/scripts.js';\n\
                  const first = 1;\n\
                  moveInstrumentation(row, li);\n\
                  const second = 2;\n\
                  instrumented.moveInstrumentation(col, span);\n\
                  const third = 3;\n";
    fs::write(block.join("quote.js"), script).unwrap();

    blocks::strip_instrumentation(root).unwrap();

    assert_eq!(
        fs::read_to_string(block.join("quote.js")).unwrap(),
        "const first = 1;\nconst second = 2;\nconst third = 3;\n"
    );
}

#[test]
fn strip_preserves_a_missing_trailing_newline() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let block = root.join("blocks/quote");
    fs::create_dir_all(&block).unwrap();

    fs::write(
        block.join("quote.js"),
        "const kept = 1;\nmoveInstrumentation(a, b);\nconst last = 2;",
    )
    .unwrap();

    blocks::strip_instrumentation(root).unwrap();

    assert_eq!(
        fs::read_to_string(block.join("quote.js")).unwrap(),
        "const kept = 1;\nconst last = 2;"
    );
}

#[test]
fn script_without_markers_is_left_byte_identical() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let block = root.join("blocks/cards");
    fs::create_dir_all(&block).unwrap();

    let content = "export default function decorate(block) {}\n";
    let path = block.join("cards.js");
    fs::write(&path, content).unwrap();
    let modified = fs::metadata(&path).unwrap().modified().unwrap();

    blocks::strip_instrumentation(root).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), content);
    assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), modified);
}

#[test]
fn only_name_matched_descriptors_of_immediate_subdirectories_are_deleted() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::create_dir_all(root.join("blocks/hero/nested")).unwrap();
    fs::write(root.join("blocks/hero/_hero.json"), "{}\n").unwrap();
    fs::write(root.join("blocks/hero/_other.json"), "{}\n").unwrap();
    fs::write(root.join("blocks/hero/nested/_nested.json"), "{}\n").unwrap();

    blocks::delete_block_descriptors(root).unwrap();

    assert!(!root.join("blocks/hero/_hero.json").exists());
    assert!(root.join("blocks/hero/_other.json").exists());
    assert!(root.join("blocks/hero/nested/_nested.json").exists());
}

#[test]
fn replace_manifest_promotes_and_consumes_the_sample() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::write(root.join("fstab.yaml"), "base\n").unwrap();
    fs::write(root.join(manifest::DA_SAMPLE), "da variant\n").unwrap();

    manifest::replace_manifest(root, manifest::DA_SAMPLE).unwrap();

    assert_eq!(
        fs::read_to_string(root.join(manifest::MANIFEST_FILE)).unwrap(),
        "da variant\n"
    );
    assert!(!root.join(manifest::DA_SAMPLE).exists());
}

#[test]
fn replace_manifest_tolerates_a_missing_sample() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::write(root.join("fstab.yaml"), "base\n").unwrap();

    manifest::replace_manifest(root, manifest::DA_SAMPLE).unwrap();

    assert_eq!(
        fs::read_to_string(root.join(manifest::MANIFEST_FILE)).unwrap(),
        "base\n"
    );
    assert!(!root.join(manifest::DA_SAMPLE).exists());
}

#[test]
fn build_json_scripts_are_pruned_and_others_kept() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::write(
        root.join("package.json"),
        r#"{"scripts":{"build:json:a":"x","build":"y"}}"#,
    )
    .unwrap();

    package::prune_build_scripts(root).unwrap();

    assert_eq!(
        fs::read_to_string(root.join("package.json")).unwrap(),
        "{\n  \"scripts\": {\n    \"build\": \"y\"\n  }\n}\n"
    );
}

#[test]
fn package_rewrite_preserves_field_order() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::write(
        root.join("package.json"),
        r#"{"version":"1.0.0","name":"after-version","scripts":{"w":"1","build:json":"2","a":"3"}}"#,
    )
    .unwrap();

    package::prune_build_scripts(root).unwrap();

    assert_eq!(
        fs::read_to_string(root.join("package.json")).unwrap(),
        "{\n  \"version\": \"1.0.0\",\n  \"name\": \"after-version\",\n  \"scripts\": {\n    \"w\": \"1\",\n    \"a\": \"3\"\n  }\n}\n"
    );
}

#[test]
fn package_without_scripts_table_is_rewritten_untouched() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::write(root.join("package.json"), r#"{"name":"bare"}"#).unwrap();

    package::prune_build_scripts(root).unwrap();

    assert_eq!(
        fs::read_to_string(root.join("package.json")).unwrap(),
        "{\n  \"name\": \"bare\"\n}\n"
    );
}

#[test]
fn missing_package_manifest_is_skipped() {
    let tmp = TempDir::new().unwrap();

    package::prune_build_scripts(tmp.path()).unwrap();

    assert!(!tmp.path().join("package.json").exists());
}
