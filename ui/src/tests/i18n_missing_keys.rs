use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "navshell-ui.ftl";

/// Message IDs defined in a Fluent file: any `<id> =` line whose id is made of
/// lowercase letters, digits and dashes. Comments and terms (`-name`) are skipped.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('=').map(|(id, _)| id.trim()))
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Keys passed as a literal first argument to `t!` anywhere under `src/`.
/// Dynamically built IDs and direct `fl!` calls are not seen.
fn referenced_keys(src_root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let needle = concat!("t!", "(\"");
        let mut rest = content.as_str();
        while let Some(pos) = rest.find(needle) {
            rest = &rest[pos + needle.len()..];
            let Some(end) = rest.find('"') else {
                break;
            };
            let key = &rest[..end];
            if !key.is_empty() && key.chars().all(valid_key_char) {
                found.insert(key.to_string());
            }
            rest = &rest[end..];
        }
    }

    found
}

#[test]
fn every_referenced_key_exists_in_fallback() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let fallback_file = crate_root.join("i18n").join("en-US").join(FTL_FILENAME);
    let fallback_content =
        fs::read_to_string(&fallback_file).expect("Failed to read fallback FTL file");
    let fallback_keys = parse_ftl_keys(&fallback_content);
    assert!(
        !fallback_keys.is_empty(),
        "No message keys parsed from fallback FTL: {fallback_file:?}"
    );

    let referenced = referenced_keys(&crate_root.join("src"));
    assert!(
        referenced.contains("nav-home-link"),
        "source scan found no navigation keys; did the t! macro name change?"
    );

    let mut missing: Vec<_> = referenced
        .iter()
        .filter(|k| !fallback_keys.contains(*k))
        .cloned()
        .collect();
    missing.sort();

    assert!(
        missing.is_empty(),
        "Referenced translation keys missing in fallback ({}):\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn parser_ignores_comments_and_terms() {
    let keys = parse_ftl_keys("# comment = no\n-brand = Navshell\nnav-close = Close\n");
    assert_eq!(keys.into_iter().collect::<Vec<_>>(), vec!["nav-close"]);
}
