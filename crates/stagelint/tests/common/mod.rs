#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::cargo::cargo_bin_cmd;

pub fn stagelint_cmd() -> assert_cmd::Command {
    cargo_bin_cmd!("stagelint")
}

pub fn git(dir: &Path, args: &[&str]) -> std::process::Output {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

pub fn init_repo(dir: &Path) {
    git(dir, &["init", "-q"]);
    git(dir, &["config", "user.email", "test@example.com"]);
    git(dir, &["config", "user.name", "Test"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
}

pub fn stage(dir: &Path, rel: &str, content: &str) {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    git(dir, &["add", "--", rel]);
}

/// Writes stand-in linters into `bin` and a hook config in `repo` that
/// points at them, with the given linters enabled.
#[cfg(unix)]
pub fn configure_fake_linters(repo: &Path, bin: &Path, markdown: bool, python: bool, r: bool) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let tools = [
        ("markdownlint", FAKE_MARKDOWNLINT),
        ("flake8", FAKE_FLAKE8),
        ("Rscript", FAKE_RSCRIPT),
    ];
    for (name, body) in tools {
        let path = bin.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    let config = serde_json::json!({
        "markdown": { "enabled": markdown, "program": bin.join("markdownlint") },
        "python": { "enabled": python, "program": bin.join("flake8") },
        "r": { "enabled": r, "program": bin.join("Rscript") },
    });
    let hooks = repo.join(".git").join("hooks");
    fs::create_dir_all(&hooks).unwrap();
    let path = hooks.join("stagelint.json");
    fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
    path
}

pub const FAKE_MARKDOWNLINT: &str = r#"
file="$1"
if [ "$2" = "--config" ] && grep -q '"MD022": *false' "$3"; then
    exit 0
fi
if awk 'prev ~ /^#/ && $0 != "" { found = 1 } { prev = $0 } END { exit !found }' "$file"; then
    echo "$file:1 MD022/blanks-around-headings Headings should be surrounded by blank lines" >&2
    exit 1
fi
"#;

pub const FAKE_FLAKE8: &str = r#"
file="$1"
if [ "$2" = "--config" ] && grep -q 'ignore *= *E225' "$3"; then
    exit 0
fi
grep -n '[^ =!<>]=[^ =]' "$file" | while IFS=: read -r line _; do
    echo "$file:$line:2: E225 missing whitespace around operator"
done
"#;

pub const FAKE_RSCRIPT: &str = r#"
expr="$4"
file=$(printf '%s' "$expr" | sed "s/^lintr::lint('\(.*\)')$/\1/")
if [ -f .lintr ] && grep -q 'assignment_linter *= *NULL' .lintr; then
    exit 0
fi
grep -n '^[A-Za-z_.][A-Za-z0-9_.]* *= *' "$file" | while IFS=: read -r line _; do
    echo "$file:$line:2: style: Use <-, not =, for assignment. [assignment_linter]"
done
exit 0
"#;
