//! Shared helpers for tests that need a real git repository or stand-in
//! linter executables.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs git in `dir`, panicking on failure, and returns stdout.
pub fn git(dir: &Path, args: &[&str]) -> String {
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
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Initializes an empty repository with a local identity so commits work.
pub fn init_repo(dir: &Path) {
    git(dir, &["init", "-q"]);
    git(dir, &["config", "user.email", "test@example.com"]);
    git(dir, &["config", "user.name", "Test"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
}

/// Writes `content` to `rel` (creating parent directories) and stages it.
pub fn stage(dir: &Path, rel: &str, content: &str) {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    git(dir, &["add", "--", rel]);
}

pub fn commit_all(dir: &Path) {
    git(dir, &["commit", "-q", "-m", "test commit"]);
}

/// Writes an executable `/bin/sh` script named `name` into `dir`.
#[cfg(unix)]
pub fn fake_tool(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Stand-in for markdownlint: complains on stderr about a heading that is
/// not followed by a blank line, unless `--config` names a file that turns
/// MD022 off.
#[cfg(unix)]
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

/// Stand-in for flake8: reports `=` without surrounding spaces (E225),
/// unless `--config` names a file that ignores E225.
#[cfg(unix)]
pub const FAKE_FLAKE8: &str = r#"
file="$1"
if [ "$2" = "--config" ] && grep -q 'ignore *= *E225' "$3"; then
    exit 0
fi
grep -n '[^ =!<>]=[^ =]' "$file" | while IFS=: read -r line _; do
    echo "$file:$line:2: E225 missing whitespace around operator"
done
"#;

/// Stand-in for `Rscript -e "lintr::lint('<file>')"`: flags `=` assignment
/// unless a `.lintr` in the current directory disables the assignment linter.
/// Always exits 0, like lintr.
#[cfg(unix)]
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
