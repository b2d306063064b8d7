//! `npm` stand-in placed on `PATH` for CLI tests.

use std::fs;
use std::path::Path;

/// Writes `package.json` for `npm init -y` and logs every invocation to
/// `npm.log` in the working directory. Exits 1 when `FAKE_NPM_FAIL` matches
/// the first argument.
const SCRIPT: &str = r#"#!/bin/sh
echo "$*" >> npm.log
if [ -n "$FAKE_NPM_FAIL" ] && [ "$1" = "$FAKE_NPM_FAIL" ]; then
  echo "npm ERR! simulated failure of $1" >&2
  exit 1
fi
if [ "$1" = "init" ]; then
  printf '{\n  "name": "app",\n  "scripts": {\n    "test": "exit 1"\n  }\n}\n' > package.json
fi
"#;

#[cfg(unix)]
pub(crate) fn install(bin_dir: &Path) {
    use std::os::unix::fs::PermissionsExt;

    fs::create_dir_all(bin_dir).expect("Failed to create fake bin directory");
    let path = bin_dir.join("npm");
    fs::write(&path, SCRIPT).expect("Failed to write fake npm");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("Failed to make fake npm executable");
}
