use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::{Path, PathBuf};

pub const OUTPUT_DIR: &str = "icon-packs";
pub const SAMPLES_DIR: &str = "samples";

#[fixture]
pub fn work_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn output_dir(dir: &Path) -> PathBuf {
    dir.join(OUTPUT_DIR)
}

pub fn samples_dir(dir: &Path) -> PathBuf {
    dir.join(SAMPLES_DIR)
}

/// Runs the binary inside `dir` with the in-process converter.
pub fn run_overlay_icons(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("overlay-icons").expect("Failed to find overlay-icons binary");
    cmd.current_dir(dir);
    cmd.env_remove("RUST_LOG");
    cmd.envs(vec![
        ("OVERLAY_ICONS_CONVERTER", "native"),
        ("OVERLAY_ICONS_OUTPUT_DIR", OUTPUT_DIR),
        ("OVERLAY_ICONS_SAMPLES_DIR", SAMPLES_DIR),
    ]);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Same as [`run_overlay_icons`] but through a stand-in `magick` executable.
pub fn run_with_magick(dir: &Path, magick: &Path, args: &[&str]) -> Command {
    let mut cmd = run_overlay_icons(dir, args);
    cmd.env("OVERLAY_ICONS_CONVERTER", "magick");
    cmd.env("MAGICK_BIN", magick);
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("stdout is not utf-8")
}

/// Writes a POSIX shell script standing in for ImageMagick: it appends its
/// arguments to `magick.log` and writes a stub file at its last argument.
#[cfg(unix)]
pub fn write_stub_magick(dir: &Path, exit_code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let log = dir.join("magick.log");
    let script = format!(
        "#!/bin/sh\necho \"$@\" >> '{}'\nif [ {exit_code} -ne 0 ]; then\n  echo 'magick: no decode delegate' >&2\n  exit {exit_code}\nfi\nfor last; do :; done\nprintf stub > \"$last\"\n",
        log.display()
    );

    let path = dir.join("magick-stub");
    std::fs::write(&path, script).expect("Failed to write magick stub");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to make magick stub executable");
    path
}

#[cfg(unix)]
pub fn stub_magick_calls(dir: &Path) -> Vec<String> {
    std::fs::read_to_string(dir.join("magick.log"))
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}
