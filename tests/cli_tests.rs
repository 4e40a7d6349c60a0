use assert_cmd::prelude::{CommandCargoExt, OutputAssertExt};
use predicates::prelude::predicate;
use std::process::Command;

#[test]
fn help_lists_every_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let mut sut = Command::cargo_bin("overlay-icons")?;

    sut.arg("--help");

    sut.assert()
        .success()
        .stdout(predicate::str::contains("make-transparent"))
        .stdout(predicate::str::contains("extract-packs"))
        .stdout(predicate::str::contains("fix-packs"))
        .stdout(predicate::str::contains("--output-dir"));

    Ok(())
}

#[test]
fn unknown_subcommand_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut sut = Command::cargo_bin("overlay-icons")?;

    sut.arg("rebuild");

    sut.assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand 'rebuild'"));

    Ok(())
}

#[test]
fn unknown_converter_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let mut sut = Command::cargo_bin("overlay-icons")?;

    sut.current_dir(dir.path())
        .env_remove("OVERLAY_ICONS_CONVERTER")
        .args(["--converter", "inkscape", "fix-packs"]);

    sut.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'inkscape'"));

    Ok(())
}

#[test]
fn files_and_pack_cannot_be_combined() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let mut sut = Command::cargo_bin("overlay-icons")?;

    sut.current_dir(dir.path())
        .args(["make-transparent", "--pack", "candy-pop", "added.ico"]);

    sut.assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));

    Ok(())
}
