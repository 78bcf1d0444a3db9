use assert_cmd::Command;
use std::path::Path;

pub fn leadmap_cmd() -> Command {
    let mut cmd = Command::cargo_bin("leadmap").unwrap();
    cmd.env_remove("LEADMAP_ROOT");
    cmd
}

/// Add a lead with sensible defaults plus extra flags
#[allow(dead_code)]
pub fn add_lead(dir: &Path, name: &str, extra: &[&str]) {
    leadmap_cmd()
        .current_dir(dir)
        .args([
            "add",
            "--name",
            name,
            "--address",
            "Rua Augusta, 123",
            "--neighborhood",
            "Chiado",
            "--business-type",
            "cafe",
        ])
        .args(extra)
        .assert()
        .success();
}
