use assert_cmd::Command;

pub fn pinlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pinlog").unwrap();
    cmd.env_remove("PINLOG_ROOT");
    cmd.env_remove("PINLOG_LOG");
    cmd
}

/// First whitespace-separated token of the first stdout line
pub fn first_id(stdout: &[u8]) -> String {
    String::from_utf8_lossy(stdout)
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().next())
        .unwrap_or_default()
        .to_string()
}
