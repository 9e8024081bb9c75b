#[cfg(test)]
mod cli {
    use assert_cmd::cargo::cargo_bin_cmd;
    use predicates::{
        prelude::PredicateBooleanExt,
        str::{contains, is_empty},
    };
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use std::{error::Error, fs};
    use tempfile::tempdir;

    type Result<T> = std::result::Result<T, Box<dyn Error>>;

    #[test]
    fn test_plain_output() {
        let mut cmd = cargo_bin_cmd!();
        cmd.arg("video.ogv?track=audio#t=10,20")
            .assert()
            .success()
            .stdout(
                "video.ogv?track=audio#t=10,20\n\
                 query:\n  \
                 track:\n    \
                 - value: audio\n      \
                 name: audio\n\
                 hash:\n  \
                 t:\n    \
                 - value: 10,20\n      \
                 unit: npt\n      \
                 start: 10\n      \
                 end: 20\n",
            );
    }

    #[test]
    fn test_json_output() -> Result<()> {
        let mut cmd = cargo_bin_cmd!();
        let output = cmd
            .args(["--format", "json", "image.png#xywh=percent:25,25,50,50&id=a&id=b"])
            .output()?;
        assert!(output.status.success());

        let value: Value = serde_json::from_slice(&output.stdout)?;
        assert_eq!(value["uri"], "image.png#xywh=percent:25,25,50,50&id=a&id=b");
        assert_eq!(value["query"], serde_json::json!({}));
        assert_eq!(value["hash"]["xywh"][0]["unit"], "percent");
        assert_eq!(value["hash"]["xywh"][0]["w"], 50);
        assert_eq!(value["hash"]["id"][1]["id"], "b");
        Ok(())
    }

    #[test]
    fn test_rejection_is_warned() {
        let mut cmd = cargo_bin_cmd!();
        cmd.arg("#xywh=percent:10,10,150,50")
            .assert()
            .success()
            .stdout(contains("hash: {}"))
            .stderr(contains("Media Fragments URI parsing warning"))
            .stderr(contains("Please ensure that 0 <= w <= 100"));
    }

    #[test]
    fn test_no_warnings() {
        let mut cmd = cargo_bin_cmd!();
        cmd.args(["--no-warnings", "#t=clock:2018-01-01T10:00:00Z,clock:2018-01-01T09:00:00Z"])
            .assert()
            .success()
            .stderr(is_empty());
    }

    #[test]
    fn test_quiet_hides_warnings() {
        let mut cmd = cargo_bin_cmd!();
        cmd.args(["-qq", "#t=bogus"]).assert().success().stderr(is_empty());
    }

    #[test]
    fn test_strict_ordering() {
        let mut lax = cargo_bin_cmd!();
        lax.arg("#t=20,10")
            .assert()
            .success()
            .stdout(contains("start: 20"));

        let mut strict = cargo_bin_cmd!();
        strict
            .args(["--strict-ordering", "#t=20,10"])
            .assert()
            .success()
            .stdout(contains("hash: {}"))
            .stderr(contains("Please ensure that start < end"));
    }

    #[test]
    fn test_fail_on_empty() {
        let mut cmd = cargo_bin_cmd!();
        cmd.args(["--fail-on-empty", "#t=5", "page.html?foo=bar"])
            .assert()
            .code(2)
            .stdout(contains("start: 5").and(contains("page.html?foo=bar")));

        let mut cmd = cargo_bin_cmd!();
        cmd.args(["--fail-on-empty", "#t=5"]).assert().success();
    }

    #[test]
    fn test_stdin_inputs() {
        let mut cmd = cargo_bin_cmd!();
        cmd.arg("-")
            .write_stdin("# a list of URIs\n\nmovie.webm#track=video\n  clip.mp4?id=intro  \n")
            .assert()
            .success()
            .stdout(contains("movie.webm#track=video"))
            .stdout(contains("name: video"))
            .stdout(contains("clip.mp4?id=intro\nquery:"))
            .stdout(contains("# a list").not());
    }

    #[test]
    fn test_default_uri() {
        let mut cmd = cargo_bin_cmd!();
        cmd.args(["--default-uri", "page.html#id=chapter-2"])
            .assert()
            .success()
            .stdout(contains("id: chapter-2"));

        // Explicit inputs win over the default URI
        let mut cmd = cargo_bin_cmd!();
        cmd.args(["--default-uri", "page.html#id=chapter-2", "page.html#id=x"])
            .assert()
            .success()
            .stdout(contains("id: x").and(contains("chapter-2").not()));
    }

    #[test]
    fn test_no_input() {
        let mut cmd = cargo_bin_cmd!();
        cmd.assert()
            .failure()
            .code(1)
            .stderr(contains("No input given"));
    }

    #[test]
    fn test_config_file() -> Result<()> {
        let dir = tempdir()?;
        let config = dir.path().join("custom.toml");
        fs::write(
            &config,
            "format = \"json\"\nstrict_ordering = true\ndefault_uri = \"a.ogv#t=3,1\"\n",
        )?;

        let mut cmd = cargo_bin_cmd!();
        let output = cmd.arg("--config").arg(&config).output()?;
        assert!(output.status.success());
        let value: Value = serde_json::from_slice(&output.stdout)?;
        assert_eq!(value["uri"], "a.ogv#t=3,1");
        assert_eq!(value["hash"], serde_json::json!({}));
        Ok(())
    }

    #[test]
    fn test_default_config_file() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("mediafrag.toml"), "no_warnings = true\n")?;

        let mut cmd = cargo_bin_cmd!();
        cmd.current_dir(dir.path())
            .arg("#t=bogus")
            .assert()
            .success()
            .stderr(is_empty());
        Ok(())
    }

    #[test]
    fn test_config_file_verbosity() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("mediafrag.toml"), "verbose = \"debug\"\n")?;

        let mut cmd = cargo_bin_cmd!();
        cmd.current_dir(dir.path())
            .env_remove("RUST_LOG")
            .arg("#t=5")
            .assert()
            .success()
            .stderr(contains("[DEBUG]").and(contains("unit: npt")));
        Ok(())
    }

    #[test]
    fn test_invalid_config_file() -> Result<()> {
        let dir = tempdir()?;
        let config = dir.path().join("mediafrag.toml");
        fs::write(&config, "max_concurrency = 4\n")?;

        let mut cmd = cargo_bin_cmd!();
        cmd.arg("--config")
            .arg(&config)
            .arg("#t=1")
            .assert()
            .code(3)
            .stderr(contains("Cannot load configuration file"));

        let mut cmd = cargo_bin_cmd!();
        cmd.arg("--config")
            .arg(dir.path().join("missing.toml"))
            .arg("#t=1")
            .assert()
            .code(3);
        Ok(())
    }

    #[test]
    fn test_unknown_format() {
        let mut cmd = cargo_bin_cmd!();
        cmd.args(["--format", "yaml", "#t=1"])
            .assert()
            .failure()
            .stderr(contains("invalid value 'yaml'"));
    }
}
