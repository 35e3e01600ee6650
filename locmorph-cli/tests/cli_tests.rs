use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn locmorph() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("locmorph"))
}

fn write_sample(dir: &std::path::Path) {
    fs::write(
        dir.join("titles_l_english.yml"),
        "l_english:\n#  h_dar_al_islam: \"Dar al-Islam\"\n c_guangdong: \"gwongdungyahn\"\n",
    )
    .unwrap();
}

#[test]
fn test_capitalize_subcommand_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("read1");
    let output = temp_dir.path().join("write1");
    fs::create_dir(&input).unwrap();
    write_sample(&input);

    let result = locmorph()
        .args([
            "capitalize",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(
        result.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&result.stderr)
    );

    let content = fs::read_to_string(output.join("titles_l_english.yml")).unwrap();
    assert_eq!(
        content,
        "l_english:\n#  h_dar_al_islam: \"Dar al-Islam\"\n c_guangdong: \"Gwongdungyahn\"\n"
    );

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Files processed: 1"));
    assert!(stdout.contains("Updated values: 1"));
    assert!(stdout.contains("line 3: updated"));
}

#[test]
fn test_strip_diacritics_subcommand_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("read1");
    let output = temp_dir.path().join("write1");
    fs::create_dir(&input).unwrap();
    fs::write(
        input.join("yale_l_english.yml"),
        " c_guangdong: \"gwóngdūngyàhn\"\n",
    )
    .unwrap();

    let result = locmorph()
        .args([
            "strip-diacritics",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(result.status.success());
    assert_eq!(
        fs::read_to_string(output.join("yale_l_english.yml")).unwrap(),
        " c_guangdong: \"gwongdungyahn\"\n"
    );
}

#[test]
fn test_quiet_suppresses_line_notices() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("read1");
    fs::create_dir(&input).unwrap();
    write_sample(&input);

    let result = locmorph()
        .args([
            "capitalize",
            "--quiet",
            "-i",
            input.to_str().unwrap(),
            "-o",
            temp_dir.path().join("write1").to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(!stdout.contains(": updated"));
    assert!(stdout.contains("Files processed: 1"));
}

#[test]
fn test_empty_input_dir_succeeds_with_zero_files() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("read1");
    let output = temp_dir.path().join("write1");
    fs::create_dir(&input).unwrap();

    let result = locmorph()
        .args([
            "capitalize",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("No .yml or .yaml files found"));
    assert!(stdout.contains("Files processed: 0"));
    assert!(output.is_dir());
}

#[test]
fn test_missing_input_dir_fails() {
    let temp_dir = TempDir::new().unwrap();

    let result = locmorph()
        .args([
            "capitalize",
            "-i",
            temp_dir.path().join("absent").to_str().unwrap(),
            "-o",
            temp_dir.path().join("write1").to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("does not exist"));
}

#[test]
fn test_report_json_is_written() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("read1");
    let report_path = temp_dir.path().join("report.json");
    fs::create_dir(&input).unwrap();
    write_sample(&input);

    let result = locmorph()
        .args([
            "capitalize",
            "-i",
            input.to_str().unwrap(),
            "-o",
            temp_dir.path().join("write1").to_str().unwrap(),
            "--report-json",
            report_path.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(result.status.success());
    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["summary"]["processed"], 1);
    assert_eq!(report["summary"]["changed"], 1);
    assert_eq!(report["files"][0]["file"], "titles_l_english.yml");
}

#[test]
fn test_rewrite_without_api_key_fails_before_processing() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("read1");
    let prompt = temp_dir.path().join("prompt.txt");
    fs::create_dir(&input).unwrap();
    write_sample(&input);
    fs::write(&prompt, "Replace the text with snarky commentary.\n").unwrap();

    let result = locmorph()
        .env_remove("OPENAI_API_KEY")
        .args([
            "rewrite",
            "-i",
            input.to_str().unwrap(),
            "-o",
            temp_dir.path().join("write1").to_str().unwrap(),
            "--prompt-file",
            prompt.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("OPENAI_API_KEY"));
    // Nothing may be written before configuration is validated.
    assert!(!temp_dir.path().join("write1/titles_l_english.yml").exists());
}

#[test]
fn test_rewrite_with_missing_prompt_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("read1");
    fs::create_dir(&input).unwrap();
    write_sample(&input);

    let result = locmorph()
        .env("OPENAI_API_KEY", "test-key")
        .args([
            "rewrite",
            "-i",
            input.to_str().unwrap(),
            "-o",
            temp_dir.path().join("write1").to_str().unwrap(),
            "--prompt-file",
            temp_dir.path().join("absent-prompt.txt").to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("prompt file") || stderr.contains("Cannot read"));
}
