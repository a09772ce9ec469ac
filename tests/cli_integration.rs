use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn recipebox(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("recipebox").unwrap();
    cmd.env("RECIPEBOX_CONFIG_DIR", config_dir.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn default_listing_shows_samples() {
    let dir = tempfile::tempdir().unwrap();
    recipebox(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Vegan Pasta"))
        .stdout(predicate::str::contains("Gluten-Free Pizza"))
        .stdout(predicate::str::contains("Breakfast Smoothie Bowl"));
}

#[test]
fn list_by_category() {
    let dir = tempfile::tempdir().unwrap();
    recipebox(&dir)
        .args(["list", "--category", "Dinner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vegan Pasta"))
        .stdout(predicate::str::contains("Gluten-Free Pizza"))
        .stdout(predicate::str::contains("Smoothie").not());
}

#[test]
fn list_combines_filters() {
    let dir = tempfile::tempdir().unwrap();
    recipebox(&dir)
        .args(["ls", "-c", "Dinner", "-t", "Vegan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vegan Pasta"))
        .stdout(predicate::str::contains("Pizza").not());
}

#[test]
fn search_ignores_case() {
    let dir = tempfile::tempdir().unwrap();
    recipebox(&dir)
        .args(["list", "-s", "TOMATO"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vegan Pasta"))
        .stdout(predicate::str::contains("Gluten-Free Pizza"))
        .stdout(predicate::str::contains("Smoothie").not());
}

#[test]
fn empty_box_says_so() {
    let dir = tempfile::tempdir().unwrap();
    recipebox(&dir)
        .args(["--no-samples", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes found."));
}

#[test]
fn json_listing_is_parseable() {
    let dir = tempfile::tempdir().unwrap();
    let output = recipebox(&dir)
        .args(["list", "--json", "--favorites"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 0);
}

#[test]
fn share_prints_recipe_text() {
    let dir = tempfile::tempdir().unwrap();
    recipebox(&dir)
        .args(["share", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Recipe: Vegan Pasta\n"))
        .stdout(predicate::str::contains("Cooking Time: 30 mins"))
        .stdout(predicate::str::contains("Dietary Restrictions: Vegan, Vegetarian"));
}

#[test]
fn view_by_title() {
    let dir = tempfile::tempdir().unwrap();
    recipebox(&dir)
        .args(["view", "pizza"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gluten-Free Pizza"))
        .stdout(predicate::str::contains("Instructions:"));
}

#[test]
fn view_unknown_index_fails() {
    let dir = tempfile::tempdir().unwrap();
    recipebox(&dir)
        .args(["view", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn add_rejects_blank_title() {
    let dir = tempfile::tempdir().unwrap();
    recipebox(&dir)
        .args(["add", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn add_rejects_non_numeric_time() {
    let dir = tempfile::tempdir().unwrap();
    recipebox(&dir)
        .args(["add", "Soup", "--time", "soon"])
        .assert()
        .failure();
}

#[test]
fn add_shows_new_recipe_in_listing() {
    let dir = tempfile::tempdir().unwrap();
    recipebox(&dir)
        .args(["add", "Tomato Soup", "--category", "Lunch", "--time", "90"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe added (4): Tomato Soup"))
        .stdout(predicate::str::contains("1h 30m"));
}

#[test]
fn favorite_toggles() {
    let dir = tempfile::tempdir().unwrap();
    recipebox(&dir)
        .args(["favorite", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked as favorite (1): Vegan Pasta"))
        .stdout(predicate::str::contains("★"));
}

#[test]
fn delete_removes_from_listing() {
    let dir = tempfile::tempdir().unwrap();
    recipebox(&dir)
        .args(["rm", "smoothie"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vegan Pasta"))
        .stdout(predicate::str::contains("Breakfast Smoothie Bowl").count(1));
}

#[test]
fn configured_view_is_used_by_list() {
    let dir = tempfile::tempdir().unwrap();
    recipebox(&dir)
        .args(["config", "view", "cards"])
        .assert()
        .success();

    recipebox(&dir)
        .args(["config", "view"])
        .assert()
        .success()
        .stdout(predicate::str::contains("view = cards"));

    recipebox(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("┌"));
}

#[test]
fn config_can_disable_samples() {
    let dir = tempfile::tempdir().unwrap();
    recipebox(&dir)
        .args(["config", "samples", "false"])
        .assert()
        .success();

    recipebox(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes found."));
}

#[test]
fn vocab_lists_vocabulary() {
    let dir = tempfile::tempdir().unwrap();
    recipebox(&dir)
        .arg("vocab")
        .assert()
        .success()
        .stdout(predicate::str::contains("Categories:"))
        .stdout(predicate::str::contains("Dietary tags:"));
}
