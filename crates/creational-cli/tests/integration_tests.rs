//! Integration tests for the creational binaries.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FIRST_FACTORY_OUTPUT: &str = "\
Client: Testing client code with the first factory type:
The result of the product B1.
The result of the B1 collaborating with (The result of the product A1. )
";

const SECOND_FACTORY_OUTPUT: &str = "
Client: Testing the same client code with the second factory type:
The result of the product B2.
The result of the B2 collaborating with ( The result of the product A2. )
";

const FACTORY_METHOD_OUTPUT: &str = "\
ConcreteCreator1 実行
ConcreteCreator2 実行
Creator: The same creator's code has just worked with クラス ConcreteProduct1からのリターン
Creator: The same creator's code has just worked with クラス ConcreteProduct2からのリターン
";

/// `creational` isolated from the user's config directory and environment.
fn creational(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("creational").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .env_remove("CREATIONAL__DEMO__FAMILIES")
        .env_remove("CREATIONAL__DEMO__CREATORS")
        .env_remove("CREATIONAL__OUTPUT__FORMAT");
    cmd
}

#[test]
fn test_abstract_factory_binary_output() {
    Command::cargo_bin("abstract-factory")
        .unwrap()
        .assert()
        .success()
        .stdout(format!("OK\n{FIRST_FACTORY_OUTPUT}"));
}

#[test]
fn test_factory_method_binary_output() {
    Command::cargo_bin("factory-method")
        .unwrap()
        .assert()
        .success()
        .stdout(FACTORY_METHOD_OUTPUT);
}

#[test]
fn test_subcommands_run_every_variant_by_default() {
    let home = TempDir::new().unwrap();
    creational(&home)
        .arg("abstract-factory")
        .assert()
        .success()
        .stdout(format!("{FIRST_FACTORY_OUTPUT}{SECOND_FACTORY_OUTPUT}"));

    creational(&home)
        .arg("fm")
        .assert()
        .success()
        .stdout(FACTORY_METHOD_OUTPUT);
}

#[test]
fn test_single_family() {
    let home = TempDir::new().unwrap();
    creational(&home)
        .args(["af", "--family", "2"])
        .assert()
        .success()
        .stdout(
            "Client: Testing client code with the second factory type:\n\
             The result of the product B2.\n\
             The result of the B2 collaborating with ( The result of the product A2. )\n",
        );
}

#[test]
fn test_single_creator() {
    let home = TempDir::new().unwrap();
    creational(&home)
        .args(["fm", "--creator", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ConcreteCreator2 実行"))
        .stdout(predicate::str::contains("ConcreteCreator1").not())
        .stdout(predicate::str::contains("ConcreteProduct2からのリターン"));
}

#[test]
fn test_json_transcript() {
    let home = TempDir::new().unwrap();
    let out = creational(&home)
        .args(["--output-format", "json", "af", "-f", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["pattern"], "abstract-factory");
    assert_eq!(value["lines"][1], "The result of the product B1.");
    assert_eq!(value["lines"].as_array().unwrap().len(), 3);
}

#[test]
fn test_quiet_suppresses_demo_output() {
    let home = TempDir::new().unwrap();
    creational(&home)
        .args(["--quiet", "factory-method"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_list_table() {
    let home = TempDir::new().unwrap();
    creational(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("abstract-factory"))
        .stdout(predicate::str::contains("factory-method"))
        .stdout(predicate::str::contains("ConcreteFactory1, ConcreteFactory2"));
}

#[test]
fn test_list_ids() {
    let home = TempDir::new().unwrap();
    creational(&home)
        .args(["ls", "--format", "list"])
        .assert()
        .success()
        .stdout("abstract-factory\nfactory-method\n");
}

#[test]
fn test_list_one_id() {
    let home = TempDir::new().unwrap();
    creational(&home)
        .args(["list", "factory-method", "--format", "list"])
        .assert()
        .success()
        .stdout("factory-method\n");
}

#[test]
fn test_no_color_env_accepts_any_value() {
    let home = TempDir::new().unwrap();
    creational(&home)
        .env("NO_COLOR", "1")
        .args(["ls", "--format", "list"])
        .assert()
        .success()
        .stdout("abstract-factory\nfactory-method\n");
}

#[test]
fn test_list_json() {
    let home = TempDir::new().unwrap();
    let out = creational(&home)
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value[0]["id"], "abstract-factory");
    assert_eq!(value[1]["variants"][0], "ConcreteCreator1");
}

#[test]
fn test_help_flag() {
    Command::cargo_bin("creational")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("abstract-factory"))
        .stdout(predicate::str::contains("factory-method"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("creational")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    creational(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("creational"));
}

#[test]
fn test_init_then_config_get() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("conf/creational.toml");
    let path = path.to_str().unwrap();

    creational(&home)
        .args(["--config", path, "init"])
        .assert()
        .success();
    assert!(home.path().join("conf/creational.toml").exists());

    creational(&home)
        .args(["--config", path, "config", "get", "demo.families"])
        .assert()
        .success()
        .stdout("demo.families = 1,2\n");
}

#[test]
fn test_init_refuses_to_overwrite() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("creational.toml");
    let path = path.to_str().unwrap();

    creational(&home).args(["--config", path, "init"]).assert().success();
    creational(&home)
        .args(["--config", path, "init"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--force"));
    creational(&home)
        .args(["--config", path, "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_set_drives_default_selection() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("creational.toml");
    let path = path.to_str().unwrap();

    creational(&home)
        .args(["--config", path, "config", "set", "demo.creators", "2"])
        .assert()
        .success();

    creational(&home)
        .args(["--config", path, "factory-method"])
        .assert()
        .success()
        .stdout(
            "ConcreteCreator2 実行\n\
             Creator: The same creator's code has just worked with クラス ConcreteProduct2からのリターン\n",
        );
}

#[test]
fn test_config_path_prints_explicit_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("creational.toml");
    std::fs::write(&path, "").unwrap();

    creational(&home)
        .args(["--config", path.to_str().unwrap(), "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("creational.toml"));
}

#[test]
fn test_environment_overrides_defaults() {
    let home = TempDir::new().unwrap();
    creational(&home)
        .env("CREATIONAL__DEMO__FAMILIES", "2")
        .arg("af")
        .assert()
        .success()
        .stdout(predicate::str::contains("B2"))
        .stdout(predicate::str::contains("B1").not());
}

#[test]
fn test_single_creator_from_environment() {
    let home = TempDir::new().unwrap();
    creational(&home)
        .env("CREATIONAL__DEMO__CREATORS", "2")
        .arg("fm")
        .assert()
        .success()
        .stdout(predicate::str::contains("ConcreteCreator2 実行"))
        .stdout(predicate::str::contains("ConcreteCreator1").not());
}

#[test]
fn test_environment_list_of_families() {
    let home = TempDir::new().unwrap();
    creational(&home)
        .env("CREATIONAL__DEMO__FAMILIES", "2,1")
        .arg("af")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Client: Testing client code with the second factory type:",
        ))
        .stdout(predicate::str::contains("B1"));
}
