mod common;

use common::TestContext;
use mockito::Matcher;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn help_lists_subcommands() {
    let ctx = TestContext::new();
    ctx.cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("seed"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"));
}

#[test]
fn no_subcommand_prints_help_and_succeeds() {
    let ctx = TestContext::new();
    ctx.cli().assert().success().stdout(predicate::str::contains("Usage:"));
}

#[test]
fn seed_uploads_six_objects() {
    let mut ctx = TestContext::new();
    let container = ctx
        .server()
        .mock("PUT", Matcher::Regex(r"^/devstoreaccount1/demo(\?|$)".into()))
        .match_query(Matcher::UrlEncoded("restype".into(), "container".into()))
        .with_status(201)
        .expect(1)
        .create();
    let uploads = ctx
        .server()
        .mock(
            "PUT",
            Matcher::Regex(r"^/devstoreaccount1/demo/templates/tpl-0[1-3]/(manifest\.json|template\.md)".into()),
        )
        .match_header("x-ms-blob-type", "BlockBlob")
        .match_header("if-none-match", Matcher::Missing)
        .with_status(201)
        .expect(6)
        .create();

    ctx.cli()
        .arg("seed")
        .assert()
        .success()
        .stdout("Created demo templates under container 'demo/templates/'.\n");

    container.assert();
    uploads.assert();
}

#[test]
fn seed_tolerates_existing_container() {
    let mut ctx = TestContext::new();
    let existing = ctx
        .server()
        .mock("PUT", Matcher::Regex(r"^/devstoreaccount1/demo(\?|$)".into()))
        .match_query(Matcher::UrlEncoded("restype".into(), "container".into()))
        .with_status(409)
        .with_header("x-ms-error-code", "ContainerAlreadyExists")
        .create();
    let uploads = ctx
        .server()
        .mock("PUT", Matcher::Regex(r"^/devstoreaccount1/demo/templates/".into()))
        .with_status(201)
        .expect(6)
        .create();

    ctx.cli().arg("seed").assert().success();

    existing.assert();
    uploads.assert();
}

#[test]
fn list_reports_empty_container() {
    let mut ctx = TestContext::new();
    ctx.mock_container_created();
    ctx.mock_listing(&[]);

    ctx.cli().arg("list").assert().success().stdout("No templates found.\n");
}

#[test]
fn list_prints_manifests_sorted_by_id() {
    let mut ctx = TestContext::new();
    ctx.mock_container_created();
    ctx.mock_listing(&[
        "templates/b/manifest.json",
        "templates/b/template.md",
        "templates/a/manifest.json",
        "templates/a/template.md",
    ]);
    ctx.mock_template("b", "Second", "second body");
    ctx.mock_template("a", "First", "first body");

    ctx.cli().arg("list").assert().success().stdout(
        "Available templates:\n  1. First (id=a, version=1.0.0)\n  2. Second (id=b, version=1.0.0)\n",
    );
}

#[test]
fn show_by_id_prints_framed_body() {
    let mut ctx = TestContext::new();
    ctx.mock_container_created();
    ctx.mock_listing(&["templates/tpl-02/manifest.json", "templates/tpl-02/template.md"]);
    ctx.mock_template("tpl-02", "Sample Template 2", "line one\nline two\n");

    let divider = "=".repeat(40);
    ctx.cli().args(["show", "--id", "tpl-02"]).assert().success().stdout(format!(
        "\n{divider}\nTemplate: templates/tpl-02/template.md\n{divider}\n\nline one\nline two\n\n"
    ));
}

#[test]
fn show_unknown_id_is_not_a_failure() {
    let mut ctx = TestContext::new();
    ctx.mock_container_created();
    ctx.mock_listing(&["templates/tpl-01/manifest.json"]);
    ctx.mock_blob("templates/tpl-01/manifest.json", r#"{"id": "tpl-01"}"#);

    ctx.cli()
        .args(["show", "--id", "nope"])
        .assert()
        .success()
        .stdout("Template with id 'nope' not found.\n");
}

#[test]
fn show_on_empty_container_reports_no_templates() {
    let mut ctx = TestContext::new();
    ctx.mock_container_created();
    ctx.mock_listing(&[]);

    ctx.cli().arg("show").assert().success().stdout("No templates found.\n");
}

#[test]
fn show_prompts_until_valid_selection() {
    let mut ctx = TestContext::new();
    ctx.mock_container_created();
    ctx.mock_listing(&["templates/tpl-01/manifest.json", "templates/tpl-02/manifest.json"]);
    ctx.mock_template("tpl-01", "Sample Template 1", "first");
    ctx.mock_template("tpl-02", "Sample Template 2", "second");

    ctx.cli()
        .arg("show")
        .write_stdin("0\nabc\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("  2. Sample Template 2 (id=tpl-02, version=1.0.0)"))
        .stdout(predicate::str::contains("Enter a template number [1..2]: "))
        .stdout(predicate::str::contains("Invalid selection. Try again.").count(2))
        .stdout(predicate::str::contains("Template: templates/tpl-02/template.md"))
        .stdout(predicate::str::ends_with("second\n"));
}

#[test]
fn show_fails_when_input_closes() {
    let mut ctx = TestContext::new();
    ctx.mock_container_created();
    ctx.mock_listing(&["templates/tpl-01/manifest.json"]);
    ctx.mock_blob("templates/tpl-01/manifest.json", r#"{"id": "tpl-01"}"#);

    ctx.cli()
        .arg("show")
        .write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Input closed"));
}

#[test]
fn malformed_manifest_fails_the_command() {
    let mut ctx = TestContext::new();
    ctx.mock_container_created();
    ctx.mock_listing(&["templates/bad/manifest.json"]);
    ctx.mock_blob("templates/bad/manifest.json", "{not json");

    ctx.cli()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Failed to parse templates/bad/manifest.json"));
}

#[test]
fn rejected_credentials_fail_without_retrying() {
    let mut ctx = TestContext::new();
    let rejected = ctx
        .server()
        .mock("PUT", Matcher::Regex(r"^/devstoreaccount1/demo(\?|$)".into()))
        .match_query(Matcher::UrlEncoded("restype".into(), "container".into()))
        .with_status(403)
        .with_header("x-ms-error-code", "AuthenticationFailed")
        .expect(1)
        .create();

    ctx.cli()
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Storage connection failed: AuthenticationFailed"));

    rejected.assert();
}

#[test]
fn malformed_connection_string_is_a_configuration_error() {
    let ctx = TestContext::new();
    ctx.cli()
        .env("AZURE_STORAGE_CONNECTION_STRING", "not-a-connection-string")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: "));
}

#[test]
fn connection_string_is_read_from_env_file() {
    let mut ctx = TestContext::new();
    let container = ctx
        .server()
        .mock("PUT", Matcher::Regex(r"^/devstoreaccount1/demo(\?|$)".into()))
        .match_query(Matcher::UrlEncoded("restype".into(), "container".into()))
        .with_status(201)
        .expect(1)
        .create();
    ctx.mock_listing(&[]);

    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".env"),
        format!("AZURE_STORAGE_CONNECTION_STRING=\"{}\"\n", ctx.connection_string()),
    )
    .unwrap();

    ctx.cli()
        .current_dir(dir.path())
        .env_remove("AZURE_STORAGE_CONNECTION_STRING")
        .arg("list")
        .assert()
        .success()
        .stdout("No templates found.\n");

    container.assert();
}
