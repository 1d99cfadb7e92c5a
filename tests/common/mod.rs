//! Shared testing utilities for blob-templates CLI tests.

use assert_cmd::Command;
use mockito::{Matcher, Mock, ServerGuard};

pub const EMULATOR_ACCOUNT: &str = "devstoreaccount1";
pub const EMULATOR_KEY: &str =
    "Eby8vdM02xNOcqFlqUwJPLlmEtlCDXJ1OUzFT50uSRZ6IFsuFq2UVErCz4I6tq/K1SZFPTOtr/KBHBeksoGMGw==";

/// Mock blob endpoint plus a preconfigured command builder.
#[allow(dead_code)]
pub struct TestContext {
    server: ServerGuard,
    // Mockito unregisters a mock when its handle drops.
    mocks: Vec<Mock>,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        Self { server: mockito::Server::new(), mocks: Vec::new() }
    }

    pub fn server(&mut self) -> &mut ServerGuard {
        &mut self.server
    }

    pub fn connection_string(&self) -> String {
        format!(
            "DefaultEndpointsProtocol=http;AccountName={};AccountKey={};BlobEndpoint={}/{};",
            EMULATOR_ACCOUNT,
            EMULATOR_KEY,
            self.server.url(),
            EMULATOR_ACCOUNT
        )
    }

    /// Build a command for the compiled binary pointed at the mock endpoint.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("blob-templates").expect("Failed to locate binary");
        cmd.env("AZURE_STORAGE_CONNECTION_STRING", self.connection_string())
            .env_remove("MDX_AZURE_STORAGE_CONNECTION_STRING")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Keep a mock registered for the lifetime of the context.
    pub fn keep(&mut self, mock: Mock) {
        self.mocks.push(mock);
    }

    /// Container creation succeeds.
    pub fn mock_container_created(&mut self) {
        let mock = self
            .server
            .mock("PUT", Matcher::Regex(r"^/devstoreaccount1/demo(\?|$)".to_string()))
            .match_query(Matcher::UrlEncoded("restype".into(), "container".into()))
            .with_status(201)
            .create();
        self.keep(mock);
    }

    /// Serve one listing page containing `names`.
    pub fn mock_listing(&mut self, names: &[&str]) {
        let mock = self
            .server
            .mock("GET", Matcher::Regex(r"^/devstoreaccount1/demo(\?|$)".to_string()))
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("restype".into(), "container".into()),
                Matcher::UrlEncoded("comp".into(), "list".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/xml")
            .with_body(list_body(names))
            .create();
        self.keep(mock);
    }

    pub fn mock_blob(&mut self, name: &str, body: &str) {
        let mock = self
            .server
            .mock("GET", format!("/devstoreaccount1/demo/{}", name).as_str())
            .with_status(200)
            .with_body(body)
            .create();
        self.keep(mock);
    }

    /// Manifest and body for one template under `templates/<id>/`.
    pub fn mock_template(&mut self, id: &str, name: &str, body: &str) {
        let manifest = format!(
            r#"{{"id": "{id}", "name": "{name}", "version": "1.0.0", "description": "d"}}"#
        );
        self.mock_blob(&format!("templates/{id}/manifest.json"), &manifest);
        self.mock_blob(&format!("templates/{id}/template.md"), body);
    }
}

fn list_body(names: &[&str]) -> String {
    let blobs: String =
        names.iter().map(|name| format!("<Blob><Name>{}</Name></Blob>", name)).collect();
    format!(
        "\u{feff}<?xml version=\"1.0\" encoding=\"utf-8\"?>\
         <EnumerationResults ContainerName=\"demo\"><Blobs>{}</Blobs><NextMarker /></EnumerationResults>",
        blobs
    )
}
