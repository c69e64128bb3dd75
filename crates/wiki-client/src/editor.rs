//! Fetch-and-mutate lifecycle for a single wiki document
//!
//! Independent of the list controller's pagination: the editor fetches its
//! document by id on open and holds it for the lifetime of the edit.

use crate::client::WikiDocsClient;
use crate::error::ClientResult;
use crate::models::{WikiDoc, WikiDocPatch};

/// Editor state for one document identified by id
///
/// Updates apply to the local copy immediately and are saved concurrently;
/// a failed save leaves the local copy optimistically updated and surfaces
/// the error to the caller. There is no rollback, a known simplification.
#[derive(Debug, Clone)]
pub struct WikiDocEditor {
    client: WikiDocsClient,
    doc: WikiDoc,
}

impl WikiDocEditor {
    /// Fetch the document and open an editor over it. Opening a different
    /// id means constructing a new editor.
    pub async fn open(client: WikiDocsClient, id: &str) -> ClientResult<Self> {
        let doc = client.get(id).await?;
        Ok(Self { client, doc })
    }

    /// The document as this editor currently sees it, local edits included.
    pub fn doc(&self) -> &WikiDoc {
        &self.doc
    }

    /// Merge a partial update into the held document and save the result.
    pub async fn update(&mut self, patch: WikiDocPatch) -> ClientResult<WikiDoc> {
        // optimistic: the local copy changes before (and regardless of
        // whether) the save lands
        self.doc.apply(patch);
        self.client.save(&self.doc).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WikiDocStatus;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn doc_json() -> serde_json::Value {
        json!({
            "id": "doc1",
            "name": "Onboarding",
            "content": "# Welcome",
            "description": "",
            "status": "Private",
            "owner_user_id": "user1",
            "team_id": "team1",
            "channel_id": "channel1",
            "create_at": 1700000000000i64,
            "update_at": 1700000000000i64,
            "delete_at": 0,
        })
    }

    #[tokio::test]
    async fn test_open_fetches_document() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wikiDocs/doc1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(doc_json()))
            .expect(1)
            .mount(&server)
            .await;

        let client = WikiDocsClient::with_api_url(server.uri());
        let editor = WikiDocEditor::open(client, "doc1").await.unwrap();
        assert_eq!(editor.doc().name, "Onboarding");
    }

    #[tokio::test]
    async fn test_update_merges_then_saves_merged_document() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wikiDocs/doc1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(doc_json()))
            .mount(&server)
            .await;

        let mut saved = doc_json();
        saved["content"] = json!("# Updated");
        saved["status"] = json!("Published");
        Mock::given(method("PATCH"))
            .and(path("/wikiDocs/doc1"))
            .and(body_json(saved.clone()))
            .respond_with(ResponseTemplate::new(200).set_body_json(saved))
            .expect(1)
            .mount(&server)
            .await;

        let client = WikiDocsClient::with_api_url(server.uri());
        let mut editor = WikiDocEditor::open(client, "doc1").await.unwrap();
        let result = editor
            .update(WikiDocPatch {
                content: Some("# Updated".to_string()),
                status: Some(WikiDocStatus::Published),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(result.content, "# Updated");
        assert_eq!(editor.doc().content, "# Updated");
        assert!(editor.doc().is_published());
    }

    #[tokio::test]
    async fn test_failed_save_keeps_optimistic_local_state() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wikiDocs/doc1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(doc_json()))
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/wikiDocs/doc1"))
            .respond_with(ResponseTemplate::new(500).set_body_string("save failed"))
            .mount(&server)
            .await;

        let client = WikiDocsClient::with_api_url(server.uri());
        let mut editor = WikiDocEditor::open(client, "doc1").await.unwrap();
        let err = editor
            .update(WikiDocPatch {
                name: Some("Renamed".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), Some(500));
        // no rollback: the local copy keeps the rejected edit
        assert_eq!(editor.doc().name, "Renamed");
    }
}
