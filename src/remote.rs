//! Remote document-store adapter.
//!
//! The backend is treated as an opaque collection service: named collections
//! of uniquely-keyed JSON documents plus a blob store for image uploads.
//! Callers are expected to catch every error and fall back to the local
//! cache; nothing here is allowed to take the daemon down.

use anyhow::{anyhow, Context};
use serde_json::{json, Value};

/// Backend conditions callers branch on; everything else stays an opaque
/// transport error.
#[derive(Debug)]
pub enum RemoteError {
    NotFound,
}

impl std::fmt::Display for RemoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoteError::NotFound => write!(f, "document not found"),
        }
    }
}

impl std::error::Error for RemoteError {}

/// True when the error chain bottoms out in a remote not-found.
pub fn is_not_found(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<RemoteError>(), Some(RemoteError::NotFound))
}

pub trait RemoteStore {
    /// Returns every document in `collection`, each carrying its
    /// remote-assigned id in an `id` field.
    fn fetch_all(&self, collection: &str) -> anyhow::Result<Vec<Value>>;

    /// Deletes every existing document and inserts `items` as new documents
    /// keyed by each item's `id` field, as one logical batch. Atomicity is
    /// delegated to the backend; a concurrent reader against a
    /// non-transactional backend may observe a partial state.
    fn replace_all(&self, collection: &str, items: &[Value]) -> anyhow::Result<()>;

    /// Merge-style upsert of one document under a caller-chosen id.
    fn set_document(&self, collection: &str, id: &str, doc: &Value) -> anyhow::Result<()>;

    fn delete_document(&self, collection: &str, id: &str) -> anyhow::Result<()>;

    /// Stores a binary object; returns its metadata (at least `storagePath`
    /// and `downloadURL`).
    fn upload_blob(&self, storage_name: &str, bytes: &[u8]) -> anyhow::Result<Value>;

    fn delete_blob(&self, storage_path: &str) -> anyhow::Result<()>;
}

pub struct HttpRemoteStore {
    base_url: String,
    api_key: Option<String>,
}

impl HttpRemoteStore {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn request(&self, method: &str, url: &str) -> ureq::Request {
        let mut req = ureq::request(method, url);
        if let Some(key) = &self.api_key {
            req = req.set("Authorization", &format!("Bearer {}", key));
        }
        req
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/collections/{}", self.base_url, collection)
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/collections/{}/{}", self.base_url, collection, id)
    }
}

impl RemoteStore for HttpRemoteStore {
    fn fetch_all(&self, collection: &str) -> anyhow::Result<Vec<Value>> {
        let url = self.collection_url(collection);
        let body: Value = self
            .request("GET", &url)
            .call()
            .with_context(|| format!("fetch collection {}", collection))?
            .into_json()
            .context("parse collection response")?;

        // Accept either a bare array or the `{ "documents": [...] }` envelope.
        let docs = match body {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("documents") {
                Some(Value::Array(items)) => items,
                _ => return Err(anyhow!("collection {} response has no documents", collection)),
            },
            _ => return Err(anyhow!("unexpected collection {} response shape", collection)),
        };
        Ok(docs)
    }

    fn replace_all(&self, collection: &str, items: &[Value]) -> anyhow::Result<()> {
        let url = self.collection_url(collection);
        self.request("PUT", &url)
            .send_json(json!({ "documents": items }))
            .with_context(|| format!("replace collection {}", collection))?;
        Ok(())
    }

    fn set_document(&self, collection: &str, id: &str, doc: &Value) -> anyhow::Result<()> {
        let url = self.document_url(collection, id);
        self.request("PUT", &url)
            .query("merge", "true")
            .send_json(doc)
            .with_context(|| format!("set document {}/{}", collection, id))?;
        Ok(())
    }

    fn delete_document(&self, collection: &str, id: &str) -> anyhow::Result<()> {
        let url = self.document_url(collection, id);
        match self.request("DELETE", &url).call() {
            Ok(_) => Ok(()),
            Err(ureq::Error::Status(404, _)) => Err(anyhow::Error::new(RemoteError::NotFound))
                .with_context(|| format!("delete document {}/{}", collection, id)),
            Err(e) => {
                Err(e).with_context(|| format!("delete document {}/{}", collection, id))
            }
        }
    }

    fn upload_blob(&self, storage_name: &str, bytes: &[u8]) -> anyhow::Result<Value> {
        let url = format!("{}/blobs", self.base_url);
        let body: Value = self
            .request("POST", &url)
            .query("name", storage_name)
            .set("Content-Type", "application/octet-stream")
            .send_bytes(bytes)
            .with_context(|| format!("upload blob {}", storage_name))?
            .into_json()
            .context("parse blob upload response")?;
        Ok(body)
    }

    fn delete_blob(&self, storage_path: &str) -> anyhow::Result<()> {
        let url = format!("{}/blobs", self.base_url);
        self.request("DELETE", &url)
            .query("path", storage_path)
            .call()
            .with_context(|| format!("delete blob {}", storage_path))?;
        Ok(())
    }
}
