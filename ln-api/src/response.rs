//! Response types.
//!
//! Success bodies are kept exactly as received. Each model wraps the decoded
//! JSON and exposes typed accessors for the fields callers usually read, so
//! decoding only fails on a body that is not JSON, and a returned value
//! re-encodes to the JSON the server sent (absent keys stay absent, `null`
//! stays `null`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use ln_core::error::UNKNOWN_ERROR_MESSAGE;

/// Shared access to the raw body of a pass-through model.
macro_rules! raw_body {
    ($name:ident) => {
        impl $name {
            /// The body as received.
            pub fn as_value(&self) -> &Value {
                &self.0
            }

            /// Consume the model, returning the body as received.
            pub fn into_value(self) -> Value {
                self.0
            }

            /// Look up a top-level field by name.
            pub fn get(&self, key: &str) -> Option<&Value> {
                self.0.get(key)
            }
        }

        impl From<$name> for Value {
            fn from(model: $name) -> Value {
                model.0
            }
        }
    };
}

fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

fn i64_field(value: &Value, key: &str) -> Option<i64> {
    value.get(key).and_then(Value::as_i64)
}

/// Result of `POST /upload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UploadResult(pub Value);

raw_body!(UploadResult);

impl UploadResult {
    /// Stable file identifier, e.g. "img_01jcd8x9k2n".
    pub fn id(&self) -> Option<&str> {
        str_field(&self.0, "id")
    }

    /// Public URL of the stored file.
    pub fn url(&self) -> Option<&str> {
        str_field(&self.0, "url")
    }

    /// Size in bytes.
    pub fn size(&self) -> Option<i64> {
        i64_field(&self.0, "size")
    }

    pub fn mime_type(&self) -> Option<&str> {
        str_field(&self.0, "mime_type")
    }

    /// Creation timestamp. Newer servers call it `uploaded_at`.
    pub fn created_at(&self) -> Option<&str> {
        str_field(&self.0, "created_at").or_else(|| str_field(&self.0, "uploaded_at"))
    }
}

/// Result of `GET /files`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileListing(pub Value);

raw_body!(FileListing);

impl FileListing {
    /// Entries of this page, in server order. Empty when the body has no
    /// `files` array.
    pub fn files(&self) -> Vec<FileSummary<'_>> {
        self.0
            .get("files")
            .and_then(Value::as_array)
            .map(|files| files.iter().map(FileSummary).collect())
            .unwrap_or_default()
    }

    /// The `pagination` block, when present and an object.
    pub fn pagination(&self) -> Option<Pagination<'_>> {
        self.0
            .get("pagination")
            .filter(|p| p.is_object())
            .map(Pagination)
    }

    /// Whether more pages follow this one.
    pub fn has_more(&self) -> bool {
        let Some(p) = self.pagination() else {
            return false;
        };
        if p.next_url().is_some() {
            return true;
        }
        match (p.page(), p.total_pages(), p.offset(), p.total()) {
            (Some(page), Some(pages), _, _) => page < pages,
            (_, _, Some(offset), Some(total)) => {
                let shown = i64::try_from(self.files().len()).unwrap_or(i64::MAX);
                offset.saturating_add(shown) < total
            }
            _ => false,
        }
    }
}

/// One entry of a file listing, borrowed from its [`FileListing`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FileSummary<'a>(&'a Value);

impl<'a> FileSummary<'a> {
    pub fn id(&self) -> Option<&'a str> {
        str_field(self.0, "id")
    }

    pub fn url(&self) -> Option<&'a str> {
        str_field(self.0, "url")
    }

    pub fn filename(&self) -> Option<&'a str> {
        str_field(self.0, "filename")
    }

    /// Size in bytes.
    pub fn size(&self) -> Option<i64> {
        i64_field(self.0, "size")
    }

    pub fn mime_type(&self) -> Option<&'a str> {
        str_field(self.0, "mime_type")
    }

    pub fn created_at(&self) -> Option<&'a str> {
        str_field(self.0, "created_at")
    }

    pub fn uploaded_at(&self) -> Option<&'a str> {
        str_field(self.0, "uploaded_at")
    }

    /// The entry as received.
    pub fn as_value(&self) -> &'a Value {
        self.0
    }
}

/// Pagination block of a file listing. Which fields are present depends on
/// the server version (page-based or offset-based).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pagination<'a>(&'a Value);

impl<'a> Pagination<'a> {
    pub fn page(&self) -> Option<i64> {
        i64_field(self.0, "page")
    }

    pub fn limit(&self) -> Option<i64> {
        i64_field(self.0, "limit")
    }

    pub fn total(&self) -> Option<i64> {
        i64_field(self.0, "total")
    }

    pub fn total_pages(&self) -> Option<i64> {
        i64_field(self.0, "total_pages")
    }

    pub fn offset(&self) -> Option<i64> {
        i64_field(self.0, "offset")
    }

    /// URL of the next page, when the server provides one.
    pub fn next_url(&self) -> Option<&'a str> {
        str_field(self.0, "next")
    }

    pub fn as_value(&self) -> &'a Value {
        self.0
    }
}

/// Result of `GET /stats`, kept as the raw body.
///
/// The accessors understand both the flat shape
/// (`storage_used_bytes`, `file_count`, `quota_bytes`) and the nested one
/// (`storage.used_bytes`, `files.count`, `storage.quota_bytes`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsageStats(pub Value);

raw_body!(UsageStats);

impl UsageStats {
    /// Bytes of storage in use.
    pub fn storage_used_bytes(&self) -> Option<i64> {
        self.lookup("/storage_used_bytes", "/storage/used_bytes")
    }

    /// Number of stored files.
    pub fn file_count(&self) -> Option<i64> {
        self.lookup("/file_count", "/files/count")
    }

    /// Storage quota in bytes.
    pub fn quota_bytes(&self) -> Option<i64> {
        self.lookup("/quota_bytes", "/storage/quota_bytes")
    }

    fn lookup(&self, flat: &str, nested: &str) -> Option<i64> {
        self.0
            .pointer(flat)
            .or_else(|| self.0.pointer(nested))
            .and_then(Value::as_i64)
    }
}

/// Result of `DELETE /i/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeleteResult(pub Value);

raw_body!(DeleteResult);

impl DeleteResult {
    /// The server's `success` flag; false when missing.
    pub fn success(&self) -> bool {
        self.0.get("success").and_then(Value::as_bool).unwrap_or(false)
    }
}

/// Body of `GET /key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestKey(pub Value);

raw_body!(TestKey);

impl TestKey {
    pub fn api_key(&self) -> Option<&str> {
        str_field(&self.0, "api_key")
    }

    /// Key tier, e.g. "test".
    pub fn key_type(&self) -> Option<&str> {
        str_field(&self.0, "type")
    }

    pub fn message(&self) -> Option<&str> {
        str_field(&self.0, "message")
    }

    /// Limits attached to the key (file size, storage, bandwidth, rate).
    pub fn limits(&self) -> Option<&Value> {
        self.0.get("limits").filter(|l| !l.is_null())
    }

    /// Link to the API documentation.
    pub fn docs(&self) -> Option<&str> {
        str_field(&self.0, "docs")
    }
}

/// Error body returned by the service:
/// ```json
/// { "error": { "message": "File not found", "type": "not_found", "code": "file_not_found" } }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: Option<ErrorDetail>,
}

/// Error detail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub code: Option<String>,
}

impl ErrorEnvelope {
    /// Extract `error.message` from a raw error body, falling back to
    /// "Unknown error" when the body is not JSON or has no message.
    pub fn message_from_body(body: &[u8]) -> String {
        serde_json::from_slice::<ErrorEnvelope>(body)
            .ok()
            .and_then(|env| env.error)
            .and_then(|detail| detail.message)
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string())
    }
}
