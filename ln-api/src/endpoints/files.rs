//! File endpoints: upload, listing and soft delete.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use tracing::debug;

use ln_core::constants::{self, sort};
use ln_core::error::LnResult;

use crate::client::{check_status, parse_body, ApiClient};
use crate::response::{DeleteResult, FileListing, UploadResult};

/// Query parameters for `GET /files`.
///
/// Values are forwarded as given; the service validates them and reports
/// bad values through its error response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFilesParams {
    /// 1-based page number.
    pub page: u32,
    /// Files per page.
    pub limit: u32,
    /// One of `ln_core::constants::sort::ALL`.
    pub sort: String,
}

impl Default for ListFilesParams {
    fn default() -> Self {
        Self {
            page: constants::DEFAULT_PAGE,
            limit: constants::DEFAULT_PAGE_LIMIT,
            sort: sort::DEFAULT.to_string(),
        }
    }
}

impl ListFilesParams {
    pub fn new(page: u32, limit: u32, sort: impl Into<String>) -> Self {
        Self {
            page,
            limit,
            sort: sort.into(),
        }
    }

    /// Same limit and sort, next page.
    pub fn next_page(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            ..self.clone()
        }
    }

    fn to_query(&self) -> [(&'static str, String); 3] {
        [
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("sort", self.sort.clone()),
        ]
    }
}

impl ApiClient {
    /// Upload a local file as multipart field `file`.
    ///
    /// The file is read and its handle closed before the request is sent.
    /// A missing or unreadable file fails with `LnError::Io`; a non-success
    /// status fails with `LnError::Http` (the error body is not inspected).
    pub async fn upload(&self, file_path: impl AsRef<Path>) -> LnResult<UploadResult> {
        let path = file_path.as_ref();
        let http = self.session.http()?;

        let contents = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        debug!("POST (multipart) /upload {} ({} bytes)", file_name, contents.len());

        let form = Form::new().part("file", Part::bytes(contents).file_name(file_name));

        let response = http.post(self.url("/upload")).multipart(form).send().await?;
        let response = check_status(response)?;
        let body = response.bytes().await?;
        parse_body(&body)
    }

    /// List uploaded files, one page at a time.
    pub async fn list_files(&self, params: &ListFilesParams) -> LnResult<FileListing> {
        self.request(Method::GET, "/files", &params.to_query(), None)
            .await
    }

    /// Soft-delete an image by id (e.g. "img_01jcd8x9k2n").
    pub async fn delete_file(&self, image_id: &str) -> LnResult<DeleteResult> {
        self.request(Method::DELETE, &format!("/i/{image_id}"), &[], None)
            .await
    }
}
