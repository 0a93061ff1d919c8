use reqwest::multipart;

use crate::config;

use super::client::{ApiClient, CallOptions};
use super::pagination::PaginatedResponse;
use super::routes;
use super::types::{ApiError, ArchiveFileRequest, FilePayload, FileUploadModel};

impl ApiClient {
    pub async fn list_files(
        &self,
        associating_id: &str,
    ) -> Result<PaginatedResponse<FileUploadModel>, ApiError> {
        self.invoke(
            &routes::files::LIST,
            CallOptions::new().query("associating_id", associating_id),
        )
        .await
    }

    pub async fn upload_file(
        &self,
        associating_id: &str,
        file_name: &str,
        mime_type: &str,
        contents: Vec<u8>,
    ) -> Result<FileUploadModel, ApiError> {
        let part = multipart::Part::bytes(contents)
            .file_name(file_name.to_string())
            .mime_str(mime_type)
            .map_err(|_| ApiError::validation(format!("Unsupported file type: {}", mime_type)))?;
        let form = multipart::Form::new()
            .text("name", file_name.to_string())
            .text("associating_id", associating_id.to_string())
            .part("file", part);
        self.invoke_multipart(&routes::files::CREATE, CallOptions::new(), form)
            .await
    }

    pub async fn rename_file(&self, id: &str, name: &str) -> Result<FileUploadModel, ApiError> {
        let payload = FilePayload {
            name: Some(name.to_string()),
            associating_id: None,
        };
        self.invoke(
            &routes::files::UPDATE,
            CallOptions::new().path_param("id", id).body(&payload)?,
        )
        .await
    }

    /// Archiving is soft deletion; the reason is mandatory and kept on
    /// the record.
    pub async fn archive_file(&self, id: &str, reason: &str) -> Result<FileUploadModel, ApiError> {
        let payload = ArchiveFileRequest {
            archive_reason: reason.to_string(),
        };
        self.invoke(
            &routes::files::ARCHIVE,
            CallOptions::new().path_param("id", id).body(&payload)?,
        )
        .await
    }

    pub async fn profile_picture(&self, username: &str) -> Result<Vec<u8>, ApiError> {
        self.invoke_bytes(
            &routes::users::PROFILE_PICTURE,
            CallOptions::new().path_param("username", username).silent(),
        )
        .await
    }

    pub async fn upload_profile_picture(
        &self,
        username: &str,
        file_name: &str,
        mime_type: &str,
        contents: Vec<u8>,
    ) -> Result<(), ApiError> {
        let limit_mb = config::max_avatar_size_mb();
        if contents.len() > limit_mb as usize * 1024 * 1024 {
            return Err(ApiError::validation(format!(
                "Image is larger than the {} MB limit",
                limit_mb
            )));
        }
        let part = multipart::Part::bytes(contents)
            .file_name(file_name.to_string())
            .mime_str(mime_type)
            .map_err(|_| ApiError::validation(format!("Unsupported image type: {}", mime_type)))?;
        let form = multipart::Form::new().part("file", part);
        self.invoke_multipart::<serde_json::Value>(
            &routes::users::UPLOAD_PROFILE_PICTURE,
            CallOptions::new().path_param("username", username),
            form,
        )
        .await
        .map(|_| ())
    }

    pub async fn delete_profile_picture(&self, username: &str) -> Result<(), ApiError> {
        self.invoke::<serde_json::Value>(
            &routes::users::DELETE_PROFILE_PICTURE,
            CallOptions::new().path_param("username", username),
        )
        .await
        .map(|_| ())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn archive_posts_the_reason() {
        let server = MockServer::start_async().await;
        let archive = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v1/files/f-2/archive/")
                .json_body(json!({ "archive_reason": "superseded by signed copy" }));
            then.status(200).header("content-type", "application/json").json_body(json!({
                "id": "f-2",
                "name": "contract.pdf",
                "is_archived": true,
                "archive_reason": "superseded by signed copy"
            }));
        });

        let client = ApiClient::new_with_base_url(server.base_url());
        let archived = client
            .archive_file("f-2", "superseded by signed copy")
            .await
            .unwrap();
        assert!(archived.is_archived);
        archive.assert_async().await;
    }

    #[tokio::test]
    async fn oversized_avatar_is_rejected_before_upload() {
        let client = ApiClient::new_with_base_url("http://localhost:9");
        let oversized = vec![0u8; (crate::config::max_avatar_size_mb() as usize * 1024 * 1024) + 1];
        let error = client
            .upload_profile_picture("ada", "avatar.png", "image/png", oversized)
            .await
            .unwrap_err();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }
}
