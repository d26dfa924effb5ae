// 請求書リソースのリモートストア

use crate::features::bills::models::{Bill, BillPayload, UploadedProof};
use crate::shared::api_client::ApiClient;
use crate::shared::errors::{AppError, AppResult};
use log::info;
use reqwest::multipart;
use std::future::Future;
use std::sync::Arc;

/// 請求書リソースに対するストア操作のインターフェース
///
/// リモートAPIの `bills` リソースを抽象化する。テストではこのトレイトを
/// 実装したフェイクを注入する。
pub trait BillsStore: Send + Sync {
    /// 請求書一覧を取得する
    fn list(&self) -> impl Future<Output = AppResult<Vec<Bill>>> + Send;

    /// 請求書を新規作成する
    fn create(&self, draft: &BillPayload) -> impl Future<Output = AppResult<Bill>> + Send;

    /// 請求書を更新する
    fn update(&self, id: &str, patch: &BillPayload) -> impl Future<Output = AppResult<Bill>> + Send;

    /// 証憑ファイルをアップロードする
    ///
    /// アップロードと同時に請求書レコードが作成され、その識別子が返る。
    fn upload_file(
        &self,
        file_name: &str,
        data: Vec<u8>,
        email: &str,
    ) -> impl Future<Output = AppResult<UploadedProof>> + Send;
}

/// リモートAPIを利用するBillsStore実装
#[derive(Clone)]
pub struct RemoteBillsStore {
    api: Arc<ApiClient>,
    auth_token: Option<String>,
}

impl RemoteBillsStore {
    /// 新しいリモートストアを作成する
    ///
    /// # 引数
    /// * `api` - APIクライアント
    /// * `auth_token` - セッションの認証トークン（ある場合）
    pub fn new(api: Arc<ApiClient>, auth_token: Option<String>) -> Self {
        Self { api, auth_token }
    }
}

impl BillsStore for RemoteBillsStore {
    async fn list(&self) -> AppResult<Vec<Bill>> {
        self.api.get("/bills", self.auth_token.as_deref()).await
    }

    async fn create(&self, draft: &BillPayload) -> AppResult<Bill> {
        self.api
            .post("/bills", draft, self.auth_token.as_deref())
            .await
    }

    async fn update(&self, id: &str, patch: &BillPayload) -> AppResult<Bill> {
        self.api
            .patch(&format!("/bills/{id}"), patch, self.auth_token.as_deref())
            .await
    }

    async fn upload_file(
        &self,
        file_name: &str,
        data: Vec<u8>,
        email: &str,
    ) -> AppResult<UploadedProof> {
        info!(
            "証憑ファイルのアップロードリクエストを構築します: file_name={file_name}, size={} bytes",
            data.len()
        );

        let part = multipart::Part::bytes(data)
            .file_name(file_name.to_string())
            .mime_str(&content_type_for(file_name))
            .map_err(|e| AppError::validation(format!("MIMEタイプ設定エラー: {e}")))?;

        let form = multipart::Form::new()
            .part("file", part)
            .text("email", email.to_string());

        self.api
            .post_multipart("/bills", form, self.auth_token.as_deref())
            .await
    }
}

/// ファイル名からContent-Typeを推定する
pub fn content_type_for(file_name: &str) -> String {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png".to_string(),
        "jpg" | "jpeg" => "image/jpeg".to_string(),
        _ => "application/octet-stream".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_detection() {
        assert_eq!(content_type_for("justificatif.png"), "image/png");
        assert_eq!(content_type_for("justificatif.jpg"), "image/jpeg");
        assert_eq!(content_type_for("justificatif.JPEG"), "image/jpeg");
        assert_eq!(
            content_type_for("justificatif.inconnu"),
            "application/octet-stream"
        );
        assert_eq!(content_type_for("sans-extension"), "application/octet-stream");
    }
}
