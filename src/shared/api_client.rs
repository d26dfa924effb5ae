/// 汎用APIクライアント
///
/// リモートAPIサーバーとの通信を行う汎用的なクライアント。
/// 請求書リソースのJSON操作とmultipart形式のファイルアップロードで使用する。
use crate::shared::config::environment::ApiConfig;
use crate::shared::errors::{AppError, AppResult};
use log::{info, warn};
use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// APIクライアント設定
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5678".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl ApiClientConfig {
    /// 環境設定からAPIクライアント設定を作成
    pub fn from_env() -> AppResult<Self> {
        let api_config = ApiConfig::from_env()?;
        Ok(Self {
            base_url: api_config.base_url,
            timeout_seconds: api_config.timeout_seconds,
        })
    }
}

/// 汎用APIクライアント
///
/// 失敗したリクエストは自動でリトライしない。一覧取得・書き込みとも
/// 失敗は一度だけ呼び出し元へ報告される。
pub struct ApiClient {
    client: Client,
    config: ApiClientConfig,
}

impl ApiClient {
    /// 新しいAPIクライアントを作成
    pub fn new() -> AppResult<Self> {
        let config = ApiClientConfig::from_env()?;
        Self::new_with_config(config)
    }

    /// 設定を指定してAPIクライアントを作成
    pub fn new_with_config(config: ApiClientConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::configuration(format!("HTTPクライアント初期化失敗: {e}")))?;

        Ok(Self { client, config })
    }

    /// エンドポイントから完全なURLを組み立てる
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    /// GETリクエストを送信
    ///
    /// # 引数
    /// * `endpoint` - エンドポイントパス（例: `/bills`）
    /// * `auth_token` - 認証トークン（ある場合）
    ///
    /// # 戻り値
    /// デシリアライズ済みのレスポンス、または失敗時はエラー
    pub async fn get<T>(&self, endpoint: &str, auth_token: Option<&str>) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let request = self.client.get(self.endpoint_url(endpoint));
        self.send(request, auth_token, "GET", endpoint).await
    }

    /// POSTリクエストを送信（JSONボディ）
    pub async fn post<B, T>(
        &self,
        endpoint: &str,
        body: &B,
        auth_token: Option<&str>,
    ) -> AppResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = self.client.post(self.endpoint_url(endpoint)).json(body);
        self.send(request, auth_token, "POST", endpoint).await
    }

    /// PATCHリクエストを送信（JSONボディ）
    pub async fn patch<B, T>(
        &self,
        endpoint: &str,
        body: &B,
        auth_token: Option<&str>,
    ) -> AppResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = self.client.patch(self.endpoint_url(endpoint)).json(body);
        self.send(request, auth_token, "PATCH", endpoint).await
    }

    /// multipartフォームをPOSTで送信（ファイルアップロード用）
    pub async fn post_multipart<T>(
        &self,
        endpoint: &str,
        form: Form,
        auth_token: Option<&str>,
    ) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let request = self
            .client
            .post(self.endpoint_url(endpoint))
            .multipart(form);
        self.send(request, auth_token, "POST(multipart)", endpoint)
            .await
    }

    /// リクエストを送信してレスポンスを解析する
    ///
    /// 成功ステータス以外はステータスコードを保持したエラーに変換する。
    async fn send<T>(
        &self,
        request: RequestBuilder,
        auth_token: Option<&str>,
        method: &str,
        endpoint: &str,
    ) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        // リクエスト相関ID（ログとサーバー側の突き合わせ用）
        let request_id = Uuid::new_v4();
        info!("{method}リクエスト送信: endpoint={endpoint}, request_id={request_id}");

        let mut request = request.header("x-request-id", request_id.to_string());
        if let Some(token) = auth_token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let response = request.send().await.map_err(|e| {
            warn!("{method}リクエスト失敗: endpoint={endpoint}, request_id={request_id}, error={e}");
            AppError::network(format!("APIサーバーへの接続に失敗しました: {e}"))
        })?;

        if !response.status().is_success() {
            return Err(self
                .handle_error_response(response, method, endpoint, request_id)
                .await);
        }

        let result: T = response
            .json()
            .await
            .map_err(|e| AppError::parse(format!("レスポンス解析エラー: {e}")))?;

        info!("{method}リクエスト成功: endpoint={endpoint}, request_id={request_id}");
        Ok(result)
    }

    /// エラーレスポンスを処理し、ステータスコード付きのエラーを返す
    async fn handle_error_response(
        &self,
        response: Response,
        method: &str,
        endpoint: &str,
        request_id: Uuid,
    ) -> AppError {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "レスポンス読み取り失敗".to_string());

        warn!(
            "APIサーバーエラー: method={method}, endpoint={endpoint}, request_id={request_id}, \
             status={status}, body={body}"
        );

        AppError::remote(status)
    }
}
