use thiserror::Error;

/// アプリケーション全体で使用される統一エラー型
#[derive(Debug, Error)]
pub enum AppError {
    /// 入力バリデーションのエラー（メッセージはそのまま画面に表示される）
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// リモートAPIがHTTPエラーステータスを返した場合のエラー
    #[error("リモートAPIエラー: ステータス {0}")]
    Remote(u16),

    /// リモートAPIへの接続に失敗した場合のエラー
    #[error("ネットワークエラー: {0}")]
    Network(String),

    /// レスポンス解析のエラー
    #[error("レスポンス解析エラー: {0}")]
    Parse(String),

    /// 設定関連のエラー
    #[error("設定エラー: {0}")]
    Configuration(String),

    /// セッション関連のエラー
    #[error("セッションエラー: {0}")]
    Session(String),
}

/// エラーの重要度を表す列挙型
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ErrorSeverity {
    /// 低重要度（ユーザー入力エラーなど）
    Low,
    /// 中重要度（リモートAPIの一時的エラーなど）
    Medium,
    /// 高重要度（設定不備など、操作では回復できないもの）
    High,
}

impl AppError {
    /// ユーザーに表示するためのメッセージを取得
    ///
    /// # 戻り値
    /// 画面にそのまま表示可能なエラーメッセージ（フランス語）
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Remote(status) => format!("Erreur {status}"),
            AppError::Network(_) => "Erreur de connexion au serveur".to_string(),
            AppError::Parse(_) => "Erreur de lecture de la réponse du serveur".to_string(),
            AppError::Configuration(_) => "Erreur de configuration de l'application".to_string(),
            AppError::Session(_) => "Veuillez vous connecter avec un compte employé".to_string(),
        }
    }

    /// エラーの詳細情報を取得
    ///
    /// # 戻り値
    /// エラーの詳細情報（ログ出力用）
    pub fn details(&self) -> String {
        format!("{self}")
    }

    /// エラーの重要度を取得
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Validation(_) => ErrorSeverity::Low,
            AppError::Remote(_) => ErrorSeverity::Medium,
            AppError::Network(_) => ErrorSeverity::Medium,
            AppError::Parse(_) => ErrorSeverity::Medium,
            AppError::Configuration(_) => ErrorSeverity::High,
            AppError::Session(_) => ErrorSeverity::Low,
        }
    }

    /// バリデーションエラーを作成するヘルパー関数
    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    /// HTTPステータスコードからリモートAPIエラーを作成するヘルパー関数
    pub fn remote(status: u16) -> Self {
        AppError::Remote(status)
    }

    /// ネットワークエラーを作成するヘルパー関数
    pub fn network<S: Into<String>>(message: S) -> Self {
        AppError::Network(message.into())
    }

    /// レスポンス解析エラーを作成するヘルパー関数
    pub fn parse<S: Into<String>>(message: S) -> Self {
        AppError::Parse(message.into())
    }

    /// 設定エラーを作成するヘルパー関数
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// セッションエラーを作成するヘルパー関数
    pub fn session<S: Into<String>>(message: S) -> Self {
        AppError::Session(message.into())
    }
}

/// AppErrorからStringへの変換（Tauriコマンドでの使用のため）
impl From<AppError> for String {
    fn from(error: AppError) -> Self {
        error.user_message()
    }
}

/// reqwest::ErrorからAppErrorへの変換
///
/// ステータスコード付きのエラーはRemote、それ以外（接続失敗・タイムアウト等）は
/// Networkとして扱う。
impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            AppError::Remote(status.as_u16())
        } else if error.is_decode() {
            AppError::Parse(error.to_string())
        } else {
            AppError::Network(error.to_string())
        }
    }
}

/// Result型のエイリアス（アプリケーション全体で使用）
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_user_message() {
        // リモートAPIエラーは「Erreur {ステータス}」形式で表示される
        assert_eq!(AppError::remote(404).user_message(), "Erreur 404");
        assert_eq!(AppError::remote(500).user_message(), "Erreur 500");
    }

    #[test]
    fn test_validation_error_user_message() {
        // バリデーションエラーはメッセージがそのまま表示される
        let error = AppError::validation("formats autorisés : .jpeg, .jpg, .png");
        assert_eq!(
            error.user_message(),
            "formats autorisés : .jpeg, .jpg, .png"
        );
    }

    #[test]
    fn test_error_severity() {
        // 各エラータイプの重要度をテスト
        assert_eq!(
            AppError::validation("テスト").severity(),
            ErrorSeverity::Low
        );
        assert_eq!(AppError::remote(500).severity(), ErrorSeverity::Medium);
        assert_eq!(
            AppError::network("接続失敗").severity(),
            ErrorSeverity::Medium
        );
        assert_eq!(
            AppError::configuration("設定不備").severity(),
            ErrorSeverity::High
        );
    }

    #[test]
    fn test_helper_functions() {
        // ヘルパー関数のテスト
        assert!(matches!(
            AppError::validation("テスト"),
            AppError::Validation(_)
        ));
        assert!(matches!(AppError::remote(404), AppError::Remote(404)));
        assert!(matches!(AppError::parse("解析失敗"), AppError::Parse(_)));
        assert!(matches!(
            AppError::session("未ログイン"),
            AppError::Session(_)
        ));
    }

    #[test]
    fn test_string_conversion() {
        // String変換のテスト（コマンド境界での利用を想定）
        let error_string: String = AppError::remote(404).into();
        assert_eq!(error_string, "Erreur 404");
    }

    #[test]
    fn test_error_details() {
        // エラー詳細のテスト
        let details = AppError::validation("詳細テスト").details();
        assert!(details.contains("詳細テスト"));
    }
}
