// セッション機能のデータモデル

use serde::{Deserialize, Serialize};

/// 利用者の種別
///
/// このクライアントが扱うのは従業員アカウントのみ。管理側はバックオフィスの
/// 別システムが担当する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserKind {
    Employee,
}

/// ログイン中の利用者を表すセッションコンテキスト
///
/// ログインからログアウトまでアプリ状態に保持され、各コントローラーには
/// コンストラクタ経由で明示的に渡す。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    #[serde(rename = "type")]
    pub kind: UserKind,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl SessionContext {
    /// 従業員セッションを作成する
    pub fn employee(email: impl Into<String>, token: Option<String>) -> Self {
        Self {
            kind: UserKind::Employee,
            email: email.into(),
            token,
        }
    }

    /// 環境変数から既定のセッションを構築する
    ///
    /// # 戻り値
    /// EMPLOYEE_EMAILが設定されていればセッション、なければNone
    pub fn from_env() -> Option<Self> {
        let email = crate::get_env_var_optional!("EMPLOYEE_EMAIL")?;
        let token = crate::get_env_var_optional!("API_TOKEN").filter(|t| !t.is_empty());
        Some(Self::employee(email, token))
    }
}
