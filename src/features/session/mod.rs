// セッション機能モジュール

pub mod commands;
pub mod models;

use crate::shared::errors::{AppError, AppResult};
use models::SessionContext;

/// アプリ状態から現在のセッションを取り出す
///
/// # 戻り値
/// ログイン中のセッション、未ログインの場合はエラー
pub fn require_session(state: &tauri::State<'_, crate::AppState>) -> AppResult<SessionContext> {
    state
        .session
        .lock()
        .map_err(|e| AppError::session(format!("セッションロック取得失敗: {e}")))?
        .clone()
        .ok_or_else(|| AppError::session("ログインしていません"))
}
