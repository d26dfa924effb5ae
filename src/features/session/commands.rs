// セッション機能のTauriコマンドハンドラー

use super::models::SessionContext;
use crate::shared::errors::AppError;
use crate::AppState;
use log::info;
use tauri::State;

/// ログインして従業員セッションを開始する
///
/// # 引数
/// * `email` - 従業員のメールアドレス
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 開始されたセッション、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn login(email: String, state: State<'_, AppState>) -> Result<SessionContext, String> {
    let email = email.trim().to_string();
    if email.is_empty() {
        return Err(AppError::validation("Veuillez saisir une adresse e-mail").into());
    }

    let session = SessionContext::employee(email, None);

    {
        let mut guard = state
            .session
            .lock()
            .map_err(|e| AppError::session(format!("セッションロック取得失敗: {e}")))?;
        *guard = Some(session.clone());
    }

    // 進行中のフォーム状態は新しいセッションには引き継がない
    let mut form = state.new_bill.lock().await;
    *form = None;

    info!("セッションを開始しました: email={}", session.email);
    Ok(session)
}

/// ログアウトしてセッションを終了する
#[tauri::command]
pub async fn logout(state: State<'_, AppState>) -> Result<(), String> {
    {
        let mut guard = state
            .session
            .lock()
            .map_err(|e| AppError::session(format!("セッションロック取得失敗: {e}")))?;
        *guard = None;
    }

    let mut form = state.new_bill.lock().await;
    *form = None;

    info!("セッションを終了しました");
    Ok(())
}

/// 現在のセッション利用者を取得する
///
/// # 戻り値
/// ログイン中のセッション、未ログインの場合はNone
#[tauri::command]
pub async fn current_user(state: State<'_, AppState>) -> Result<Option<SessionContext>, String> {
    let guard = state
        .session
        .lock()
        .map_err(|e| AppError::session(format!("セッションロック取得失敗: {e}")))?;
    Ok(guard.clone())
}
