// 請求書一覧のTauriコマンドハンドラー

use crate::features::bills::controller::BillsController;
use crate::features::bills::store::RemoteBillsStore;
use crate::features::session::require_session;
use crate::shared::errors::ErrorSeverity;
use crate::shared::navigation::EventNavigator;
use crate::views::modal::EventProofModal;
use crate::views::{bills_ui, BillsViewState};
use crate::AppState;
use log::{error, warn};
use tauri::State;

/// 請求書一覧画面を描画する
///
/// 取得に失敗した場合もコマンド自体は成功し、エラーメッセージを含む
/// フラグメントを返す。
///
/// # 戻り値
/// 一覧画面のHTMLフラグメント、またはセッションがない場合はエラーメッセージ
#[tauri::command]
pub async fn render_bills_page(state: State<'_, AppState>) -> Result<String, String> {
    let session = require_session(&state)?;
    let store = RemoteBillsStore::new(state.api.clone(), session.token.clone());
    let controller = BillsController::new(store, session);

    match controller.get_bills().await {
        Ok(rows) => Ok(bills_ui(&BillsViewState::Ready(rows))),
        Err(e) => {
            match e.severity() {
                ErrorSeverity::High => error!("請求書一覧の取得に失敗しました: {e}"),
                _ => warn!("請求書一覧の取得に失敗しました: {e}"),
            }
            Ok(bills_ui(&BillsViewState::Error(e.user_message())))
        }
    }
}

/// クリックされた行の証憑をモーダルで開く
///
/// # 引数
/// * `file_url` - 行に紐付いた証憑URL（証憑がない行はNone）
#[tauri::command]
pub async fn view_proof(
    file_url: Option<String>,
    app: tauri::AppHandle,
    state: State<'_, AppState>,
) -> Result<(), String> {
    let session = require_session(&state)?;
    let store = RemoteBillsStore::new(state.api.clone(), session.token.clone());
    let controller = BillsController::new(store, session);

    let modal = EventProofModal::new(app);
    controller.view_proof(file_url.as_deref(), &modal);
    Ok(())
}

/// 新規請求書画面へ遷移する
#[tauri::command]
pub async fn go_to_new_bill(
    app: tauri::AppHandle,
    state: State<'_, AppState>,
) -> Result<(), String> {
    let session = require_session(&state)?;
    let store = RemoteBillsStore::new(state.api.clone(), session.token.clone());
    let controller = BillsController::new(store, session);

    let navigator = EventNavigator::new(app);
    controller.go_to_new_bill(&navigator);
    Ok(())
}
