// 新規請求書フォームのTauriコマンドハンドラー

use crate::features::bills::store::RemoteBillsStore;
use crate::features::new_bill::controller::{
    FileSelection, FileSelectionOutcome, NewBillController, NewBillForm,
};
use crate::features::session::require_session;
use crate::shared::errors::AppError;
use crate::shared::navigation::EventNavigator;
use crate::views::new_bill_ui;
use crate::AppState;
use tauri::State;

/// 新規請求書フォームを描画する
///
/// 画面を開くたびにフォームコントローラーを作り直し、前回の
/// アップロード状態を持ち越さない。
#[tauri::command]
pub async fn render_new_bill_page(state: State<'_, AppState>) -> Result<String, String> {
    let session = require_session(&state)?;
    let store = RemoteBillsStore::new(state.api.clone(), session.token.clone());

    let mut form = state.new_bill.lock().await;
    *form = Some(NewBillController::new(store, session));

    Ok(new_bill_ui())
}

/// 証憑ファイルの選択を処理する
///
/// # 引数
/// * `file_name` - 選択されたファイル名
/// * `file_data` - ファイルの内容
///
/// # 戻り値
/// 検証・アップロードの結果（拒否時はエラースロットに表示するメッセージ付き）
#[tauri::command]
pub async fn select_proof_file(
    file_name: String,
    file_data: Vec<u8>,
    state: State<'_, AppState>,
) -> Result<FileSelectionOutcome, String> {
    let mut guard = state.new_bill.lock().await;
    let controller = guard
        .as_mut()
        .ok_or_else(|| AppError::session("フォームが初期化されていません").user_message())?;

    Ok(controller
        .select_proof_file(FileSelection {
            file_name,
            data: file_data,
        })
        .await)
}

/// フォーム送信を処理する
///
/// 書き込みが成功した場合のみ一覧画面への遷移イベントが送られる。
/// 失敗はログに残るだけで、コマンドとしては成功を返す。
#[tauri::command]
pub async fn submit_bill(
    form: NewBillForm,
    app: tauri::AppHandle,
    state: State<'_, AppState>,
) -> Result<(), String> {
    let mut guard = state.new_bill.lock().await;
    let controller = guard
        .as_mut()
        .ok_or_else(|| AppError::session("フォームが初期化されていません").user_message())?;

    let navigator = EventNavigator::new(app);
    controller.submit(form, &navigator).await;
    Ok(())
}
