// 機能モジュール構造
pub mod features;
pub mod shared;
pub mod views;

use features::bills::store::RemoteBillsStore;
use features::new_bill::controller::NewBillController;
use features::session::models::SessionContext;
use log::info;
use shared::api_client::ApiClient;
use shared::config::environment::{initialize_logging_system, load_environment_variables};
use std::sync::{Arc, Mutex};

/// アプリケーション状態
///
/// セッションと進行中のフォーム状態を保持する。フォームコントローラーは
/// アップロード処理の間ロックを保持するため、tokioのMutexに入れる。
pub struct AppState {
    pub api: Arc<ApiClient>,
    pub session: Mutex<Option<SessionContext>>,
    pub new_bill: tokio::sync::Mutex<Option<NewBillController<RemoteBillsStore>>>,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            use tauri::Manager;

            // 環境変数を読み込み（ログシステム初期化前に実行）
            load_environment_variables();

            // ログシステムを初期化
            initialize_logging_system();

            info!("アプリケーション初期化を開始します...");

            // APIクライアントを初期化
            let api = ApiClient::new()
                .map_err(|e| format!("APIクライアント初期化失敗: {e}"))?;

            // 環境変数に既定の従業員セッションがあれば読み込む
            let session = SessionContext::from_env();
            match &session {
                Some(s) => info!("既定のセッションを読み込みました: email={}", s.email),
                None => info!("既定のセッションはありません。ログイン操作を待ちます"),
            }

            app.manage(AppState {
                api: Arc::new(api),
                session: Mutex::new(session),
                new_bill: tokio::sync::Mutex::new(None),
            });

            info!("アプリケーション初期化が完了しました");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // セッションコマンド
            features::session::commands::login,
            features::session::commands::logout,
            features::session::commands::current_user,
            // 請求書一覧コマンド
            features::bills::commands::render_bills_page,
            features::bills::commands::view_proof,
            features::bills::commands::go_to_new_bill,
            // 新規請求書コマンド
            features::new_bill::commands::render_new_bill_page,
            features::new_bill::commands::select_proof_file,
            features::new_bill::commands::submit_bill,
        ])
        .run(tauri::generate_context!())
        .expect("Tauriアプリケーションの実行中にエラーが発生しました");
}
