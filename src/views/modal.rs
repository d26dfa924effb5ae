// 証憑モーダル

use crate::views::escape_html;
use log::{info, warn};
use tauri::Emitter;

/// 証憑モーダルの操作インターフェース
///
/// 一覧コントローラーには実装を注入する。テストでは記録用のフェイクを使う。
pub trait ProofModal {
    /// 指定されたURLの証憑をモーダルで表示する
    fn open(&self, file_url: &str);

    /// モーダルを閉じる
    fn close(&self);
}

/// モーダル本体に差し込む証憑画像のフラグメントを組み立てる
pub fn proof_modal_body(file_url: &str) -> String {
    format!(
        r#"<div style="text-align: center;" class="bill-proof-container"><img width="100%" src="{}" alt="Bill" /></div>"#,
        escape_html(file_url)
    )
}

/// TauriイベントでWebView側のモーダルを操作するProofModal実装
pub struct EventProofModal {
    app: tauri::AppHandle,
}

impl EventProofModal {
    pub fn new(app: tauri::AppHandle) -> Self {
        Self { app }
    }
}

impl ProofModal for EventProofModal {
    fn open(&self, file_url: &str) {
        info!("証憑モーダルを開きます: file_url={file_url}");
        if let Err(e) = self.app.emit("show-proof-modal", proof_modal_body(file_url)) {
            warn!("証憑モーダルイベントの送信に失敗しました: {e}");
        }
    }

    fn close(&self) {
        if let Err(e) = self.app.emit("hide-proof-modal", ()) {
            warn!("証憑モーダルイベントの送信に失敗しました: {e}");
        }
    }
}
