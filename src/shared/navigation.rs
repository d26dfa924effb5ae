// 画面遷移モジュール

use log::{info, warn};
use tauri::Emitter;

/// 画面遷移先を表す列挙型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// 請求書一覧画面
    Bills,
    /// 新規請求書画面
    NewBill,
}

impl Route {
    /// 画面に対応するハッシュパスを取得
    pub fn path(&self) -> &'static str {
        match self {
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
        }
    }

    /// ハッシュパスから画面を判定
    pub fn from_path(path: &str) -> Option<Route> {
        match path {
            "#employee/bills" => Some(Route::Bills),
            "#employee/bill/new" => Some(Route::NewBill),
            _ => None,
        }
    }
}

/// 画面遷移を抽象化するインターフェース
///
/// コントローラーには実装を注入する。テストでは記録用のフェイクを使う。
pub trait Navigator {
    /// 指定された画面へ遷移する
    fn navigate(&self, route: Route);
}

/// Tauriイベント経由でWebViewに遷移を通知するNavigator実装
pub struct EventNavigator {
    app: tauri::AppHandle,
}

impl EventNavigator {
    pub fn new(app: tauri::AppHandle) -> Self {
        Self { app }
    }
}

impl Navigator for EventNavigator {
    fn navigate(&self, route: Route) {
        info!("画面遷移イベントを送信します: route={}", route.path());
        if let Err(e) = self.app.emit("navigate", route.path()) {
            warn!("画面遷移イベントの送信に失敗しました: {e}");
        }
    }
}
