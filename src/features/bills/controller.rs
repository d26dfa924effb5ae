// 請求書一覧画面のコントローラー

use crate::features::bills::models::{Bill, BillRow};
use crate::features::bills::store::BillsStore;
use crate::features::session::models::SessionContext;
use crate::shared::errors::AppResult;
use crate::shared::navigation::{Navigator, Route};
use crate::views::format::{format_amount, format_date_display, format_status};
use crate::views::modal::ProofModal;
use log::{error, info, warn};

/// 請求書一覧画面のコントローラー
///
/// ストア実装とセッションコンテキストをコンストラクタで受け取る。
pub struct BillsController<S> {
    store: S,
    session: SessionContext,
}

impl<S: BillsStore> BillsController<S> {
    /// 新しいコントローラーを作成する
    pub fn new(store: S, session: SessionContext) -> Self {
        Self { store, session }
    }

    /// 請求書一覧を取得し、表示用に整形して返す
    ///
    /// # 戻り値
    /// 日付の降順（新しい順）に並んだ表示用の行、または取得失敗時はエラー
    pub async fn get_bills(&self) -> AppResult<Vec<BillRow>> {
        info!("請求書一覧を取得します: email={}", self.session.email);

        let mut bills = self.store.list().await?;

        // 生の日付文字列の降順で並べる。安定ソートなので同日の行は元の順を保つ
        bills.sort_by(|a, b| b.date.cmp(&a.date));

        info!("請求書一覧を取得しました: count={}", bills.len());
        Ok(bills.into_iter().map(to_row).collect())
    }

    /// クリックされた行の証憑URLをモーダルで開く
    ///
    /// ネットワークアクセスは行わない。証憑のない行は何も開かない。
    pub fn view_proof(&self, proof_url: Option<&str>, modal: &dyn ProofModal) {
        match proof_url {
            Some(url) if !url.is_empty() => modal.open(url),
            _ => warn!("証憑ファイルが添付されていない請求書です"),
        }
    }

    /// 新規請求書画面へ遷移する
    pub fn go_to_new_bill(&self, navigator: &dyn Navigator) {
        navigator.navigate(Route::NewBill);
    }
}

/// 請求書を表示用の行に変換する
fn to_row(bill: Bill) -> BillRow {
    // 個別の日付が壊れていても一覧全体は失敗させず、元の値をそのまま表示する
    let date = match format_date_display(&bill.date) {
        Ok(formatted) => formatted,
        Err(e) => {
            error!(
                "日付の整形に失敗しました: id={}, date={}, error={e}",
                bill.id, bill.date
            );
            bill.date.clone()
        }
    };

    BillRow {
        id: bill.id,
        expense_type: bill.expense_type,
        name: bill.name,
        date,
        amount: format_amount(bill.amount),
        status: format_status(bill.status).to_string(),
        file_url: bill.file_url,
        file_name: bill.file_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::bills::models::fixtures::sample_bills;
    use crate::features::bills::models::{BillPayload, UploadedProof};
    use crate::shared::errors::AppError;
    use crate::views::{bills_ui, BillsViewState};
    use std::sync::Mutex;

    /// 固定データまたは固定エラーを返すフェイクストア
    struct FakeStore {
        bills: Vec<Bill>,
        fail_status: Option<u16>,
    }

    impl FakeStore {
        fn with_bills(bills: Vec<Bill>) -> Self {
            Self {
                bills,
                fail_status: None,
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                bills: Vec::new(),
                fail_status: Some(status),
            }
        }
    }

    impl BillsStore for FakeStore {
        async fn list(&self) -> crate::shared::errors::AppResult<Vec<Bill>> {
            match self.fail_status {
                Some(status) => Err(AppError::remote(status)),
                None => Ok(self.bills.clone()),
            }
        }

        async fn create(
            &self,
            _draft: &BillPayload,
        ) -> crate::shared::errors::AppResult<Bill> {
            unimplemented!("一覧のテストでは使用しない")
        }

        async fn update(
            &self,
            _id: &str,
            _patch: &BillPayload,
        ) -> crate::shared::errors::AppResult<Bill> {
            unimplemented!("一覧のテストでは使用しない")
        }

        async fn upload_file(
            &self,
            _file_name: &str,
            _data: Vec<u8>,
            _email: &str,
        ) -> crate::shared::errors::AppResult<UploadedProof> {
            unimplemented!("一覧のテストでは使用しない")
        }
    }

    /// 開いたURLを記録するフェイクモーダル
    #[derive(Default)]
    struct RecordingModal {
        opened: Mutex<Vec<String>>,
    }

    impl ProofModal for RecordingModal {
        fn open(&self, file_url: &str) {
            self.opened.lock().unwrap().push(file_url.to_string());
        }

        fn close(&self) {}
    }

    /// 遷移先を記録するフェイクナビゲーター
    #[derive(Default)]
    struct RecordingNavigator {
        routes: Mutex<Vec<Route>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: Route) {
            self.routes.lock().unwrap().push(route);
        }
    }

    fn employee_session() -> SessionContext {
        SessionContext::employee("employee@test.tld", None)
    }

    #[tokio::test]
    async fn test_get_bills_sorted_by_date_descending() {
        let controller =
            BillsController::new(FakeStore::with_bills(sample_bills()), employee_session());

        let rows = controller.get_bills().await.unwrap();

        let dates: Vec<&str> = rows.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["4 Avr. 04", "3 Mar. 03", "2 Fév. 02", "1 Jan. 01"]);
    }

    #[tokio::test]
    async fn test_get_bills_formats_amount_and_status() {
        let controller =
            BillsController::new(FakeStore::with_bills(sample_bills()), employee_session());

        let rows = controller.get_bills().await.unwrap();

        assert_eq!(rows[0].amount, "400 €");
        assert_eq!(rows[0].status, "En attente");
        assert_eq!(rows[3].status, "Refusé");
    }

    #[tokio::test]
    async fn test_get_bills_stable_order_for_equal_dates() {
        let mut bills = sample_bills();
        // 全件同じ日付にすると元の順序が保たれる
        for bill in &mut bills {
            bill.date = "2004-04-04".to_string();
        }
        let expected: Vec<String> = bills.iter().map(|b| b.id.clone()).collect();

        let controller = BillsController::new(FakeStore::with_bills(bills), employee_session());
        let rows = controller.get_bills().await.unwrap();

        let ids: Vec<String> = rows.into_iter().map(|r| r.id).collect();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn test_get_bills_malformed_date_falls_back_to_raw_value() {
        let mut bills = sample_bills();
        bills[1].date = "pas-une-date".to_string();

        let controller = BillsController::new(FakeStore::with_bills(bills), employee_session());
        let rows = controller.get_bills().await.unwrap();

        // 壊れた日付の行はそのままの値で表示され、他の行は整形される
        assert!(rows.iter().any(|r| r.date == "pas-une-date"));
        assert!(rows.iter().any(|r| r.date == "4 Avr. 04"));
        assert_eq!(rows.len(), 4);
    }

    #[tokio::test]
    async fn test_get_bills_remote_failure_surfaces_status() {
        let controller = BillsController::new(FakeStore::failing(404), employee_session());

        let error = controller.get_bills().await.unwrap_err();
        assert_eq!(error.user_message(), "Erreur 404");

        let controller = BillsController::new(FakeStore::failing(500), employee_session());
        let error = controller.get_bills().await.unwrap_err();
        assert_eq!(error.user_message(), "Erreur 500");
    }

    #[tokio::test]
    async fn test_error_fragment_contains_literal_message() {
        // 取得失敗はエラーメッセージ文字列として一覧画面に描画される
        let controller = BillsController::new(FakeStore::failing(404), employee_session());

        let error = controller.get_bills().await.unwrap_err();
        let html = bills_ui(&BillsViewState::Error(error.user_message()));

        assert!(html.contains("Erreur 404"));
    }

    #[tokio::test]
    async fn test_rendered_dates_are_anti_chronological() {
        let controller =
            BillsController::new(FakeStore::with_bills(sample_bills()), employee_session());
        let rows = controller.get_bills().await.unwrap();
        let html = bills_ui(&BillsViewState::Ready(rows));

        // 描画されたフラグメントから日付を順に抜き出して並びを確認する
        let pattern = regex::Regex::new(r"\d{1,2} \w+\. \d{2}").unwrap();
        let dates: Vec<&str> = pattern.find_iter(&html).map(|m| m.as_str()).collect();

        assert_eq!(dates, vec!["4 Avr. 04", "3 Mar. 03", "2 Fév. 02", "1 Jan. 01"]);
    }

    #[test]
    fn test_view_proof_opens_modal_with_row_url() {
        let controller =
            BillsController::new(FakeStore::with_bills(Vec::new()), employee_session());
        let modal = RecordingModal::default();

        controller.view_proof(
            Some("https://test.storage.tld/justificatif-1.jpg"),
            &modal,
        );

        let opened = modal.opened.lock().unwrap();
        assert_eq!(
            opened.as_slice(),
            ["https://test.storage.tld/justificatif-1.jpg"]
        );
    }

    #[test]
    fn test_view_proof_without_file_opens_nothing() {
        let controller =
            BillsController::new(FakeStore::with_bills(Vec::new()), employee_session());
        let modal = RecordingModal::default();

        controller.view_proof(None, &modal);
        controller.view_proof(Some(""), &modal);

        assert!(modal.opened.lock().unwrap().is_empty());
    }

    #[test]
    fn test_go_to_new_bill_navigates_to_form() {
        let controller =
            BillsController::new(FakeStore::with_bills(Vec::new()), employee_session());
        let navigator = RecordingNavigator::default();

        controller.go_to_new_bill(&navigator);

        assert_eq!(navigator.routes.lock().unwrap().as_slice(), [Route::NewBill]);
    }
}
