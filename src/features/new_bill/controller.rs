// 新規請求書フォームのコントローラー

use crate::features::bills::models::{BillPayload, BillStatus};
use crate::features::bills::store::BillsStore;
use crate::features::new_bill::file_check::validate_proof_file;
use crate::features::session::models::SessionContext;
use crate::shared::navigation::{Navigator, Route};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};

/// 選択された証憑ファイル
#[derive(Debug, Clone)]
pub struct FileSelection {
    pub file_name: String,
    pub data: Vec<u8>,
}

/// 証憑ファイル選択の処理結果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FileSelectionOutcome {
    /// アップロード完了（フォームは送信可能）
    #[serde(rename_all = "camelCase")]
    Uploaded { file_name: String },
    /// 拡張子が許可されていない（エラースロットに表示するメッセージ付き）
    #[serde(rename_all = "camelCase")]
    Rejected { message: String },
    /// アップロード失敗（フォーム側にはエラーを表示しない）
    UploadFailed,
}

/// 新規請求書フォームの入力値
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBillForm {
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub date: String,
    pub amount: f64,
    pub vat: String,
    /// 空欄のまま送信された場合は既定値20を使う
    pub pct: Option<u32>,
    pub commentary: String,
}

/// 新規請求書フォームのコントローラー
///
/// 進行中の提出1件分の状態（bill_id / file_url / file_name）を保持する。
/// いずれもアップロードが成功するまではNoneのまま。
pub struct NewBillController<S> {
    store: S,
    session: SessionContext,
    bill_id: Option<String>,
    file_url: Option<String>,
    file_name: Option<String>,
}

impl<S: BillsStore> NewBillController<S> {
    /// 新しいコントローラーを作成する
    pub fn new(store: S, session: SessionContext) -> Self {
        Self {
            store,
            session,
            bill_id: None,
            file_url: None,
            file_name: None,
        }
    }

    /// 選択された証憑ファイルを検証し、問題なければアップロードする
    ///
    /// # 引数
    /// * `selection` - 選択されたファイルの名前と内容
    ///
    /// # 戻り値
    /// 検証・アップロードの結果
    pub async fn select_proof_file(&mut self, selection: FileSelection) -> FileSelectionOutcome {
        if let Err(e) = validate_proof_file(&selection.file_name) {
            warn!(
                "許可されていない形式の証憑が選択されました: file_name={}",
                selection.file_name
            );
            self.clear_draft();
            return FileSelectionOutcome::Rejected {
                message: e.user_message(),
            };
        }

        info!(
            "証憑ファイルをアップロードします: file_name={}, size={} bytes",
            selection.file_name,
            selection.data.len()
        );

        match self
            .store
            .upload_file(&selection.file_name, selection.data, &self.session.email)
            .await
        {
            Ok(proof) => {
                info!(
                    "証憑ファイルのアップロードに成功しました: bill_id={}, file_url={}",
                    proof.key, proof.file_url
                );
                self.bill_id = Some(proof.key);
                self.file_url = Some(proof.file_url);
                self.file_name = Some(selection.file_name.clone());
                FileSelectionOutcome::Uploaded {
                    file_name: selection.file_name,
                }
            }
            Err(e) => {
                // 失敗したアップロードの結果を後続の送信に使わせない
                error!("証憑ファイルのアップロードに失敗しました: {e}");
                self.clear_draft();
                FileSelectionOutcome::UploadFailed
            }
        }
    }

    /// フォームを送信し、成功すれば一覧画面へ戻る
    ///
    /// 送信失敗はログのみで、フォーム側にはエラーを表示しない。
    pub async fn submit(&mut self, form: NewBillForm, navigator: &dyn Navigator) {
        // 下書きは送信開始時点で取り出す。失敗しても古い識別子が残らない
        let bill_id = self.bill_id.take();
        let file_url = self.file_url.take();
        let file_name = self.file_name.take();

        if bill_id.is_none() {
            warn!("証憑がアップロードされていない状態で送信されました");
        }

        let payload = BillPayload {
            email: self.session.email.clone(),
            expense_type: form.expense_type,
            name: form.name,
            amount: form.amount,
            date: form.date,
            vat: form.vat,
            pct: form.pct.unwrap_or(20),
            commentary: form.commentary,
            file_url,
            file_name,
            status: BillStatus::Pending,
        };

        let id = bill_id.unwrap_or_default();
        match self.store.update(&id, &payload).await {
            Ok(bill) => {
                info!("請求書を送信しました: id={}", bill.id);
                navigator.navigate(Route::Bills);
            }
            Err(e) => {
                error!("請求書の送信に失敗しました: {e}");
            }
        }
    }

    /// 進行中のアップロード状態を取得する（bill_id）
    pub fn bill_id(&self) -> Option<&str> {
        self.bill_id.as_deref()
    }

    /// 進行中のアップロード状態を取得する（file_url）
    pub fn file_url(&self) -> Option<&str> {
        self.file_url.as_deref()
    }

    /// 進行中のアップロード状態を取得する（file_name）
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    fn clear_draft(&mut self) {
        self.bill_id = None;
        self.file_url = None;
        self.file_name = None;
    }
}
