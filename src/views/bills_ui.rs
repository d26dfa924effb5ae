// 請求書一覧画面のフラグメント

use crate::features::bills::models::BillRow;
use crate::views::escape_html;

/// 一覧画面の表示状態
#[derive(Debug, Clone, PartialEq)]
pub enum BillsViewState {
    /// 取得中
    Loading,
    /// 取得失敗（表示するエラーメッセージ付き）
    Error(String),
    /// 取得済み
    Ready(Vec<BillRow>),
}

/// 一覧画面のフラグメントを組み立てる
pub fn bills_ui(state: &BillsViewState) -> String {
    match state {
        BillsViewState::Loading => layout(&loading_fragment()),
        BillsViewState::Error(message) => layout(&error_fragment(message)),
        BillsViewState::Ready(rows) => layout(&table_fragment(rows)),
    }
}

/// 一覧画面の外枠
fn layout(content: &str) -> String {
    format!(
        r#"<div class="content">
  <div class="content-header">
    <div class="content-title">Mes notes de frais</div>
    <button type="button" data-testid="btn-new-bill" class="btn btn-primary">Nouvelle note de frais</button>
  </div>
  {content}
</div>
{modal}"#,
        content = content,
        modal = modal_container()
    )
}

fn loading_fragment() -> String {
    r#"<div class="loading" data-testid="loading-message">Loading...</div>"#.to_string()
}

fn error_fragment(message: &str) -> String {
    format!(
        r#"<div class="error-message" data-testid="error-message">{}</div>"#,
        escape_html(message)
    )
}

fn table_fragment(rows: &[BillRow]) -> String {
    let body: String = rows.iter().map(row_fragment).collect();
    format!(
        r#"<div id="data-table">
<table id="example" class="table table-striped" style="width:100%">
  <thead>
    <tr><th>Type</th><th>Nom</th><th>Date</th><th>Montant</th><th>Statut</th><th>Actions</th></tr>
  </thead>
  <tbody data-testid="tbody">
{body}  </tbody>
</table>
</div>"#
    )
}

fn row_fragment(row: &BillRow) -> String {
    // 証憑の有無は目のアイコンのdata属性で行に紐付ける
    let file_url = row.file_url.as_deref().unwrap_or("");
    let file_name = row.file_name.as_deref().unwrap_or("");
    format!(
        r#"    <tr>
      <td>{expense_type}</td>
      <td>{name}</td>
      <td>{date}</td>
      <td>{amount}</td>
      <td>{status}</td>
      <td><div class="icon-actions"><div id="eye" data-testid="icon-eye" data-bill-url="{file_url}" data-bill-name="{file_name}"></div></div></td>
    </tr>
"#,
        expense_type = escape_html(&row.expense_type),
        name = escape_html(&row.name),
        date = escape_html(&row.date),
        amount = escape_html(&row.amount),
        status = escape_html(&row.status),
        file_url = escape_html(file_url),
        file_name = escape_html(file_name),
    )
}

/// 証憑モーダルのコンテナ（本体は表示時に差し込まれる）
fn modal_container() -> String {
    r#"<div class="modal fade" id="modaleFile" tabindex="-1" role="dialog" aria-hidden="true">
  <div class="modal-dialog modal-dialog-centered modal-lg" role="document">
    <div class="modal-content">
      <div class="modal-header">
        <h5 class="modal-title">Justificatif</h5>
        <button type="button" class="close" data-dismiss="modal" aria-label="Close"><span aria-hidden="true">&times;</span></button>
      </div>
      <div class="modal-body"></div>
    </div>
  </div>
</div>"#
        .to_string()
}
