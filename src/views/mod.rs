// 画面フラグメントを組み立てるビューモジュール
//
// ここの関数はすべて純粋で、入力（表示用データまたはエラーメッセージ）から
// HTML文字列を返すだけ。I/Oは行わない。

pub mod bills_ui;
pub mod format;
pub mod modal;
pub mod new_bill_ui;

pub use bills_ui::{bills_ui, BillsViewState};
pub use modal::proof_modal_body;
pub use new_bill_ui::new_bill_ui;

/// HTMLに埋め込む値をエスケープする
pub(crate) fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
