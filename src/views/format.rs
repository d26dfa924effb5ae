// 表示用の整形関数

use crate::features::bills::models::BillStatus;
use crate::shared::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// フランス語の月の短縮形（fr-FRロケールの表記に合わせる）
const MONTHS_SHORT_FR: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

/// ISO形式の日付文字列を一覧表示用に整形する
///
/// # 引数
/// * `date` - ISO形式の日付文字列（YYYY-MM-DD）
///
/// # 戻り値
/// `4 Avr. 04` 形式の文字列、または解析できない場合はエラー
pub fn format_date_display(date: &str) -> AppResult<String> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| AppError::validation(format!("日付の形式が正しくありません: {date} ({e})")))?;

    let month = MONTHS_SHORT_FR[parsed.month0() as usize];
    let capitalized = match month.chars().next() {
        Some(first) => first.to_uppercase().collect::<String>() + &month[first.len_utf8()..],
        None => String::new(),
    };
    let abbrev: String = capitalized.chars().take(3).collect();

    Ok(format!(
        "{} {}. {}",
        parsed.day(),
        abbrev,
        parsed.format("%y")
    ))
}

/// 金額を一覧表示用に整形する
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{} €", amount as i64)
    } else {
        format!("{amount} €")
    }
}

/// 承認ステータスの表示ラベルを取得する
pub fn format_status(status: BillStatus) -> &'static str {
    match status {
        BillStatus::Pending => "En attente",
        BillStatus::Accepted => "Accepté",
        BillStatus::Refused => "Refusé",
    }
}
