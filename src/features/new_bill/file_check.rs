// 証憑ファイルの形式チェック

use crate::shared::errors::{AppError, AppResult};

/// 証憑ファイルとして受け付ける拡張子
const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// 形式チェックに失敗したときにフォームへ表示するメッセージ
pub const UNSUPPORTED_FORMAT_MESSAGE: &str = "formats autorisés : .jpeg, .jpg, .png";

/// ファイル名の拡張子が証憑として許可された形式かどうかを判定する
///
/// 最後のドット以降だけを拡張子として扱い、大文字小文字は区別しない。
/// 拡張子のないファイル名や空文字列は受け付けない。
pub fn has_allowed_extension(file_name: &str) -> bool {
    match file_name.rsplit_once('.') {
        Some((_, extension)) => {
            let extension = extension.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.contains(&extension.as_str())
        }
        None => false,
    }
}

/// 証憑ファイル名を検証する
///
/// # 戻り値
/// 許可された形式ならOk(())、それ以外は表示用メッセージ付きのエラー
pub fn validate_proof_file(file_name: &str) -> AppResult<()> {
    if has_allowed_extension(file_name) {
        Ok(())
    } else {
        Err(AppError::validation(UNSUPPORTED_FORMAT_MESSAGE))
    }
}
