// 請求書機能のデータモデル

use serde::{Deserialize, Serialize};

/// 請求書の承認ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    /// 申請中（従業員が提出した直後の状態）
    Pending,
    /// 承認済み
    Accepted,
    /// 却下
    Refused,
}

/// 請求書データモデル（リモートAPIのワイヤ形式）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    pub email: String,
    /// 経費区分
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    /// ISO形式の日付文字列（YYYY-MM-DD）
    pub date: String,
    pub amount: f64,
    pub vat: String,
    pub pct: u32,
    #[serde(default)]
    pub commentary: String,
    /// 証憑ファイルのURL
    #[serde(default)]
    pub file_url: Option<String>,
    /// 証憑ファイル名
    #[serde(default)]
    pub file_name: Option<String>,
    pub status: BillStatus,
    /// 却下時のバックオフィスコメント
    #[serde(default)]
    pub comment_admin: Option<String>,
}

/// 請求書の作成・更新ペイロード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPayload {
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub amount: f64,
    pub date: String,
    pub vat: String,
    pub pct: u32,
    pub commentary: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub status: BillStatus,
}

/// 証憑アップロードのレスポンス
///
/// `key` はアップロードと同時に作成された請求書の識別子。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedProof {
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    pub key: String,
}

/// 一覧表示用の行データ（表示用に整形済み）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillRow {
    pub id: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    /// 表示用に整形済みの日付（整形できない場合は元の文字列）
    pub date: String,
    /// 表示用に整形済みの金額
    pub amount: String,
    /// 表示用のステータスラベル
    pub status: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bill_wire_format() {
        // ワイヤ形式はcamelCaseで、経費区分のキーは "type"
        let bill = fixtures::sample_bills().remove(0);
        let json = serde_json::to_value(&bill).unwrap();

        assert_eq!(json["type"], "Hôtel et logement");
        assert_eq!(json["fileUrl"], "https://test.storage.tld/justificatif-1.jpg");
        assert_eq!(json["fileName"], "preview-facture-free-201801-pdf-1.jpg");
        assert_eq!(json["commentAdmin"], "ok");
        assert_eq!(json["status"], "pending");
    }

    #[test]
    fn test_bill_deserialization() {
        let json = r#"{
            "id": "47qAXb6fIm2zOKkLzMro",
            "email": "a@a",
            "type": "Transports",
            "name": "Vol Paris Londres",
            "date": "2022-02-15",
            "amount": 348.0,
            "vat": "70",
            "pct": 20,
            "status": "accepted"
        }"#;

        let bill: Bill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.expense_type, "Transports");
        assert_eq!(bill.status, BillStatus::Accepted);
        // 省略可能なフィールドは既定値になる
        assert_eq!(bill.commentary, "");
        assert!(bill.file_url.is_none());
        assert!(bill.comment_admin.is_none());
    }

    #[test]
    fn test_bill_payload_wire_format() {
        let payload = BillPayload {
            email: "employee@test.tld".to_string(),
            expense_type: "Transports".to_string(),
            name: "Vol Paris Londres".to_string(),
            amount: 348.0,
            date: "2022-02-15".to_string(),
            vat: "70".to_string(),
            pct: 20,
            commentary: "".to_string(),
            file_url: Some("https://test.storage.tld/justificatif-1.jpg".to_string()),
            file_name: Some("justificatif-1.jpg".to_string()),
            status: BillStatus::Pending,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], "Transports");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["fileUrl"], "https://test.storage.tld/justificatif-1.jpg");
    }

    #[test]
    fn test_uploaded_proof_deserialization() {
        // アップロードAPIのレスポンス形式
        let json = r#"{"fileUrl":"https://test.storage.tld/justificatif-1.jpg","key":"1234"}"#;
        let proof: UploadedProof = serde_json::from_str(json).unwrap();
        assert_eq!(proof.file_url, "https://test.storage.tld/justificatif-1.jpg");
        assert_eq!(proof.key, "1234");
    }
}
