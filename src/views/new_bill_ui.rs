// 新規請求書フォームのフラグメント

/// 経費区分の選択肢
const EXPENSE_TYPES: [&str; 7] = [
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

/// 新規請求書フォームのフラグメントを組み立てる
///
/// エラースロット（`errorMessage`）は空で描画され、証憑ファイルの検証に
/// 失敗したときにだけメッセージが差し込まれる。
pub fn new_bill_ui() -> String {
    let options: String = EXPENSE_TYPES
        .iter()
        .map(|t| format!(r#"        <option value="{t}">{t}</option>
"#))
        .collect();

    format!(
        r#"<div class="content">
  <div class="content-header">
    <div class="content-title">Envoyer une note de frais</div>
  </div>
  <div class="form-newbill-container">
    <form data-testid="form-new-bill">
      <div class="row">
        <div class="col-half">
          <label for="expense-type" class="bold-label">Type de dépense</label>
          <select required data-testid="expense-type" class="form-control blue-border">
{options}          </select>
        </div>
        <div class="col-half">
          <label for="expense-name" class="bold-label">Nom de la dépense</label>
          <input type="text" data-testid="expense-name" class="form-control blue-border" placeholder="Vol Paris Londres" />
        </div>
      </div>
      <div class="row">
        <div class="col-half">
          <label for="datepicker" class="bold-label">Date</label>
          <input required type="date" data-testid="datepicker" class="form-control blue-border" />
        </div>
        <div class="col-half">
          <label for="amount" class="bold-label">Montant TTC</label>
          <input required type="number" data-testid="amount" class="form-control blue-border" placeholder="348" />
        </div>
      </div>
      <div class="row">
        <div class="col-half">
          <label for="vat" class="bold-label">TVA</label>
          <input type="number" data-testid="vat" class="form-control blue-border" placeholder="70" />
        </div>
        <div class="col-half">
          <label for="pct" class="bold-label">%</label>
          <input required type="number" data-testid="pct" class="form-control blue-border" placeholder="20" />
        </div>
      </div>
      <div class="row">
        <div class="col-full">
          <label for="commentary" class="bold-label">Commentaire</label>
          <textarea data-testid="commentary" class="form-control blue-border" rows="3"></textarea>
        </div>
      </div>
      <div class="row">
        <div class="col-half">
          <label for="file" class="bold-label">Justificatif</label>
          <input required type="file" data-testid="file" class="form-control blue-border" />
          <span class="error-message" data-testid="errorMessage"></span>
        </div>
      </div>
      <div class="col-half">
        <button type="submit" id="btn-send-bill" class="btn btn-primary">Envoyer</button>
      </div>
    </form>
  </div>
</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_contains_all_fields() {
        let html = new_bill_ui();

        assert!(html.contains(r#"data-testid="form-new-bill""#));
        for field in [
            "expense-type",
            "expense-name",
            "datepicker",
            "amount",
            "vat",
            "pct",
            "commentary",
            "file",
        ] {
            assert!(
                html.contains(&format!(r#"data-testid="{field}""#)),
                "champ manquant: {field}"
            );
        }
    }

    #[test]
    fn test_error_slot_is_empty_by_default() {
        let html = new_bill_ui();
        assert!(html.contains(r#"<span class="error-message" data-testid="errorMessage"></span>"#));
    }

    #[test]
    fn test_expense_type_options() {
        let html = new_bill_ui();
        for expense_type in EXPENSE_TYPES {
            assert!(html.contains(expense_type));
        }
    }

    #[test]
    fn test_submit_button() {
        let html = new_bill_ui();
        assert!(html.contains("Envoyer"));
        assert!(html.contains(r#"type="submit""#));
    }
}
