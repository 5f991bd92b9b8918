use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionnaireSummary {
    pub name: String,
}

impl QuestionnaireSummary {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A single answer cell. `null` in the payload is modelled as `None` on the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(value) => write!(f, "{}", value),
            CellValue::Text(value) => f.write_str(value),
        }
    }
}

pub type QuestionnaireRow = BTreeMap<String, Option<CellValue>>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuestionnaireDetail {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default, rename = "data")]
    pub rows: Vec<QuestionnaireRow>,
}

impl QuestionnaireDetail {
    /// Row keys that are not declared in `columns`, with the index of the
    /// first row they appear in.
    pub fn undeclared_keys(&self) -> Vec<(usize, String)> {
        let mut seen = Vec::<String>::new();
        let mut undeclared = Vec::new();
        for (index, row) in self.rows.iter().enumerate() {
            for key in row.keys() {
                if !self.columns.contains(key) && !seen.contains(key) {
                    seen.push(key.clone());
                    undeclared.push((index, key.clone()));
                }
            }
        }
        undeclared
    }

    /// Cells of one row in column order.
    pub fn cells<'a>(&'a self, row: &'a QuestionnaireRow) -> impl Iterator<Item = Option<&'a CellValue>> + 'a {
        self.columns
            .iter()
            .map(move |column| row.get(column).and_then(Option::as_ref))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> QuestionnaireDetail {
        serde_json::from_value(json!({
            "name": "BDI-II",
            "columns": ["BDI_01", "BDI_02", "Kommentar"],
            "data": [
                { "BDI_01": 2, "BDI_02": null, "Kommentar": "müde" },
                { "BDI_01": 1.5 }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_summaries_deserialize_from_plain_strings() {
        let names: Vec<QuestionnaireSummary> =
            serde_json::from_value(json!(["BDI-II", "SCL-90"])).unwrap();
        assert_eq!(names, vec![QuestionnaireSummary::new("BDI-II"), QuestionnaireSummary::new("SCL-90")]);
    }

    #[test]
    fn test_detail_deserializes_mixed_cells() {
        let detail = sample();

        assert_eq!(detail.name, "BDI-II");
        assert_eq!(detail.columns.len(), 3);
        assert_eq!(detail.rows.len(), 2);
        assert_eq!(detail.rows[0]["BDI_01"], Some(CellValue::Number(2.0)));
        assert_eq!(detail.rows[0]["BDI_02"], None);
        assert_eq!(
            detail.rows[0]["Kommentar"],
            Some(CellValue::Text("müde".to_string()))
        );
    }

    #[test]
    fn test_cells_follow_column_order() {
        let detail = sample();
        let cells: Vec<String> = detail
            .cells(&detail.rows[1])
            .map(|cell| cell.map(ToString::to_string).unwrap_or_default())
            .collect();

        assert_eq!(cells, vec!["1.5", "", ""]);
    }

    #[test]
    fn test_undeclared_keys() {
        let mut detail = sample();
        assert!(detail.undeclared_keys().is_empty());

        detail.rows[1].insert("BDI_99".to_string(), Some(CellValue::Number(0.0)));
        assert_eq!(detail.undeclared_keys(), vec![(1, "BDI_99".to_string())]);
    }
}
