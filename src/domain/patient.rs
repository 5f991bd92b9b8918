use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::hitop::{HiTopDimension, HiTopScores, Score};

pub type PatientId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub id: PatientId,
    pub scores: HiTopScores,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnoses: Vec<String>,
}

impl PatientRecord {
    pub fn new(id: PatientId, scores: HiTopScores) -> Self {
        Self {
            id,
            scores,
            diagnoses: Vec::new(),
        }
    }

    pub fn with_diagnoses(mut self, diagnoses: Vec<String>) -> Self {
        self.diagnoses = diagnoses;
        self
    }

    /// Maps one raw `/api/patient_scores` object. Returns `None` when the
    /// record carries no integral id.
    pub fn from_raw(raw: &Map<String, Value>) -> Option<Self> {
        let id = raw.get("id").and_then(raw_id)?;

        let mut scores = HiTopScores::default();
        for dimension in HiTopDimension::ALL {
            scores.set(dimension, raw_score(id, dimension, raw.get(dimension.source_key())));
        }

        let diagnoses = match raw.get("diagnoses") {
            Some(Value::Array(labels)) => labels
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        };

        Some(Self {
            id,
            scores,
            diagnoses,
        })
    }
}

/// Accepts `7` as well as `7.0`; fractional and non-numeric ids are rejected.
fn raw_id(value: &Value) -> Option<PatientId> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .filter(|f| *f >= PatientId::MIN as f64 && *f < PatientId::MAX as f64)
            .map(|f| f as PatientId)
    })
}

fn raw_score(id: PatientId, dimension: HiTopDimension, value: Option<&Value>) -> Option<Score> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::Number(number)) => match number.as_f64() {
            Some(value) => Some(Score::Number(value)),
            None => Some(Score::Other(Value::Number(number.clone()))),
        },
        Some(other) => {
            debug!(
                patient_id = id,
                field = dimension.source_key(),
                value = %other,
                "Keeping non-numeric score as delivered"
            );
            Some(Score::Other(other.clone()))
        }
    }
}

/// Reshapes the loosely typed API payload into patient records, preserving
/// order. Entries that are not objects or lack an id are skipped.
pub fn build_patient_records(raw: &[Value]) -> Vec<PatientRecord> {
    raw.iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let Some(raw) = value.as_object() else {
                warn!(index, kind = json_kind(value), "Skipping patient entry that is not an object");
                return None;
            };
            let record = PatientRecord::from_raw(raw);
            if record.is_none() {
                warn!(index, id = ?raw.get("id"), "Skipping patient record without an integral id");
            }
            record
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn find_patient(records: &[PatientRecord], id: PatientId) -> Option<&PatientRecord> {
    records.iter().find(|record| record.id == id)
}
