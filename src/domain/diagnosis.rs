use std::collections::BTreeMap;

use super::hitop::{HiTopDimension, HiTopScores, Score};
use super::patient::{PatientId, PatientRecord};

/// Patients grouped under one diagnosis label.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosisSummary {
    pub label: String,
    pub patient_ids: Vec<PatientId>,
    pub mean_scores: HiTopScores,
}

impl DiagnosisSummary {
    pub fn patient_count(&self) -> usize {
        self.patient_ids.len()
    }
}

pub fn summarize_diagnoses(records: &[PatientRecord]) -> Vec<DiagnosisSummary> {
    let mut groups: BTreeMap<String, Vec<&PatientRecord>> = BTreeMap::new();

    for record in records {
        for label in &record.diagnoses {
            let label = label.trim();
            if label.is_empty() {
                continue;
            }
            let members = groups.entry(label.to_string()).or_default();
            if !members.iter().any(|member| member.id == record.id) {
                members.push(record);
            }
        }
    }

    let mut summaries: Vec<DiagnosisSummary> = groups
        .into_iter()
        .map(|(label, members)| DiagnosisSummary {
            patient_ids: members.iter().map(|member| member.id).collect(),
            mean_scores: mean_scores(&members),
            label,
        })
        .collect();

    // BTreeMap already yields labels in order; stable sort keeps it on ties
    summaries.sort_by(|a, b| b.patient_count().cmp(&a.patient_count()));
    summaries
}

fn mean_scores(members: &[&PatientRecord]) -> HiTopScores {
    let mut means = HiTopScores::default();
    for dimension in HiTopDimension::ALL {
        let present: Vec<f64> = members
            .iter()
            .filter_map(|member| member.scores.get(dimension))
            .collect();
        if !present.is_empty() {
            let mean = present.iter().sum::<f64>() / present.len() as f64;
            means.set(dimension, Some(Score::Number(mean)));
        }
    }
    means
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient(id: PatientId, somatoform: Option<f64>, diagnoses: &[&str]) -> PatientRecord {
        PatientRecord::new(
            id,
            HiTopScores {
                somatoform: somatoform.map(Score::Number),
                ..Default::default()
            },
        )
        .with_diagnoses(diagnoses.iter().map(|d| d.to_string()).collect())
    }

    #[test]
    fn test_groups_are_ordered_by_count_then_label() {
        let records = vec![
            patient(1, Some(0.2), &["F43.1", "F32.1"]),
            patient(2, Some(0.4), &["F32.1"]),
            patient(3, None, &["F10.2"]),
        ];
        let summaries = summarize_diagnoses(&records);

        let labels: Vec<&str> = summaries.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["F32.1", "F10.2", "F43.1"]);
        assert_eq!(summaries[0].patient_ids, vec![1, 2]);
    }

    #[test]
    fn test_mean_uses_present_scores_only() {
        let records = vec![
            patient(1, Some(0.2), &["F32.1"]),
            patient(2, Some(0.4), &["F32.1"]),
            patient(3, None, &["F32.1"]),
        ];
        let summaries = summarize_diagnoses(&records);

        let mean = summaries[0]
            .mean_scores
            .get(HiTopDimension::Somatoform)
            .unwrap();
        assert!((mean - 0.3).abs() < 1e-9);
        assert_eq!(summaries[0].mean_scores.detachment, None);
    }

    #[test]
    fn test_duplicate_and_blank_labels() {
        let records = vec![patient(1, Some(0.5), &["F32.1", " F32.1 ", "", "  "])];
        let summaries = summarize_diagnoses(&records);

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].patient_count(), 1);
    }

    #[test]
    fn test_no_diagnoses() {
        let records = vec![patient(1, Some(0.5), &[])];
        assert!(summarize_diagnoses(&records).is_empty());
    }

    #[test]
    fn test_non_numeric_scores_are_left_out_of_the_mean() {
        let mut odd = patient(2, None, &["F32.1"]);
        odd.scores
            .set(HiTopDimension::Somatoform, Some(Score::Other(serde_json::json!("hoch"))));
        let records = vec![patient(1, Some(0.6), &["F32.1"]), odd];
        let summaries = summarize_diagnoses(&records);

        assert_eq!(summaries[0].mean_scores.get(HiTopDimension::Somatoform), Some(0.6));
    }
}
