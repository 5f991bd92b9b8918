use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The six top-level spectra of the Hierarchical Taxonomy of Psychopathology,
/// in the order they are drawn on the radar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HiTopDimension {
    Somatoform,
    Internalizing,
    ThoughtDisorder,
    Detachment,
    DisinhibitedExternalizing,
    AntagonisticExternalizing,
}

impl HiTopDimension {
    pub const ALL: [HiTopDimension; 6] = [
        HiTopDimension::Somatoform,
        HiTopDimension::Internalizing,
        HiTopDimension::ThoughtDisorder,
        HiTopDimension::Detachment,
        HiTopDimension::DisinhibitedExternalizing,
        HiTopDimension::AntagonisticExternalizing,
    ];

    /// Field name used by `/api/patient_scores`. Some contain spaces, some don't.
    pub fn source_key(self) -> &'static str {
        match self {
            HiTopDimension::Somatoform => "Somatoform_Score",
            HiTopDimension::Internalizing => "Internalizing_Score",
            HiTopDimension::ThoughtDisorder => "Thought Disorder_Score",
            HiTopDimension::Detachment => "Detachment_Score",
            HiTopDimension::DisinhibitedExternalizing => "Disinhibited Externalizing_Score",
            HiTopDimension::AntagonisticExternalizing => "Antagonistic Externalizing_Score",
        }
    }

    /// Normalized key used in the view model.
    pub fn score_key(self) -> &'static str {
        match self {
            HiTopDimension::Somatoform => "Somatoform_Score",
            HiTopDimension::Internalizing => "Internalizing_Score",
            HiTopDimension::ThoughtDisorder => "Thought_Disorder_Score",
            HiTopDimension::Detachment => "Detachment_Score",
            HiTopDimension::DisinhibitedExternalizing => "Disinhibited_Externalizing_Score",
            HiTopDimension::AntagonisticExternalizing => "Antagonistic_Externalizing_Score",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HiTopDimension::Somatoform => "Somatoform",
            HiTopDimension::Internalizing => "Internalizing",
            HiTopDimension::ThoughtDisorder => "Thought Disorder",
            HiTopDimension::Detachment => "Detachment",
            HiTopDimension::DisinhibitedExternalizing => "Disinhibited Externalizing",
            HiTopDimension::AntagonisticExternalizing => "Antagonistic Externalizing",
        }
    }

    /// Axis label on the spider diagram.
    pub fn short_label(self) -> &'static str {
        match self {
            HiTopDimension::DisinhibitedExternalizing => "Disinhibited Ext.",
            HiTopDimension::AntagonisticExternalizing => "Antagonistic Ext.",
            other => other.label(),
        }
    }
}

impl fmt::Display for HiTopDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A score as delivered by the backend. Numbers are what the chart draws;
/// anything else is kept verbatim so it serializes back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Number(f64),
    Other(Value),
}

impl Score {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Score::Number(value) => Some(*value),
            Score::Other(_) => None,
        }
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Score::Number(value)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Number(value) => write!(f, "{:.3}", value),
            Score::Other(Value::String(text)) => f.write_str(text),
            Score::Other(other) => write!(f, "{}", other),
        }
    }
}

/// One optional score per dimension. Serializes under the normalized keys,
/// absent scores become `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HiTopScores {
    #[serde(rename = "Somatoform_Score")]
    pub somatoform: Option<Score>,
    #[serde(rename = "Internalizing_Score")]
    pub internalizing: Option<Score>,
    #[serde(rename = "Thought_Disorder_Score")]
    pub thought_disorder: Option<Score>,
    #[serde(rename = "Detachment_Score")]
    pub detachment: Option<Score>,
    #[serde(rename = "Disinhibited_Externalizing_Score")]
    pub disinhibited_externalizing: Option<Score>,
    #[serde(rename = "Antagonistic_Externalizing_Score")]
    pub antagonistic_externalizing: Option<Score>,
}

impl HiTopScores {
    pub fn score(&self, dimension: HiTopDimension) -> Option<&Score> {
        match dimension {
            HiTopDimension::Somatoform => self.somatoform.as_ref(),
            HiTopDimension::Internalizing => self.internalizing.as_ref(),
            HiTopDimension::ThoughtDisorder => self.thought_disorder.as_ref(),
            HiTopDimension::Detachment => self.detachment.as_ref(),
            HiTopDimension::DisinhibitedExternalizing => self.disinhibited_externalizing.as_ref(),
            HiTopDimension::AntagonisticExternalizing => self.antagonistic_externalizing.as_ref(),
        }
    }

    /// Numeric value of a dimension; non-numeric scores read as `None`.
    pub fn get(&self, dimension: HiTopDimension) -> Option<f64> {
        self.score(dimension).and_then(Score::as_f64)
    }

    pub fn set(&mut self, dimension: HiTopDimension, score: Option<Score>) {
        let slot = match dimension {
            HiTopDimension::Somatoform => &mut self.somatoform,
            HiTopDimension::Internalizing => &mut self.internalizing,
            HiTopDimension::ThoughtDisorder => &mut self.thought_disorder,
            HiTopDimension::Detachment => &mut self.detachment,
            HiTopDimension::DisinhibitedExternalizing => &mut self.disinhibited_externalizing,
            HiTopDimension::AntagonisticExternalizing => &mut self.antagonistic_externalizing,
        };
        *slot = score;
    }

    /// Numeric scores in chart order.
    pub fn values(&self) -> [Option<f64>; 6] {
        HiTopDimension::ALL.map(|dimension| self.get(dimension))
    }

    pub fn is_empty(&self) -> bool {
        HiTopDimension::ALL
            .iter()
            .all(|dimension| self.score(*dimension).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_only_differ_in_spaces() {
        for dimension in HiTopDimension::ALL {
            assert_eq!(
                dimension.source_key().replace(' ', "_"),
                dimension.score_key()
            );
        }
    }

    #[test]
    fn test_short_labels() {
        assert_eq!(HiTopDimension::ThoughtDisorder.short_label(), "Thought Disorder");
        assert_eq!(
            HiTopDimension::DisinhibitedExternalizing.short_label(),
            "Disinhibited Ext."
        );
        assert_eq!(
            HiTopDimension::AntagonisticExternalizing.short_label(),
            "Antagonistic Ext."
        );
    }

    #[test]
    fn test_get_and_set() {
        let mut scores = HiTopScores::default();
        assert!(scores.is_empty());

        scores.set(HiTopDimension::Detachment, Some(Score::from(0.25)));
        assert_eq!(scores.get(HiTopDimension::Detachment), Some(0.25));
        assert_eq!(scores.detachment, Some(Score::Number(0.25)));
        assert_eq!(scores.values()[3], Some(0.25));
        assert!(!scores.is_empty());
    }

    #[test]
    fn test_serializes_absent_scores_as_null() {
        let scores = HiTopScores {
            somatoform: Some(Score::Number(0.42)),
            ..Default::default()
        };
        let json = serde_json::to_value(scores).unwrap();

        assert_eq!(json["Somatoform_Score"], 0.42);
        assert!(json["Thought_Disorder_Score"].is_null());
        assert_eq!(json.as_object().unwrap().len(), 6);
    }

    #[test]
    fn test_non_numeric_score_round_trips_verbatim() {
        let mut scores = HiTopScores::default();
        scores.set(HiTopDimension::Detachment, Some(Score::Other(Value::from("0.7"))));

        assert_eq!(scores.get(HiTopDimension::Detachment), None);
        assert!(!scores.is_empty());
        assert_eq!(serde_json::to_value(&scores).unwrap()["Detachment_Score"], "0.7");

        let parsed: Score = serde_json::from_value(Value::from("high")).unwrap();
        assert_eq!(parsed, Score::Other(Value::from("high")));
        assert_eq!(parsed.to_string(), "high");
        assert_eq!(Score::Number(0.42).to_string(), "0.420");
    }
}
