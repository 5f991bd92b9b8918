pub mod hitop;
pub mod patient;
pub mod questionnaire;
pub mod diagnosis;

pub use diagnosis::{summarize_diagnoses, DiagnosisSummary};
pub use hitop::{HiTopDimension, HiTopScores, Score};
pub use patient::{build_patient_records, find_patient, PatientId, PatientRecord};
pub use questionnaire::{CellValue, QuestionnaireDetail, QuestionnaireRow, QuestionnaireSummary};
