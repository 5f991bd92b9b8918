pub mod diagnoses;
pub mod faq;
pub mod home;
pub mod not_found;
pub mod patients;
pub mod questionnaires;

pub use diagnoses::Diagnoses;
pub use faq::Faq;
pub use home::Home;
pub use not_found::NotFound;
pub use patients::Patients;
pub use questionnaires::Questionnaires;
