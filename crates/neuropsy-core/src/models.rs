pub mod anamnesis;
pub mod patient;
