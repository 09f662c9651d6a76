//! Persistence - On-disk patient record storage

mod file_patient_store;

pub use file_patient_store::FilePatientStore;
