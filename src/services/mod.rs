pub mod sgpa_service;

pub use sgpa_service::{compute_sgpa, semester_sgpa};
