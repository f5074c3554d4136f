//! Rule systems - age-gated relations applied to the household world

pub mod employment;
pub mod marriage;
pub mod family;

pub use employment::{assign_job, job_of, MIN_WORKING_AGE};
pub use marriage::{assign_spouse, spouse_of, MIN_MARRIAGE_AGE};
pub use family::{Family, ADULT_AGE, DEFAULT_HOURS_WORKED};
