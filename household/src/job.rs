//! Job - compensation record stored as a component in the household arena

use std::fmt;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JobType {
    /// Pay per hour worked
    Hourly(f64),
    /// Fixed yearly pay
    Salary(u64),
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobType::Hourly(rate) => write!(f, "Hourly({:?})", rate),
            JobType::Salary(amount) => write!(f, "Salary({})", amount),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    title: String,
    pub job_type: JobType,
}

impl Job {
    pub fn new(title: impl Into<String>, job_type: JobType) -> Self {
        Self {
            title: title.into(),
            job_type,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Income over `hours` worked. Salaried jobs ignore the hours.
    ///
    /// Hourly pay truncates toward zero; the float cast saturates at the
    /// `i64` bounds and a NaN rate yields 0.
    pub fn calculate_income(&self, hours: i64) -> i64 {
        match self.job_type {
            JobType::Hourly(rate) => (rate * hours as f64) as i64,
            JobType::Salary(salary) => i64::try_from(salary).unwrap_or(i64::MAX),
        }
    }

    /// Salaries take the truncated delta and never drop below zero.
    pub fn raise_by_amount(&mut self, amount: f64) {
        self.job_type = match self.job_type {
            JobType::Hourly(rate) => JobType::Hourly(rate + amount),
            JobType::Salary(salary) => {
                let raised = salary as i128 + amount.trunc() as i128;
                JobType::Salary(raised.clamp(0, u64::MAX as i128) as u64)
            }
        };
        debug!(title = %self.title, job_type = %self.job_type, "raise by amount");
    }

    /// `percent` is a fraction: 0.1 is a ten percent raise.
    pub fn raise_by_percent(&mut self, percent: f64) {
        let factor = 1.0 + percent;
        self.job_type = match self.job_type {
            JobType::Hourly(rate) => JobType::Hourly(rate * factor),
            // float to int casts saturate, so a negative result lands on zero
            JobType::Salary(salary) => JobType::Salary((salary as f64 * factor) as u64),
        };
        debug!(title = %self.title, job_type = %self.job_type, "raise by percent");
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Job: title:{} type:{}]", self.title, self.job_type)
    }
}
