use thiserror::Error;

use crate::api::{UpdateBaseSalaryRequest, UserSalaryInfo};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SalaryMode {
    /// Salary comes from the matrix; no per-user override.
    #[default]
    Matrix,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SalaryFormError {
    #[error("Vui lòng nhập lương cơ bản hợp lệ")]
    InvalidAmount,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SalaryForm {
    pub mode: SalaryMode,
    pub input: String,
}

impl SalaryForm {
    pub fn from_info(info: &UserSalaryInfo) -> Self {
        match info.override_amount() {
            Some(amount) => Self {
                mode: SalaryMode::Custom,
                input: amount_input(amount),
            },
            None => Self::default(),
        }
    }

    pub fn use_matrix(&mut self) {
        self.mode = SalaryMode::Matrix;
        self.input.clear();
    }

    /// Switches to a custom amount, restoring the stored override if any.
    pub fn use_custom(&mut self, stored_override: Option<f64>) {
        self.mode = SalaryMode::Custom;
        if let Some(amount) = stored_override {
            self.input = amount_input(amount);
        }
    }

    pub fn to_payload(&self) -> Result<UpdateBaseSalaryRequest, SalaryFormError> {
        match self.mode {
            SalaryMode::Matrix => Ok(UpdateBaseSalaryRequest { base_salary: None }),
            SalaryMode::Custom => parse_amount(&self.input)
                .map(|amount| UpdateBaseSalaryRequest {
                    base_salary: Some(amount),
                })
                .ok_or(SalaryFormError::InvalidAmount),
        }
    }
}

/// A strictly positive, finite amount.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}

fn amount_input(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        amount.to_string()
    }
}
