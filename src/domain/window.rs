use serde::{Deserialize, Serialize};

/// The most recent `N` closing values of a history, oldest first.
///
/// Only `analysis::window::extract_window` creates these, so a `Window` always
/// holds at least one value.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Window {
    values: Vec<f64>,
}

impl Window {
    pub(crate) fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Least-squares line `y = k*x + d`, where `x` counts window positions from 1.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    pub k: f64,
    pub d: f64,
}

impl TrendLine {
    pub fn value_at(&self, x: f64) -> f64 {
        self.k * x + self.d
    }
}
