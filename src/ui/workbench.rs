use crate::error::{Result, SolveError};
use crate::format::format_values;
use crate::solver::LinearSolution;
use crate::system::System;

pub const DEFAULT_MAX_DIMENSION: usize = 64;

/// Upper bounds on the counts a [`Workbench`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_variables: usize,
    pub max_equations: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_variables: DEFAULT_MAX_DIMENSION,
            max_equations: DEFAULT_MAX_DIMENSION,
        }
    }
}

/// Counts, cell text and the last solve outcome for one editing session.
///
/// Configuring new counts or resetting replaces the whole state in one step; no
/// cell text or stale result survives either.
#[derive(Debug, Clone, Default)]
pub struct Workbench {
    limits: Limits,
    system: Option<System>,
    outcome: Option<Result<LinearSolution>>,
}

impl Workbench {
    pub fn new() -> Self {
        Workbench::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        Workbench {
            limits,
            ..Workbench::default()
        }
    }

    /// The bounds `configure` checks the counts against.
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Replace the system with a blank `equation_count x variable_count` one.
    ///
    /// Counts come in the same order as [`System::reshape`]. On error the previous
    /// system and outcome are kept.
    pub fn configure(&mut self, equation_count: usize, variable_count: usize) -> Result<()> {
        if equation_count > self.limits.max_equations {
            return Err(SolveError::TooLarge {
                size: equation_count,
                limit: self.limits.max_equations,
            });
        }
        if variable_count > self.limits.max_variables {
            return Err(SolveError::TooLarge {
                size: variable_count,
                limit: self.limits.max_variables,
            });
        }
        let system = System::reshape(equation_count, variable_count)?;
        log::debug!("workbench reshaped to {equation_count} equations x {variable_count} variables");
        self.system = Some(system);
        self.outcome = None;
        Ok(())
    }

    pub fn system(&self) -> Option<&System> {
        self.system.as_ref()
    }

    pub fn set_coefficient(&mut self, equation: usize, variable: usize, text: &str) -> Result<()> {
        self.system_mut()?.set_coefficient(equation, variable, text)
    }

    pub fn set_constant(&mut self, equation: usize, text: &str) -> Result<()> {
        self.system_mut()?.set_constant(equation, text)
    }

    /// Validate and solve the current cells, returning the formatted values.
    pub fn solve(&mut self) -> Result<Vec<String>> {
        self.outcome = None;
        let system = self.system.as_ref().ok_or(SolveError::NotConfigured)?;
        let outcome = system.solve();
        if let Err(err) = &outcome {
            log::debug!("solve failed: {err}");
        }
        let formatted = outcome
            .as_ref()
            .map(|s| format_values(&s.values))
            .map_err(|e| e.clone());
        self.outcome = Some(outcome);
        formatted
    }

    pub fn outcome(&self) -> Option<&Result<LinearSolution>> {
        self.outcome.as_ref()
    }

    pub fn solution(&self) -> Option<&LinearSolution> {
        self.outcome.as_ref().and_then(|o| o.as_ref().ok())
    }

    pub fn error(&self) -> Option<&SolveError> {
        self.outcome.as_ref().and_then(|o| o.as_ref().err())
    }

    pub fn reset(&mut self) {
        *self = Workbench::with_limits(self.limits);
    }

    fn system_mut(&mut self) -> Result<&mut System> {
        self.system.as_mut().ok_or(SolveError::NotConfigured)
    }
}
