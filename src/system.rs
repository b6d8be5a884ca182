//! Cell-level model of a linear system: raw text per coefficient, the parsed value,
//! and a fixed `equations x variables` shape.

use num_rational::BigRational;

use crate::error::{ParseError, Result, SolveError};
use crate::parser::parse_value;
use crate::solver::{LinearSolution, solve};

pub type Rational = BigRational;

/// One cell: the text as typed plus its parsed value.
///
/// `value` is `None` when the text is blank or does not parse. A blank cell reads
/// as zero during a solve; an unparsable one blocks the solve.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Coefficient {
    text: String,
    value: Option<f64>,
    error: Option<ParseError>,
}

impl Coefficient {
    pub fn parse(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.trim().is_empty() {
            return Coefficient {
                text,
                value: None,
                error: None,
            };
        }
        match parse_value(&text) {
            Ok(v) => Coefficient {
                text,
                value: Some(v),
                error: None,
            },
            Err(e) => Coefficient {
                text,
                value: None,
                error: Some(e),
            },
        }
    }

    pub fn blank() -> Self {
        Coefficient::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn is_blank(&self) -> bool {
        self.value.is_none() && self.error.is_none()
    }

    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    /// The value used by the solver: blanks count as zero.
    pub fn resolve(&self) -> std::result::Result<f64, ParseError> {
        match (&self.value, &self.error) {
            (Some(v), _) => Ok(*v),
            (None, Some(e)) => Err(e.clone()),
            (None, None) => Ok(0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    pub coefficients: Vec<Coefficient>,
    pub constant: Coefficient,
}

impl Equation {
    fn blank(variable_count: usize) -> Self {
        Equation {
            coefficients: vec![Coefficient::blank(); variable_count],
            constant: Coefficient::blank(),
        }
    }
}

/// A grid of `equation_count` equations over `variable_count` variables.
///
/// The shape is fixed at construction. Changing either count means building a new
/// `System` with [`System::reshape`], which starts blank.
#[derive(Debug, Clone, PartialEq)]
pub struct System {
    variable_count: usize,
    equations: Vec<Equation>,
}

impl System {
    pub fn reshape(equation_count: usize, variable_count: usize) -> Result<Self> {
        if equation_count == 0 || variable_count == 0 {
            return Err(SolveError::InvalidShape {
                variables: variable_count,
                equations: equation_count,
            });
        }
        Ok(System {
            variable_count,
            equations: (0..equation_count)
                .map(|_| Equation::blank(variable_count))
                .collect(),
        })
    }

    /// Build a system from rows of text, each holding `variable_count` coefficients
    /// followed by the constant.
    pub fn from_rows<R, S>(variable_count: usize, rows: &[R]) -> Result<Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut system = System::reshape(rows.len(), variable_count)?;
        for (eq, row) in rows.iter().enumerate() {
            let cells = row.as_ref();
            if cells.len() != variable_count + 1 {
                return Err(SolveError::DimensionMismatch {
                    expected: variable_count + 1,
                    got: cells.len(),
                });
            }
            let (coefficients, constant) = cells.split_at(variable_count);
            for (var, text) in coefficients.iter().enumerate() {
                system.set_coefficient(eq, var, text.as_ref())?;
            }
            system.set_constant(eq, constant[0].as_ref())?;
        }
        Ok(system)
    }

    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    pub fn equation_count(&self) -> usize {
        self.equations.len()
    }

    pub fn equations(&self) -> &[Equation] {
        &self.equations
    }

    pub fn set_coefficient(&mut self, equation: usize, variable: usize, text: &str) -> Result<()> {
        let cell = self
            .equations
            .get_mut(equation)
            .and_then(|eq| eq.coefficients.get_mut(variable))
            .ok_or(SolveError::CellOutOfRange {
                equation,
                column: variable,
            })?;
        *cell = Coefficient::parse(text);
        Ok(())
    }

    pub fn set_constant(&mut self, equation: usize, text: &str) -> Result<()> {
        let column = self.variable_count;
        let eq = self
            .equations
            .get_mut(equation)
            .ok_or(SolveError::CellOutOfRange { equation, column })?;
        eq.constant = Coefficient::parse(text);
        Ok(())
    }

    /// Report the first unparsable cell, scanning each equation's coefficients
    /// left to right and then its constant.
    pub fn validate(&self) -> Result<()> {
        self.augmented().map(|_| ())
    }

    /// Numeric coefficient rows and constant column, blanks read as zero.
    pub fn augmented(&self) -> Result<(Vec<Vec<f64>>, Vec<f64>)> {
        let mut rows = Vec::with_capacity(self.equations.len());
        let mut constants = Vec::with_capacity(self.equations.len());
        for (eq_idx, eq) in self.equations.iter().enumerate() {
            let row = eq
                .coefficients
                .iter()
                .enumerate()
                .map(|(var, c)| {
                    c.resolve().map_err(|source| SolveError::InvalidCoefficient {
                        equation: eq_idx,
                        variable: var,
                        text: c.text().to_string(),
                        source,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            let constant = eq
                .constant
                .resolve()
                .map_err(|source| SolveError::InvalidConstant {
                    equation: eq_idx,
                    text: eq.constant.text().to_string(),
                    source,
                })?;
            rows.push(row);
            constants.push(constant);
        }
        Ok((rows, constants))
    }

    pub fn solve(&self) -> Result<LinearSolution> {
        let (rows, constants) = self.augmented()?;
        solve(&rows, &constants)
    }
}
