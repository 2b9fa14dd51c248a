//! Safe arithmetic over untrusted text.
//!
//! An expression made of numbers, `+ - * / ^` and parentheses goes through
//! three stages, each returning a typed error instead of panicking:
//! [`Lexer`](syntax::Lexer) (text to tokens),
//! [`ShuntingYard`](syntax::ShuntingYard) (infix to postfix) and
//! [`evaluate_postfix`](eval::evaluate_postfix) (postfix to a value).
//!
//! ```
//! assert_eq!(safe_math::evaluate("2^3^2"), Ok(512.0));
//! assert_eq!(
//!     safe_math::evaluate("3 / 0").unwrap_err().kind(),
//!     safe_math::ErrorKind::DivisionByZero,
//! );
//! ```

pub mod config;
pub mod errors;
pub mod eval;
pub mod source_pos;
pub mod stack;
pub mod syntax;

use log::debug;

pub use config::EvaluatorConfig;
pub use errors::{ErrorKind, EvalError, EvaluationError, ParseError};

use eval::evaluate_postfix;
use syntax::{Lexer, ShuntingYard};

/// Evaluates `expression` with the default limits.
pub fn evaluate(expression: &str) -> Result<f64, EvaluationError> {
    Calculator::default().evaluate(expression)
}

/// Evaluator holding its limits. Holds no state between calls, so one
/// instance can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: EvaluatorConfig,
}

impl Calculator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    pub fn evaluate(&self, expression: &str) -> Result<f64, EvaluationError> {
        self.run(expression)
            .inspect_err(|err| debug!("evaluation of {:?} failed: {}", expression, err))
    }

    fn run(&self, expression: &str) -> Result<f64, EvaluationError> {
        if expression.len() > self.config.max_input_len {
            return Err(ParseError::InputTooLong {
                len: expression.len(),
                max: self.config.max_input_len,
            }
            .into());
        }
        let tokens = Lexer::new(expression).tokenize()?;
        let postfix = ShuntingYard::new(self.config.max_nesting_depth).convert(tokens)?;
        Ok(evaluate_postfix(&postfix)?)
    }
}
