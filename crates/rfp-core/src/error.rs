//! Core Errors
//!
//! Construction-time failures (seed data, wizard definitions) and the
//! submit outcome of the wizard. Field validation failures are not errors
//! in this sense; they travel as `FieldErrors`.

use thiserror::Error;

use crate::models::ColumnId;
use crate::validation::FieldErrors;
use crate::wizard::FieldKey;

/// Common result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building core state from seed data or definitions
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("malformed seed data: {0}")]
    Seed(#[from] serde_json::Error),

    #[error("board is missing column `{column}`")]
    MissingColumn { column: ColumnId },

    #[error("column `{column}` is listed more than once")]
    DuplicateColumn { column: ColumnId },

    #[error("card `{id}` appears more than once on the board")]
    DuplicateCard { id: String },

    #[error("wizard needs at least one step")]
    NoSteps,

    #[error("final wizard step `{step}` must be review-only")]
    FieldsOnReviewStep { step: String },

    #[error("field `{field}` has no validation rule")]
    UnruledField { field: FieldKey },
}

/// Why a wizard submission was not accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("submission is only possible from the final step (currently on step {step})")]
    NotAtFinalStep { step: usize },

    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors<FieldKey>),
}
