use rin_model::ModelError;
use thiserror::Error;

/// Failure modes surfaced by the interaction pipeline, layered over [`ModelError`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RinError {
    #[error("residue model error: {0}")]
    Model(#[from] ModelError),

    #[error("parameter {name} was {value}, clamped to {clamped}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        clamped: f64,
    },
}
