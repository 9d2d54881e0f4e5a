use thiserror::Error;

use crate::pool::{Literal, PackageId};

#[derive(Error, Debug)]
pub enum PolicyError {
    // Precondition violations
    #[error("Empty candidate group passed to {stage}")]
    EmptyCandidateGroup { stage: &'static str },

    #[error("Literal {literal} does not reference a package in the pool")]
    UnknownLiteral { literal: Literal },

    #[error("Package not found in pool: #{id}")]
    UnknownPackage { id: PackageId },

    #[error("Repository is not registered in the pool: {name}")]
    UnknownRepository { name: String },

    #[error("Repository registered twice: {name}")]
    DuplicateRepository { name: String },

    #[error("Cannot alias package #{id}, it is an alias itself")]
    AliasOfAlias { id: PackageId },

    // Version errors
    #[error(transparent)]
    InvalidOperator(#[from] pox_version::InvalidOperatorError),

    // Config errors
    #[error("Failed to parse pool configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PolicyError>;
