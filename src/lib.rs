pub mod audit;
pub mod clause;
pub mod config;
pub mod core;
pub mod error;
pub mod lexicon;
pub mod ratio;
pub mod register;

pub use audit::{AuditReport, Auditor};
pub use clause::{count_clauses, ClauseCount};
pub use self::core::converter::{compose, decompose};
pub use self::core::jamo_mapper::JamoSequence;
pub use error::AuditError;
pub use lexicon::audit_lexicon;
pub use ratio::validate_ratio;
pub use register::{
    classify, dominant, recommend_register, Dominance, Register, RegisterClassifier, RegisterCount,
};
