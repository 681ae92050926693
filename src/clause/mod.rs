//! 패턴 기반 절 수 계산 모듈

mod counter;
mod report;

pub use counter::{count_clauses, embedded_clause_count, terminal_clause_count, ClauseCount};
pub use report::ClauseReport;
