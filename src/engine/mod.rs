pub mod check_verify;
pub mod expect;
pub mod predicate;

pub use check_verify::{CheckVerify, validator};
pub use expect::{Expectation, expect};
