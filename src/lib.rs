pub mod cmd;
pub mod domain;
pub mod engine;
pub mod io;
pub mod suite;
pub mod util;

pub use domain::check::{Check, MessageMode, TestKind};
pub use domain::error::CheckVerifyError;
pub use domain::value::Variable;
pub use engine::{CheckVerify, Expectation, expect, validator};
pub use suite::Suite;
