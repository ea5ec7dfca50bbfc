#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid number '{token}' on line {line}")]
    InvalidNumber { line: usize, token: String },
}
