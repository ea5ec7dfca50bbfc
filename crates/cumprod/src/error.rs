#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("No input provided: pass a file path or pipe values on standard input")]
    MissingInput,
}
