use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("EPUB error: {0}")]
    Epub(#[from] epub::doc::DocError),

    #[error("{0} is not a file")]
    NotAFile(String),
}
