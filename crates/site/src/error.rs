#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("render error: {0}")]
    Render(#[from] cardkit_core::RenderError),
    #[error("failed to create output directory: {0}")]
    OutputDirCreation(std::io::Error),
    #[error("failed to write page file: {0}")]
    PageWrite(std::io::Error),
}

pub type SiteResult<T> = std::result::Result<T, SiteError>;
