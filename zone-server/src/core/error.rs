use thiserror::Error;

/// Fatal server errors. Everything request-scoped goes through
/// [`crate::utils::AppError`]; this type only covers failures that stop
/// the process, which per the service contract is limited to the network
/// listener.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("failed to bind HTTP listener: {0}")]
    Bind(std::io::Error),

    #[error("HTTP server error: {0}")]
    Serve(std::io::Error),

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
