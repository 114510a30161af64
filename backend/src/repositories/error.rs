use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("failed to get DB connection: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("malformed features column: {0}")]
    Features(#[from] serde_json::Error),
}
