use thiserror::Error;

pub type MapResult<T> = Result<T, MapError>;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("no profile mapping claims connection `{conn_id}` of type `{conn_type}`")]
    NoMatchingProfile { conn_id: String, conn_type: String },
    #[error("connection `{0}` not found")]
    ConnectionNotFound(String),
}
