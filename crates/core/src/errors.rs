use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),
}

pub type BookingResult<T> = Result<T, BookingError>;
