use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("No result for this search!")]
    NotFound,

    #[error("Ticket payment is required")]
    PaymentRequired,

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}
