use thiserror::Error;
use crate::factory::errors::FactoryError;

#[derive(Error, Debug)]
pub enum ManagerError {
    #[error("Connection [{0}] not configured")]
    UnknownConnection(String),

    #[error(transparent)]
    Factory(#[from] FactoryError),
}
