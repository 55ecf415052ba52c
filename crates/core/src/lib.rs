mod error;
pub mod meeting;
mod shared;

pub use error::QuorumError;
pub use shared::usecase::{execute, UseCase};
