mod generate;
mod health;
mod modes;

pub use generate::{ErrorResponse, GenerateRequest, GenerateResponse, generate_handler};
pub use health::{health_handler, root_handler};
pub use modes::modes_handler;
