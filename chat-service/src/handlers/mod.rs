pub mod chat;
pub mod health;
pub mod train;

pub use chat::chat;
pub use health::{health_check, readiness_check};
pub use train::train_txt;
