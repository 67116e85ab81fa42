pub mod departments;
pub mod handlers;
