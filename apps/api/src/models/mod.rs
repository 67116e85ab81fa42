pub mod activity;
pub mod common;
pub mod notification;
pub mod recruiting;
pub mod request;
pub mod staff;
