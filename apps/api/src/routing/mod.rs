// Request classifier: keyword-driven department routing, priority detection,
// and the response-time estimate table.

pub mod classifier;
pub mod handlers;
pub mod keywords;

pub use classifier::{estimated_response_time, get_priority, route_request};
