// Recruiting: positions, candidate applications and the recruiter roster.

pub mod handlers;
pub mod service;
