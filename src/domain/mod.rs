pub mod comfort;
pub mod dashboard;
pub mod forecast;
pub mod levels;
pub mod narrative;
pub mod uv;
pub mod weather;
