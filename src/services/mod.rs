pub mod mcq_service;
pub mod model_service;
