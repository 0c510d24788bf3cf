pub mod completion_service;
pub mod enrichment_service;
pub mod fallback_service;
pub mod image_search_service;
pub mod prompt_builder;
pub mod synthesis_service;
