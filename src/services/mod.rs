pub mod ai_service;
pub mod article_service;
pub mod quiz_service;
