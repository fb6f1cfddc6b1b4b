pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use crate::config::Config;
use crate::error::Result;
use crate::services::{
    ai_service::AIService, article_service::ArticleService, quiz_service::QuizService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub article_service: ArticleService,
    pub ai_service: AIService,
    pub quiz_service: QuizService,
}

impl AppState {
    pub fn new(pool: PgPool, config: &Config) -> Result<Self> {
        let article_service = ArticleService::new(config.fetch_timeout)?;
        let ai_service = AIService::new(&config.llm)?;
        let quiz_service = QuizService::new(pool.clone());

        Ok(Self {
            pool,
            article_service,
            ai_service,
            quiz_service,
        })
    }
}
