//! Meta Ads strategy generator for small businesses.
//!
//! A campaign form goes in, a structured strategy comes out: funnel stages,
//! objectives, ad formats, bilingual ad copy, a budget split and a seven-day
//! schedule. A hosted model drafts the strategy when credentials are
//! configured; otherwise, or when the model fails, a deterministic template
//! generator produces it.

pub mod budget;
pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod llm;
pub mod models;
pub mod prompt;
pub mod routes;
pub mod schema;
pub mod service;
pub mod validate;

pub use error::StrategyError;
pub use generator::{generate, generate_from_form};
pub use models::{CampaignForm, CampaignInput, CampaignStrategy};
pub use service::StrategyService;
