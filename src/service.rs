// strategy service: try the model once, fall back to the template generator

use crate::config::{Config, ModelProvider};
use crate::error::StrategyError;
use crate::generator;
use crate::llm::{GeminiModel, OpenAiModel, StrategyModel};
use crate::models::{CampaignInput, CampaignStrategy};
use crate::schema::parse_strategy;
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Clone)]
pub struct StrategyService {
    model: Option<Arc<dyn StrategyModel>>,
    timeout: Duration,
}

impl StrategyService {
    pub fn new(model: Option<Arc<dyn StrategyModel>>, timeout: Duration) -> Self {
        Self { model, timeout }
    }

    /// Template-only service, no model calls.
    pub fn templates_only() -> Self {
        Self::new(None, Duration::from_secs(0))
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let model: Option<Arc<dyn StrategyModel>> = match &config.provider {
            ModelProvider::Gemini {
                api_key,
                model,
                base_url,
            } => {
                let gemini: Arc<dyn StrategyModel> =
                    Arc::new(GeminiModel::new(api_key, model, base_url, config.timeout)?);
                Some(gemini)
            }
            ModelProvider::OpenAi { api_key, model } => {
                let openai: Arc<dyn StrategyModel> = Arc::new(OpenAiModel::new(api_key, model));
                Some(openai)
            }
            ModelProvider::Template => None,
        };
        Ok(Self::new(model, config.timeout))
    }

    pub fn mode(&self) -> String {
        match &self.model {
            Some(model) => format!("model:{}", model.name()),
            None => "template".to_string(),
        }
    }

    /// Always yields a complete strategy for valid input. Model failures are
    /// logged and answered from the template generator.
    pub async fn generate(&self, input: &CampaignInput) -> Result<CampaignStrategy, StrategyError> {
        let Some(model) = &self.model else {
            info!("No model configured, using template strategy");
            return generator::generate(input);
        };

        match self.ask_model(model.as_ref(), input).await {
            Ok(strategy) => {
                info!(model = %model.name(), "Strategy generated by model");
                Ok(strategy)
            }
            Err(e) => {
                warn!(model = %model.name(), error = %e, "Model generation failed, using template strategy");
                generator::generate(input)
            }
        }
    }

    async fn ask_model(
        &self,
        model: &dyn StrategyModel,
        input: &CampaignInput,
    ) -> Result<CampaignStrategy, StrategyError> {
        let reply = tokio::time::timeout(self.timeout, model.generate_json(input))
            .await
            .map_err(|_| {
                StrategyError::upstream(format!("no reply within {:?}", self.timeout))
            })?
            .map_err(|e| StrategyError::upstream(format!("{e:#}")))?;
        parse_strategy(&reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetPeriod, CampaignGoal, Gender, TargetAudience};
    use async_trait::async_trait;

    enum Behaviour {
        Reply(String),
        Fail,
        Hang,
    }

    struct FakeModel(Behaviour);

    #[async_trait]
    impl StrategyModel for FakeModel {
        fn name(&self) -> String {
            "fake".to_string()
        }

        async fn generate_json(&self, _input: &CampaignInput) -> Result<String> {
            match &self.0 {
                Behaviour::Reply(text) => Ok(text.clone()),
                Behaviour::Fail => anyhow::bail!("connection refused"),
                Behaviour::Hang => {
                    tokio::time::sleep(Duration::from_secs(60)).await;
                    Ok(String::new())
                }
            }
        }
    }

    fn input() -> CampaignInput {
        CampaignInput {
            product_description: "chai".to_string(),
            business_type: "Food & Restaurants".to_string(),
            budget_amount: 2000,
            budget_period: BudgetPeriod::Monthly,
            campaign_goal: CampaignGoal::Engagement,
            target_audience: TargetAudience {
                age_min: 20,
                age_max: 50,
                location: "Islamabad".to_string(),
                gender: Gender::All,
                interests: vec!["Food".to_string()],
            },
        }
    }

    fn service(behaviour: Behaviour) -> StrategyService {
        StrategyService::new(
            Some(Arc::new(FakeModel(behaviour))),
            Duration::from_millis(50),
        )
    }

    #[test]
    fn without_model_matches_generator_exactly() {
        let service = StrategyService::templates_only();
        let strategy = tokio_test::block_on(service.generate(&input())).unwrap();
        assert_eq!(strategy, generator::generate(&input()).unwrap());
        assert_eq!(service.mode(), "template");
    }

    #[test]
    fn valid_model_reply_is_returned() {
        let mut expected = generator::generate(&input()).unwrap();
        expected.ad_copy[0].english.headline = "Fresh chai, every morning".to_string();
        let service = service(Behaviour::Reply(serde_json::to_string(&expected).unwrap()));

        let strategy = tokio_test::block_on(service.generate(&input())).unwrap();
        assert_eq!(strategy, expected);
        assert_eq!(service.mode(), "model:fake");
    }

    #[test]
    fn failing_model_falls_back() {
        let strategy = tokio_test::block_on(service(Behaviour::Fail).generate(&input())).unwrap();
        assert_eq!(strategy, generator::generate(&input()).unwrap());
    }

    #[test]
    fn malformed_model_reply_falls_back() {
        let service = service(Behaviour::Reply(r#"{"funnelStrategy": []}"#.to_string()));
        let strategy = tokio_test::block_on(service.generate(&input())).unwrap();
        assert_eq!(strategy, generator::generate(&input()).unwrap());
    }

    #[test]
    fn slow_model_times_out_and_falls_back() {
        let strategy = tokio_test::block_on(service(Behaviour::Hang).generate(&input())).unwrap();
        assert_eq!(strategy.budget_plan.total, "60000");
    }

    #[test]
    fn from_config_without_keys_is_template_mode() {
        let config = Config::from_lookup(|_| None);
        let service = StrategyService::from_config(&config).unwrap();
        assert_eq!(service.mode(), "template");
    }
}
