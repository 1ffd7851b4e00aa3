// http routes

use crate::catalog::is_known_business_type;
use crate::error::StrategyError;
use crate::models::{CampaignForm, CampaignStrategy};
use crate::service::StrategyService;
use crate::validate::validate;
use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use serde_json::Value;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub service: StrategyService,
}

// main api endpoint
async fn generate_strategy_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CampaignStrategy>, StrategyError> {
    let form = parse_form(&body).inspect_err(|e| warn!(error = %e, "Rejected strategy request"))?;
    let input = validate(form).inspect_err(|e| warn!(error = %e, "Rejected strategy request"))?;

    info!(
        business_type = %input.business_type,
        templated_industry = is_known_business_type(&input.business_type),
        goal = %input.campaign_goal,
        budget = input.budget_amount,
        period = %input.budget_period,
        "Received strategy request"
    );

    let strategy = state.service.generate(&input).await?;
    Ok(Json(strategy))
}

/// Not JSON is a parse error; JSON of the wrong shape is a validation error
/// naming the offending path, e.g. `targetAudience.interests`.
pub fn parse_form(body: &[u8]) -> Result<CampaignForm, StrategyError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| StrategyError::Parse(e.to_string()))?;
    serde_path_to_error::deserialize(value).map_err(|e| {
        let path = e.path().to_string();
        // an empty path prints as "."; the body itself has the wrong type
        let field = if path == "." { "request".to_string() } else { path };
        StrategyError::Validation {
            field,
            message: e.into_inner().to_string(),
        }
    })
}

// setup http routes
pub fn build_router(service: StrategyService) -> Router {
    Router::new()
        .route("/api/generate-strategy", post(generate_strategy_handler))
        .with_state(AppState { service })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(matches!(parse_form(b"{not json"), Err(StrategyError::Parse(_))));
        assert!(matches!(parse_form(b""), Err(StrategyError::Parse(_))));
    }

    fn rejected_field(body: &[u8]) -> String {
        match parse_form(body) {
            Err(StrategyError::Validation { field, .. }) => field,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn wrong_typed_fields_are_named_by_path() {
        assert_eq!(rejected_field(br#"{"productDescription": 42}"#), "productDescription");
        assert_eq!(
            rejected_field(br#"{"targetAudience": {"interests": "Beauty"}}"#),
            "targetAudience.interests"
        );
        assert_eq!(
            rejected_field(br#"{"targetAudience": {"gender": null}}"#),
            "targetAudience.gender"
        );
        assert_eq!(rejected_field(br#"{"targetAudience": null}"#), "targetAudience");
    }

    #[test]
    fn non_object_body_is_rejected_as_a_whole() {
        assert_eq!(rejected_field(b"[1, 2, 3]"), "request");
        assert_eq!(rejected_field(br#""just a string""#), "request");
    }

    #[test]
    fn empty_object_parses_and_fails_later() {
        let form = parse_form(b"{}").unwrap();
        assert!(validate(form).is_err());
    }
}
