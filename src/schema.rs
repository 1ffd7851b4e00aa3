// json schema for CampaignStrategy and checking model replies against it

use crate::catalog::STAGES;
use crate::error::StrategyError;
use crate::models::{CampaignStrategy, CopyBlock};
use regex::Regex;
use serde_json::{json, Value};
use std::sync::OnceLock;

const SCHEDULE_DAYS: u32 = 7;

fn string() -> Value {
    json!({ "type": "string" })
}

fn string_list() -> Value {
    json!({ "type": "array", "items": string() })
}

fn object(properties: Value, required: &[&str]) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

fn copy_block() -> Value {
    object(
        json!({ "headline": string(), "description": string(), "cta": string() }),
        &["headline", "description", "cta"],
    )
}

/// Schema of the strategy payload, in the OpenAPI subset Gemini accepts as
/// `responseSchema`. Every field is required except `retargeting`.
pub fn strategy_schema() -> Value {
    let funnel_stage = object(
        json!({
            "stage": string(),
            "phase": string(),
            "description": string(),
            "actions": string_list(),
        }),
        &["stage", "phase", "description", "actions"],
    );

    let objective = object(
        json!({
            "stage": string(),
            "objective": string(),
            "description": string(),
            "expectedOutcome": string(),
        }),
        &["stage", "objective", "description", "expectedOutcome"],
    );

    let ad_format = object(
        json!({ "type": string(), "description": string(), "priority": string() }),
        &["type", "description", "priority"],
    );
    let platform = object(
        json!({ "name": string(), "reason": string(), "priority": string() }),
        &["name", "reason", "priority"],
    );

    let ad_copy = object(
        json!({ "stage": string(), "english": copy_block(), "urdu": copy_block() }),
        &["stage", "english", "urdu"],
    );

    let allocation = object(
        json!({
            "stage": string(),
            "amount": string(),
            "percentage": string(),
            "description": string(),
        }),
        &["stage", "amount", "percentage", "description"],
    );
    let budget_plan = object(
        json!({
            "total": string(),
            "weekly": string(),
            "monthly": string(),
            "breakdown": { "type": "array", "items": allocation },
        }),
        &["total", "weekly", "monthly", "breakdown"],
    );

    let schedule_day = object(
        json!({
            "day": { "type": "integer" },
            "focus": string(),
            "stage": string(),
            "actions": string_list(),
            "targeting": string(),
            "retargeting": string(),
        }),
        &["day", "focus", "stage", "actions", "targeting"],
    );

    object(
        json!({
            "funnelStrategy": { "type": "array", "items": funnel_stage },
            "campaignObjectives": { "type": "array", "items": objective },
            "adFormats": object(
                json!({
                    "formats": { "type": "array", "items": ad_format },
                    "platforms": { "type": "array", "items": platform },
                }),
                &["formats", "platforms"],
            ),
            "adCopy": { "type": "array", "items": ad_copy },
            "budgetPlan": budget_plan,
            "campaignSchedule": { "type": "array", "items": schedule_day },
        }),
        &[
            "funnelStrategy",
            "campaignObjectives",
            "adFormats",
            "adCopy",
            "budgetPlan",
            "campaignSchedule",
        ],
    )
}

fn code_fence() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| {
        Regex::new(r"(?s)^\s*```[A-Za-z]*\s*(.*?)\s*```\s*$").expect("code fence pattern is valid")
    })
}

/// Removes a surrounding ```json fence, which chat models like to add.
pub fn strip_code_fence(text: &str) -> &str {
    match code_fence().captures(text).and_then(|c| c.get(1)) {
        Some(inner) => inner.as_str(),
        None => text.trim(),
    }
}

/// Parses a model reply into a strategy and checks it has the expected shape.
pub fn parse_strategy(text: &str) -> Result<CampaignStrategy, StrategyError> {
    let strategy: CampaignStrategy = serde_json::from_str(strip_code_fence(text))
        .map_err(|e| StrategyError::upstream(format!("reply does not match schema: {e}")))?;
    check_shape(&strategy)?;
    Ok(strategy)
}

/// Structural checks serde can't express: section sizes, stage order, day numbering.
pub fn check_shape(strategy: &CampaignStrategy) -> Result<(), StrategyError> {
    expect_len("funnelStrategy", strategy.funnel_strategy.len(), STAGES.len())?;
    expect_len("campaignObjectives", strategy.campaign_objectives.len(), STAGES.len())?;
    expect_len("adCopy", strategy.ad_copy.len(), STAGES.len())?;
    expect_len("budgetPlan.breakdown", strategy.budget_plan.breakdown.len(), STAGES.len())?;
    expect_len(
        "campaignSchedule",
        strategy.campaign_schedule.len(),
        SCHEDULE_DAYS as usize,
    )?;

    for (index, key) in STAGES.iter().enumerate() {
        let stages = [
            ("funnelStrategy", strategy.funnel_strategy[index].stage.as_str()),
            ("campaignObjectives", strategy.campaign_objectives[index].stage.as_str()),
            ("adCopy", strategy.ad_copy[index].stage.as_str()),
        ];
        for (section, stage) in stages {
            if !stage.trim_start().starts_with(*key) {
                return Err(StrategyError::upstream(format!(
                    "{section}[{index}] is '{stage}', expected the {key} stage"
                )));
            }
        }
    }

    for (index, copy) in strategy.ad_copy.iter().enumerate() {
        check_copy(index, "english", &copy.english)?;
        check_copy(index, "urdu", &copy.urdu)?;
    }

    for (expected, entry) in (1..=SCHEDULE_DAYS).zip(&strategy.campaign_schedule) {
        if entry.day != expected {
            return Err(StrategyError::upstream(format!(
                "campaignSchedule day {} found where day {expected} was expected",
                entry.day
            )));
        }
    }

    Ok(())
}

fn expect_len(section: &str, actual: usize, expected: usize) -> Result<(), StrategyError> {
    if actual != expected {
        return Err(StrategyError::upstream(format!(
            "{section} has {actual} entries, expected {expected}"
        )));
    }
    Ok(())
}

fn check_copy(index: usize, language: &str, block: &CopyBlock) -> Result<(), StrategyError> {
    let fields = [
        ("headline", &block.headline),
        ("description", &block.description),
        ("cta", &block.cta),
    ];
    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(StrategyError::upstream(format!(
                "adCopy[{index}].{language}.{name} is empty"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;
    use crate::models::{BudgetPeriod, CampaignGoal, CampaignInput, Gender, TargetAudience};

    fn sample() -> CampaignStrategy {
        generate(&CampaignInput {
            product_description: "handmade candles".to_string(),
            business_type: "Home & Garden".to_string(),
            budget_amount: 300,
            budget_period: BudgetPeriod::Weekly,
            campaign_goal: CampaignGoal::BrandAwareness,
            target_audience: TargetAudience {
                age_min: 25,
                age_max: 45,
                location: "Karachi".to_string(),
                gender: Gender::All,
                interests: vec![],
            },
        })
        .unwrap()
    }

    #[test]
    fn schema_requires_top_level_sections() {
        let schema = strategy_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(required.len(), 6);
        assert!(required.contains(&"budgetPlan"));
        assert_eq!(
            schema["properties"]["adFormats"]["properties"]["formats"]["items"]["required"][0],
            "type"
        );
    }

    #[test]
    fn retargeting_is_optional_in_schema() {
        let schema = strategy_schema();
        let day = &schema["properties"]["campaignSchedule"]["items"];
        assert!(day["properties"].get("retargeting").is_some());
        let required = day["required"].as_array().unwrap();
        assert!(!required.iter().any(|v| v == "retargeting"));
    }

    #[test]
    fn accepts_generated_strategy() {
        let text = serde_json::to_string(&sample()).unwrap();
        assert_eq!(parse_strategy(&text).unwrap(), sample());
    }

    #[test]
    fn accepts_fenced_reply() {
        let text = format!("```json\n{}\n```", serde_json::to_string_pretty(&sample()).unwrap());
        assert_eq!(parse_strategy(&text).unwrap(), sample());
    }

    #[test]
    fn rejects_prose() {
        let err = parse_strategy("Here is your strategy: spend wisely.").unwrap_err();
        assert!(matches!(err, StrategyError::Upstream(_)));
    }

    #[test]
    fn rejects_missing_section() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value.as_object_mut().unwrap().remove("budgetPlan");
        let err = parse_strategy(&value.to_string()).unwrap_err();
        assert!(err.to_string().contains("budgetPlan"));
    }

    #[test]
    fn rejects_short_schedule() {
        let mut strategy = sample();
        strategy.campaign_schedule.truncate(5);
        let err = check_shape(&strategy).unwrap_err();
        assert!(err.to_string().contains("campaignSchedule has 5 entries"));
    }

    #[test]
    fn rejects_out_of_order_stages() {
        let mut strategy = sample();
        strategy.ad_copy.swap(0, 2);
        let err = check_shape(&strategy).unwrap_err();
        assert!(err.to_string().contains("adCopy[0]"));
    }

    #[test]
    fn rejects_blank_copy() {
        let mut strategy = sample();
        strategy.ad_copy[1].urdu.cta = "  ".to_string();
        let err = check_shape(&strategy).unwrap_err();
        assert!(err.to_string().contains("adCopy[1].urdu.cta"));
    }

    #[test]
    fn rejects_misnumbered_days() {
        let mut strategy = sample();
        strategy.campaign_schedule[3].day = 9;
        assert!(check_shape(&strategy).is_err());
    }
}
