// turn a raw form into a CampaignInput, or say which field is wrong

use crate::error::StrategyError;
use crate::models::{
    AudienceForm, BudgetPeriod, CampaignForm, CampaignGoal, CampaignInput, Gender, TargetAudience,
};
use serde_json::Value;

pub const MIN_AGE: u8 = 13;
pub const MAX_AGE: u8 = 65;

// largest float that still converts to an integer exactly
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

pub fn validate(form: CampaignForm) -> Result<CampaignInput, StrategyError> {
    let product_description = required_text("productDescription", &form.product_description)?;
    let business_type = required_text("businessType", &form.business_type)?;

    let budget_amount = whole_number("budgetAmount", &form.budget_amount)?;
    if budget_amount == 0 {
        return Err(StrategyError::validation(
            "budgetAmount",
            "must be greater than zero",
        ));
    }

    let budget_period = BudgetPeriod::parse(&form.budget_period).ok_or_else(|| {
        StrategyError::validation(
            "budgetPeriod",
            format!(
                "'{}' is not one of daily, weekly, monthly",
                form.budget_period
            ),
        )
    })?;

    let campaign_goal = CampaignGoal::parse(&form.campaign_goal).ok_or_else(|| {
        let known: Vec<&str> = CampaignGoal::ALL.iter().map(|goal| goal.label()).collect();
        StrategyError::validation(
            "campaignGoal",
            format!(
                "'{}' is not a supported goal (expected one of: {})",
                form.campaign_goal,
                known.join(", ")
            ),
        )
    })?;

    let target_audience = validate_audience(form.target_audience)?;

    Ok(CampaignInput {
        product_description,
        business_type,
        budget_amount,
        budget_period,
        campaign_goal,
        target_audience,
    })
}

fn validate_audience(audience: AudienceForm) -> Result<TargetAudience, StrategyError> {
    let age_min = age("targetAudience.ageMin", &audience.age_min)?;
    let age_max = age("targetAudience.ageMax", &audience.age_max)?;
    if age_min >= age_max {
        return Err(StrategyError::validation(
            "targetAudience.ageMax",
            format!("must be greater than ageMin ({age_min})"),
        ));
    }

    let location = required_text("targetAudience.location", &audience.location)?;

    let gender = Gender::parse(&audience.gender).ok_or_else(|| {
        StrategyError::validation(
            "targetAudience.gender",
            format!("'{}' is not one of all, male, female", audience.gender),
        )
    })?;

    let interests = audience
        .interests
        .iter()
        .map(|interest| interest.trim())
        .filter(|interest| !interest.is_empty())
        .map(str::to_string)
        .collect();

    Ok(TargetAudience {
        age_min,
        age_max,
        location,
        gender,
        interests,
    })
}

fn required_text(field: &str, value: &str) -> Result<String, StrategyError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StrategyError::validation(field, "is required"));
    }
    Ok(trimmed.to_string())
}

fn age(field: &str, value: &Value) -> Result<u8, StrategyError> {
    let years = whole_number(field, value)?;
    if years < u64::from(MIN_AGE) || years > u64::from(MAX_AGE) {
        return Err(StrategyError::validation(
            field,
            format!("must be between {MIN_AGE} and {MAX_AGE}, got {years}"),
        ));
    }
    // range checked above
    Ok(years as u8)
}

// accepts 1000, 1000.0 and "1000"; rejects fractions, signs, and junk like "1000abc"
fn whole_number(field: &str, value: &Value) -> Result<u64, StrategyError> {
    match value {
        Value::Null => Err(StrategyError::validation(field, "is required")),
        Value::Number(number) => {
            if let Some(n) = number.as_u64() {
                return Ok(n);
            }
            match number.as_f64() {
                Some(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= MAX_EXACT_FLOAT => {
                    Ok(f as u64)
                }
                _ => Err(StrategyError::validation(
                    field,
                    format!("must be a non-negative whole number, got {number}"),
                )),
            }
        }
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(StrategyError::validation(field, "is required"));
            }
            if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
                return Err(StrategyError::validation(
                    field,
                    format!("'{trimmed}' is not a whole number"),
                ));
            }
            trimmed
                .parse::<u64>()
                .map_err(|_| StrategyError::validation(field, "is too large"))
        }
        other => Err(StrategyError::validation(
            field,
            format!("must be a number, got {other}"),
        )),
    }
}
