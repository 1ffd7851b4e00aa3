// prompt text sent to the model

use crate::catalog;
use crate::models::CampaignInput;
use crate::schema::strategy_schema;

pub const STRATEGIST_PREAMBLE: &str = "\
    You're an expert Meta Ads strategist specializing in small businesses in \
    Pakistan and South Asia. You always answer with a single JSON object and \
    no surrounding prose.";

pub fn build_prompt(input: &CampaignInput) -> String {
    let audience = &input.target_audience;
    let interests = if audience.interests.is_empty() {
        "any".to_string()
    } else {
        audience.interests.join(", ")
    };
    let template = catalog::template_for(&input.business_type, &input.product_description);

    format!(
        "You're an expert Meta Ads strategist specializing in small businesses in Pakistan and South Asia.

Input Details:
- Product/Service: {product}
- Industry: {industry}
- Budget: PKR {amount}/{period}
- Goal: {goal}
- Target Audience: {gender} audience, age {age_min}-{age_max}, located in {location}, interested in {interests}
- Positioning: {focus}. Key message: {benefit}

Create a comprehensive Meta Ads strategy with:

1. FUNNEL STRATEGY: 3-stage breakdown (TOFU-MOFU-BOFU) with specific actions for each stage
2. CAMPAIGN OBJECTIVES: Recommend Meta objectives per funnel stage (Reach → Engagement → Leads → Sales)
3. AD FORMATS & PLATFORMS: Suggest ad types (Image, Video, Carousel, Reels, Stories, Click-to-WhatsApp) and platform priorities
4. AD COPY: Create compelling ad copy for each funnel stage in both English and Urdu
5. BUDGET PLANNER: Break down the budget across funnel stages with percentages
6. 7-DAY SCHEDULE: Day-by-day campaign plan with targeting and retargeting strategies

Focus on:
- Low-budget tactics suitable for Pakistani market
- WhatsApp-first funnels where appropriate
- Local cultural context and language preferences
- Practical, actionable recommendations
- ROI-focused approach

Make it comprehensive yet easy to understand for non-marketers.",
        product = input.product_description,
        industry = input.business_type,
        amount = input.budget_amount,
        period = input.budget_period,
        goal = input.campaign_goal,
        gender = audience.gender,
        age_min = audience.age_min,
        age_max = audience.age_max,
        location = audience.location,
        interests = interests,
        focus = template.product_focus,
        benefit = template.main_benefit,
    )
}

/// Prompt for providers without native structured output: the schema goes inline.
pub fn build_prompt_with_schema(input: &CampaignInput) -> String {
    let schema = serde_json::to_string_pretty(&strategy_schema()).unwrap_or_else(|_| "{}".to_string());
    format!(
        "{}\n\nRespond with only a JSON object matching this schema. \
         funnelStrategy, campaignObjectives and adCopy hold exactly three entries in \
         TOFU, MOFU, BOFU order; campaignSchedule holds days 1 through 7.\n\n{schema}",
        build_prompt(input)
    )
}
