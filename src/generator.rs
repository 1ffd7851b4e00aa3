// template strategy generator, used when no model is configured or the model fails

use crate::budget;
use crate::catalog::{self, BusinessTemplate, DEFAULT_DISCOUNT};
use crate::error::StrategyError;
use crate::models::{
    AdCopy, AdFormats, CampaignForm, CampaignInput, CampaignStrategy, CopyBlock, TargetAudience,
};
use crate::validate::validate;

/// Builds a complete strategy from fixed templates.
///
/// Pure function of `input`: the same input always yields the same strategy.
/// Only the budget arithmetic can fail, when the figures overflow.
pub fn generate(input: &CampaignInput) -> Result<CampaignStrategy, StrategyError> {
    let template = catalog::template_for(&input.business_type, &input.product_description);
    let budget_plan = budget::plan(input.budget_amount, input.budget_period)?;

    Ok(CampaignStrategy {
        funnel_strategy: catalog::funnel_strategy(),
        campaign_objectives: catalog::campaign_objectives(),
        ad_formats: AdFormats {
            formats: catalog::ad_formats(),
            platforms: catalog::platforms(),
        },
        ad_copy: ad_copy(input, &template),
        budget_plan,
        campaign_schedule: catalog::campaign_schedule(&launch_targeting(&input.target_audience)),
    })
}

pub fn generate_from_form(form: CampaignForm) -> Result<CampaignStrategy, StrategyError> {
    let input = validate(form)?;
    generate(&input)
}

/// Day-one targeting line, e.g. "female audience, age 18-35 in Lahore".
pub fn launch_targeting(audience: &TargetAudience) -> String {
    format!(
        "{} audience, age {}-{} in {}",
        audience.gender, audience.age_min, audience.age_max, audience.location
    )
}

/// English and Urdu copy for each funnel stage.
pub fn ad_copy(input: &CampaignInput, template: &BusinessTemplate) -> Vec<AdCopy> {
    let business = &input.business_type;
    let product = &input.product_description;

    vec![
        AdCopy {
            stage: "TOFU".to_string(),
            english: CopyBlock {
                headline: format!("Discover Amazing {business} Solutions!"),
                description: format!(
                    "Transform your experience with our premium {product}. \
                     Join thousands of satisfied customers who trust our quality."
                ),
                cta: "Learn More".to_string(),
            },
            urdu: CopyBlock {
                headline: format!("بہترین {business} حل دریافت کریں!"),
                description: format!(
                    "ہماری پریمیم {product} کے ساتھ اپنا تجربہ بہتر بنائیں۔ \
                     ہزاروں مطمئن گاہکوں کے ساتھ شامل ہوں۔"
                ),
                cta: "مزید جانیں".to_string(),
            },
        },
        AdCopy {
            stage: "MOFU".to_string(),
            english: CopyBlock {
                headline: format!("Why Choose Our {business}?"),
                description: "See what makes us different. Real results, proven quality, \
                              and exceptional customer service. Get your free consultation today!"
                    .to_string(),
                cta: "Get Free Consultation".to_string(),
            },
            urdu: CopyBlock {
                headline: format!("ہماری {business} کیوں منتخب کریں؟"),
                description: "دیکھیں کہ ہم کیا مختلف ہیں۔ حقیقی نتائج، ثابت شدہ معیار، \
                              اور بہترین کسٹمر سروس۔ آج ہی مفت مشاورت حاصل کریں!"
                    .to_string(),
                cta: "مفت مشاورت حاصل کریں".to_string(),
            },
        },
        AdCopy {
            stage: "BOFU".to_string(),
            english: CopyBlock {
                headline: format!("{}: Special Offer on {product}", template.urgency_phrase),
                description: format!(
                    "Don't miss out! Get {DEFAULT_DISCOUNT} off your first order. \
                     Premium quality, fast delivery, and 100% satisfaction guaranteed."
                ),
                cta: "Order Now".to_string(),
            },
            urdu: CopyBlock {
                headline: format!("محدود وقت: {product} پر خصوصی پیشکش"),
                description: format!(
                    "چھوٹ نہ جانے دیں! اپنے پہلے آرڈر پر {DEFAULT_DISCOUNT} رعایت حاصل کریں۔ \
                     پریمیم کوالٹی، تیز ڈیلیوری، اور 100% اطمینان کی ضمانت۔"
                ),
                cta: "ابھی آرڈر کریں".to_string(),
            },
        },
    ]
}
