// data models for the strategy api

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// raw form body, validated into CampaignInput
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignForm {
    pub product_description: String,
    pub business_type: String,
    /// the form posts this as a string, api clients tend to send a number
    pub budget_amount: Value,
    pub budget_period: String,
    pub campaign_goal: String,
    pub target_audience: AudienceForm,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudienceForm {
    pub age_min: Value,
    pub age_max: Value,
    pub location: String,
    pub gender: String,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Daily,
    Weekly,
    Monthly,
}

impl BudgetPeriod {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "daily" => Some(BudgetPeriod::Daily),
            "weekly" => Some(BudgetPeriod::Weekly),
            "monthly" => Some(BudgetPeriod::Monthly),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetPeriod::Daily => "daily",
            BudgetPeriod::Weekly => "weekly",
            BudgetPeriod::Monthly => "monthly",
        }
    }

    /// days covered by one period
    pub fn multiplier(&self) -> u64 {
        match self {
            BudgetPeriod::Daily => 1,
            BudgetPeriod::Weekly => 7,
            BudgetPeriod::Monthly => 30,
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    All,
    Male,
    Female,
}

impl Gender {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "" | "all" => Some(Gender::All),
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::All => "all",
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignGoal {
    BrandAwareness,
    LeadGeneration,
    SalesConversions,
    WebsiteTraffic,
    AppInstalls,
    Engagement,
    VideoViews,
}

impl CampaignGoal {
    pub const ALL: [CampaignGoal; 7] = [
        CampaignGoal::BrandAwareness,
        CampaignGoal::LeadGeneration,
        CampaignGoal::SalesConversions,
        CampaignGoal::WebsiteTraffic,
        CampaignGoal::AppInstalls,
        CampaignGoal::Engagement,
        CampaignGoal::VideoViews,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CampaignGoal::BrandAwareness => "Brand Awareness",
            CampaignGoal::LeadGeneration => "Lead Generation",
            CampaignGoal::SalesConversions => "Sales/Conversions",
            CampaignGoal::WebsiteTraffic => "Website Traffic",
            CampaignGoal::AppInstalls => "App Installs",
            CampaignGoal::Engagement => "Engagement",
            CampaignGoal::VideoViews => "Video Views",
        }
    }

    // labels match case-insensitively, whitespace trimmed
    pub fn parse(value: &str) -> Option<Self> {
        let wanted = value.trim();
        Self::ALL
            .into_iter()
            .find(|goal| goal.label().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for CampaignGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetAudience {
    pub age_min: u8,
    pub age_max: u8,
    pub location: String,
    pub gender: Gender,
    pub interests: Vec<String>,
}

/// A validated campaign submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignInput {
    pub product_description: String,
    pub business_type: String,
    pub budget_amount: u64,
    pub budget_period: BudgetPeriod,
    pub campaign_goal: CampaignGoal,
    pub target_audience: TargetAudience,
}

// generated strategy, field names follow the frontend's json contract

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignStrategy {
    pub funnel_strategy: Vec<FunnelStage>,
    pub campaign_objectives: Vec<CampaignObjective>,
    pub ad_formats: AdFormats,
    pub ad_copy: Vec<AdCopy>,
    pub budget_plan: BudgetPlan,
    pub campaign_schedule: Vec<ScheduleDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelStage {
    pub stage: String,
    pub phase: String,
    pub description: String,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignObjective {
    pub stage: String,
    pub objective: String,
    pub description: String,
    pub expected_outcome: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdFormats {
    pub formats: Vec<AdFormat>,
    pub platforms: Vec<Platform>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdFormat {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub priority: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub name: String,
    pub reason: String,
    pub priority: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdCopy {
    pub stage: String,
    pub english: CopyBlock,
    pub urdu: CopyBlock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyBlock {
    pub headline: String,
    pub description: String,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetPlan {
    pub total: String,
    pub weekly: String,
    pub monthly: String,
    pub breakdown: Vec<BudgetAllocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetAllocation {
    pub stage: String,
    pub amount: String,
    pub percentage: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDay {
    pub day: u32,
    pub focus: String,
    pub stage: String,
    pub actions: Vec<String>,
    pub targeting: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retargeting: Option<String>,
}
