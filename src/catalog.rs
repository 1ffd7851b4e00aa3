// fixed marketing content the template generator draws from

use crate::models::{AdFormat, CampaignObjective, FunnelStage, Platform, ScheduleDay};

pub const DEFAULT_DISCOUNT: &str = "20%";
pub const DEFAULT_URGENCY_PHRASE: &str = "Special limited offer";

/// Messaging angle for one industry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessTemplate {
    pub product_focus: String,
    pub main_benefit: String,
    pub urgency_phrase: String,
}

// (business type, product focus, main benefit, urgency phrase)
const BUSINESS_TEMPLATES: [(&str, &str, &str, &str); 4] = [
    (
        "Beauty & Wellness",
        "skincare and beauty products",
        "Transform your skin with natural ingredients",
        "Limited time beauty offer",
    ),
    (
        "E-commerce/Online Store",
        "online shopping experience",
        "Shop premium products with fast delivery",
        "Exclusive online deal",
    ),
    (
        "Food & Restaurants",
        "delicious food and dining",
        "Taste authentic flavors made fresh daily",
        "Today's special offer",
    ),
    (
        "Fashion & Apparel",
        "trendy fashion and style",
        "Look amazing with our latest collection",
        "Fashion sale ending soon",
    ),
];

/// Template for a known industry, or one built around the product itself.
pub fn template_for(business_type: &str, product_description: &str) -> BusinessTemplate {
    BUSINESS_TEMPLATES
        .iter()
        .find(|(key, ..)| *key == business_type)
        .map(|(_, focus, benefit, urgency)| BusinessTemplate {
            product_focus: focus.to_string(),
            main_benefit: benefit.to_string(),
            urgency_phrase: urgency.to_string(),
        })
        .unwrap_or_else(|| BusinessTemplate {
            product_focus: product_description.to_string(),
            main_benefit: format!("Experience the best {product_description}"),
            urgency_phrase: DEFAULT_URGENCY_PHRASE.to_string(),
        })
}

/// True when `business_type` has its own template rather than the default.
pub fn is_known_business_type(business_type: &str) -> bool {
    BUSINESS_TEMPLATES.iter().any(|(key, ..)| *key == business_type)
}

/// Short stage keys in funnel order.
pub const STAGES: [&str; 3] = ["TOFU", "MOFU", "BOFU"];

const FUNNEL: [(&str, &str, &str, [&str; 4]); 3] = [
    (
        "TOFU (Top of Funnel)",
        "Awareness",
        "Build brand awareness and reach new potential customers who don't know about your product yet.",
        [
            "Create engaging video content showcasing your product benefits",
            "Use broad targeting to reach new audiences",
            "Focus on brand storytelling and value proposition",
            "Implement reach and brand awareness campaigns",
        ],
    ),
    (
        "MOFU (Middle of Funnel)",
        "Consideration",
        "Engage with people who have shown interest and nurture them towards making a purchase decision.",
        [
            "Retarget website visitors with detailed product information",
            "Share customer testimonials and social proof",
            "Offer free trials, samples, or consultations",
            "Create comparison content and educational materials",
        ],
    ),
    (
        "BOFU (Bottom of Funnel)",
        "Conversion",
        "Convert interested prospects into paying customers with compelling offers and clear calls-to-action.",
        [
            "Retarget cart abandoners with special offers",
            "Use dynamic product ads for e-commerce",
            "Create urgency with limited-time offers",
            "Implement conversion-focused campaigns with clear CTAs",
        ],
    ),
];

pub fn funnel_strategy() -> Vec<FunnelStage> {
    FUNNEL
        .iter()
        .map(|(stage, phase, description, actions)| FunnelStage {
            stage: stage.to_string(),
            phase: phase.to_string(),
            description: description.to_string(),
            actions: strings(actions),
        })
        .collect()
}

const OBJECTIVES: [(&str, &str, &str, &str); 3] = [
    (
        "TOFU",
        "Reach",
        "Maximize the number of people who see your ads to build brand awareness",
        "Increased brand recognition and expanded audience reach",
    ),
    (
        "MOFU",
        "Engagement",
        "Encourage interactions with your content to build relationships",
        "Higher engagement rates and qualified leads",
    ),
    (
        "BOFU",
        "Conversions",
        "Drive specific actions like purchases, sign-ups, or inquiries",
        "Direct sales and measurable ROI",
    ),
];

pub fn campaign_objectives() -> Vec<CampaignObjective> {
    OBJECTIVES
        .iter()
        .map(|(stage, objective, description, outcome)| CampaignObjective {
            stage: stage.to_string(),
            objective: objective.to_string(),
            description: description.to_string(),
            expected_outcome: outcome.to_string(),
        })
        .collect()
}

const FORMATS: [(&str, &str, &str); 4] = [
    (
        "Video Ads",
        "Engaging video content that tells your brand story effectively",
        "High",
    ),
    (
        "Carousel Ads",
        "Showcase multiple products or features in a single ad",
        "High",
    ),
    (
        "Single Image Ads",
        "Simple, cost-effective ads with strong visual impact",
        "Medium",
    ),
    (
        "Click-to-WhatsApp Ads",
        "Direct customers to WhatsApp for instant communication",
        "High",
    ),
];

const PLATFORMS: [(&str, &str, &str); 4] = [
    (
        "Facebook Feed",
        "Largest user base in Pakistan with diverse demographics",
        "High",
    ),
    (
        "Instagram Stories",
        "High engagement rates among younger demographics",
        "High",
    ),
    (
        "WhatsApp",
        "Most popular messaging platform in Pakistan",
        "High",
    ),
    (
        "Facebook Marketplace",
        "Great for local businesses and e-commerce",
        "Medium",
    ),
];

pub fn ad_formats() -> Vec<AdFormat> {
    FORMATS
        .iter()
        .map(|(kind, description, priority)| AdFormat {
            kind: kind.to_string(),
            description: description.to_string(),
            priority: priority.to_string(),
        })
        .collect()
}

pub fn platforms() -> Vec<Platform> {
    PLATFORMS
        .iter()
        .map(|(name, reason, priority)| Platform {
            name: name.to_string(),
            reason: reason.to_string(),
            priority: priority.to_string(),
        })
        .collect()
}

struct ScheduleEntry {
    focus: &'static str,
    stage: &'static str,
    actions: [&'static str; 3],
    targeting: &'static str,
    retargeting: &'static str,
}

// day 1 targeting is replaced with the submitted audience
const SCHEDULE: [ScheduleEntry; 7] = [
    ScheduleEntry {
        focus: "Campaign Launch & Awareness",
        stage: "TOFU",
        actions: [
            "Launch brand awareness campaigns",
            "Set up Facebook and Instagram ads",
            "Monitor initial performance metrics",
        ],
        targeting: "",
        retargeting: "Set up website visitor tracking pixel",
    },
    ScheduleEntry {
        focus: "Content Engagement",
        stage: "TOFU",
        actions: [
            "Share engaging video content",
            "Post customer testimonials",
            "Engage with comments and messages",
        ],
        targeting: "Lookalike audiences based on existing customers",
        retargeting: "Create custom audience from video viewers",
    },
    ScheduleEntry {
        focus: "Lead Generation",
        stage: "MOFU",
        actions: [
            "Launch lead generation campaigns",
            "Offer free consultations or samples",
            "Set up WhatsApp Business integration",
        ],
        targeting: "Website visitors and engaged users",
        retargeting: "Target people who engaged with previous ads",
    },
    ScheduleEntry {
        focus: "Social Proof & Trust Building",
        stage: "MOFU",
        actions: [
            "Share case studies and success stories",
            "Highlight customer reviews",
            "Create educational content",
        ],
        targeting: "Custom audiences from lead forms",
        retargeting: "Re-engage people who downloaded content",
    },
    ScheduleEntry {
        focus: "Conversion Push",
        stage: "BOFU",
        actions: [
            "Launch conversion campaigns",
            "Create urgency with limited offers",
            "Set up dynamic product ads",
        ],
        targeting: "Warm audiences and cart abandoners",
        retargeting: "Target people who visited product pages",
    },
    ScheduleEntry {
        focus: "Optimization & Scaling",
        stage: "All Stages",
        actions: [
            "Analyze performance data",
            "Optimize underperforming ads",
            "Scale successful campaigns",
        ],
        targeting: "Best performing audience segments",
        retargeting: "Expand successful retargeting campaigns",
    },
    ScheduleEntry {
        focus: "Review & Planning",
        stage: "All Stages",
        actions: [
            "Comprehensive performance review",
            "Plan next week's strategy",
            "Adjust budgets based on results",
        ],
        targeting: "Refined audience based on week's data",
        retargeting: "Set up advanced retargeting sequences",
    },
];

/// The seven-day launch plan with day 1 aimed at `launch_targeting`.
pub fn campaign_schedule(launch_targeting: &str) -> Vec<ScheduleDay> {
    SCHEDULE
        .iter()
        .zip(1u32..)
        .map(|(entry, day)| ScheduleDay {
            day,
            focus: entry.focus.to_string(),
            stage: entry.stage.to_string(),
            actions: strings(&entry.actions),
            targeting: if day == 1 {
                launch_targeting.to_string()
            } else {
                entry.targeting.to_string()
            },
            retargeting: Some(entry.retargeting.to_string()),
        })
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
