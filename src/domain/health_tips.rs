// Health and safety tips keyed by AQI band
use super::aqi::{band_for, AqiCategory};

/// Readings above this add the first layer of bonus tips.
const POOR_AIR_THRESHOLD: i32 = 100;
/// Readings above this add the second layer of bonus tips.
const BAD_AIR_THRESHOLD: i32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TipCategory {
    Protection,
    Indoor,
    Activities,
    Health,
}

impl TipCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipCategory::Protection => "protection",
            TipCategory::Indoor => "indoor",
            TipCategory::Activities => "activities",
            TipCategory::Health => "health",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TipPriority {
    Low,
    Medium,
    High,
}

impl TipPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipPriority::Low => "low",
            TipPriority::Medium => "medium",
            TipPriority::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthTip {
    pub category: TipCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub priority: TipPriority,
}

const fn tip(
    category: TipCategory,
    title: &'static str,
    description: &'static str,
    priority: TipPriority,
) -> HealthTip {
    HealthTip {
        category,
        title,
        description,
        priority,
    }
}

use TipCategory::{Activities, Health, Indoor, Protection};
use TipPriority::{High, Low, Medium};

const GOOD_TIPS: &[HealthTip] = &[
    tip(
        Activities,
        "Perfect for Outdoor Activities",
        "Great day for jogging, cycling, or any outdoor sports. Air quality is excellent!",
        Low,
    ),
    tip(
        Health,
        "Maintain Healthy Habits",
        "Continue your regular exercise routine and enjoy fresh air.",
        Low,
    ),
];

const MODERATE_TIPS: &[HealthTip] = &[
    tip(
        Activities,
        "Normal Outdoor Activities",
        "You can continue normal outdoor activities. Sensitive individuals should watch for symptoms.",
        Low,
    ),
    tip(
        Health,
        "Stay Hydrated",
        "Drink plenty of water and maintain good nutrition to support your immune system.",
        Medium,
    ),
];

const SENSITIVE_TIPS: &[HealthTip] = &[
    tip(
        Protection,
        "Consider Wearing a Mask",
        "If you have respiratory conditions, consider wearing an N95 mask when outdoors.",
        Medium,
    ),
    tip(
        Activities,
        "Limit Prolonged Outdoor Exercise",
        "Reduce the intensity and duration of outdoor activities, especially if you feel any discomfort.",
        Medium,
    ),
    tip(
        Indoor,
        "Keep Windows Closed",
        "Close windows and use air conditioning or air purifiers to maintain indoor air quality.",
        Medium,
    ),
];

const UNHEALTHY_TIPS: &[HealthTip] = &[
    tip(
        Protection,
        "Wear N95 Masks Outdoors",
        "Always wear a properly fitted N95 or P100 mask when going outside.",
        High,
    ),
    tip(
        Activities,
        "Avoid Outdoor Exercise",
        "Move your workout indoors. Avoid jogging, cycling, or any strenuous outdoor activities.",
        High,
    ),
    tip(
        Indoor,
        "Use Air Purifiers",
        "Run air purifiers with HEPA filters in your home, especially in bedrooms.",
        High,
    ),
    tip(
        Health,
        "Monitor Your Health",
        "Watch for symptoms like coughing, throat irritation, or breathing difficulties.",
        High,
    ),
];

const VERY_UNHEALTHY_TIPS: &[HealthTip] = &[
    tip(
        Protection,
        "Essential Mask Usage",
        "Never go outside without an N95 or P100 mask. Consider double masking for extra protection.",
        High,
    ),
    tip(
        Activities,
        "Stay Indoors",
        "Avoid all outdoor activities. Cancel non-essential trips outside.",
        High,
    ),
    tip(
        Indoor,
        "Seal Your Home",
        "Keep all windows and doors closed. Use tape to seal gaps if necessary.",
        High,
    ),
    tip(
        Health,
        "Seek Medical Attention",
        "If you experience chest pain, severe coughing, or difficulty breathing, consult a doctor immediately.",
        High,
    ),
    tip(
        Indoor,
        "Create Clean Air Zones",
        "Designate one room as a clean air zone with multiple air purifiers running.",
        High,
    ),
];

const HAZARDOUS_TIPS: &[HealthTip] = &[
    tip(
        Protection,
        "Emergency Protection Required",
        "Use the highest grade respiratory protection available (P100 masks). Avoid all outdoor exposure.",
        High,
    ),
    tip(
        Activities,
        "Emergency Lockdown",
        "Treat this as an emergency. Stay indoors at all times unless absolutely necessary.",
        High,
    ),
    tip(
        Health,
        "Emergency Medical Preparedness",
        "Have emergency contacts ready. Seek immediate medical help for any respiratory symptoms.",
        High,
    ),
    tip(
        Indoor,
        "Maximum Air Filtration",
        "Run all available air purifiers on maximum settings. Consider creating a safe room.",
        High,
    ),
    tip(
        Health,
        "Vulnerable Population Alert",
        "Children, elderly, and people with health conditions should be especially protected.",
        High,
    ),
];

const POOR_AIR_BONUS: &[HealthTip] = &[
    tip(
        Health,
        "Boost Your Immunity",
        "Eat foods rich in antioxidants like fruits and vegetables. Consider vitamin C supplements.",
        Medium,
    ),
    tip(
        Indoor,
        "Indoor Plants",
        "Add air-purifying plants like snake plants, peace lilies, or spider plants to your home.",
        Low,
    ),
];

const BAD_AIR_BONUS: &[HealthTip] = &[
    tip(
        Health,
        "Avoid Smoking",
        "Absolutely avoid smoking or exposure to secondhand smoke, which will worsen air quality effects.",
        High,
    ),
    tip(
        Protection,
        "Eye Protection",
        "Wear wraparound sunglasses to protect your eyes from particulate matter.",
        Medium,
    ),
];

fn base_tips(category: AqiCategory) -> &'static [HealthTip] {
    match category {
        AqiCategory::Good => GOOD_TIPS,
        AqiCategory::Moderate => MODERATE_TIPS,
        AqiCategory::UnhealthyForSensitiveGroups => SENSITIVE_TIPS,
        AqiCategory::Unhealthy => UNHEALTHY_TIPS,
        AqiCategory::VeryUnhealthy => VERY_UNHEALTHY_TIPS,
        AqiCategory::Hazardous => HAZARDOUS_TIPS,
    }
}

/// Tips for a reading: the band's base tips followed by the bonus layers.
///
/// The bonus thresholds are coarser than the bands and stack on top of them,
/// so an Unhealthy reading gets its four base tips plus both layers.
pub fn generate_tips(aqi: i32) -> Vec<HealthTip> {
    let mut tips = base_tips(band_for(aqi).category).to_vec();

    if aqi > POOR_AIR_THRESHOLD {
        tips.extend_from_slice(POOR_AIR_BONUS);
    }

    if aqi > BAD_AIR_THRESHOLD {
        tips.extend_from_slice(BAD_AIR_BONUS);
    }

    tips
}
