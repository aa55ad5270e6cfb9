use crate::bmi::BmiCategory;

/// Alert style a tip is rendered with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TipTone {
    Success,
    Warning,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HealthTip {
    pub tone: TipTone,
    pub text: &'static str,
}

pub fn health_tip(category: BmiCategory) -> HealthTip {
    match category {
        BmiCategory::Normal => HealthTip {
            tone: TipTone::Success,
            text: "Your weight is ideal! Keep up this training routine to maintain heart health and stamina.",
        },
        BmiCategory::Underweight => HealthTip {
            tone: TipTone::Warning,
            text: "You are on the thin side. Focus on better nutrition and strength training to build muscle mass.",
        },
        BmiCategory::Overweight | BmiCategory::Obesity => HealthTip {
            tone: TipTone::Warning,
            text: "Your BMI indicates excess weight. Regular cardio like this session is great for burning fat.",
        },
    }
}
