//! Premium upsell data. Payment is stubbed: `checkout` only reports what a
//! real integration would do.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub button_text: &'static str,
    pub is_popular: bool,
}

/// Row in the free-vs-premium comparison table. `None` renders as a cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureRow {
    pub name: &'static str,
    pub free: Option<&'static str>,
    pub premium: Option<&'static str>,
}

pub const PLANS: [Plan; 2] = [
    Plan {
        name: "Free",
        price: "$0",
        period: "forever",
        description: "Perfect for getting started with Quran study",
        features: &[
            "5 questions per day",
            "Basic tafseer",
            "Standard voice recognition",
            "Community support",
        ],
        button_text: "Current Plan",
        is_popular: false,
    },
    Plan {
        name: "Premium",
        price: "$9.99",
        period: "per month",
        description: "Unlock the full potential of AI-powered Quran study",
        features: &[
            "Unlimited questions",
            "Offline access to all content",
            "Deep scholarly tafseer",
            "Advanced voice recognition",
            "Ad-free experience",
            "Priority support",
            "Early access to new features",
        ],
        button_text: "Upgrade Now",
        is_popular: true,
    },
];

pub const FEATURE_MATRIX: [FeatureRow; 6] = [
    FeatureRow {
        name: "Daily Questions",
        free: Some("5 per day"),
        premium: Some("Unlimited"),
    },
    FeatureRow {
        name: "Offline Access",
        free: None,
        premium: Some("Included"),
    },
    FeatureRow {
        name: "Deep Tafseer",
        free: Some("Basic"),
        premium: Some("Scholarly commentaries"),
    },
    FeatureRow {
        name: "Voice Recognition",
        free: Some("Standard"),
        premium: Some("Advanced multilingual"),
    },
    FeatureRow {
        name: "Ad-free Experience",
        free: None,
        premium: Some("Included"),
    },
    FeatureRow {
        name: "Priority Support",
        free: None,
        premium: Some("Included"),
    },
];

/// Payment stub. A real integration would start a checkout session here.
pub fn checkout(plan: &Plan) -> String {
    format!("Stripe checkout would be initiated here for the {} plan", plan.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_plan_is_popular() {
        assert_eq!(PLANS.iter().filter(|plan| plan.is_popular).count(), 1);
        assert_eq!(PLANS[1].name, "Premium");
    }

    #[test]
    fn checkout_is_a_stub() {
        let line = checkout(&PLANS[1]);
        assert!(line.contains("Stripe checkout"));
        assert!(line.contains("Premium"));
    }

    #[test]
    fn feature_matrix_marks_free_gaps() {
        let offline = FEATURE_MATRIX
            .iter()
            .find(|row| row.name == "Offline Access")
            .unwrap();
        assert!(offline.free.is_none());
        assert!(offline.premium.is_some());
    }
}
