//! Canned per-category action plans

use crate::model::{ActionPlan, BenefitCategory};

/// Fixed three-step plan for a category, used without a working model
pub fn canned_plan(category: BenefitCategory) -> ActionPlan {
    let steps: [&str; 3] = match category {
        BenefitCategory::Dental => [
            "Log in to your employee benefits portal and navigate to the Dental section.",
            "Select your preferred dentist from the network or upload a pre-approval form if using an out-of-network provider.",
            "Book your appointment and present your benefits card at the time of service. Claims are typically processed automatically.",
        ],
        BenefitCategory::MentalHealth => [
            "Access the mental health services section in your benefits portal or call the 24/7 helpline listed on your benefits card.",
            "Complete the initial assessment questionnaire to be matched with a suitable counselor or therapist.",
            "Schedule your first session (typically available within 3-5 business days) either in-person or via telehealth.",
        ],
        BenefitCategory::Vision => [
            "Review your vision benefits coverage limits and eligible services in your benefits documentation.",
            "Search for an in-network optometrist or ophthalmologist using the provider directory in your portal.",
            "Schedule an eye exam and bring your benefits ID card. Apply any eligible reimbursement for glasses or contacts after your visit.",
        ],
        BenefitCategory::Opd => [
            "Check your OPD (Outpatient Department) coverage details and any co-pay requirements in your benefits summary.",
            "Choose a nearby hospital or clinic from the approved network list or request a referral from your primary care physician.",
            "Visit the facility with your benefits card and necessary medical documents. Most cashless claims are settled directly by the insurer.",
        ],
        BenefitCategory::Unknown => [
            "Visit your employee benefits portal or contact HR to understand your available healthcare benefits.",
            "Identify the specific category that matches your health need (Dental, Mental Health, Vision, or OPD).",
            "Follow the specific process for that benefit category to avail the services.",
        ],
    };

    ActionPlan::new(steps.map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_three_steps_and_no_note() {
        for category in BenefitCategory::KNOWN
            .into_iter()
            .chain([BenefitCategory::Unknown])
        {
            let plan = canned_plan(category);
            assert_eq!(plan.steps.len(), 3, "{}", category);
            assert!(plan.additional_info.is_none());
        }
    }

    #[test]
    fn test_plans_differ_per_category() {
        assert_ne!(
            canned_plan(BenefitCategory::Dental),
            canned_plan(BenefitCategory::Vision)
        );
        assert!(canned_plan(BenefitCategory::Unknown).steps[1].contains("Dental, Mental Health"));
    }
}
