//! Built-in benefit records

use crate::model::{BenefitCategory, BenefitRecord};

const DENTAL_COLOR: &str = "var(--health-dental)";
const MENTAL_COLOR: &str = "var(--health-mental)";
const VISION_COLOR: &str = "var(--health-vision)";
const OPD_COLOR: &str = "var(--health-opd)";

struct Entry {
    id: &'static str,
    title: &'static str,
    category: BenefitCategory,
    coverage: &'static str,
    description: &'static str,
    icon: &'static str,
    color: &'static str,
    features: [&'static str; 4],
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: "dental-1",
        title: "Comprehensive Dental Care",
        category: BenefitCategory::Dental,
        coverage: "Up to $2,500/year",
        description: "Complete dental coverage including preventive care, basic procedures, and major work. Includes cleanings, fillings, root canals, and crowns.",
        icon: "🦷",
        color: DENTAL_COLOR,
        features: [
            "2 free cleanings per year",
            "100% preventive care coverage",
            "80% basic procedures",
            "50% major procedures",
        ],
    },
    Entry {
        id: "dental-2",
        title: "Orthodontic Care",
        category: BenefitCategory::Dental,
        coverage: "Up to $3,000 lifetime",
        description: "Coverage for braces, aligners, and other orthodontic treatments for both adults and children.",
        icon: "😁",
        color: DENTAL_COLOR,
        features: [
            "Traditional braces covered",
            "Clear aligners eligible",
            "Children & adult coverage",
            "Flexible payment plans",
        ],
    },
    Entry {
        id: "dental-3",
        title: "Emergency Dental",
        category: BenefitCategory::Dental,
        coverage: "24/7 Coverage",
        description: "24/7 emergency dental care for urgent situations like severe pain, broken teeth, or infections.",
        icon: "🚨",
        color: DENTAL_COLOR,
        features: [
            "24/7 emergency hotline",
            "Same-day appointments",
            "Pain management included",
            "Network of providers",
        ],
    },
    Entry {
        id: "mental-1",
        title: "Therapy & Counseling",
        category: BenefitCategory::MentalHealth,
        coverage: "Unlimited sessions",
        description: "Access to licensed therapists and counselors for individual, couples, or family therapy with no session limits.",
        icon: "🧠",
        color: MENTAL_COLOR,
        features: [
            "Individual therapy",
            "Couples counseling",
            "Family therapy",
            "In-person & telehealth",
        ],
    },
    Entry {
        id: "mental-2",
        title: "Wellness Programs",
        category: BenefitCategory::MentalHealth,
        coverage: "Included",
        description: "Mindfulness, meditation, stress management workshops, and wellness coaching to support your mental wellbeing.",
        icon: "🧘",
        color: MENTAL_COLOR,
        features: [
            "Meditation sessions",
            "Stress management",
            "Wellness coaching",
            "Group workshops",
        ],
    },
    Entry {
        id: "mental-3",
        title: "24/7 Crisis Support",
        category: BenefitCategory::MentalHealth,
        coverage: "Always Available",
        description: "Round-the-clock access to crisis counselors and mental health professionals for immediate support.",
        icon: "☎️",
        color: MENTAL_COLOR,
        features: [
            "24/7 crisis hotline",
            "Trained counselors",
            "Immediate support",
            "Confidential service",
        ],
    },
    Entry {
        id: "vision-1",
        title: "Eye Exams & Glasses",
        category: BenefitCategory::Vision,
        coverage: "$300 for frames",
        description: "Annual eye exams and allowance for frames and lenses. Wide selection of designer frames included.",
        icon: "👓",
        color: VISION_COLOR,
        features: [
            "Annual eye exam",
            "Designer frame options",
            "Lens upgrades available",
            "Scratch-resistant coating",
        ],
    },
    Entry {
        id: "vision-2",
        title: "Contact Lenses",
        category: BenefitCategory::Vision,
        coverage: "Up to $200/year",
        description: "Coverage for contact lenses including fitting fees and follow-up visits.",
        icon: "👁️",
        color: VISION_COLOR,
        features: [
            "Fitting fees covered",
            "Multiple brand options",
            "Daily or monthly lenses",
            "Solution allowance",
        ],
    },
    Entry {
        id: "vision-3",
        title: "LASIK Surgery",
        category: BenefitCategory::Vision,
        coverage: "15% discount",
        description: "Discounted LASIK and corrective eye surgery through our network of certified ophthalmologists.",
        icon: "✨",
        color: VISION_COLOR,
        features: [
            "15% discount on LASIK",
            "Certified surgeons",
            "Free consultation",
            "Financing options",
        ],
    },
    Entry {
        id: "opd-1",
        title: "General Consultations",
        category: BenefitCategory::Opd,
        coverage: "Unlimited visits",
        description: "Unlimited doctor consultations for general health concerns, preventive care, and routine check-ups.",
        icon: "👨‍⚕️",
        color: OPD_COLOR,
        features: [
            "Unlimited doctor visits",
            "Preventive care",
            "Routine check-ups",
            "Specialist referrals",
        ],
    },
    Entry {
        id: "opd-2",
        title: "Diagnostic Tests",
        category: BenefitCategory::Opd,
        coverage: "100% coverage",
        description: "Full coverage for diagnostic tests, lab work, X-rays, and medical imaging at network facilities.",
        icon: "🔬",
        color: OPD_COLOR,
        features: [
            "Blood tests covered",
            "X-rays & scans",
            "Lab work included",
            "Fast results",
        ],
    },
    Entry {
        id: "opd-3",
        title: "Prescription Medications",
        category: BenefitCategory::Opd,
        coverage: "80% coverage",
        description: "Substantial coverage for prescription medications at network pharmacies nationwide.",
        icon: "💊",
        color: OPD_COLOR,
        features: [
            "Generic drugs covered",
            "Brand name eligible",
            "Mail-order pharmacy",
            "Auto-refill option",
        ],
    },
    Entry {
        id: "opd-4",
        title: "Preventive Care",
        category: BenefitCategory::Opd,
        coverage: "100% coverage",
        description: "Complete coverage for annual physicals, vaccinations, screenings, and preventive health services.",
        icon: "💉",
        color: OPD_COLOR,
        features: [
            "Annual physicals",
            "Vaccinations",
            "Health screenings",
            "Wellness visits",
        ],
    },
];

/// The built-in records, in display order
pub fn builtin_records() -> Vec<BenefitRecord> {
    ENTRIES
        .iter()
        .map(|e| BenefitRecord {
            id: e.id.to_string(),
            title: e.title.to_string(),
            category: e.category,
            coverage: e.coverage.to_string(),
            description: e.description.to_string(),
            icon: e.icon.to_string(),
            color: e.color.to_string(),
            features: e.features.iter().map(|f| f.to_string()).collect(),
        })
        .collect()
}
