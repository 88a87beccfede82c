//! Prompts for health need classification

/// Build the classification prompt for a visitor's free-text health need
pub fn build_classification_prompt(user_input: &str) -> String {
    format!(
        r#"You are a healthcare benefits classifier. Analyze the following text and return ONLY the category name from this exact list: {{Dental, Mental Health, Vision, OPD}}.

Rules:
- Return ONLY ONE category name, nothing else
- Choose the most relevant category based on the health concern
- Dental: tooth pain, dental care, orthodontics, gum issues
- Mental Health: stress, anxiety, depression, therapy, counseling
- Vision: eye problems, glasses, contacts, eye exams
- OPD: general health, fever, cold, flu, minor injuries, consultations

User text: "{}"

Category:"#,
        user_input
    )
}
