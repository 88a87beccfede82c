//! Prompts for action plan generation

use crate::model::BenefitCategory;

/// Build the prompt asking for a three-step plan for one benefit
pub fn build_plan_prompt(category: BenefitCategory, benefit_name: &str) -> String {
    format!(
        r#"You are a healthcare benefits advisor. Generate a clear, actionable 3-step plan for an employee to avail a specific benefit.

Benefit Category: {}
Benefit Name: {}

Instructions:
- Provide EXACTLY 3 steps
- Each step should be clear and actionable
- Format: Return only the steps, numbered 1-3
- Keep each step concise (max 2 sentences)
- Focus on practical actions the employee must take

Example format:
1. [First step description]
2. [Second step description]
3. [Third step description]

Generate the action plan:"#,
        category, benefit_name
    )
}
