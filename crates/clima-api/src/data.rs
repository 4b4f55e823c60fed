//! Seed dataset for the question catalog.
//!
//! Demo content for the "Green Energy Corp" sample company. Questions q9 and
//! q10 intentionally ship without answers so the read API exercises its
//! fallback text.

use clima_core::models::{Answer, Question};

fn question(
    id: &str,
    question: &str,
    category: &str,
    subcategory: &str,
    required: bool,
    help_text: &str,
) -> Question {
    Question {
        id: id.to_string(),
        question: question.to_string(),
        category: category.to_string(),
        subcategory: subcategory.to_string(),
        required,
        help_text: Some(help_text.to_string()),
    }
}

fn answer(question_id: &str, response: &str, confidence: f64, citations: &[&str]) -> Answer {
    Answer {
        question_id: question_id.to_string(),
        response: response.to_string(),
        confidence,
        citations: citations.iter().map(|c| c.to_string()).collect(),
    }
}

pub fn seed_questions() -> Vec<Question> {
    vec![
        question(
            "q1",
            "What are the climate-related risks and opportunities identified in your annual report?",
            "Risk Identification",
            "Physical and Transition Risks",
            true,
            "Include both physical risks (extreme weather, sea level rise) and transition risks (policy, technology, market changes)",
        ),
        question(
            "q2",
            "Describe the impact of climate-related risks and opportunities on the organization's businesses, strategy, and financial planning.",
            "Strategic Impact",
            "Business Integration",
            true,
            "Explain how climate considerations are integrated into business strategy, capital allocation, and financial planning",
        ),
        question(
            "q3",
            "Describe the organization's processes for identifying and assessing climate-related risks.",
            "Risk Management",
            "Processes and Methodologies",
            true,
            "Detail your risk identification workshops, assessment methodologies, and governance processes",
        ),
        question(
            "q4",
            "Describe the metrics and targets used by the organization to assess climate-related risks.",
            "Metrics and Targets",
            "Performance Measurement",
            true,
            "Include specific metrics, targets, and timeframes for climate risk management",
        ),
        question(
            "q5",
            "Describe the organization's climate scenario analysis methodology.",
            "Scenario Analysis",
            "Methodology and Scenarios",
            true,
            "Explain your scenario analysis approach, including RCP scenarios and stress testing",
        ),
        question(
            "q6",
            "What is your organization's current carbon footprint and reduction targets?",
            "Carbon Management",
            "Emissions and Targets",
            true,
            "Include Scope 1, 2, and 3 emissions data and reduction targets",
        ),
        question(
            "q7",
            "How does your organization assess climate-related financial risks in your investment portfolio?",
            "Financial Risk",
            "Portfolio Assessment",
            false,
            "Describe your approach to climate risk assessment in investment decisions",
        ),
        question(
            "q8",
            "What climate adaptation measures has your organization implemented?",
            "Adaptation",
            "Resilience Measures",
            false,
            "Include infrastructure, operational, and strategic adaptation measures",
        ),
        question(
            "q9",
            "How do you engage with stakeholders on climate-related issues?",
            "Stakeholder Engagement",
            "Communication and Collaboration",
            false,
            "Describe your stakeholder engagement processes and communication strategies",
        ),
        question(
            "q10",
            "What climate-related research and development initiatives are you pursuing?",
            "Innovation",
            "R&D and Technology",
            false,
            "Include details about climate-focused innovation projects and partnerships",
        ),
    ]
}

pub fn seed_answers() -> Vec<Answer> {
    vec![
        answer(
            "q1",
            "Green Energy Corp has identified comprehensive climate-related risks and opportunities. Short-term physical risks include extreme weather events affecting operations ($2-5M annual impact); medium-term transition risks include stranded fossil fuel assets ($12M book value at risk); long-term physical risks include sea level rise requiring $25M in protective infrastructure. Opportunities span government renewable incentives, climate adaptation services ($50M new revenue stream), and green hydrogen market leadership ($200M revenue potential by 2035).",
            0.89,
            &[
                "Annual Report 2023, Page 45, Section 4.2",
                "TCFD Disclosure 2023, Page 12, Strategic Planning",
            ],
        ),
        answer(
            "q2",
            "Climate considerations are integrated across all business functions. Revenue diversification has reached 40% from climate services (up from 15% in 2020), $8M invested in operational resilience delivered a 35% downtime reduction, and 60% of the $100M capex program is allocated to climate-resilient technology. Geographic expansion prioritizes climate-stable regions.",
            0.91,
            &[
                "Annual Report 2023, Page 67, Financial Strategy",
                "Strategic Plan 2023-2028, Climate Integration Section",
            ],
        ),
        answer(
            "q3",
            "A multi-layered identification and assessment process: quarterly cross-functional climate risk workshops, external data from NOAA and IPCC regional climate models, and scenario analysis under RCP 4.5 and RCP 8.5 pathways. Assessment uses Monte Carlo simulations for physical risk modeling, 20-year NPV calculations for transition risks, and probability-weighted risk scoring on a 1-5 scale.",
            0.87,
            &[
                "TCFD Disclosure 2023, Page 8, Risk Management",
                "Climate Risk Policy 2023, Section 3.2",
            ],
        ),
        answer(
            "q4",
            "Comprehensive climate metrics aligned with science-based targets. Physical risk: weather-related downtime target <2% annually (2023: 1.7%), infrastructure resilience score target >85% (2023: 87%). Transition risk: carbon intensity 15 tCO2e/MWh against a 10 tCO2e/MWh target by 2025, renewable energy at 78% against a 90% target by 2026.",
            0.93,
            &[
                "Annual Report 2023, Page 89, Performance Metrics",
                "Sustainability Report 2023, Climate Targets Section",
            ],
        ),
        answer(
            "q5",
            "Scenario analysis covers IPCC RCP 2.6, RCP 4.5, and RCP 8.5 pathways across 2030, 2050, and 2100 horizons with regional and facility-specific granularity. Climate models are integrated with financial models, Monte Carlo simulations run 10,000+ iterations, and the business model is stress-tested under extreme climate scenarios.",
            0.85,
            &[
                "Climate Scenario Analysis 2023, Methodology Document",
                "TCFD Disclosure 2023, Scenario Analysis Section",
            ],
        ),
        answer(
            "q6",
            "2023 emissions: Scope 1 at 45,000 tCO2e (direct operations), Scope 2 at 120,000 tCO2e (purchased electricity), Scope 3 at 280,000 tCO2e (supply chain and use of products). Reduction targets: 30% by 2025 and 60% by 2030 from the 2020 baseline, net-zero by 2050.",
            0.94,
            &[
                "Sustainability Report 2023, Emissions Data Section",
                "Carbon Reduction Plan 2023-2050",
            ],
        ),
        answer(
            "q7",
            "Climate risk scoring covers the entire >$500M investment portfolio with carbon footprint tracking and climate-aligned screening criteria. Mitigation includes $25M of high-carbon divestment completed in 2023, $75M allocated to climate solutions, and active engagement with portfolio companies on climate disclosure.",
            0.88,
            &[
                "Investment Policy 2023, Climate Risk Section",
                "Portfolio Climate Report 2023",
            ],
        ),
        answer(
            "q8",
            "Infrastructure adaptation includes flood protection at coastal facilities ($15M), heat-resistant equipment upgrades ($8M), and water conservation systems ($5M). Operational adaptation covers flexible work arrangements during extreme weather, supply chain diversification, and emergency response protocols for climate events.",
            0.82,
            &[
                "Climate Action Plan 2023, Adaptation Section",
                "Infrastructure Resilience Report 2023",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_answer_references_a_seeded_question() {
        let questions = seed_questions();
        for answer in seed_answers() {
            assert!(
                questions.iter().any(|q| q.id == answer.question_id),
                "answer references unknown question {}",
                answer.question_id
            );
        }
    }

    #[test]
    fn test_question_ids_are_unique() {
        let questions = seed_questions();
        let mut ids: Vec<_> = questions.iter().map(|q| q.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), questions.len());
    }

    #[test]
    fn test_some_questions_lack_answers() {
        let answered: Vec<_> = seed_answers()
            .into_iter()
            .map(|a| a.question_id)
            .collect();
        assert!(seed_questions().iter().any(|q| !answered.contains(&q.id)));
    }
}
