//! Built-in intervention protocols
//!
//! The default catalog revision: one palliative-care nursing protocol per
//! ESAS symptom, transcribed from the clinical protocol handbook this
//! system ships with.

use super::{InterventionProtocol, TherapyType};
use crate::models::Symptom;

/// Revision identifier of the built-in catalog
pub(super) const BUILTIN_CATALOG_VERSION: &str = "2024.1";

fn protocol(
    symptom: Symptom,
    diagnosis_label: &str,
    therapy_type: TherapyType,
    steps: &[&str],
    frequency: &str,
    duration: &str,
    evaluation_criteria: &[&str],
    precautions: &[&str],
    references: &[&str],
) -> InterventionProtocol {
    InterventionProtocol {
        symptom,
        diagnosis_label: diagnosis_label.to_string(),
        therapy_type,
        steps: steps.iter().map(ToString::to_string).collect(),
        frequency: frequency.to_string(),
        duration: duration.to_string(),
        evaluation_criteria: evaluation_criteria.iter().map(ToString::to_string).collect(),
        precautions: precautions.iter().map(ToString::to_string).collect(),
        references: references.iter().map(ToString::to_string).collect(),
    }
}

/// Build the nine built-in protocol entries
pub(super) fn builtin_protocols() -> Vec<InterventionProtocol> {
    vec![
        protocol(
            Symptom::Pain,
            "Inadequately controlled pain",
            TherapyType::Combined,
            &[
                "Assess pain location, character and intensity with a 0-10 numeric rating scale",
                "Administer scheduled analgesics per the WHO analgesic ladder and verify breakthrough doses are available",
                "Apply non-drug comfort measures: repositioning, heat or cold packs, relaxation breathing",
                "Reassess intensity within one hour of each intervention and document the response",
                "Notify the responsible physician if pain stays above 4 despite two consecutive interventions",
            ],
            "Every shift, and within 1 hour after each analgesic adjustment",
            "Until pain is sustained at 3 or below for 48 hours",
            &[
                "Pain score of 3 or below at rest",
                "Fewer than 3 breakthrough doses per day",
                "Sleep not interrupted by pain",
            ],
            &[
                "Monitor for opioid-induced sedation and respiratory depression",
                "Start a prophylactic bowel regimen with scheduled opioids",
                "Reduce opioid dosing in renal impairment",
            ],
            &[
                "WHO Guidelines for the pharmacological management of cancer pain (2018)",
                "Oxford Textbook of Palliative Medicine, 6th ed., ch. 9",
            ],
        ),
        protocol(
            Symptom::Tiredness,
            "Cancer-related fatigue",
            TherapyType::NonPharmacological,
            &[
                "Screen for treatable contributors: anemia, hypothyroidism, depression, sleep disruption",
                "Plan energy conservation: prioritize valued activities and schedule rest periods",
                "Encourage light physical activity as tolerated, such as short assisted walks",
                "Review the medication list for sedating agents with the pharmacist",
                "Educate patient and family that fatigue is expected and manageable",
            ],
            "Daily activity planning, weekly contributor review",
            "Ongoing through the care episode",
            &[
                "Patient reports sufficient energy for prioritized activities",
                "Fatigue score stable or decreasing across screenings",
            ],
            &[
                "Avoid exercise prescriptions during febrile episodes or severe thrombocytopenia",
                "Watch for falls in deconditioned patients",
            ],
            &[
                "NCCN Clinical Practice Guidelines: Cancer-Related Fatigue",
            ],
        ),
        protocol(
            Symptom::Drowsiness,
            "Excessive daytime sedation",
            TherapyType::Combined,
            &[
                "Review sedating medications and discuss dose reduction or rotation with the prescriber",
                "Assess for metabolic causes: hypercalcemia, uremia, hepatic encephalopathy, dehydration",
                "Structure the day with morning light exposure and scheduled stimulation",
                "Institute fall precautions while sedation persists",
            ],
            "Each nursing shift",
            "Until sedation resolves or is accepted as a comfort-care trade-off",
            &[
                "Patient is rousable and oriented during planned daytime activity",
                "No falls or aspiration events",
            ],
            &[
                "Abrupt opioid reduction can precipitate withdrawal or pain crisis",
                "Keep the bed low and call bell within reach",
            ],
            &[
                "Oxford Textbook of Palliative Medicine, 6th ed., ch. 17",
            ],
        ),
        protocol(
            Symptom::Nausea,
            "Nausea and vomiting",
            TherapyType::Combined,
            &[
                "Identify the likely mechanism: opioid-induced, bowel obstruction, metabolic, vestibular",
                "Administer the prescribed antiemetic matched to the mechanism",
                "Offer small, frequent, low-odor meals and cold fluids",
                "Provide mouth care after each episode of vomiting",
                "Verify bowel pattern and treat constipation if present",
            ],
            "Before meals and at each antiemetic administration",
            "Until intake is adequate and vomiting has stopped for 48 hours",
            &[
                "No vomiting episodes in the last 24 hours",
                "Nausea score of 3 or below",
                "Oral intake adequate for comfort",
            ],
            &[
                "Exclude bowel obstruction before prokinetic use",
                "Monitor hydration and electrolytes with repeated vomiting",
            ],
            &[
                "MASCC/ESMO Antiemetic Guideline",
                "Oxford Textbook of Palliative Medicine, 6th ed., ch. 10",
            ],
        ),
        protocol(
            Symptom::AppetiteLoss,
            "Anorexia and reduced oral intake",
            TherapyType::NonPharmacological,
            &[
                "Assess for reversible causes: mouth soreness, nausea, constipation, depression",
                "Offer small energy-dense meals aligned with the patient's preferences",
                "Provide mouth care before meals",
                "Refer to the dietitian for fortification advice",
                "Counsel the family that reduced intake is part of the illness, shifting the goal to eating for comfort",
            ],
            "Each meal",
            "Ongoing through the care episode",
            &[
                "Patient eats without pressure or distress",
                "Weight loss slowed where consistent with care goals",
            ],
            &[
                "Avoid forced feeding; aspiration risk with reduced consciousness",
            ],
            &[
                "ESPEN Guideline on clinical nutrition in cancer",
            ],
        ),
        protocol(
            Symptom::ShortnessOfBreath,
            "Dyspnea",
            TherapyType::Combined,
            &[
                "Position the patient upright, supported with pillows",
                "Provide moving air across the face with a handheld fan and ventilate the room",
                "Administer prescribed low-dose opioid for breathlessness and oxygen when hypoxic",
                "Coach pursed-lip breathing and address the accompanying anxiety",
                "Escalate to the physician if breathlessness is acute in onset or rapidly worsening",
            ],
            "Continuously during episodes; review every shift",
            "Until breathlessness is tolerable at rest",
            &[
                "Dyspnea score of 3 or below at rest",
                "Respiratory rate settled and accessory-muscle use reduced",
            ],
            &[
                "Titrate opioids cautiously in opioid-naive patients",
                "Oxygen only for documented hypoxemia; avoid drying the airway",
            ],
            &[
                "ATS Clinical Policy Statement: Dyspnea management in advanced lung disease",
                "Oxford Textbook of Palliative Medicine, 6th ed., ch. 11",
            ],
        ),
        protocol(
            Symptom::Depression,
            "Depressed mood",
            TherapyType::Combined,
            &[
                "Explore mood with open questions and validate the patient's experience",
                "Differentiate appropriate sadness from clinical depression using a structured screen",
                "Arrange psychosocial support: counseling, chaplaincy or psycho-oncology referral",
                "Discuss antidepressant initiation with the physician when symptoms persist",
                "Assess for hopelessness and thoughts of self-harm at every contact",
            ],
            "Every contact; formal review weekly",
            "Minimum 4 weeks after any antidepressant start",
            &[
                "Patient engages in valued activities and interactions",
                "Depression score decreasing across screenings",
                "No expressions of self-harm",
            ],
            &[
                "Immediate escalation on any disclosure of suicidal ideation",
                "Antidepressant onset takes weeks; bridge with supportive contact",
            ],
            &[
                "NICE CG91: Depression in adults with a chronic physical health problem",
            ],
        ),
        protocol(
            Symptom::Anxiety,
            "Anxiety",
            TherapyType::Combined,
            &[
                "Acknowledge the fear and provide unhurried presence",
                "Teach slow-breathing and grounding techniques",
                "Clarify misunderstandings about prognosis and upcoming procedures",
                "Review prescribed anxiolytics with attention to sedative load",
                "Involve spiritual care or psychology per the patient's preference",
            ],
            "Every contact during anxious periods",
            "Ongoing through the care episode",
            &[
                "Anxiety score of 3 or below",
                "Patient uses at least one self-calming technique effectively",
            ],
            &[
                "Benzodiazepines increase fall and delirium risk in the elderly",
            ],
            &[
                "Oxford Textbook of Palliative Medicine, 6th ed., ch. 17",
            ],
        ),
        protocol(
            Symptom::Wellbeing,
            "Reduced overall wellbeing",
            TherapyType::NonPharmacological,
            &[
                "Conduct a full symptom review to find the dominant contributors",
                "Revisit goals of care with the patient and family",
                "Plan small achievable activities that carry personal meaning",
                "Coordinate social work, spiritual care and volunteer support",
                "Schedule a family meeting when distress involves the wider household",
            ],
            "Weekly comprehensive review",
            "Ongoing through the care episode",
            &[
                "Patient identifies aspects of daily life experienced as worthwhile",
                "Wellbeing score stable or improving",
            ],
            &[
                "Wellbeing ratings aggregate many problems; do not treat the number without the story",
            ],
            &[
                "ESAS-r administration manual, Alberta Health Services",
            ],
        ),
    ]
}
