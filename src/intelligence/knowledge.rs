//! Built-in gout knowledge table and topic lookup.
//!
//! The table is a `static` built from const data: it is constructed once and
//! can only be read.

use crate::models::TopicRecord;

/// One knowledge-table row: the lookup key and its record.
#[derive(Debug)]
struct TopicEntry {
    key: &'static str,
    record: TopicRecord,
}

static KNOWLEDGE_BASE: [TopicEntry; 7] = [
    TopicEntry {
        key: "痛风",
        record: TopicRecord {
            symptoms: &[
                "Sudden acute joint pain, often starting at night",
                "Red, swollen, hot and very tender joints",
                "Usually first affects the big toe (first metatarsophalangeal joint)",
                "May involve the ankle, knee or finger joints",
                "Fever and chills",
                "Cutting or tearing quality of pain",
            ],
            causes: &[
                "Disordered purine metabolism",
                "Overproduction of uric acid",
                "Reduced uric acid excretion",
                "Genetic factors",
                "High-purine diet",
                "Obesity",
                "Alcohol intake",
            ],
            risk_factors: &[
                "Men over 40",
                "Post-menopausal women",
                "Obesity",
                "Hypertension",
                "Diabetes",
                "Renal insufficiency",
                "Family history",
                "Long-term alcohol use",
                "High-purine diet",
            ],
            diagnosis: &[
                "Serum uric acid >420 μmol/L (men) or >360 μmol/L (women)",
                "Urate crystals found in joint fluid",
                "Typical presentation of acute arthritis",
                "Response to colchicine",
                "Imaging shows tophi or bone erosion",
            ],
            treatment: &[
                "Acute phase: colchicine, NSAIDs, glucocorticoids",
                "Remission: urate-lowering therapy with allopurinol or febuxostat",
                "Target serum uric acid <360 μmol/L",
                "With tophi: target <300 μmol/L",
                "Do not start urate-lowering drugs during an acute flare",
            ],
            prevention: &[
                "Low-purine diet",
                "Weight control",
                "Limit alcohol",
                "Drink plenty of water (>2000 ml a day)",
                "Avoid strenuous exercise",
                "Take medication regularly",
                "Monitor serum uric acid regularly",
            ],
            ..TopicRecord::new(
                "痛风 (Gout)",
                "A metabolic disease directly linked to hyperuricemia from disordered purine \
                 metabolism or reduced uric acid excretion, marked by recurrent acute arthritis, \
                 tophi, chronic arthritis and joint deformity.",
            )
        },
    },
    TopicEntry {
        key: "高尿酸血症",
        record: TopicRecord {
            symptoms: &[
                "Most patients have no obvious symptoms",
                "Possible fatigue",
                "Joint discomfort",
                "Some patients progress to gout",
            ],
            causes: &[
                "Excess purine synthesis",
                "Excess purine intake",
                "Reduced uric acid excretion",
                "Inherited enzyme defects",
                "Medication effects (diuretics, aspirin)",
            ],
            risk_factors: &[
                "Genetic factors",
                "High-purine diet",
                "Obesity",
                "Alcohol",
                "Declining kidney function",
                "Certain medications",
            ],
            diagnosis: &[
                "Men: serum uric acid >420 μmol/L",
                "Women: serum uric acid >360 μmol/L",
                "Secondary causes must be excluded",
            ],
            treatment: &[
                "Lifestyle intervention",
                "Medication when needed",
                "Target serum uric acid <360 μmol/L",
                "With complications: <300 μmol/L",
            ],
            prevention: &[
                "Dietary control",
                "Moderate exercise",
                "Weight control",
                "Limit alcohol",
                "Drink plenty of water",
            ],
            ..TopicRecord::new(
                "高尿酸血症 (Hyperuricemia)",
                "Fasting serum uric acid above 420 μmol/L in men or 360 μmol/L in women on two \
                 separate days under a normal purine diet.",
            )
        },
    },
    TopicEntry {
        key: "尿酸",
        record: TopicRecord {
            references: &[
                "Normal range:",
                "Men: 208-428 μmol/L (3.5-7.2 mg/dL)",
                "Women: 155-357 μmol/L (2.6-6.0 mg/dL)",
                "Hyperuricemia threshold:",
                "Men: >420 μmol/L (7.0 mg/dL)",
                "Women: >360 μmol/L (6.0 mg/dL)",
                "Gout treatment targets:",
                "Most patients: <360 μmol/L (6.0 mg/dL)",
                "Patients with tophi: <300 μmol/L (5.0 mg/dL)",
            ],
            ..TopicRecord::new(
                "尿酸 (Uric Acid)",
                "The end product of purine metabolism, excreted mainly by the kidneys.",
            )
        },
    },
    TopicEntry {
        key: "炎症",
        record: TopicRecord {
            references: &[
                "C-reactive protein (CRP): <3.0 mg/L",
                "Erythrocyte sedimentation rate (ESR): men <15 mm/h, women <20 mm/h",
                "White blood cell count (WBC): 4.0-10.0 ×10⁹/L",
                "Neutrophil percentage: 50-70%",
            ],
            diagnosis: &[
                "Acute inflammation: markedly raised CRP",
                "Chronic inflammation: mildly raised",
                "Infection: raised white cell count",
                "Acute gout flare: raised CRP and ESR",
            ],
            ..TopicRecord::new(
                "炎症指标 (Inflammatory Markers)",
                "Laboratory measurements that reflect the degree of the body's inflammatory response.",
            )
        },
    },
    TopicEntry {
        key: "肾功能",
        record: TopicRecord {
            references: &[
                "Serum creatinine (Cr): men 54-106 μmol/L, women 44-97 μmol/L",
                "Blood urea nitrogen (BUN): 2.5-7.1 mmol/L",
                "Estimated glomerular filtration rate (eGFR): >90 ml/min/1.73m²",
                "Uric acid clearance: 6.2-17.2 ml/min",
            ],
            diagnosis: &[
                "Chronic kidney disease: eGFR <60 ml/min/1.73m² for 3 months",
                "Acute kidney injury: creatinine rise >26.5 μmol/L within 48h",
                "Renal insufficiency: eGFR <60 ml/min/1.73m²",
            ],
            treatment: &[
                "Protect kidney function",
                "Control blood pressure and blood glucose",
                "Avoid nephrotoxic drugs",
                "Moderate protein restriction",
            ],
            ..TopicRecord::new(
                "肾功能 (Kidney Function)",
                "The kidneys' capacity to clear metabolic waste and keep fluid, electrolyte and \
                 acid-base balance.",
            )
        },
    },
    TopicEntry {
        key: "关节炎",
        record: TopicRecord {
            symptoms: &[
                "Acute attacks of severe joint pain",
                "Redness, swelling, heat and pain",
                "Limited movement",
                "Attacks mostly at night",
                "Usually a single joint",
            ],
            diagnosis: &[
                "Typical clinical presentation",
                "Raised serum uric acid",
                "Urate crystals in joint fluid",
                "Response to a colchicine trial",
                "Imaging",
            ],
            treatment: &[
                "Anti-inflammatory treatment in the acute phase",
                "Colchicine",
                "NSAIDs",
                "Glucocorticoids",
                "Avoid urate-lowering therapy during a flare",
            ],
            ..TopicRecord::new(
                "痛风性关节炎 (Gouty Arthritis)",
                "Inflammatory joint disease caused by urate crystals deposited in the synovium, \
                 cartilage and surrounding tissue.",
            )
        },
    },
    TopicEntry {
        key: "痛风石",
        record: TopicRecord {
            symptoms: &[
                "Nodules around joints",
                "Subcutaneous nodules",
                "May ulcerate and discharge chalky material",
                "Joint deformity",
                "Loss of function",
            ],
            treatment: &[
                "Active urate-lowering therapy",
                "Target serum uric acid <300 μmol/L",
                "Surgical removal",
                "Physiotherapy",
            ],
            prevention: &[
                "Long-term urate-lowering therapy",
                "Regular monitoring",
                "Avoid triggers",
            ],
            ..TopicRecord::new(
                "痛风石 (Tophi)",
                "Deposits of urate crystals in soft tissue, characteristic of chronic gout.",
            )
        },
    },
];

/// Lookup keys in table order.
pub fn available_topics() -> impl Iterator<Item = &'static str> {
    KNOWLEDGE_BASE.iter().map(|entry| entry.key)
}

fn entry_matches(entry: &TopicEntry, query: &str) -> bool {
    query.contains(entry.key)
        || entry.key.contains(query)
        || entry.record.topic.to_lowercase().contains(query)
}

/// Find every record whose key contains or is contained in the query, or whose
/// display topic contains the query. Case-insensitive, after trimming, so a
/// blank query is contained in every key and returns the whole table.
pub fn lookup_topic(query: &str) -> Vec<&'static TopicRecord> {
    let query = query.trim().to_lowercase();

    let hits: Vec<&'static TopicRecord> = KNOWLEDGE_BASE
        .iter()
        .filter(|entry| entry_matches(entry, &query))
        .map(|entry| &entry.record)
        .collect();

    tracing::debug!(query = %query, hits = hits.len(), "Knowledge lookup");
    hits
}
