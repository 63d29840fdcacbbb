//! Static retrieval tables — example queries, keyword dispatch, and
//! precomputed similarity rankings.
//!
//! Nothing here retrieves or generates anything: the demo simulates a RAG
//! pipeline by looking up fixed response bundles and score tables keyed by
//! the selected example query.

use serde::{Deserialize, Serialize};

use crate::deck::ChunkId;

/// The fixed palette of example queries shown in the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExampleQuery {
    InclusionCriteria,
    InvestigationalProduct,
    AdverseEvents,
    PrimaryEndpoint,
    PatientPopulation,
}

impl ExampleQuery {
    pub const ALL: [ExampleQuery; 5] = [
        ExampleQuery::InclusionCriteria,
        ExampleQuery::InvestigationalProduct,
        ExampleQuery::AdverseEvents,
        ExampleQuery::PrimaryEndpoint,
        ExampleQuery::PatientPopulation,
    ];

    pub fn text(self) -> &'static str {
        match self {
            ExampleQuery::InclusionCriteria => "What are the inclusion criteria for the study?",
            ExampleQuery::InvestigationalProduct => "What is the investigational product?",
            ExampleQuery::AdverseEvents => "What adverse events were observed?",
            ExampleQuery::PrimaryEndpoint => "What is the primary endpoint of the study?",
            ExampleQuery::PatientPopulation => "What patient population is being studied?",
        }
    }
}

/// A fixed answer plus the chunk ids it cites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseBundle {
    pub answer: &'static str,
    pub cited: &'static [ChunkId],
}

/// Relevance tier attached to each similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relevance {
    High,
    Medium,
    Low,
    VeryLow,
}

impl Relevance {
    pub fn label(self) -> &'static str {
        match self {
            Relevance::High => "High",
            Relevance::Medium => "Medium",
            Relevance::Low => "Low",
            Relevance::VeryLow => "Very Low",
        }
    }
}

/// One row of a per-query similarity ranking.
#[derive(Debug, Clone, Copy)]
pub struct SimilarityRow {
    pub chunk: ChunkId,
    pub score: f64,
    pub relevance: Relevance,
    pub reasons: &'static [&'static str],
}

const INCLUSION_ANSWER: &str = "The inclusion criteria for the study are:\n\
- Age ≥18 years at the time of signing informed consent\n\
- Confirmed diagnosis of advanced or metastatic solid tumor\n\
- Disease progression after standard therapy including immunotherapy\n\
- ECOG performance status of 0 or 1\n\
- Adequate organ function\n\n\
Source: Protocol Section 4.1 (Chunk 6), XYZ-1001 Clinical Protocol v3.0";

const PRODUCT_ANSWER: &str = "The investigational product is Drug XYZ, a small molecule \
inhibitor of the XYZ kinase pathway with an IC50 of 3.2 nM. It is formulated as \
immediate-release tablets for oral administration.\n\n\
Source: Protocol Section 1.2 (Chunk 4), XYZ-1001 Clinical Protocol v3.0";

const SAFETY_ANSWER: &str = "The most common treatment-related adverse events observed in \
the Phase 1 dose-escalation and expansion study with 87 patients were:\n\
- Fatigue\n\
- Nausea\n\
- Decreased appetite\n\
- Reversible transaminase elevations\n\n\
Source: Protocol Section 1.3 (Chunk 5), XYZ-1001 Clinical Protocol v3.0";

const ENDPOINT_ANSWER: &str = "The primary endpoint of the study is not explicitly specified \
in the provided protocol excerpts. The available sections focus on background, drug \
information, and eligibility criteria, but do not contain information about efficacy or \
safety endpoints.\n\n\
Note: Additional protocol sections would be needed to answer this query.";

const POPULATION_ANSWER: &str = "The study population consists of patients with advanced \
solid tumors who have developed resistance to available treatments. Specifically:\n\n\
- Adult patients (≥18 years) with confirmed diagnosis of advanced or metastatic solid tumor\n\
- Patients who have experienced disease progression after standard therapy including immunotherapy\n\
- ECOG performance status of 0 or 1\n\
- Patients must have adequate organ function\n\n\
The protocol background notes that cancer patients with advanced solid tumors often develop \
resistance to available treatments, leading to disease progression and limited survival \
outcomes.\n\n\
Sources: Protocol Sections 1.1 (Chunk 2) and 4.1 (Chunk 6), XYZ-1001 Clinical Protocol v3.0";

const FALLBACK_ANSWER: &str = "I cannot find relevant information to answer this query in \
the provided protocol excerpts. The available sections cover background information, drug \
details, clinical study data, and eligibility criteria, but may not contain the specific \
information requested.";

/// The deterministic fallback bundle for queries with no matching keyword group.
pub const FALLBACK: ResponseBundle = ResponseBundle {
    answer: FALLBACK_ANSWER,
    cited: &[],
};

/// Ordered keyword groups; first group with a match wins.
const KEYWORD_GROUPS: &[(&[&str], ResponseBundle)] = &[
    (
        &["inclusion", "criteria", "eligible"],
        ResponseBundle {
            answer: INCLUSION_ANSWER,
            cited: &[ChunkId(6)],
        },
    ),
    (
        &["investigational", "product", "drug"],
        ResponseBundle {
            answer: PRODUCT_ANSWER,
            cited: &[ChunkId(4)],
        },
    ),
    (
        &["adverse", "events", "safety"],
        ResponseBundle {
            answer: SAFETY_ANSWER,
            cited: &[ChunkId(5)],
        },
    ),
    (
        &["endpoint", "outcome"],
        ResponseBundle {
            answer: ENDPOINT_ANSWER,
            cited: &[],
        },
    ),
    (
        &["population", "patients"],
        ResponseBundle {
            answer: POPULATION_ANSWER,
            cited: &[ChunkId(2), ChunkId(6)],
        },
    ),
];

/// Dispatch a query to its fixed response bundle by keyword containment.
/// First matching group wins; no match falls back to [`FALLBACK`].
pub fn respond(query: &str) -> ResponseBundle {
    for (keywords, bundle) in KEYWORD_GROUPS {
        if keywords.iter().any(|kw| query.contains(kw)) {
            return *bundle;
        }
    }
    FALLBACK
}

/// Precomputed similarity ranking for a query: all six chunks, ordered by
/// descending score.
pub fn ranking(query: ExampleQuery) -> &'static [SimilarityRow] {
    match query {
        ExampleQuery::InclusionCriteria => &[
            SimilarityRow {
                chunk: ChunkId(6),
                score: 0.92,
                relevance: Relevance::High,
                reasons: &[
                    "Contains all eligibility criteria",
                    "Directly answers the query",
                    "Contains structured list format",
                ],
            },
            SimilarityRow {
                chunk: ChunkId(2),
                score: 0.41,
                relevance: Relevance::Low,
                reasons: &[
                    "Mentions 'patients' but no eligibility criteria",
                    "Discusses disease background only",
                    "Too general for the query",
                ],
            },
            SimilarityRow {
                chunk: ChunkId(5),
                score: 0.37,
                relevance: Relevance::Low,
                reasons: &[
                    "Mentions patient population but not selection criteria",
                    "Focus is on safety not eligibility",
                    "Contains study results, not requirements",
                ],
            },
            SimilarityRow {
                chunk: ChunkId(4),
                score: 0.26,
                relevance: Relevance::VeryLow,
                reasons: &[
                    "No mention of patient criteria",
                    "Focus on drug characteristics",
                    "Irrelevant to eligibility",
                ],
            },
            SimilarityRow {
                chunk: ChunkId(3),
                score: 0.22,
                relevance: Relevance::VeryLow,
                reasons: &[
                    "Discusses treatment mechanisms",
                    "No mention of patient selection",
                    "Irrelevant to the query",
                ],
            },
            SimilarityRow {
                chunk: ChunkId(1),
                score: 0.18,
                relevance: Relevance::VeryLow,
                reasons: &[
                    "Contains metadata only",
                    "No clinical content related to eligibility",
                    "Administrative information only",
                ],
            },
        ],
        ExampleQuery::InvestigationalProduct => &[
            SimilarityRow {
                chunk: ChunkId(4),
                score: 0.95,
                relevance: Relevance::High,
                reasons: &[
                    "Direct description of drug XYZ",
                    "Contains mechanism of action",
                    "Contains formulation details",
                ],
            },
            SimilarityRow {
                chunk: ChunkId(5),
                score: 0.53,
                relevance: Relevance::Medium,
                reasons: &[
                    "Mentions the drug in clinical studies",
                    "Contains partial information about the product",
                    "Focus is on clinical results not drug characteristics",
                ],
            },
            SimilarityRow {
                chunk: ChunkId(3),
                score: 0.39,
                relevance: Relevance::Low,
                reasons: &[
                    "Related to treatments but not specific to the investigational product",
                    "Discusses immunotherapy in general",
                    "No specific drug XYZ details",
                ],
            },
            SimilarityRow {
                chunk: ChunkId(6),
                score: 0.27,
                relevance: Relevance::VeryLow,
                reasons: &[
                    "Mentions treatments indirectly",
                    "No information about drug characteristics",
                    "Focus on patient eligibility",
                ],
            },
            SimilarityRow {
                chunk: ChunkId(2),
                score: 0.24,
                relevance: Relevance::VeryLow,
                reasons: &[
                    "General cancer treatment context",
                    "No specific product information",
                    "Background information only",
                ],
            },
            SimilarityRow {
                chunk: ChunkId(1),
                score: 0.19,
                relevance: Relevance::VeryLow,
                reasons: &[
                    "Contains study title with drug XYZ",
                    "No detailed information about the product",
                    "Administrative information only",
                ],
            },
        ],
        ExampleQuery::AdverseEvents => &[
            SimilarityRow {
                chunk: ChunkId(5),
                score: 0.94,
                relevance: Relevance::High,
                reasons: &[
                    "Lists specific adverse events",
                    "Mentions fatigue, nausea, decreased appetite",
                    "Directly addresses safety outcomes",
                ],
            },
            SimilarityRow {
                chunk: ChunkId(4),
                score: 0.32,
                relevance: Relevance::Low,
                reasons: &[
                    "Describes the drug but not adverse events",
                    "Related to the medication being studied",
                    "No safety data included",
                ],
            },
            SimilarityRow {
                chunk: ChunkId(3),
                score: 0.29,
                relevance: Relevance::VeryLow,
                reasons: &[
                    "Mentions therapy resistance",
                    "No specific adverse events",
                    "Focus on mechanism not safety",
                ],
            },
            SimilarityRow {
                chunk: ChunkId(6),
                score: 0.25,
                relevance: Relevance::VeryLow,
                reasons: &[
                    "Mentions organ function",
                    "No adverse event data",
                    "Eligibility criteria only",
                ],
            },
            SimilarityRow {
                chunk: ChunkId(2),
                score: 0.21,
                relevance: Relevance::VeryLow,
                reasons: &[
                    "General disease context",
                    "No safety information",
                    "Background information only",
                ],
            },
            SimilarityRow {
                chunk: ChunkId(1),
                score: 0.12,
                relevance: Relevance::VeryLow,
                reasons: &[
                    "Protocol metadata only",
                    "No clinical content",
                    "Administrative information only",
                ],
            },
        ],
        ExampleQuery::PrimaryEndpoint => &[
            SimilarityRow {
                chunk: ChunkId(1),
                score: 0.56,
                relevance: Relevance::Medium,
                reasons: &[
                    "Contains study title and design",
                    "Mentions efficacy and safety assessment",
                    "No explicit primary endpoint defined",
                ],
            },
            SimilarityRow {
                chunk: ChunkId(2),
                score: 0.43,
                relevance: Relevance::Low,
                reasons: &[
                    "Mentions survival outcomes",
                    "Related to potential endpoints",
                    "No explicit endpoint definition",
                ],
            },
            SimilarityRow {
                chunk: ChunkId(5),
                score: 0.38,
                relevance: Relevance::Low,
                reasons: &[
                    "Contains safety data",
                    "Related to secondary endpoints",
                    "No primary endpoint specified",
                ],
            },
            SimilarityRow {
                chunk: ChunkId(6),
                score: 0.31,
                relevance: Relevance::VeryLow,
                reasons: &[
                    "Patient eligibility only",
                    "No endpoint information",
                    "Unrelated to study outcomes",
                ],
            },
            SimilarityRow {
                chunk: ChunkId(3),
                score: 0.28,
                relevance: Relevance::VeryLow,
                reasons: &[
                    "Treatment mechanism context",
                    "No endpoint information",
                    "Background information only",
                ],
            },
            SimilarityRow {
                chunk: ChunkId(4),
                score: 0.22,
                relevance: Relevance::VeryLow,
                reasons: &[
                    "Drug information only",
                    "No endpoint details",
                    "Unrelated to study outcomes",
                ],
            },
        ],
        ExampleQuery::PatientPopulation => &[
            SimilarityRow {
                chunk: ChunkId(2),
                score: 0.88,
                relevance: Relevance::High,
                reasons: &[
                    "Describes patient population with advanced solid tumors",
                    "Mentions resistance to available treatments",
                    "Contains disease progression context",
                ],
            },
            SimilarityRow {
                chunk: ChunkId(6),
                score: 0.85,
                relevance: Relevance::High,
                reasons: &[
                    "Lists specific inclusion criteria",
                    "Defines exact patient characteristics",
                    "Contains performance status requirements",
                ],
            },
            SimilarityRow {
                chunk: ChunkId(5),
                score: 0.71,
                relevance: Relevance::Medium,
                reasons: &[
                    "Mentions study involved 87 patients",
                    "Specifies advanced solid tumors",
                    "Includes partial population information",
                ],
            },
            SimilarityRow {
                chunk: ChunkId(1),
                score: 0.47,
                relevance: Relevance::Low,
                reasons: &[
                    "Study title mentions advanced refractory solid tumors",
                    "Contains high-level population info",
                    "No detailed patient characteristics",
                ],
            },
            SimilarityRow {
                chunk: ChunkId(3),
                score: 0.34,
                relevance: Relevance::VeryLow,
                reasons: &[
                    "General therapy context",
                    "Mentions subset of patients",
                    "No specific study population details",
                ],
            },
            SimilarityRow {
                chunk: ChunkId(4),
                score: 0.19,
                relevance: Relevance::VeryLow,
                reasons: &[
                    "Drug information only",
                    "No patient population details",
                    "Unrelated to eligibility or demographics",
                ],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adverse_events_cites_chunk_5_only() {
        let bundle = respond(ExampleQuery::AdverseEvents.text());
        assert_eq!(bundle.cited, &[ChunkId(5)]);
        assert!(bundle.answer.contains("Fatigue"));
        assert!(bundle.answer.contains("Reversible transaminase elevations"));
        assert!(bundle.answer.contains("Chunk 5"));
    }

    #[test]
    fn each_example_query_yields_its_fixture() {
        let cases: [(ExampleQuery, &[ChunkId]); 5] = [
            (ExampleQuery::InclusionCriteria, &[ChunkId(6)]),
            (ExampleQuery::InvestigationalProduct, &[ChunkId(4)]),
            (ExampleQuery::AdverseEvents, &[ChunkId(5)]),
            (ExampleQuery::PrimaryEndpoint, &[]),
            (ExampleQuery::PatientPopulation, &[ChunkId(2), ChunkId(6)]),
        ];
        for (query, cited) in cases {
            let bundle = respond(query.text());
            assert_eq!(bundle.cited, cited, "cited set for {query:?}");
            assert_ne!(bundle, FALLBACK, "{query:?} should not fall through");
        }
    }

    #[test]
    fn exact_answer_texts() {
        assert_eq!(
            respond(ExampleQuery::InclusionCriteria.text()).answer,
            INCLUSION_ANSWER
        );
        assert_eq!(
            respond(ExampleQuery::PrimaryEndpoint.text()).answer,
            ENDPOINT_ANSWER
        );
    }

    #[test]
    fn unmatched_query_falls_back() {
        let bundle = respond("What is the recommended dosing schedule?");
        assert_eq!(bundle, FALLBACK);
        assert!(bundle.cited.is_empty());
        assert!(bundle.answer.starts_with("I cannot find relevant information"));
    }

    #[test]
    fn first_matching_group_wins() {
        // "eligible patients" matches both the inclusion group and the
        // population group; the inclusion group is listed first.
        let bundle = respond("Which patients are eligible?");
        assert_eq!(bundle.cited, &[ChunkId(6)]);
    }

    #[test]
    fn rankings_cover_all_chunks_in_descending_order() {
        for query in ExampleQuery::ALL {
            let rows = ranking(query);
            assert_eq!(rows.len(), 6, "{query:?}");
            for pair in rows.windows(2) {
                assert!(pair[0].score >= pair[1].score, "{query:?} out of order");
            }
            let mut ids: Vec<u8> = rows.iter().map(|r| r.chunk.0).collect();
            ids.sort_unstable();
            assert_eq!(ids, vec![1, 2, 3, 4, 5, 6], "{query:?}");
        }
    }

    #[test]
    fn top_ranked_chunks_are_the_cited_ones() {
        let rows = ranking(ExampleQuery::AdverseEvents);
        assert_eq!(rows[0].chunk, ChunkId(5));
        assert_eq!(rows[0].relevance, Relevance::High);

        let rows = ranking(ExampleQuery::PatientPopulation);
        assert_eq!(rows[0].chunk, ChunkId(2));
        assert_eq!(rows[1].chunk, ChunkId(6));
    }
}
