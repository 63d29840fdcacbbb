//! Sample protocol content — the source excerpt and its six chunks.
//!
//! All data is hand-authored for the demo. The vectors are illustrative
//! 5-component slices of what a real embedding would produce.

use crate::deck::ChunkId;

/// Excerpt of the fictitious XYZ-1001 clinical study protocol shown on the
/// first walkthrough step.
pub const PROTOCOL_EXCERPT: &str = "\
CLINICAL STUDY PROTOCOL

Protocol Title: A Phase III, Randomized, Double-Blind, Placebo-Controlled Study to Assess \
the Efficacy and Safety of Drug XYZ in Patients with Advanced Refractory Solid Tumors

Protocol Number: XYZ-1001
Version: 3.0
Date: January 15, 2025

1. INTRODUCTION
1.1 Background
Cancer remains one of the leading causes of death worldwide, with approximately 19.3 million \
new cases and 10 million cancer deaths in 2020. Despite significant advances in cancer \
therapy, patients with advanced solid tumors often develop resistance to available \
treatments, leading to disease progression and limited survival outcomes.

Immune checkpoint inhibitors (ICIs) have revolutionized the treatment of various cancers by \
enhancing the ability of the immune system to recognize and eliminate tumor cells. However, \
only a subset of patients responds to ICI therapy, and many eventually develop acquired \
resistance.

1.2 Investigational Product
Drug XYZ is a small molecule inhibitor of the XYZ kinase pathway with an IC50 of 3.2 nM. It \
is formulated as immediate-release tablets for oral administration.

1.3 Clinical Studies
As of the protocol date, Drug XYZ has been evaluated in a Phase 1 dose-escalation and \
expansion study in 87 patients with advanced solid tumors. The most common treatment-related \
adverse events were fatigue, nausea, decreased appetite, and reversible transaminase \
elevations.

4.1 Inclusion Criteria
Participants must meet all the following criteria to be eligible:
1. Age ≥18 years at the time of signing informed consent
2. Confirmed diagnosis of advanced or metastatic solid tumor
3. Disease progression after standard therapy including immunotherapy
4. ECOG performance status of 0 or 1
5. Adequate organ function
";

/// One chunk of the protocol, with its example embedding.
#[derive(Debug, Clone, Copy)]
pub struct Chunk {
    pub id: ChunkId,
    pub text: &'static str,
    pub tags: &'static [&'static str],
    /// First five components of the illustrative embedding vector.
    pub vector: [f64; 5],
    /// What the embedding of this chunk emphasizes (card back face).
    pub embedding_note: &'static str,
}

pub const CHUNKS: [Chunk; 6] = [
    Chunk {
        id: ChunkId(1),
        text: "CLINICAL STUDY PROTOCOL\n\nProtocol Title: A Phase III, Randomized, \
Double-Blind, Placebo-Controlled Study to Assess the Efficacy and Safety of Drug XYZ in \
Patients with Advanced Refractory Solid Tumors\n\nProtocol Number: XYZ-1001\nVersion: 3.0\n\
Date: January 15, 2025",
        tags: &["header", "metadata"],
        vector: [0.12, 0.83, -0.44, 0.71, -0.32],
        embedding_note: "This chunk contains protocol metadata which is embedded to capture \
document identification information. Embedding focuses on protocol identifiers, version \
numbers, and study type.",
    },
    Chunk {
        id: ChunkId(2),
        text: "1. INTRODUCTION\n1.1 Background\nCancer remains one of the leading causes of \
death worldwide, with approximately 19.3 million new cases and 10 million cancer deaths in \
2020. Despite significant advances in cancer therapy, patients with advanced solid tumors \
often develop resistance to available treatments, leading to disease progression and limited \
survival outcomes.",
        tags: &["introduction", "background"],
        vector: [0.54, 0.21, -0.19, 0.63, -0.58],
        embedding_note: "This introduction chunk is embedded to capture the disease context \
and background. The embedding emphasizes medical terminology, disease statistics, and \
general research context for the trial.",
    },
    Chunk {
        id: ChunkId(3),
        text: "Immune checkpoint inhibitors (ICIs) have revolutionized the treatment of \
various cancers by enhancing the ability of the immune system to recognize and eliminate \
tumor cells. However, only a subset of patients responds to ICI therapy, and many eventually \
develop acquired resistance.",
        tags: &["background", "treatment"],
        vector: [0.88, -0.32, 0.04, -0.17, 0.29],
        embedding_note: "This treatment-focused chunk is embedded to capture mechanisms of \
action, therapeutic classes, and clinical efficacy concepts. The embedding prioritizes \
immunotherapy-related terminology.",
    },
    Chunk {
        id: ChunkId(4),
        text: "1.2 Investigational Product\nDrug XYZ is a small molecule inhibitor of the \
XYZ kinase pathway with an IC50 of 3.2 nM. It is formulated as immediate-release tablets \
for oral administration.",
        tags: &["drug", "investigational product"],
        vector: [-0.35, 0.67, 0.12, -0.25, 0.78],
        embedding_note: "This product information chunk is embedded to capture pharmaceutical \
details. The embedding focuses on drug characteristics, mechanism of action, and \
pharmaceutical formulation terminology.",
    },
    Chunk {
        id: ChunkId(5),
        text: "1.3 Clinical Studies\nAs of the protocol date, Drug XYZ has been evaluated in \
a Phase 1 dose-escalation and expansion study in 87 patients with advanced solid tumors. The \
most common treatment-related adverse events were fatigue, nausea, decreased appetite, and \
reversible transaminase elevations.",
        tags: &["clinical studies", "safety"],
        vector: [-0.22, -0.43, 0.72, 0.65, 0.39],
        embedding_note: "This safety data chunk is embedded to capture clinical outcomes and \
adverse event information. The embedding emphasizes medical side effects, patient population \
characteristics, and clinical study terminology.",
    },
    Chunk {
        id: ChunkId(6),
        text: "4.1 Inclusion Criteria\nParticipants must meet all the following criteria to \
be eligible:\n1. Age ≥18 years at the time of signing informed consent\n2. Confirmed \
diagnosis of advanced or metastatic solid tumor\n3. Disease progression after standard \
therapy including immunotherapy\n4. ECOG performance status of 0 or 1\n5. Adequate organ \
function",
        tags: &["inclusion criteria", "eligibility"],
        vector: [-0.56, -0.24, -0.63, 0.38, 0.91],
        embedding_note: "This eligibility criteria chunk is embedded to capture patient \
selection parameters. The embedding focuses on clinical assessment terminology, patient \
characteristics, and requirement specifications.",
    },
];

/// Look up a chunk by id.
pub fn chunk(id: ChunkId) -> Option<&'static Chunk> {
    CHUNKS.iter().find(|c| c.id == id)
}
