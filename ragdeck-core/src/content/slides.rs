//! The deck itself — hand-authored slide content.

use crate::deck::{
    ChunkId, Cluster, InfoCard, PaperCard, PaperId, Section, Slide, SlideBody, StepBody, WalkStep,
};

use super::protocol::PROTOCOL_EXCERPT;

const RAG_VARIANTS: [InfoCard; 3] = [
    InfoCard {
        title: "Cached RAG",
        body: "Stores previous query-response pairs to avoid redundant processing and \
improve response time for common questions.",
        cite: None,
    },
    InfoCard {
        title: "Self-correcting RAG",
        body: "Uses feedback loops to assess answer quality and iteratively improve \
retrieval and generation.",
        cite: None,
    },
    InfoCard {
        title: "Multi-step RAG",
        body: "Breaking complex queries into sub-questions to recursively retrieve \
information and build comprehensive answers.",
        cite: None,
    },
];

const PAPERS: [PaperCard; 3] = [
    PaperCard {
        id: PaperId(1),
        title: "Retrieval-Augmented Generation for Knowledge-Intensive NLP Tasks",
        front: "Lewis et al. (2020) - The original RAG paper introducing the framework \
combining retrieval with generation.",
        back: "Key Innovation: Combined dense retrieval with seq2seq generation in a \
differentiable end-to-end model. Established the foundation for modern RAG systems with a \
parametric memory (LLM) and non-parametric memory (document store).",
    },
    PaperCard {
        id: PaperId(2),
        title: "REALM: Retrieval-Augmented Language Model Pre-Training",
        front: "Guu et al. (2020) - Pioneering work on integrating retrieval mechanisms \
during pre-training.",
        back: "Key Innovation: Introduced a pre-training approach where the model learns to \
retrieve and use relevant documents during the pre-training phase itself, creating latent \
knowledge retrieval capabilities.",
    },
    PaperCard {
        id: PaperId(3),
        title: "Self-RAG: Learning to Retrieve, Generate, and Critique",
        front: "Asai et al. (2023) - Advanced framework that enables models to self-evaluate \
when to retrieve and critique their own outputs.",
        back: "Key Innovation: Introduces a framework where the model learns to decide when \
to retrieve, how to evaluate if retrieved information is helpful, and how to critique its \
own generation. Significantly reduces hallucinations while maintaining generation quality.",
    },
];

const VECTOR_FEATURES: [InfoCard; 3] = [
    InfoCard {
        title: "Fast Approximate Search",
        body: "ANN algorithms provide O(log n) retrieval regardless of corpus size",
        cite: Some("Johnson et al., \"HNSW for Clinical Document Retrieval\", JAMA 2023"),
    },
    InfoCard {
        title: "Hybrid Search",
        body: "Combines BM25 keyword matching with semantic similarity for clinical \
terminology",
        cite: Some("Zhang & Miller, \"Hybrid Retrieval for EHRs\", J Biomed Informatics 2024"),
    },
    InfoCard {
        title: "Metadata Filtering",
        body: "Filter by protocol section, version, date, disease area, population criteria",
        cite: Some("Singh et al., \"Filtered Retrieval in Clinical RAG\", Nature Medicine AI 2024"),
    },
];

const CLUSTERS: [Cluster; 3] = [
    Cluster {
        label: "Protocol Details",
        chunks: &[ChunkId(1), ChunkId(2)],
    },
    Cluster {
        label: "Treatment Info",
        chunks: &[ChunkId(3), ChunkId(4)],
    },
    Cluster {
        label: "Patient Criteria",
        chunks: &[ChunkId(5), ChunkId(6)],
    },
];

const WALKTHROUGH: [WalkStep; 4] = [
    WalkStep {
        title: "Original Document",
        caption: "The clinical protocol document is too large to fit in the LLM's context \
window - we need RAG",
        body: StepBody::Document {
            excerpt: PROTOCOL_EXCERPT,
            variants: &RAG_VARIANTS,
            papers: &PAPERS,
        },
    },
    WalkStep {
        title: "Chunk & Embed",
        caption: "The document is chunked into semantic units and embedded into vectors - \
flip a chunk card for embedding details",
        body: StepBody::ChunkGallery,
    },
    WalkStep {
        title: "Store in Vector DB",
        caption: "Chunks and their vector embeddings are stored in a vector database for \
efficient retrieval",
        body: StepBody::VectorStore {
            clusters: &CLUSTERS,
            features: &VECTOR_FEATURES,
            note: "* 1536D vectors -> 2D space via UMAP with cosine similarity",
        },
    },
    WalkStep {
        title: "Retrieve Relevant Content",
        caption: "When a query is received, vector similarity search finds and ranks the \
most relevant chunks",
        body: StepBody::Retrieval,
    },
];

pub(super) fn slides() -> Vec<Slide> {
    vec![
        Slide {
            title: "Retrieval-Augmented Generation for Clinical Study Protocols",
            body: SlideBody::Title {
                subtitle: "Grounding model answers in the documents that govern a trial",
                presenter: "Clinical Data Science Group",
                footnote: "All retrieval and generation results in this deck are simulated \
from static example data.",
            },
        },
        Slide {
            title: "The Context Window Problem",
            body: SlideBody::Bullets {
                intro: "Large language models read a bounded window of tokens. A full \
clinical protocol does not fit.",
                sections: &[
                    Section {
                        heading: "Scale mismatch",
                        items: &[
                            "A Phase III protocol runs 150-300 pages, plus amendments and appendices",
                            "Context windows hold a fraction of that, and cost grows with every token",
                            "Reviewers need answers grounded in the exact protocol version at hand",
                        ],
                    },
                    Section {
                        heading: "What happens when it does not fit",
                        items: &[
                            "Truncation silently drops the sections an answer may depend on",
                            "Summaries lose the precise wording that regulatory work requires",
                            "Ungrounded answers invent plausible but wrong protocol details",
                        ],
                    },
                ],
            },
        },
        Slide {
            title: "Working Around the Window",
            body: SlideBody::Bullets {
                intro: "Four families of workarounds, each trading something different away.",
                sections: &[
                    Section {
                        heading: "Bigger windows",
                        items: &[
                            "Million-token models exist, but attention degrades over long inputs",
                            "Every query pays to re-read the whole document",
                        ],
                    },
                    Section {
                        heading: "Summarization",
                        items: &[
                            "Compresses the document ahead of time",
                            "Exact criteria, doses, and dates rarely survive compression",
                        ],
                    },
                    Section {
                        heading: "Fine-tuning",
                        items: &[
                            "Bakes one document set into the weights",
                            "Expensive to refresh on every protocol amendment",
                        ],
                    },
                    Section {
                        heading: "Retrieval-Augmented Generation",
                        items: &[
                            "Retrieve only the chunks relevant to the question at hand",
                            "Keep the source document authoritative and citable",
                            "The approach the rest of this deck walks through",
                        ],
                    },
                ],
            },
        },
        Slide {
            title: "Why Long Context Alone Fails",
            body: SlideBody::Bullets {
                intro: "Even when a protocol technically fits, stuffing it in has costs.",
                sections: &[
                    Section {
                        heading: "Lost in the middle",
                        items: &[
                            "Recall drops for content buried deep inside a long prompt",
                            "Protocols put critical criteria in the middle sections",
                        ],
                    },
                    Section {
                        heading: "Cost and latency",
                        items: &[
                            "Token cost scales linearly with prompt length per query",
                            "Interactive review cannot wait on 300 pages of prefill",
                        ],
                    },
                    Section {
                        heading: "Freshness and audit",
                        items: &[
                            "Amendments land mid-study; the prompt must track the current version",
                            "Auditors ask which section supported an answer, not which prompt",
                        ],
                    },
                ],
            },
        },
        Slide {
            title: "How RAG Works with Clinical Protocols",
            body: SlideBody::Walkthrough {
                steps: &WALKTHROUGH,
            },
        },
        Slide {
            title: "The Study Protocol Corpus",
            body: SlideBody::Bullets {
                intro: "What a protocol document looks like to a retrieval system.",
                sections: &[
                    Section {
                        heading: "Anatomy of a protocol",
                        items: &[
                            "Administrative metadata: protocol number, version, dates, sponsor",
                            "Background and rationale for the investigational product",
                            "Objectives, endpoints, and the statistical analysis plan",
                            "Eligibility criteria, treatment plan, and safety monitoring",
                        ],
                    },
                    Section {
                        heading: "Why it suits retrieval",
                        items: &[
                            "Strong section structure gives natural chunk boundaries",
                            "Section numbers make citations precise and checkable",
                            "Versioned documents demand answers tied to one version",
                        ],
                    },
                ],
            },
        },
        Slide {
            title: "Protocol Q&A Pipeline",
            body: SlideBody::Bullets {
                intro: "The end-to-end path from a protocol PDF to a cited answer.",
                sections: &[
                    Section {
                        heading: "Ingestion (once per version)",
                        items: &[
                            "Split on section headings; keep section number and title as metadata",
                            "Embed each chunk and store text, vector, and metadata together",
                            "Re-ingest on amendment; prior versions stay queryable",
                        ],
                    },
                    Section {
                        heading: "Answering a question",
                        items: &[
                            "Embed the question and rank chunks by similarity",
                            "Pass the top chunks to the model with citation instructions",
                            "Return the answer with section-level sources, or abstain",
                        ],
                    },
                ],
            },
        },
        Slide {
            title: "Measuring the Pipeline",
            body: SlideBody::Bullets {
                intro: "Retrieval and generation are evaluated separately.",
                sections: &[
                    Section {
                        heading: "Retrieval quality",
                        items: &[
                            "Recall@k: is the chunk holding the answer retrieved at all?",
                            "Precision: how much of the retrieved context is on topic",
                            "Ranking: does the right chunk score above the distractors?",
                        ],
                    },
                    Section {
                        heading: "Answer quality",
                        items: &[
                            "Faithfulness: every claim traceable to a cited chunk",
                            "Citation accuracy: cited sections actually support the claim",
                            "Abstention: out-of-scope questions get \"not in the excerpts\", not a guess",
                        ],
                    },
                ],
            },
        },
        Slide {
            title: "Why RAG for Protocol Work",
            body: SlideBody::Bullets {
                intro: "What the approach buys a clinical team in practice.",
                sections: &[
                    Section {
                        heading: "Grounding",
                        items: &[
                            "Answers quote the protocol instead of paraphrasing memory",
                            "Every response carries checkable section citations",
                            "Out-of-scope questions are declined rather than guessed",
                        ],
                    },
                    Section {
                        heading: "Economics",
                        items: &[
                            "Queries read a handful of chunks, not the whole document",
                            "Amendments require re-ingestion, not re-training",
                        ],
                    },
                    Section {
                        heading: "Operations",
                        items: &[
                            "One pipeline serves every protocol in the portfolio",
                            "Access control and audit live beside the document store",
                        ],
                    },
                ],
            },
        },
        Slide {
            title: "Interactive Demo",
            body: SlideBody::Demo {
                prompt: "Pick a question with j/k and press Enter. The ranking and the cited \
answer come from the static tables shown in the walkthrough.",
            },
        },
    ]
}
