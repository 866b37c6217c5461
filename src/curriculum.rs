//! Static curriculum reference data for the two-year Molecular Genetic
//! Pathology program: the topic catalog, the 24-month planner template, and
//! the built-in starter content for the auxiliary collections.
//!
//! Everything here is read-only at runtime.

use serde_json::{json, Value};

pub const LEVEL_CORE: &str = "Core";
pub const LEVEL_ADVANCED: &str = "Advanced Resident";

pub struct CurriculumTopic {
    pub id: u32,
    pub topic: &'static str,
    pub level: &'static str,
    pub duration: &'static str,
    pub subtopics: &'static [&'static str],
}

pub const TOPICS: &[CurriculumTopic] = &[
    CurriculumTopic {
        id: 1,
        topic: "Normal Structure and Function",
        level: LEVEL_CORE,
        duration: "4 weeks",
        subtopics: &[
            "Chromosomes",
            "Genes",
            "Exons, Introns, Non-Coding DNA",
            "Repetitive Elements (e.g., STRs, Microsatellite)",
            "mRNA and tRNA",
            "miRNA and lncRNA",
            "Transcription, Translation, and Post-Translational Modification",
            "Mitosis",
            "Meiosis",
            "Gene Nomenclature",
            "Protein Nomenclature",
            "Variant Nomenclature",
        ],
    },
    CurriculumTopic {
        id: 2,
        topic: "Molecular Genetic Principles",
        level: LEVEL_CORE,
        duration: "6 weeks",
        subtopics: &[
            "Ploidy",
            "Copy Number Variants (CNV)",
            "Deletions, Duplications, Inversions",
            "Single Nucleotide Polymorphisms (SNPs)",
            "Methylation, Epigenetics",
            "Trinucleotide Repeats",
            "Multifactorial Events",
            "Mismatch Repair",
            "Point Mutations",
            "Mosaicism",
            "Mendelian Inheritance",
            "Non-Mendelian Inheritance",
            "Oncogenes (Inherited)",
            "Tumor Suppressor Genes (Inherited)",
            "Risk Calculations",
            "Hardy Weinberg Principle",
            "Oncogenes (Somatic)",
            "Tumor Suppressor Genes (Somatic)",
            "Loss of Heterozygosity (LOH)",
            "Microsatellite Instability (MSI)",
            "Clonality",
            "Genomic Instability",
        ],
    },
    CurriculumTopic {
        id: 3,
        topic: "Techniques and Methods",
        level: LEVEL_CORE,
        duration: "8 weeks",
        subtopics: &[
            "Cytogenetics",
            "PCR, RT-PCR, and other NAAT",
            "FISH",
            "Nucleic Acid Isolation & Quantitation",
            "Restriction Enzyme Digestion",
            "Fragment Analysis",
            "Quantitative PCR and RT-PCR",
            "Nucleic Acid Sequencing",
            "Next Generation Sequencing",
            "Constitutional Arrays",
            "Somatic Arrays",
            "Melt Curve Analysis",
            "Tumor Mutational Burden",
        ],
    },
    CurriculumTopic {
        id: 4,
        topic: "Assay Performance and Validation",
        level: LEVEL_CORE,
        duration: "4 weeks",
        subtopics: &[
            "Proficiency Testing",
            "Validation versus Verification",
            "Preanalytical Considerations",
            "Stability",
            "Specimen Selection",
            "Specimen Collection",
            "Anticoagulant",
            "Fixation",
            "Results, Interpretation, & Follow-up Testing",
            "Variant Classification",
            "Reporting",
        ],
    },
    CurriculumTopic {
        id: 5,
        topic: "Quality",
        level: LEVEL_CORE,
        duration: "3 weeks",
        subtopics: &[
            "Quality Assurance",
            "Quality Control",
            "Internal Controls",
            "Quantitative Controls",
        ],
    },
    CurriculumTopic {
        id: 6,
        topic: "Ethical, Legal, and Regulatory Issues",
        level: LEVEL_ADVANCED,
        duration: "4 weeks",
        subtopics: &[
            "IRB",
            "Consent",
            "HIPAA",
            "GINA",
            "Gene Patent",
            "CLIA",
            "CAP",
            "CMS",
            "FDA: LDT/LDP, IUO, RUO",
            "CPT",
            "ICD",
            "Laboratory Utilization",
        ],
    },
    CurriculumTopic {
        id: 7,
        topic: "Indications for Testing",
        level: LEVEL_ADVANCED,
        duration: "3 weeks",
        subtopics: &[
            "Presymptomatic / Predictive",
            "Diagnostic",
            "Preimplantation Genetic Diagnosis (PGD)",
            "Carrier Screening",
            "Newborn Screening",
        ],
    },
];

pub fn topic_by_name(name: &str) -> Option<&'static CurriculumTopic> {
    TOPICS.iter().find(|t| t.topic == name)
}

pub fn topic_to_json(topic: &CurriculumTopic) -> Value {
    json!({
        "id": topic.id,
        "topic": topic.topic,
        "level": topic.level,
        "duration": topic.duration,
        "subtopics": topic.subtopics,
    })
}

/// One topic entry inside a planner month: the catalog topic plus the slice
/// of subtopics that month actually covers and its teaching focus.
pub struct PlanTopic {
    pub id: u32,
    pub topic: &'static str,
    pub level: &'static str,
    pub duration: &'static str,
    pub focus: &'static str,
    pub subtopics: &'static [&'static str],
}

pub struct PlanMonth {
    /// 1-based month number across the whole program (1..=24).
    pub month: u32,
    pub name: &'static str,
    pub topics: &'static [PlanTopic],
    pub projects: &'static [&'static str],
    pub assessments: &'static [&'static str],
}

pub const YEAR_ONE: &[PlanMonth] = &[
    PlanMonth {
        month: 1,
        name: "January",
        topics: &[PlanTopic {
            id: 1,
            topic: "Normal Structure and Function",
            level: LEVEL_CORE,
            duration: "4 weeks",
            focus: "Chromosomes, Genes, Basic Structure",
            subtopics: &["Chromosomes", "Genes", "Exons, Introns, Non-Coding DNA", "Repetitive Elements"],
        }],
        projects: &["Basic Genetics Review Project"],
        assessments: &["Chromosome Structure Quiz"],
    },
    PlanMonth {
        month: 2,
        name: "February",
        topics: &[PlanTopic {
            id: 1,
            topic: "Normal Structure and Function",
            level: LEVEL_CORE,
            duration: "4 weeks",
            focus: "RNA and Protein Processing",
            subtopics: &["mRNA and tRNA", "miRNA and lncRNA", "Transcription, Translation", "Post-Translational Modification"],
        }],
        projects: &["RNA Processing Analysis"],
        assessments: &["Protein Synthesis Quiz"],
    },
    PlanMonth {
        month: 3,
        name: "March",
        topics: &[PlanTopic {
            id: 1,
            topic: "Normal Structure and Function",
            level: LEVEL_CORE,
            duration: "4 weeks",
            focus: "Cell Division and Nomenclature",
            subtopics: &["Mitosis", "Meiosis", "Gene Nomenclature", "Protein Nomenclature", "Variant Nomenclature"],
        }],
        projects: &["Cell Division Simulation"],
        assessments: &["Nomenclature Standards Test"],
    },
    PlanMonth {
        month: 4,
        name: "April",
        topics: &[PlanTopic {
            id: 2,
            topic: "Molecular Genetic Principles",
            level: LEVEL_CORE,
            duration: "6 weeks",
            focus: "Basic Genetic Variants",
            subtopics: &["Ploidy", "Copy Number Variants (CNV)", "Deletions, Duplications, Inversions", "Single Nucleotide Polymorphisms (SNPs)"],
        }],
        projects: &["CNV Analysis Project"],
        assessments: &["Genetic Variants Quiz"],
    },
    PlanMonth {
        month: 5,
        name: "May",
        topics: &[PlanTopic {
            id: 2,
            topic: "Molecular Genetic Principles",
            level: LEVEL_CORE,
            duration: "6 weeks",
            focus: "Epigenetics and Complex Inheritance",
            subtopics: &["Methylation, Epigenetics", "Trinucleotide Repeats", "Multifactorial Events", "Mismatch Repair"],
        }],
        projects: &["Epigenetics Research Project"],
        assessments: &["Epigenetics Assessment"],
    },
    PlanMonth {
        month: 6,
        name: "June",
        topics: &[PlanTopic {
            id: 2,
            topic: "Molecular Genetic Principles",
            level: LEVEL_CORE,
            duration: "6 weeks",
            focus: "Inheritance Patterns",
            subtopics: &["Point Mutations", "Mosaicism", "Mendelian Inheritance", "Non-Mendelian Inheritance"],
        }],
        projects: &["Pedigree Analysis Project"],
        assessments: &["Inheritance Patterns Exam"],
    },
    PlanMonth {
        month: 7,
        name: "July",
        topics: &[PlanTopic {
            id: 2,
            topic: "Molecular Genetic Principles",
            level: LEVEL_CORE,
            duration: "6 weeks",
            focus: "Cancer Genetics",
            subtopics: &["Oncogenes (Inherited)", "Tumor Suppressor Genes (Inherited)", "Risk Calculations", "Hardy Weinberg Principle"],
        }],
        projects: &["Cancer Risk Assessment"],
        assessments: &["Cancer Genetics Quiz"],
    },
    PlanMonth {
        month: 8,
        name: "August",
        topics: &[PlanTopic {
            id: 2,
            topic: "Molecular Genetic Principles",
            level: LEVEL_CORE,
            duration: "6 weeks",
            focus: "Somatic Mutations",
            subtopics: &["Oncogenes (Somatic)", "Tumor Suppressor Genes (Somatic)", "Loss of Heterozygosity (LOH)", "Microsatellite Instability (MSI)"],
        }],
        projects: &["Somatic Mutation Analysis"],
        assessments: &["Somatic Genetics Test"],
    },
    PlanMonth {
        month: 9,
        name: "September",
        topics: &[
            PlanTopic {
                id: 2,
                topic: "Molecular Genetic Principles",
                level: LEVEL_CORE,
                duration: "6 weeks",
                focus: "Genomic Instability",
                subtopics: &["Clonality", "Genomic Instability"],
            },
            PlanTopic {
                id: 3,
                topic: "Techniques and Methods",
                level: LEVEL_CORE,
                duration: "8 weeks",
                focus: "Basic Techniques",
                subtopics: &["Cytogenetics", "PCR, RT-PCR, and other NAAT"],
            },
        ],
        projects: &["Genomic Instability Study"],
        assessments: &["Principles Comprehensive Exam"],
    },
    PlanMonth {
        month: 10,
        name: "October",
        topics: &[PlanTopic {
            id: 3,
            topic: "Techniques and Methods",
            level: LEVEL_CORE,
            duration: "8 weeks",
            focus: "Fluorescence and Analysis",
            subtopics: &["FISH", "Nucleic Acid Isolation & Quantitation", "Restriction Enzyme Digestion", "Fragment Analysis"],
        }],
        projects: &["FISH Technique Project"],
        assessments: &["Molecular Techniques Quiz"],
    },
    PlanMonth {
        month: 11,
        name: "November",
        topics: &[PlanTopic {
            id: 3,
            topic: "Techniques and Methods",
            level: LEVEL_CORE,
            duration: "8 weeks",
            focus: "Quantitative Methods",
            subtopics: &["Quantitative PCR and RT-PCR", "Nucleic Acid Sequencing", "Next Generation Sequencing"],
        }],
        projects: &["NGS Data Analysis Project"],
        assessments: &["Quantitative Methods Test"],
    },
    PlanMonth {
        month: 12,
        name: "December",
        topics: &[PlanTopic {
            id: 3,
            topic: "Techniques and Methods",
            level: LEVEL_CORE,
            duration: "8 weeks",
            focus: "Advanced Techniques",
            subtopics: &["Constitutional Arrays", "Somatic Arrays", "Melt Curve Analysis", "Tumor Mutational Burden"],
        }],
        projects: &["Array Analysis Project"],
        assessments: &["Year 1 Comprehensive Exam"],
    },
];

pub const YEAR_TWO: &[PlanMonth] = &[
    PlanMonth {
        month: 13,
        name: "January",
        topics: &[PlanTopic {
            id: 4,
            topic: "Assay Performance and Validation",
            level: LEVEL_CORE,
            duration: "4 weeks",
            focus: "Validation Principles",
            subtopics: &["Proficiency Testing", "Validation versus Verification", "Preanalytical Considerations"],
        }],
        projects: &["Assay Validation Project"],
        assessments: &["Validation Principles Quiz"],
    },
    PlanMonth {
        month: 14,
        name: "February",
        topics: &[PlanTopic {
            id: 4,
            topic: "Assay Performance and Validation",
            level: LEVEL_CORE,
            duration: "4 weeks",
            focus: "Specimen Handling",
            subtopics: &["Stability", "Specimen Selection", "Specimen Collection", "Anticoagulant", "Fixation"],
        }],
        projects: &["Specimen Stability Study"],
        assessments: &["Specimen Handling Test"],
    },
    PlanMonth {
        month: 15,
        name: "March",
        topics: &[PlanTopic {
            id: 4,
            topic: "Assay Performance and Validation",
            level: LEVEL_CORE,
            duration: "4 weeks",
            focus: "Results and Reporting",
            subtopics: &["Results, Interpretation, & Follow-up Testing", "Variant Classification", "Reporting"],
        }],
        projects: &["Variant Classification Project"],
        assessments: &["Reporting Standards Quiz"],
    },
    PlanMonth {
        month: 16,
        name: "April",
        topics: &[PlanTopic {
            id: 5,
            topic: "Quality",
            level: LEVEL_CORE,
            duration: "3 weeks",
            focus: "Quality Systems",
            subtopics: &["Quality Assurance", "Quality Control", "Internal Controls", "Quantitative Controls"],
        }],
        projects: &["Quality System Audit"],
        assessments: &["Quality Management Test"],
    },
    PlanMonth {
        month: 17,
        name: "May",
        topics: &[PlanTopic {
            id: 6,
            topic: "Ethical, Legal, and Regulatory Issues",
            level: LEVEL_ADVANCED,
            duration: "4 weeks",
            focus: "Regulatory Framework",
            subtopics: &["IRB", "Consent", "HIPAA", "GINA", "Gene Patent"],
        }],
        projects: &["Regulatory Compliance Review"],
        assessments: &["Regulatory Knowledge Quiz"],
    },
    PlanMonth {
        month: 18,
        name: "June",
        topics: &[PlanTopic {
            id: 6,
            topic: "Ethical, Legal, and Regulatory Issues",
            level: LEVEL_ADVANCED,
            duration: "4 weeks",
            focus: "Laboratory Standards",
            subtopics: &["CLIA", "CAP", "CMS", "FDA: LDT/LDP, IUO, RUO"],
        }],
        projects: &["Laboratory Accreditation Project"],
        assessments: &["Laboratory Standards Exam"],
    },
    PlanMonth {
        month: 19,
        name: "July",
        topics: &[PlanTopic {
            id: 6,
            topic: "Ethical, Legal, and Regulatory Issues",
            level: LEVEL_ADVANCED,
            duration: "4 weeks",
            focus: "Billing and Utilization",
            subtopics: &["CPT", "ICD", "Laboratory Utilization"],
        }],
        projects: &["Billing Analysis Project"],
        assessments: &["Billing and Coding Quiz"],
    },
    PlanMonth {
        month: 20,
        name: "August",
        topics: &[PlanTopic {
            id: 7,
            topic: "Indications for Testing",
            level: LEVEL_ADVANCED,
            duration: "3 weeks",
            focus: "Predictive and Diagnostic Testing",
            subtopics: &["Presymptomatic / Predictive", "Diagnostic"],
        }],
        projects: &["Testing Indication Case Studies"],
        assessments: &["Testing Indications Quiz"],
    },
    PlanMonth {
        month: 21,
        name: "September",
        topics: &[PlanTopic {
            id: 7,
            topic: "Indications for Testing",
            level: LEVEL_ADVANCED,
            duration: "3 weeks",
            focus: "Specialized Testing",
            subtopics: &["Preimplantation Genetic Diagnosis (PGD)", "Carrier Screening", "Newborn Screening"],
        }],
        projects: &["Specialized Testing Protocol"],
        assessments: &["Specialized Testing Exam"],
    },
    PlanMonth {
        month: 22,
        name: "October",
        topics: &[PlanTopic {
            id: 1,
            topic: "Normal Structure and Function",
            level: LEVEL_CORE,
            duration: "Review",
            focus: "Comprehensive Review",
            subtopics: &["All Core Concepts Review"],
        }],
        projects: &["Comprehensive Case Study 1"],
        assessments: &["Mock Board Exam 1"],
    },
    PlanMonth {
        month: 23,
        name: "November",
        topics: &[PlanTopic {
            id: 2,
            topic: "Molecular Genetic Principles",
            level: LEVEL_CORE,
            duration: "Review",
            focus: "Advanced Principles Review",
            subtopics: &["All Principles Review"],
        }],
        projects: &["Comprehensive Case Study 2"],
        assessments: &["Mock Board Exam 2"],
    },
    PlanMonth {
        month: 24,
        name: "December",
        topics: &[PlanTopic {
            id: 3,
            topic: "Techniques and Methods",
            level: LEVEL_CORE,
            duration: "Review",
            focus: "Final Review and Preparation",
            subtopics: &["All Techniques Review"],
        }],
        projects: &["Final Capstone Project"],
        assessments: &["Final Board Exam"],
    },
];

/// Program years are 1-based; anything else is a caller error.
pub fn plan_year(year: u32) -> Option<&'static [PlanMonth]> {
    match year {
        1 => Some(YEAR_ONE),
        2 => Some(YEAR_TWO),
        _ => None,
    }
}

pub fn plan_month_to_json(month: &PlanMonth) -> Value {
    json!({
        "month": month.month,
        "name": month.name,
        "topics": month.topics.iter().map(|t| json!({
            "id": t.id,
            "topic": t.topic,
            "level": t.level,
            "duration": t.duration,
            "focus": t.focus,
            "subtopics": t.subtopics,
        })).collect::<Vec<_>>(),
        "projects": month.projects,
        "assessments": month.assessments,
    })
}

/// Built-in board questions shown before any custom content exists. Default
/// ids are small integers; suppressing one records its id in the
/// `deletedDefaultQuestionIds` cache key rather than mutating this list.
pub fn default_questions() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "question": "Which of the following best describes the Hardy-Weinberg principle?",
            "options": [
                "A) Allele frequencies remain constant in a population under certain conditions",
                "B) Dominant alleles always increase in frequency over time",
                "C) Recessive alleles are always harmful to the organism",
                "D) Mutations always lead to evolution"
            ],
            "correctAnswer": 0,
            "explanation": "The Hardy-Weinberg principle states that allele frequencies in a population remain constant from generation to generation under certain conditions (no mutation, no migration, large population size, random mating, and no selection).",
            "topic": 2,
            "subtopic": "Hardy Weinberg Principle",
            "level": LEVEL_CORE,
            "difficulty": "Medium",
            "isCustom": false
        }),
        json!({
            "id": 2,
            "question": "What is the primary advantage of next-generation sequencing over Sanger sequencing?",
            "options": [
                "A) Higher accuracy",
                "B) Lower cost per base",
                "C) Longer read lengths",
                "D) Better for single gene analysis"
            ],
            "correctAnswer": 1,
            "explanation": "Next-generation sequencing provides massively parallel sequencing, allowing for much lower cost per base compared to Sanger sequencing, making it feasible for whole genome or exome sequencing.",
            "topic": 3,
            "subtopic": "Next Generation Sequencing",
            "level": LEVEL_CORE,
            "difficulty": "Medium",
            "isCustom": false
        }),
        json!({
            "id": 3,
            "question": "Which regulatory body oversees laboratory-developed tests (LDTs) in the United States?",
            "options": ["A) CLIA", "B) CAP", "C) FDA", "D) CMS"],
            "correctAnswer": 2,
            "explanation": "The FDA has regulatory authority over laboratory-developed tests (LDTs), though this is currently under review and may change with new regulations.",
            "topic": 6,
            "subtopic": "FDA: LDT/LDP, IUO, RUO",
            "level": LEVEL_ADVANCED,
            "difficulty": "Hard",
            "isCustom": false
        }),
    ]
}

pub fn default_resources() -> Value {
    json!({
        "books": [
            {
                "id": "book-1",
                "type": "book",
                "title": "Molecular Pathology: The Molecular Basis of Human Disease",
                "author": "William B. Coleman, Gregory J. Tsongalis",
                "publisher": "Academic Press",
                "edition": "3rd Edition",
                "isbn": "978-0123864567",
                "topics": [1, 2, 3, 4]
            },
            {
                "id": "book-2",
                "type": "book",
                "title": "Diagnostic Molecular Pathology: A Guide to Applied Molecular Testing",
                "author": "William B. Coleman, Gregory J. Tsongalis",
                "publisher": "Academic Press",
                "edition": "1st Edition",
                "isbn": "978-0123945853",
                "topics": [3, 4, 5]
            },
            {
                "id": "book-3",
                "type": "book",
                "title": "Clinical Genomics: Practical Applications in Adult Patient Care",
                "author": "Michael F. Murray, Mark W. Babyatsky",
                "publisher": "McGraw-Hill Education",
                "edition": "1st Edition",
                "isbn": "978-0071622443",
                "topics": [1, 2, 7]
            }
        ],
        "journals": [
            {
                "id": "journal-1",
                "type": "journal",
                "title": "The Journal of Molecular Diagnostics",
                "publisher": "American Society for Investigative Pathology",
                "impactFactor": "4.1",
                "url": "https://www.jmdjournal.org/",
                "topics": [1, 2, 3, 4, 5, 6, 7]
            },
            {
                "id": "journal-2",
                "type": "journal",
                "title": "Genetics in Medicine",
                "publisher": "American College of Medical Genetics and Genomics",
                "impactFactor": "9.9",
                "url": "https://www.nature.com/gim/",
                "topics": [1, 2, 6, 7]
            },
            {
                "id": "journal-3",
                "type": "journal",
                "title": "Modern Pathology",
                "publisher": "Nature Publishing Group",
                "impactFactor": "6.3",
                "url": "https://www.nature.com/modpathol/",
                "topics": [1, 2, 3, 4, 5]
            }
        ],
        "links": [
            {
                "id": "link-1",
                "type": "link",
                "title": "NCBI Gene Database",
                "url": "https://www.ncbi.nlm.nih.gov/gene/",
                "description": "Comprehensive gene information database",
                "topics": [1, 2]
            },
            {
                "id": "link-2",
                "type": "link",
                "title": "ClinVar Database",
                "url": "https://www.ncbi.nlm.nih.gov/clinvar/",
                "description": "Public archive of human genetic variants",
                "topics": [2, 4, 7]
            },
            {
                "id": "link-3",
                "type": "link",
                "title": "ACMG Guidelines",
                "url": "https://www.acmg.net/",
                "description": "American College of Medical Genetics guidelines",
                "topics": [6, 7]
            }
        ]
    })
}

pub fn default_projects() -> Vec<Value> {
    vec![
        json!({
            "id": "project-1",
            "title": "PCR Optimization Project",
            "description": "Design and optimize a PCR assay for detecting a specific genetic variant",
            "duration": "2 weeks",
            "topic": 3,
            "subtopic": "PCR, RT-PCR, and other NAAT",
            "deliverables": [
                "Protocol development",
                "Optimization results",
                "Validation data",
                "Written report"
            ],
            "dueDate": "2024-02-15"
        }),
        json!({
            "id": "project-2",
            "title": "Variant Interpretation Case Study",
            "description": "Analyze and interpret a complex genetic variant using ACMG guidelines",
            "duration": "1 week",
            "topic": 4,
            "subtopic": "Variant Classification",
            "deliverables": [
                "Variant analysis",
                "Classification justification",
                "Clinical significance assessment",
                "Presentation"
            ],
            "dueDate": "2024-02-22"
        }),
        json!({
            "id": "project-3",
            "title": "Quality Control Assessment",
            "description": "Evaluate quality control procedures for a molecular diagnostic assay",
            "duration": "1 week",
            "topic": 5,
            "subtopic": "Quality Control",
            "deliverables": [
                "QC procedure review",
                "Statistical analysis",
                "Recommendations",
                "Implementation plan"
            ],
            "dueDate": "2024-03-01"
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::{plan_year, topic_by_name, TOPICS, YEAR_ONE, YEAR_TWO};

    #[test]
    fn catalog_names_are_unique_and_resolvable() {
        for topic in TOPICS {
            let found = topic_by_name(topic.topic).expect("topic resolves by name");
            assert_eq!(found.id, topic.id);
        }
        assert!(topic_by_name("No Such Topic").is_none());
    }

    #[test]
    fn plan_covers_twenty_four_months_in_order() {
        assert_eq!(YEAR_ONE.len(), 12);
        assert_eq!(YEAR_TWO.len(), 12);
        for (idx, month) in YEAR_ONE.iter().enumerate() {
            assert_eq!(month.month as usize, idx + 1);
            assert!(!month.topics.is_empty());
        }
        for (idx, month) in YEAR_TWO.iter().enumerate() {
            assert_eq!(month.month as usize, idx + 13);
        }
        assert!(plan_year(3).is_none());
    }

    #[test]
    fn plan_topics_reference_catalog_entries() {
        for month in YEAR_ONE.iter().chain(YEAR_TWO.iter()) {
            for plan_topic in month.topics {
                let catalog = topic_by_name(plan_topic.topic).expect("plan topic in catalog");
                assert_eq!(catalog.id, plan_topic.id);
            }
        }
    }
}
