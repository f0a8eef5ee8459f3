//! The Infinity Loop content catalog
//!
//! Entry bodies are placeholders until the manuscript files are wired in.

use crate::types::{Book, Chapter, Section};
use once_cell::sync::Lazy;

/// Build a catalog entry with its label set to the title and placeholder content
pub fn create_chapter(
    id: &str,
    title: &str,
    section: Section,
    chapter_number: u32,
    badge: Option<&str>,
) -> Chapter {
    let chapter = Chapter::new(id, title, section, chapter_number)
        .with_label(title)
        .with_content(placeholder_content(title));
    match badge {
        Some(badge) => chapter.with_badge(badge),
        None => chapter,
    }
}

/// HTML shown in place of an entry's body
pub fn placeholder_content(title: &str) -> String {
    format!(
        "<h3>{title}</h3>\n\
         <p class=\"italic text-medium-gray mb-8\">Loading content for {title}...</p>\n\
         <p>The mechanisms of the Loop are often invisible to the naked eye, obscured by layers \
         of historical precedent and bureaucratic abstraction. To understand the present moment, \
         we must trace the threads back to their origin points.</p>\n\
         <p>In this section, we explore the fundamental dynamics that have shaped this reality. \
         It is not merely a history lesson, but a diagnostic tool for the systems currently in \
         operation.</p>\n\
         <p>Generating detailed analysis...</p>\n"
    )
}

const FRONT_MATTER: &[(&str, &str)] = &[
    ("title-page", "Title Page"),
    ("dedication", "Dedication"),
    ("epigraph", "Epigraph"),
    ("warning", "Content Warning / Reader Care Note"),
    ("language", "A Note on Language and Terminology"),
    ("guide", "How to Use This Book: A Reader's Guide"),
    ("preface", "Author's Preface: Understanding the Infinity Loop"),
    ("methodology", "Note on Sources and Methodology"),
];

// (id, title, badge); numbered by position
const CHAPTERS: &[(&str, &str, &str)] = &[
    (
        "ch1",
        "CHAPTER 1: THE GENESIS: RECONSTRUCTION AND THE BLACK CODES",
        "(1865 - 1877) LoopSnapshot🟡6/10",
    ),
    (
        "ch2",
        "CHAPTER 2: THE REFINEMENT: JIM CROW AND THE RISE OF LEGALIZED APARTHEID",
        "(1877 - 1919) LoopSnapshot🟢8/10",
    ),
    (
        "ch3",
        "CHAPTER 3: MOBILIZATION AND BACKLASH: RED SUMMER, GARVEY, AND THE PROTO-COINTELPRO",
        "(1919 - 1945) LoopSnapshot🔴8/10",
    ),
    (
        "ch4",
        "CHAPTER 4: COLD WAR CONTRADICTIONS: VETERANS, MCGEE, AND \"GENOCIDE\"",
        "(1946 - 1955) LoopSnapshot🔴8/10",
    ),
    (
        "ch5",
        "CHAPTER 5: COINTELPRO PEAK: NEUTRALIZATION, KERNER, AND THE PANTHER'S PRICE",
        "(1956 - 1971) LoopSnapshot🔴9/10",
    ),
    (
        "ch6",
        "CHAPTER 6: THE MODERN CARCERAL STATE: THE WAR ON DRUGS ESCALATES",
        "(1972 - 1989) LoopSnapshot🔴9/10",
    ),
    (
        "ch7",
        "CHAPTER 7: THE \"COLORBLIND\" ERA: PREDICTIVE POLICING AND MASS INCARCERATION",
        "(1990 - 2009) LoopSnapshot🔴9/10",
    ),
    (
        "ch8",
        "CHAPTER 8: DIGITAL AUGMENTATION: FERGUSON, BALTIMORE, AND ALGORITHMIC BIAS",
        "(2010 - 2016) LoopSnapshot🔴9/10",
    ),
    (
        "ch9",
        "CHAPTER 9: THE AUTOMATED LOOP: BIE LABELS, AI, AND THE FUTURE OF CONTROL",
        "(2017 - 2024) LoopSnapshot🔴🟡🟢10/10",
    ),
    (
        "ch10",
        "CHAPTER 10: THE RESILIENCE BLUEPRINT: RESISTANCE AND THRIVING WITHIN THE LOOP",
        "(1619 - Present) LoopSnapshot🟢8/10",
    ),
    (
        "ch11",
        "CHAPTER 11: THE ABOLITION HORIZON: FROM EVIDENCE TO ABOLITION",
        "2025 AND BEYOND LoopSnapshot🔴10/10",
    ),
];

const BACK_MATTER: &[(&str, &str)] = &[
    ("app-a", "Appendix A: Loop Mechanism Glossary"),
    ("app-b", "Appendix B: Historical Timeline (1619–2025)"),
    ("app-c", "Appendix C: Methodology and Sources Note"),
    ("works", "Works Cited"),
    ("ack", "Acknowledgments"),
    ("about", "About the Author"),
];

/// The complete catalog, built on first access
pub static INFINITY_LOOP_BOOK: Lazy<Book> = Lazy::new(|| Book {
    title: "The Infinity Loop".to_string(),
    front_matter: FRONT_MATTER
        .iter()
        .map(|&(id, title)| create_chapter(id, title, Section::Front, 0, None))
        .collect(),
    chapters: CHAPTERS
        .iter()
        .zip(1..)
        .map(|(&(id, title, badge), number)| {
            create_chapter(id, title, Section::Chapter, number, Some(badge))
        })
        .collect(),
    back_matter: BACK_MATTER
        .iter()
        .map(|&(id, title)| create_chapter(id, title, Section::Back, 0, None))
        .collect(),
});
