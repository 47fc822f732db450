//! Static rewrite tables. Patterns are regex sources matched case-insensitively.

pub(crate) type PhraseTable = &'static [(&'static str, &'static [&'static str])];
pub(crate) type FixedTable = &'static [(&'static str, &'static str)];

pub(crate) const RESEARCH_PATTERN_PROBABILITY: f64 = 0.9;
pub(crate) const AI_PATTERN_PROBABILITY: f64 = 0.85;
pub(crate) const EXTRA_PATTERN_PROBABILITY: f64 = 0.75;
pub(crate) const SYNONYM_PROBABILITY: f64 = 0.3;
pub(crate) const TRANSITION_PROBABILITY: f64 = 0.35;
pub(crate) const EMPHASIS_PROBABILITY: f64 = 0.4;
pub(crate) const JOIN_PROBABILITY: f64 = 0.3;
pub(crate) const SPLIT_PROBABILITY: f64 = 0.25;
pub(crate) const SPLIT_CONNECTOR_PROBABILITY: f64 = 0.4;
pub(crate) const INTERJECTION_PROBABILITY: f64 = 0.15;
pub(crate) const PARENTHETICAL_PROBABILITY: f64 = 0.075;
pub(crate) const DASH_PROBABILITY: f64 = 0.15;
pub(crate) const EXCLAMATION_PROBABILITY: f64 = 0.05;

pub(crate) const RESEARCH_VOCABULARY: PhraseTable = &[
    ("method", &["approach", "technique", "procedure", "methodology", "framework"]),
    ("study", &["investigation", "research", "examination", "analysis", "inquiry"]),
    ("analyze", &["examine", "investigate", "assess", "evaluate", "scrutinize"]),
    ("show", &["demonstrate", "reveal", "indicate", "illustrate", "exhibit"]),
    ("find", &["discover", "identify", "determine", "establish", "ascertain"]),
    ("prove", &["demonstrate", "establish", "validate", "confirm", "substantiate"]),
    ("important", &["significant", "crucial", "vital", "essential", "paramount"]),
    ("big", &["substantial", "considerable", "significant", "extensive"]),
    ("small", &["minimal", "negligible", "marginal", "limited", "modest"]),
    ("good", &["effective", "efficient", "superior", "optimal", "favorable"]),
    ("bad", &["inadequate", "insufficient", "suboptimal", "deficient", "inferior"]),
    ("use", &["employ", "utilize", "apply", "implement", "adopt"]),
    ("make", &["generate", "produce", "create", "construct"]),
    ("get", &["obtain", "acquire", "retrieve", "derive", "extract"]),
    ("help", &["facilitate", "enable", "assist", "support"]),
    ("try", &["attempt", "endeavor", "strive", "seek"]),
    ("look", &["examine", "investigate", "explore", "assess"]),
    ("see", &["observe", "perceive", "detect", "identify", "recognize"]),
    ("think", &["consider", "contemplate", "hypothesize", "postulate"]),
    ("know", &["understand", "comprehend", "recognize", "acknowledge"]),
];

pub(crate) const RESEARCH_PATTERNS: PhraseTable = &[
    (r"\bThis paper\b", &["This study", "This research", "This investigation", "This work", "The present study"]),
    (r"\bWe propose\b", &["We present", "We introduce", "We develop", "We put forward"]),
    (r"\bWe show\b", &["We demonstrate", "We reveal", "We establish", "We illustrate"]),
    (r"\bOur results\b", &["The findings", "The outcomes", "The results", "The data"]),
    (r"\bWe found\b", &["We discovered", "We identified", "We determined", "We observed"]),
    (r"\bWe used\b", &["We employed", "We utilized", "We applied", "We adopted"]),
    (r"\bWe collected\b", &["We gathered", "We obtained", "We acquired", "We assembled"]),
    (r"\bWe measured\b", &["We quantified", "We assessed", "We evaluated", "We gauged"]),
    (r"\bWe tested\b", &["We examined", "We evaluated", "We assessed", "We validated"]),
    (r"\bThe results show\b", &["The results demonstrate", "The findings indicate", "The data reveal"]),
    (r"\bIt was found\b", &["It was discovered", "It was identified", "It was determined", "It was observed"]),
    (r"\bWe can see\b", &["It is evident", "It is apparent", "It is clear"]),
    (r"\bThis means\b", &["This indicates", "This suggests", "This implies", "This signifies"]),
    (r"\bThis could be\b", &["This may be", "This might be", "This could potentially be"]),
    (r"\bOne possible explanation\b", &["A potential explanation", "One plausible explanation"]),
    (r"\bIt is possible that\b", &["It is plausible that", "It is conceivable that", "It may be that"]),
    (r"\bOur study shows\b", &["Our research demonstrates", "Our investigation reveals", "Our findings show"]),
];

pub(crate) const AI_PATTERNS: PhraseTable = &[
    (r"\bIn conclusion\b", &["To summarize", "In summary", "Overall", "In essence", "Summing up"]),
    (r"\bFurthermore\b", &["Additionally", "Moreover", "Also", "Beyond that"]),
    (r"\bHowever\b", &["Nevertheless", "Nonetheless", "Yet", "Still", "That said"]),
    (r"\bTherefore\b", &["Thus", "Hence", "Consequently", "As a result", "For this reason"]),
    (r"\bIt is important to note\b", &["It should be noted", "Notably", "Importantly", "It's worth noting"]),
    (r"\bThis suggests\b", &["This indicates", "This implies", "This points to", "This shows"]),
    (r"\bIn order to\b", &["To", "So as to", "With the aim of"]),
    (r"\bDue to the fact that\b", &["Because", "Since", "Given that"]),
    (r"\bIn the event that\b", &["If", "In case", "When"]),
    (r"\bAt this point in time\b", &["Now", "Currently", "At present"]),
    (r"\bIt can be seen that\b", &["Clearly", "Evidently", "It's clear that"]),
    (r"\bIt is evident that\b", &["Clearly", "Plainly", "It's clear that"]),
    (r"\bIn addition\b", &["Also", "Moreover", "Additionally"]),
    (r"\bOn the other hand\b", &["Conversely", "Alternatively", "In contrast"]),
    (r"\bFor instance\b", &["For example", "As an example"]),
    (r"\bIn other words\b", &["That is", "Namely", "Simply put"]),
    (r"\bTo sum up\b", &["In summary", "Overall", "All in all", "In brief"]),
    (r"\bFirst and foremost\b", &["First", "Primarily", "Above all"]),
    (r"\bLast but not least\b", &["Finally", "Lastly"]),
];

pub(crate) const EXTRA_PATTERNS: PhraseTable = &[
    (r"\bIt is worth noting that\b", &["Notably", "Importantly", "It is noteworthy that"]),
    (r"\bIt should be emphasized that\b", &["It is crucial to note that", "It must be acknowledged that"]),
    (r"\bOne can observe that\b", &["It is evident that", "It can be observed that"]),
    (r"\bIt becomes apparent that\b", &["It is clear that", "It emerges that"]),
    (r"\bIn the context of\b", &["Regarding", "Concerning", "In relation to"]),
    (r"\bWith regard to\b", &["Regarding", "Concerning", "Pertaining to"]),
    (r"\bIn terms of\b", &["Regarding", "With respect to", "Pertaining to"]),
    (r"\bIt is necessary to\b", &["It is essential to", "One must", "It is imperative to"]),
    (r"\bWe believe\b", &["We posit", "We suggest", "We contend", "We argue"]),
    (r"\bWe think\b", &["We hypothesize", "We postulate", "We suggest"]),
];

pub(crate) const ACADEMIC_OPTIMIZATIONS: FixedTable = &[
    (r"\bwe see\b", "we observe"),
    (r"\bwe look\b", "we examine"),
    (r"\bwe find\b", "we identify"),
    (r"\bwe show\b", "we demonstrate"),
    (r"\bwe use\b", "we employ"),
    (r"\bwe make\b", "we construct"),
    (r"\bwe get\b", "we obtain"),
    (r"\bwe give\b", "we provide"),
    (r"\bwe keep\b", "we maintain"),
    (r"\bstuff\b", "material"),
    (r"\bthings\b", "elements"),
    (r"\bthing\b", "element"),
];

pub(crate) const PROFESSIONAL_TONE: FixedTable = &[
    (r"\bgot\b", "obtained"),
    (r"\bgetting\b", "obtaining"),
    (r"\breally\b", "significantly"),
    (r"\bvery\b", "considerably"),
    (r"\ba lot of\b", "numerous"),
    (r"\blots of\b", "numerous"),
    (r"\bpretty\b", "fairly"),
    (r"\bkind of\b", "somewhat"),
    (r"\bsort of\b", "somewhat"),
    (r"\bmake sure\b", "ensure"),
    (r"\bfigure out\b", "determine"),
    (r"\bfind out\b", "ascertain"),
    (r"\blook at\b", "examine"),
    (r"\bwe did\b", "we conducted"),
    (r"\bwe made\b", "we created"),
    (r"\bwe used\b", "we employed"),
];

/// Keyword groups that mark a section of a research paper.
pub(crate) const SECTION_KEYWORDS: &[(Section, &[&str])] = &[
    (Section::Abstract, &["abstract", "summary"]),
    (Section::Methodology, &["method", "methodology", "approach", "procedure", "design"]),
    (Section::Results, &["result", "finding", "outcome", "data", "analysis"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    Abstract,
    Methodology,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TransitionKind {
    Addition,
    Contrast,
    Cause,
    Emphasis,
}

impl TransitionKind {
    pub(crate) fn phrases(self) -> &'static [&'static str] {
        match self {
            TransitionKind::Addition => &["Furthermore", "Moreover", "Additionally", "Similarly", "Likewise"],
            TransitionKind::Contrast => &["However", "Nevertheless", "Nonetheless", "Conversely", "In contrast"],
            TransitionKind::Cause => &["Therefore", "Thus", "Hence", "Consequently", "Accordingly"],
            TransitionKind::Emphasis => &["Indeed", "In fact", "Notably", "Importantly", "Significantly"],
        }
    }
}

pub(crate) const CONTRAST_CUES: &[&str] = &["however", "although", "despite", "whereas"];
pub(crate) const CAUSE_CUES: &[&str] = &["because", "due to", "as a result", "therefore"];

/// Sentence openers that already read as a transition.
pub(crate) const EXISTING_TRANSITIONS: &[&str] = &[
    "however", "furthermore", "moreover", "additionally", "nevertheless", "meanwhile",
    "consequently", "therefore", "thus", "hence", "indeed", "specifically", "particularly",
    "notably", "importantly", "similarly", "likewise", "accordingly", "nonetheless",
    "conversely", "significantly",
];

/// Domain terms the paraphrase pass must never touch.
pub(crate) const PRESERVED_TERMS: &[&str] = &[
    "hypothesis", "hypotheses", "methodology", "methodological", "quantitative", "qualitative",
    "empirical", "theoretical", "framework", "paradigm", "validity", "reliability",
    "causality", "correlation", "statistical", "significance", "regression", "analysis",
    "variable", "variables", "dependent", "independent", "control", "experimental", "sample",
    "population", "data", "dataset", "findings", "results", "outcomes", "literature",
    "abstract", "introduction", "discussion", "conclusion", "appendix",
];

/// Words starting with a vowel letter that take "a".
pub(crate) const CONSONANT_SOUND_PREFIXES: &[&str] = &["uni", "use", "usu", "uti", "eu", "one", "once", "ubiq"];

/// Words starting with "h" that take "an".
pub(crate) const SILENT_H_PREFIXES: &[&str] = &["hour", "honor", "honour", "honest", "heir"];

/// Glue placed between two short sentences when they are merged.
pub(crate) const JOIN_CONNECTORS: &[&str] = &[
    ", and", ", while", ", whereas", ". Additionally,", ". Moreover,", ". Furthermore,",
];

/// Openers for the second half of a split sentence.
pub(crate) const SPLIT_CONNECTORS: &[&str] = &["Moreover,", "Additionally,", "Furthermore,", "Consequently,"];

/// Words a long sentence may be broken at. The word itself is dropped.
pub(crate) const SPLIT_CONJUNCTIONS: &[&str] = &["and", "but", "or", "which", "where", "while", "whereas"];

pub(crate) const INTERJECTIONS: &[&str] = &[
    "This is significant.", "This matters.", "This is key.", "This stands out.", "This is crucial.",
];

pub(crate) const PARENTHETICALS: &[&str] = &[
    "(as noted)", "(indeed)", "(clearly)", "(obviously)", "(naturally)", "(of course)",
];
