// Static copy for the informational pages

/// A titled paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub title: &'static str,
    pub body: &'static str,
}

/// "The Science" page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SciencePage {
    pub heading: &'static str,
    pub title: &'static str,
    pub lede: &'static str,
    pub pillars_heading: &'static str,
    pub pillars: [Topic; 3],
    pub comparison_heading: &'static str,
    pub comparison: [Topic; 2],
    pub impact_kicker: &'static str,
    pub impact: Topic,
    pub call_to_action: &'static str,
}

pub const SCIENCE: SciencePage = SciencePage {
    heading: "The Science of Montessori",
    title: "The Foundation of Tomorrow",
    lede: "How purposeful activity in early childhood builds the cognitive engines of successful adults.",
    pillars_heading: "The Three Pillars of Executive Function",
    pillars: [
        Topic {
            title: "Inhibitory Control",
            body: "Montessori tasks require waiting, precise movements, and following sequences. This \"effortful control\" is the antidote to impulsivity, teaching children to stop and think before they act.",
        },
        Topic {
            title: "Cognitive Flexibility",
            body: "When a child encounters a \"problem\" (like a spill or a puzzle piece that doesn't fit), Montessori encourages independent problem-solving. This builds the mental agility needed to switch perspectives and adapt to change.",
        },
        Topic {
            title: "Working Memory",
            body: "Multi-step activities (like washing a table or baking) require holding information in mind while performing a task. This strengthens the brain's ability to manage complex, long-term projects later in life.",
        },
    ],
    comparison_heading: "Montessori vs. Traditional Methods",
    comparison: [
        Topic {
            title: "Social Regulation",
            body: "Studies show Montessori children are better at negotiating conflicts and exhibit higher levels of social justice and empathy compared to traditional school peers.",
        },
        Topic {
            title: "Self-Correction",
            body: "By using \"Control of Error\" materials, children learn that mistakes are feedback, not failures. This builds high resilience and self-reliance.",
        },
    ],
    impact_kicker: "The Long-Term Impact",
    impact: Topic {
        title: "Regulated, Well-Rounded Adults",
        body: "Research indicates that the early development of Executive Function is a better predictor of success than IQ. Montessori alumni often show higher levels of intrinsic motivation, creative thinking, and emotional stability in adulthood.",
    },
    call_to_action: "Explore Activities",
};

/// "Our Philosophy" modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhilosophyNote {
    pub title: &'static str,
    pub quote: &'static str,
    pub source: &'static str,
    pub dismiss: &'static str,
}

pub const PHILOSOPHY: PhilosophyNote = PhilosophyNote {
    title: "Our Philosophy",
    quote: "Education is a natural process carried out by the child and is not acquired by listening to words but by experiences in the environment.",
    source: "Curated via CDC & Montessori Standards.",
    dismiss: "I Understand",
};

/// Footnotes shown under the shopping list and bundle pages
pub const SHOPPING_NOTE: &str = "Note: We recommend sourcing natural, sustainable items whenever possible to align with Montessori principles.";
pub const AFFILIATE_NOTE: &str =
    "Selected items may earn us a small commission at no extra cost to you.";
pub const BUNDLES_COMING_NEXT: &str =
    "Curating specialized items for tactile and auditory refinement.";
