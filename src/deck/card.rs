use std::fmt;
use uuid::Uuid;

/// Opaque card identity, unique for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(Uuid);

impl CardId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cosmetic card background. Assigned by batch position, never by content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardStyle {
    Rose,
    Indigo,
    Cyan,
    Teal,
    Amber,
    Orange,
}

/// Style palette cycled over a freshly generated batch.
pub const PALETTE: [CardStyle; 6] = [
    CardStyle::Rose,
    CardStyle::Indigo,
    CardStyle::Cyan,
    CardStyle::Teal,
    CardStyle::Amber,
    CardStyle::Orange,
];

impl CardStyle {
    /// Style for the card at `index` within its batch.
    pub fn for_index(index: usize) -> Self {
        PALETTE[index % PALETTE.len()]
    }
}

/// One question/answer trivia unit.
///
/// Text fields are fixed at construction; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    id: CardId,
    topic: String,
    question: String,
    answer: String,
    style: CardStyle,
}

impl Card {
    pub fn new(
        topic: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
        style: CardStyle,
    ) -> Self {
        Self {
            id: CardId::new(),
            topic: topic.into(),
            question: question.into(),
            answer: answer.into(),
            style,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn style(&self) -> CardStyle {
        self.style
    }
}

/// Build a batch of cards sharing `topic`, styled by position.
pub fn build_deck<I, Q, A>(topic: &str, facts: I) -> Vec<Card>
where
    I: IntoIterator<Item = (Q, A)>,
    Q: Into<String>,
    A: Into<String>,
{
    facts
        .into_iter()
        .enumerate()
        .map(|(index, (question, answer))| {
            Card::new(topic, question, answer, CardStyle::for_index(index))
        })
        .collect()
}
