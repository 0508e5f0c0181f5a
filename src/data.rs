// src/data.rs

use crate::error::CatalogError;
use crate::model::{Difficulty, DifficultyFilter, OPTION_COUNT, Question, Topic, TopicFilter};
use std::collections::HashSet;
use std::sync::OnceLock;

const EMBEDDED_BANK: &str = include_str!("data/quiz_questions.yaml");

/// The fixed question bank. Never mutated after loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    /// Builds a catalog, checking id uniqueness and answer indices.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(questions.len());
        for q in &questions {
            if !seen.insert(q.id) {
                return Err(CatalogError::DuplicateId(q.id));
            }
            if usize::from(q.correct_index) >= OPTION_COUNT {
                return Err(CatalogError::AnswerOutOfRange {
                    id: q.id,
                    index: q.correct_index,
                });
            }
        }
        Ok(Self { questions })
    }

    pub fn from_yaml(source: &str) -> Result<Self, CatalogError> {
        let questions: Vec<Question> = serde_yaml::from_str(source)?;
        Self::new(questions)
    }

    /// Bank compiled into the binary, parsed once per process.
    pub fn embedded() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            let catalog = Catalog::from_yaml(EMBEDDED_BANK)
                .expect("the embedded question bank must be valid");
            log::debug!("loaded {} questions from the embedded bank", catalog.len());
            catalog
        })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn by_topic(&self, topic: Topic) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.topic == topic)
    }

    pub fn by_difficulty(&self, difficulty: Difficulty) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.difficulty == difficulty)
    }

    /// Catalog entries matching both filters, in catalog order.
    pub fn filtered(&self, topic: TopicFilter, difficulty: DifficultyFilter) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| topic.matches(&q.topic) && difficulty.matches(&q.difficulty))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}
