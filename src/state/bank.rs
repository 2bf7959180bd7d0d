//! Question bank selection, depletion and pruning

use super::GameState;
use crate::question::Question;
use crate::types::{Difficulty, QuestionId};
use rand::Rng;

impl GameState {
    /// File a question under its category and difficulty.
    pub(crate) fn insert_question(&mut self, question: Question) {
        self.bank
            .entry(question.category().to_string())
            .or_default()
            .entry(question.difficulty())
            .or_default()
            .push(question);
    }

    /// Categories that still hold at least one question, as a fresh list.
    ///
    /// Always collected anew so callers never iterate the bank while a
    /// removal mutates it.
    pub fn available_categories(&self) -> Vec<String> {
        self.bank
            .iter()
            .filter(|(_, difficulties)| difficulties.values().any(|bucket| !bucket.is_empty()))
            .map(|(category, _)| category.clone())
            .collect()
    }

    /// Difficulties with a non-empty bucket for the given category.
    pub fn available_difficulties(&self, category: &str) -> Vec<Difficulty> {
        match self.bank.get(category) {
            Some(difficulties) => difficulties
                .iter()
                .filter(|(_, bucket)| !bucket.is_empty())
                .map(|(difficulty, _)| *difficulty)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Pick uniformly at random among the questions remaining in a bucket.
    pub fn draw_question(
        &self,
        category: &str,
        difficulty: Difficulty,
        rng: &mut impl Rng,
    ) -> Option<Question> {
        let bucket = self.bank.get(category)?.get(&difficulty)?;
        if bucket.is_empty() {
            return None;
        }
        let index = rng.random_range(0..bucket.len());
        Some(bucket[index].clone())
    }

    /// Remove a consumed question from its bucket by id, then prune empties.
    /// Returns true if the question was found and removed.
    pub fn remove_question(
        &mut self,
        category: &str,
        difficulty: Difficulty,
        id: &QuestionId,
    ) -> bool {
        let Some(bucket) = self
            .bank
            .get_mut(category)
            .and_then(|difficulties| difficulties.get_mut(&difficulty))
        else {
            return false;
        };

        if let Some(pos) = bucket.iter().position(|q| q.id() == id) {
            bucket.remove(pos);
            tracing::info!("Removed question {} from {}/{}", id, category, difficulty);
            self.prune(category, difficulty);
            true
        } else {
            false
        }
    }

    /// Drop a category whose difficulty buckets have all run dry.
    pub fn remove_category(&mut self, category: &str) {
        if self.bank.remove(category).is_some() {
            tracing::info!("Removed exhausted category {}", category);
        }
    }

    /// True once no questions remain anywhere.
    pub fn is_exhausted(&self) -> bool {
        self.bank
            .values()
            .all(|difficulties| difficulties.values().all(|bucket| bucket.is_empty()))
    }

    /// Total questions remaining in the bank.
    pub fn question_count(&self) -> usize {
        self.bank
            .values()
            .flat_map(|difficulties| difficulties.values())
            .map(|bucket| bucket.len())
            .sum()
    }

    /// Drop the difficulty entry if its bucket emptied, then the category if
    /// it has no difficulties left.
    fn prune(&mut self, category: &str, difficulty: Difficulty) {
        if let Some(difficulties) = self.bank.get_mut(category) {
            if difficulties
                .get(&difficulty)
                .is_some_and(|bucket| bucket.is_empty())
            {
                difficulties.remove(&difficulty);
                tracing::debug!("Pruned empty bucket {}/{}", category, difficulty);
            }
            if difficulties.is_empty() {
                self.bank.remove(category);
                tracing::debug!("Pruned empty category {}", category);
            }
        }
    }
}
