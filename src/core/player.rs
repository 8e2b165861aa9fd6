//! Player identity and cumulative score

/// A named player whose score carries across rounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    score: u32,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Add points to the score
    pub fn update_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}
