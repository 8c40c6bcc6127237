//! Session state resource.
//!
//! Created once per play-through, mutated only by simulation systems, read
//! by presentation (HUD) and by the session orchestrator to decide screen
//! transitions. Score and scrolled height are monotonically non-decreasing
//! while the session is running; once the phase leaves [`SessionPhase::Running`]
//! the session is terminal and all mutating methods become no-ops.

use bevy_ecs::prelude::Resource;

/// Lifecycle phase of one play-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionPhase {
    #[default]
    Running,
    NextLevel,
    GameOver,
}

/// Authoritative per-session gameplay state.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Session {
    height_so_far: f32,
    score: u32,
    lives: u32,
    phase: SessionPhase,
}

impl Session {
    /// Start a fresh session in the running phase.
    pub fn new(lives: u32) -> Self {
        Session {
            height_so_far: 0.0,
            score: 0,
            lives,
            phase: SessionPhase::Running,
        }
    }

    pub fn height_so_far(&self) -> f32 {
        self.height_so_far
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    /// Raise the scrolled height to `height` if it is a new maximum.
    pub fn raise_height(&mut self, height: f32) {
        if self.is_running() && height > self.height_so_far {
            self.height_so_far = height;
        }
    }

    /// Add collected points to the score.
    pub fn add_score(&mut self, points: u32) {
        if self.is_running() {
            self.score += points;
        }
    }

    /// Remove one life; returns the number of lives remaining.
    pub fn lose_life(&mut self) -> u32 {
        if self.is_running() {
            self.lives = self.lives.saturating_sub(1);
        }
        self.lives
    }

    /// Move to a terminal phase. Returns true if the transition happened,
    /// false if the session had already ended.
    pub fn finish(&mut self, phase: SessionPhase) -> bool {
        if self.is_running() && phase != SessionPhase::Running {
            self.phase = phase;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_is_monotonic() {
        let mut session = Session::new(1);
        session.raise_height(10.0);
        session.raise_height(5.0);
        assert_eq!(session.height_so_far(), 10.0);
    }

    #[test]
    fn finish_is_terminal() {
        let mut session = Session::new(1);
        assert!(session.finish(SessionPhase::NextLevel));
        assert!(!session.finish(SessionPhase::GameOver));
        assert_eq!(session.phase(), SessionPhase::NextLevel);
    }

    #[test]
    fn terminal_session_ignores_mutation() {
        let mut session = Session::new(2);
        session.finish(SessionPhase::GameOver);
        session.add_score(10);
        session.raise_height(50.0);
        session.lose_life();
        assert_eq!(session.score(), 0);
        assert_eq!(session.height_so_far(), 0.0);
        assert_eq!(session.lives(), 2);
    }

    #[test]
    fn lose_life_saturates_at_zero() {
        let mut session = Session::new(1);
        assert_eq!(session.lose_life(), 0);
        assert_eq!(session.lose_life(), 0);
    }
}
