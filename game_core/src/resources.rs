use glam::Vec2;

use crate::components::{PaddleIntent, Side};

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // Player 1
    pub right: u8, // Player 2
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Something the simulation did during a step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    WallBounce { pos: Vec2 },
    PaddleHit { side: Side, pos: Vec2 },
    Scored { side: Side, score: Score },
    Won { winner: Side },
}

/// Events emitted by the simulation, in order
#[derive(Debug, Clone, Default)]
pub struct Events {
    queue: Vec<GameEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.queue.push(event);
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.queue.iter()
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.queue.drain(..)
    }
}

/// Snapshot of held controls, filled in by the host's input layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
    pub pause: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intent(&self, side: Side) -> PaddleIntent {
        match side {
            Side::Left => PaddleIntent::from_keys(self.left_up, self.left_down),
            Side::Right => PaddleIntent::from_keys(self.right_up, self.right_down),
        }
    }
}
