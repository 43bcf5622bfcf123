//! Game state module - owns the whole simulation
//!
//! This module ties together the paddle, ball, block grid, launch RNG and
//! session counters. It handles input-driven paddle movement, ball motion,
//! collision response and win/loss detection. Rendering lives in
//! [`crate::render`].

use log::{debug, info};

use crate::config::GameConfig;
use crate::entities::{build_blocks, Ball, Block, Paddle};
use crate::physics::paddle_bounce;
use crate::rng::LaunchRng;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    width: u16,
    height: u16,
    /// Surface size to adopt at the next reset.
    pending_size: Option<(u16, u16)>,
    paddle: Paddle,
    ball: Ball,
    /// Creation order (row-major, top row first).
    blocks: Vec<Block>,
    score: u32,
    lives: u32,
    phase: Phase,
    /// Advanced once per simulated frame; drives ball animation.
    frame: u64,
    rng: LaunchRng,
}

impl GameState {
    /// Create a new game and reset it to its starting layout
    pub fn new(config: GameConfig) -> Self {
        let mut state = Self {
            width: config.width,
            height: config.height,
            pending_size: None,
            paddle: Paddle::new(config.paddle_width, config.paddle_speed),
            ball: Ball::new(0.0, 0.0, config.ball_speed),
            blocks: Vec::new(),
            score: 0,
            lives: STARTING_LIVES,
            phase: Phase::Playing,
            frame: 0,
            rng: LaunchRng::new(config.seed),
            config,
        };
        info!("new game: seed {}", state.rng.seed());
        state.reset();
        state
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn blocks_remaining(&self) -> usize {
        self.blocks.iter().filter(|b| !b.destroyed).count()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Record a new surface size. It takes effect at the next [`reset`](Self::reset);
    /// a game in progress keeps the size it started with.
    pub fn request_resize(&mut self, width: u16, height: u16) {
        if (width, height) == (self.width, self.height) {
            self.pending_size = None;
        } else {
            self.pending_size = Some((width, height));
        }
    }

    /// Start a fresh game: paddle, ball, blocks and session counters are all rebuilt.
    pub fn reset(&mut self) {
        if let Some((width, height)) = self.pending_size.take() {
            self.width = width;
            self.height = height;
        }

        let paddle_y = self.height.saturating_sub(2) as f64;
        self.paddle = Paddle {
            x: (self.width.saturating_sub(self.config.paddle_width) / 2) as f64,
            y: paddle_y,
            ..Paddle::new(self.config.paddle_width, self.config.paddle_speed)
        };
        self.ball = Ball::new((self.width / 2) as f64, paddle_y - 1.0, self.config.ball_speed);
        self.blocks = build_blocks(self.width);

        self.score = 0;
        self.lives = STARTING_LIVES;
        self.phase = Phase::Playing;
        self.frame = 0;

        info!(
            "reset: surface {}x{}, {} blocks",
            self.width,
            self.height,
            self.blocks.len()
        );
    }

    /// Apply one frame's input.
    ///
    /// While playing, only paddle movement is accepted. Once the game is won or
    /// lost, only restart and quit are; quit is reported to the caller rather
    /// than acted on.
    pub fn handle_input(&mut self, input: Option<GameAction>, elapsed_secs: f64) -> LoopSignal {
        let Some(action) = input else {
            return LoopSignal::Continue;
        };

        if self.phase.is_playing() {
            let step = self.paddle.speed * elapsed_secs;
            match action {
                GameAction::MoveLeft => self.paddle.shift(-step, self.width),
                GameAction::MoveRight => self.paddle.shift(step, self.width),
                GameAction::Restart | GameAction::Quit => {}
            }
            return LoopSignal::Continue;
        }

        match action {
            GameAction::Restart => {
                self.reset();
                LoopSignal::Continue
            }
            GameAction::Quit => LoopSignal::Quit,
            GameAction::MoveLeft | GameAction::MoveRight => LoopSignal::Continue,
        }
    }

    /// Advance the simulation by `elapsed_secs`. No-op unless playing.
    pub fn update(&mut self, elapsed_secs: f64) {
        if !self.phase.is_playing() {
            return;
        }
        self.frame = self.frame.wrapping_add(1);

        let width = self.width as f64;
        let height = self.height as f64;
        let travel = self.ball.speed * elapsed_secs;
        let mut new_x = self.ball.x + self.ball.dx * travel;
        let mut new_y = self.ball.y + self.ball.dy * travel;

        // Side walls reflect; the angle is kept.
        if new_x < 0.0 || new_x >= width {
            self.ball.dx = -self.ball.dx;
            new_x = new_x.clamp(0.0, (width - 1.0).max(0.0));
        }

        if new_y < 0.0 {
            self.ball.dy = -self.ball.dy;
            new_y = 0.0;
        }

        let paddle_y = self.paddle.y;
        if self.ball.y < paddle_y && new_y >= paddle_y && self.paddle.spans(new_x) {
            let (dx, dy) = paddle_bounce(self.paddle.hit_position(new_x));
            self.ball.dx = dx;
            self.ball.dy = dy;
            new_y = paddle_y - 1.0;
        }

        // A miss replaces this frame's motion entirely.
        if new_y >= height {
            self.lose_ball();
            return;
        }

        self.ball.x = new_x;
        self.ball.y = new_y;

        self.collide_blocks();

        if self.blocks.iter().all(|b| b.destroyed) {
            self.phase = Phase::Won;
            info!("won: score {}", self.score);
        }
    }

    fn lose_ball(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.phase = Phase::Lost;
            info!("lost: score {}", self.score);
            return;
        }

        let (dx, dy) = self.rng.next_launch();
        self.ball.x = self.paddle.center_x();
        self.ball.y = self.paddle.y - 1.0;
        self.ball.dx = dx;
        self.ball.dy = dy;
        debug!(
            "miss: {} lives left, relaunch ({:.3}, {:.3})",
            self.lives, dx, dy
        );
    }

    /// Destroy at most one block under the ball, first in creation order.
    fn collide_blocks(&mut self) -> Option<usize> {
        let (col, row) = self.ball.cell();
        let index = self
            .blocks
            .iter()
            .position(|b| !b.destroyed && b.covers(col, row))?;

        let block = &mut self.blocks[index];
        block.destroyed = true;
        self.score += BLOCK_SCORE;
        self.ball.dy = -self.ball.dy;
        debug!("block {} at ({}, {}) destroyed", index, block.x, block.y);
        Some(index)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::unit_length;
    use std::f64::consts::FRAC_1_SQRT_2;

    const EPS: f64 = 1e-9;

    fn small_game() -> GameState {
        GameState::new(GameConfig::new(40, 20).with_paddle_width(8))
    }

    /// Park the ball mid-field, moving straight up, away from blocks and paddle.
    fn park_ball(state: &mut GameState) {
        state.ball.x = 20.0;
        state.ball.y = 12.0;
        state.ball.dx = 0.0;
        state.ball.dy = -1.0;
    }

    #[test]
    fn test_reset_layout() {
        let state = small_game();

        assert_eq!(state.paddle.x, 16.0);
        assert_eq!(state.paddle.y, 18.0);
        assert_eq!(state.ball.x, 20.0);
        assert_eq!(state.ball.y, state.paddle.y - 1.0);
        assert!((state.ball.dx - FRAC_1_SQRT_2).abs() < EPS);
        assert!((state.ball.dy + FRAC_1_SQRT_2).abs() < EPS);

        assert_eq!(state.blocks.len(), 13 * 5);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.frame, 0);
    }

    #[test]
    fn test_paddle_moves_by_speed_times_elapsed() {
        let mut state = small_game();
        state.paddle.speed = 100.0;

        state.handle_input(Some(GameAction::MoveLeft), 0.05);
        assert!((state.paddle.x - 11.0).abs() < EPS);

        state.handle_input(Some(GameAction::MoveRight), 0.1);
        assert!((state.paddle.x - 21.0).abs() < EPS);
    }

    #[test]
    fn test_paddle_clamped_to_surface() {
        let mut state = small_game();

        state.handle_input(Some(GameAction::MoveLeft), 10.0);
        assert_eq!(state.paddle.x, 0.0);

        state.handle_input(Some(GameAction::MoveRight), 10.0);
        assert_eq!(state.paddle.x, 32.0);
    }

    #[test]
    fn test_restart_and_quit_ignored_while_playing() {
        let mut state = small_game();
        state.score = 30;

        assert_eq!(
            state.handle_input(Some(GameAction::Quit), 0.01),
            LoopSignal::Continue
        );
        assert_eq!(
            state.handle_input(Some(GameAction::Restart), 0.01),
            LoopSignal::Continue
        );
        assert_eq!(state.score, 30);
        assert_eq!(state.handle_input(None, 0.01), LoopSignal::Continue);
    }

    #[test]
    fn test_finished_game_accepts_only_restart_and_quit() {
        let mut state = small_game();
        state.phase = Phase::Lost;
        state.score = 50;
        let paddle_x = state.paddle.x;

        assert_eq!(
            state.handle_input(Some(GameAction::MoveLeft), 1.0),
            LoopSignal::Continue
        );
        assert_eq!(state.paddle.x, paddle_x);

        assert_eq!(
            state.handle_input(Some(GameAction::Quit), 0.0),
            LoopSignal::Quit
        );

        state.handle_input(Some(GameAction::Restart), 0.0);
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
    }

    #[test]
    fn test_side_wall_reflects_and_clamps() {
        let mut state = small_game();
        state.ball.x = 0.0;
        state.ball.y = 12.0;
        state.ball.dx = -0.5;
        state.ball.dy = 0.0;

        state.update(1.0);

        assert_eq!(state.ball.dx, 0.5);
        assert_eq!(state.ball.x, 0.0);
        assert_eq!(state.ball.y, 12.0);
    }

    #[test]
    fn test_right_wall_clamps_inside_surface() {
        let mut state = small_game();
        state.ball.x = 39.5;
        state.ball.y = 12.0;
        state.ball.dx = 1.0;
        state.ball.dy = 0.0;

        state.update(1.0);

        assert_eq!(state.ball.dx, -1.0);
        assert_eq!(state.ball.x, 39.0);
    }

    #[test]
    fn test_top_wall_reflects() {
        let mut state = small_game();
        state.ball.x = 20.0;
        state.ball.y = 1.0;
        state.ball.dx = 0.0;
        state.ball.dy = -1.0;

        state.update(0.5);

        assert_eq!(state.ball.dy, 1.0);
        assert_eq!(state.ball.y, 0.0);
    }

    #[test]
    fn test_center_paddle_hit_goes_straight_up() {
        let mut state = small_game();
        // Paddle spans [16, 24); center column is 20.
        state.ball.x = 20.0;
        state.ball.y = 17.5;
        state.ball.dx = 0.0;
        state.ball.dy = 1.0;

        state.update(0.05);

        assert!(state.ball.dx.abs() < EPS);
        assert!((state.ball.dy + 1.0).abs() < EPS);
        assert_eq!(state.ball.y, state.paddle.y - 1.0);
        assert_eq!(state.lives, 3);
    }

    #[test]
    fn test_paddle_halves_steer() {
        let mut state = small_game();
        state.ball.x = 16.5;
        state.ball.y = 17.5;
        state.ball.dx = 0.0;
        state.ball.dy = 1.0;
        state.update(0.05);
        assert!(state.ball.dx < 0.0);
        assert!(state.ball.dy < 0.0);

        let mut state = small_game();
        state.ball.x = 23.5;
        state.ball.y = 17.5;
        state.ball.dx = 0.0;
        state.ball.dy = 1.0;
        state.update(0.05);
        assert!(state.ball.dx > 0.0);
        assert!(state.ball.dy < 0.0);
    }

    #[test]
    fn test_ball_beside_paddle_passes_row() {
        let mut state = small_game();
        state.ball.x = 5.0;
        state.ball.y = 17.5;
        state.ball.dx = 0.0;
        state.ball.dy = 1.0;

        state.update(0.05);

        assert_eq!(state.ball.dy, 1.0);
        assert!(state.ball.y > state.paddle.y);
    }

    #[test]
    fn test_miss_respawns_above_paddle_and_discards_motion() {
        let mut state = small_game();
        state.ball.x = 2.0;
        state.ball.y = 19.5;
        state.ball.dx = 0.0;
        state.ball.dy = 1.0;

        state.update(0.1);

        assert_eq!(state.lives, 2);
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.ball.x, state.paddle.x + 4.0);
        assert_eq!(state.ball.y, state.paddle.y - 1.0);
        assert!(state.ball.dy < 0.0);
        assert!((state.ball.direction_len() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_respawn_is_deterministic_per_seed() {
        let run = |seed| {
            let mut state = GameState::new(GameConfig::new(40, 20).with_seed(seed));
            state.ball.x = 2.0;
            state.ball.y = 19.5;
            state.ball.dx = 0.0;
            state.ball.dy = 1.0;
            state.update(0.1);
            (state.ball.dx, state.ball.dy)
        };
        assert_eq!(run(11), run(11));
    }

    #[test]
    fn test_last_life_lost_freezes_game() {
        let mut state = small_game();
        state.lives = 1;
        state.ball.x = 2.0;
        state.ball.y = 19.5;
        state.ball.dx = 0.0;
        state.ball.dy = 1.0;

        state.update(0.1);

        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, Phase::Lost);
        // Position of the losing frame is not committed.
        assert_eq!(state.ball.y, 19.5);

        let ball = state.ball;
        let paddle = state.paddle;
        let frame = state.frame;
        for _ in 0..10 {
            state.update(0.5);
            state.handle_input(Some(GameAction::MoveRight), 0.5);
        }
        assert_eq!(state.ball, ball);
        assert_eq!(state.paddle, paddle);
        assert_eq!(state.frame, frame);
        assert_eq!(state.lives, 0);
    }

    #[test]
    fn test_block_hit_scores_and_reverses() {
        let mut state = small_game();
        state.ball.x = 4.5;
        state.ball.y = 8.2;
        state.ball.dx = 0.0;
        state.ball.dy = -1.0;

        // One cell up lands in row 7, column 4: block index 4 * 13 + 1.
        state.update(0.05);

        let hit = 4 * 13 + 1;
        assert!(state.blocks[hit].destroyed);
        assert_eq!(state.blocks.iter().filter(|b| b.destroyed).count(), 1);
        assert_eq!(state.score, 10);
        assert_eq!(state.ball.dy, 1.0);
    }

    #[test]
    fn test_destroyed_block_is_passed_through() {
        let mut state = small_game();
        state.blocks[0].destroyed = true;
        state.ball.x = 1.0;
        state.ball.y = 3.5;
        state.ball.dx = 0.0;
        state.ball.dy = -1.0;

        state.update(0.0);

        assert_eq!(state.score, 0);
        assert_eq!(state.ball.dy, -1.0);
    }

    #[test]
    fn test_first_block_in_creation_order_wins_ties() {
        let mut state = small_game();
        state.blocks.clear();
        for _ in 0..2 {
            state.blocks.push(Block {
                x: 0,
                y: 5,
                width: 3,
                color: ColorIndex::BlockA,
                destroyed: false,
            });
        }
        state.ball.x = 1.0;
        state.ball.y = 5.5;
        state.ball.dx = 0.0;
        state.ball.dy = -1.0;

        state.update(0.0);

        assert!(state.blocks[0].destroyed);
        assert!(!state.blocks[1].destroyed);
        assert_eq!(state.score, 10);
        assert_eq!(state.phase, Phase::Playing);
    }

    #[test]
    fn test_win_on_exactly_the_last_block() {
        let mut state = GameState::new(GameConfig::new(6, 20).with_paddle_width(2));
        let targets: Vec<(u16, u16)> = state.blocks.iter().map(|b| (b.x, b.y)).collect();
        assert_eq!(targets.len(), 10);

        for (i, (x, y)) in targets.iter().enumerate() {
            assert_eq!(state.phase, Phase::Playing, "won early at block {i}");
            state.ball.x = *x as f64 + 1.0;
            state.ball.y = *y as f64 + 0.5;
            state.ball.dx = 0.0;
            state.ball.dy = -1.0;
            state.update(0.0);
            assert_eq!(state.score, 10 * (i as u32 + 1));
        }

        assert_eq!(state.phase, Phase::Won);
        assert_eq!(state.score, 10 * targets.len() as u32);
        assert_eq!(state.blocks_remaining(), 0);

        let ball = state.ball;
        state.update(1.0);
        assert_eq!(state.ball, ball);
    }

    #[test]
    fn test_direction_stays_unit_through_play() {
        let mut state = small_game();
        for i in 0..5000 {
            let action = match i % 7 {
                0 => Some(GameAction::MoveLeft),
                3 => Some(GameAction::MoveRight),
                _ => None,
            };
            state.handle_input(action, 0.016);
            state.update(0.016);
            assert!((unit_length(state.ball.dx, state.ball.dy) - 1.0).abs() < 1e-9);
            if !state.phase.is_playing() {
                state.handle_input(Some(GameAction::Restart), 0.0);
            }
        }
    }

    #[test]
    fn test_resize_applies_on_reset_only() {
        let mut state = small_game();
        state.request_resize(60, 30);
        assert_eq!(state.width(), 40);
        assert_eq!(state.blocks.len(), 65);

        state.update(0.01);
        assert_eq!(state.width(), 40);

        state.reset();
        assert_eq!((state.width(), state.height()), (60, 30));
        assert_eq!(state.blocks.len(), 20 * 5);
        assert_eq!(state.paddle.y, 28.0);
    }

    #[test]
    fn test_update_advances_frame_counter() {
        let mut state = small_game();
        park_ball(&mut state);
        state.update(0.01);
        state.update(0.01);
        assert_eq!(state.frame, 2);
    }
}
