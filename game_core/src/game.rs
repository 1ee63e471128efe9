use hecs::World;

use crate::audio::{AudioSink, Tone};
use crate::clock::SimClock;
use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::map::GameMap;
use crate::render::{draw_frame, Color, RenderSurface};
use crate::resources::{Events, GameEvent, GameRng, InputState, Score};
use crate::systems::{advance_particles, populate_starfield, scroll_stars, spawn_particles};
use crate::{create_ball, create_paddle, step};

/// Receives score and win notifications, owns whatever UI shows them
pub trait Presenter {
    fn score_updated(&mut self, score: Score);
    fn game_won(&mut self, winner: Side);
}

/// Presenter that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPresenter;

impl Presenter for NoPresenter {
    fn score_updated(&mut self, _score: Score) {}
    fn game_won(&mut self, _winner: Side) {}
}

/// One game session: every piece of state the frame loop mutates
pub struct Game {
    world: World,
    map: GameMap,
    config: Config,
    score: Score,
    events: Events,
    rng: GameRng,
    clock: SimClock,
    paused: bool,
    winner: Option<Side>,
    last_pause_toggle_ms: Option<f64>,
    pause_held: bool,
}

impl Game {
    pub fn new(config: Config, width: f32, height: f32, seed: u64) -> Self {
        let mut game = Self {
            world: World::new(),
            map: GameMap::new(width, height),
            clock: SimClock::from_config(&config),
            config,
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            paused: false,
            winner: None,
            last_pause_toggle_ms: None,
            pause_held: false,
        };
        game.populate();
        log::info!("New game on a {}x{} surface", width, height);
        game
    }

    fn populate(&mut self) {
        create_paddle(&mut self.world, Side::Left, &self.map, &self.config);
        create_paddle(&mut self.world, Side::Right, &self.map, &self.config);

        let mut ball = Ball::new(self.map.ball_spawn(), glam::Vec2::ZERO, self.config.ball_radius);
        ball.serve(self.map.ball_spawn(), &self.config, &mut self.rng);
        create_ball(&mut self.world, ball.pos, ball.vel, ball.radius);

        populate_starfield(&mut self.world, &self.map, &mut self.rng, &self.config);
    }

    /// Back to a fresh 0-0 game on the current surface
    pub fn restart(&mut self) {
        self.world.clear();
        self.events.clear();
        self.score = Score::new();
        self.clock.reset();
        self.paused = false;
        self.winner = None;
        self.last_pause_toggle_ms = None;
        self.pause_held = false;
        self.populate();
        log::info!("Game restarted");
    }

    /// New surface size, only the paddles' resting X follows it
    pub fn resize(&mut self, width: f32, height: f32) {
        self.map.resize(width, height);
        for (_e, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.x = self.map.paddle_x(paddle.side, self.config.paddle_inset);
        }
        log::debug!("Surface resized to {}x{}", width, height);
    }

    /// Flip the pause flag unless the last flip was within the debounce window
    pub fn request_pause_toggle(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_pause_toggle_ms {
            if now_ms - last <= self.config.pause_debounce_ms {
                return false;
            }
        }
        self.paused = !self.paused;
        self.last_pause_toggle_ms = Some(now_ms);
        log::info!("Game {}", if self.paused { "paused" } else { "resumed" });
        true
    }

    /// Run the fixed steps due at `now_ms`, returns how many were simulated
    pub fn update<A, P>(&mut self, now_ms: f64, input: &InputState, audio: &mut A, presenter: &mut P) -> u32
    where
        A: AudioSink + ?Sized,
        P: Presenter + ?Sized,
    {
        if input.pause && !self.pause_held {
            self.request_pause_toggle(now_ms);
        }
        self.pause_held = input.pause;

        let due = self.clock.advance(now_ms);
        let mut simulated = 0;
        for _ in 0..due {
            // Time still drains while halted so resuming doesn't replay it
            if self.paused || self.winner.is_some() {
                continue;
            }
            self.tick(input, audio, presenter);
            simulated += 1;
        }
        simulated
    }

    fn tick<A, P>(&mut self, input: &InputState, audio: &mut A, presenter: &mut P)
    where
        A: AudioSink + ?Sized,
        P: Presenter + ?Sized,
    {
        step(
            &mut self.world,
            &self.map,
            &self.config,
            input,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );

        let emitted: Vec<GameEvent> = self.events.drain().collect();
        for event in emitted {
            match event {
                GameEvent::WallBounce { pos } => {
                    audio.play(Tone::WALL_BOUNCE);
                    spawn_particles(
                        &mut self.world,
                        &mut self.rng,
                        &self.config,
                        pos,
                        Color::CYAN,
                        self.config.wall_burst,
                    );
                }
                GameEvent::PaddleHit { pos, .. } => {
                    audio.play(Tone::PADDLE_HIT);
                    spawn_particles(
                        &mut self.world,
                        &mut self.rng,
                        &self.config,
                        pos,
                        Color::CYAN,
                        self.config.paddle_burst,
                    );
                }
                GameEvent::Scored { score, .. } => presenter.score_updated(score),
                GameEvent::Won { winner } => {
                    if self.winner.is_none() {
                        self.winner = Some(winner);
                        log::info!("{:?} wins {}-{}", winner, self.score.left, self.score.right);
                        presenter.game_won(winner);
                    }
                }
            }
        }

        advance_particles(&mut self.world, self.config.particle_decay);
        scroll_stars(&mut self.world, &self.map, &mut self.rng);
    }

    pub fn draw<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        draw_frame(surface, &self.world, &self.map, self.paused);
    }

    /// One host frame: simulate whatever is due, then draw
    pub fn frame<S, A, P>(&mut self, now_ms: f64, input: &InputState, surface: &mut S, audio: &mut A, presenter: &mut P) -> u32
    where
        S: RenderSurface + ?Sized,
        A: AudioSink + ?Sized,
        P: Presenter + ?Sized,
    {
        let simulated = self.update(now_ms, input, audio, presenter);
        self.draw(surface);
        simulated
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn map(&self) -> &GameMap {
        &self.map
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }
}
