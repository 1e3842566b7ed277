use glam::Vec2;
use tracing::info;

use crate::draw::{Color, Surface};
use crate::fsm::{GameFsm, Phase, PhaseAction};
use crate::host::{Flow, Game};
use crate::input::{Input, Key};
use crate::systems::*;
use crate::{hud, Ball, Config, Events, GameRng, Racket, Score, Side};

/// The whole game: phase, score, ball and racket
pub struct Fronton {
    pub score: Score,
    pub ball: Ball,
    pub racket: Racket,
    fsm: GameFsm,
    config: Config,
    rng: GameRng,
    events: Events,
}

impl Fronton {
    /// Create an initialized game
    pub fn new(config: Config, mut rng: GameRng) -> Self {
        let ball = Ball::spawn(&config, &mut rng);
        let racket = Racket::centered(&config);
        let mut game = Self {
            score: Score::new(),
            ball,
            racket,
            fsm: GameFsm::new(),
            config,
            rng,
            events: Events::new(),
        };
        game.initialize();
        game
    }

    /// Default config with a deterministic RNG
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Config::new(), GameRng::new(seed))
    }

    pub fn phase(&self) -> Phase {
        self.fsm.phase()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// What happened during the last tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Winner once the match is over
    pub fn winner(&self) -> Option<Side> {
        if self.fsm.is_over() {
            self.score.winner(self.config.win_score)
        } else {
            None
        }
    }

    fn play_tick(&mut self, input: &dyn Input) {
        move_racket(&mut self.racket, input);
        move_ball(&mut self.ball);

        if check_collisions(&mut self.ball, &self.config, &mut self.events) {
            return;
        }

        check_racket(
            &mut self.ball,
            &self.racket,
            &mut self.score,
            &self.config,
            &mut self.rng,
            &mut self.events,
        );

        if let Some(winner) = self.score.winner(self.config.win_score) {
            self.events.game_over = true;
            self.fsm.transition(PhaseAction::Win);
            info!(
                ?winner,
                player = self.score.player,
                cpu = self.score.cpu,
                "match over"
            );
        }
    }

    fn draw_racket(&self, surface: &mut dyn Surface) {
        let origin = Vec2::new(self.racket.x as f32, self.config.racket_y() as f32);
        let size = Vec2::new(
            self.config.racket_width as f32,
            self.config.racket_height as f32,
        );
        surface.fill_rect(origin, size, Color::WHITE);
    }
}

impl Game for Fronton {
    fn initialize(&mut self) {
        self.fsm = GameFsm::new();
        self.score = Score::new();
        self.ball = Ball::spawn(&self.config, &mut self.rng);
        self.racket = Racket::centered(&self.config);
        self.events.clear();
        info!(ball = ?self.ball.pos, racket = self.racket.x, "game initialized");
    }

    fn update(&mut self, input: &dyn Input) -> Flow {
        self.events.clear();

        if input.is_pressed(Key::Quit) {
            info!(phase = ?self.fsm.phase(), "quit requested");
            return Flow::Quit;
        }

        match self.fsm.phase() {
            Phase::NotStarted => {
                if input.is_pressed(Key::Start) {
                    self.fsm.transition(PhaseAction::Start);
                }
            }
            Phase::Over => {
                if input.is_pressed(Key::Start) {
                    self.fsm.transition(PhaseAction::Restart);
                    self.initialize();
                }
            }
            Phase::Playing => self.play_tick(input),
        }

        Flow::Continue
    }

    fn render(&self, surface: &mut dyn Surface) {
        let radius = self.config.ball_radius as f32;

        match self.fsm.phase() {
            Phase::NotStarted => {
                surface.fill_circle(self.config.field_center().as_vec2(), radius, Color::GREEN);
                self.draw_racket(surface);
                surface.debug_print(&hud::intro_message(self.config.win_score));
            }
            Phase::Over => {
                let winner = self.winner().unwrap_or(Side::Cpu);
                surface.debug_print(hud::game_over_message(winner));
                surface.debug_print(hud::RESTART_HINT);
            }
            Phase::Playing => {
                surface.fill_circle(self.ball.pos.as_vec2(), radius, Color::GREEN);
                self.draw_racket(surface);
                surface.debug_print(&hud::score_line(&self.score));
            }
        }
    }
}
