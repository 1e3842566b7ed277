use tracing::debug;

use crate::{accelerate, accelerate_and_reverse, Ball, Config, Events, GameRng, Racket, Score};

/// Decide a hit or a miss for a ball that has reached the racket band.
///
/// A hit speeds the ball up and sends it back upwards; a miss respawns it on
/// the spawn line with its velocity untouched.
pub fn check_racket(
    ball: &mut Ball,
    racket: &Racket,
    score: &mut Score,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) {
    if config.racket_span_contains(racket.x, ball.pos.x) {
        ball.vel.x = accelerate(ball.vel.x);
        ball.vel.y = accelerate_and_reverse(ball.vel.y);
        score.increment_player();
        events.racket_hit = true;
        debug!(pos = ?ball.pos, vel = ?ball.vel, player = score.player, "racket hit");
    } else {
        let missed_at = ball.pos;
        ball.respawn(config, rng);
        score.increment_cpu();
        events.missed = true;
        debug!(?missed_at, respawn = ?ball.pos, cpu = score.cpu, "racket missed");
    }
}
