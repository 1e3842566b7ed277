use fronton_core::*;
use glam::IVec2;

fn idle() -> InputState {
    InputState::new()
}

fn started(seed: u64) -> Fronton {
    let mut game = Fronton::with_seed(seed);
    assert_eq!(game.update(&InputState::pressed(Key::Start)), Flow::Continue);
    game
}

/// Put the ball one tick away from landing in the racket band at `x`
fn drop_ball_at(game: &mut Fronton, x: i32) {
    game.ball = Ball::new(IVec2::new(x, 582), IVec2::new(0, 3));
}

#[test]
fn test_start_phase_flow() {
    let mut game = Fronton::with_seed(1);
    assert_eq!(game.phase(), Phase::NotStarted);

    for _ in 0..10 {
        game.update(&idle());
    }
    assert_eq!(game.phase(), Phase::NotStarted, "Waits for start");

    game.update(&InputState::pressed(Key::Start));
    assert_eq!(game.phase(), Phase::Playing);

    // Holding start while playing changes nothing
    game.update(&InputState::pressed(Key::Start));
    assert_eq!(game.phase(), Phase::Playing);
}

#[test]
fn test_hit_anywhere_on_racket() {
    for racket_x in [-120, 0, 150, 300, 450] {
        for offset in [0, 1, 50, 99, 100] {
            let mut game = started(3);
            game.racket.x = racket_x;
            drop_ball_at(&mut game, racket_x + offset);

            game.update(&idle());

            assert_eq!(
                game.score,
                Score { player: 1, cpu: 0 },
                "racket {racket_x}, ball {}",
                racket_x + offset
            );
            assert!(game.events().racket_hit);
            assert!(game.ball.vel.y < 0, "Ball heads back up");
        }
    }
}

#[test]
fn test_miss_outside_racket() {
    for racket_x in [0, 150, 300] {
        for ball_x in [racket_x - 1, racket_x - 30, racket_x + 101, racket_x + 250] {
            let mut game = started(4);
            game.racket.x = racket_x;
            drop_ball_at(&mut game, ball_x);
            let vel = game.ball.vel;

            game.update(&idle());

            assert_eq!(game.score, Score { player: 0, cpu: 1 }, "ball {ball_x}");
            assert_eq!(game.ball.pos.y, 5, "Respawned on the spawn line");
            assert_eq!(game.ball.vel, vel);
            assert!(game.events().missed);
        }
    }
}

#[test]
fn test_left_wall_bounce_keeps_vy() {
    let mut game = started(5);
    game.ball = Ball::new(IVec2::new(7, 300), IVec2::new(-3, 4));

    game.update(&idle());

    assert_eq!(game.ball.pos, IVec2::new(4, 304));
    assert_eq!(game.ball.vel, IVec2::new(3, 4));
    assert!(game.events().wall_bounce);
}

#[test]
fn test_ceiling_bounce_keeps_vx() {
    let mut game = started(6);
    game.ball = Ball::new(IVec2::new(200, 8), IVec2::new(-3, -4));

    game.update(&idle());

    assert_eq!(game.ball.vel, IVec2::new(-3, 4));
    assert!(game.events().ceiling_bounce);
}

#[test]
fn test_over_exactly_at_eight() {
    let mut game = started(7);

    for expected in 1..=8 {
        assert_eq!(game.phase(), Phase::Playing, "Still playing at {}", expected - 1);
        game.racket.x = 150;
        drop_ball_at(&mut game, 200);
        game.update(&idle());
        assert_eq!(game.score.player, expected);
    }

    assert_eq!(game.phase(), Phase::Over);
    assert_eq!(game.winner(), Some(Side::Player));
    assert!(game.events().game_over);
}

#[test]
fn test_cpu_wins_when_racket_parked_offscreen() {
    let mut game = started(8);
    let mut ticks = 0;

    // Drive the racket far off the field and let the ball fall
    while game.phase() == Phase::Playing {
        game.update(&InputState::pressed(Key::Left));
        ticks += 1;
        assert!(ticks < 100_000, "Match never ended");
        assert!(game.score.cpu <= 8);
    }

    assert_eq!(game.score.cpu, 8);
    assert_eq!(game.score.player, 0);
    assert_eq!(game.winner(), Some(Side::Cpu));
    assert!(game.racket.x < 0, "Racket is not clamped");

    let mut list = DrawList::new();
    game.render(&mut list);
    assert!(list.debug_text().starts_with("Game over. I won!"));
}

#[test]
fn test_restart_after_game_over() {
    let mut game = started(9);
    game.score.player = 7;
    game.racket.x = 150;
    drop_ball_at(&mut game, 200);
    game.update(&idle());
    assert_eq!(game.phase(), Phase::Over);

    game.update(&InputState::pressed(Key::Start));

    assert_eq!(game.phase(), Phase::NotStarted);
    assert_eq!(game.score, Score::new());
    assert_eq!(game.ball.pos.y, 5);
    assert_eq!(game.ball.vel, IVec2::new(3, 3));

    game.update(&InputState::pressed(Key::Start));
    assert_eq!(game.phase(), Phase::Playing);
}

#[test]
fn test_ball_speeds_up_without_cap() {
    let mut game = started(10);
    game.ball.vel = IVec2::new(3, 3);

    for _ in 0..5 {
        game.racket.x = 150;
        game.ball.pos = IVec2::new(200, 586);
        game.ball.vel.y = game.ball.vel.y.abs();
        game.score = Score::new();
        game.update(&idle());
    }

    assert_eq!(game.ball.vel.x, 8);
    assert_eq!(game.ball.vel.y, -8);
}

#[test]
fn test_host_loop_with_clock() {
    let mut game = started(11);
    let mut clock = FrameClock::default();
    let mut list = DrawList::new();

    // One second at 60 Hz
    for _ in 0..60 {
        for _ in 0..clock.advance(clock.tick()) {
            assert_eq!(game.update(&idle()), Flow::Continue);
        }
        list.clear();
        game.render(&mut list);
    }

    assert_eq!(clock.total_ticks(), 60);
    assert!(list.debug_text().starts_with("Score: "));
}
