use crate::{Ball, Config, Events, GameEvent, GameMap, GameRng, Score, Side};
use hecs::World;

/// Check if ball left the surface (scoring)
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    config: &Config,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Ball past the left edge scores for the right player and vice versa
        let scorer = if ball.pos.x < 0.0 {
            Side::Right
        } else if ball.pos.x > map.width {
            Side::Left
        } else {
            continue;
        };

        score.increment(scorer);
        log::info!(
            "{:?} scored, score is now {}-{}",
            scorer,
            score.left,
            score.right
        );
        events.push(GameEvent::Scored {
            side: scorer,
            score: *score,
        });

        ball.serve(map.ball_spawn(), config, rng);
    }
}

/// Signal a winner once either score reaches the threshold
pub fn check_winner(score: &Score, config: &Config, events: &mut Events) -> Option<Side> {
    let winner = score.has_winner(config.win_score)?;
    events.push(GameEvent::Won { winner });
    Some(winner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Ball, Config, Events, GameMap, GameRng, Score};
    use glam::Vec2;

    fn setup_world() -> (hecs::World, Config, GameMap, Score, Events, GameRng) {
        let world = hecs::World::new();
        let config = Config::new();
        let map = GameMap::new(800.0, 480.0);
        let score = Score::new();
        let events = Events::new();
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, config, map, score, events, rng)
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, map, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-0.1, 240.0), Vec2::new(-5.0, 0.0), config.ball_radius);

        check_scoring(&mut world, &map, &mut score, &mut events, &mut rng, &config);

        assert_eq!(score.right, 1, "Right player should score");
        assert_eq!(score.left, 0, "Left player should not score");
        assert!(matches!(
            events.iter().next(),
            Some(GameEvent::Scored { side: Side::Right, score: Score { left: 0, right: 1 } })
        ));
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, map, mut score, mut events, mut rng) = setup_world();
        score.right = 3;
        create_ball(&mut world, Vec2::new(map.width + 0.1, 240.0), Vec2::new(5.0, 0.0), config.ball_radius);

        check_scoring(&mut world, &map, &mut score, &mut events, &mut rng, &config);

        assert_eq!(score.left, 1, "Left player should score");
        assert_eq!(score.right, 3, "Right score should be preserved");
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut world, config, map, mut score, mut events, mut rng) = setup_world();
        let ball = create_ball(&mut world, Vec2::new(-0.1, 100.0), Vec2::new(-5.0, 2.0), config.ball_radius);

        check_scoring(&mut world, &map, &mut score, &mut events, &mut rng, &config);

        let ball = world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.pos, map.ball_spawn(), "Ball should reset to center after scoring");
        assert_eq!(ball.vel.x.abs(), config.ball_serve_speed, "Ball should be served again");
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, map, mut score, mut events, mut rng) = setup_world();
        for x in [0.0, 400.0, map.width] {
            create_ball(&mut world, Vec2::new(x, 240.0), Vec2::new(5.0, 2.0), config.ball_radius);
        }

        check_scoring(&mut world, &map, &mut score, &mut events, &mut rng, &config);

        assert_eq!(score, Score::new(), "No score when ball in bounds");
        assert!(events.is_empty(), "No scoring events");
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, map, mut score, mut events, mut rng) = setup_world();
        let ball = create_ball(&mut world, Vec2::ZERO, Vec2::ZERO, config.ball_radius);

        for expected in 1..=3 {
            world.get::<&mut Ball>(ball).unwrap().pos.x = map.width + 1.0;
            check_scoring(&mut world, &map, &mut score, &mut events, &mut rng, &config);
            assert_eq!(score.left, expected, "Scores should accumulate");
        }
        assert_eq!(score.right, 0);
        assert_eq!(events.iter().count(), 3);
    }

    #[test]
    fn test_winner_not_signalled_below_threshold() {
        let config = Config::new();
        let mut events = Events::new();
        let score = Score { left: 4, right: 4 };

        assert_eq!(check_winner(&score, &config, &mut events), None);
        assert!(events.is_empty());
    }

    #[test]
    fn test_winner_signalled_at_threshold() {
        let config = Config::new();
        let mut events = Events::new();
        let score = Score { left: 2, right: 5 };

        assert_eq!(check_winner(&score, &config, &mut events), Some(Side::Right));
        assert!(matches!(
            events.iter().next(),
            Some(GameEvent::Won { winner: Side::Right })
        ));
    }
}
