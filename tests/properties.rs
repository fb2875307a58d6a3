//! Property tests over the public simulation API

use glam::Vec2;
use proptest::prelude::*;

use space_explorer::consts::*;
use space_explorer::sim::{
    Collectible, CubicBezier, GameState, MatchPhase, Obstacle, PingPong, TickInput, advance,
    evaluate_cubic_bezier, start,
};

fn point() -> impl Strategy<Value = Vec2> {
    (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Vec2::new(x, y))
}

fn input() -> impl Strategy<Value = TickInput> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(left, right, up, down)| TickInput {
            left,
            right,
            up,
            down,
        },
    )
}

fn in_clamp(p: Vec2) -> bool {
    let pad = PLAYER_RADIUS + PLAYER_EDGE_PAD;
    let eps = 1e-3;
    p.x >= pad - eps
        && p.x <= WIN_W - pad + eps
        && p.y >= GAME_Y0 + pad - eps
        && p.y <= GAME_Y1 - pad + eps
}

proptest! {
    #[test]
    fn bezier_hits_endpoints(p0 in point(), p1 in point(), p2 in point(), p3 in point()) {
        let start = evaluate_cubic_bezier(0.0, p0, p1, p2, p3);
        let end = evaluate_cubic_bezier(1.0, p0, p1, p2, p3);
        prop_assert!((start - p0).length() < 1e-2);
        prop_assert!((end - p3).length() < 1e-2);
    }

    #[test]
    fn bezier_stays_in_control_hull_box(
        p0 in point(), p1 in point(), p2 in point(), p3 in point(), t in 0.0f32..=1.0
    ) {
        let c = CubicBezier::new(p0, p1, p2, p3);
        let p = c.point_at(t);
        let min = p0.min(p1).min(p2).min(p3) - Vec2::splat(1e-2);
        let max = p0.max(p1).max(p2).max(p3) + Vec2::splat(1e-2);
        prop_assert!(p.cmpge(min).all() && p.cmple(max).all());
    }

    #[test]
    fn ping_pong_is_monotone_between_flips(steps in prop::collection::vec(0.0f32..0.3, 1..200)) {
        let mut pp = PingPong::default();
        for delta in steps {
            let before = pp;
            pp.step(delta);
            prop_assert!((0.0..=1.0).contains(&pp.t));
            if !before.reverse {
                // Forward: never decreases, flips exactly at 1
                prop_assert!(pp.t >= before.t);
                if pp.reverse {
                    prop_assert_eq!(pp.t, 1.0);
                }
            } else {
                prop_assert!(pp.t <= before.t);
                if !pp.reverse {
                    prop_assert_eq!(pp.t, 0.0);
                }
            }
        }
    }

    #[test]
    fn player_stays_in_arena(
        frames in prop::collection::vec((input(), 0.0f32..0.5), 1..120),
        obstacles in prop::collection::vec(
            (40.0f32..960.0, 130.0f32..570.0), 0..8
        ),
    ) {
        let mut state = GameState::default();
        for (x, y) in obstacles {
            state.level.obstacles.push(Obstacle::new(Vec2::new(x, y)));
        }
        start(&mut state);
        for (input, dt) in frames {
            advance(&mut state, &input, dt);
            prop_assert!(in_clamp(state.player.pos));
        }
    }

    #[test]
    fn counters_never_underflow(
        frames in prop::collection::vec((input(), 0.0f32..3.0), 1..300),
        collectibles in prop::collection::vec((40.0f32..960.0, 130.0f32..570.0), 0..8),
    ) {
        let mut state = GameState::default();
        state.rules.total_time = 5;
        state.rules.starting_lives = 2;
        for (x, y) in collectibles {
            state.level.collectibles.push(Collectible::new(Vec2::new(x, y)));
        }
        start(&mut state);
        let mut last_time = state.remaining_time;
        for (input, dt) in frames {
            advance(&mut state, &input, dt);
            prop_assert!(state.remaining_time <= last_time);
            prop_assert!(last_time - state.remaining_time <= 1);
            prop_assert!(state.player.lives <= 2);
            prop_assert!(state.player.invulnerability >= 0.0);
            last_time = state.remaining_time;
        }
        let collected = state.level.collectibles.iter().filter(|c| !c.active).count() as u32;
        prop_assert!(state.player.score <= collected * 10);
        if state.remaining_time == 0 {
            prop_assert_eq!(state.phase, MatchPhase::Ended);
        }
    }
}
