use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use wrapsnake::food::place_food;
use wrapsnake::{Body, Coord, Direction, DirectionSignals, GameState, Grid, Status, Velocity};

fn grid5() -> Grid {
    Grid::new(5).expect("5 is a valid grid size")
}

#[test]
fn single_step_without_food() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut state = GameState::from_parts(
        grid5(),
        Body::new(Coord::new(2, 2)),
        1,
        Velocity::new(1, 0),
        Coord::new(0, 0),
    );

    let report = state.tick(&DirectionSignals::default(), &mut rng).unwrap();

    assert_eq!(state.body().head(), Ok(Coord::new(3, 2)));
    assert_eq!(state.size(), 1);
    assert!(!report.ate);
    assert!(!report.died);
    assert_eq!(state.status(), Status::Running);
}

#[test]
fn eating_grows_and_moves_food() {
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut state = GameState::from_parts(
            grid5(),
            Body::new(Coord::new(2, 2)),
            1,
            Velocity::new(1, 0),
            Coord::new(3, 2),
        );

        let report = state.tick(&DirectionSignals::default(), &mut rng).unwrap();

        assert!(report.ate);
        assert!(!report.died);
        assert_eq!(state.size(), 2);
        assert_eq!(
            state.snapshot().segments,
            vec![Coord::new(3, 2), Coord::new(2, 2)]
        );
        let food = state.food();
        assert!(food != Coord::new(3, 2) && food != Coord::new(2, 2), "food at {:?}", food);
    }
}

#[test]
fn self_collision_is_final() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let body = Body::from_segments(vec![Coord::new(1, 1), Coord::new(1, 2), Coord::new(1, 3)]);
    let mut state = GameState::from_parts(grid5(), body, 3, Direction::Down.velocity(), Coord::new(4, 4));

    let report = state.tick(&DirectionSignals::default(), &mut rng).unwrap();
    assert!(report.died);
    assert_eq!(state.status(), Status::Lost);
    assert_eq!(state.velocity(), Velocity::ZERO);

    let frozen = state.snapshot();
    for dir in Direction::PRIORITY.iter() {
        let report = state.tick(&(*dir).into(), &mut rng).unwrap();
        assert!(!report.ate && !report.died);
        assert_eq!(report.status, Status::Lost);
    }
    assert_eq!(state.snapshot(), frozen);
    assert_eq!(state.velocity(), Velocity::ZERO);
}

#[test]
fn reversal_is_ignored_while_moving() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let body = Body::from_segments(vec![Coord::new(2, 2), Coord::new(1, 2)]);
    let mut state = GameState::from_parts(grid5(), body, 2, Velocity::new(1, 0), Coord::new(0, 4));

    state.tick(&Direction::Left.into(), &mut rng).unwrap();

    assert_eq!(state.velocity(), Velocity::new(1, 0));
    assert_eq!(state.body().head(), Ok(Coord::new(3, 2)));
}

#[test]
fn snake_wraps_around_the_edges() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut state = GameState::from_parts(
        grid5(),
        Body::new(Coord::new(0, 0)),
        1,
        Direction::Up.velocity(),
        Coord::new(0, 3),
    );

    state.tick(&DirectionSignals::default(), &mut rng).unwrap();
    assert_eq!(state.body().head(), Ok(Coord::new(0, -1)));
    assert_eq!(state.snapshot().segments, vec![Coord::new(0, 4)]);

    let report = state.tick(&DirectionSignals::default(), &mut rng).unwrap();
    assert!(report.ate, "food at (0, 3) is reached through the top edge");
}

#[test]
fn food_avoids_a_long_snake() {
    let grid = Grid::new(6).unwrap();
    // Serpentine covering everything but the last row.
    let occupied: Vec<Coord> = (0..5)
        .flat_map(|y| (0..6).map(move |x| Coord::new(x + 6 * y, y - 6)))
        .collect();
    let mut rng = ChaCha8Rng::seed_from_u64(21);

    for _ in 0..100 {
        let food = place_food(&grid, &occupied, &mut rng).unwrap();
        assert_eq!(food.y, 5);
    }
}
