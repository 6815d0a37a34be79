use life_core::{CellState, Classification, OscillationCheck, SimulationEngine, Status};
use rand::rngs::StdRng;
use rand::SeedableRng;

const BLOCK: &[(usize, usize)] = &[(0, 0), (1, 0), (0, 1), (1, 1)];
const BLINKER: &[(usize, usize)] = &[(0, 1), (1, 1), (2, 1)];
const GLIDER: &[(usize, usize)] = &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

fn place(engine: &mut SimulationEngine, pattern: &[(usize, usize)], dx: usize, dy: usize) {
    for &(x, y) in pattern {
        assert!(engine.set_cell(x + dx, y + dy, CellState::Alive));
    }
}

fn live_cells(engine: &SimulationEngine) -> Vec<(usize, usize)> {
    let mut cells: Vec<_> = engine.state().current().live_cells().collect();
    cells.sort_unstable();
    cells
}

fn translated(pattern: &[(usize, usize)], dx: usize, dy: usize) -> Vec<(usize, usize)> {
    let mut cells: Vec<_> = pattern.iter().map(|&(x, y)| (x + dx, y + dy)).collect();
    cells.sort_unstable();
    cells
}

#[test]
fn glider_moves_one_cell_diagonally_every_four_generations() {
    let mut engine = SimulationEngine::new(16, 16);
    place(&mut engine, GLIDER, 2, 2);

    for _ in 0..4 {
        assert_eq!(engine.advance(), None);
    }
    assert_eq!(live_cells(&engine), translated(GLIDER, 3, 3));
    assert_eq!(engine.generation(), 4);

    for _ in 0..4 {
        assert_eq!(engine.advance(), None);
    }
    assert_eq!(live_cells(&engine), translated(GLIDER, 4, 4));
}

#[test]
fn block_is_a_fixed_point() {
    let mut engine = SimulationEngine::new(8, 8);
    place(&mut engine, BLOCK, 3, 3);
    let before = engine.state().current().clone();

    assert_eq!(engine.advance(), Some(Classification::StableStatic));
    assert_eq!(engine.state().current(), &before);

    for _ in 0..10 {
        assert_eq!(engine.advance(), None);
    }
    assert_eq!(engine.state().current(), &before);
    assert_eq!(engine.status(), Status::Terminal(Classification::StableStatic));
}

#[test]
fn block_in_a_corner_is_still_a_fixed_point() {
    let mut engine = SimulationEngine::new(5, 5);
    place(&mut engine, BLOCK, 0, 0);
    assert_eq!(engine.advance(), Some(Classification::StableStatic));
    assert_eq!(live_cells(&engine), translated(BLOCK, 0, 0));
}

#[test]
fn blinker_returns_after_two_generations() {
    let mut engine = SimulationEngine::new(7, 7);
    place(&mut engine, BLINKER, 2, 2);
    let horizontal = engine.state().current().clone();

    engine.advance();
    assert_eq!(live_cells(&engine), vec![(3, 2), (3, 3), (3, 4)]);
    engine.advance();
    assert_eq!(engine.state().current(), &horizontal);
}

#[test]
fn blinker_from_generation_zero_is_reported_on_the_second_tick() {
    let mut engine = SimulationEngine::new(7, 7);
    place(&mut engine, BLINKER, 2, 2);

    assert_eq!(engine.advance(), None);
    assert_eq!(engine.advance(), Some(Classification::StableOscillating));
    for _ in 0..6 {
        assert_eq!(engine.advance(), None);
    }
    assert_eq!(engine.generation(), 8);
}

#[test]
fn odd_snapshot_reports_a_blinker_placed_at_an_odd_generation_one_tick_late() {
    let mut engine = SimulationEngine::new(7, 7);
    engine.set_cell(0, 0, CellState::Alive);
    assert_eq!(engine.advance(), None);
    assert_eq!(engine.advance(), Some(Classification::AllDead));
    assert_eq!(engine.generation(), 1);

    place(&mut engine, BLINKER, 2, 2);
    assert_eq!(engine.advance(), None); // generation 2
    assert_eq!(engine.advance(), None); // generation 3
    assert_eq!(engine.advance(), Some(Classification::StableOscillating));
    assert_eq!(engine.generation(), 4);
}

#[test]
fn every_tick_reports_a_blinker_two_ticks_after_any_edit() {
    let mut engine = SimulationEngine::with_oscillation_check(7, 7, OscillationCheck::EveryTick);
    engine.set_cell(0, 0, CellState::Alive);
    engine.advance();
    assert_eq!(engine.advance(), Some(Classification::AllDead));

    place(&mut engine, BLINKER, 2, 2);
    assert_eq!(engine.advance(), None);
    assert_eq!(engine.advance(), Some(Classification::StableOscillating));
    assert_eq!(engine.generation(), 3);

    engine.clear();
    place(&mut engine, BLINKER, 2, 2);
    assert_eq!(engine.advance(), None);
    assert_eq!(engine.advance(), Some(Classification::StableOscillating));
}

#[test]
fn randomized_board_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut engine = SimulationEngine::new(64, 36);
    let total = 64 * 36;

    engine.clear();
    let target = engine.state_mut().randomize_with(&mut rng);
    let live = engine.state().current().live_count();

    assert_eq!(live, target);
    assert!(live * 4 >= total);
    assert!((live as f64) < 0.85 * total as f64);
}

#[test]
fn random_soup_reaches_at_most_one_classification() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut engine = SimulationEngine::new(24, 24);
    engine.state_mut().randomize_with(&mut rng);

    let fired: Vec<_> = (0..2_000).filter_map(|_| engine.advance()).collect();
    assert!(fired.len() <= 1, "{fired:?}");
}

#[test]
fn out_of_bounds_edits_are_ignored() {
    let mut engine = SimulationEngine::new(4, 4);
    assert!(!engine.set_cell(4, 0, CellState::Alive));
    assert!(!engine.set_cell(0, 4, CellState::Alive));
    assert!(!engine.set_cell(100, 100, CellState::Dead));
    assert!(engine.is_all_dead());
}
