//! Termination tests driven through `step`.
//!
//! The canonical player starts at (57, 244) with zero velocity; one idle
//! frame moves it to y = 245, so its box covers [57, 91) × [245, 269) when the
//! collision test runs. Pipes move 4 units left before the test.

use physics::{Collision, FlappySim, GameConfig, PipePair, REWARD_DEATH};

fn sim_with(cfg: GameConfig, pipes: Vec<PipePair>) -> FlappySim {
    let mut sim = FlappySim::new(cfg).unwrap();
    sim.world.pipes = pipes;
    sim
}

fn sim_with_pipes(pipes: Vec<PipePair>) -> FlappySim {
    sim_with(GameConfig::default(), pipes)
}

#[test]
fn ground_contact_without_flap() {
    let mut sim = sim_with_pipes(Vec::new());
    let cfg = sim.config().clone();
    sim.world.player.y = cfg.ground_y() - 1 - cfg.player_height;

    let t = sim.step(false);
    assert!(t.terminal);
    assert_eq!(t.reward, REWARD_DEATH);
    assert_eq!(t.collision, Some(Collision::Ground));
}

#[test]
fn ground_contact_after_flap() {
    let mut sim = sim_with_pipes(Vec::new());
    let cfg = sim.config().clone();
    // The flap lifts the player by 9, landing exactly on the contact line.
    sim.world.player.y = cfg.ground_y() - 1 - cfg.player_height + 9;

    let t = sim.step(true);
    assert!(t.terminal);
    assert_eq!(t.collision, Some(Collision::Ground));
}

#[test]
fn one_unit_above_ground_survives() {
    let mut sim = sim_with_pipes(Vec::new());
    let cfg = sim.config().clone();
    sim.world.player.y = cfg.ground_y() - 1 - cfg.player_height + 9 - 1;

    let t = sim.step(true);
    assert!(!t.terminal);
}

#[test]
fn player_never_sinks_through_ground() {
    let mut sim = sim_with_pipes(Vec::new());
    sim.world.player.y = 370;
    sim.world.player.vel_y = 10;
    let t = sim.step(false);
    assert!(t.terminal);
    // The clamp stops the player at the ground line; the world is then reset.
    assert_eq!(sim.world.player.y, 244);
}

#[test]
fn horizontal_overlap_by_one_unit_is_terminal() {
    // After the step the lower pipe's left edge sits at 90, one unit inside.
    let mut sim = sim_with_pipes(vec![PipePair::new(94, 145, 245)]);
    let t = sim.step(false);
    assert!(t.terminal);
    assert_eq!(t.reward, REWARD_DEATH);
    assert_eq!(t.collision, Some(Collision::LowerPipe(0)));
}

#[test]
fn horizontal_touch_is_not_terminal() {
    let mut sim = sim_with_pipes(vec![PipePair::new(95, 145, 245)]);
    let t = sim.step(false);
    assert!(!t.terminal);
}

#[test]
fn vertical_overlap_by_one_unit_is_terminal() {
    let mut sim = sim_with_pipes(vec![PipePair::new(64, 168, 268)]);
    let t = sim.step(false);
    assert!(t.terminal);
    assert_eq!(t.collision, Some(Collision::LowerPipe(0)));

    let mut sim = sim_with_pipes(vec![PipePair::new(64, 169, 269)]);
    assert!(!sim.step(false).terminal);
}

#[test]
fn upper_pipe_hit() {
    // Gap top at 246 leaves the upper pipe one unit inside the player box.
    let mut sim = sim_with_pipes(vec![PipePair::new(64, 246, 346)]);
    let t = sim.step(false);
    assert!(t.terminal);
    assert_eq!(t.collision, Some(Collision::UpperPipe(0)));
}

#[test]
fn hitbox_inset_forgives_grazes() {
    let cfg = GameConfig { hitbox_inset: 6, ..Default::default() };

    let mut sim = sim_with(cfg.clone(), vec![PipePair::new(94, 145, 245)]);
    assert!(!sim.step(false).terminal);

    // Seven units of overlap reach past the six-unit inset.
    let mut sim = sim_with(cfg, vec![PipePair::new(88, 145, 245)]);
    assert!(sim.step(false).terminal);
}

#[test]
fn terminal_resets_world() {
    let mut sim = sim_with_pipes(vec![PipePair::new(94, 145, 245)]);
    sim.world.score = 7;
    let t = sim.step(false);
    assert!(t.terminal);
    assert_eq!(t.score, 7);
    assert_eq!(sim.world.score, 0);
    assert_eq!(sim.world.pipes.len(), 2);
    assert_eq!((sim.world.player.x, sim.world.player.y), (57, 244));
    assert_eq!(sim.episodes(), 1);
    assert_eq!(sim.best_score(), 7);

    // The next call already plays the fresh episode.
    let t = sim.step(false);
    assert!(!t.terminal);
    assert_eq!(sim.world.player.y, 245);
}
