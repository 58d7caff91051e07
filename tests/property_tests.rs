//! Property-based tests for transition selection and the attraction solver.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated transition tables and launch conditions.

use nalgebra::Point3;
use proptest::prelude::*;
use std::convert::Infallible;
use vaultline::core::{Guard, Restrictors, State};
use vaultline::engine::StateMachine;
use vaultline::state_kind;
use vaultline::trajectory::{AttractionConfig, Trajectory};

state_kind! {
    enum Move {
        Idle,
        Run,
        Vault,
        Knockback,
    }
}

const KINDS: [Move; 4] = [Move::Idle, Move::Run, Move::Vault, Move::Knockback];

#[derive(Default)]
struct Flags {
    global: Vec<bool>,
    local: Vec<bool>,
    log: Vec<(Move, &'static str)>,
}

struct Recording {
    kind: Move,
    restrictors: Restrictors,
}

impl State for Recording {
    type Kind = Move;
    type Context = Flags;
    type Error = Infallible;

    fn kind(&self) -> Move {
        self.kind
    }

    fn restrictors(&self) -> Restrictors {
        self.restrictors
    }

    fn restrictors_mut(&mut self) -> &mut Restrictors {
        &mut self.restrictors
    }

    fn on_enter(&mut self, flags: &mut Flags) -> Result<(), Infallible> {
        flags.log.push((self.kind, "enter"));
        Ok(())
    }

    fn tick(&mut self, flags: &mut Flags) -> Result<(), Infallible> {
        flags.log.push((self.kind, "tick"));
        Ok(())
    }

    fn on_exit(&mut self, flags: &mut Flags) -> Result<(), Infallible> {
        flags.log.push((self.kind, "exit"));
        Ok(())
    }
}

fn machine_with(restrictor_counts: &[u32]) -> StateMachine<Move, Flags, Infallible> {
    let mut machine = StateMachine::new();
    for (kind, &count) in KINDS.iter().zip(restrictor_counts.iter().chain(std::iter::repeat(&0))) {
        machine.insert_state(Recording {
            kind: *kind,
            restrictors: Restrictors::new(count),
        });
    }
    machine
}

prop_compose! {
    fn arbitrary_kind()(index in 0..4usize) -> Move {
        KINDS[index]
    }
}

prop_compose! {
    fn arbitrary_edges()(edges in prop::collection::vec((any::<bool>(), arbitrary_kind()), 0..5))
        -> Vec<(bool, Move)> {
        edges
    }
}

/// Launches in the XY plane with up along +Y and `a_x <= 0`. Paired with a
/// non-negative `dx` this keeps `v0.x >= 0`, where the speed/angle velocity
/// equals the kinematic one.
fn planar_config() -> impl Strategy<Value = AttractionConfig> {
    (0.5f32..10.0, -40.0f32..-5.0, -5.0f32..=0.0).prop_map(|(jump_height, y_acceleration, x_acceleration)| {
        AttractionConfig {
            jump_height,
            y_acceleration,
            x_acceleration,
            z_acceleration: 0.0,
        }
    })
}

/// Trapezoid-rule integral of the arc's velocity from launch to arrival.
fn integrate_velocity(arc: &Trajectory, steps: usize) -> Point3<f32> {
    let dt = arc.time_to_target() / steps as f32;
    let mut position = Point3::origin();
    for i in 0..steps {
        let t = i as f32 * dt;
        let average = (arc.velocity_at(t) + arc.velocity_at(t + dt)) / 2.0;
        position += average * dt;
    }
    position
}

proptest! {
    #[test]
    fn set_state_to_current_runs_no_hooks(kind in arbitrary_kind()) {
        let mut machine = machine_with(&[]);
        let mut flags = Flags::default();

        machine.set_state(kind, &mut flags).unwrap();
        flags.log.clear();
        machine.set_state(kind, &mut flags).unwrap();

        prop_assert!(flags.log.is_empty());
        prop_assert_eq!(machine.current_state(), Some(kind));
    }

    #[test]
    fn first_satisfied_transition_wins(global in arbitrary_edges(), local in arbitrary_edges()) {
        let mut machine = machine_with(&[]);
        for (i, (_, to)) in global.iter().enumerate() {
            machine.add_any_transition(*to, Guard::new(move |f: &Flags| f.global[i]));
        }
        for (i, (_, to)) in local.iter().enumerate() {
            machine.add_transition(Move::Idle, *to, Guard::new(move |f: &Flags| f.local[i]));
        }

        let mut flags = Flags {
            global: global.iter().map(|(on, _)| *on).collect(),
            local: local.iter().map(|(on, _)| *on).collect(),
            log: Vec::new(),
        };
        machine.set_state(Move::Idle, &mut flags).unwrap();

        let expected = global
            .iter()
            .chain(local.iter())
            .find(|(on, _)| *on)
            .map(|(_, to)| *to);

        let fired = expected.filter(|to| *to != Move::Idle);
        prop_assert_eq!(machine.tick(&mut flags).unwrap(), fired);
        prop_assert_eq!(machine.current_state(), Some(expected.unwrap_or(Move::Idle)));
    }

    #[test]
    fn restrictors_gate_local_but_not_global(
        counts in prop::collection::vec(0..3u32, 4),
        targets in prop::collection::vec(arbitrary_kind(), 1..5),
    ) {
        let mut machine = machine_with(&counts);
        for to in &targets {
            machine.add_transition(Move::Idle, *to, Guard::always());
        }
        let mut flags = Flags::default();
        machine.set_state(Move::Idle, &mut flags).unwrap();

        let count_of = |kind: Move| counts[KINDS.iter().position(|k| *k == kind).unwrap()];
        let expected = targets.iter().copied().find(|to| count_of(*to) == 0);
        prop_assert_eq!(machine.next_transition(&flags).unwrap(), expected);

        let interrupt = targets[0];
        machine.add_any_transition(interrupt, Guard::always());
        prop_assert_eq!(machine.next_transition(&flags).unwrap(), Some(interrupt));
    }

    #[test]
    fn tick_fires_one_transition_and_ticks_new_state(steps in 1..6usize) {
        let mut machine = machine_with(&[]);
        for pair in KINDS.windows(2) {
            machine.add_transition(pair[0], pair[1], Guard::always());
        }
        let mut flags = Flags::default();
        machine.set_state(Move::Idle, &mut flags).unwrap();

        for step in 1..=steps {
            flags.log.clear();
            machine.tick(&mut flags).unwrap();

            let expected = KINDS[step.min(KINDS.len() - 1)];
            prop_assert_eq!(machine.current_state(), Some(expected));
            prop_assert_eq!(flags.log.last(), Some(&(expected, "tick")));
            prop_assert!(flags.log.iter().filter(|(_, hook)| *hook == "enter").count() <= 1);
        }
    }

    #[test]
    fn integrated_velocity_reaches_target(
        config in planar_config(),
        dx in 0.0f32..20.0,
        drop in 0.0f32..10.0,
    ) {
        let target = Point3::new(dx, -drop, 0.0);
        let arc = Trajectory::solve(Point3::origin(), target, config).unwrap();

        let position = integrate_velocity(&arc, 2000);

        let scale = 1.0 + dx + drop + config.jump_height;
        prop_assert!((position - target).norm() < 1e-3 * scale, "landed at {:?}", position);
    }

    #[test]
    fn leftward_velocity_without_drag_reaches_target(
        config in planar_config(),
        dx in -20.0f32..0.0,
        drop in 0.0f32..10.0,
    ) {
        let config = AttractionConfig { x_acceleration: 0.0, ..config };
        let target = Point3::new(dx, -drop, 0.0);
        let arc = Trajectory::solve(Point3::origin(), target, config).unwrap();

        let position = integrate_velocity(&arc, 2000);

        let scale = 1.0 - dx + drop + config.jump_height;
        prop_assert!((position - target).norm() < 1e-3 * scale, "landed at {:?}", position);
    }

    #[test]
    fn vertical_velocity_vanishes_at_apex(
        config in planar_config(),
        dx in -20.0f32..20.0,
        dy in -10.0f32..0.0,
    ) {
        let arc = Trajectory::solve(Point3::origin(), Point3::new(dx, dy, 0.0), config).unwrap();
        let apex_time = (-2.0 * config.jump_height / config.y_acceleration).sqrt();

        let vertical = arc.velocity_at(apex_time).y;
        let launch_speed = arc.launch().initial_velocity().y;
        prop_assert!(vertical.abs() < 1e-3 * (1.0 + launch_speed));
    }
}
