// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo win probability simulation.
//!
//! Each trial shuffles the unseen cards, completes the board from the top of
//! the shuffled cards and then deals two hole cards to each opponent from
//! the rest. The player wins a trial if no opponent has a strictly better
//! hand, ties count as wins and split pots are not modeled.
//!
//! Results are estimates and change from run to run unless a seed is set in
//! the [SimulationConfig] or a seeded generator is passed to
//! [Simulator::estimate_with_rng].
use log::{debug, warn};
use rand::prelude::*;
use serde::Serialize;
use std::{thread, time::Instant};

use handsight_eval::{Card, evaluate};

use crate::{
    error::{AssistError, Result},
    snapshot::Snapshot,
};

/// Simulation configuration.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// The number of trials.
    pub trials: usize,
    /// The number of parallel tasks the trials are split across.
    pub tasks: usize,
    /// The seed for reproducible runs, task `i` uses `seed + i`.
    pub seed: Option<u64>,
    /// Stop running trials after this instant.
    pub deadline: Option<Instant>,
}

impl SimulationConfig {
    /// Checks the trials and tasks are positive.
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            Err(AssistError::InvalidSimulationConfig(
                "at least one trial is needed",
            ))
        } else if self.tasks == 0 {
            Err(AssistError::InvalidSimulationConfig(
                "at least one task is needed",
            ))
        } else {
            Ok(())
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: 1_000,
            tasks: 1,
            seed: None,
            deadline: None,
        }
    }
}

/// The estimated win probability.
#[derive(Debug, Clone, Serialize)]
pub struct WinEstimate {
    /// Won trials over run trials.
    pub probability: f64,
    /// The probability as a percentage.
    pub percentage: f64,
    /// Number of won trials.
    pub wins: u64,
    /// Number of run trials.
    pub trials: u64,
    /// Number of simulated opponents.
    pub opponents: usize,
    /// The deadline elapsed before all the trials were run.
    pub aborted: bool,
}

/// Per task counters.
#[derive(Debug, Default)]
struct Counter {
    wins: u64,
    games: u64,
    aborted: bool,
}

/// Win probability simulator.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator with the given configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// This simulator configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Estimates the probability of the player beating the snapshot
    /// opponents, running the trials on `config.tasks` threads.
    ///
    /// Needs at least the flop and a valid configuration.
    pub fn estimate(&self, snapshot: &Snapshot) -> Result<WinEstimate> {
        self.config.validate()?;
        snapshot.require_flop()?;

        let trials = self.config.trials;
        let num_tasks = self.config.tasks.min(trials);

        debug!(
            "Simulating {trials} trials against {} opponents with {num_tasks} tasks",
            snapshot.opponents()
        );

        // Create per task counters to avoid contention, the last tasks may
        // run one trial less.
        let task_trials =
            |task_id: usize| trials / num_tasks + usize::from(task_id < trials % num_tasks);

        let counters = if num_tasks == 1 {
            vec![self.run_trials(snapshot, trials, &mut self.task_rng(0))?]
        } else {
            thread::scope(|s| {
                let handles = (0..num_tasks)
                    .map(|task_id| {
                        s.spawn(move || {
                            let mut rng = self.task_rng(task_id);
                            self.run_trials(snapshot, task_trials(task_id), &mut rng)
                        })
                    })
                    .collect::<Vec<_>>();

                handles
                    .into_iter()
                    .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                    .collect::<Result<Vec<_>>>()
            })?
        };

        // Aggregate counters.
        let total = counters.into_iter().fold(Counter::default(), |acc, c| Counter {
            wins: acc.wins + c.wins,
            games: acc.games + c.games,
            aborted: acc.aborted || c.aborted,
        });

        self.finish(snapshot, total)
    }

    /// Estimates the probability of the player beating the snapshot
    /// opponents on the calling thread using the given random generator.
    ///
    /// Needs at least the flop and a valid configuration, `tasks` is ignored.
    pub fn estimate_with_rng<R: Rng + ?Sized>(
        &self,
        snapshot: &Snapshot,
        rng: &mut R,
    ) -> Result<WinEstimate> {
        self.config.validate()?;
        snapshot.require_flop()?;
        let counter = self.run_trials(snapshot, self.config.trials, rng)?;
        self.finish(snapshot, counter)
    }

    fn task_rng(&self, task_id: usize) -> SmallRng {
        match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(task_id as u64)),
            None => SmallRng::from_os_rng(),
        }
    }

    fn run_trials<R: Rng + ?Sized>(
        &self,
        snapshot: &Snapshot,
        trials: usize,
        rng: &mut R,
    ) -> Result<Counter> {
        let mut deck = snapshot.remaining_cards().into_iter().collect::<Vec<_>>();
        let to_deal = snapshot.cards_to_come();
        let hole = snapshot.hole();

        let mut board = Vec::<Card>::with_capacity(5);
        let mut hand = Vec::<Card>::with_capacity(7);
        let mut counter = Counter::default();

        for _ in 0..trials {
            if self.config.deadline.is_some_and(|d| Instant::now() >= d) {
                counter.aborted = true;
                break;
            }

            deck.shuffle(rng);
            let (extra, rest) = deck.split_at(to_deal);

            board.clear();
            board.extend_from_slice(snapshot.community());
            board.extend_from_slice(extra);

            // Evaluate hero hand.
            hand.clear();
            hand.extend_from_slice(hole);
            hand.extend_from_slice(&board);
            let hvalue = evaluate(&hand)?;

            // Compare against other players hand, opponents that can't get
            // two cards are skipped.
            let mut has_lost = false;
            for pair in rest.chunks_exact(2).take(snapshot.opponents()) {
                hand.clear();
                hand.extend_from_slice(pair);
                hand.extend_from_slice(&board);
                if evaluate(&hand)? > hvalue {
                    has_lost = true;
                    break;
                }
            }

            if !has_lost {
                counter.wins += 1;
            }

            counter.games += 1;
        }

        Ok(counter)
    }

    fn finish(&self, snapshot: &Snapshot, counter: Counter) -> Result<WinEstimate> {
        if counter.games == 0 {
            return Err(AssistError::DeadlineExceeded);
        }

        if counter.aborted {
            warn!(
                "Simulation deadline elapsed after {} of {} trials",
                counter.games, self.config.trials
            );
        }

        let probability = counter.wins as f64 / counter.games as f64;
        debug!("Won {} of {} trials", counter.wins, counter.games);

        Ok(WinEstimate {
            probability,
            percentage: probability * 100.0,
            wins: counter.wins,
            trials: counter.games,
            opponents: snapshot.opponents(),
            aborted: counter.aborted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn seeded(trials: usize, tasks: usize) -> Simulator {
        Simulator::new(SimulationConfig {
            trials,
            tasks,
            seed: Some(42),
            ..Default::default()
        })
    }

    #[test]
    fn estimate_needs_flop() {
        let s = Snapshot::parse("AH KH", "", 1).unwrap();
        let sim = Simulator::default();
        assert!(sim.estimate(&s).is_err_and(|e| e.is_insufficient_information()));

        let mut rng = SmallRng::seed_from_u64(1);
        assert!(
            sim.estimate_with_rng(&s, &mut rng)
                .is_err_and(|e| e.is_insufficient_information())
        );
    }

    #[test]
    fn no_opponents_always_wins() {
        let s = Snapshot::parse("2C 7D", "3H 9S JD QC 4S", 0).unwrap();
        let est = Simulator::default().estimate(&s).unwrap();
        assert_eq!(est.probability, 1.0);
        assert_eq!(est.trials, 1_000);
        assert_eq!(est.opponents, 0);
        assert!(!est.aborted);
    }

    #[test]
    fn unbeatable_hands() {
        // A royal flush.
        let s = Snapshot::parse("KH AH", "TH JH QH 2C 3D", 5).unwrap();
        let est = seeded(500, 1).estimate(&s).unwrap();
        assert_eq!(est.probability, 1.0);
        assert_eq!(est.percentage, 100.0);

        // Four of a kind with no straight flush possible.
        let s = Snapshot::parse("7S 7D", "7C 7H 2D 9S KC", 3).unwrap();
        let est = seeded(500, 2).estimate(&s).unwrap();
        assert_eq!(est.wins, 500);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let s = Snapshot::parse("AH KD", "2C 7S 9H", 2).unwrap();

        let e1 = seeded(2_000, 1).estimate(&s).unwrap();
        let e2 = seeded(2_000, 1).estimate(&s).unwrap();
        assert_eq!(e1.wins, e2.wins);

        let e1 = seeded(1_001, 4).estimate(&s).unwrap();
        let e2 = seeded(1_001, 4).estimate(&s).unwrap();
        assert_eq!(e1.wins, e2.wins);
        assert_eq!(e1.trials, 1_001);

        let sim = seeded(1_000, 1);
        let e1 = sim
            .estimate_with_rng(&s, &mut SmallRng::seed_from_u64(7))
            .unwrap();
        let e2 = sim
            .estimate_with_rng(&s, &mut SmallRng::seed_from_u64(7))
            .unwrap();
        assert_eq!(e1.wins, e2.wins);
        assert!((0.0..=1.0).contains(&e1.probability));
    }

    #[test]
    fn strong_hand_wins_more() {
        let strong = Snapshot::parse("AH AD", "AS 7C 2D", 1).unwrap();
        let weak = Snapshot::parse("3H 4D", "AS 7C QD", 1).unwrap();

        let sim = seeded(2_000, 2);
        let strong = sim.estimate(&strong).unwrap();
        let weak = sim.estimate(&weak).unwrap();
        assert!(strong.probability > 0.85, "{strong:?}");
        assert!(weak.probability < 0.5, "{weak:?}");
    }

    #[test]
    fn opponents_without_cards_are_skipped() {
        // 45 cards left after the board, enough for 22 opponents.
        let s = Snapshot::parse("AH KD", "2C 7S 9H", 30).unwrap();
        let est = seeded(200, 1).estimate(&s).unwrap();
        assert_eq!(est.trials, 200);
        assert_eq!(est.opponents, 30);
        assert!((0.0..=1.0).contains(&est.probability));
    }

    #[test]
    fn elapsed_deadline() {
        let s = Snapshot::parse("AH KD", "2C 7S 9H", 1).unwrap();
        let sim = Simulator::new(SimulationConfig {
            deadline: Some(Instant::now()),
            ..Default::default()
        });

        assert_eq!(sim.estimate(&s).unwrap_err(), AssistError::DeadlineExceeded);
    }

    #[test]
    fn deadline_reports_completed_trials() {
        const TRIALS: usize = 50_000_000;

        let s = Snapshot::parse("AH KD", "2C 7S 9H", 1).unwrap();
        let sim = Simulator::new(SimulationConfig {
            trials: TRIALS,
            seed: Some(3),
            deadline: Some(Instant::now() + Duration::from_millis(50)),
            ..Default::default()
        });

        let est = sim.estimate(&s).unwrap();
        assert!(est.aborted);
        assert!(est.trials > 0 && est.trials < TRIALS as u64, "{est:?}");
        assert!(est.wins <= est.trials);
    }

    #[test]
    fn zero_trials_or_tasks_are_rejected() {
        let s = Snapshot::parse("AH KD", "2C 7S 9H", 1).unwrap();

        let sim = seeded(0, 1);
        let err = sim.estimate(&s).unwrap_err();
        assert!(matches!(err, AssistError::InvalidSimulationConfig(_)));
        assert!(err.is_invalid_input());

        let mut rng = SmallRng::seed_from_u64(1);
        assert!(
            sim.estimate_with_rng(&s, &mut rng)
                .is_err_and(|e| e.is_invalid_input())
        );

        let err = seeded(100, 0).estimate(&s).unwrap_err();
        assert!(matches!(err, AssistError::InvalidSimulationConfig(_)));
    }
}
