use anyhow::Result;
use replay_core::{
    error::ReplayError,
    replay_buffer::{IwSchedule, PrioritizedReplayBuffer, ReplayBufferConfig, TdErrorEstimator},
    Transition, ValueEstimator,
};
use tempdir::TempDir;

const NUM_ACTIONS: usize = 3;

/// Deterministic stand-in for the value-prediction model: Q(s)[a] = s[0] + a.
#[derive(Debug)]
struct StubModel;

impl ValueEstimator for StubModel {
    fn predict(&self, state: &[f32]) -> Result<Vec<f32>> {
        Ok((0..NUM_ACTIONS).map(|a| state[0] + a as f32).collect())
    }
}

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn terminal_td_error_ignores_future_value() -> Result<()> {
    init();
    let estimator = TdErrorEstimator::new(StubModel, 0.95);

    // Q(s) = [2.0, 3.0, 4.0]; terminal, so the next state plays no role.
    let tr = Transition::new(vec![2.0], 1, 5.0, vec![100.0], true);
    assert_eq!(estimator.td_error(&tr)?, 5.0 - 3.0);

    // Same transition under a different discount: unchanged.
    let estimator = TdErrorEstimator::new(StubModel, 0.0);
    assert_eq!(estimator.td_error(&tr)?, 5.0 - 3.0);
    Ok(())
}

#[test]
fn non_terminal_td_error_discounts_the_best_next_value() -> Result<()> {
    init();
    let estimator = TdErrorEstimator::new(StubModel, 0.5);

    // Q(s) = [2.0, 3.0, 4.0], max Q(s') = 4.0 + 2.0 = 6.0.
    let tr = Transition::new(vec![2.0], 1, 5.0, vec![4.0], false);
    assert_eq!(estimator.td_error(&tr)?, 5.0 + 0.5 * 6.0 - 3.0);
    Ok(())
}

#[test]
fn out_of_range_action_is_reported() {
    let estimator = TdErrorEstimator::new(StubModel, 0.95);
    let tr = Transition::new(vec![2.0], NUM_ACTIONS, 5.0, vec![4.0], false);
    assert!(estimator.td_error(&tr).is_err());
}

#[test]
fn construction_rejects_invalid_parameters() {
    let rejected = [
        ReplayBufferConfig::default().capacity(0),
        ReplayBufferConfig::default().discount(1.5),
        ReplayBufferConfig::default().alpha(-0.1),
        ReplayBufferConfig::default().beta(2.0),
        ReplayBufferConfig::default().beta_final(-1.0),
        ReplayBufferConfig::default().n_updates_final(0),
        ReplayBufferConfig::default().epsilon(0.0),
    ];

    for config in rejected.iter() {
        let err = PrioritizedReplayBuffer::build(config, StubModel).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReplayError>(),
            Some(ReplayError::InvalidConfiguration(_))
        ));
    }

    assert!(PrioritizedReplayBuffer::build(&ReplayBufferConfig::default(), StubModel).is_ok());
}

#[test]
fn config_round_trips_through_yaml() -> Result<()> {
    let dir = TempDir::new("replay_core_test")?;
    let path = dir.path().join("replay_buffer_config.yaml");

    let config = ReplayBufferConfig::default()
        .capacity(256)
        .seed(7)
        .discount(0.9)
        .alpha(0.7)
        .beta(0.5)
        .beta_final(1.0)
        .n_updates_final(1000)
        .epsilon(1e-5);
    config.save(&path)?;

    assert_eq!(ReplayBufferConfig::load(&path)?, config);
    Ok(())
}

#[test]
fn beta_anneals_linearly_up_to_its_final_value() {
    let mut schedule = IwSchedule::new(0.4, 1.0, 10);
    assert_eq!(schedule.beta(), 0.4);

    for _ in 0..5 {
        schedule.add_n_updates();
    }
    assert!((schedule.beta() - 0.7).abs() < 1e-6);

    for _ in 0..10 {
        schedule.add_n_updates();
    }
    assert_eq!(schedule.beta(), 1.0);
}

#[test]
fn default_schedule_keeps_beta_constant() {
    let mut schedule = IwSchedule::new(0.4, 0.4, 500_000);
    for _ in 0..100 {
        schedule.add_n_updates();
    }
    assert_eq!(schedule.beta(), 0.4);
}
