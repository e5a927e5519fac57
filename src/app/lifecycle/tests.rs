use super::{ViewerLifecycle, ViewerPhase};

#[test]
fn activation_is_only_accepted_when_idle() {
    let mut lifecycle = ViewerLifecycle::new();
    assert!(lifecycle.accept_activation());
    assert_eq!(lifecycle.phase(), ViewerPhase::Opening);

    assert!(!lifecycle.accept_activation());
    lifecycle.window_created();
    assert_eq!(lifecycle.phase(), ViewerPhase::Open);
    assert!(!lifecycle.accept_activation());
}

#[test]
fn item_is_reenabled_exactly_once_per_cycle() {
    let mut lifecycle = ViewerLifecycle::new();
    assert!(lifecycle.accept_activation());
    lifecycle.window_created();
    lifecycle.window_gone();
    assert!(lifecycle.cycle_completed());
    assert!(!lifecycle.cycle_completed());
    assert_eq!(lifecycle.phase(), ViewerPhase::Idle);
}

#[test]
fn two_consecutive_cycles_succeed() {
    let mut lifecycle = ViewerLifecycle::new();
    for _ in 0..2 {
        assert!(lifecycle.accept_activation());
        lifecycle.window_created();
        lifecycle.window_gone();
        assert!(lifecycle.cycle_completed());
    }
    assert_eq!(lifecycle.phase(), ViewerPhase::Idle);
}

#[test]
fn failed_window_construction_returns_to_idle() {
    let mut lifecycle = ViewerLifecycle::new();
    assert!(lifecycle.accept_activation());
    lifecycle.window_gone();
    assert!(lifecycle.cycle_completed());
    assert_eq!(lifecycle.phase(), ViewerPhase::Idle);
}

#[test]
fn termination_is_final_from_every_phase() {
    for advance in 0..4usize {
        let mut lifecycle = ViewerLifecycle::new();
        if advance >= 1 {
            assert!(lifecycle.accept_activation());
        }
        if advance >= 2 {
            lifecycle.window_created();
        }
        if advance >= 3 {
            lifecycle.window_gone();
        }
        lifecycle.terminate();
        assert_eq!(lifecycle.phase(), ViewerPhase::Terminated);

        assert!(!lifecycle.accept_activation());
        assert!(!lifecycle.cycle_completed());
        assert_eq!(lifecycle.phase(), ViewerPhase::Terminated);
    }
}

#[test]
fn forced_teardown_while_open_terminates_without_reenabling() {
    let mut lifecycle = ViewerLifecycle::new();
    assert!(lifecycle.accept_activation());
    lifecycle.window_created();
    lifecycle.terminate();
    assert!(!lifecycle.cycle_completed());
    assert_eq!(lifecycle.phase(), ViewerPhase::Terminated);
}
