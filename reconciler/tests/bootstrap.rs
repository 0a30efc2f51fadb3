//! Startup restore and announcement behavior

mod fixtures;

use std::sync::Arc;

use fixtures::{ack, match_record, submission};
use mockall::Sequence;
use reconciler::traits::{MockPersistenceGateway, MockStateBroadcaster};
use reconciler::{MatchReconciler, ReconcilerError};
use shared::{MatchLifecycle, OutboundEvent, RecordId};

fn announcing_broadcaster(expect_ready_state: MatchLifecycle) -> MockStateBroadcaster {
    let mut broadcaster = MockStateBroadcaster::new();
    let mut seq = Sequence::new();
    broadcaster
        .expect_publish()
        .withf(move |event| {
            matches!(event, OutboundEvent::TeamsLoaded(update) if update.state == expect_ready_state)
        })
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    broadcaster
        .expect_publish()
        .withf(|event| matches!(event, OutboundEvent::Ready))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    broadcaster
}

#[tokio::test]
async fn bootstrap_adopts_the_days_earliest_match() {
    fixtures::init_logging();
    let mut gateway = MockPersistenceGateway::new();
    gateway
        .expect_matches_in_window()
        .withf(|window, limit| {
            *limit == Some(1) && window.contains(chrono::Utc::now().timestamp_millis())
        })
        .times(1)
        .returning(|_, _| {
            Ok(vec![match_record(
                "m5",
                "Cloud9",
                "Fnatic",
                3,
                8,
                chrono::Utc::now().timestamp_millis(),
            )])
        });

    let reconciler = MatchReconciler::new(
        Arc::new(gateway),
        Arc::new(announcing_broadcaster(MatchLifecycle::Ready)),
    );
    reconciler.bootstrap().await.unwrap();

    let state = reconciler.snapshot().await;
    assert_eq!(state.lifecycle, MatchLifecycle::Ready);
    assert_eq!(state.best_of, 3);
    assert_eq!(state.round_of, 8);
    assert_eq!(state.record_id, Some(RecordId::new("m5")));
    assert_eq!(state.teams.unwrap().blue_team.name, "Cloud9");
}

#[tokio::test]
async fn bootstrap_with_an_empty_day_stays_without_a_match() {
    let mut gateway = MockPersistenceGateway::new();
    gateway
        .expect_matches_in_window()
        .times(1)
        .returning(|_, _| Ok(Vec::new()));

    let reconciler = MatchReconciler::new(
        Arc::new(gateway),
        Arc::new(announcing_broadcaster(MatchLifecycle::NoMatch)),
    );
    reconciler.bootstrap().await.unwrap();

    let state = reconciler.snapshot().await;
    assert_eq!(state.lifecycle, MatchLifecycle::NoMatch);
    assert!(state.teams.is_none());
    assert!(state.record_id.is_none());
}

#[tokio::test]
async fn a_failing_query_aborts_startup_and_announces_nothing() {
    let mut gateway = MockPersistenceGateway::new();
    gateway.expect_matches_in_window().times(1).returning(|_, _| {
        Err(ReconcilerError::GatewayFailure {
            message: "bus unreachable".to_string(),
        })
    });

    let reconciler = MatchReconciler::new(
        Arc::new(gateway),
        Arc::new(MockStateBroadcaster::new()),
    );

    let result = reconciler.bootstrap().await;
    assert!(matches!(result, Err(ReconcilerError::GatewayFailure { .. })));
    assert_eq!(
        reconciler.snapshot().await.lifecycle,
        MatchLifecycle::NoMatch
    );
}

#[tokio::test]
async fn a_seeded_state_skips_the_query_but_still_announces() {
    let mut gateway = MockPersistenceGateway::new();
    gateway
        .expect_insert_match()
        .times(1)
        .returning(|_| Ok(ack("m1")));

    let mut broadcaster = MockStateBroadcaster::new();
    // One update broadcast from the seeding submission, then the
    // announcement pair; matches_in_window stays unexpected.
    broadcaster
        .expect_publish()
        .withf(|event| matches!(event, OutboundEvent::Update(_)))
        .times(1)
        .returning(|_| Ok(()));
    let mut seq = Sequence::new();
    broadcaster
        .expect_publish()
        .withf(|event| {
            matches!(event, OutboundEvent::TeamsLoaded(update) if update.state == MatchLifecycle::Ready)
        })
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    broadcaster
        .expect_publish()
        .withf(|event| matches!(event, OutboundEvent::Ready))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));

    let reconciler = MatchReconciler::new(Arc::new(gateway), Arc::new(broadcaster));
    reconciler
        .submit(submission("Cloud9", "Fnatic", 3, 8))
        .await
        .unwrap();
    reconciler.bootstrap().await.unwrap();

    let state = reconciler.snapshot().await;
    assert_eq!(state.lifecycle, MatchLifecycle::Ready);
    assert_eq!(state.record_id, Some(RecordId::new("m1")));
}
