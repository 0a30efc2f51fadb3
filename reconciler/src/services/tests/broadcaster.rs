//! Tests for the ChannelBroadcaster service

use crate::error::ReconcilerError;
use crate::services::ChannelBroadcaster;
use crate::traits::StateBroadcaster;
use shared::{MatchLifecycle, OutboundEvent, StateUpdate, TeamSides};

fn empty_update() -> StateUpdate {
    StateUpdate {
        state: MatchLifecycle::NoMatch,
        teams: TeamSides::default(),
        best_of: 1,
        round_of: 2,
    }
}

#[tokio::test]
async fn subscribers_receive_published_events() {
    let broadcaster = ChannelBroadcaster::new(8);
    let mut rx = broadcaster.subscribe();

    broadcaster
        .publish(OutboundEvent::Update(empty_update()))
        .await
        .unwrap();

    let event = rx.recv().await.unwrap();
    assert_eq!(event, OutboundEvent::Update(empty_update()));
}

#[tokio::test]
async fn publishing_without_subscribers_is_an_error() {
    let broadcaster = ChannelBroadcaster::new(8);
    assert_eq!(broadcaster.subscriber_count(), 0);

    let result = broadcaster.publish(OutboundEvent::Ready).await;
    assert!(matches!(
        result,
        Err(ReconcilerError::BroadcastFailed { subscribers: 0 })
    ));
}

#[tokio::test]
async fn every_subscriber_gets_its_own_copy() {
    let broadcaster = ChannelBroadcaster::new(8);
    let mut first = broadcaster.subscribe();
    let mut second = broadcaster.subscribe();
    assert_eq!(broadcaster.subscriber_count(), 2);

    broadcaster.publish(OutboundEvent::Ready).await.unwrap();

    assert_eq!(first.recv().await.unwrap(), OutboundEvent::Ready);
    assert_eq!(second.recv().await.unwrap(), OutboundEvent::Ready);
}

#[tokio::test]
async fn events_published_in_order_arrive_in_order() {
    let broadcaster = ChannelBroadcaster::new(8);
    let mut rx = broadcaster.subscribe();

    broadcaster
        .publish(OutboundEvent::TeamsLoaded(empty_update()))
        .await
        .unwrap();
    broadcaster.publish(OutboundEvent::Ready).await.unwrap();

    assert_eq!(
        rx.recv().await.unwrap(),
        OutboundEvent::TeamsLoaded(empty_update())
    );
    assert_eq!(rx.recv().await.unwrap(), OutboundEvent::Ready);
}
