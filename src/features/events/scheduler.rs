//! Reminder tick evaluation and the announcement loop
//!
//! `evaluate_tick` is the pure core: given the current wall-clock time, the
//! event list, and the announcement state, it decides which notifications
//! newly fire. The async `run` loop owns the side effects — dispatching
//! messages to the announcement channel and persisting state — at the
//! boundary, once per minute.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use log::{error, info};
use serenity::http::Http;
use serenity::model::id::ChannelId;

use super::event::Event;
use super::state::AnnouncementState;
use super::store::EventStore;

/// Minutes before an event's start at which the "soon" window opens
pub const LEAD_MINUTES: i64 = 10;

/// Seconds between scheduler ticks
pub const TICK_INTERVAL_SECS: u64 = 60;

/// Which announcement window a notification belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Fires once within the 10 minutes before start
    Soon,
    /// Fires once between start (inclusive) and end (exclusive)
    Live,
}

/// A notification produced by a tick, ready to be sent
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub event: Event,
}

impl Notification {
    /// Channel message body for this notification
    pub fn message(&self) -> String {
        match self.kind {
            NotificationKind::Soon => format!(
                "⏰ **Event starting soon!**\n🎯 **{}**\n🕒 {}\n📍 {}",
                self.event.title,
                self.event.start_display(),
                self.event.location
            ),
            NotificationKind::Live => format!(
                "🔴 **Event is LIVE now!**\n🎯 **{}**\n📍 {}\nMark your attendance in the app!",
                self.event.title, self.event.location
            ),
        }
    }
}

/// Determine which notifications newly fire at `now`, marking them in
/// `state` so they never fire twice.
///
/// Windows: "soon" is `[start - 10min, start)`, "live" is `[start, end)`.
/// Nothing fires before the lead window or once the event has ended.
/// Notifications come back in event order, "soon" before "live".
pub fn evaluate_tick(
    now: NaiveDateTime,
    events: &[Event],
    state: &mut AnnouncementState,
) -> Vec<Notification> {
    let lead = chrono::Duration::minutes(LEAD_MINUTES);
    let mut fired = Vec::new();

    for event in events {
        let key = event.announcement_key();

        let soon_window_start = event.start - lead;
        if soon_window_start <= now && now < event.start && !state.soon.contains(&key) {
            state.soon.insert(key.clone());
            fired.push(Notification {
                kind: NotificationKind::Soon,
                event: event.clone(),
            });
        }

        if event.start <= now && now < event.end && !state.live.contains(&key) {
            state.live.insert(key);
            fired.push(Notification {
                kind: NotificationKind::Live,
                event: event.clone(),
            });
        }
    }

    fired
}

/// Run the announcement loop until the process exits.
///
/// Each tick evaluates the store against the current local time and sends
/// any newly fired notifications to the announcement channel. Delivery is
/// best-effort: the state commit has already happened inside
/// [`EventStore::tick`], so a failed send is logged and not retried.
pub async fn run(store: EventStore, http: Arc<Http>, channel_id: ChannelId) {
    info!(
        "Announcement scheduler started (channel {channel_id}, every {TICK_INTERVAL_SECS}s)"
    );

    let mut interval = tokio::time::interval(Duration::from_secs(TICK_INTERVAL_SECS));
    loop {
        interval.tick().await;

        let now = Local::now().naive_local();
        let notifications = store.tick(now);

        for notification in notifications {
            info!(
                "Announcing {:?} for event `{}`",
                notification.kind, notification.event.title
            );
            if let Err(e) = channel_id.say(&http, notification.message()).await {
                error!(
                    "Failed to deliver {:?} notification for `{}`: {e}",
                    notification.kind, notification.event.title
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 14)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    /// The workshop from the seed data: 15:00 - 16:30
    fn workshop() -> Event {
        Event::new("AI Workshop", at(15, 0), at(16, 30), "Seminar Hall, D Block", None).unwrap()
    }

    fn kinds(fired: &[Notification]) -> Vec<NotificationKind> {
        fired.iter().map(|n| n.kind).collect()
    }

    #[test]
    fn test_nothing_fires_before_lead_window() {
        let events = vec![workshop()];
        let mut state = AnnouncementState::default();
        assert!(evaluate_tick(at(14, 49), &events, &mut state).is_empty());
        assert!(state.soon.is_empty());
    }

    #[test]
    fn test_soon_fires_at_lead_window_open() {
        let events = vec![workshop()];
        let mut state = AnnouncementState::default();
        let fired = evaluate_tick(at(14, 50), &events, &mut state);
        assert_eq!(kinds(&fired), vec![NotificationKind::Soon]);
        assert!(state.soon.contains(&events[0].announcement_key()));
    }

    #[test]
    fn test_soon_fires_once_inside_window() {
        let events = vec![workshop()];
        let mut state = AnnouncementState::default();
        let first = evaluate_tick(at(14, 52), &events, &mut state);
        assert_eq!(kinds(&first), vec![NotificationKind::Soon]);

        let again = evaluate_tick(at(14, 55), &events, &mut state);
        assert!(again.is_empty());
    }

    #[test]
    fn test_live_fires_at_start_without_soon_refire() {
        let events = vec![workshop()];
        let mut state = AnnouncementState::default();
        evaluate_tick(at(14, 52), &events, &mut state);

        let at_start = evaluate_tick(at(15, 0), &events, &mut state);
        assert_eq!(kinds(&at_start), vec![NotificationKind::Live]);
    }

    #[test]
    fn test_nothing_fires_at_or_after_end() {
        let events = vec![workshop()];
        let mut state = AnnouncementState::default();
        assert!(evaluate_tick(at(16, 30), &events, &mut state).is_empty());
        assert!(evaluate_tick(at(16, 31), &events, &mut state).is_empty());
        assert!(state.soon.is_empty());
        assert!(state.live.is_empty());
    }

    #[test]
    fn test_missed_lead_window_skips_straight_to_live() {
        // First tick lands after start: the soon window was missed, only
        // live fires.
        let events = vec![workshop()];
        let mut state = AnnouncementState::default();
        let fired = evaluate_tick(at(15, 20), &events, &mut state);
        assert_eq!(kinds(&fired), vec![NotificationKind::Live]);
        assert!(state.soon.is_empty());
    }

    #[test]
    fn test_idempotent_over_nondecreasing_ticks() {
        let events = vec![workshop()];
        let mut state = AnnouncementState::default();
        let mut all = Vec::new();
        for minute in 0..=120 {
            let now = at(14, 0) + chrono::Duration::minutes(minute);
            all.extend(evaluate_tick(now, &events, &mut state));
        }
        assert_eq!(
            kinds(&all),
            vec![NotificationKind::Soon, NotificationKind::Live]
        );
    }

    #[test]
    fn test_preloaded_state_suppresses_refire() {
        // Same shape as a restart mid-window: state reloaded from disk
        // already holds the key, so nothing fires again.
        let events = vec![workshop()];
        let mut state = AnnouncementState::default();
        state.soon.insert(events[0].announcement_key());
        assert!(evaluate_tick(at(14, 55), &events, &mut state).is_empty());
    }

    #[test]
    fn test_multiple_events_fire_in_sequence_order() {
        let first = workshop();
        let second =
            Event::new("Overlap Talk", at(14, 55), at(16, 0), "A Block", None).unwrap();
        let events = vec![first, second];
        let mut state = AnnouncementState::default();

        let fired = evaluate_tick(at(14, 55), &events, &mut state);
        assert_eq!(fired.len(), 2);
        assert_eq!(fired[0].event.title, "AI Workshop");
        assert_eq!(fired[0].kind, NotificationKind::Soon);
        assert_eq!(fired[1].event.title, "Overlap Talk");
        assert_eq!(fired[1].kind, NotificationKind::Live);
    }

    #[test]
    fn test_message_bodies() {
        let soon = Notification {
            kind: NotificationKind::Soon,
            event: workshop(),
        };
        let text = soon.message();
        assert!(text.contains("Event starting soon!"));
        assert!(text.contains("AI Workshop"));
        assert!(text.contains("2026-01-14 15:00"));
        assert!(text.contains("Seminar Hall, D Block"));

        let live = Notification {
            kind: NotificationKind::Live,
            event: workshop(),
        };
        let text = live.message();
        assert!(text.contains("LIVE now!"));
        assert!(text.contains("Mark your attendance"));
    }
}
