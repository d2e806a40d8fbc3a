//! Last-response-wins sequencing for overlapping report requests.
//!
//! A user can fire a new lookup while an older one is still in flight. Each
//! request takes a ticket; beginning a new request cancels the previous
//! ticket, and only the most recently issued ticket may publish its report.
//! A stale result that slips past cancellation is discarded at publish time.

use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::BuildError;
use crate::model::WeatherReport;

/// Handle for one in-flight request.
#[derive(Debug)]
pub struct RequestTicket {
    token: u64,
    cancel: CancellationToken,
}

impl RequestTicket {
    pub fn token(&self) -> u64 {
        self.token
    }

    /// Trips when a newer request supersedes this one.
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }
}

#[derive(Debug, Default)]
pub struct ReportSession {
    latest: AtomicU64,
    inflight: Mutex<Option<CancellationToken>>,
    published: Mutex<Option<(u64, WeatherReport)>>,
}

impl ReportSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new request, cancelling the previous one.
    pub fn begin(&self) -> RequestTicket {
        let token = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let cancel = CancellationToken::new();

        let superseded = self
            .inflight
            .lock()
            .expect("session lock poisoned")
            .replace(cancel.clone());
        if let Some(previous) = superseded {
            previous.cancel();
        }

        RequestTicket { token, cancel }
    }

    /// True once a newer request has been issued after this ticket.
    pub fn is_superseded(&self, ticket: &RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) != ticket.token
    }

    /// Install a finished report if its ticket is still the newest issued.
    ///
    /// Returns false, leaving the slot untouched, for stale results.
    pub fn publish(&self, ticket: &RequestTicket, report: WeatherReport) -> bool {
        let mut slot = self.published.lock().expect("session lock poisoned");
        if self.latest.load(Ordering::SeqCst) != ticket.token {
            debug!(token = ticket.token, "discarding stale report");
            return false;
        }

        *slot = Some((ticket.token, report));
        true
    }

    /// Latest published report, if any. Always replaced wholesale, never
    /// patched field by field.
    pub fn current_report(&self) -> Option<WeatherReport> {
        self.published
            .lock()
            .expect("session lock poisoned")
            .as_ref()
            .map(|(_, report)| report.clone())
    }

    /// Drive a build future under this ticket.
    ///
    /// Returns `None` when the request is cancelled by a newer one or its
    /// outcome arrives stale; only the winning request's report reaches the
    /// published slot.
    pub async fn run<F>(
        &self,
        ticket: RequestTicket,
        build: F,
    ) -> Option<Result<WeatherReport, BuildError>>
    where
        F: Future<Output = Result<WeatherReport, BuildError>>,
    {
        tokio::select! {
            _ = ticket.cancel.cancelled() => {
                debug!(token = ticket.token, "request cancelled by a newer one");
                None
            }
            outcome = build => match outcome {
                Ok(report) => {
                    if self.publish(&ticket, report.clone()) {
                        Some(Ok(report))
                    } else {
                        None
                    }
                }
                Err(err) => {
                    if self.is_superseded(&ticket) {
                        None
                    } else {
                        Some(Err(err))
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::error::FetchError;
    use crate::model::{ConditionEntry, Sun, Temperature, Wind};

    fn report_named(name: &str) -> WeatherReport {
        WeatherReport {
            conditions: vec![ConditionEntry {
                code: 800,
                category: "Clear".to_string(),
                description: "clear sky".to_string(),
                icon_id: "01d".to_string(),
            }],
            temperature: Temperature { current: 295.0, feels_like: 295.0, min: 294.0, max: 296.0 },
            pressure_hpa: 1015,
            humidity_pct: 40,
            wind: Wind { speed_mps: 1.2, direction_deg: 90 },
            sun: Sun { sunrise_epoch: 1_661_834_187, sunset_epoch: 1_661_879_925 },
            location_name: name.to_string(),
            city_id: 0,
        }
    }

    #[test]
    fn tickets_are_monotonic() {
        let session = ReportSession::new();
        let first = session.begin();
        let second = session.begin();
        assert!(second.token() > first.token());
    }

    #[test]
    fn stale_ticket_cannot_overwrite_newer_report() {
        let session = ReportSession::new();
        let stale = session.begin();
        let newer = session.begin();

        assert!(session.publish(&newer, report_named("new")));
        assert!(!session.publish(&stale, report_named("old")));

        assert_eq!(session.current_report().unwrap().location_name, "new");
    }

    #[test]
    fn stale_ticket_is_discarded_even_before_newer_publishes() {
        let session = ReportSession::new();
        let stale = session.begin();
        let _newer = session.begin();

        assert!(!session.publish(&stale, report_named("old")));
        assert!(session.current_report().is_none());
    }

    #[tokio::test]
    async fn slow_first_request_loses_to_fast_second() {
        let session = ReportSession::new();

        let slow = session.begin();
        let fast = session.begin();

        let (first, second) = tokio::join!(
            session.run(slow, async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                Ok(report_named("slow"))
            }),
            session.run(fast, async {
                tokio::time::sleep(Duration::from_millis(10)).await;
                Ok(report_named("fast"))
            }),
        );

        assert!(first.is_none());
        assert_eq!(second.unwrap().unwrap().location_name, "fast");
        assert_eq!(session.current_report().unwrap().location_name, "fast");
    }

    #[tokio::test]
    async fn superseded_request_is_cancelled_promptly() {
        let session = ReportSession::new();
        let ticket = session.begin();

        let pending = session.run(ticket, async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(report_named("never"))
        });
        tokio::pin!(pending);

        // Give the slow request a head start, then supersede it.
        tokio::select! {
            biased;
            _ = &mut pending => panic!("request should still be in flight"),
            _ = tokio::time::sleep(Duration::from_millis(10)) => {}
        }
        let _newer = session.begin();

        let outcome =
            tokio::time::timeout(Duration::from_secs(1), pending).await.expect("cancelled");
        assert!(outcome.is_none());
        assert!(session.current_report().is_none());
    }

    #[tokio::test]
    async fn stale_failure_is_suppressed() {
        let session = ReportSession::new();
        let stale = session.begin();
        let newer = session.begin();

        assert!(session.publish(&newer, report_named("new")));

        // The stale build finishing with an error after being superseded
        // must not surface it; the ticket was already cancelled.
        let outcome = session
            .run(stale, async { Err(BuildError::Fetch(FetchError::Network("reset".into()))) })
            .await;

        assert!(outcome.is_none());
        assert_eq!(session.current_report().unwrap().location_name, "new");
    }
}
