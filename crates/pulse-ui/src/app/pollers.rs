//! Background polling for the status page.
//!
//! # Design
//! - Both checks fire once on start, then on fixed intervals.
//! - Dropping [`StatusPollers`] cancels both timers; in-flight requests still land in the store.
//! - The prompt is read from the store at tick time, so edits never restart a timer.

use crate::core::health::elapsed_ms;
use crate::core::poll::{HEALTH_POLL_INTERVAL_MS, PROVIDER_POLL_INTERVAL_MS};
use crate::core::store::{
    StatusStore, begin_health_check, begin_provider_fetch, finish_health_check,
    finish_provider_fetch,
};
use crate::services::api::ApiClient;
use chrono::Utc;
use gloo::console;
use gloo_timers::callback::Interval;
use js_sys::Date;
use std::rc::Rc;
use yewdux::prelude::Dispatch;

/// Owns the two poll timers for as long as the status page is mounted.
pub(crate) struct StatusPollers {
    health: Option<Interval>,
    providers: Option<Interval>,
}

impl StatusPollers {
    pub(crate) fn start(client: &Rc<ApiClient>, dispatch: &Dispatch<StatusStore>) -> Self {
        check_health(client, dispatch);
        refresh_providers(client, dispatch, false);

        let health = {
            let client = Rc::clone(client);
            let dispatch = dispatch.clone();
            Interval::new(HEALTH_POLL_INTERVAL_MS, move || {
                check_health(&client, &dispatch);
            })
        };
        let providers = {
            let client = Rc::clone(client);
            let dispatch = dispatch.clone();
            Interval::new(PROVIDER_POLL_INTERVAL_MS, move || {
                refresh_providers(&client, &dispatch, false);
            })
        };
        console::debug!("status pollers started");
        Self {
            health: Some(health),
            providers: Some(providers),
        }
    }

    fn stop(&mut self) {
        for timer in [self.health.take(), self.providers.take()]
            .into_iter()
            .flatten()
        {
            drop(timer.cancel());
        }
    }
}

impl Drop for StatusPollers {
    fn drop(&mut self) {
        self.stop();
        console::debug!("status pollers stopped");
    }
}

/// Issue one liveness request and record its outcome and latency.
pub(crate) fn check_health(client: &Rc<ApiClient>, dispatch: &Dispatch<StatusStore>) {
    dispatch.reduce_mut(begin_health_check);
    let client = Rc::clone(client);
    let dispatch = dispatch.clone();
    yew::platform::spawn_local(async move {
        let started_at = Date::now();
        let outcome = client.fetch_health_general().await;
        let response_time = elapsed_ms(started_at, Date::now());
        if let Err(err) = &outcome {
            console::warn!("health check failed", err.to_string());
        }
        dispatch.reduce_mut(|store| {
            finish_health_check(store, &outcome, response_time, Utc::now());
        });
    });
}

/// Issue one provider probe with the prompt currently in the store.
pub(crate) fn refresh_providers(
    client: &Rc<ApiClient>,
    dispatch: &Dispatch<StatusStore>,
    force_refresh: bool,
) {
    let prompt = dispatch.get().prompt.clone();
    dispatch.reduce_mut(begin_provider_fetch);
    let client = Rc::clone(client);
    let dispatch = dispatch.clone();
    yew::platform::spawn_local(async move {
        let outcome = client.fetch_provider_probe(force_refresh, &prompt).await;
        if let Err(err) = &outcome {
            console::warn!("provider probe failed", err.to_string());
        }
        dispatch.reduce_mut(|store| finish_provider_fetch(store, outcome, Utc::now()));
    });
}
