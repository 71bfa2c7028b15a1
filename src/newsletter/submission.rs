use std::future::Future;

use leptos::prelude::*;

use super::{Placement, SubscribeForm, Subscriber};

/// Runs one press of "Subscribe" to completion.
///
/// Validates and marks the form loading, sends the address through `list`,
/// records the outcome, then awaits `wait()` and returns the form to idle.
/// The reset is skipped if a newer attempt settled in the meantime. Writes go
/// through `try_update`, so a form whose widget is gone is left alone.
pub async fn submit_signup<S, W, F>(
    form: WriteSignal<SubscribeForm>,
    list: &S,
    placement: Placement,
    wait: W,
) where
    S: Subscriber,
    W: FnOnce() -> F,
    F: Future<Output = ()>,
{
    let Some((started, ticket)) = form.try_update(|f| {
        let started = f.begin();
        (started, f.reset_ticket())
    }) else {
        return;
    };

    let ticket = match started {
        Ok(attempt) => {
            let outcome = list.subscribe(&attempt.email).await;
            match &outcome {
                Ok(()) => log::info!("[Newsletter] {} signup sent", placement.name()),
                Err(err) => log::warn!("[Newsletter] {} signup failed: {}", placement.name(), err),
            }
            form.try_update(|f| f.finish(&attempt, outcome)).flatten()
        }
        Err(err) => {
            log::debug!("[Newsletter] {} rejected: {}", placement.name(), err);
            ticket
        }
    };

    if let Some(ticket) = ticket {
        wait().await;
        let _ = form.try_update(|f| f.expire(ticket));
    }
}
