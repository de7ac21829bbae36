use std::{cell::RefCell, rc::Rc};

use futures::channel::oneshot;
use gloo_utils::window;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Position, PositionError};
use workout_tracker_lib::map::Coords;

type Reply = Rc<RefCell<Option<oneshot::Sender<Result<Coords, String>>>>>;

/// One-shot lookup of the browser's current position.
pub async fn current_position() -> Result<Coords, String> {
    let geolocation = window()
        .navigator()
        .geolocation()
        .map_err(|_| "geolocation is not supported by this browser".to_string())?;

    let (tx, rx) = oneshot::channel();
    let reply: Reply = Rc::new(RefCell::new(Some(tx)));

    let on_success = {
        let reply = reply.clone();
        Closure::once_into_js(move |position: Position| {
            let coords = position.coords();
            send(&reply, Ok(Coords::new(coords.latitude(), coords.longitude())));
        })
    };

    let on_error = {
        let reply = reply.clone();
        Closure::once_into_js(move |error: PositionError| {
            send(&reply, Err(error.message()));
        })
    };

    geolocation
        .get_current_position_with_error_callback(on_success.unchecked_ref(), Some(on_error.unchecked_ref()))
        .map_err(|e| format!("{e:?}"))?;

    rx.await.unwrap_or_else(|_| Err("position request was dropped".to_string()))
}

fn send(reply: &Reply, result: Result<Coords, String>) {
    if let Some(tx) = reply.borrow_mut().take() {
        let _ = tx.send(result);
    }
}
