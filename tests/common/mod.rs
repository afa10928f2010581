//! In-process stand-in for the analytics service.
//!
//! The server runs on its own thread with a current-thread runtime so the blocking client can
//! call it from an ordinary `#[test]`.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, mpsc};

use axum::Json;
use axum::Router;
use axum::http::Uri;
use axum::routing::{MethodRouter, get};
use serde_json::Value;

/// Request targets (`path?query`) seen by the server, in arrival order.
pub type RequestLog = Arc<Mutex<Vec<String>>>;

pub fn request_log() -> RequestLog {
  Arc::new(Mutex::new(Vec::new()))
}

/// GET handler that records the request target and answers with `body`.
pub fn respond(log: &RequestLog, body: Value) -> MethodRouter {
  let log = log.clone();
  get(move |uri: Uri| {
    let log = log.clone();
    let body = body.clone();
    async move {
      log.lock().unwrap().push(uri.to_string());
      Json(body)
    }
  })
}

/// Serves `router` on an ephemeral local port; returns its base URL.
pub fn spawn_server(router: Router) -> String {
  let (tx, rx) = mpsc::channel::<SocketAddr>();
  std::thread::spawn(move || {
    let rt = tokio::runtime::Builder::new_current_thread()
      .enable_all()
      .build()
      .expect("runtime");
    rt.block_on(async move {
      let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
      tx.send(listener.local_addr().expect("addr")).expect("send addr");
      axum::serve(listener, router).await.expect("serve");
    });
  });
  format!("http://{}", rx.recv().expect("server address"))
}

/// The two-hotspot witness graph used across the end-to-end tests.
pub fn two_hotspot_witness_graph() -> Value {
  serde_json::json!({
    "nodes": [
      {
        "address": "A",
        "name": "big-maroon-ant",
        "elevation": 10,
        "gain": 5,
        "geo_location": {"type": "Point", "coordinates": [-79.93, 40.41]}
      },
      {
        "address": "B",
        "name": "tiny-red-fox",
        "elevation": 20,
        "gain": 7,
        "geo_location": {"type": "Point", "coordinates": [-79.95, 40.44]}
      }
    ],
    "edges": [{"_from": "A", "_to": "B", "snr": 3, "rssi": -100, "distance_m": 4332.7}]
  })
}
