// Rust guideline compliant 2026-10-18

//! Timing tests for the debouncer, run on a paused tokio clock.

use rental_core::{Config, Debouncer};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

fn recorder() -> (Arc<Mutex<Vec<u32>>>, impl Fn(u32) + Send + Sync + 'static) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    (calls, move |value: u32| sink.lock().unwrap().push(value))
}

#[tokio::test(start_paused = true)]
async fn test_rapid_calls_fire_once_with_last_args() {
    let (calls, callback) = recorder();
    let debouncer = Debouncer::new(Duration::from_millis(100), callback).unwrap();

    debouncer.call(1);
    sleep(Duration::from_millis(50)).await;
    debouncer.call(2);
    sleep(Duration::from_millis(50)).await;
    debouncer.call(3);
    sleep(Duration::from_millis(150)).await;

    assert_eq!(*calls.lock().unwrap(), vec![3]);
    assert!(!debouncer.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_calls_outside_window_each_fire() {
    let (calls, callback) = recorder();
    let debouncer = Debouncer::new(Duration::from_millis(100), callback).unwrap();

    debouncer.call(1);
    sleep(Duration::from_millis(150)).await;
    debouncer.call(2);
    sleep(Duration::from_millis(150)).await;

    assert_eq!(*calls.lock().unwrap(), vec![1, 2]);
}

#[tokio::test(start_paused = true)]
async fn test_nothing_fires_before_wait_elapses() {
    let (calls, callback) = recorder();
    let debouncer = Debouncer::new(Duration::from_millis(100), callback).unwrap();

    debouncer.call(7);
    sleep(Duration::from_millis(60)).await;

    assert!(calls.lock().unwrap().is_empty());
    assert!(debouncer.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_cancel_drops_pending_call() {
    let (calls, callback) = recorder();
    let debouncer = Debouncer::new(Duration::from_millis(100), callback).unwrap();

    debouncer.call(1);
    sleep(Duration::from_millis(30)).await;
    debouncer.cancel();
    sleep(Duration::from_millis(200)).await;

    assert!(calls.lock().unwrap().is_empty());
    assert!(!debouncer.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_from_config_uses_configured_delay() {
    let config = Config::from_toml_str("debounce_ms = 40\n").unwrap();
    let (calls, callback) = recorder();
    let debouncer = Debouncer::from_config(&config, callback).unwrap();
    assert_eq!(debouncer.wait(), Duration::from_millis(40));

    debouncer.call(5);
    sleep(Duration::from_millis(30)).await;
    assert!(calls.lock().unwrap().is_empty());

    sleep(Duration::from_millis(20)).await;
    assert_eq!(*calls.lock().unwrap(), vec![5]);
}
