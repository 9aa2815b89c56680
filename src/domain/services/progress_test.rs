use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use tokio::time;

use super::ProgressSink;
use super::ProgressTicker;

static MESSAGES: &[&str] = &["first", "second", "third"];

fn recorder() -> (ProgressSink, Arc<Mutex<Vec<String>>>) {
    let seen = Arc::new(Mutex::new(vec![]));
    let sink_seen = seen.clone();
    let sink: ProgressSink = Arc::new(move |message: &str| {
        sink_seen.lock().unwrap().push(message.to_string());
    });

    return (sink, seen);
}

fn snapshot(seen: &Arc<Mutex<Vec<String>>>) -> Vec<String> {
    return seen.lock().unwrap().clone();
}

#[tokio::test(start_paused = true)]
async fn it_emits_one_message_per_period() {
    let (sink, seen) = recorder();
    let ticker = ProgressTicker::start(MESSAGES, Duration::from_secs(2), sink);

    time::sleep(Duration::from_millis(1500)).await;
    assert!(snapshot(&seen).is_empty());

    time::sleep(Duration::from_secs(3)).await;
    assert_eq!(snapshot(&seen), vec!["first", "second"]);

    ticker.stop().await;
}

#[tokio::test(start_paused = true)]
async fn it_goes_quiet_after_exhausting_messages() {
    let (sink, seen) = recorder();
    let ticker = ProgressTicker::start(MESSAGES, Duration::from_secs(2), sink);

    time::sleep(Duration::from_secs(30)).await;
    assert_eq!(snapshot(&seen), vec!["first", "second", "third"]);

    ticker.stop().await;
}

#[tokio::test(start_paused = true)]
async fn it_emits_nothing_after_stop() {
    let (sink, seen) = recorder();
    let ticker = ProgressTicker::start(MESSAGES, Duration::from_secs(2), sink);

    time::sleep(Duration::from_millis(2500)).await;
    ticker.stop().await;
    let stopped = snapshot(&seen);

    time::sleep(Duration::from_secs(10)).await;
    assert_eq!(stopped, vec!["first"]);
    assert_eq!(snapshot(&seen), stopped);
}

#[tokio::test(start_paused = true)]
async fn it_stops_when_dropped() {
    let (sink, seen) = recorder();
    let ticker = ProgressTicker::start(MESSAGES, Duration::from_secs(2), sink);
    drop(ticker);

    time::sleep(Duration::from_secs(10)).await;
    assert!(snapshot(&seen).is_empty());
}
