use super::support::{aggregator, Failures, ManualClock, TestAggregator};
use serde_json::{json, Value};
use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;
use sysprobe::core::bridge::BridgeResponse;
use sysprobe::core::health::Ping;
use sysprobe::{Bridge, Call, ErrorCode, HealthReport, OverallStatus, QuickHealth};

type TestBridge = Bridge<Arc<super::support::FakeSource>, Arc<ManualClock>>;

fn bridge(failures: Failures) -> (TestBridge, Arc<ManualClock>) {
    let (health, clock): (TestAggregator, _) = aggregator(failures);
    (Bridge::new(health), clock)
}

fn started(failures: Failures) -> TestBridge {
    let (bridge, _clock) = bridge(failures);
    bridge.start();
    bridge
}

#[test]
fn test_calls_before_start_are_refused() {
    let (bridge, _clock) = bridge(Failures::default());
    assert!(!bridge.is_ready());

    for call in Call::ALL {
        let envelope = bridge.call(call);
        assert!(!envelope.success);
        assert_eq!(envelope.code, Some(ErrorCode::ServiceNotInitialized));
        assert_eq!(envelope.error.as_deref(), Some("health service not initialized"));
        assert!(envelope.data.is_none());
    }
}

#[test]
fn test_shutdown_refuses_again() {
    let bridge = started(Failures::default());
    assert!(bridge.call(Call::Ping).success);

    bridge.shutdown();
    assert_eq!(
        bridge.call(Call::Ping).code,
        Some(ErrorCode::ServiceNotInitialized)
    );
}

#[test]
fn test_health_status_envelope() {
    let bridge = started(Failures {
        disk: true,
        ..Default::default()
    });
    let envelope = bridge.call(Call::GetHealthStatus);

    // A degraded host is still a successful call
    assert!(envelope.success);
    assert!(envelope.error.is_none());
    let report: HealthReport = envelope.data_as().unwrap();
    assert_eq!(report.status, OverallStatus::Degraded);
    assert_eq!(report.summary.failed, 1);
}

#[test]
fn test_quick_health_and_ping_envelopes() {
    let (bridge, clock) = bridge(Failures::default());
    bridge.start();
    clock.advance(90);

    let quick: QuickHealth = bridge.call(Call::GetQuickHealth).data_as().unwrap();
    assert_eq!(quick.uptime_seconds, 90);

    let ping: Ping = bridge.call(Call::Ping).data_as().unwrap();
    assert_eq!(ping.message, "pong");
}

#[test]
fn test_system_info_failure_is_unexpected_error() {
    let bridge = started(Failures {
        system_info: true,
        ..Default::default()
    });
    let envelope = bridge.call(Call::GetSystemInfo);

    assert!(!envelope.success);
    assert_eq!(envelope.code, Some(ErrorCode::UnexpectedError));
    assert!(envelope
        .error
        .as_deref()
        .unwrap()
        .starts_with("Error getting system info: "));
}

#[test]
fn test_unknown_function() {
    let bridge = started(Failures::default());
    let envelope = bridge.call_named("reboot");

    assert!(!envelope.success);
    assert_eq!(envelope.code, Some(ErrorCode::ServiceNotFound));
    assert_eq!(envelope.error.as_deref(), Some("reboot service not found"));
}

#[test]
fn test_handle_line_echoes_id() {
    let bridge = started(Failures::default());
    let response = bridge.handle_line(r#"{"id": 7, "call": "ping"}"#);

    assert_eq!(response.id, Some(json!(7)));
    assert!(response.envelope.success);

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["id"], 7);
    assert_eq!(value["success"], true);
    assert_eq!(value["data"]["message"], "pong");
}

#[test]
fn test_handle_line_malformed() {
    let bridge = started(Failures::default());
    let response = bridge.handle_line("not json");

    assert!(response.id.is_none());
    assert_eq!(response.envelope.code, Some(ErrorCode::InvalidInput));
    assert!(response
        .envelope
        .error
        .unwrap()
        .starts_with("Malformed request: "));
}

#[test]
fn test_handle_line_keeps_id_of_invalid_request() {
    let bridge = started(Failures::default());

    let missing_call = bridge.handle_line(r#"{"id": 11}"#);
    assert_eq!(missing_call.id, Some(json!(11)));
    assert_eq!(missing_call.envelope.code, Some(ErrorCode::InvalidInput));

    let wrong_type = bridge.handle_line(r#"{"id": "x-1", "call": 5}"#);
    assert_eq!(wrong_type.id, Some(json!("x-1")));
    assert_eq!(wrong_type.envelope.code, Some(ErrorCode::InvalidInput));

    let not_an_object = bridge.handle_line("[1, 2]");
    assert!(not_an_object.id.is_none());
    assert_eq!(not_an_object.envelope.code, Some(ErrorCode::InvalidInput));
}

#[test]
fn test_serve_survives_non_utf8_line() {
    let bridge = started(Failures::default());
    let mut input = Vec::new();
    input.extend_from_slice(b"{\"id\": 1, \"call\": \"ping\"}\n");
    input.extend_from_slice(b"\xff\xfe\n");
    input.extend_from_slice(b"{\"id\": 2, \"call\": \"ping\"}\r\n");
    let mut output = Vec::new();

    let answered = bridge.serve(Cursor::new(input), &mut output).unwrap();
    assert_eq!(answered, 3);

    let text = String::from_utf8(output).unwrap();
    let responses: Vec<BridgeResponse> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(responses[0].id, Some(json!(1)));
    assert!(responses[0].envelope.success);

    assert!(responses[1].id.is_none());
    assert_eq!(responses[1].envelope.code, Some(ErrorCode::InvalidInput));

    assert_eq!(responses[2].id, Some(json!(2)));
    assert!(responses[2].envelope.success);
}

#[test]
fn test_serve_answers_each_line() {
    let bridge = started(Failures::default());
    let input = concat!(
        "{\"id\": \"a\", \"call\": \"get_quick_health\"}\n",
        "\n",
        "{\"id\": \"b\", \"call\": \"nope\"}\n",
        "{\"call\": \"get_system_info\"}\n",
    );
    let mut output = Vec::new();

    let answered = bridge.serve(Cursor::new(input), &mut output).unwrap();
    assert_eq!(answered, 3);

    let text = String::from_utf8(output).unwrap();
    let responses: Vec<BridgeResponse> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(responses.len(), 3);

    assert_eq!(responses[0].id, Some(json!("a")));
    assert!(responses[0].envelope.success);

    assert_eq!(responses[1].id, Some(json!("b")));
    assert_eq!(responses[1].envelope.code, Some(ErrorCode::ServiceNotFound));

    assert!(responses[2].id.is_none());
    let info: Value = responses[2].envelope.data.clone().unwrap();
    assert_eq!(info["hostname"], "probe-host");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_wait_ready_times_out() {
    let (bridge, _clock) = bridge(Failures::default());
    assert!(!bridge.wait_ready(Duration::from_millis(250)).await);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_wait_ready_sees_late_start() {
    let (bridge, _clock) = bridge(Failures::default());
    let bridge = Arc::new(bridge);

    let starter = Arc::clone(&bridge);
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(150)).await;
        starter.start();
    });

    assert!(bridge.wait_ready(Duration::from_secs(5)).await);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_call_when_ready() {
    let bridge = Arc::new(started(Failures::default()));
    let envelope = Arc::clone(&bridge)
        .call_when_ready(Call::GetHealthStatus, Duration::from_secs(1))
        .await;

    assert!(envelope.success);
    let report: HealthReport = envelope.data_as().unwrap();
    assert_eq!(report.status, OverallStatus::Healthy);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_call_when_never_ready() {
    let (bridge, _clock) = bridge(Failures::default());
    let envelope = Arc::new(bridge)
        .call_when_ready(Call::Ping, Duration::from_millis(250))
        .await;

    assert!(!envelope.success);
    assert_eq!(envelope.code, Some(ErrorCode::ServiceNotInitialized));
}
