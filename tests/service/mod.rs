use error_relay::config::ReportConfig;
use error_relay::{metadata, Channel, ErrorInfo, Failure, Metadata, Severity, StaticAmbient};
use serde_json::json;

use crate::support::{harness, harness_with, AGENT, NOW, URL};


#[test]
fn logs_with_default_error_severity() {
    let h = harness(ReportConfig::development());

    h.service.report(&Failure::new("Test error message")).log();

    let emission = h.local.single();
    assert_eq!(emission.channel, Channel::Error);
    assert!(emission.line.contains("[ERROR] Test error message"));
    assert_eq!(emission.payload["timestamp"], "2023-06-15T12:00:00.000Z");
    assert_eq!(emission.payload["url"], URL);
}

#[test]
fn each_severity_selects_its_channel_exactly_once() {
    let cases = [
        (Severity::Info, Channel::Info, "[INFO] Info level message"),
        (Severity::Warning, Channel::Warn, "[WARNING] Warning level message"),
        (Severity::Error, Channel::Error, "[ERROR] Error level message"),
        (Severity::Critical, Channel::Error, "[CRITICAL] Critical level message"),
    ];

    for (severity, channel, expected) in cases {
        let h = harness(ReportConfig::development());
        let message = expected.split_once("] ").unwrap().1;

        h.service.log_error(&Failure::new(message), severity, None, None);

        let emission = h.local.single();
        assert_eq!(emission.channel, channel, "{severity:?}");
        assert_eq!(emission.line, expected);
    }
}

#[test]
fn warning_at_fixed_time_and_location() {
    let h = harness(ReportConfig::development());

    h.service.log_error(&Failure::new("x"), Severity::Warning, None, None);

    let warns = h.local.on(Channel::Warn);
    assert_eq!(warns.len(), 1);
    assert_eq!(warns[0].payload["timestamp"], "2023-06-15T12:00:00.000Z");
    assert_eq!(warns[0].payload["url"], URL);
    assert!(h.local.on(Channel::Error).is_empty());
}

#[test]
fn metadata_is_forwarded_verbatim() {
    let h = harness(ReportConfig::development());
    let meta = metadata! { "userId" => "123", "action" => "login", "component" => "LoginForm" };

    let error = Failure::new("Error with metadata");
    h.service.log_error(&error, Severity::Error, Some(meta.clone()), None);

    assert_eq!(h.local.single().payload["metadata"], json!(meta));
}

#[test]
fn metadata_gains_no_extra_keys() {
    let h = harness(ReportConfig::development());
    let meta = metadata! { "a" => 1 };

    let record = h.service.prepare_record(&Failure::new("x"), Severity::Error, Some(meta), None);

    assert_eq!(record.metadata(), Some(&metadata! { "a" => 1 }));
}

#[test]
fn component_stack_is_passed_through() {
    let h = harness(ReportConfig::development());
    let stack = "at Component\nat App";

    h.service.log_error(&Failure::new("Component error"), Severity::Error, None, Some(stack));

    assert_eq!(h.local.single().payload["componentStack"], stack);
}

#[test]
fn payload_carries_stack_and_user_fields() {
    let h = harness(ReportConfig::development());

    let error = Failure::with_stack("boom", "at render\nat main");
    h.service.log_error(&error, Severity::Error, None, None);

    let payload = h.local.single().payload;
    assert_eq!(payload["stack"], "at render\nat main");
    assert!(payload["userId"].is_null());
    assert!(payload["metadata"].is_null());
}

#[test]
fn render_error_forces_error_severity_and_component_stack() {
    let h = harness(ReportConfig::development());
    let info = ErrorInfo::new("\n    at TestComponent\n    at App");

    h.service.log_render_error(&Failure::new("Chart render failed"), &info, None);

    let emission = h.local.single();
    assert_eq!(emission.channel, Channel::Error);
    assert!(emission.line.contains("[ERROR] Chart render failed"));
    assert_eq!(emission.payload["componentStack"], info.component_stack);
}

#[test]
fn render_error_with_metadata() {
    let h = harness(ReportConfig::production());
    let info = ErrorInfo::new("\n    at Component");
    let meta: Metadata =
        serde_json::from_value(json!({ "route": "/dashboard", "props": { "id": "123" } }))
            .unwrap();

    let error = Failure::new("Chart render failed with context");
    h.service.log_render_error(&error, &info, Some(meta.clone()));

    let sent = h.external.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].severity(), Severity::Error);
    assert_eq!(sent[0].component_stack(), Some(info.component_stack.as_str()));
    assert_eq!(sent[0].metadata(), Some(&meta));
}

#[test]
fn empty_component_stack_is_treated_as_absent() {
    let h = harness(ReportConfig::development());

    h.service.log_render_error(&Failure::new("no trace"), &ErrorInfo::default(), None);

    assert!(h.local.single().payload["componentStack"].is_null());
}

#[test]
fn development_never_reaches_external_sink() {
    let h = harness(ReportConfig::development());

    for severity in Severity::ALL {
        h.service.log_error(&Failure::new("local only"), severity, None, None);
    }

    assert_eq!(h.local.emissions().len(), 4);
    assert!(h.external.lock().unwrap().is_empty());
}

#[test]
fn production_forwards_the_full_record() {
    let h = harness(ReportConfig::production());

    h.service.log_error(&Failure::new("sent upstream"), Severity::Critical, None, None);

    assert_eq!(h.local.emissions().len(), 1);
    let sent = h.external.lock().unwrap();
    assert_eq!(sent.len(), 1);
    let record = &sent[0];
    assert_eq!(record.message(), "sent upstream");
    assert_eq!(record.timestamp(), NOW);
    assert_eq!(record.url(), URL);
    assert_eq!(record.user_agent(), AGENT);
    assert_eq!(record.severity(), Severity::Critical);
}

#[test]
fn ambient_is_read_at_call_time() {
    let h = harness_with(
        ReportConfig::production(),
        StaticAmbient::new(NOW + 5_000, "https://test-app.com/settings", "other-agent")
            .with_user_id("u-42"),
    );

    h.service.log_error(&Failure::new("late"), Severity::Error, None, None);

    let sent = h.external.lock().unwrap();
    assert_eq!(sent[0].timestamp(), NOW + 5_000);
    assert_eq!(sent[0].url(), "https://test-app.com/settings");
    assert_eq!(sent[0].user_agent(), "other-agent");
    assert_eq!(sent[0].user_id(), Some("u-42"));
    assert_eq!(h.local.single().payload["userId"], "u-42");
}

#[test]
fn external_payload_is_camel_case_record() {
    let h = harness(ReportConfig::production());

    h.service.log_error(
        &Failure::new("wire"),
        Severity::Warning,
        Some(metadata! { "k" => "v" }),
        Some("\n    at A"),
    );

    let sent = h.external.lock().unwrap();
    let wire = serde_json::to_value(&sent[0]).unwrap();
    assert_eq!(
        wire,
        json!({
            "message": "wire",
            "componentStack": "\n    at A",
            "timestamp": NOW,
            "severity": "warning",
            "metadata": { "k": "v" },
            "url": URL,
            "userAgent": AGENT,
        })
    );
}
