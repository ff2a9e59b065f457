use super::*;
use serde_json::json;
use winbridge_protocols::channel::MethodHandler;

struct CountingHandler {
    name: &'static str,
}

impl MethodHandler for CountingHandler {
    fn channel(&self) -> &str {
        self.name
    }

    fn handle(&self, call: &MethodCall) -> MethodResponse {
        match call.method.as_str() {
            "ping" => MethodResponse::success("pong"),
            "echo" => MethodResponse::success(call.arguments.clone()),
            _ => MethodResponse::not_implemented(),
        }
    }
}

fn messenger() -> Messenger {
    let registry = Arc::new(ChannelRegistry::new());
    registry
        .register(Arc::new(CountingHandler { name: "window_manager" }))
        .unwrap();
    registry.register(Arc::new(CountingHandler { name: "other" })).unwrap();
    Messenger::new(registry, "window_manager")
}

#[test]
fn test_dispatch_default_channel() {
    let reply = messenger().dispatch(Envelope::new(MethodCall::new("ping")).with_id(7));
    assert_eq!(reply.id, json!(7));
    assert_eq!(reply.response, MethodResponse::success("pong"));
}

#[test]
fn test_dispatch_explicit_channel() {
    let envelope = Envelope::new(MethodCall::new("ping")).with_channel("other");
    let reply = messenger().dispatch(envelope);
    assert!(reply.response.is_success());
}

#[test]
fn test_dispatch_unknown_channel() {
    let envelope = Envelope::new(MethodCall::new("ping")).with_channel("missing");
    let reply = messenger().dispatch(envelope);
    assert_eq!(reply.response.error_code(), Some("channel_not_found"));
}

#[test]
fn test_dispatch_unknown_method_not_implemented() {
    let reply = messenger().dispatch(Envelope::new(MethodCall::new("frobnicate")));
    assert!(reply.response.is_not_implemented());
}

#[test]
fn test_dispatch_line() {
    let reply = messenger()
        .dispatch_line(r#"{"id": "a1", "method": "echo", "arguments": {"devicePixelRatio": 2.0}}"#);
    assert_eq!(reply.id, json!("a1"));
    assert_eq!(reply.response.result(), Some(&json!({"devicePixelRatio": 2.0})));
}

#[test]
fn test_dispatch_line_malformed() {
    let reply = messenger().dispatch_line("{not json");
    assert!(reply.id.is_null());
    assert_eq!(reply.response.error_code(), Some("malformed_envelope"));
}

#[test]
fn test_dispatch_line_missing_method() {
    let reply = messenger().dispatch_line(r#"{"id": 1}"#);
    assert_eq!(reply.response.error_code(), Some("malformed_envelope"));
}

#[test]
fn test_reply_serialization() {
    let reply = Reply {
        id: json!(3),
        response: MethodResponse::not_implemented(),
    };
    let json = serde_json::to_value(&reply).unwrap();
    assert_eq!(json, json!({"id": 3, "status": "not_implemented"}));
}

#[test]
fn test_reply_serialization_success() {
    let reply = Reply {
        id: json!(1),
        response: MethodResponse::success(true),
    };
    let json = serde_json::to_string(&reply).unwrap();
    let back: Reply = serde_json::from_str(&json).unwrap();
    assert_eq!(back, reply);
}

#[test]
fn test_default_channel_accessor() {
    assert_eq!(messenger().default_channel(), "window_manager");
    assert_eq!(messenger().registry().len(), 2);
}
