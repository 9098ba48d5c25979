use goalchat_client::error::GatewayError;
use goalchat_client::gateway::{Gateway, HttpGateway};
use goalchat_core::models::chat::ChatMessage;

#[test]
fn url_points_at_llm_endpoint() {
    assert_eq!(
        HttpGateway::new("http://localhost:3000/").url(),
        "http://localhost:3000/api/llm"
    );
}

#[test]
fn unreachable_gateway_is_a_transport_error() {
    // Port 9 (discard) is closed on loopback in any sane test environment.
    let gateway = HttpGateway::new("http://127.0.0.1:9");
    let result = gateway.send(&[ChatMessage::system("P"), ChatMessage::user("Hi")]);
    assert!(matches!(result, Err(GatewayError::Transport(_))));
}
