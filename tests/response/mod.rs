use faultline::cause;
use faultline::message::Message;
use faultline::payload::{
    ErrorPayload, MultiErrorPayload, OperationError, OperationErrorGenerator, RequestDataError,
    SingleErrorPayload,
};
use faultline::resolver::source::Source;
use faultline::resolver::{code, message};
use faultline::response::{ErrorResponse, HttpStatus, PayloadResponseGenerator, ResponseGenerator};
use serde_json::json;

#[derive(Debug)]
struct Backlogged;

fn operation_generator() -> OperationErrorGenerator<Backlogged> {
    OperationErrorGenerator::<Backlogged>::builder()
        .cause(cause::fixed("BACKLOGGED"))
        .code(code::from_cause_key())
        .message(message::fixed("Try again later"))
        .build()
        .expect("complete configuration")
}

#[test]
fn test_response_generator_combines_payload_and_status() {
    let generator = PayloadResponseGenerator::builder()
        .payload(operation_generator())
        .status(HttpStatus::TOO_MANY_REQUESTS)
        .build()
        .expect("complete configuration");

    let response = generator.response_of(&Backlogged).expect("response expected");
    assert_eq!(response.status(), HttpStatus::new(429));
    let ErrorPayload::Operation(operation) = response.payload() else {
        panic!("expected an operation error payload");
    };
    assert_eq!(operation.code(), "BACKLOGGED");
}

#[test]
fn test_status_provider_can_be_a_closure() {
    let generator = PayloadResponseGenerator::builder()
        .payload(operation_generator())
        .status(|| HttpStatus::SERVICE_UNAVAILABLE)
        .build()
        .expect("complete configuration");

    let response = generator.response_of(&Backlogged).expect("response expected");
    assert_eq!(response.status().code(), 503);
}

#[test]
fn test_response_builder_lists_every_missing_field() {
    let error = PayloadResponseGenerator::<Backlogged>::builder()
        .build()
        .unwrap_err();
    let rendered = error.to_string();
    assert!(rendered.contains("payload generator"));
    assert!(rendered.contains("status provider"));
}

#[test]
fn test_operation_error_serializes_flat() {
    let payload = OperationError::new("NOT_FOUND", Message::plain("No such user"));
    assert_eq!(
        serde_json::to_value(&payload).expect("serializable"),
        json!({"code": "NOT_FOUND", "message": "No such user"})
    );
}

#[test]
fn test_request_data_error_serializes_with_source() {
    let payload = RequestDataError::new(
        "INVALID_PARAM",
        Message::plain("Bad page number"),
        Source::query("page").expect("valid source"),
    );
    assert_eq!(
        serde_json::to_value(&payload).expect("serializable"),
        json!({
            "code": "INVALID_PARAM",
            "message": "Bad page number",
            "source": {"type": "QUERY", "location": "page"}
        })
    );
}

#[test]
fn test_multi_error_payload_serializes_as_error_list() {
    let multi = MultiErrorPayload::new(vec![
        SingleErrorPayload::Operation(OperationError::new("A", Message::plain("first"))),
        SingleErrorPayload::Operation(OperationError::new("B", Message::plain("second"))),
    ])
    .expect("two errors are enough");
    assert_eq!(
        serde_json::to_value(&multi).expect("serializable"),
        json!({"errors": [
            {"code": "A", "message": "first"},
            {"code": "B", "message": "second"}
        ]})
    );
}

#[test]
fn test_multi_error_payload_rejects_fewer_than_two_errors() {
    let single = vec![SingleErrorPayload::Operation(OperationError::new(
        "A",
        Message::plain("only one"),
    ))];
    assert!(MultiErrorPayload::new(single).is_err());
    assert!(MultiErrorPayload::new(vec![]).is_err());
}

#[test]
fn test_full_response_serializes_status_and_payload() {
    let response = ErrorResponse::new(
        HttpStatus::BAD_REQUEST,
        ErrorPayload::Operation(OperationError::new("BAD", Message::plain("nope"))),
    );
    assert_eq!(
        serde_json::to_value(&response).expect("serializable"),
        json!({"status": 400, "payload": {"code": "BAD", "message": "nope"}})
    );
}
