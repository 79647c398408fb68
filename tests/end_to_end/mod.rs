use std::any::type_name;
use std::sync::Arc;

use faultline::cause::{self, Cause};
use faultline::error::BoxError;
use faultline::message::Message;
use faultline::payload::{ErrorPayload, OperationErrorGenerator, RequestDataErrorGenerator};
use faultline::registry::{CompositeResponseGenerator, FaultRegistry, TypeHierarchy};
use faultline::resolver::source::{self, Source, SourceKind};
use faultline::resolver::{code, message};
use faultline::response::{HttpStatus, PayloadResponseGenerator};

#[derive(Debug)]
struct RuntimeFault {
    detail: String,
}

/// Operation-error scenario: cause by runtime type, code mirroring the cause
/// key, a fixed message and a fixed 500 status.
#[test]
fn test_operation_error_scenario() {
    let hierarchy = Arc::new(TypeHierarchy::builder().build());

    let payload = OperationErrorGenerator::<RuntimeFault>::builder()
        .cause(cause::by_type(Arc::clone(&hierarchy)))
        .code(code::from_cause_key())
        .message(message::fixed("Service failure"))
        .build()
        .expect("complete configuration");
    let responder = PayloadResponseGenerator::builder()
        .payload(payload)
        .status(HttpStatus::INTERNAL_SERVER_ERROR)
        .build()
        .expect("complete configuration");
    let registry = FaultRegistry::builder()
        .hierarchy(hierarchy)
        .register::<RuntimeFault>(responder)
        .build();
    let composite = CompositeResponseGenerator::new(registry);

    let fault = RuntimeFault {
        detail: "x".to_owned(),
    };
    let response = composite.response_of(&fault).expect("response expected");

    assert_eq!(response.status().code(), 500);
    let ErrorPayload::Operation(operation) = response.payload() else {
        panic!("expected an operation error payload");
    };
    assert_eq!(operation.code(), type_name::<RuntimeFault>());
    assert_eq!(operation.message().text(), "Service failure");
}

#[derive(Debug)]
struct InvalidQueryParam {
    param: String,
    reason: String,
}

fn reason_message(cause: &Cause<'_, InvalidQueryParam>) -> Result<Message, BoxError> {
    Ok(Message::plain(cause.context().reason.clone()))
}

fn param_source(cause: &Cause<'_, InvalidQueryParam>) -> Result<Source, BoxError> {
    Ok(Source::query(cause.context().param.clone())?)
}

/// Request-data scenario: fixed code, message derived from the fault's text,
/// source pointing at the offending query parameter, status 400.
#[test]
fn test_request_data_error_scenario() {
    let payload = RequestDataErrorGenerator::<InvalidQueryParam>::builder()
        .cause(cause::fixed("invalid-query-param"))
        .code(code::fixed("INVALID_PARAM"))
        .message(message::from_fn(reason_message))
        .source(source::from_fn(param_source))
        .build()
        .expect("complete configuration");
    let responder = PayloadResponseGenerator::builder()
        .payload(payload)
        .status(HttpStatus::BAD_REQUEST)
        .build()
        .expect("complete configuration");
    let registry = FaultRegistry::builder()
        .register::<InvalidQueryParam>(responder)
        .build();
    let composite = CompositeResponseGenerator::new(registry);

    let fault = InvalidQueryParam {
        param: "queryParam1".to_owned(),
        reason: "must be a positive integer".to_owned(),
    };
    let response = composite.response_of(&fault).expect("response expected");

    assert_eq!(response.status().code(), 400);
    let ErrorPayload::RequestData(data_error) = response.payload() else {
        panic!("expected a request data error payload");
    };
    assert_eq!(data_error.code(), "INVALID_PARAM");
    assert_eq!(data_error.message().text(), "must be a positive integer");
    assert_eq!(
        data_error.source(),
        &Source::query("queryParam1").expect("valid source")
    );
    assert_eq!(data_error.source().kind(), SourceKind::Query);
}
