use crate::helpers::JsonResponse;
use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::Result;

/// Catch-all for 5xx responses that did not come out as an envelope
/// (panicking extractors, framework errors). Envelopes pass through untouched.
pub fn error_handlers<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().default_handler_server(render_server_error)
}

fn render_server_error<B>(res: ServiceResponse<B>) -> Result<ErrorHandlerResponse<B>> {
    let is_json = res
        .response()
        .headers()
        .get(header::CONTENT_TYPE)
        .map_or(false, |value| value == "application/json");
    if is_json {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let status = res.status();
    tracing::error!("Unhandled server error, status: {}", status);
    let (req, _) = res.into_parts();
    let response = JsonResponse::<()>::build()
        .to_response(status, "Internal server error")
        .map_into_right_body();

    Ok(ErrorHandlerResponse::Response(ServiceResponse::new(req, response)))
}
