use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{Error, HttpResponse};
use serde::Serialize;

/// Response envelope shared by every endpoint: `{status, message, data}`.
/// `status` repeats the HTTP code as a string and `data` is omitted on errors.
#[derive(Debug, Serialize)]
pub struct JsonResponse<T> {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Debug)]
pub struct JsonResponseBuilder<T> {
    data: Option<T>,
}

impl<T> JsonResponse<T>
where
    T: Serialize,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder { data: None }
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: Serialize,
{
    pub fn set_item(mut self, item: T) -> Self {
        self.data = Some(item);
        self
    }

    pub fn to_response<M: Into<String>>(self, code: StatusCode, message: M) -> HttpResponse {
        HttpResponse::build(code).json(JsonResponse {
            status: code.as_u16().to_string(),
            message: message.into(),
            data: self.data,
        })
    }

    pub fn ok<M: Into<String>>(self, message: M) -> HttpResponse {
        self.to_response(StatusCode::OK, message)
    }

    pub fn created<M: Into<String>>(self, message: M) -> HttpResponse {
        self.to_response(StatusCode::CREATED, message)
    }

    pub fn error<M: Into<String>>(self, code: StatusCode, message: M) -> Error {
        let message = message.into();
        let response = self.to_response(code, message.clone());
        InternalError::from_response(message, response).into()
    }

    pub fn bad_request<M: Into<String>>(self, message: M) -> Error {
        self.error(StatusCode::BAD_REQUEST, message)
    }
}
