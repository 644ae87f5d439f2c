use actix_web::dev;
use actix_web::http::header;
use actix_web::{web, Error, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, LocalBoxFuture};
use serde::de::DeserializeOwned;

/// Request body accepted as JSON or as a url-encoded form.
///
/// Any other content type, or an empty body, yields `T::default()` so that
/// handlers see every field as absent and report it themselves.
#[derive(Debug)]
pub struct Payload<T>(pub T);

impl<T> Payload<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

enum BodyKind {
    Json,
    Form,
    Empty,
}

fn body_kind(req: &HttpRequest) -> BodyKind {
    let empty = req
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .map_or(false, |value| value.trim() == "0");
    if empty {
        return BodyKind::Empty;
    }

    let content_type = req.content_type();
    if content_type == "application/json" || content_type.ends_with("+json") {
        BodyKind::Json
    } else if content_type == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Empty
    }
}

impl<T> FromRequest for Payload<T>
where
    T: DeserializeOwned + Default + 'static,
{
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut dev::Payload) -> Self::Future {
        match body_kind(req) {
            BodyKind::Json => {
                let fut = web::Json::<T>::from_request(req, payload);
                Box::pin(async move { fut.await.map(|json| Payload(json.into_inner())) })
            }
            BodyKind::Form => {
                let fut = web::Form::<T>::from_request(req, payload);
                Box::pin(async move { fut.await.map(|form| Payload(form.into_inner())) })
            }
            BodyKind::Empty => Box::pin(ready(Ok(Payload(T::default())))),
        }
    }
}
