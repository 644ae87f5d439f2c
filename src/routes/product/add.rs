use crate::forms;
use crate::helpers::{JsonResponse, Payload};
use crate::services::{ProductError, ProductService};
use crate::views;
use actix_web::{post, web, HttpResponse};

#[tracing::instrument(name = "Add product.", skip(form, service))]
#[post("")]
pub async fn item(
    form: Payload<forms::CreateProduct>,
    service: web::Data<ProductService>,
) -> Result<HttpResponse, ProductError> {
    let product = service.create(form.into_inner()).await?;

    Ok(JsonResponse::build()
        .set_item(views::product::Product::from(product))
        .created("Product created successfully."))
}
