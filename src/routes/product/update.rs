use crate::forms;
use crate::helpers::{JsonResponse, Payload};
use crate::services::{ProductError, ProductService};
use crate::views;
use actix_web::{patch, web, HttpResponse};

#[tracing::instrument(name = "Update product.", skip(form, service))]
#[patch("/{id}")]
pub async fn item(
    path: web::Path<(String,)>,
    form: Payload<forms::UpdateProduct>,
    service: web::Data<ProductService>,
) -> Result<HttpResponse, ProductError> {
    let (id,) = path.into_inner();
    let product = service.update(&id, form.into_inner()).await?;

    Ok(JsonResponse::build()
        .set_item(views::product::Product::from(product))
        .ok("Product updated successfully."))
}
