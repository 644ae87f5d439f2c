use crate::helpers::JsonResponse;
use crate::services::{ProductError, ProductService};
use crate::views;
use actix_web::{get, web, HttpResponse};

#[tracing::instrument(name = "Get product.", skip(service))]
#[get("/{id}")]
pub async fn item(
    path: web::Path<(String,)>,
    service: web::Data<ProductService>,
) -> Result<HttpResponse, ProductError> {
    let (id,) = path.into_inner();
    let product = service.get(&id).await?;

    Ok(JsonResponse::build()
        .set_item(views::product::Product::from(product))
        .ok("Product retrieved successfully."))
}

#[tracing::instrument(name = "Get all products.", skip(service))]
#[get("")]
pub async fn list(service: web::Data<ProductService>) -> Result<HttpResponse, ProductError> {
    let products = service
        .list()
        .await?
        .into_iter()
        .map(Into::into)
        .collect::<Vec<views::product::Product>>();

    // clients expect the list nested one level deeper: `data: [[...]]`
    Ok(JsonResponse::build()
        .set_item(vec![products])
        .ok("Product list retrieved successfully."))
}
