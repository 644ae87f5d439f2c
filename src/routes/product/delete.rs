use crate::forms;
use crate::helpers::{JsonResponse, Payload};
use crate::services::{ProductError, ProductService};
use crate::views;
use actix_web::{delete, web, HttpResponse};

#[tracing::instrument(name = "Delete product.", skip(form, service))]
#[delete("/{id}")]
pub async fn item(
    path: web::Path<(String,)>,
    form: Payload<forms::DeleteProduct>,
    service: web::Data<ProductService>,
) -> Result<HttpResponse, ProductError> {
    let (id,) = path.into_inner();
    let id = service.delete(&id, form.into_inner()).await?;

    Ok(JsonResponse::build()
        .set_item(views::product::Deleted { id })
        .ok("Product deleted successfully."))
}
