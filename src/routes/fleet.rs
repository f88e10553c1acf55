use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use mongodb::{bson::doc, options::FindOptions, Client};
use std::sync::Arc;

use crate::data;
use crate::db::mongo::DB_NAME;
use crate::models::route::TransferRoute;

/// The vehicle catalog. Source-embedded reference data.
pub async fn get_fleet() -> impl Responder {
    HttpResponse::Ok().json(data::fleet())
}

/// Airport transfer routes for the public price table. Admin-edited rows win
/// when any exist; otherwise the embedded table is served.
pub async fn get_routes(db: web::Data<Arc<Client>>) -> impl Responder {
    let client = db.into_inner();
    let collection: mongodb::Collection<TransferRoute> =
        client.database(DB_NAME).collection("Routes");

    let options = FindOptions::builder().sort(doc! { "sort_order": 1 }).build();

    match collection.find(doc! {}).with_options(options).await {
        Ok(cursor) => match cursor.try_collect::<Vec<TransferRoute>>().await {
            Ok(routes) if !routes.is_empty() => HttpResponse::Ok().json(routes),
            Ok(_) => HttpResponse::Ok().json(data::transfer_routes()),
            Err(err) => {
                eprintln!("Failed to collect routes: {:?}", err);
                HttpResponse::Ok().json(data::transfer_routes())
            }
        },
        Err(err) => {
            eprintln!("Failed to find routes: {:?}", err);
            HttpResponse::Ok().json(data::transfer_routes())
        }
    }
}
