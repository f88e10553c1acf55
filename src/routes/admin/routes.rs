use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{options::FindOptions, Client};
use serde::Deserialize;
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::route::TransferRoute;

fn routes_collection(client: &Client) -> mongodb::Collection<TransferRoute> {
    client.database(DB_NAME).collection("Routes")
}

pub async fn list_routes(db: web::Data<Arc<Client>>) -> impl Responder {
    let client = db.into_inner();
    let collection = routes_collection(&client);

    let options = FindOptions::builder().sort(doc! { "sort_order": 1 }).build();

    match collection.find(doc! {}).with_options(options).await {
        Ok(cursor) => match cursor.try_collect::<Vec<TransferRoute>>().await {
            Ok(routes) => HttpResponse::Ok().json(routes),
            Err(err) => {
                eprintln!("Failed to collect routes: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect routes")
            }
        },
        Err(err) => {
            eprintln!("Failed to find routes: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find routes")
        }
    }
}

pub async fn add_route(
    db: web::Data<Arc<Client>>,
    input: web::Json<TransferRoute>,
) -> impl Responder {
    let client = db.into_inner();
    let collection = routes_collection(&client);

    let mut route = input.into_inner();
    route.id = None;

    match collection.insert_one(&route).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(err) => {
            eprintln!("Failed to insert route: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to insert route")
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RouteUpdate {
    pub id: String,
    pub from_location: Option<String>,
    pub to_location: Option<String>,
    pub travel_time: Option<String>,
    pub sedan_price: Option<u32>,
    pub van_price: Option<u32>,
    pub sort_order: Option<i32>,
}

pub async fn update_route(
    db: web::Data<Arc<Client>>,
    input: web::Json<RouteUpdate>,
) -> impl Responder {
    let client = db.into_inner();
    let collection = routes_collection(&client);

    let input = input.into_inner();
    let id = match ObjectId::parse_str(&input.id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid route id"),
    };

    let mut update_doc = doc! {};
    if let Some(from_location) = input.from_location {
        update_doc.insert("from_location", from_location);
    }
    if let Some(to_location) = input.to_location {
        update_doc.insert("to_location", to_location);
    }
    if let Some(travel_time) = input.travel_time {
        update_doc.insert("travel_time", travel_time);
    }
    if let Some(sedan_price) = input.sedan_price {
        update_doc.insert("sedan_price", sedan_price as i64);
    }
    if let Some(van_price) = input.van_price {
        update_doc.insert("van_price", van_price as i64);
    }
    if let Some(sort_order) = input.sort_order {
        update_doc.insert("sort_order", sort_order);
    }

    if update_doc.is_empty() {
        return HttpResponse::BadRequest().body("No fields to update");
    }

    match collection
        .update_one(doc! { "_id": id }, doc! { "$set": update_doc })
        .await
    {
        Ok(result) if result.matched_count == 0 => HttpResponse::NotFound().body("Route not found"),
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(err) => {
            eprintln!("Failed to update route: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to update route")
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub id: String,
}

pub async fn delete_route(
    db: web::Data<Arc<Client>>,
    params: web::Query<DeleteParams>,
) -> impl Responder {
    let client = db.into_inner();
    let collection = routes_collection(&client);

    let id = match ObjectId::parse_str(&params.id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid route id"),
    };

    match collection.delete_one(doc! { "_id": id }).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(err) => {
            eprintln!("Failed to delete route: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to delete route")
        }
    }
}
