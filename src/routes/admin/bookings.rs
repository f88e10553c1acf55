use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime};
use mongodb::{options::FindOptions, Client};
use serde::Deserialize;
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::booking::Booking;

const LIST_LIMIT: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub status: Option<String>,
    pub search: Option<String>,
}

/// Newest bookings first, optional status filter and reference/name search.
pub async fn list_bookings(
    db: web::Data<Arc<Client>>,
    params: web::Query<ListParams>,
) -> impl Responder {
    let client = db.into_inner();
    let collection: mongodb::Collection<Booking> =
        client.database(DB_NAME).collection("Bookings");

    let mut filter = doc! {};
    if let Some(status) = &params.status {
        if !status.is_empty() && status != "all" {
            filter.insert("status", status);
        }
    }
    if let Some(search) = &params.search {
        if !search.is_empty() {
            let pattern = regex::escape(search);
            filter.insert(
                "$or",
                vec![
                    doc! { "reference_number": { "$regex": &pattern, "$options": "i" } },
                    doc! { "customer_name": { "$regex": &pattern, "$options": "i" } },
                ],
            );
        }
    }

    let options = FindOptions::builder()
        .sort(doc! { "created_at": -1 })
        .limit(LIST_LIMIT)
        .build();

    match collection.find(filter).with_options(options).await {
        Ok(cursor) => match cursor.try_collect::<Vec<Booking>>().await {
            Ok(bookings) => HttpResponse::Ok().json(bookings),
            Err(err) => {
                eprintln!("Failed to collect bookings: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect bookings")
            }
        },
        Err(err) => {
            eprintln!("Failed to find bookings: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find bookings")
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BookingUpdate {
    pub id: String,
    pub status: Option<String>,
    pub payment_status: Option<String>,
    pub special_notes: Option<String>,
}

pub async fn update_booking(
    db: web::Data<Arc<Client>>,
    input: web::Json<BookingUpdate>,
) -> impl Responder {
    let client = db.into_inner();
    let collection: mongodb::Collection<Booking> =
        client.database(DB_NAME).collection("Bookings");

    let input = input.into_inner();
    let id = match ObjectId::parse_str(&input.id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid booking id"),
    };

    let mut update_doc = doc! {};
    if let Some(status) = input.status {
        update_doc.insert("status", status);
    }
    if let Some(payment_status) = input.payment_status {
        update_doc.insert("payment_status", payment_status);
    }
    if let Some(special_notes) = input.special_notes {
        update_doc.insert("special_notes", special_notes);
    }

    if update_doc.is_empty() {
        return HttpResponse::BadRequest().body("No fields to update");
    }
    update_doc.insert("updated_at", DateTime::now());

    match collection
        .update_one(doc! { "_id": id }, doc! { "$set": update_doc })
        .await
    {
        Ok(result) if result.matched_count == 0 => {
            HttpResponse::NotFound().body("Booking not found")
        }
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(err) => {
            eprintln!("Failed to update booking: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to update booking")
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub id: String,
}

pub async fn delete_booking(
    db: web::Data<Arc<Client>>,
    params: web::Query<DeleteParams>,
) -> impl Responder {
    let client = db.into_inner();
    let collection: mongodb::Collection<Booking> =
        client.database(DB_NAME).collection("Bookings");

    let id = match ObjectId::parse_str(&params.id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid booking id"),
    };

    match collection.delete_one(doc! { "_id": id }).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(err) => {
            eprintln!("Failed to delete booking: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to delete booking")
        }
    }
}
