use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use mongodb::{bson::doc, Client};
use std::collections::HashMap;
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::settings::{SiteSetting, SOCIAL_SETTINGS_KEYS, TRACKING_SETTINGS_KEYS};

/// Fetch a subset of settings as a key → value map. Absent and empty keys
/// are omitted; lookup failures degrade to an empty object so the public
/// pages never break on a settings read.
async fn settings_subset(client: &Client, keys: &[&str]) -> HashMap<String, String> {
    let collection: mongodb::Collection<SiteSetting> =
        client.database(DB_NAME).collection("Settings");

    let filter = doc! { "key": { "$in": keys.to_vec() } };

    match collection.find(filter).await {
        Ok(cursor) => match cursor.try_collect::<Vec<SiteSetting>>().await {
            Ok(rows) => rows
                .into_iter()
                .filter(|row| !row.value.is_empty())
                .map(|row| (row.key, row.value))
                .collect(),
            Err(err) => {
                eprintln!("Failed to collect settings: {:?}", err);
                HashMap::new()
            }
        },
        Err(err) => {
            eprintln!("Failed to find settings: {:?}", err);
            HashMap::new()
        }
    }
}

/// Public subset of site settings: social/contact links for the frontend
/// footer and chat buttons. No auth required.
pub async fn get_social_links(db: web::Data<Arc<Client>>) -> impl Responder {
    let client = db.into_inner();
    HttpResponse::Ok().json(settings_subset(&client, &SOCIAL_SETTINGS_KEYS).await)
}

/// Analytics tag ids for the frontend's tracking scripts. No auth required.
pub async fn get_tracking_settings(db: web::Data<Arc<Client>>) -> impl Responder {
    let client = db.into_inner();
    HttpResponse::Ok().json(settings_subset(&client, &TRACKING_SETTINGS_KEYS).await)
}
