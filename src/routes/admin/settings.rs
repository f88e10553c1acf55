use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{options::UpdateOptions, Client};
use std::collections::HashMap;
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::settings::SiteSetting;

fn settings_collection(client: &Client) -> mongodb::Collection<SiteSetting> {
    client.database(DB_NAME).collection("Settings")
}

/// All settings flattened to a key → value object for the settings screen.
pub async fn get_settings(db: web::Data<Arc<Client>>) -> impl Responder {
    let client = db.into_inner();
    let collection = settings_collection(&client);

    match collection.find(doc! {}).await {
        Ok(cursor) => match cursor.try_collect::<Vec<SiteSetting>>().await {
            Ok(rows) => {
                let settings: HashMap<String, String> =
                    rows.into_iter().map(|row| (row.key, row.value)).collect();
                HttpResponse::Ok().json(settings)
            }
            Err(err) => {
                eprintln!("Failed to collect settings: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect settings")
            }
        },
        Err(err) => {
            eprintln!("Failed to find settings: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find settings")
        }
    }
}

/// Upsert many keys in one request; the screen saves the whole form at once.
pub async fn update_settings(
    db: web::Data<Arc<Client>>,
    input: web::Json<HashMap<String, String>>,
) -> impl Responder {
    let client = db.into_inner();
    let collection = settings_collection(&client);

    let options = UpdateOptions::builder().upsert(true).build();

    for (key, value) in input.into_inner() {
        let result = collection
            .update_one(doc! { "key": &key }, doc! { "$set": { "value": &value } })
            .with_options(options.clone())
            .await;

        if let Err(err) = result {
            eprintln!("Failed to upsert setting {}: {:?}", key, err);
            return HttpResponse::InternalServerError().body("Failed to update settings");
        }
    }

    HttpResponse::Ok().json(serde_json::json!({ "success": true }))
}
