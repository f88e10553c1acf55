use mongodb::{
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client,
};
use std::sync::Arc;
use std::time::Duration;

pub const DB_NAME: &str = "Rental";

const CONNECT_TIMEOUT_SECS: u64 = 10;
const SERVER_SELECTION_TIMEOUT_SECS: u64 = 10;
const MAX_POOL_SIZE: u32 = 10;
const MIN_POOL_SIZE: u32 = 1;

/// Build the shared client every handler clones. The ping is a startup
/// smoke check only; a failure is reported but does not abort, since the
/// deployment may bring the database up after the API.
pub async fn create_mongo_client(uri: &String) -> Arc<Client> {
    println!("Connecting to MongoDB: {}", uri);

    let mut client_options = ClientOptions::parse(uri)
        .await
        .expect("MongoDB URI may be incorrect! Failed to parse.");

    client_options.connect_timeout = Some(Duration::from_secs(CONNECT_TIMEOUT_SECS));
    client_options.server_selection_timeout =
        Some(Duration::from_secs(SERVER_SELECTION_TIMEOUT_SECS));
    client_options.max_pool_size = Some(MAX_POOL_SIZE);
    client_options.min_pool_size = Some(MIN_POOL_SIZE);

    // Stable API v1 keeps the driver compatible across server upgrades.
    let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
    client_options.server_api = Some(server_api);

    let client =
        Client::with_options(client_options).expect("Failed to create MongoDB client with options");

    match client
        .database(DB_NAME)
        .run_command(mongodb::bson::doc! {"ping": 1})
        .await
    {
        Ok(_) => println!("MongoDB ping succeeded"),
        Err(e) => {
            eprintln!("WARNING: MongoDB ping failed: {}", e);
            eprintln!("Continuing startup; handlers will retry on first use");
        }
    }

    Arc::new(client)
}
