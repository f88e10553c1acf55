use actix_web::{web, HttpResponse, Responder};
use chrono::{FixedOffset, Utc};
use mongodb::bson::DateTime;
use mongodb::Client;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::data;
use crate::db::mongo::DB_NAME;
use crate::models::booking::{Booking, BookingInput};
use crate::models::route::RouteEstimate;
use crate::models::vehicle::Vehicle;
use crate::services::notification_service::{BookingNotification, NotificationService};
use crate::services::pricing_service::{PricingService, OTHER_DESTINATION, SERVICE_AIRPORT};
use crate::services::recommendation_service::RecommendationService;

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub service_type: String,
    #[serde(default)]
    pub airport: String,
    #[serde(default)]
    pub destination: String,
    pub passengers: u32,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub estimate: Option<RouteEstimate>,
    pub recommended: Vec<Vehicle>,
    pub top_pick: Option<Vehicle>,
}

/// Price estimate plus vehicle recommendation for the booking wizard.
/// Pure computation over the embedded catalog and route table.
pub async fn quote(input: web::Json<QuoteRequest>) -> impl Responder {
    let input = input.into_inner();
    let passengers = RecommendationService::clamp_passengers(input.passengers);

    let fleet = data::fleet();
    let routes = data::transfer_routes();

    let estimate = PricingService::estimate(
        &input.service_type,
        &input.airport,
        &input.destination,
        &routes,
    );

    HttpResponse::Ok().json(QuoteResponse {
        estimate,
        recommended: RecommendationService::recommend(passengers, &fleet),
        top_pick: RecommendationService::top_pick(passengers, &fleet),
    })
}

fn is_valid_email(email: &str) -> bool {
    let re = regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?)*$",
    );
    return re.unwrap().is_match(email);
}

/// Reference numbers look like SSRC-20260827-4821 (Bangkok date).
fn generate_reference() -> String {
    let offset = FixedOffset::east_opt(7 * 3600).unwrap();
    let date = Utc::now().with_timezone(&offset).format("%Y%m%d");
    let digits = rand::thread_rng().gen_range(1000..10000);
    format!("SSRC-{}-{}", date, digits)
}

fn validate(input: &BookingInput) -> Result<(), &'static str> {
    if input.service_type.is_empty() {
        return Err("Service type is required");
    }
    if input.travel_date.is_empty() {
        return Err("Travel date is required");
    }
    if input.travel_time.is_empty() {
        return Err("Travel time is required");
    }
    if input.passengers < 1 {
        return Err("Passenger count must be positive");
    }
    if input.customer_name.trim().is_empty() {
        return Err("Customer name is required");
    }
    if !is_valid_email(&input.customer_email) {
        return Err("Invalid email address");
    }
    if input.customer_phone.trim().is_empty() {
        return Err("Customer phone is required");
    }
    if input.preferred_contact == "LINE" && input.line_id.trim().is_empty() {
        return Err("LINE ID is required when contact method is LINE");
    }
    if input.service_type == SERVICE_AIRPORT
        && input.destination == OTHER_DESTINATION
        && input.custom_destination.trim().is_empty()
    {
        return Err("Custom destination is required");
    }
    Ok(())
}

/// The airport leg's endpoints depend on the transfer direction; "other"
/// destinations use the customer's free text.
fn resolve_locations(input: &BookingInput) -> (String, String) {
    if input.service_type != SERVICE_AIRPORT {
        return (
            input.pickup_location.clone(),
            input.dropoff_location.clone(),
        );
    }

    let destination = if input.destination == OTHER_DESTINATION {
        input.custom_destination.clone()
    } else {
        input.destination.clone()
    };

    if input.direction == "dropoff" {
        (destination, input.airport.clone())
    } else {
        (input.airport.clone(), destination)
    }
}

pub async fn submit_booking(
    db: web::Data<Arc<Client>>,
    input: web::Json<BookingInput>,
) -> impl Responder {
    let client = db.into_inner();
    let input = input.into_inner();

    if let Err(msg) = validate(&input) {
        return HttpResponse::BadRequest().body(msg);
    }

    let fleet = data::fleet();
    let routes = data::transfer_routes();

    let estimate = PricingService::estimate(
        &input.service_type,
        &input.airport,
        &input.destination,
        &routes,
    );
    let selected_vehicle = fleet.iter().find(|v| v.slug == input.vehicle_slug);

    // Route price wins; otherwise the chosen vehicle's day rate.
    let estimated_price = match (&estimate, selected_vehicle) {
        (Some(estimate), _) => estimate.van_price,
        (None, Some(vehicle)) => vehicle.price_per_day,
        (None, None) => 0,
    };

    let vehicle_name = selected_vehicle
        .map(|v| format!("{} ({})", v.name, v.vehicle_type))
        .unwrap_or_default();

    let reference = generate_reference();
    let (pickup_location, dropoff_location) = resolve_locations(&input);
    let is_airport = input.service_type == SERVICE_AIRPORT;
    let now = DateTime::now();

    let booking = Booking {
        id: None,
        reference_number: reference.clone(),
        service_type: input.service_type.clone(),
        pickup_location: pickup_location.clone(),
        dropoff_location: dropoff_location.clone(),
        airport: if is_airport {
            input.airport.clone()
        } else {
            String::new()
        },
        direction: if is_airport {
            input.direction.clone()
        } else {
            String::new()
        },
        travel_date: input.travel_date.clone(),
        travel_time: input.travel_time.clone(),
        num_days: if is_airport { 1 } else { input.num_days },
        passengers: input.passengers,
        luggage: input.luggage,
        vehicle_slug: input.vehicle_slug.clone(),
        vehicle_name: vehicle_name.clone(),
        estimated_price,
        customer_name: input.customer_name.clone(),
        customer_email: input.customer_email.clone(),
        customer_phone: input.customer_phone.clone(),
        country_code: input.country_code.clone(),
        preferred_contact: input.preferred_contact.clone(),
        line_id: input.line_id.clone(),
        flight_number: input.flight_number.clone(),
        hotel_name: input.hotel_name.clone(),
        special_notes: input.special_notes.clone(),
        status: "pending".to_string(),
        payment_status: "unpaid".to_string(),
        created_at: Some(now),
        updated_at: Some(now),
    };

    let collection: mongodb::Collection<Booking> =
        client.database(DB_NAME).collection("Bookings");

    match collection.insert_one(&booking).await {
        Ok(_) => {
            println!("New booking: {}", reference);

            let notification = BookingNotification {
                reference_number: reference.clone(),
                customer_name: booking.customer_name.clone(),
                customer_phone: booking.customer_phone.clone(),
                service_type: booking.service_type.clone(),
                pickup_location,
                dropoff_location,
                travel_date: booking.travel_date.clone(),
                travel_time: booking.travel_time.clone(),
                vehicle_name,
                estimated_price,
            };
            tokio::spawn(NotificationService::send_booking_notification(notification));

            HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "reference_number": reference,
            }))
        }
        Err(err) => {
            eprintln!("Failed to insert booking: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to create booking")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> BookingInput {
        BookingInput {
            service_type: "airport".to_string(),
            airport: "สุวรรณภูมิ (BKK)".to_string(),
            destination: "พัทยา".to_string(),
            custom_destination: String::new(),
            direction: "pickup".to_string(),
            pickup_location: String::new(),
            dropoff_location: String::new(),
            num_days: 1,
            travel_date: "2026-09-01".to_string(),
            travel_time: "08:00".to_string(),
            passengers: 4,
            luggage: 2,
            vehicle_slug: "toyota-commuter-vip".to_string(),
            customer_name: "Somchai T.".to_string(),
            customer_email: "somchai@example.com".to_string(),
            customer_phone: "0812345678".to_string(),
            country_code: "+66".to_string(),
            preferred_contact: "LINE".to_string(),
            line_id: "somchai_t".to_string(),
            flight_number: "TG123".to_string(),
            hotel_name: String::new(),
            special_notes: String::new(),
        }
    }

    #[test]
    fn test_validate_accepts_complete_input() {
        assert!(validate(&valid_input()).is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let mut input = valid_input();
        input.customer_email = "not-an-email".to_string();
        assert!(validate(&input).is_err());
    }

    #[test]
    fn test_validate_requires_line_id_for_line_contact() {
        let mut input = valid_input();
        input.line_id = String::new();
        assert!(validate(&input).is_err());

        input.preferred_contact = "Phone".to_string();
        assert!(validate(&input).is_ok());
    }

    #[test]
    fn test_validate_requires_custom_destination_text() {
        let mut input = valid_input();
        input.destination = OTHER_DESTINATION.to_string();
        assert!(validate(&input).is_err());

        input.custom_destination = "โรงแรมริมแม่น้ำ".to_string();
        assert!(validate(&input).is_ok());
    }

    #[test]
    fn test_resolve_locations_follows_direction() {
        let mut input = valid_input();
        let (pickup, dropoff) = resolve_locations(&input);
        assert_eq!(pickup, "สุวรรณภูมิ (BKK)");
        assert_eq!(dropoff, "พัทยา");

        input.direction = "dropoff".to_string();
        let (pickup, dropoff) = resolve_locations(&input);
        assert_eq!(pickup, "พัทยา");
        assert_eq!(dropoff, "สุวรรณภูมิ (BKK)");
    }

    #[test]
    fn test_resolve_locations_substitutes_custom_destination() {
        let mut input = valid_input();
        input.destination = OTHER_DESTINATION.to_string();
        input.custom_destination = "โรงแรมริมแม่น้ำ".to_string();

        let (_, dropoff) = resolve_locations(&input);
        assert_eq!(dropoff, "โรงแรมริมแม่น้ำ");
    }

    #[test]
    fn test_resolve_locations_non_airport_passthrough() {
        let mut input = valid_input();
        input.service_type = "daily".to_string();
        input.pickup_location = "โรงแรม A".to_string();
        input.dropoff_location = "โรงแรม B".to_string();

        let (pickup, dropoff) = resolve_locations(&input);
        assert_eq!(pickup, "โรงแรม A");
        assert_eq!(dropoff, "โรงแรม B");
    }

    #[test]
    fn test_generate_reference_format() {
        let reference = generate_reference();
        assert!(reference.starts_with("SSRC-"));
        let parts: Vec<&str> = reference.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[1].len(), 8);
        assert_eq!(parts[2].len(), 4);
        assert!(parts[2].parse::<u32>().is_ok());
    }
}
