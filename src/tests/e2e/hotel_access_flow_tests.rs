use axum::http::StatusCode;

use crate::modules::ticketing::core::ticket::{Ticket, TicketStatus};
use crate::tests::fixtures::app::TestApp;
use crate::tests::fixtures::hotels::{create_fake_hotel, create_fake_room};
use crate::tests::fixtures::ticketing::{
    create_enrollment_with_address, create_ticket, create_ticket_type,
};

async fn statuses(app: &TestApp, token: &str, hotel_id: i32) -> (StatusCode, StatusCode) {
    let (list, _) = app.get("/hotels", Some(token)).await;
    let (detail, _) = app.get(&format!("/hotels/{hotel_id}"), Some(token)).await;
    (list, detail)
}

#[tokio::test]
async fn a_user_unlocks_hotels_once_the_hotel_ticket_is_paid() {
    let app = TestApp::new();
    let hotel = create_fake_hotel(&app.hotels).await;
    create_fake_room(&app.hotels, hotel.id).await;
    let user_id = app.create_user();
    let token = app.generate_valid_token(user_id).await;

    assert_eq!(
        statuses(&app, &token, hotel.id).await,
        (StatusCode::NOT_FOUND, StatusCode::NOT_FOUND)
    );

    let enrollment = create_enrollment_with_address(&app.ticketing, user_id).await;
    assert_eq!(
        statuses(&app, &token, hotel.id).await,
        (StatusCode::NOT_FOUND, StatusCode::NOT_FOUND)
    );

    let ticket_type = create_ticket_type(&app.ticketing, false, true).await;
    let ticket = create_ticket(
        &app.ticketing,
        enrollment.id,
        ticket_type.id,
        TicketStatus::Reserved,
    )
    .await;
    assert_eq!(
        statuses(&app, &token, hotel.id).await,
        (StatusCode::PAYMENT_REQUIRED, StatusCode::PAYMENT_REQUIRED)
    );

    app.ticketing
        .insert_ticket(Ticket {
            status: TicketStatus::Paid,
            ..ticket
        })
        .await;
    assert_eq!(
        statuses(&app, &token, hotel.id).await,
        (StatusCode::OK, StatusCode::OK)
    );

    let (_, body) = app.get(&format!("/hotels/{}", hotel.id), Some(&token)).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["id"], hotel.id);
    assert_eq!(json["Rooms"].as_array().unwrap().len(), 1);
    assert_eq!(json["Rooms"][0]["hotelId"], hotel.id);
}

#[tokio::test]
async fn a_remote_ticket_never_unlocks_hotels_even_when_paid() {
    let app = TestApp::new();
    let hotel = create_fake_hotel(&app.hotels).await;
    let user_id = app.create_user();
    let token = app.generate_valid_token(user_id).await;
    let enrollment = create_enrollment_with_address(&app.ticketing, user_id).await;
    let ticket_type = create_ticket_type(&app.ticketing, true, true).await;
    create_ticket(
        &app.ticketing,
        enrollment.id,
        ticket_type.id,
        TicketStatus::Paid,
    )
    .await;

    assert_eq!(
        statuses(&app, &token, hotel.id).await,
        (StatusCode::PAYMENT_REQUIRED, StatusCode::PAYMENT_REQUIRED)
    );
}

#[tokio::test]
async fn access_is_decided_per_user() {
    let app = TestApp::new();
    let hotel = create_fake_hotel(&app.hotels).await;

    let entitled = app.create_user();
    let entitled_token = app.generate_valid_token(entitled).await;
    let enrollment = create_enrollment_with_address(&app.ticketing, entitled).await;
    let ticket_type = create_ticket_type(&app.ticketing, false, true).await;
    create_ticket(
        &app.ticketing,
        enrollment.id,
        ticket_type.id,
        TicketStatus::Paid,
    )
    .await;

    let stranger = app.create_user();
    let stranger_token = app.generate_valid_token(stranger).await;

    assert_eq!(
        statuses(&app, &entitled_token, hotel.id).await,
        (StatusCode::OK, StatusCode::OK)
    );
    assert_eq!(
        statuses(&app, &stranger_token, hotel.id).await,
        (StatusCode::NOT_FOUND, StatusCode::NOT_FOUND)
    );
}
