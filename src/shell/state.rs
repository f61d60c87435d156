use sqlx::PgPool;
use std::sync::Arc;

use crate::modules::hotels::adapters::outbound::hotels_in_memory::InMemoryHotels;
use crate::modules::hotels::adapters::outbound::hotels_postgres::PostgresHotels;
use crate::modules::hotels::ports::HotelQueries;
use crate::modules::hotels::use_cases::check_hotel_access::handler::HotelAccessValidator;
use crate::modules::hotels::use_cases::get_hotel_with_rooms::handler::GetHotelWithRoomsHandler;
use crate::modules::hotels::use_cases::list_hotels::handler::ListHotelsHandler;
use crate::modules::sessions::adapters::outbound::sessions_in_memory::InMemorySessions;
use crate::modules::sessions::adapters::outbound::sessions_postgres::PostgresSessions;
use crate::modules::sessions::ports::SessionQueries;
use crate::modules::ticketing::adapters::outbound::ticketing_in_memory::InMemoryTicketing;
use crate::modules::ticketing::adapters::outbound::ticketing_postgres::PostgresTicketing;
use crate::modules::ticketing::ports::{EnrollmentQueries, TicketQueries};

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionQueries + Send + Sync>,
    pub list_hotels_handler: Arc<ListHotelsHandler>,
    pub get_hotel_with_rooms_handler: Arc<GetHotelWithRoomsHandler>,
}

impl AppState {
    pub fn new(
        hotels: Arc<dyn HotelQueries + Send + Sync>,
        tickets: Arc<dyn TicketQueries + Send + Sync>,
        enrollments: Arc<dyn EnrollmentQueries + Send + Sync>,
        sessions: Arc<dyn SessionQueries + Send + Sync>,
    ) -> Self {
        let access = Arc::new(HotelAccessValidator::new(tickets, enrollments));
        Self {
            sessions,
            list_hotels_handler: Arc::new(ListHotelsHandler::new(access.clone(), hotels.clone())),
            get_hotel_with_rooms_handler: Arc::new(GetHotelWithRoomsHandler::new(access, hotels)),
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        let ticketing = Arc::new(PostgresTicketing::new(pool.clone()));
        Self::new(
            Arc::new(PostgresHotels::new(pool.clone())),
            ticketing.clone(),
            ticketing,
            Arc::new(PostgresSessions::new(pool)),
        )
    }

    pub fn in_memory() -> Self {
        let ticketing = Arc::new(InMemoryTicketing::new());
        Self::new(
            Arc::new(InMemoryHotels::new()),
            ticketing.clone(),
            ticketing,
            Arc::new(InMemorySessions::new()),
        )
    }
}
