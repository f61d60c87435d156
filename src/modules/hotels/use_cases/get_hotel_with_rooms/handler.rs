use std::sync::Arc;

use crate::modules::hotels::core::hotel::HotelWithRooms;
use crate::modules::hotels::ports::HotelQueries;
use crate::modules::hotels::use_cases::check_hotel_access::handler::HotelAccessValidator;
use crate::modules::hotels::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::{HotelId, UserId};

pub struct GetHotelWithRoomsHandler {
    access: Arc<HotelAccessValidator>,
    hotels: Arc<dyn HotelQueries + Send + Sync>,
}

impl GetHotelWithRoomsHandler {
    pub fn new(
        access: Arc<HotelAccessValidator>,
        hotels: Arc<dyn HotelQueries + Send + Sync>,
    ) -> Self {
        Self { access, hotels }
    }

    /// `hotel_id` is `None` when the caller's identifier did not parse. Access is
    /// still checked first, then such an identifier matches no hotel.
    pub async fn handle(
        &self,
        hotel_id: Option<HotelId>,
        user_id: UserId,
    ) -> Result<HotelWithRooms, ApplicationError> {
        self.access.validate(user_id).await?;

        let Some(hotel_id) = hotel_id else {
            return Err(ApplicationError::NotFound);
        };
        self.hotels
            .find_hotel_with_rooms(hotel_id)
            .await?
            .ok_or(ApplicationError::NotFound)
    }
}
