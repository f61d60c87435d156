use std::sync::Arc;

use crate::modules::hotels::core::hotel::Hotel;
use crate::modules::hotels::ports::HotelQueries;
use crate::modules::hotels::use_cases::check_hotel_access::handler::HotelAccessValidator;
use crate::modules::hotels::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::UserId;

pub struct ListHotelsHandler {
    access: Arc<HotelAccessValidator>,
    hotels: Arc<dyn HotelQueries + Send + Sync>,
}

impl ListHotelsHandler {
    pub fn new(
        access: Arc<HotelAccessValidator>,
        hotels: Arc<dyn HotelQueries + Send + Sync>,
    ) -> Self {
        Self { access, hotels }
    }

    pub async fn handle(&self, user_id: UserId) -> Result<Vec<Hotel>, ApplicationError> {
        self.access.validate(user_id).await?;

        let hotels = self.hotels.list_hotels().await?;
        if hotels.is_empty() {
            return Err(ApplicationError::NotFound);
        }
        Ok(hotels)
    }
}
