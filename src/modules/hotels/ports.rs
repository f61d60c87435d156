// Read access to hotels and rooms. Both are maintained by an administrative
// process outside this service.

use async_trait::async_trait;

use crate::modules::hotels::core::hotel::{Hotel, HotelWithRooms};
use crate::shared::core::primitives::HotelId;

#[async_trait]
pub trait HotelQueries {
    /// Every hotel, in the storage's natural order.
    async fn list_hotels(&self) -> anyhow::Result<Vec<Hotel>>;

    /// The hotel with that identifier and all of its rooms, if it exists.
    async fn find_hotel_with_rooms(
        &self,
        hotel_id: HotelId,
    ) -> anyhow::Result<Option<HotelWithRooms>>;
}
