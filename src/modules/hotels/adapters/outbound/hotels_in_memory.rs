// In memory hotel store.
//
// Purpose
// - Serve the hotel queries in tests and local development without a database.
//
// Responsibilities
// - Keep hotels and rooms ordered by identifier.
// - Refuse rooms whose hotel does not exist.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::modules::hotels::core::hotel::{Hotel, HotelWithRooms, Room};
use crate::modules::hotels::ports::HotelQueries;
use crate::shared::core::primitives::{HotelId, RoomId};

#[derive(Default)]
pub struct InMemoryHotels {
    hotels: RwLock<BTreeMap<HotelId, Hotel>>,
    rooms: RwLock<BTreeMap<RoomId, Room>>,
    is_offline: bool,
}

impl InMemoryHotels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn insert_hotel(&self, hotel: Hotel) {
        self.hotels.write().await.insert(hotel.id, hotel);
    }

    pub async fn insert_room(&self, room: Room) -> anyhow::Result<()> {
        if !self.hotels.read().await.contains_key(&room.hotel_id) {
            anyhow::bail!("hotel {} does not exist", room.hotel_id);
        }
        self.rooms.write().await.insert(room.id, room);
        Ok(())
    }
}

#[async_trait]
impl HotelQueries for InMemoryHotels {
    async fn list_hotels(&self) -> anyhow::Result<Vec<Hotel>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Hotels repository offline"));
        }

        Ok(self.hotels.read().await.values().cloned().collect())
    }

    async fn find_hotel_with_rooms(
        &self,
        hotel_id: HotelId,
    ) -> anyhow::Result<Option<HotelWithRooms>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Hotels repository offline"));
        }

        let Some(hotel) = self.hotels.read().await.get(&hotel_id).cloned() else {
            return Ok(None);
        };
        let rooms = self
            .rooms
            .read()
            .await
            .values()
            .filter(|room| room.hotel_id == hotel_id)
            .cloned()
            .collect();
        Ok(Some(HotelWithRooms { hotel, rooms }))
    }
}
