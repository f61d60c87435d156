use crate::modules::hotels::adapters::outbound::hotels_in_memory::InMemoryHotels;
use crate::modules::hotels::core::hotel::{Hotel, Room};
use crate::shared::core::primitives::HotelId;
use crate::tests::fixtures::{fixed_timestamp, next_id};

pub struct HotelBuilder {
    inner: Hotel,
}

impl Default for HotelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl HotelBuilder {
    pub fn new() -> Self {
        Self {
            inner: Hotel {
                id: next_id(),
                name: "Driven Resort".to_string(),
                image: "https://images.example.com/driven-resort.jpg".to_string(),
                created_at: fixed_timestamp(),
                updated_at: fixed_timestamp(),
            },
        }
    }

    pub fn id(mut self, v: HotelId) -> Self {
        self.inner.id = v;
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn image(mut self, v: impl Into<String>) -> Self {
        self.inner.image = v.into();
        self
    }

    pub fn build(self) -> Hotel {
        self.inner
    }
}

pub struct RoomBuilder {
    inner: Room,
}

#[allow(dead_code)]
impl RoomBuilder {
    pub fn new(hotel_id: HotelId) -> Self {
        Self {
            inner: Room {
                id: next_id(),
                name: "Single".to_string(),
                capacity: 1,
                hotel_id,
                created_at: fixed_timestamp(),
                updated_at: fixed_timestamp(),
            },
        }
    }

    pub fn id(mut self, v: i32) -> Self {
        self.inner.id = v;
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn capacity(mut self, v: i32) -> Self {
        self.inner.capacity = v;
        self
    }

    pub fn build(self) -> Room {
        self.inner
    }
}

pub async fn create_fake_hotel(store: &InMemoryHotels) -> Hotel {
    let hotel = HotelBuilder::new().build();
    store.insert_hotel(hotel.clone()).await;
    hotel
}

pub async fn create_fake_room(store: &InMemoryHotels, hotel_id: HotelId) -> Room {
    let room = RoomBuilder::new(hotel_id).capacity(2).build();
    store
        .insert_room(room.clone())
        .await
        .expect("room fixture needs an existing hotel");
    room
}
