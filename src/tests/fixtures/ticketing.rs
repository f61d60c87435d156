use crate::modules::ticketing::adapters::outbound::ticketing_in_memory::InMemoryTicketing;
use crate::modules::ticketing::core::enrollment::{Address, Enrollment};
use crate::modules::ticketing::core::ticket::{Ticket, TicketStatus, TicketType};
use crate::shared::core::primitives::{EnrollmentId, TicketTypeId, UserId};
use crate::tests::fixtures::next_id;

pub struct EnrollmentBuilder {
    inner: Enrollment,
}

#[allow(dead_code)]
impl EnrollmentBuilder {
    pub fn new(user_id: UserId) -> Self {
        Self {
            inner: Enrollment {
                id: next_id(),
                user_id,
                name: "Teddy Test".to_string(),
                cpf: "12345678909".to_string(),
                phone: "(21) 98999-9999".to_string(),
                address: Some(Address {
                    id: next_id(),
                    cep: "20040-002".to_string(),
                    street: "Avenida Rio Branco".to_string(),
                    city: "Rio de Janeiro".to_string(),
                    state: "RJ".to_string(),
                    number: "100".to_string(),
                    neighborhood: "Centro".to_string(),
                    address_detail: None,
                }),
            },
        }
    }

    pub fn id(mut self, v: EnrollmentId) -> Self {
        self.inner.id = v;
        self
    }

    pub fn build(self) -> Enrollment {
        self.inner
    }
}

pub struct TicketTypeBuilder {
    inner: TicketType,
}

impl Default for TicketTypeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TicketTypeBuilder {
    pub fn new() -> Self {
        Self {
            inner: TicketType {
                id: next_id(),
                name: "Presencial + Com Hotel".to_string(),
                price: 600,
                is_remote: false,
                includes_hotel: true,
            },
        }
    }

    pub fn id(mut self, v: TicketTypeId) -> Self {
        self.inner.id = v;
        self
    }

    pub fn is_remote(mut self, v: bool) -> Self {
        self.inner.is_remote = v;
        self
    }

    pub fn includes_hotel(mut self, v: bool) -> Self {
        self.inner.includes_hotel = v;
        self
    }

    pub fn build(self) -> TicketType {
        self.inner
    }
}

pub async fn create_enrollment_with_address(
    store: &InMemoryTicketing,
    user_id: UserId,
) -> Enrollment {
    let enrollment = EnrollmentBuilder::new(user_id).build();
    store.insert_enrollment(enrollment.clone()).await;
    enrollment
}

pub async fn create_ticket_type(
    store: &InMemoryTicketing,
    is_remote: bool,
    includes_hotel: bool,
) -> TicketType {
    let ticket_type = TicketTypeBuilder::new()
        .is_remote(is_remote)
        .includes_hotel(includes_hotel)
        .build();
    store.insert_ticket_type(ticket_type.clone()).await;
    ticket_type
}

pub async fn create_ticket(
    store: &InMemoryTicketing,
    enrollment_id: EnrollmentId,
    ticket_type_id: TicketTypeId,
    status: TicketStatus,
) -> Ticket {
    let ticket = Ticket {
        id: next_id(),
        status,
        ticket_type_id,
        enrollment_id,
    };
    store.insert_ticket(ticket.clone()).await;
    ticket
}

/// Enrollment plus a paid, in person ticket that includes a hotel.
pub async fn create_entitled_user(store: &InMemoryTicketing, user_id: UserId) -> Ticket {
    let enrollment = create_enrollment_with_address(store, user_id).await;
    let ticket_type = create_ticket_type(store, false, true).await;
    create_ticket(store, enrollment.id, ticket_type.id, TicketStatus::Paid).await
}
