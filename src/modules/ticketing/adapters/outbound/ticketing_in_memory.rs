// In memory ticketing store.
//
// Purpose
// - Serve ticket, ticket type and enrollment lookups without a database.
//
// Responsibilities
// - Keep rows in maps keyed by identifier.
// - Resolve a user's ticket through the user's enrollment, like the relational schema does.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::modules::ticketing::core::enrollment::Enrollment;
use crate::modules::ticketing::core::ticket::{Ticket, TicketType};
use crate::modules::ticketing::ports::{EnrollmentQueries, TicketQueries};
use crate::shared::core::primitives::{EnrollmentId, TicketId, TicketTypeId, UserId};

#[derive(Default)]
pub struct InMemoryTicketing {
    enrollments: RwLock<BTreeMap<EnrollmentId, Enrollment>>,
    ticket_types: RwLock<BTreeMap<TicketTypeId, TicketType>>,
    tickets: RwLock<BTreeMap<TicketId, Ticket>>,
    is_offline: bool,
}

impl InMemoryTicketing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn insert_enrollment(&self, enrollment: Enrollment) {
        self.enrollments
            .write()
            .await
            .insert(enrollment.id, enrollment);
    }

    pub async fn insert_ticket_type(&self, ticket_type: TicketType) {
        self.ticket_types
            .write()
            .await
            .insert(ticket_type.id, ticket_type);
    }

    pub async fn insert_ticket(&self, ticket: Ticket) {
        self.tickets.write().await.insert(ticket.id, ticket);
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Ticketing repository offline"));
        }
        Ok(())
    }

    async fn enrollment_of(&self, user_id: UserId) -> Option<Enrollment> {
        self.enrollments
            .read()
            .await
            .values()
            .find(|enrollment| enrollment.user_id == user_id)
            .cloned()
    }
}

#[async_trait]
impl TicketQueries for InMemoryTicketing {
    async fn find_ticket_by_user_id(&self, user_id: UserId) -> anyhow::Result<Option<Ticket>> {
        self.ensure_online()?;

        let Some(enrollment) = self.enrollment_of(user_id).await else {
            return Ok(None);
        };
        Ok(self
            .tickets
            .read()
            .await
            .values()
            .find(|ticket| ticket.enrollment_id == enrollment.id)
            .cloned())
    }

    async fn find_ticket_type_by_ticket_id(
        &self,
        ticket_id: TicketId,
    ) -> anyhow::Result<Option<TicketType>> {
        self.ensure_online()?;

        let Some(ticket_type_id) = self
            .tickets
            .read()
            .await
            .get(&ticket_id)
            .map(|ticket| ticket.ticket_type_id)
        else {
            return Ok(None);
        };
        Ok(self.ticket_types.read().await.get(&ticket_type_id).cloned())
    }
}

#[async_trait]
impl EnrollmentQueries for InMemoryTicketing {
    async fn find_enrollment_with_address_by_user_id(
        &self,
        user_id: UserId,
    ) -> anyhow::Result<Option<Enrollment>> {
        self.ensure_online()?;
        Ok(self.enrollment_of(user_id).await)
    }
}
