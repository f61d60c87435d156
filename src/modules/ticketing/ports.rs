// Read access to the ticketing side of the application. Tickets, ticket types
// and enrollments are written elsewhere; this service only looks them up.

use async_trait::async_trait;

use crate::modules::ticketing::core::enrollment::Enrollment;
use crate::modules::ticketing::core::ticket::{Ticket, TicketType};
use crate::shared::core::primitives::{TicketId, UserId};

#[async_trait]
pub trait TicketQueries {
    /// The ticket bought through the user's enrollment, if any.
    async fn find_ticket_by_user_id(&self, user_id: UserId) -> anyhow::Result<Option<Ticket>>;

    async fn find_ticket_type_by_ticket_id(
        &self,
        ticket_id: TicketId,
    ) -> anyhow::Result<Option<TicketType>>;
}

#[async_trait]
pub trait EnrollmentQueries {
    async fn find_enrollment_with_address_by_user_id(
        &self,
        user_id: UserId,
    ) -> anyhow::Result<Option<Enrollment>>;
}
