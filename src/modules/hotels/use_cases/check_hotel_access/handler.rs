// Decides whether a user may see hotel data.
//
// The checks run in a fixed order and stop at the first failure:
// 1. the user has both a ticket and an enrollment, else NotFound
// 2. the ticket is not merely reserved, else PaymentRequired
// 3. the ticket type is in person and includes a hotel, else PaymentRequired

use std::sync::Arc;

use crate::modules::hotels::use_cases::errors::ApplicationError;
use crate::modules::ticketing::ports::{EnrollmentQueries, TicketQueries};
use crate::shared::core::primitives::UserId;

pub struct HotelAccessValidator {
    tickets: Arc<dyn TicketQueries + Send + Sync>,
    enrollments: Arc<dyn EnrollmentQueries + Send + Sync>,
}

impl HotelAccessValidator {
    pub fn new(
        tickets: Arc<dyn TicketQueries + Send + Sync>,
        enrollments: Arc<dyn EnrollmentQueries + Send + Sync>,
    ) -> Self {
        Self {
            tickets,
            enrollments,
        }
    }

    pub async fn validate(&self, user_id: UserId) -> Result<(), ApplicationError> {
        let ticket = self.tickets.find_ticket_by_user_id(user_id).await?;
        let enrollment = self
            .enrollments
            .find_enrollment_with_address_by_user_id(user_id)
            .await?;

        let (Some(ticket), Some(_)) = (ticket, enrollment) else {
            tracing::debug!(user_id, "no ticket or enrollment for user");
            return Err(ApplicationError::NotFound);
        };

        if !ticket.is_paid() {
            tracing::warn!(
                user_id,
                ticket_id = ticket.id,
                status = %ticket.status,
                "ticket is not paid"
            );
            return Err(ApplicationError::PaymentRequired);
        }

        let ticket_type = self
            .tickets
            .find_ticket_type_by_ticket_id(ticket.id)
            .await?
            .ok_or(ApplicationError::NotFound)?;

        if !ticket_type.grants_hotel_access() {
            tracing::warn!(
                user_id,
                ticket_type_id = ticket_type.id,
                is_remote = ticket_type.is_remote,
                includes_hotel = ticket_type.includes_hotel,
                "ticket type does not include a hotel"
            );
            return Err(ApplicationError::PaymentRequired);
        }

        Ok(())
    }
}
