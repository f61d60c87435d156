// Postgres ticketing lookups over the tables owned by the ticketing application.

use anyhow::Context;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::modules::ticketing::core::enrollment::{Address, Enrollment};
use crate::modules::ticketing::core::ticket::{Ticket, TicketType};
use crate::modules::ticketing::ports::{EnrollmentQueries, TicketQueries};
use crate::shared::core::primitives::{TicketId, UserId};

#[derive(Clone)]
pub struct PostgresTicketing {
    pool: PgPool,
}

impl PostgresTicketing {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct TicketRow {
    id: i32,
    status: String,
    #[sqlx(rename = "ticketTypeId")]
    ticket_type_id: i32,
    #[sqlx(rename = "enrollmentId")]
    enrollment_id: i32,
}

impl TryFrom<TicketRow> for Ticket {
    type Error = anyhow::Error;

    fn try_from(row: TicketRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            status: row.status.parse()?,
            ticket_type_id: row.ticket_type_id,
            enrollment_id: row.enrollment_id,
        })
    }
}

#[derive(FromRow)]
struct TicketTypeRow {
    id: i32,
    name: String,
    price: i32,
    #[sqlx(rename = "isRemote")]
    is_remote: bool,
    #[sqlx(rename = "includesHotel")]
    includes_hotel: bool,
}

impl From<TicketTypeRow> for TicketType {
    fn from(row: TicketTypeRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            is_remote: row.is_remote,
            includes_hotel: row.includes_hotel,
        }
    }
}

#[derive(FromRow)]
struct EnrollmentRow {
    id: i32,
    #[sqlx(rename = "userId")]
    user_id: i32,
    name: String,
    cpf: String,
    phone: String,
    #[sqlx(rename = "addressId")]
    address_id: Option<i32>,
    cep: Option<String>,
    street: Option<String>,
    city: Option<String>,
    state: Option<String>,
    number: Option<String>,
    neighborhood: Option<String>,
    #[sqlx(rename = "addressDetail")]
    address_detail: Option<String>,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(row: EnrollmentRow) -> Self {
        let address = row.address_id.map(|id| Address {
            id,
            cep: row.cep.unwrap_or_default(),
            street: row.street.unwrap_or_default(),
            city: row.city.unwrap_or_default(),
            state: row.state.unwrap_or_default(),
            number: row.number.unwrap_or_default(),
            neighborhood: row.neighborhood.unwrap_or_default(),
            address_detail: row.address_detail,
        });
        Self {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            cpf: row.cpf,
            phone: row.phone,
            address,
        }
    }
}

#[async_trait]
impl TicketQueries for PostgresTicketing {
    async fn find_ticket_by_user_id(&self, user_id: UserId) -> anyhow::Result<Option<Ticket>> {
        let row = sqlx::query_as::<_, TicketRow>(
            r#"
            SELECT t."id", t."status"::text AS "status", t."ticketTypeId", t."enrollmentId"
            FROM "Ticket" t
            JOIN "Enrollment" e ON e."id" = t."enrollmentId"
            WHERE e."userId" = $1
            ORDER BY t."id"
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .context("failed to load ticket by user")?;

        row.map(Ticket::try_from).transpose()
    }

    async fn find_ticket_type_by_ticket_id(
        &self,
        ticket_id: TicketId,
    ) -> anyhow::Result<Option<TicketType>> {
        let row = sqlx::query_as::<_, TicketTypeRow>(
            r#"
            SELECT tt."id", tt."name", tt."price", tt."isRemote", tt."includesHotel"
            FROM "Ticket" t
            JOIN "TicketType" tt ON tt."id" = t."ticketTypeId"
            WHERE t."id" = $1
            "#,
        )
        .bind(ticket_id)
        .fetch_optional(&self.pool)
        .await
        .context("failed to load ticket type")?;

        Ok(row.map(TicketType::from))
    }
}

#[async_trait]
impl EnrollmentQueries for PostgresTicketing {
    async fn find_enrollment_with_address_by_user_id(
        &self,
        user_id: UserId,
    ) -> anyhow::Result<Option<Enrollment>> {
        let row = sqlx::query_as::<_, EnrollmentRow>(
            r#"
            SELECT e."id", e."userId", e."name", e."cpf", e."phone",
                   a."id" AS "addressId", a."cep", a."street", a."city", a."state",
                   a."number", a."neighborhood", a."addressDetail"
            FROM "Enrollment" e
            LEFT JOIN "Address" a ON a."enrollmentId" = e."id"
            WHERE e."userId" = $1
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .context("failed to load enrollment")?;

        Ok(row.map(Enrollment::from))
    }
}
