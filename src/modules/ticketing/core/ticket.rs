use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::core::primitives::{EnrollmentId, TicketId, TicketTypeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Reserved,
    Paid,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Reserved => "RESERVED",
            TicketStatus::Paid => "PAID",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown ticket status: {0}")]
pub struct UnknownTicketStatus(pub String);

impl FromStr for TicketStatus {
    type Err = UnknownTicketStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RESERVED" => Ok(TicketStatus::Reserved),
            "PAID" => Ok(TicketStatus::Paid),
            other => Err(UnknownTicketStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub status: TicketStatus,
    pub ticket_type_id: TicketTypeId,
    pub enrollment_id: EnrollmentId,
}

impl Ticket {
    pub fn is_paid(&self) -> bool {
        self.status != TicketStatus::Reserved
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketType {
    pub id: TicketTypeId,
    pub name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

impl TicketType {
    /// Only in-person tickets that bundle accommodation grant hotel access.
    pub fn grants_hotel_access(&self) -> bool {
        !self.is_remote && self.includes_hotel
    }
}
