use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::{EnrollmentId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: i32,
    pub cep: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub number: String,
    pub neighborhood: String,
    pub address_detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub user_id: UserId,
    pub name: String,
    pub cpf: String,
    pub phone: String,
    pub address: Option<Address>,
}
