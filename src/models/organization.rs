//! Organization records

use serde::Serialize;
use sqlx::FromRow;

/// Organization from the `organization` table
#[derive(Debug, Clone, FromRow, Serialize, PartialEq, Eq)]
pub struct Organization {
    pub id: i32,
    pub name: String,
}

/// Projection used by the lookup-by-name endpoint
#[derive(Debug, Clone, FromRow, Serialize, PartialEq, Eq)]
pub struct OrganizationId {
    pub id: i32,
}
