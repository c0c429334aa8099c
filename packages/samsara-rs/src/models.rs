use serde::{Deserialize, Serialize};

/// A driver record as returned by `GET /fleet/drivers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub driver_activation_status: DriverStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DriverStatus {
    Active,
    Deactivated,
}

impl Driver {
    pub fn is_inactive(&self) -> bool {
        self.driver_activation_status != DriverStatus::Active
    }
}

/// Cursor metadata attached to paginated list responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub end_cursor: String,
    pub has_next_page: bool,
}

/// Envelope for one page of a driver list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriversResponse {
    pub data: Vec<Driver>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl DriversResponse {
    /// Cursor for the next page, if the response says one exists.
    ///
    /// Samsara sends an empty `endCursor` on the final page; treat that the
    /// same as `hasNextPage: false`.
    pub fn next_cursor(&self) -> Option<&str> {
        self.pagination
            .as_ref()
            .filter(|pagination| pagination.has_next_page && !pagination.end_cursor.is_empty())
            .map(|pagination| pagination.end_cursor.as_str())
    }
}
