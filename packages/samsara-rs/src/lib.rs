// Thin client for the Samsara fleet API.
// https://developers.samsara.com/reference/listdrivers

pub mod models;

use reqwest::Client;

use crate::models::{Driver, DriversResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.samsara.com";

#[derive(Debug, Clone)]
pub struct SamsaraOptions {
    pub api_token: String,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct SamsaraClient {
    options: SamsaraOptions,
}

impl SamsaraClient {
    pub fn new(options: SamsaraOptions) -> Self {
        Self { options }
    }

    /// Fetch the fleet's full driver roster.
    ///
    /// The endpoint is cursor-paginated (512 records per page); every page
    /// is followed so large fleets are not truncated.
    pub async fn get_drivers(&self) -> Result<Vec<Driver>, &'static str> {
        let mut drivers = Vec::new();
        let mut after: Option<String> = None;

        loop {
            let page = self.get_drivers_page(after.as_deref()).await?;
            let next = page.next_cursor().map(str::to_string);
            drivers.extend(page.data);

            match next {
                Some(cursor) => after = Some(cursor),
                None => return Ok(drivers),
            }
        }
    }

    async fn get_drivers_page(
        &self,
        after: Option<&str>,
    ) -> Result<DriversResponse, &'static str> {
        let url = format!("{}/fleet/drivers", self.options.base_url);

        let mut query: Vec<(&str, String)> = vec![("limit", "512".to_string())];
        if let Some(cursor) = after {
            query.push(("after", cursor.to_string()));
        }

        let client = Client::new();
        let res = client
            .get(url)
            .bearer_auth(&self.options.api_token)
            .query(&query)
            .send()
            .await;

        match res {
            Ok(response) => {
                let status = response.status();
                if !status.is_success() {
                    // Log the error response from Samsara
                    let error_body = response.text().await.unwrap_or_default();
                    eprintln!("Samsara error ({}): {}", status, error_body);
                    return Err("Samsara returned an error");
                }

                let result = response.json::<DriversResponse>().await;
                match result {
                    Ok(data) => Ok(data),
                    Err(e) => {
                        eprintln!("Failed to parse Samsara response: {}", e);
                        Err("Error parsing drivers response")
                    }
                }
            }
            Err(e) => {
                eprintln!("Request to Samsara failed: {}", e);
                Err("Error fetching drivers")
            }
        }
    }
}
