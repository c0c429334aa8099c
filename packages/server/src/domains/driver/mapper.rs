//! Pure transforms between Samsara records and driver contracts.

use samsara::models::Driver;

use super::types::{DriverAuthenticationRequest, DriverContract, DriverLoginResponse};

/// Initial login context carrying only the request fields.
///
/// Driver id and name stay empty until the Samsara record is resolved.
pub fn to_login_context(request: &DriverAuthenticationRequest) -> DriverLoginResponse {
    DriverLoginResponse {
        driver_id: String::new(),
        driver_name: String::new(),
        driver_user_name: request.user_name.clone(),
        phone_number: request.phone_number.clone(),
    }
}

/// Login context for a resolved driver record.
pub fn to_login_contract(driver: &Driver) -> DriverLoginResponse {
    DriverLoginResponse {
        driver_id: driver.id.clone(),
        driver_name: driver.name.clone(),
        driver_user_name: driver.username.clone().unwrap_or_default(),
        phone_number: driver.phone.clone().unwrap_or_default(),
    }
}

pub fn to_contract(driver: &Driver) -> DriverContract {
    DriverContract {
        id: driver.id.clone(),
        name: driver.name.clone(),
        user_name: driver.username.clone(),
        phone_number: driver.phone.clone(),
        active: !driver.is_inactive(),
    }
}

pub fn to_contracts(drivers: Vec<Driver>) -> Vec<DriverContract> {
    drivers.iter().map(to_contract).collect()
}

#[cfg(test)]
mod tests {
    use samsara::models::DriverStatus;

    use super::*;

    fn sample_driver() -> Driver {
        Driver {
            id: "12094".to_string(),
            name: "Maria Garcia".to_string(),
            username: Some("mgarcia".to_string()),
            phone: Some("+15550142291".to_string()),
            driver_activation_status: DriverStatus::Active,
        }
    }

    #[test]
    fn login_contract_takes_identity_from_the_record() {
        let contract = to_login_contract(&sample_driver());
        assert_eq!(contract.driver_id, "12094");
        assert_eq!(contract.driver_user_name, "mgarcia");
        assert_eq!(contract.phone_number, "+15550142291");
    }

    #[test]
    fn contracts_carry_activation_state() {
        let mut inactive = sample_driver();
        inactive.driver_activation_status = DriverStatus::Deactivated;

        let contracts = to_contracts(vec![sample_driver(), inactive]);
        assert!(contracts[0].active);
        assert!(!contracts[1].active);
    }
}
