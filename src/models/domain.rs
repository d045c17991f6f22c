use serde::{Deserialize, Serialize};

/// A stored postal address with its coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Address {
    pub id: i64,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Client-supplied address fields, used for both insert and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressInput {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Address {
    /// Build a stored record from an input and the id the store assigned
    pub fn from_input(id: i64, input: AddressInput) -> Self {
        Self {
            id,
            street: input.street,
            city: input.city,
            state: input.state,
            country: input.country,
            latitude: input.latitude,
            longitude: input.longitude,
        }
    }

    /// Overwrite every mutable field in place
    pub fn apply(&mut self, input: AddressInput) {
        self.street = input.street;
        self.city = input.city;
        self.state = input.state;
        self.country = input.country;
        self.latitude = input.latitude;
        self.longitude = input.longitude;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(street: &str) -> AddressInput {
        AddressInput {
            street: street.to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            country: "USA".to_string(),
            latitude: 39.7817,
            longitude: -89.6501,
        }
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut address = Address::from_input(7, input("1 Main St"));
        address.apply(input("2 Elm St"));

        assert_eq!(address.id, 7);
        assert_eq!(address.street, "2 Elm St");
    }
}
