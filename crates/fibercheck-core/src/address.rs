use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Address entered in the coverage form.
///
/// Every field is free text. On the wire all fields are optional; a missing
/// field decodes as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressQuery {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub civic: String,
}

impl Default for AddressQuery {
    fn default() -> Self {
        Self {
            country: "IT".to_string(),
            city: String::new(),
            postal_code: String::new(),
            street: String::new(),
            civic: String::new(),
        }
    }
}

impl AddressQuery {
    /// Whether the query has enough fields to be sent.
    ///
    /// Country, city and civic are required, plus at least one of postal
    /// code or street. Contents are not otherwise validated.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        !self.country.is_empty()
            && !self.city.is_empty()
            && (!self.postal_code.is_empty() || !self.street.is_empty())
            && !self.civic.is_empty()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Country => &self.country,
            Field::City => &self.city,
            Field::PostalCode => &self.postal_code,
            Field::Street => &self.street,
            Field::Civic => &self.civic,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Country => &mut self.country,
            Field::City => &mut self.city,
            Field::PostalCode => &mut self.postal_code,
            Field::Street => &mut self.street,
            Field::Civic => &mut self.civic,
        };
        *slot = value.into();
    }

    /// Query-string pairs in wire order. Empty fields are still sent.
    #[must_use]
    pub fn to_params(&self) -> [(&'static str, &str); 5] {
        Field::ALL.map(|field| (field.wire_name(), self.get(field)))
    }
}

/// One editable field of an [`AddressQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Country,
    City,
    PostalCode,
    Street,
    Civic,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Country,
        Field::City,
        Field::PostalCode,
        Field::Street,
        Field::Civic,
    ];

    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::Country => "country",
            Field::City => "city",
            Field::PostalCode => "postalCode",
            Field::Street => "street",
            Field::Civic => "civic",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for Field {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "country" => Ok(Field::Country),
            "city" => Ok(Field::City),
            "postalCode" | "postal_code" => Ok(Field::PostalCode),
            "street" => Ok(Field::Street),
            "civic" => Ok(Field::Civic),
            other => Err(CoreError::UnknownField(other.to_string())),
        }
    }
}
