use std::fmt;

use crate::utils::validation;

/// Floor used when none is given ("sin número").
pub const NO_FLOOR: &str = "S/N";
/// Stored instead of any postal code that is not exactly five digits.
pub const UNKNOWN_POSTAL_CODE: &str = "00000";

/// A postal address.
///
/// Construction never fails: a missing floor falls back to [`NO_FLOOR`] and a
/// malformed postal code is replaced by [`UNKNOWN_POSTAL_CODE`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    street: String,
    number: String,
    floor: String,
    postal_code: String,
    province: String,
    locality: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: impl Into<String>,
        floor: Option<&str>,
        postal_code: &str,
        province: impl Into<String>,
        locality: impl Into<String>,
    ) -> Self {
        let floor = match floor.map(str::trim) {
            Some(floor) if !floor.is_empty() => floor.to_string(),
            _ => NO_FLOOR.to_string(),
        };

        let postal_code = if validation::is_valid_postal_code(postal_code) {
            postal_code.to_string()
        } else {
            UNKNOWN_POSTAL_CODE.to_string()
        };

        Self {
            street: street.into(),
            number: number.into(),
            floor,
            postal_code,
            province: province.into(),
            locality: locality.into(),
        }
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn floor(&self) -> &str {
        &self.floor
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn province(&self) -> &str {
        &self.province
    }

    pub fn locality(&self) -> &str {
        &self.locality
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "C/ {}, nº {}, Piso: {}, {}, {}, {}",
            self.street, self.number, self.floor, self.locality, self.province, self.postal_code
        )
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_address_keeps_valid_fields() {
        let address = Address::new("Mayor", "12", Some("3B"), "28013", "Madrid", "Madrid");
        assert_eq!(address.street(), "Mayor");
        assert_eq!(address.number(), "12");
        assert_eq!(address.floor(), "3B");
        assert_eq!(address.postal_code(), "28013");
        assert_eq!(address.province(), "Madrid");
        assert_eq!(address.locality(), "Madrid");
    }

    #[test]
    fn test_address_floor_defaults() {
        let none = Address::new("Mayor", "1", None, "28013", "Madrid", "Madrid");
        let empty = Address::new("Mayor", "1", Some(""), "28013", "Madrid", "Madrid");
        let blank = Address::new("Mayor", "1", Some("   "), "28013", "Madrid", "Madrid");
        assert_eq!(none.floor(), NO_FLOOR);
        assert_eq!(empty.floor(), NO_FLOOR);
        assert_eq!(blank.floor(), NO_FLOOR);
    }

    #[test]
    fn test_address_invalid_postal_code_is_replaced() {
        let address = Address::new("Mayor", "1", None, "2801", "Madrid", "Madrid");
        assert_eq!(address.postal_code(), UNKNOWN_POSTAL_CODE);
    }

    #[test]
    fn test_address_display() {
        let address = Address::new("Real", "456", None, "41001", "Sevilla", "Dos Hermanas");
        assert_eq!(
            address.to_string(),
            "C/ Real, nº 456, Piso: S/N, Dos Hermanas, Sevilla, 41001"
        );
    }

    proptest! {
        #[test]
        fn five_digit_postal_codes_are_kept(code in "[0-9]{5}") {
            let address = Address::new("Mayor", "1", None, &code, "Madrid", "Madrid");
            prop_assert_eq!(address.postal_code(), code.as_str());
        }

        #[test]
        fn other_postal_codes_become_sentinel(code in "\\PC*") {
            prop_assume!(!validation::is_valid_postal_code(&code));
            let address = Address::new("Mayor", "1", None, &code, "Madrid", "Madrid");
            prop_assert_eq!(address.postal_code(), UNKNOWN_POSTAL_CODE);
        }
    }
}
