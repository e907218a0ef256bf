//! Field rules shared by every write path

use super::{AddressInput, AuthorInput, BookInput, CountryInput, DomainError};

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

pub const BOOK_TITLE_MAX: usize = 50;
pub const AUTHOR_NAME_MAX: usize = 100;
pub const COUNTRY_NAME_MAX: usize = 80;
pub const COUNTRY_CODE_LEN: usize = 2;
pub const STREET_MAX: usize = 80;
pub const POSTAL_CODE_MAX: usize = 5;
pub const CITY_MAX: usize = 50;

fn required(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{} is required", field)));
    }
    if value.chars().count() > max {
        return Err(DomainError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

pub fn validate_rating(rating: i32) -> Result<(), DomainError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(DomainError::Validation(format!(
            "rating must be between {} and {}, got {}",
            MIN_RATING, MAX_RATING, rating
        )));
    }
    Ok(())
}

impl BookInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        required("title", &self.title, BOOK_TITLE_MAX)?;
        validate_rating(self.rating)
    }
}

impl AuthorInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        required("first_name", &self.first_name, AUTHOR_NAME_MAX)?;
        required("last_name", &self.last_name, AUTHOR_NAME_MAX)
    }
}

impl AddressInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        required("street", &self.street, STREET_MAX)?;
        required("postal_code", &self.postal_code, POSTAL_CODE_MAX)?;
        required("city", &self.city, CITY_MAX)
    }
}

impl CountryInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        required("name", &self.name, COUNTRY_NAME_MAX)?;
        if self.code.chars().count() != COUNTRY_CODE_LEN
            || !self.code.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(DomainError::Validation(format!(
                "code must be {} ASCII letters, got {:?}",
                COUNTRY_CODE_LEN, self.code
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, rating: i32) -> BookInput {
        BookInput {
            title: title.to_string(),
            rating,
            author_id: None,
            is_bestselling: false,
            country_ids: vec![],
        }
    }

    #[test]
    fn test_rating_bounds() {
        for rating in 1..=5 {
            assert!(book("Harry Potter 1", rating).validate().is_ok());
        }
        for rating in [-1, 0, 6, 10] {
            assert!(matches!(
                book("Harry Potter 1", rating).validate(),
                Err(DomainError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_title_limits() {
        assert!(book("", 3).validate().is_err());
        assert!(book("   ", 3).validate().is_err());
        assert!(book(&"x".repeat(50), 3).validate().is_ok());
        assert!(book(&"x".repeat(51), 3).validate().is_err());
    }

    #[test]
    fn test_country_code() {
        let ok = CountryInput {
            name: "Germany".to_string(),
            code: "de".to_string(),
        };
        assert!(ok.validate().is_ok());

        for code in ["D", "DEU", "1A", ""] {
            let bad = CountryInput {
                name: "Germany".to_string(),
                code: code.to_string(),
            };
            assert!(bad.validate().is_err(), "code {:?} accepted", code);
        }
    }

    #[test]
    fn test_postal_code_length() {
        let mut address = AddressInput {
            street: "Main Street 1".to_string(),
            postal_code: "12345".to_string(),
            city: "Springfield".to_string(),
        };
        assert!(address.validate().is_ok());

        address.postal_code = "123456".to_string();
        assert!(address.validate().is_err());
    }
}
