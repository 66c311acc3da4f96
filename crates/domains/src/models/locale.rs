use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Language of the page's fixed copy (toasts, author marker, timestamps).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            _ => Err(DomainError::Parse {
                kind: "locale",
                value: s.trim().to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_its_config_value() {
        for locale in [Locale::En, Locale::Ru] {
            assert_eq!(locale.to_string().parse::<Locale>().unwrap(), locale);
        }
        assert_eq!(Locale::Ru.to_string(), "ru");
    }

    #[test]
    fn parse_error_keeps_the_input() {
        assert_eq!(" RU ".parse::<Locale>().unwrap(), Locale::Ru);
        assert_eq!(
            " DE ".parse::<Locale>(),
            Err(DomainError::Parse { kind: "locale", value: "DE".into() })
        );
    }
}
