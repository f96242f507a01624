use std::fmt;
use std::str::FromStr;

use crate::DashboardError;

/// Which canned message the "fill sample" action asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleCategory {
    Spam,
    Ham,
    /// Empties the input without contacting the backend.
    Clear,
}

impl SampleCategory {
    pub fn all() -> &'static [SampleCategory] {
        &[SampleCategory::Spam, SampleCategory::Ham, SampleCategory::Clear]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SampleCategory::Spam => "spam",
            SampleCategory::Ham => "ham",
            SampleCategory::Clear => "clear",
        }
    }

    pub fn is_clear(&self) -> bool {
        matches!(self, SampleCategory::Clear)
    }
}

impl fmt::Display for SampleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SampleCategory {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spam" => Ok(SampleCategory::Spam),
            "ham" => Ok(SampleCategory::Ham),
            "clear" => Ok(SampleCategory::Clear),
            _ => Err(DashboardError::UnknownCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_categories() {
        assert_eq!("spam".parse::<SampleCategory>().unwrap(), SampleCategory::Spam);
        assert_eq!(" HAM ".parse::<SampleCategory>().unwrap(), SampleCategory::Ham);
        assert!("Clear".parse::<SampleCategory>().unwrap().is_clear());
        assert!(matches!(
            "eggs".parse::<SampleCategory>(),
            Err(DashboardError::UnknownCategory(c)) if c == "eggs"
        ));
    }
}
