//! Cold-formed C-profiles used for wall studs and trusses.

use serde::{Deserialize, Serialize};

use crate::errors::{PricingError, PricingResult};

/// Steel C-profile designation (depth x flange x thickness, mm)
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileType {
    #[serde(rename = "C89x41x1.0", alias = "C89x41x1")]
    C89x41x1_0,
    #[serde(rename = "C89x41x1.2")]
    C89x41x1_2,
    #[serde(rename = "C160x41x1")]
    C160x41x1,
}

impl ProfileType {
    pub const ALL: [ProfileType; 3] = [
        ProfileType::C89x41x1_0,
        ProfileType::C89x41x1_2,
        ProfileType::C160x41x1,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ProfileType::C89x41x1_0 => "C89x41x1.0",
            ProfileType::C89x41x1_2 => "C89x41x1.2",
            ProfileType::C160x41x1 => "C160x41x1",
        }
    }

    /// Parse a profile code. `C89x41x1` is read as the 1.0 mm profile.
    pub fn from_str_flexible(s: &str) -> PricingResult<Self> {
        match s.trim().to_uppercase().replace(',', ".").as_str() {
            "C89X41X1.0" | "C89X41X1" => Ok(ProfileType::C89x41x1_0),
            "C89X41X1.2" => Ok(ProfileType::C89x41x1_2),
            "C160X41X1" | "C160X41X1.0" => Ok(ProfileType::C160x41x1),
            _ => Err(PricingError::unsupported_profile(s)),
        }
    }

    /// Material density coefficient applied to every steel weight.
    ///
    /// C160x41x1 is listed in the profile range but has no coefficient yet.
    pub fn material_coefficient(&self) -> PricingResult<f64> {
        match self {
            ProfileType::C89x41x1_0 => Ok(1.5),
            ProfileType::C89x41x1_2 => Ok(1.8),
            ProfileType::C160x41x1 => Err(PricingError::unsupported_profile(self.code())),
        }
    }
}

impl std::fmt::Display for ProfileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_coefficients() {
        assert_eq!(ProfileType::C89x41x1_0.material_coefficient().unwrap(), 1.5);
        assert_eq!(ProfileType::C89x41x1_2.material_coefficient().unwrap(), 1.8);

        let err = ProfileType::C160x41x1.material_coefficient().unwrap_err();
        assert_eq!(err, PricingError::unsupported_profile("C160x41x1"));
    }

    #[test]
    fn test_profile_parsing() {
        assert_eq!(ProfileType::from_str_flexible("C89x41x1").unwrap(), ProfileType::C89x41x1_0);
        assert_eq!(ProfileType::from_str_flexible("c89x41x1,2").unwrap(), ProfileType::C89x41x1_2);
        assert_eq!(ProfileType::from_str_flexible("C160x41x1").unwrap(), ProfileType::C160x41x1);
        assert_eq!(
            ProfileType::from_str_flexible("C200x50x2").unwrap_err().error_code(),
            "UNSUPPORTED_PROFILE"
        );
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&ProfileType::C89x41x1_0).unwrap();
        assert_eq!(json, "\"C89x41x1.0\"");
        let legacy: ProfileType = serde_json::from_str("\"C89x41x1\"").unwrap();
        assert_eq!(legacy, ProfileType::C89x41x1_0);
    }
}
