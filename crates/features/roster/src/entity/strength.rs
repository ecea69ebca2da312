use sea_orm::entity::prelude::*;

/// How strongly a hero wields a power. Stored as its exact, case-sensitive name.
#[derive(
    Debug,
    Copy,
    Clone,
    Hash,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    strum::Display,
    strum::EnumString,
    strum::VariantArray,
    serde::Serialize,
    serde::Deserialize,
)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Strength {
    #[sea_orm(string_value = "Strong")]
    Strong,
    #[sea_orm(string_value = "Weak")]
    Weak,
    #[sea_orm(string_value = "Average")]
    Average,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn names_round_trip_exactly() {
        for (raw, strength) in
            [("Strong", Strength::Strong), ("Weak", Strength::Weak), ("Average", Strength::Average)]
        {
            assert_eq!(Strength::from_str(raw).ok(), Some(strength));
            assert_eq!(strength.to_string(), raw);
            assert_eq!(strength.to_value(), raw);
        }
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!(Strength::from_str("strong").is_err());
        assert!(Strength::from_str("AVERAGE").is_err());
        assert!(Strength::from_str(" Weak").is_err());
    }
}
