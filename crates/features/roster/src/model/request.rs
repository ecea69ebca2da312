use hhub_derive::api_model;
use serde_json::Value;

/// `POST /heroes` body.
#[api_model(deny_unknown_fields = false)]
pub struct NewHero {
    pub name: String,
    pub super_name: String,
}

/// `POST /powers` body. The description is validated, not just deserialized.
#[api_model(deny_unknown_fields = false)]
pub struct NewPower {
    pub name: String,
    pub description: Option<String>,
}

/// `PATCH /powers/{id}` body. `description` is required; `name` is optional.
#[api_model(deny_unknown_fields = false)]
#[derive(Default)]
pub struct PowerPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// `POST /hero_powers` body.
///
/// Every field is optional at the wire level so that each missing or malformed value is reported
/// by the matching validation step instead of a generic decoding error.
#[api_model(deny_unknown_fields = false)]
#[derive(Default)]
pub struct NewHeroPower {
    #[cfg_attr(feature = "server", schema(value_type = Option<String>, example = "Strong"))]
    pub strength: Option<Value>,
    #[cfg_attr(feature = "server", schema(value_type = Option<i32>, example = 1))]
    pub hero_id: Option<Value>,
    #[cfg_attr(feature = "server", schema(value_type = Option<i32>, example = 1))]
    pub power_id: Option<Value>,
}

impl NewHeroPower {
    /// The strength as text; a non-string value counts as invalid.
    #[must_use]
    pub fn strength_str(&self) -> Option<&str> {
        self.strength.as_ref().and_then(Value::as_str)
    }

    /// The hero id, if it is an integer a row could carry.
    #[must_use]
    pub fn hero_key(&self) -> Option<i32> {
        row_id(self.hero_id.as_ref())
    }

    /// The power id, if it is an integer a row could carry.
    #[must_use]
    pub fn power_key(&self) -> Option<i32> {
        row_id(self.power_id.as_ref())
    }
}

/// Strings, floats and integers outside `i32` can never name a row.
fn row_id(value: Option<&Value>) -> Option<i32> {
    value.and_then(Value::as_i64).and_then(|id| i32::try_from(id).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> NewHeroPower {
        serde_json::from_value(value).expect("any JSON ids decode")
    }

    #[test]
    fn integer_ids_resolve() {
        let link = body(json!({ "strength": "Weak", "hero_id": 3, "power_id": 7 }));
        assert_eq!(link.hero_key(), Some(3));
        assert_eq!(link.power_key(), Some(7));
    }

    #[test]
    fn ids_that_cannot_name_a_row_do_not_resolve() {
        for id in [json!("abc"), json!(1.5), json!(3_000_000_000_i64), json!(-3_000_000_000_i64)] {
            let link = body(json!({
                "strength": "Mighty",
                "hero_id": id.clone(),
                "power_id": id.clone(),
            }));
            assert_eq!(link.hero_key(), None, "{id}");
            assert_eq!(link.power_key(), None, "{id}");
            assert_eq!(link.strength_str(), Some("Mighty"));
        }
        assert_eq!(body(json!({})).hero_key(), None);
    }
}
