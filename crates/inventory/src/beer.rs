use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use brewstock_core::{BeerId, ConstraintViolation};

/// Longest accepted `name` / `brand` value, counted in chars.
pub const MAX_TEXT_LEN: usize = 200;

/// Highest capacity a record may declare.
pub const MAX_CAPACITY: u32 = 500;

/// Ceiling on any single quantity supplied by a caller (initial stock or a
/// one-shot adjustment amount), independent of a record's own capacity.
pub const QUANTITY_CEILING: u32 = 100;

/// Fixed set of recognized beer styles.
///
/// Serialized in UPPERCASE (`"LAGER"`, `"IPA"`, ...), matching the wire data
/// of existing catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BeerStyle {
    Lager,
    Malzbier,
    Witbier,
    Weiss,
    Ale,
    Ipa,
    Stout,
}

/// A stored beer record.
///
/// `id` is assigned once by the service and immutable afterwards; `name` is
/// business-unique among live records. `0 <= quantity <= max` holds after
/// every successful service operation. Quantity changes always replace the
/// whole record, so a `Beer` value is a complete snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beer {
    pub id: BeerId,
    pub name: String,
    pub brand: String,
    #[serde(rename = "type")]
    pub style: BeerStyle,
    pub max: u32,
    pub quantity: u32,
    pub created_at: DateTime<Utc>,
}

/// Creation input: everything a caller supplies. The id and creation stamp
/// are assigned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBeer {
    pub name: String,
    pub brand: String,
    #[serde(rename = "type")]
    pub style: BeerStyle,
    pub max: u32,
    pub quantity: u32,
}

impl CreateBeer {
    /// Field checks, run before any repository access. First failure wins.
    pub fn validate(&self) -> Result<(), ConstraintViolation> {
        check_text("name", &self.name)?;
        check_text("brand", &self.brand)?;
        if self.max > MAX_CAPACITY {
            return Err(ConstraintViolation::TooLarge {
                field: "max",
                value: self.max,
                limit: MAX_CAPACITY,
            });
        }
        if self.quantity > QUANTITY_CEILING {
            return Err(ConstraintViolation::TooLarge {
                field: "quantity",
                value: self.quantity,
                limit: QUANTITY_CEILING,
            });
        }
        // Initial stock must already satisfy the capacity invariant.
        if self.quantity > self.max {
            return Err(ConstraintViolation::TooLarge {
                field: "quantity",
                value: self.quantity,
                limit: self.max,
            });
        }
        Ok(())
    }
}

fn check_text(field: &'static str, value: &str) -> Result<(), ConstraintViolation> {
    let len = value.chars().count();
    if len < 1 || len > MAX_TEXT_LEN {
        return Err(ConstraintViolation::Length {
            field,
            len,
            min: 1,
            max: MAX_TEXT_LEN,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> CreateBeer {
        CreateBeer {
            name: "Eisenbahn".to_string(),
            brand: "Brasil Kirin".to_string(),
            style: BeerStyle::Lager,
            max: 50,
            quantity: 10,
        }
    }

    #[test]
    fn validate_accepts_typical_input() {
        assert_eq!(draft().validate(), Ok(()));
    }

    #[test]
    fn validate_accepts_boundary_values() {
        let input = CreateBeer {
            name: "x".repeat(MAX_TEXT_LEN),
            brand: "y".repeat(MAX_TEXT_LEN),
            style: BeerStyle::Stout,
            max: MAX_CAPACITY,
            quantity: QUANTITY_CEILING,
        };
        assert_eq!(input.validate(), Ok(()));

        // Full-to-the-brim is fine: the capacity bound is inclusive.
        let full = CreateBeer {
            max: 10,
            quantity: 10,
            ..draft()
        };
        assert_eq!(full.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_empty_name() {
        let input = CreateBeer {
            name: String::new(),
            ..draft()
        };
        assert_eq!(
            input.validate(),
            Err(ConstraintViolation::Length {
                field: "name",
                len: 0,
                min: 1,
                max: MAX_TEXT_LEN,
            })
        );
    }

    #[test]
    fn validate_rejects_overlong_name() {
        let input = CreateBeer {
            name: "x".repeat(MAX_TEXT_LEN + 1),
            ..draft()
        };
        match input.validate() {
            Err(ConstraintViolation::Length { field: "name", len, .. }) => {
                assert_eq!(len, MAX_TEXT_LEN + 1);
            }
            other => panic!("expected length violation, got {other:?}"),
        }
    }

    #[test]
    fn text_lengths_count_chars_not_bytes() {
        // 200 two-byte chars: 400 bytes, but still within the limit.
        let input = CreateBeer {
            name: "ä".repeat(MAX_TEXT_LEN),
            ..draft()
        };
        assert_eq!(input.validate(), Ok(()));

        let input = CreateBeer {
            name: "ä".repeat(MAX_TEXT_LEN + 1),
            ..draft()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_brand() {
        let input = CreateBeer {
            brand: String::new(),
            ..draft()
        };
        match input.validate() {
            Err(ConstraintViolation::Length { field: "brand", .. }) => {}
            other => panic!("expected length violation, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_capacity_above_limit() {
        let input = CreateBeer {
            max: MAX_CAPACITY + 1,
            ..draft()
        };
        assert_eq!(
            input.validate(),
            Err(ConstraintViolation::TooLarge {
                field: "max",
                value: MAX_CAPACITY + 1,
                limit: MAX_CAPACITY,
            })
        );
    }

    #[test]
    fn validate_rejects_initial_quantity_above_ceiling() {
        // The per-request ceiling applies even when the declared capacity
        // would have room for more.
        let input = CreateBeer {
            max: MAX_CAPACITY,
            quantity: QUANTITY_CEILING + 1,
            ..draft()
        };
        assert_eq!(
            input.validate(),
            Err(ConstraintViolation::TooLarge {
                field: "quantity",
                value: QUANTITY_CEILING + 1,
                limit: QUANTITY_CEILING,
            })
        );
    }

    #[test]
    fn validate_rejects_initial_quantity_above_capacity() {
        let input = CreateBeer {
            max: 50,
            quantity: 60,
            ..draft()
        };
        assert_eq!(
            input.validate(),
            Err(ConstraintViolation::TooLarge {
                field: "quantity",
                value: 60,
                limit: 50,
            })
        );
    }

    #[test]
    fn beer_serializes_style_under_type_key() {
        let beer = Beer {
            id: BeerId::new(),
            name: "Eisenbahn".to_string(),
            brand: "Brasil Kirin".to_string(),
            style: BeerStyle::Lager,
            max: 50,
            quantity: 10,
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&beer).unwrap();
        assert_eq!(value["type"], "LAGER");
        assert!(value.get("style").is_none());
        assert_eq!(value["quantity"], 10);

        // The id crosses the wire as the bare UUID string.
        let id = value["id"].as_str().unwrap();
        assert_eq!(id.parse::<BeerId>().unwrap(), beer.id);
    }

    #[test]
    fn beer_style_uses_uppercase_wire_names() {
        let styles = [
            (BeerStyle::Lager, "LAGER"),
            (BeerStyle::Malzbier, "MALZBIER"),
            (BeerStyle::Witbier, "WITBIER"),
            (BeerStyle::Weiss, "WEISS"),
            (BeerStyle::Ale, "ALE"),
            (BeerStyle::Ipa, "IPA"),
            (BeerStyle::Stout, "STOUT"),
        ];
        for (style, name) in styles {
            assert_eq!(serde_json::to_value(style).unwrap(), name);
            let parsed: BeerStyle = serde_json::from_value(serde_json::Value::from(name)).unwrap();
            assert_eq!(parsed, style);
        }
    }

    #[test]
    fn create_beer_deserializes_from_wire_json() {
        let input: CreateBeer = serde_json::from_value(serde_json::json!({
            "name": "Hoegaarden",
            "brand": "AB InBev",
            "type": "WITBIER",
            "max": 30,
            "quantity": 5,
        }))
        .unwrap();

        assert_eq!(input.style, BeerStyle::Witbier);
        assert_eq!(input.max, 30);
        assert_eq!(input.validate(), Ok(()));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: any input within all documented bounds validates.
            #[test]
            fn inputs_within_bounds_validate(
                name in "[A-Za-z][A-Za-z0-9 ]{0,199}",
                brand in "[A-Za-z][A-Za-z0-9 ]{0,199}",
                (max, quantity) in (0u32..=MAX_CAPACITY)
                    .prop_flat_map(|m| (Just(m), 0..=m.min(QUANTITY_CEILING))),
            ) {
                let input = CreateBeer {
                    name,
                    brand,
                    style: BeerStyle::Ale,
                    max,
                    quantity,
                };
                prop_assert_eq!(input.validate(), Ok(()));
            }

            /// Property: the per-request quantity ceiling is enforced no
            /// matter how large the declared capacity is.
            #[test]
            fn quantity_over_ceiling_never_validates(
                quantity in (QUANTITY_CEILING + 1)..=10_000u32,
            ) {
                let input = CreateBeer {
                    max: MAX_CAPACITY,
                    quantity,
                    ..draft()
                };
                prop_assert!(input.validate().is_err());
            }
        }
    }
}
