//! # Quote Validator
//!
//! Turns a raw JSON selection into validated [`SelectionItem`]s.
//!
//! Rules are applied in order and the first failure wins:
//!
//! 1. The selection must be present and be an array, else `MalformedPayload`.
//! 2. The array must not be empty, else `EmptySelection`.
//! 3. For each entry in input order:
//!    - the entry must be an object, else `MalformedPayload`
//!    - its `id` must resolve in the catalog, else `UnknownService(id)`
//!    - its `id` must not repeat an earlier entry, else `DuplicateService(id)`
//!    - its `quantity` must be an integer >= 1, else `InvalidQuantity(id)`
//!
//! Quantities may be JSON integers or integral floats (`2.0`). Values that
//! do not fit in a `u32` are rejected as `InvalidQuantity`.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use quote_leads::domain::entities::Catalog;
//! use quote_leads::domain::errors::ValidationError;
//! use quote_leads::domain::services::QuoteValidator;
//! use serde_json::json;
//!
//! let validator = QuoteValidator::new(Arc::new(Catalog::standard()));
//!
//! let items = validator.validate(Some(&json!([{ "id": "seo", "quantity": 6 }]))).unwrap();
//! assert_eq!(items[0].quantity(), 6);
//!
//! let err = validator.validate(Some(&json!([{ "id": "web_dev", "quantity": 0 }]))).unwrap_err();
//! assert_eq!(err, ValidationError::InvalidQuantity("web_dev".into()));
//! ```

use crate::domain::entities::{Catalog, SelectionItem};
use crate::domain::errors::ValidationError;
use rust_decimal::prelude::ToPrimitive;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;

/// Validates raw selections against a catalog.
#[derive(Debug, Clone)]
pub struct QuoteValidator {
    catalog: Arc<Catalog>,
}

impl QuoteValidator {
    /// Creates a validator bound to a catalog.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Returns the catalog identifiers are resolved against.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Validates a raw selection, preserving input order.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered, see the module
    /// documentation for the rule order.
    pub fn validate(&self, raw: Option<&Value>) -> Result<Vec<SelectionItem>, ValidationError> {
        let entries = raw
            .and_then(Value::as_array)
            .ok_or(ValidationError::MalformedPayload)?;

        if entries.is_empty() {
            return Err(ValidationError::EmptySelection);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        let mut items = Vec::with_capacity(entries.len());

        for entry in entries {
            let fields = entry
                .as_object()
                .ok_or(ValidationError::MalformedPayload)?;

            let id = render_id(fields.get("id"));
            let Some(catalog_entry) = self.catalog.lookup(&id) else {
                return Err(ValidationError::UnknownService(id));
            };

            if !seen.insert(catalog_entry.id().clone()) {
                return Err(ValidationError::DuplicateService(id));
            }

            let quantity = parse_quantity(fields.get("quantity"))
                .ok_or_else(|| ValidationError::InvalidQuantity(id.clone()))?;

            items.push(SelectionItem::new(catalog_entry.id().clone(), quantity));
        }

        Ok(items)
    }
}

/// Renders the `id` field as it should appear in error messages.
fn render_id(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "null".to_string(),
    }
}

/// Parses a quantity that is an integer >= 1 and fits in a `u32`.
fn parse_quantity(value: Option<&Value>) -> Option<u32> {
    let Some(Value::Number(number)) = value else {
        return None;
    };

    if let Some(whole) = number.as_u64() {
        return u32::try_from(whole).ok().filter(|q| *q >= 1);
    }

    let float = number.as_f64()?;
    if float.fract() != 0.0 {
        return None;
    }
    float.to_u32().filter(|q| *q >= 1)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn validator() -> QuoteValidator {
        QuoteValidator::new(Arc::new(Catalog::standard()))
    }

    mod structure {
        use super::*;

        #[test]
        fn missing_selection_is_malformed() {
            assert_eq!(
                validator().validate(None),
                Err(ValidationError::MalformedPayload)
            );
        }

        #[test]
        fn null_selection_is_malformed() {
            assert_eq!(
                validator().validate(Some(&Value::Null)),
                Err(ValidationError::MalformedPayload)
            );
        }

        #[test]
        fn single_object_is_malformed() {
            let raw = json!({ "id": "seo", "quantity": 1 });
            assert_eq!(
                validator().validate(Some(&raw)),
                Err(ValidationError::MalformedPayload)
            );
        }

        #[test]
        fn non_object_entry_is_malformed() {
            let raw = json!(["seo"]);
            assert_eq!(
                validator().validate(Some(&raw)),
                Err(ValidationError::MalformedPayload)
            );
        }

        #[test]
        fn empty_array_is_empty_selection() {
            assert_eq!(
                validator().validate(Some(&json!([]))),
                Err(ValidationError::EmptySelection)
            );
        }
    }

    mod services {
        use super::*;

        #[test]
        fn unknown_service_is_named() {
            let raw = json!([{ "id": "unknown_service", "quantity": 1 }]);
            assert_eq!(
                validator().validate(Some(&raw)),
                Err(ValidationError::UnknownService("unknown_service".into()))
            );
        }

        #[test]
        fn missing_id_is_unknown() {
            let raw = json!([{ "quantity": 1 }]);
            assert_eq!(
                validator().validate(Some(&raw)),
                Err(ValidationError::UnknownService("null".into()))
            );
        }

        #[test]
        fn numeric_id_is_unknown() {
            let raw = json!([{ "id": 7, "quantity": 1 }]);
            assert_eq!(
                validator().validate(Some(&raw)),
                Err(ValidationError::UnknownService("7".into()))
            );
        }

        #[test]
        fn duplicate_service_is_rejected() {
            let raw = json!([
                { "id": "seo", "quantity": 1 },
                { "id": "seo", "quantity": 2 }
            ]);
            assert_eq!(
                validator().validate(Some(&raw)),
                Err(ValidationError::DuplicateService("seo".into()))
            );
        }

        #[test]
        fn first_failure_wins() {
            let raw = json!([
                { "id": "web_dev", "quantity": 0 },
                { "id": "nope", "quantity": 1 }
            ]);
            assert_eq!(
                validator().validate(Some(&raw)),
                Err(ValidationError::InvalidQuantity("web_dev".into()))
            );
        }

        #[test]
        fn unknown_checked_before_quantity_in_same_entry() {
            let raw = json!([{ "id": "nope", "quantity": -1 }]);
            assert_eq!(
                validator().validate(Some(&raw)),
                Err(ValidationError::UnknownService("nope".into()))
            );
        }
    }

    mod quantities {
        use super::*;

        fn quantity_result(quantity: Value) -> Result<Vec<SelectionItem>, ValidationError> {
            validator().validate(Some(&json!([{ "id": "web_dev", "quantity": quantity }])))
        }

        #[test]
        fn rejects_zero_negative_fractional_and_non_numeric() {
            for bad in [
                json!(0),
                json!(-3),
                json!(1.5),
                json!(0.0),
                json!("2"),
                json!(null),
                json!(true),
                json!([1]),
            ] {
                assert_eq!(
                    quantity_result(bad.clone()),
                    Err(ValidationError::InvalidQuantity("web_dev".into())),
                    "quantity {bad} should be rejected"
                );
            }
        }

        #[test]
        fn missing_quantity_is_invalid() {
            let raw = json!([{ "id": "smm" }]);
            assert_eq!(
                validator().validate(Some(&raw)),
                Err(ValidationError::InvalidQuantity("smm".into()))
            );
        }

        #[test]
        fn accepts_integral_float() {
            let items = quantity_result(json!(2.0)).unwrap();
            assert_eq!(items[0].quantity(), 2);
        }

        #[test]
        fn rejects_values_beyond_u32() {
            assert!(quantity_result(json!(u64::from(u32::MAX) + 1)).is_err());
            assert!(quantity_result(json!(u32::MAX)).is_ok());
        }

        #[test]
        fn integral_floats_are_range_checked() {
            let items = quantity_result(json!(4_294_967_295.0)).unwrap();
            assert_eq!(items[0].quantity(), u32::MAX);

            for quantity in [json!(4_294_967_296.0), json!(1e20), json!(-2.0), json!(-0.0)] {
                assert!(quantity_result(quantity.clone()).is_err(), "quantity {quantity}");
            }
        }

        #[test]
        fn no_upper_business_bound() {
            let items = quantity_result(json!(1_000_000)).unwrap();
            assert_eq!(items[0].quantity(), 1_000_000);
        }
    }

    #[test]
    fn preserves_input_order() {
        let raw = json!([
            { "id": "smm", "quantity": 3 },
            { "id": "web_dev", "quantity": 1 },
            { "id": "seo", "quantity": 6 }
        ]);
        let items = validator().validate(Some(&raw)).unwrap();
        let ids: Vec<&str> = items.iter().map(|i| i.service_id().as_str()).collect();
        assert_eq!(ids, vec!["smm", "web_dev", "seo"]);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let raw = json!([{ "id": "seo", "quantity": 1, "name": "SEO", "price": 1 }]);
        let items = validator().validate(Some(&raw)).unwrap();
        assert_eq!(items.len(), 1);
    }

    proptest! {
        #[test]
        fn unknown_id_fails_at_any_position(
            position in 0usize..3,
            suffix in "[a-z]{1,8}",
        ) {
            let unknown = format!("unknown_{suffix}");
            let mut entries = vec![
                json!({ "id": "web_dev", "quantity": 1 }),
                json!({ "id": "seo", "quantity": 1 }),
            ];
            entries.insert(position, json!({ "id": unknown, "quantity": 1 }));

            let result = validator().validate(Some(&Value::Array(entries)));
            prop_assert_eq!(result, Err(ValidationError::UnknownService(unknown)));
        }

        #[test]
        fn non_positive_integers_are_invalid(quantity in i64::MIN..=0) {
            let raw = json!([{ "id": "seo", "quantity": quantity }]);
            prop_assert_eq!(
                validator().validate(Some(&raw)),
                Err(ValidationError::InvalidQuantity("seo".into()))
            );
        }

        #[test]
        fn fractional_quantities_are_invalid(whole in 0u32..1000, frac in 0.01f64..0.99) {
            let raw = json!([{ "id": "smm", "quantity": f64::from(whole) + frac }]);
            prop_assert_eq!(
                validator().validate(Some(&raw)),
                Err(ValidationError::InvalidQuantity("smm".into()))
            );
        }

        #[test]
        fn positive_integers_are_accepted(quantity in 1u32..=u32::MAX) {
            let raw = json!([{ "id": "web_dev", "quantity": quantity }]);
            let items = validator().validate(Some(&raw)).unwrap();
            prop_assert_eq!(items[0].quantity(), quantity);
        }
    }
}
