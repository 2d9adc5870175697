//! Field validity predicates

use crate::plot::{vg_field, FieldDef, FieldRefOption};

/// Expression testing whether `field_expr` is valid (`valid = true`) or
/// invalid (`valid = false`). Null, undefined and NaN are invalid.
pub fn field_valid_predicate(field_expr: &str, valid: bool) -> String {
    if valid {
        format!("isValid({0}) && isFinite(+{0})", field_expr)
    } else {
        format!("!isValid({0}) || !isFinite(+{0})", field_expr)
    }
}

/// Predicate on the field a definition produces, read from `datum`
pub fn field_invalid_predicate(def: &FieldDef, invalid: bool) -> String {
    let expr = vg_field(
        def,
        FieldRefOption {
            expr: Some("datum"),
            ..Default::default()
        },
    );
    field_valid_predicate(&expr, !invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::{AggregateOp, Type};

    #[test]
    fn test_field_valid_predicate() {
        assert_eq!(
            field_valid_predicate("datum[\"a\"]", true),
            "isValid(datum[\"a\"]) && isFinite(+datum[\"a\"])"
        );
        assert_eq!(
            field_valid_predicate("datum[\"a\"]", false),
            "!isValid(datum[\"a\"]) || !isFinite(+datum[\"a\"])"
        );
    }

    #[test]
    fn test_field_invalid_predicate_uses_output_field() {
        let def = FieldDef::new("b", Type::Quantitative).with_aggregate(AggregateOp::Sum);
        assert_eq!(
            field_invalid_predicate(&def, true),
            "!isValid(datum[\"sum_b\"]) || !isFinite(+datum[\"sum_b\"])"
        );
    }
}
