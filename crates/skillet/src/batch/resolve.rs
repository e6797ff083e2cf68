use super::fields::FieldBinding;
use skillet_core::stmt::Value;

/// Outcome of resolving one field binding into a bound parameter.
///
/// The write-back, when present, must be applied to the record by the
/// caller; resolution itself never mutates anything.
pub(super) struct Resolved {
    /// The parameter to bind for this column
    pub(super) param: Value,

    /// Value to assign back onto the record's field
    pub(super) write_back: Option<Value>,
}

/// Decides what to bind for one field of one record:
///
/// - a set field binds its actual value
/// - a blank primary key binds NULL, letting auto-incrementing columns
///   assign the value
/// - a blank field with a configured default binds the default and writes
///   it back, so the record reflects what was persisted
/// - any other blank field binds its zero value as-is
pub(super) fn resolve(binding: &FieldBinding) -> Resolved {
    if !binding.blank {
        return Resolved {
            param: binding.value.clone(),
            write_back: None,
        };
    }

    if binding.field.primary_key {
        return Resolved {
            param: Value::Null,
            write_back: None,
        };
    }

    match &binding.field.default {
        Some(default) => Resolved {
            param: default.clone(),
            write_back: Some(default.clone()),
        },
        None => Resolved {
            param: binding.value.clone(),
            write_back: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillet_core::schema::Field;

    fn binding(field: Field, value: Value) -> FieldBinding {
        let blank = value.is_zero();
        FieldBinding {
            index: 0,
            field: Box::leak(Box::new(field)),
            value,
            blank,
        }
    }

    #[test]
    fn set_field_binds_its_value() {
        let binding = binding(Field::new("title").default_value("untitled"), "hello".into());

        let resolved = resolve(&binding);
        assert_eq!(resolved.param, Value::from("hello"));
        assert!(resolved.write_back.is_none());
    }

    #[test]
    fn blank_primary_key_binds_null() {
        let binding = binding(Field::new("id").primary_key(), Value::I64(0));

        let resolved = resolve(&binding);
        assert_eq!(resolved.param, Value::Null);
        assert!(resolved.write_back.is_none());
    }

    #[test]
    fn blank_primary_key_ignores_configured_default() {
        let binding = binding(
            Field::new("id").primary_key().default_value(7i64),
            Value::I64(0),
        );

        let resolved = resolve(&binding);
        assert_eq!(resolved.param, Value::Null);
        assert!(resolved.write_back.is_none());
    }

    #[test]
    fn blank_field_with_default_binds_and_writes_back() {
        let binding = binding(Field::new("priority").default_value(3i64), Value::I64(0));

        let resolved = resolve(&binding);
        assert_eq!(resolved.param, Value::I64(3));
        assert_eq!(resolved.write_back, Some(Value::I64(3)));
    }

    #[test]
    fn blank_field_without_default_binds_zero_value() {
        let binding = binding(Field::new("note"), Value::String(String::new()));

        let resolved = resolve(&binding);
        assert_eq!(resolved.param, Value::String(String::new()));
        assert!(resolved.write_back.is_none());
    }
}
