//! # Sentence Shapes
//!
//! A [`Shape`] is the ordered field schema bound to one sentence type. Each
//! [`Field`] names one position of the raw data array and may carry a
//! [`Coercion`] used when the field is read.

use std::{collections::HashMap, fmt};

use crate::{CoerceError, Value};

/// Converts a non-empty raw field into a [`Value`].
///
/// See the [`coerce`](crate::coerce) module for the stock coercions.
pub type Coercion = fn(&str) -> Result<Value, CoerceError>;

/// Describes one named position in a sentence.
#[derive(Clone, Copy)]
pub struct Field {
    label: &'static str,
    key: &'static str,
    coerce: Option<Coercion>,
}

impl Field {
    /// A field read as raw text.
    pub const fn new(label: &'static str, key: &'static str) -> Self {
        Field {
            label,
            key,
            coerce: None,
        }
    }

    /// A field read through `coerce`.
    pub const fn with(label: &'static str, key: &'static str, coerce: Coercion) -> Self {
        Field {
            label,
            key,
            coerce: Some(coerce),
        }
    }

    /// Human readable description, documentation only.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Storage key, unique within a shape.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// The coercion applied on read, if any.
    pub fn coercion(&self) -> Option<Coercion> {
        self.coerce
    }

    /// Decodes a raw field.
    ///
    /// Without a coercion the raw text is returned as is. With a coercion, an
    /// empty field reads as [`Value::Null`] and a field the coercion rejects
    /// reads as its raw text.
    ///
    /// ```rust
    /// use nmea0183_records::{Field, Value, coerce};
    ///
    /// let field = Field::with("Altitude", "altitude", coerce::float);
    /// assert_eq!(field.decode("100.00"), Value::Float(100.0));
    /// assert_eq!(field.decode(""), Value::Null);
    /// assert_eq!(field.decode("1OO.OO"), Value::from("1OO.OO"));
    ///
    /// let field = Field::new("Units", "altitude_units");
    /// assert_eq!(field.decode(""), Value::from(""));
    /// ```
    pub fn decode(&self, raw: &str) -> Value {
        let Some(coerce) = self.coerce else {
            return Value::Str(raw.to_owned());
        };

        if raw.is_empty() {
            return Value::Null;
        }

        match coerce(raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::trace!(field = self.key, %err, "coercion failed, keeping raw text");
                Value::Str(raw.to_owned())
            }
        }
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("label", &self.label)
            .field("key", &self.key)
            .field("coerced", &self.coerce.is_some())
            .finish()
    }
}

/// The ordered field schema of one sentence type.
///
/// Field order defines the position in the raw data array. A record may carry
/// more fields than its shape names; the extra fields are kept but unnamed.
#[derive(Debug, Clone)]
pub struct Shape {
    name: &'static str,
    description: &'static str,
    fields: Vec<Field>,
    index: HashMap<&'static str, usize>,
}

impl Shape {
    /// Creates a shape from its ordered fields.
    ///
    /// # Panics
    ///
    /// Panics if two fields share the same key.
    ///
    /// ```rust
    /// use nmea0183_records::{Shape, coerce, fields};
    ///
    /// let shape = Shape::new(
    ///     "DBT",
    ///     "Depth Below Transducer",
    ///     fields![
    ///         ("Water depth, feet", "depth_feet", coerce::float),
    ///         ("Feet", "unit_feet"),
    ///     ],
    /// );
    /// assert_eq!(shape.index_of("unit_feet"), Some(1));
    /// ```
    pub fn new(name: &'static str, description: &'static str, fields: Vec<Field>) -> Self {
        let mut index = HashMap::with_capacity(fields.len());
        for (i, field) in fields.iter().enumerate() {
            let duplicate = index.insert(field.key, i).is_some();
            assert!(!duplicate, "duplicate field key {:?} in shape {name}", field.key);
        }

        Shape {
            name,
            description,
            fields,
            index,
        }
    }

    /// A shape with no named fields.
    pub fn empty(name: &'static str, description: &'static str) -> Self {
        Shape::new(name, description, Vec::new())
    }

    /// Short name, usually the sentence type or subtype code.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Human readable description.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// The named fields in positional order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Number of named fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the shape names no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Position of the field with the given key.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// The field with the given key.
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.index_of(key).map(|i| &self.fields[i])
    }
}

/// Builds a `Vec<Field>` from `(label, key)` and `(label, key, coercion)` tuples.
///
/// ```rust
/// use nmea0183_records::{coerce, fields};
///
/// let fields = fields![
///     ("Timestamp", "timestamp", coerce::timestamp),
///     ("Latitude", "lat"),
/// ];
/// assert_eq!(fields.len(), 2);
/// assert!(fields[0].coercion().is_some());
/// assert!(fields[1].coercion().is_none());
/// ```
#[macro_export]
macro_rules! fields {
    (@field $label:expr, $key:expr) => {
        $crate::Field::new($label, $key)
    };
    (@field $label:expr, $key:expr, $coerce:expr) => {
        $crate::Field::with($label, $key, $coerce)
    };
    ($(($label:expr, $key:expr $(, $coerce:expr)?)),* $(,)?) => {
        vec![$($crate::fields!(@field $label, $key $(, $coerce)?)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coerce;

    #[test]
    fn test_shape_index() {
        let shape = Shape::new(
            "GLL",
            "Geographic Position",
            crate::fields![
                ("Latitude", "lat"),
                ("Latitude Direction", "lat_dir"),
                ("Longitude", "lon"),
                ("Longitude Direction", "lon_dir"),
                ("Timestamp UTC", "timestamp", coerce::timestamp),
            ],
        );

        assert_eq!(shape.len(), 5);
        assert_eq!(shape.index_of("lon"), Some(2));
        assert_eq!(shape.index_of("altitude"), None);
        assert_eq!(shape.field("timestamp").map(Field::label), Some("Timestamp UTC"));
    }

    #[test]
    #[should_panic(expected = "duplicate field key")]
    fn test_duplicate_key() {
        Shape::new(
            "XXX",
            "Broken",
            crate::fields![("A", "a"), ("B", "a")],
        );
    }

    #[test]
    fn test_decode_swallows_coercion_error() {
        let field = Field::with("Number of satellites", "num_sats", coerce::integer);
        assert_eq!(field.decode("04"), Value::Int(4));
        assert_eq!(field.decode("four"), Value::Str("four".to_owned()));
        assert_eq!(field.decode(""), Value::Null);
    }
}
