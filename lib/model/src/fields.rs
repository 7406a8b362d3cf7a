use oxrdf::vocab::xsd;
use oxrdf::NamedNodeRef;
use std::fmt;

/// Index field holding object values of plain and string literals. Also the
/// catch-all for datatypes without a dedicated field.
pub const TEXT_OBJECT: &str = "o_txt";
/// Index field holding object values of numeric literals.
pub const NUMERIC_OBJECT: &str = "o_num";
/// Index field holding object values of date and dateTime literals.
pub const DATE_OBJECT: &str = "o_date";
/// Index field holding object values of boolean literals.
pub const BOOLEAN_OBJECT: &str = "o_bool";

/// Numeric datatypes that are stored in [`NUMERIC_OBJECT`]. Numeric types not
/// listed here are indexed as text.
const NUMERIC_DATATYPES: &[NamedNodeRef<'static>] = &[
    xsd::INTEGER,
    xsd::DECIMAL,
    xsd::FLOAT,
    xsd::DOUBLE,
    xsd::LONG,
    xsd::INT,
    xsd::SHORT,
    xsd::BYTE,
    xsd::NON_NEGATIVE_INTEGER,
    xsd::NON_POSITIVE_INTEGER,
    xsd::NEGATIVE_INTEGER,
    xsd::POSITIVE_INTEGER,
    xsd::UNSIGNED_LONG,
    xsd::UNSIGNED_INT,
    xsd::UNSIGNED_SHORT,
    xsd::UNSIGNED_BYTE,
];

/// The storage field that holds an RDF object value.
///
/// A triple's object is stored in one of four fields according to its declared
/// datatype, so that numeric, date and boolean objects keep their native
/// search semantics (range queries, sorting) instead of collating as strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ObjectField {
    /// Plain literals, `xsd:string` and everything without a dedicated field.
    #[default]
    Text,
    /// Numeric literals (`xsd:integer`, `xsd:decimal`, `xsd:double`, ...).
    Numeric,
    /// `xsd:date` and `xsd:dateTime` literals.
    Date,
    /// `xsd:boolean` literals.
    Boolean,
}

impl ObjectField {
    /// Returns the identifier of the index field backing this object kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ObjectField::Text => TEXT_OBJECT,
            ObjectField::Numeric => NUMERIC_OBJECT,
            ObjectField::Date => DATE_OBJECT,
            ObjectField::Boolean => BOOLEAN_OBJECT,
        }
    }

    /// Returns the field a literal with the given datatype is stored in.
    #[must_use]
    pub fn for_datatype(datatype: NamedNodeRef<'_>) -> Self {
        if datatype == xsd::BOOLEAN {
            ObjectField::Boolean
        } else if datatype == xsd::DATE || datatype == xsd::DATE_TIME {
            ObjectField::Date
        } else if NUMERIC_DATATYPES.iter().any(|numeric| *numeric == datatype) {
            ObjectField::Numeric
        } else {
            ObjectField::Text
        }
    }
}

impl fmt::Display for ObjectField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names() {
        assert_eq!(ObjectField::Text.name(), TEXT_OBJECT);
        assert_eq!(ObjectField::Numeric.name(), NUMERIC_OBJECT);
        assert_eq!(ObjectField::Date.name(), DATE_OBJECT);
        assert_eq!(ObjectField::Boolean.name(), BOOLEAN_OBJECT);
    }

    #[test]
    fn datatype_mapping() {
        assert_eq!(ObjectField::for_datatype(xsd::BOOLEAN), ObjectField::Boolean);
        assert_eq!(ObjectField::for_datatype(xsd::DATE), ObjectField::Date);
        assert_eq!(ObjectField::for_datatype(xsd::DATE_TIME), ObjectField::Date);
        assert_eq!(ObjectField::for_datatype(xsd::INTEGER), ObjectField::Numeric);
        assert_eq!(ObjectField::for_datatype(xsd::DOUBLE), ObjectField::Numeric);
        assert_eq!(
            ObjectField::for_datatype(xsd::UNSIGNED_SHORT),
            ObjectField::Numeric
        );
        assert_eq!(ObjectField::for_datatype(xsd::STRING), ObjectField::Text);
        // Time-related types without a dedicated field collate as text.
        assert_eq!(ObjectField::for_datatype(xsd::TIME), ObjectField::Text);
        assert_eq!(ObjectField::for_datatype(xsd::DURATION), ObjectField::Text);
    }

    #[test]
    fn default_is_text() {
        assert_eq!(ObjectField::default(), ObjectField::Text);
    }
}
