use serde_json::Value;

/// Which running products to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Every running product, in input order
    #[default]
    All,
    /// Only the final running product
    Last,
}

/// How to render the selected values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// One value per line
    #[default]
    Text,
    /// A JSON array, or a single JSON number for [`Selection::Last`]
    Json,
}

/// Magnitudes at or above this print in exponent notation
const EXP_UPPER: f64 = 1e16;
/// Non-zero magnitudes below this print in exponent notation
const EXP_LOWER: f64 = 1e-4;

/// Shortest text form of a single value
///
/// Whole numbers print without a fractional part (`120`, not `120.0`). Very
/// large or very small magnitudes switch to exponent notation (`1e200`,
/// `2.5e-7`). Both forms parse back to the same `f64`.
pub fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    if value.is_finite() && value != 0.0 && !(EXP_LOWER..EXP_UPPER).contains(&magnitude) {
        format!("{value:e}")
    } else {
        format!("{value}")
    }
}

/// Render running products for output
///
/// Text values go through [`format_value`]. Nothing is emitted for an empty
/// sequence in text mode; JSON mode emits `[]` or `null`. Non-finite values
/// become `null` in JSON.
pub fn render(products: &[f64], selection: Selection, format: Format) -> String {
    match (format, selection) {
        (Format::Text, Selection::All) => products
            .iter()
            .map(|&v| format_value(v) + "\n")
            .collect(),
        (Format::Text, Selection::Last) => products
            .last()
            .map(|&v| format_value(v) + "\n")
            .unwrap_or_default(),
        (Format::Json, Selection::All) => {
            let array = Value::Array(products.iter().copied().map(Value::from).collect());
            format!("{array}\n")
        }
        (Format::Json, Selection::Last) => {
            let last = products.last().copied().map_or(Value::Null, Value::from);
            format!("{last}\n")
        }
    }
}
