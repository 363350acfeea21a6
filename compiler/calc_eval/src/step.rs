use std::fmt;

use calc_lexer::Operator;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// One operator application, recorded in the order it was applied.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct EvaluationStep {
    /// Left operand
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_number"))]
    pub operand1: f64,
    /// The operator applied
    pub operator: Operator,
    /// Right operand
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_number"))]
    pub operand2: f64,
    /// `operand1 operator operand2`
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_number"))]
    pub result: f64,
}

impl EvaluationStep {
    /// Apply `operator` to the operands and record the outcome.
    pub fn apply(operand1: f64, operator: Operator, operand2: f64) -> Self {
        Self {
            operand1,
            operator,
            operand2,
            result: operator.apply(operand1, operand2),
        }
    }
}

impl fmt::Display for EvaluationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            format_number(self.operand1),
            self.operator,
            format_number(self.operand2),
            format_number(self.result)
        )
    }
}

/// Render a number the way calculator users expect to read it.
///
/// Integral values print without a fractional part, non-finite values print
/// as `Infinity`, `-Infinity` and `NaN`, negative zero prints as `0`, and
/// magnitudes outside `[1e-6, 1e21)` switch to exponent form (`1e+21`,
/// `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

/// Serialize finite values as numbers and non-finite ones as the strings
/// [`format_number`] produces, since JSON has no Infinity or NaN.
#[cfg(feature = "serde")]
pub fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_str(&format_number(*value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_number() {
        let cases = [
            (12.0, "12"),
            (-3.0, "-3"),
            (0.5, "0.5"),
            (0.1 + 0.2, "0.30000000000000004"),
            (-0.0, "0"),
            (f64::INFINITY, "Infinity"),
            (f64::NEG_INFINITY, "-Infinity"),
            (f64::NAN, "NaN"),
            (1e21, "1e+21"),
            (2.5e30, "2.5e+30"),
            (1.5e-7, "1.5e-7"),
            (0.000001, "0.000001"),
            (123456789.0, "123456789"),
        ];
        for (value, expected) in cases {
            assert_eq!(format_number(value), expected, "formatting {value:?}");
        }
    }

    #[test]
    fn test_step_display() {
        let step = EvaluationStep::apply(3.0, Operator::Mul, 4.0);
        assert_eq!(step.result, 12.0);
        assert_eq!(step.to_string(), "3 * 4 = 12");

        let step = EvaluationStep::apply(1.0, Operator::Div, 0.0);
        assert_eq!(step.to_string(), "1 / 0 = Infinity");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_non_finite_steps_serialize_as_strings() {
        let step = EvaluationStep::apply(0.0, Operator::Div, 0.0);
        assert_eq!(
            serde_json::to_value(step).unwrap(),
            serde_json::json!({ "operand1": 0.0, "operator": "/", "operand2": 0.0, "result": "NaN" })
        );

        let step = EvaluationStep::apply(-1.0, Operator::Div, 0.0);
        assert_eq!(serde_json::to_value(step).unwrap()["result"], "-Infinity");
    }
}
