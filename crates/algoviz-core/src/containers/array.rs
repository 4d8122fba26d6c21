//! Contiguous typed buffer.

use crate::observer::SortObserver;
use crate::render::RenderedText;
use crate::sorting::{SortAlgorithm, SortOutcome, sort_by};
use algoviz_common::{Error, RandomProfile, Result, Value, ValueGenerator, ValueType};

/// Element count above which rendering drops accent hints.
pub const ARRAY_STYLED_LIMIT: usize = 3000;

const SEPARATOR: &str = "   ";

/// A fixed-size buffer of values of one kind.
///
/// The buffer is allocated once at its final size. `Clone` is a deep copy:
/// text elements are duplicated, so the copies never share storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Array {
    value_type: ValueType,
    elements: Box<[Value]>,
}

impl Array {
    /// Creates an array of `size` default values (zero, or NULL text).
    #[must_use]
    pub fn new(value_type: ValueType, size: usize) -> Self {
        Self {
            value_type,
            elements: vec![value_type.default_value(); size].into_boxed_slice(),
        }
    }

    /// Creates an array from existing values.
    ///
    /// # Errors
    ///
    /// Returns `Error::TypeMismatch` if any value is not of `value_type`.
    pub fn from_values(value_type: ValueType, values: Vec<Value>) -> Result<Self> {
        for v in &values {
            Error::check_type(value_type, v.value_type())?;
        }
        Ok(Self {
            value_type,
            elements: values.into_boxed_slice(),
        })
    }

    /// Builds an array from whitespace-separated literals.
    #[must_use]
    pub fn parse(value_type: ValueType, input: &str) -> Self {
        Self {
            value_type,
            elements: value_type.parse_tokens(input).into_boxed_slice(),
        }
    }

    /// Replaces every element with a fresh random value.
    pub fn fill_random(&mut self, generator: &mut ValueGenerator) {
        let ty = self.value_type;
        for slot in &mut self.elements {
            *slot = generator.value(ty, RandomProfile::Sequence);
        }
    }

    /// Returns the element kind.
    #[inline]
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the array has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the elements.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.elements
    }

    /// Returns the element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements.get(index)
    }

    /// Overwrites the element at `index`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidIndex` if `index` is out of range, or
    /// `Error::TypeMismatch` if `value` is of another kind.
    pub fn set(&mut self, index: usize, value: Value) -> Result<Value> {
        Error::check_type(self.value_type, value.value_type())?;
        let len = self.elements.len();
        let slot = self
            .elements
            .get_mut(index)
            .ok_or(Error::InvalidIndex { index, len })?;
        Ok(std::mem::replace(slot, value))
    }

    /// Returns `true` if the elements are in non-decreasing order.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.elements
            .windows(2)
            .all(|w| w[0].compare(&w[1]).is_le())
    }

    /// Renders the elements separated by three spaces, quoting characters
    /// and text.
    ///
    /// With `styled`, every fourth element is accented, unless the array has
    /// more than [`ARRAY_STYLED_LIMIT`] elements. Every element is rendered
    /// either way.
    #[must_use]
    pub fn to_text(&self, styled: bool) -> RenderedText {
        self.to_text_with_limit(styled, ARRAY_STYLED_LIMIT)
    }

    /// Like [`to_text`](Self::to_text) with an explicit styling limit.
    #[must_use]
    pub fn to_text_with_limit(&self, styled: bool, limit: usize) -> RenderedText {
        let styled = styled && self.elements.len() <= limit;
        RenderedText::new(self.elements.iter().map(Value::render_literal), SEPARATOR, |i| {
            styled && i % 4 == 0
        })
    }

    /// Renders the elements as a bracketed literal, e.g. `['a', 'b']`.
    #[must_use]
    pub fn to_literal(&self) -> String {
        let items: Vec<String> = self.elements.iter().map(Value::render_literal).collect();
        format!("[{}]", items.join(", "))
    }

    /// Sorts the array in place with the type's comparator.
    pub fn sort<O>(&mut self, algorithm: SortAlgorithm, observer: &mut O) -> SortOutcome
    where
        O: SortObserver<Value> + ?Sized,
    {
        let outcome = sort_by(&mut self.elements, algorithm, Value::compare, observer);
        tracing::debug!(
            algorithm = algorithm.name(),
            len = self.elements.len(),
            elapsed_ns = outcome.elapsed_ns,
            "array sorted"
        );
        outcome
    }

    /// Consumes the array, returning its values.
    #[must_use]
    pub fn into_values(self) -> Vec<Value> {
        self.elements.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoopObserver;

    #[test]
    fn test_new_is_zeroed() {
        let ints = Array::new(ValueType::Integer, 3);
        assert_eq!(ints.as_slice(), &[const { Value::Integer(0) }; 3]);

        let texts = Array::new(ValueType::Text, 2);
        assert!(texts.as_slice().iter().all(|v| *v == Value::Text(None)));
    }

    #[test]
    fn test_bubble_example() {
        let mut arr = Array::parse(ValueType::Integer, "5 3 8 1");
        let outcome = arr.sort(SortAlgorithm::Bubble, &mut NoopObserver);
        assert_eq!(arr.to_text(false).to_string(), "1   3   5   8");
        assert_eq!(outcome.stats.passes, 3);
    }

    #[test]
    fn test_clone_is_deep() {
        let original = Array::parse(ValueType::Text, "pear apple");
        let mut copy = original.clone();
        copy.set(0, Value::text("zzz")).unwrap();
        assert_eq!(original.get(0), Some(&Value::text("pear")));
        assert_eq!(copy.get(0), Some(&Value::text("zzz")));
    }

    #[test]
    fn test_set_rejects_wrong_type_and_index() {
        let mut arr = Array::new(ValueType::Integer, 2);
        assert!(matches!(
            arr.set(0, Value::Float(1.0)),
            Err(Error::TypeMismatch { .. })
        ));
        assert_eq!(
            arr.set(5, Value::Integer(1)),
            Err(Error::InvalidIndex { index: 5, len: 2 })
        );
    }

    #[test]
    fn test_from_values_type_check() {
        let err = Array::from_values(ValueType::Integer, vec![Value::Integer(1), Value::text("x")]);
        assert!(err.is_err());
    }

    #[test]
    fn test_styling_threshold() {
        let mut generator = ValueGenerator::seeded(5);
        let mut small = Array::new(ValueType::Integer, 10);
        small.fill_random(&mut generator);
        let text = small.to_text(true);
        assert!(text.segments()[0].accent);
        assert!(!text.segments()[1].accent);
        assert!(text.segments()[4].accent);

        let mut big = Array::new(ValueType::Integer, ARRAY_STYLED_LIMIT + 1);
        big.fill_random(&mut generator);
        let text = big.to_text(true);
        assert!(!text.is_styled());
        assert_eq!(text.len(), ARRAY_STYLED_LIMIT + 1);
    }

    #[test]
    fn test_literal_rendering() {
        let arr = Array::parse(ValueType::Character, "b a");
        assert_eq!(arr.to_literal(), "['b', 'a']");
        assert_eq!(arr.to_text(false).to_string(), "'b'   'a'");

        let words = Array::from_values(ValueType::Text, vec![Value::text("hi"), Value::Text(None)]).unwrap();
        assert_eq!(words.to_text(false).to_string(), "\"hi\"   \"NULL\"");
    }

    #[test]
    fn test_sort_text_with_nulls() {
        let mut arr = Array::from_values(
            ValueType::Text,
            vec![Value::text("b"), Value::Text(None), Value::text("a")],
        )
        .unwrap();
        arr.sort(SortAlgorithm::Quick, &mut NoopObserver);
        assert_eq!(
            arr.as_slice(),
            &[Value::Text(None), Value::text("a"), Value::text("b")]
        );
        assert!(arr.is_sorted());
    }

    #[test]
    fn test_empty_sort_is_zero() {
        let mut arr = Array::new(ValueType::Float, 0);
        assert_eq!(arr.sort(SortAlgorithm::Shell, &mut NoopObserver), SortOutcome::default());
    }
}
