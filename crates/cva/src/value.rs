//! The [`ClassValue`] input type.
//!
//! Everything that can be handed to [`join`](crate::join) or used as a
//! variant option, default, or prop is a `ClassValue`. The type is a closed
//! tree: scalars, ordered lists, and insertion-ordered keyed maps, plus two
//! markers standing in for callables and opaque objects.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

/// A value that can contribute class tokens.
///
/// How each variant contributes is described on [`join`](crate::join).
/// Most callers build values through the `From` conversions:
///
/// ```rust
/// use cva::ClassValue;
///
/// assert_eq!(ClassValue::from("btn"), ClassValue::Str("btn".into()));
/// assert_eq!(ClassValue::from(4), ClassValue::Int(4));
/// assert_eq!(ClassValue::from(None::<&str>), ClassValue::Null);
/// assert_eq!(
///     ClassValue::from(vec!["a", "b"]),
///     ClassValue::List(vec!["a".into(), "b".into()]),
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ClassValue {
    /// Absent or explicitly empty. Contributes nothing.
    #[default]
    Null,
    /// A boolean gate. Only meaningful as a keyed-map value.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A class string.
    Str(String),
    /// An ordered sequence, flattened in place.
    List(Vec<ClassValue>),
    /// Keys included when their value holds.
    Map(IndexMap<String, ClassValue>),
    /// A callable reference. Contributes the token `function`.
    Function,
    /// Any other object reference. Contributes the token `emptyObject`.
    Opaque,
}

impl ClassValue {
    /// Returns `true` for [`ClassValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, ClassValue::Null)
    }

    /// Returns `true` for lists and maps, empty or not.
    pub fn is_container(&self) -> bool {
        matches!(self, ClassValue::List(_) | ClassValue::Map(_))
    }

    /// Standard truthiness.
    ///
    /// | Value | Truthy when |
    /// |-------|-------------|
    /// | `Null` | never |
    /// | `Bool` | `true` |
    /// | `Int` | non-zero |
    /// | `Float` | non-zero and not NaN |
    /// | `Str` | non-empty |
    /// | `List` / `Map` | non-empty |
    /// | `Function` / `Opaque` | always |
    pub fn is_truthy(&self) -> bool {
        match self {
            ClassValue::Null => false,
            ClassValue::Bool(b) => *b,
            ClassValue::Int(i) => *i != 0,
            ClassValue::Float(f) => *f != 0.0 && !f.is_nan(),
            ClassValue::Str(s) => !s.is_empty(),
            ClassValue::List(items) => !items.is_empty(),
            ClassValue::Map(entries) => !entries.is_empty(),
            ClassValue::Function | ClassValue::Opaque => true,
        }
    }

    /// `Null` or the empty string: a prop carrying no choice.
    pub(crate) fn is_blank(&self) -> bool {
        match self {
            ClassValue::Null => true,
            ClassValue::Str(s) => s.is_empty(),
            _ => false,
        }
    }

    /// The canonical key this value selects in a variant's option table.
    ///
    /// Strings are used as-is, numbers use their canonical string form (so
    /// `4`, `4.0` and `"4"` all select the option declared as `4`), and
    /// booleans become `"true"` / `"false"`. Null, containers and markers
    /// select nothing.
    pub fn variant_key(&self) -> Option<String> {
        match self {
            ClassValue::Str(s) => Some(s.clone()),
            ClassValue::Int(i) => Some(i.to_string()),
            ClassValue::Float(f) if !f.is_nan() => Some(canonical_float(*f)),
            ClassValue::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// Formats a float the way it is spelled as a class token or option key.
///
/// Integral values print without a fractional part, which keeps `2.0` and
/// `2` interchangeable.
pub(crate) fn canonical_float(f: f64) -> String {
    if f.is_infinite() {
        let sign = if f > 0.0 { "" } else { "-" };
        format!("{sign}INF")
    } else if f.fract() == 0.0 && f.abs() < 1e15 {
        (f as i64).to_string()
    } else {
        f.to_string()
    }
}

impl From<&str> for ClassValue {
    fn from(s: &str) -> Self {
        ClassValue::Str(s.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(s: String) -> Self {
        ClassValue::Str(s)
    }
}

impl From<&String> for ClassValue {
    fn from(s: &String) -> Self {
        ClassValue::Str(s.clone())
    }
}

impl From<bool> for ClassValue {
    fn from(b: bool) -> Self {
        ClassValue::Bool(b)
    }
}

macro_rules! from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ClassValue {
                fn from(n: $ty) -> Self {
                    ClassValue::Int(i64::from(n))
                }
            }
        )*
    };
}

from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for ClassValue {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(i) => ClassValue::Int(i),
            Err(_) => ClassValue::Float(n as f64),
        }
    }
}

impl From<usize> for ClassValue {
    fn from(n: usize) -> Self {
        ClassValue::from(n as u64)
    }
}

impl From<f32> for ClassValue {
    fn from(f: f32) -> Self {
        ClassValue::Float(f64::from(f))
    }
}

impl From<f64> for ClassValue {
    fn from(f: f64) -> Self {
        ClassValue::Float(f)
    }
}

impl From<()> for ClassValue {
    fn from(_: ()) -> Self {
        ClassValue::Null
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ClassValue::Null, Into::into)
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(items: Vec<T>) -> Self {
        ClassValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassValue>, const N: usize> From<[T; N]> for ClassValue {
    fn from(items: [T; N]) -> Self {
        ClassValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<IndexMap<String, ClassValue>> for ClassValue {
    fn from(entries: IndexMap<String, ClassValue>) -> Self {
        ClassValue::Map(entries)
    }
}

impl<K, V> FromIterator<(K, V)> for ClassValue
where
    K: Into<String>,
    V: Into<ClassValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ClassValue::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<serde_json::Value> for ClassValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => ClassValue::Null,
            Value::Bool(b) => ClassValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => ClassValue::Int(i),
                None => n.as_f64().map_or(ClassValue::Null, ClassValue::Float),
            },
            Value::String(s) => ClassValue::Str(s),
            Value::Array(items) => ClassValue::List(items.into_iter().map(Into::into).collect()),
            Value::Object(entries) => ClassValue::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, ClassValue::from(v)))
                    .collect(),
            ),
        }
    }
}

struct ClassValueVisitor;

impl<'de> Visitor<'de> for ClassValueVisitor {
    type Value = ClassValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a class string, number, boolean, null, sequence or map")
    }

    fn visit_unit<E: de::Error>(self) -> Result<ClassValue, E> {
        Ok(ClassValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<ClassValue, E> {
        Ok(ClassValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<ClassValue, D::Error> {
        ClassValue::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<ClassValue, E> {
        Ok(ClassValue::Bool(b))
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<ClassValue, E> {
        Ok(ClassValue::Int(n))
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> Result<ClassValue, E> {
        Ok(ClassValue::from(n))
    }

    fn visit_f64<E: de::Error>(self, f: f64) -> Result<ClassValue, E> {
        Ok(ClassValue::Float(f))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<ClassValue, E> {
        Ok(ClassValue::Str(s.to_string()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<ClassValue, E> {
        Ok(ClassValue::Str(s))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<ClassValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(ClassValue::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ClassValue, A::Error> {
        let mut entries = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<Key, ClassValue>()? {
            entries.insert(key.0, value);
        }
        Ok(ClassValue::Map(entries))
    }
}

impl<'de> Deserialize<'de> for ClassValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ClassValueVisitor)
    }
}

/// A map key canonicalized to a string.
///
/// YAML allows `4: m-4` or `true: on` as keys; both land here as `"4"` and
/// `"true"`, matching [`ClassValue::variant_key`].
#[doc(hidden)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key(pub(crate) String);

struct KeyVisitor;

impl Visitor<'_> for KeyVisitor {
    type Value = Key;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number or boolean key")
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<Key, E> {
        Ok(Key(b.to_string()))
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<Key, E> {
        Ok(Key(n.to_string()))
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> Result<Key, E> {
        Ok(Key(n.to_string()))
    }

    fn visit_f64<E: de::Error>(self, f: f64) -> Result<Key, E> {
        Ok(Key(canonical_float(f)))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Key, E> {
        Ok(Key(s.to_string()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<Key, E> {
        Ok(Key(s))
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(KeyVisitor)
    }
}
