//! Parsing vectors from their textual `{a,b,c}` form.

use std::str::FromStr;

use thiserror::Error;

use super::Vector;

/// Error returned when parsing a [`Vector`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseVectorError {
    #[error("vector must be enclosed in `{{` and `}}`")]
    MissingBraces,
    #[error("expected {expected} elements, found {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("invalid vector element at index {index}: `{text}`")]
    InvalidElement { index: usize, text: String },
}

/// Parses the format written by the [`Display`][std::fmt::Display] impl.
///
/// Whitespace around the braces and elements is ignored.
///
/// # Examples
///
/// ```
/// # use numerics::*;
/// let v: Vec3<i32> = "{1, 2, 3}".parse()?;
/// assert_eq!(v, vec3(1, 2, 3));
///
/// let err = "{1,2}".parse::<Vec3<i32>>().unwrap_err();
/// assert_eq!(err, ParseVectorError::WrongLength { expected: 3, found: 2 });
/// # Ok::<(), ParseVectorError>(())
/// ```
impl<T: FromStr, const N: usize> FromStr for Vector<T, N> {
    type Err = ParseVectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .ok_or(ParseVectorError::MissingBraces)?;

        let elements = if inner.trim().is_empty() {
            Vec::new()
        } else {
            inner
                .split(',')
                .enumerate()
                .map(|(index, text)| {
                    let text = text.trim();
                    text.parse().map_err(|_| ParseVectorError::InvalidElement {
                        index,
                        text: text.to_string(),
                    })
                })
                .collect::<Result<Vec<T>, _>>()?
        };

        let found = elements.len();
        let array = <[T; N]>::try_from(elements)
            .map_err(|_| ParseVectorError::WrongLength { expected: N, found })?;
        Ok(Self(array))
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec3, Vec2f, Vec3, Vector};

    use super::*;

    #[test]
    fn round_trip_display() {
        let v = vec3(1.5f32, -2.0, 1e-3);
        assert_eq!(v.to_string().parse::<Vec3<f32>>(), Ok(v));
    }

    #[test]
    fn whitespace() {
        assert_eq!(" { 1 ,2,  3 } ".parse(), Ok(vec3(1, 2, 3)));
        assert_eq!("{}".parse(), Ok(Vector::<u8, 0>::from([])));
    }

    #[test]
    fn errors() {
        assert_eq!(
            "1, 2".parse::<Vec2f>(),
            Err(ParseVectorError::MissingBraces)
        );
        assert_eq!(
            "{1,2,3}".parse::<Vec2f>(),
            Err(ParseVectorError::WrongLength {
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            "{1,x}".parse::<Vec2f>(),
            Err(ParseVectorError::InvalidElement {
                index: 1,
                text: "x".into()
            })
        );
        assert_eq!(
            "{}".parse::<Vec2f>(),
            Err(ParseVectorError::WrongLength {
                expected: 2,
                found: 0
            })
        );
        assert!("{,}".parse::<Vec2f>().is_err());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ParseVectorError::MissingBraces.to_string(),
            "vector must be enclosed in `{` and `}`"
        );
        assert_eq!(
            ParseVectorError::WrongLength {
                expected: 4,
                found: 1
            }
            .to_string(),
            "expected 4 elements, found 1"
        );
    }
}
