use crate::error::{PacketError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-axis coordinate as carried on the wire: `x` then `y`, each a signed 16-bit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Narrow a wider coordinate to the wire width, refusing to wrap.
fn narrow(axis: &'static str, value: i64) -> Result<i16> {
    i16::try_from(value).map_err(|_| PacketError::CoordinateOutOfRange { axis, value })
}

impl TryFrom<(i64, i64)> for Point {
    type Error = PacketError;

    fn try_from((x, y): (i64, i64)) -> Result<Self> {
        Ok(Self::new(narrow("x", x)?, narrow("y", y)?))
    }
}

impl TryFrom<(i32, i32)> for Point {
    type Error = PacketError;

    fn try_from((x, y): (i32, i32)) -> Result<Self> {
        Self::try_from((i64::from(x), i64::from(y)))
    }
}

impl From<Point> for (i16, i16) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(111, -222).to_string(), "(111, -222)");
    }

    #[test]
    #[allow(clippy::expect_used)]
    fn test_try_from_in_range() {
        let point = Point::try_from((111i32, 222i32)).expect("in range");
        assert_eq!(point, Point::new(111, 222));

        let edge = Point::try_from((i64::from(i16::MIN), i64::from(i16::MAX))).expect("edges");
        assert_eq!(edge, Point::new(i16::MIN, i16::MAX));
    }

    #[test]
    fn test_try_from_rejects_wide_values() {
        match Point::try_from((40_000i32, 0i32)) {
            Err(PacketError::CoordinateOutOfRange { axis, value }) => {
                assert_eq!(axis, "x");
                assert_eq!(value, 40_000);
            }
            other => panic!("unexpected: {other:?}"),
        }

        assert!(matches!(
            Point::try_from((0i64, -32_769i64)),
            Err(PacketError::CoordinateOutOfRange { axis: "y", .. })
        ));
    }
}
