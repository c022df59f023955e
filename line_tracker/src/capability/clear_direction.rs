// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumString};

/// Which part of the cursor's row to clear. The numeric form (`-1`, `1`, `0`) is
/// accepted via [`TryFrom<i8>`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ClearDirection {
    /// From the start of the row up to and including the cursor.
    Before,
    /// From the cursor to the end of the row.
    After,
    #[default]
    EntireLine,
}

impl TryFrom<i8> for ClearDirection {
    type Error = i8;

    #[rustfmt::skip]
    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(ClearDirection::Before),
            1  => Ok(ClearDirection::After),
            0  => Ok(ClearDirection::EntireLine),
            _  => Err(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;
    use test_case::test_case;

    #[test_case(-1, Ok(ClearDirection::Before))]
    #[test_case(1, Ok(ClearDirection::After))]
    #[test_case(0, Ok(ClearDirection::EntireLine))]
    #[test_case(2, Err(2))]
    fn test_try_from_i8(value: i8, expected: Result<ClearDirection, i8>) {
        assert_eq!(ClearDirection::try_from(value), expected);
    }

    #[test]
    fn test_default_and_names() {
        assert_eq!(ClearDirection::default(), ClearDirection::EntireLine);
        assert_eq!(
            ClearDirection::from_str("before").unwrap(),
            ClearDirection::Before
        );
        assert_eq!(ClearDirection::EntireLine.to_string(), "entire_line");
    }
}
