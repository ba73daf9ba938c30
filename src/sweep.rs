use std::ops::RangeInclusive;

use tracing::debug;

use crate::errors::{Error, Result};
use crate::simulate::RoundCount;
use crate::Method;

/// Parse `A..B` (exclusive) or `A..=B` (inclusive) into an inclusive range of
/// deck sizes
pub fn parse_range(s: &str) -> Result<RangeInclusive<usize>> {
    let invalid = || Error::InvalidRange(s.to_owned());
    let (start, end, inclusive) = if let Some(i) = s.find("..=") {
        (&s[..i], &s[i + 3..], true)
    } else if let Some(i) = s.find("..") {
        (&s[..i], &s[i + 2..], false)
    } else {
        return Err(invalid());
    };
    let start: usize = start.trim().parse().map_err(|_| invalid())?;
    let end: usize = end.trim().parse().map_err(|_| invalid())?;
    let end = if inclusive {
        end
    } else {
        end.checked_sub(1).ok_or_else(invalid)?
    };
    if start == 0 || start > end {
        return Err(invalid());
    }
    Ok(start..=end)
}

#[cfg(feature = "parallel")]
pub fn sweep(sizes: RangeInclusive<usize>, method: Method) -> Result<Vec<(usize, RoundCount)>> {
    use rayon::prelude::*;
    debug!(start = sizes.start(), end = sizes.end(), ?method, "sweep");
    sizes
        .into_par_iter()
        .map(|cards| method.rounds(cards).map(|rounds| (cards, rounds)))
        .collect()
}

#[cfg(not(feature = "parallel"))]
pub fn sweep(sizes: RangeInclusive<usize>, method: Method) -> Result<Vec<(usize, RoundCount)>> {
    debug!(start = sizes.start(), end = sizes.end(), ?method, "sweep");
    sizes
        .map(|cards| method.rounds(cards).map(|rounds| (cards, rounds)))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("1..5").unwrap(), 1..=4);
        assert_eq!(parse_range("1..=5").unwrap(), 1..=5);
        assert_eq!(parse_range(" 3 ..= 3").unwrap(), 3..=3);
        assert!(matches!(parse_range("0..5"), Err(Error::InvalidRange(_))));
        assert!(matches!(parse_range("5..5"), Err(Error::InvalidRange(_))));
        assert!(matches!(parse_range("5..2"), Err(Error::InvalidRange(_))));
        assert!(matches!(parse_range("a..2"), Err(Error::InvalidRange(_))));
        assert!(matches!(parse_range("12"), Err(Error::InvalidRange(_))));
    }

    #[test]
    fn test_sweep_in_order() {
        let rows = sweep(1..=6, Method::Simulate).unwrap();
        assert_eq!(
            rows,
            vec![(1, 1), (2, 1), (3, 1), (4, 10), (5, 17), (6, 12)]
        );
        assert_eq!(sweep(1..=6, Method::Cycles).unwrap(), rows);
    }
}
