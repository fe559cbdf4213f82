use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::Value;

use super::{BoxedMatcher, Matcher};

/// Create a [`ContainsExactly`] matcher from the passed `matchers`.
///
/// See [`contains_exactly!`](crate::contains_exactly) to mix matchers and raw
/// values.
pub fn contains_exactly<I>(matchers: I) -> ContainsExactly
where
    I: IntoIterator<Item = BoxedMatcher>,
{
    ContainsExactly(matchers.into_iter().collect())
}

/// Matcher that accepts iterable values whose elements can be paired one to
/// one with the inner matchers, in any order.
#[must_use]
pub struct ContainsExactly(Vec<BoxedMatcher>);

impl Matcher for ContainsExactly {
    fn matches(&self, value: &Value, mismatch: &mut Vec<String>) -> bool {
        let Some(elements) = value.elements() else {
            mismatch.push(format!("was not iterable (got: {value:?})"));

            return false;
        };

        let accepted = self
            .0
            .iter()
            .map(|matcher| {
                elements
                    .iter()
                    .map(|element| matcher.is_match(element))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let pairing = Pairing::find(&accepted, elements.len());

        if let Some(index) = pairing.unpaired_matcher() {
            mismatch.push(format!(
                "iterable did not contain element: {} (got: {value:?})",
                self.0[index]
            ));

            return false;
        }

        let extra = pairing
            .unpaired_elements()
            .map(|index| format!("{:?}", elements[index]))
            .collect::<Vec<_>>();
        if !extra.is_empty() {
            mismatch.push(format!(
                "iterable contained extra elements: {} (got: {value:?})",
                extra.join(", ")
            ));

            return false;
        }

        true
    }
}

impl Display for ContainsExactly {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let matchers = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "<iterable containing exactly: {matchers}>")
    }
}

/// Maximum pairing between matchers and the elements they accept.
struct Pairing {
    /// Element paired with each matcher.
    matchers: Vec<Option<usize>>,

    /// Matcher paired with each element.
    elements: Vec<Option<usize>>,
}

impl Pairing {
    /// `accepted[m][e]` is `true` if matcher `m` accepts element `e`.
    fn find(accepted: &[Vec<bool>], element_count: usize) -> Self {
        let mut pairing = Self {
            matchers: vec![None; accepted.len()],
            elements: vec![None; element_count],
        };

        for matcher in 0..accepted.len() {
            let mut visited = vec![false; element_count];
            pairing.augment(accepted, matcher, &mut visited);
        }

        pairing
    }

    fn augment(&mut self, accepted: &[Vec<bool>], matcher: usize, visited: &mut [bool]) -> bool {
        for element in 0..visited.len() {
            if !accepted[matcher][element] || visited[element] {
                continue;
            }

            visited[element] = true;

            let current = self.elements[element];
            let free = match current {
                None => true,
                Some(other) => self.augment(accepted, other, visited),
            };

            if free {
                self.matchers[matcher] = Some(element);
                self.elements[element] = Some(matcher);

                return true;
            }
        }

        false
    }

    fn unpaired_matcher(&self) -> Option<usize> {
        self.matchers.iter().position(Option::is_none)
    }

    fn unpaired_elements(&self) -> impl Iterator<Item = usize> + '_ {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, matcher)| matcher.is_none())
            .map(|(index, _)| index)
    }
}

/// Create a [`ContainsExactly`](crate::matcher::ContainsExactly) matcher from
/// matchers and raw values.
#[macro_export]
macro_rules! contains_exactly {
    ($( $matcher:expr ),* $(,)?) => {{
        let matchers: ::std::vec::Vec<$crate::matcher::BoxedMatcher> =
            ::std::vec![$( $crate::matcher::to_matcher($matcher) ),*];

        $crate::matcher::contains_exactly(matchers)
    }};
}
