//! Equality matcher untuk dipakai bersama slice helpers

/// Matcher yang cocok jika string sama persis dengan `test`
pub fn string_matcher(test: impl Into<String>) -> impl Fn(&str) -> bool {
    let test = test.into();
    move |v| v == test
}

/// Matcher yang cocok jika nilai sama dengan `test`
pub fn eq_matcher<T: PartialEq>(test: T) -> impl Fn(&T) -> bool {
    move |v| *v == test
}
