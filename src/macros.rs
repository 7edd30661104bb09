#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Declare one stage of the suffix cascade.
///
/// ```ignore
/// rule! {
///     name: "ment",
///     flag: RuleSet::MENT,
///     suffixes: ["ment"],
///     transform: crate::rules::nominal::ment,
/// }
/// ```
macro_rules! rule {
    (
        name: $name:expr,
        flag: $flag:expr,
        suffixes: [ $($suffix:literal),* $(,)? ],
        transform: $transform:path
        $(,)?
    ) => {
        $crate::Rule { name: $name, flag: $flag, suffixes: &[ $($suffix),* ], transform: $transform }
    };
}
