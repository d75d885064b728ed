//! Macros for ergonomic automaton construction.

/// Build a [`TransitionTable`](crate::core::TransitionTable) from
/// `(state, symbol) => next` entries, in order.
///
/// # Example
///
/// ```
/// use dfa_sim::transitions;
///
/// let table = transitions! {
///     ("q0", "a") => "q1",
///     ("q1", "b") => "q1",
/// };
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.get("q0", "a"), Some("q1"));
/// ```
#[macro_export]
macro_rules! transitions {
    () => {
        $crate::core::TransitionTable::new()
    };
    ($(($from:expr, $symbol:expr) => $to:expr),+ $(,)?) => {{
        let mut table = $crate::core::TransitionTable::new();
        $(
            table.insert($from, $symbol, $to);
        )+
        table
    }};
}

/// Build an [`Automaton`](crate::core::Automaton) from a descriptor and a
/// transition block, without consistency checks.
///
/// # Example
///
/// ```
/// use dfa_sim::automaton;
///
/// let machine = automaton! {
///     name: "M",
///     states: ["q0", "q1"],
///     alphabet: ["a", "b"],
///     initial: "q0",
///     finals: ["q1"],
///     transitions: {
///         ("q0", "a") => "q1",
///         ("q1", "b") => "q1",
///     }
/// };
///
/// assert!(machine.accepts("ab").unwrap().is_accepted());
/// ```
#[macro_export]
macro_rules! automaton {
    (@set $($item:expr),*) => {{
        let items: ::std::vec::Vec<::std::string::String> =
            ::std::vec![$(::std::convert::Into::into($item)),*];
        items
    }};
    (
        name: $name:expr,
        states: [$($state:expr),* $(,)?],
        alphabet: [$($symbol:expr),* $(,)?],
        initial: $initial:expr,
        finals: [$($final:expr),* $(,)?],
        transitions: { $($body:tt)* } $(,)?
    ) => {
        $crate::core::Automaton::new(
            $crate::core::Descriptor::new(
                $name,
                $crate::automaton!(@set $($state),*),
                $crate::automaton!(@set $($symbol),*),
                $initial,
                $crate::automaton!(@set $($final),*),
            ),
            $crate::transitions! { $($body)* },
        )
    };
}
