//! Lens optics for focusing on struct fields.
//!
//! A Lens provides get/set access to one field within a larger structure.
//! Where the console once addressed state slices by property name, a lens
//! names the slice as a typed accessor pair checked at compile time.
//!
//! # Laws
//!
//! Every Lens must satisfy three laws:
//!
//! 1. **GetPut Law**: Getting and setting back yields the original.
//!    ```text
//!    lens.set(source, lens.get(&source).clone()) == source
//!    ```
//!
//! 2. **PutGet Law**: Setting then getting yields the set value.
//!    ```text
//!    lens.get(&lens.set(source, value)) == &value
//!    ```
//!
//! 3. **PutPut Law**: Two consecutive sets is equivalent to the last set.
//!    ```text
//!    lens.set(lens.set(source, v1), v2) == lens.set(source, v2)
//!    ```

use std::marker::PhantomData;

/// A Lens focuses on a single field within a larger structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused field)
///
/// # Laws
///
/// 1. **GetPut Law**: `lens.set(source, lens.get(&source).clone()) == source`
/// 2. **PutGet Law**: `lens.get(&lens.set(source, value)) == &value`
/// 3. **PutPut Law**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`
pub trait Lens<S, A> {
    /// Gets a reference to the focused field.
    fn get<'a>(&self, source: &'a S) -> &'a A;

    /// Sets the focused field to a new value, returning a new source.
    ///
    /// The source is consumed; untouched fields move through.
    fn set(&self, source: S, value: A) -> S;

    /// Modifies the focused field by applying a function.
    ///
    /// Equivalent to getting the current value, applying the function, and
    /// setting the result.
    ///
    /// # Example
    ///
    /// ```
    /// use dirsync_console::optics::Lens;
    /// use dirsync_console::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Counter { value: i32 }
    ///
    /// let value = lens!(Counter, value);
    /// let doubled = value.modify(Counter { value: 10 }, |v| v * 2);
    /// assert_eq!(doubled.value, 20);
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let current = self.get(&source).clone();
        self.set(source, function(current))
    }

    /// Modifies the focused field by applying a function to a reference.
    ///
    /// Useful when the transformation only needs to read the current value.
    ///
    /// # Example
    ///
    /// ```
    /// use dirsync_console::optics::Lens;
    /// use dirsync_console::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Settings { hostname: String }
    ///
    /// let hostname = lens!(Settings, hostname);
    /// let settings = Settings { hostname: "proxy".to_string() };
    /// let upper = hostname.modify_ref(settings, |name| name.to_uppercase());
    /// assert_eq!(upper.hostname, "PROXY");
    /// ```
    fn modify_ref<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(&A) -> A,
    {
        let new_value = function(self.get(&source));
        self.set(source, new_value)
    }
}

/// A lens implemented using getter and setter functions.
///
/// This is the workhorse implementation; the [`lens!`](crate::lens) macro
/// generates one for a named struct field.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
/// - `G`: The getter function type
/// - `St`: The setter function type
///
/// # Example
///
/// ```
/// use dirsync_console::optics::{FunctionLens, Lens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = FunctionLens::new(
///     |point: &Point| &point.x,
///     |point: Point, x: i32| Point { x, ..point },
/// );
///
/// let point = Point { x: 10, y: 20 };
/// assert_eq!(*x_lens.get(&point), 10);
/// ```
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionLens` from a getter and setter.
    ///
    /// # Arguments
    ///
    /// * `getter` - Extracts a reference to the focused field
    /// * `setter` - Produces a new source with the field replaced
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FunctionLens").finish_non_exhaustive()
    }
}

/// Creates a lens for a named struct field.
///
/// Expands to a [`FunctionLens`] whose setter replaces the named field and
/// moves every other field through.
///
/// # Example
///
/// ```
/// use dirsync_console::optics::Lens;
/// use dirsync_console::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Settings { port: u16, hostname: String }
///
/// let port = lens!(Settings, port);
/// assert_eq!(*port.get(&Settings { port: 8080, hostname: String::new() }), 8080);
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}
