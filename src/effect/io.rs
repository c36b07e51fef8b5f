//! Io - deferred, replayable side effects.
//!
//! An `Io<A>` stores a thunk that produces an `A`. Building an `Io` (with
//! [`Io::new`] or any combinator) performs no effect; [`Io::run`] executes the
//! thunk from scratch every time it is called. Nothing is memoized, so running
//! the same value twice performs its effects twice.
//!
//! # Examples
//!
//! ```rust
//! use fpkernel::effect::Io;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//!
//! let first = {
//!     let log = Rc::clone(&log);
//!     Io::new(move || log.borrow_mut().push("a"))
//! };
//! let second = {
//!     let log = Rc::clone(&log);
//!     Io::new(move || log.borrow_mut().push("b"))
//! };
//!
//! let both = first.then(second);
//! assert!(log.borrow().is_empty());
//!
//! both.run();
//! assert_eq!(*log.borrow(), ["a", "b"]);
//!
//! both.run();
//! assert_eq!(*log.borrow(), ["a", "b", "a", "b"]);
//! ```
//!
//! # Failures
//!
//! [`Io::run`] does not catch anything: a panic inside the thunk propagates to
//! the caller. [`Io::attempt`] opts into the guarded boundary and yields a
//! [`Try`] instead.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::compose::constant;
use crate::control::Try;

/// A deferred computation producing `A`, re-executed on every run.
///
/// Clones share the same thunk. `Io` is single-threaded: it is neither `Send`
/// nor `Sync`.
///
/// Combinators take `Fn` closures rather than `FnOnce` because a continuation
/// runs once per [`run`](Self::run), not once in total.
///
/// # Monad Laws
///
/// Observed through `run`:
///
/// 1. **Left Identity**: `Io::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(Io::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
#[must_use]
pub struct Io<A> {
    run_io: Rc<dyn Fn() -> A>,
}

impl<A: 'static> Io<A> {
    /// Wraps `action` without running it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkernel::effect::Io;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let runs = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&runs);
    /// let io = Io::new(move || {
    ///     counter.set(counter.get() + 1);
    ///     counter.get()
    /// });
    ///
    /// assert_eq!(runs.get(), 0);
    /// assert_eq!(io.run(), 1);
    /// assert_eq!(io.run(), 2);
    /// ```
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self {
            run_io: Rc::new(action),
        }
    }

    /// Wraps a value; every run returns a clone of it.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move || value.clone())
    }

    /// Executes the thunk and returns its result.
    ///
    /// Effects happen exactly once per call. Panics are not caught.
    pub fn run(&self) -> A {
        (self.run_io)()
    }

    /// Maps the result of every run through `function`.
    pub fn fmap<B, F>(self, function: F) -> Io<B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        Io::new(move || function(self.run()))
    }

    /// Runs `self`, then the `Io` that `function` builds from its result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkernel::effect::Io;
    ///
    /// let greeting = Io::pure("world").flat_map(|name| Io::new(move || format!("hello {name}")));
    /// assert_eq!(greeting.run(), "hello world");
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Io<B>
    where
        B: 'static,
        F: Fn(A) -> Io<B> + 'static,
    {
        Io::new(move || function(self.run()).run())
    }

    /// Alias for [`flat_map`](Self::flat_map).
    pub fn and_then<B, F>(self, function: F) -> Io<B>
    where
        B: 'static,
        F: Fn(A) -> Io<B> + 'static,
    {
        self.flat_map(function)
    }

    /// Runs `self` for its effects, then `next`.
    pub fn then<B>(self, next: Io<B>) -> Io<B>
    where
        B: 'static,
    {
        self.flat_map(constant(next))
    }

    /// Runs `self` then `other` and combines their results.
    pub fn map2<B, C, F>(self, other: Io<B>, function: F) -> Io<C>
    where
        B: 'static,
        C: 'static,
        F: Fn(A, B) -> C + 'static,
    {
        Io::new(move || {
            let first = self.run();
            let second = other.run();
            function(first, second)
        })
    }

    /// Runs `self` then `other` and pairs their results.
    pub fn product<B>(self, other: Io<B>) -> Io<(A, B)>
    where
        B: 'static,
    {
        self.map2(other, |first, second| (first, second))
    }

    /// Runs the thunk inside the guarded boundary.
    ///
    /// A panic raised while running becomes a `Failure` holding a
    /// [`Panic`](crate::control::Panic) instead of unwinding into the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkernel::effect::Io;
    ///
    /// let risky: Io<i32> = Io::new(|| panic!("sensor offline"));
    /// let outcome = risky.attempt().run();
    /// assert!(outcome.is_failure());
    /// ```
    pub fn attempt(self) -> Io<Try<A>> {
        Io::new(move || Try::guard(|| self.run()))
    }
}

// =============================================================================
// Convenience Constructors
// =============================================================================

impl Io<()> {
    /// Prints `message` to standard output on every run.
    ///
    /// ```rust,no_run
    /// use fpkernel::effect::Io;
    ///
    /// let hello = Io::print_line("Hello, World!");
    /// hello.run();
    /// ```
    pub fn print_line<S>(message: S) -> Self
    where
        S: fmt::Display + 'static,
    {
        Self::new(move || {
            println!("{message}");
        })
    }

    /// Sleeps the current thread for `duration` on every run.
    pub fn delay(duration: Duration) -> Self {
        Self::new(move || {
            std::thread::sleep(duration);
        })
    }
}

impl<A> Clone for Io<A> {
    fn clone(&self) -> Self {
        Self {
            run_io: Rc::clone(&self.run_io),
        }
    }
}

impl<A> fmt::Debug for Io<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Io").finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Io<i32>: Clone);
static_assertions::assert_not_impl_any!(Io<i32>: Send, Sync);
