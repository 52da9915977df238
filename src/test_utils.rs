use crate::blocking::{clamp, ItemSource};
use std::cell::{Cell, RefCell};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the backend is unavailable")]
pub struct Unavailable;

/// Numbers `0..amount` which remember how they were queried.
#[derive(Debug)]
pub struct NumbersSource {
    numbers: Vec<usize>,
    count_calls: Cell<usize>,
    items_calls: RefCell<Vec<(usize, usize)>>,
    failing: Cell<bool>,
}

impl NumbersSource {
    pub fn new(amount: usize) -> Self {
        Self {
            numbers: (0..amount).collect(),
            count_calls: Cell::new(0),
            items_calls: RefCell::new(Vec::new()),
            failing: Cell::new(false),
        }
    }

    pub fn failing(amount: usize) -> Self {
        let source = Self::new(amount);
        source.set_failing(true);
        source
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    pub fn count_calls(&self) -> usize {
        self.count_calls.get()
    }

    pub fn items_calls(&self) -> Vec<(usize, usize)> {
        self.items_calls.borrow().clone()
    }
}

impl ItemSource for NumbersSource {
    type Items<'a> = std::iter::Copied<std::slice::Iter<'a, usize>> where Self: 'a;
    type Error = Unavailable;

    fn count(&self) -> Result<usize, Unavailable> {
        self.count_calls.set(self.count_calls.get() + 1);

        if self.failing.get() {
            return Err(Unavailable);
        }

        Ok(self.numbers.len())
    }

    fn items(&self, offset: usize, limit: usize) -> Result<Self::Items<'_>, Unavailable> {
        self.items_calls.borrow_mut().push((offset, limit));

        if self.failing.get() {
            return Err(Unavailable);
        }

        Ok(self.numbers[clamp(offset, limit, self.numbers.len())]
            .iter()
            .copied())
    }
}

#[cfg(feature = "stream")]
pub use self::stream::AsyncNumbersSource;

#[cfg(feature = "stream")]
mod stream {
    use super::Unavailable;
    use crate::blocking::clamp;
    use crate::stream::StreamSource;
    use futures::stream::{self, Stream};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// The async twin of [`NumbersSource`](super::NumbersSource).
    #[derive(Debug)]
    pub struct AsyncNumbersSource {
        numbers: Vec<usize>,
        count_calls: AtomicUsize,
        items_calls: Mutex<Vec<(usize, usize)>>,
        failing: AtomicBool,
    }

    impl AsyncNumbersSource {
        pub fn new(amount: usize) -> Self {
            Self {
                numbers: (0..amount).collect(),
                count_calls: AtomicUsize::new(0),
                items_calls: Mutex::new(Vec::new()),
                failing: AtomicBool::new(false),
            }
        }

        pub fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        pub fn count_calls(&self) -> usize {
            self.count_calls.load(Ordering::SeqCst)
        }

        pub fn items_calls(&self) -> Vec<(usize, usize)> {
            self.items_calls.lock().unwrap().clone()
        }
    }

    impl StreamSource for AsyncNumbersSource {
        type Item = usize;
        type Error = Unavailable;

        async fn count(&self) -> Result<usize, Unavailable> {
            self.count_calls.fetch_add(1, Ordering::SeqCst);

            if self.failing.load(Ordering::SeqCst) {
                return Err(Unavailable);
            }

            Ok(self.numbers.len())
        }

        fn items(
            &self,
            offset: usize,
            limit: usize,
        ) -> impl Send + Stream<Item = Result<usize, Unavailable>> {
            self.items_calls.lock().unwrap().push((offset, limit));

            let failing = self.failing.load(Ordering::SeqCst);
            let page = &self.numbers[clamp(offset, limit, self.numbers.len())];

            stream::iter(page.iter().map(move |number| {
                if failing {
                    Err(Unavailable)
                } else {
                    Ok(*number)
                }
            }))
        }
    }
}
