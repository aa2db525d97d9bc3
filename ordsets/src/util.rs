macro_rules! impl_iterator {
    () => {
        impl_iterator!(|x| x);
    };
    ($f: expr) => {
        fn next(&mut self) -> Option<Self::Item> {
            self.inner.next().map($f)
        }
        fn size_hint(&self) -> (usize, Option<usize>) {
            self.inner.size_hint()
        }
        fn count(self) -> usize {
            self.inner.count()
        }
        fn nth(&mut self, n: usize) -> Option<Self::Item> {
            self.inner.nth(n).map($f)
        }
        fn last(self) -> Option<Self::Item> {
            self.inner.last().map($f)
        }
    };
}
pub(crate) use impl_iterator;

macro_rules! impl_double_ended_iterator {
    () => {
        impl_double_ended_iterator!(|x| x);
    };
    ($f: expr) => {
        fn next_back(&mut self) -> Option<Self::Item> {
            self.inner.next_back().map($f)
        }
        fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
            self.inner.nth_back(n).map($f)
        }
    };
}
pub(crate) use impl_double_ended_iterator;

#[cfg(test)]
macro_rules! weighted_choose {
    ($rng:expr, $($name:ident: $weight:expr => $body:expr),+) => {
        {
            enum Branches { $( $name,  )* }
            let weights = [$((Branches::$name, $weight)),+];
            match weights.choose_weighted($rng, |x| x.1).unwrap().0 {
                $(Branches::$name => $body),*
            }
        }
    }
}
#[cfg(test)]
pub(crate) use weighted_choose;
