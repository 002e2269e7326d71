use rand::{
    distributions::{Distribution, Standard},
    Rng, SeedableRng,
};

/// deterministically applies an operation to a target returning the result
pub trait Operation<Target> {
    type Result: Sized;
    fn apply(&self, target: &mut Target) -> Self::Result;
}

// deterministically generates a sequence of operations paired with the result
// the reference implementation produced for each
pub trait OperationGenerator<R>:
    Iterator<Item = (Self::Operation, Self::Result)> + Sized
where
    R: Rng + SeedableRng,
{
    type Operation;
    type Result;
    type ReferenceImpl;
    fn from_seed(seed: R::Seed) -> Self;
    fn data(self) -> Self::ReferenceImpl;
}

// extends operation generator so that it can be created from a random seed if the seed can be randomly generated.
pub trait RandomOperationGenerator<R: SeedableRng + Rng>: OperationGenerator<R>
where
    Standard: Distribution<R::Seed>,
{
    fn random() -> (R::Seed, Self)
    where
        R::Seed: Clone,
    {
        let seed: R::Seed = rand::thread_rng().gen();
        (seed.clone(), Self::from_seed(seed))
    }
}

impl<R, G: OperationGenerator<R>> RandomOperationGenerator<R> for G
where
    R: SeedableRng + Rng,
    Standard: Distribution<R::Seed>,
{
}

pub use impls::*;
mod impls {
    use super::*;
    use linked_list::{EmptyContainer, Stack};
    use rand::rngs::StdRng;

    /// percentage weights, in order: push, pop, peek, is_empty, clean
    const WEIGHTS: [u32; 5] = [50, 30, 14, 5, 1];

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum StackOperation<T> {
        Push(T),
        Pop,
        Peek,
        IsEmpty,
        Clean,
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum StackOutcome<T> {
        Pushed,
        Popped(Option<T>),
        Peeked(Result<T, EmptyContainer>),
        IsEmpty(bool),
        Cleaned,
    }

    impl<S, T> Operation<S> for StackOperation<T>
    where
        S: Stack<T>,
        T: Clone,
    {
        type Result = StackOutcome<T>;

        fn apply(&self, stack: &mut S) -> Self::Result {
            match self {
                Self::Push(value) => {
                    stack.push(value.clone());
                    StackOutcome::Pushed
                }
                Self::Pop => StackOutcome::Popped(stack.pop()),
                Self::Peek => StackOutcome::Peeked(stack.peek()),
                Self::IsEmpty => StackOutcome::IsEmpty(stack.is_empty()),
                Self::Clean => {
                    stack.clean();
                    StackOutcome::Cleaned
                }
            }
        }
    }

    /// Generates stack operations and replays each on a `Vec` to get the
    /// expected outcome.
    pub struct StackOperationGenerator<T, R = StdRng>
    where
        R: Rng + SeedableRng,
    {
        rng: R,
        data: Vec<T>,
    }

    impl<T, R> StackOperationGenerator<T, R>
    where
        R: Rng + SeedableRng,
        Standard: Distribution<T>,
    {
        fn next_operation(&mut self) -> StackOperation<T> {
            let mut roll = self.rng.gen_range(0..WEIGHTS.iter().sum::<u32>());
            let mut choice = 0;
            while roll >= WEIGHTS[choice] {
                roll -= WEIGHTS[choice];
                choice += 1;
            }
            match choice {
                0 => StackOperation::Push(self.rng.gen()),
                1 => StackOperation::Pop,
                2 => StackOperation::Peek,
                3 => StackOperation::IsEmpty,
                _ => StackOperation::Clean,
            }
        }
    }

    impl<T, R> OperationGenerator<R> for StackOperationGenerator<T, R>
    where
        R: Rng + SeedableRng,
        T: Clone,
        Standard: Distribution<T>,
    {
        type Operation = StackOperation<T>;
        type Result = StackOutcome<T>;
        type ReferenceImpl = Vec<T>;
        fn from_seed(seed: R::Seed) -> Self {
            Self {
                rng: R::from_seed(seed),
                data: Vec::new(),
            }
        }
        fn data(self) -> Self::ReferenceImpl {
            self.data
        }
    }

    impl<T, R> Iterator for StackOperationGenerator<T, R>
    where
        R: Rng + SeedableRng,
        T: Clone,
        Standard: Distribution<T>,
    {
        type Item = (StackOperation<T>, StackOutcome<T>);

        fn next(&mut self) -> Option<Self::Item> {
            let op = self.next_operation();
            let res = op.apply(&mut self.data);
            Some((op, res))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn same_seed_same_sequence() {
            let a: Vec<_> = StackOperationGenerator::<u16, StdRng>::from_seed([3; 32])
                .take(500)
                .collect();
            let b: Vec<_> = StackOperationGenerator::<u16, StdRng>::from_seed([3; 32])
                .take(500)
                .collect();
            assert_eq!(a, b);
        }

        #[test]
        fn every_operation_kind_is_generated() {
            let ops: Vec<_> = StackOperationGenerator::<u8, StdRng>::from_seed([9; 32])
                .take(5_000)
                .map(|(op, _)| op)
                .collect();
            assert!(ops.iter().any(|op| matches!(op, StackOperation::Push(_))));
            assert!(ops.contains(&StackOperation::Pop));
            assert!(ops.contains(&StackOperation::Peek));
            assert!(ops.contains(&StackOperation::IsEmpty));
            assert!(ops.contains(&StackOperation::Clean));
        }

        #[test]
        fn reference_outcomes() {
            let mut data: Vec<u8> = Vec::new();
            assert_eq!(
                StackOperation::<u8>::Peek.apply(&mut data),
                StackOutcome::Peeked(Err(EmptyContainer))
            );
            assert_eq!(
                StackOperation::<u8>::Pop.apply(&mut data),
                StackOutcome::Popped(None)
            );
            assert_eq!(StackOperation::Push(4u8).apply(&mut data), StackOutcome::Pushed);
            assert_eq!(
                StackOperation::<u8>::Peek.apply(&mut data),
                StackOutcome::Peeked(Ok(4))
            );
            assert_eq!(
                StackOperation::<u8>::IsEmpty.apply(&mut data),
                StackOutcome::IsEmpty(false)
            );
            assert_eq!(
                StackOperation::<u8>::Clean.apply(&mut data),
                StackOutcome::Cleaned
            );
            assert!(data.is_empty());
        }
    }
}
